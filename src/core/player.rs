//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting 1-255 players. Seats never move: an
//! eliminated player keeps its `PlayerId` for the rest of the match.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access, indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier. Indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a match with `player_count` players.
    ///
    /// ```
    /// use dudo::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(255) as u8).map(PlayerId)
    }

    /// The seat after this one, wrapping around `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count.max(1)) as u8)
    }

    /// The seat before this one, wrapping around `player_count`.
    #[must_use]
    pub fn previous(self, player_count: usize) -> Self {
        let count = player_count.max(1);
        Self(((self.index() + count - 1) % count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use dudo::core::{PlayerId, PlayerMap};
///
/// let mut bonus: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// bonus[PlayerId::new(1)] += 1;
/// assert_eq!(bonus[PlayerId::new(1)], 1);
/// assert!(bonus.try_get(PlayerId::new(7)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(player_count: usize, mut factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Whether `player` names a seat in this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a seat's data. Panics on an unknown seat.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data. Panics on an unknown seat.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Get a seat's data, or `None` for an unknown seat.
    #[must_use]
    pub fn try_get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Mutable variant of [`PlayerMap::try_get`].
    pub fn try_get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Mutable values in seat order, as a slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
