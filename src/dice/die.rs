//! A single die.

use serde::{Deserialize, Serialize};

use super::face::Face;
use crate::core::RandomSource;

/// A die showing one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    face: Face,
}

impl Die {
    /// Roll a new die.
    ///
    /// Draws an index in `0..=5` from `rng`; out-of-range values wrap.
    pub fn roll(rng: &mut impl RandomSource) -> Self {
        Self {
            face: Face::from_index(rng.next_int(0, 5)),
        }
    }

    /// A die fixed to `face`.
    #[must_use]
    pub const fn with_face(face: Face) -> Self {
        Self { face }
    }

    /// Roll this die again.
    pub fn reroll(&mut self, rng: &mut impl RandomSource) {
        self.face = Face::from_index(rng.next_int(0, 5));
    }

    /// The face showing.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiceRng;

    struct Fixed(i64);

    impl RandomSource for Fixed {
        fn next_int(&mut self, _min: i64, _max: i64) -> i64 {
            self.0
        }
    }

    #[test]
    fn test_roll_maps_index_to_face() {
        assert_eq!(Die::roll(&mut Fixed(0)).face(), Face::Ace);
        assert_eq!(Die::roll(&mut Fixed(2)).face(), Face::Three);
        assert_eq!(Die::roll(&mut Fixed(5)).face(), Face::Six);
    }

    #[test]
    fn test_reroll() {
        let mut die = Die::with_face(Face::Two);
        die.reroll(&mut Fixed(4));
        assert_eq!(die.face(), Face::Five);
    }

    #[test]
    fn test_seeded_rolls_repeat() {
        let mut a = DiceRng::new(5);
        let mut b = DiceRng::new(5);

        let first: Vec<_> = (0..30).map(|_| Die::roll(&mut a).face()).collect();
        let second: Vec<_> = (0..30).map(|_| Die::roll(&mut b).face()).collect();

        assert_eq!(first, second);
    }
}
