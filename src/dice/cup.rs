//! A player's cup of dice.
//!
//! The cup hides its dice until revealed. It never holds more than its
//! capacity; won dice beyond that are banked by the match as bonus dice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::die::Die;
use super::face::Face;
use crate::core::config::DEFAULT_CUP_CAPACITY;
use crate::core::{CupError, RandomSource};

type Dice = SmallVec<[Die; DEFAULT_CUP_CAPACITY]>;

/// An ordered set of dice owned by one player.
///
/// Deserialization rejects a cup holding more dice than its capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCup")]
pub struct Cup {
    dice: Dice,
    capacity: usize,
    visible: bool,
}

#[derive(Deserialize)]
struct RawCup {
    dice: Dice,
    capacity: usize,
    visible: bool,
}

impl TryFrom<RawCup> for Cup {
    type Error = CupError;

    fn try_from(raw: RawCup) -> Result<Self, Self::Error> {
        if raw.capacity == 0 {
            return Err(CupError::ZeroCapacity);
        }
        if raw.dice.len() > raw.capacity {
            return Err(CupError::Overfull {
                dice: raw.dice.len(),
                capacity: raw.capacity,
            });
        }
        Ok(Self {
            dice: raw.dice,
            capacity: raw.capacity,
            visible: raw.visible,
        })
    }
}

impl Cup {
    /// A full, hidden cup with the default capacity.
    pub fn new(rng: &mut impl RandomSource) -> Self {
        Self::with_dice(rng, DEFAULT_CUP_CAPACITY, DEFAULT_CUP_CAPACITY)
    }

    /// A hidden cup holding `count` freshly rolled dice (at most `capacity`).
    pub fn with_dice(rng: &mut impl RandomSource, count: usize, capacity: usize) -> Self {
        let dice = (0..count.min(capacity)).map(|_| Die::roll(rng)).collect();
        Self {
            dice,
            capacity,
            visible: false,
        }
    }

    /// A hidden cup holding exactly `faces`, truncated to `capacity`.
    #[must_use]
    pub fn from_faces(faces: &[Face], capacity: usize) -> Self {
        Self {
            dice: faces.iter().take(capacity).copied().map(Die::with_face).collect(),
            capacity,
            visible: false,
        }
    }

    /// Number of dice in the cup.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Maximum number of dice.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.dice.len() >= self.capacity
    }

    /// The faces showing, or `None` while the cup is hidden.
    #[must_use]
    pub fn faces(&self) -> Option<Vec<Face>> {
        self.visible
            .then(|| self.dice.iter().map(Die::face).collect())
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self) {
        self.visible = true;
    }

    pub fn set_hidden(&mut self) {
        self.visible = false;
    }

    /// Reroll every die. The count does not change.
    pub fn shake(&mut self, rng: &mut impl RandomSource) {
        for die in &mut self.dice {
            die.reroll(rng);
        }
    }

    /// Roll a new die into the cup. Returns `false` when the cup is full.
    pub fn add_die(&mut self, rng: &mut impl RandomSource) -> bool {
        if self.is_full() {
            return false;
        }
        self.dice.push(Die::roll(rng));
        true
    }

    /// Put `die` into the cup. Returns `false` when the cup is full.
    pub fn push_die(&mut self, die: Die) -> bool {
        if self.is_full() {
            return false;
        }
        self.dice.push(die);
        true
    }

    /// Take the last die out. Returns `false` when the cup is empty.
    pub fn remove_die(&mut self) -> bool {
        self.dice.pop().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DiceRng;

    #[test]
    fn test_new_cup_is_full_and_hidden() {
        let mut rng = DiceRng::new(1);
        let cup = Cup::new(&mut rng);

        assert_eq!(cup.len(), 5);
        assert_eq!(cup.capacity(), 5);
        assert!(cup.is_full());
        assert!(!cup.is_visible());
        assert!(cup.faces().is_none());
    }

    #[test]
    fn test_visibility_toggle() {
        let mut cup = Cup::from_faces(&[Face::Two, Face::Ace], 5);

        cup.set_visible();
        assert_eq!(cup.faces(), Some(vec![Face::Two, Face::Ace]));

        cup.set_hidden();
        assert!(cup.faces().is_none());
    }

    #[test]
    fn test_add_respects_capacity() {
        let mut rng = DiceRng::new(2);
        let mut cup = Cup::with_dice(&mut rng, 4, 5);

        assert!(cup.add_die(&mut rng));
        assert_eq!(cup.len(), 5);
        assert!(!cup.add_die(&mut rng));
        assert!(!cup.push_die(Die::with_face(Face::Six)));
        assert_eq!(cup.len(), 5);
    }

    #[test]
    fn test_remove_never_goes_negative() {
        let mut cup = Cup::from_faces(&[Face::Four], 5);

        assert!(cup.remove_die());
        assert!(cup.is_empty());
        assert!(!cup.remove_die());
        assert_eq!(cup.len(), 0);
    }

    #[test]
    fn test_with_dice_clamps_to_capacity() {
        let mut rng = DiceRng::new(3);
        let cup = Cup::with_dice(&mut rng, 9, 5);
        assert_eq!(cup.len(), 5);

        let cup = Cup::from_faces(&[Face::Two; 7], 5);
        assert_eq!(cup.len(), 5);
    }

    #[test]
    fn test_shake_keeps_count() {
        let mut rng = DiceRng::new(4);
        let mut cup = Cup::with_dice(&mut rng, 3, 5);

        cup.shake(&mut rng);
        assert_eq!(cup.len(), 3);
    }

    #[test]
    fn test_deserialize_keeps_valid_cup() {
        let mut cup = Cup::from_faces(&[Face::Three, Face::Ace], 5);
        cup.set_visible();

        let json = serde_json::to_string(&cup).unwrap();
        assert_eq!(serde_json::from_str::<Cup>(&json).unwrap(), cup);
    }

    #[test]
    fn test_deserialize_rejects_overfull_cup() {
        let json = r#"{"dice":[{"face":"Two"},{"face":"Two"},{"face":"Two"},{"face":"Two"},
            {"face":"Two"},{"face":"Two"},{"face":"Two"}],"capacity":5,"visible":false}"#;

        let err = serde_json::from_str::<Cup>(json).unwrap_err();
        assert!(err.to_string().contains("cup holds 7 dice but its capacity is 5"));
    }

    #[test]
    fn test_deserialize_rejects_zero_capacity() {
        let json = r#"{"dice":[],"capacity":0,"visible":true}"#;

        let err = serde_json::from_str::<Cup>(json).unwrap_err();
        assert!(err.to_string().contains("cup capacity must be at least 1"));
    }
}
