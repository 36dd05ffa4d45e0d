//! A seated player.

use serde::{Deserialize, Serialize};

use crate::dice::{Cup, Face};
use crate::rules::PipSource;

/// A player: a name, a cup, banked bonus dice and an elimination flag.
///
/// Bonus dice are dice won while the cup was already full. They are spent
/// before any die leaves the cup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) cup: Cup,
    pub(crate) bonus_dice: u32,
    pub(crate) active: bool,
}

impl Player {
    pub(crate) fn new(name: String, cup: Cup) -> Self {
        Self {
            name,
            cup,
            bonus_dice: 0,
            active: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cup(&self) -> &Cup {
        &self.cup
    }

    /// Physical dice in the cup.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.cup.len()
    }

    #[must_use]
    pub fn bonus_dice(&self) -> u32 {
        self.bonus_dice
    }

    /// `false` once the cup has been emptied.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cup dice plus banked bonus dice.
    #[must_use]
    pub fn total_dice(&self) -> usize {
        self.cup.len() + self.bonus_dice as usize
    }
}

impl PipSource for Player {
    fn faces(&self) -> Option<Vec<Face>> {
        self.cup.faces()
    }

    fn reveal(&mut self) -> bool {
        self.cup.set_visible();
        true
    }

    fn dice_count(&self) -> usize {
        self.cup.len()
    }
}
