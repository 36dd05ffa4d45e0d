//! Dice: faces, single dice and the cups that hold them.
//!
//! Every roll takes an explicit `RandomSource`, so a match seeded the same way
//! always deals the same dice.

pub mod face;
pub mod die;
pub mod cup;

pub use face::Face;
pub use die::Die;
pub use cup::Cup;
