//! Pip counting across cups.
//!
//! Counting always works on revealed dice: a hidden source that can reveal
//! itself is revealed first, one that cannot contributes nothing. Aces add to
//! the count of any other face while `aces_wild` holds; counting Aces
//! themselves never double-counts.

use crate::dice::{Cup, Face};

/// Anything holding dice that can be counted.
pub trait PipSource {
    /// Faces showing, or `None` while hidden.
    fn faces(&self) -> Option<Vec<Face>>;

    /// Expose the dice. Returns `false` if this source cannot be revealed.
    fn reveal(&mut self) -> bool {
        false
    }

    /// Number of dice held, visible or not.
    fn dice_count(&self) -> usize;
}

impl PipSource for Cup {
    fn faces(&self) -> Option<Vec<Face>> {
        Cup::faces(self)
    }

    fn reveal(&mut self) -> bool {
        self.set_visible();
        true
    }

    fn dice_count(&self) -> usize {
        self.len()
    }
}

/// Plain face lists are always face up.
impl PipSource for Vec<Face> {
    fn faces(&self) -> Option<Vec<Face>> {
        Some(self.clone())
    }

    fn dice_count(&self) -> usize {
        self.len()
    }
}

impl<T: PipSource + ?Sized> PipSource for Box<T> {
    fn faces(&self) -> Option<Vec<Face>> {
        (**self).faces()
    }

    fn reveal(&mut self) -> bool {
        (**self).reveal()
    }

    fn dice_count(&self) -> usize {
        (**self).dice_count()
    }
}

/// Counts dice matching a face.
pub struct PipCounter;

impl PipCounter {
    /// Dice showing `target` across `sources`, plus Aces when `aces_wild`
    /// and `target` is not itself the Ace.
    ///
    /// ```
    /// use dudo::dice::Face;
    /// use dudo::rules::PipCounter;
    ///
    /// let mut cups = vec![
    ///     vec![Face::Three, Face::Ace],
    ///     vec![Face::Three, Face::Five],
    /// ];
    /// assert_eq!(PipCounter::count(&mut cups, Face::Three, true), 3);
    /// assert_eq!(PipCounter::count(&mut cups, Face::Three, false), 2);
    /// assert_eq!(PipCounter::count(&mut cups, Face::Ace, true), 1);
    /// ```
    pub fn count<S: PipSource>(sources: &mut [S], target: Face, aces_wild: bool) -> usize {
        let tally = Self::tally(sources);
        let natural = tally[Self::slot(target)];

        if aces_wild && !target.is_ace() {
            natural + tally[Self::slot(Face::Ace)]
        } else {
            natural
        }
    }

    /// Raw number of revealed dice per face, indexed by `rank - 1`.
    pub fn tally<S: PipSource>(sources: &mut [S]) -> [usize; 6] {
        let mut tally = [0usize; 6];

        for source in sources.iter_mut() {
            let faces = match source.faces() {
                Some(faces) => faces,
                None if source.reveal() => source.faces().unwrap_or_default(),
                None => continue,
            };
            for face in faces {
                tally[Self::slot(face)] += 1;
            }
        }

        tally
    }

    fn slot(face: Face) -> usize {
        usize::from(face.rank() - 1)
    }
}
