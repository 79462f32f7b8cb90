//! Streaming preference reduction over successful fetches

use crate::candidates::IconCandidate;

/// Holds the running best candidate while fetch results stream in.
///
/// The reduction is deliberately non-commutative: among candidates with equal
/// apple-touch classification and equal size, the later arrival wins. Any
/// test asserting a specific winner must fix the arrival order.
#[derive(Debug, Default)]
pub struct Selector {
    best: Option<IconCandidate>,
}

impl Selector {
    /// Creates an empty selector
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Offers a successfully fetched candidate against the current best.
    ///
    /// Rules, applied in strict arrival order:
    /// 1. Any candidate beats no candidate.
    /// 2. An apple-touch-icon candidate beats a non-apple best, regardless
    ///    of size.
    /// 3. With the same apple-touch status, `candidate.size >= best.size`
    ///    wins — `>=`, so an equally sized later arrival replaces the
    ///    earlier one.
    /// 4. Otherwise the best is unchanged.
    pub fn offer(&mut self, candidate: IconCandidate) {
        let replace = match &self.best {
            None => true,
            Some(best) => {
                (!best.is_apple_touch() && candidate.is_apple_touch())
                    || (best.is_apple_touch() == candidate.is_apple_touch()
                        && candidate.size >= best.size)
            }
        };

        if replace {
            self.best = Some(candidate);
        }
    }

    /// Current best without ending the reduction
    pub fn best(&self) -> Option<&IconCandidate> {
        self.best.as_ref()
    }

    /// Consumes the selector, yielding the final selection
    pub fn into_best(self) -> Option<IconCandidate> {
        self.best
    }
}
