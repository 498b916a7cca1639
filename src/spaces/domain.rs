// Operation set shared by every space variant.

use rand::Rng;

use crate::error::Result;

/// A trait implemented by every space variant and by the `Space` dispatch enum.
///
/// `Element` is the value type that lives in the space (e.g. `i64` for
/// `Discrete`, `Vec<f64>` for `BoxSpace`, `Sample` for `Space`).
pub trait Domain {
    type Element;

    /// Immediate structural arity; never recursive.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of the flat numeric encoding of any element.
    fn flat_width(&self) -> usize;

    /// Draw a sample from the space using the provided RNG.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element;

    /// Return true if the given element is a valid member of the space.
    fn contains(&self, elem: &Self::Element) -> bool;

    /// Append the flat encoding of `elem` to `out`.
    ///
    /// Fails with `DomainViolation` when `elem` is not a member; `out` may then
    /// hold a partial encoding.
    fn flatten_into(&self, elem: &Self::Element, out: &mut Vec<f64>) -> Result<()>;

    /// Decode an element from exactly `flat_width()` numbers.
    fn unflatten(&self, flat: &[f64]) -> Result<Self::Element>;

    /// Every element of a finite space, in a fixed order.
    fn enumerate(&self) -> Result<Vec<Self::Element>>;

    fn flatten(&self, elem: &Self::Element) -> Result<Vec<f64>> {
        let mut out = Vec::with_capacity(self.flat_width());
        self.flatten_into(elem, &mut out)?;
        Ok(out)
    }
}
