use rand::Rng;
use rand::distributions::{Distribution, Uniform};

use super::Domain;
use crate::error::{Result, SpaceError};

/// A discrete space of integers in `[start, start + count)`.
///
/// Flattens to a one-hot vector of width `count`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discrete {
    count: usize,
    start: i64,
}

impl Discrete {
    pub fn new(count: usize, start: i64) -> Result<Self> {
        if count == 0 {
            return Err(SpaceError::invalid("Discrete space requires count >= 1"));
        }
        let fits = i64::try_from(count).ok().and_then(|c| start.checked_add(c)).is_some();
        if !fits {
            return Err(SpaceError::invalid(format!(
                "Discrete range start={start} count={count} overflows i64"
            )));
        }
        Ok(Self { count, start })
    }

    pub fn count(&self) -> usize { self.count }
    pub fn start(&self) -> i64 { self.start }

    /// Exclusive upper bound; cannot overflow once constructed.
    fn end(&self) -> i64 {
        self.start + self.count as i64
    }
}

impl Domain for Discrete {
    type Element = i64;

    fn len(&self) -> usize { self.count }

    fn flat_width(&self) -> usize { self.count }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        if self.count == 1 { return self.start; }
        Uniform::from(self.start..self.end()).sample(rng)
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        (self.start..self.end()).contains(elem)
    }

    fn flatten_into(&self, elem: &Self::Element, out: &mut Vec<f64>) -> Result<()> {
        if !self.contains(elem) {
            return Err(SpaceError::violation(format!(
                "{elem} outside Discrete range [{}, {})",
                self.start,
                self.end()
            )));
        }
        let hot = (elem - self.start) as usize;
        out.extend((0..self.count).map(|i| if i == hot { 1.0 } else { 0.0 }));
        Ok(())
    }

    fn unflatten(&self, flat: &[f64]) -> Result<Self::Element> {
        SpaceError::check_width(self.count, flat.len())?;
        if let Some(pos) = flat.iter().position(|v| !v.is_finite()) {
            return Err(SpaceError::malformed(format!("non-finite entry at position {pos}")));
        }
        // First maximal position wins.
        let mut best = 0;
        for (i, v) in flat.iter().enumerate().skip(1) {
            if *v > flat[best] {
                best = i;
            }
        }
        Ok(self.start + best as i64)
    }

    fn enumerate(&self) -> Result<Vec<Self::Element>> {
        Ok((self.start..self.end()).collect())
    }
}
