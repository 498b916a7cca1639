use rand::Rng;
use rand::distributions::{Distribution, Uniform};

use super::Domain;
use crate::error::{Result, SpaceError};

/// A bounded real vector space with per-dimension inclusive bounds.
/// Values are already flat, so the encoding is the value itself.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    low: Vec<f64>,
    high: Vec<f64>,
}

impl BoxSpace {
    pub fn new<L: Into<Vec<f64>>, H: Into<Vec<f64>>>(low: L, high: H) -> Result<Self> {
        let (low, high) = (low.into(), high.into());
        if low.len() != high.len() {
            return Err(SpaceError::invalid(format!(
                "Box bounds differ in length: low has {}, high has {}",
                low.len(),
                high.len()
            )));
        }
        if low.is_empty() {
            return Err(SpaceError::invalid("Box requires at least one dimension"));
        }
        for (i, (&l, &h)) in low.iter().zip(high.iter()).enumerate() {
            if !l.is_finite() || !h.is_finite() {
                return Err(SpaceError::invalid(format!("Box bounds at [{i}] must be finite")));
            }
            if l > h {
                return Err(SpaceError::invalid(format!("low[{i}] > high[{i}] ({l} > {h})")));
            }
            // Inclusive uniform sampling widens the span by one ulp; it must stay finite.
            if !((h - l) / (1.0 - f64::EPSILON)).is_finite() {
                return Err(SpaceError::invalid(format!("Box span at [{i}] overflows f64")));
            }
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> &[f64] { &self.low }
    pub fn high(&self) -> &[f64] { &self.high }
    pub fn ndim(&self) -> usize { self.low.len() }

    fn is_degenerate(&self) -> bool {
        self.low.iter().zip(self.high.iter()).all(|(l, h)| l == h)
    }
}

impl Domain for BoxSpace {
    type Element = Vec<f64>;

    fn len(&self) -> usize { self.ndim() }

    fn flat_width(&self) -> usize { self.ndim() }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        // Each dimension independently from Uniform[low, high]
        self.low
            .iter()
            .zip(self.high.iter())
            .map(|(&l, &h)| if l == h { l } else { Uniform::new_inclusive(l, h).sample(rng) })
            .collect()
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        elem.len() == self.ndim()
            && elem
                .iter()
                .zip(self.low.iter().zip(self.high.iter()))
                .all(|(v, (l, h))| l <= v && v <= h)
    }

    fn flatten_into(&self, elem: &Self::Element, out: &mut Vec<f64>) -> Result<()> {
        if !self.contains(elem) {
            return Err(SpaceError::violation(format!(
                "{elem:?} is not inside Box(low={:?}, high={:?})",
                self.low, self.high
            )));
        }
        out.extend_from_slice(elem);
        Ok(())
    }

    fn unflatten(&self, flat: &[f64]) -> Result<Self::Element> {
        SpaceError::check_width(self.ndim(), flat.len())?;
        Ok(flat.to_vec())
    }

    fn enumerate(&self) -> Result<Vec<Self::Element>> {
        if self.is_degenerate() {
            return Ok(vec![self.low.clone()]);
        }
        Err(SpaceError::NotSupported("cannot enumerate a continuous Box".into()))
    }
}
