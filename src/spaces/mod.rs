//! Space type system: five variants behind one `Space` entry type.
//!
//! `Space` is the only place that knows about every variant; each variant
//! module implements `Domain` on its own typed element, and the dispatch here
//! wraps those elements into `Sample`.

pub mod box_space;
pub mod def;
pub mod dict;
pub mod discrete;
pub mod domain;
pub mod interop;
pub mod one_of;
pub mod sample;
pub mod sampler;
pub mod tuple;

use std::fmt;

use rand::Rng;

pub use box_space::BoxSpace;
pub use def::SpaceDef;
pub use dict::Dict;
pub use discrete::Discrete;
pub use domain::Domain;
pub use one_of::OneOf;
pub use sample::{Choice, Sample};
pub use sampler::Sampler;
pub use tuple::Tuple;

use crate::error::{Result, SpaceError};
use crate::utils::rng_from_seed;

/// Description of the set of valid values for an action or observation.
///
/// Immutable once built; composite variants own their children.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SpaceDef", into = "SpaceDef"))]
pub enum Space {
    Discrete(Discrete),
    Box(BoxSpace),
    Dict(Dict),
    Tuple(Tuple),
    OneOf(OneOf),
}

impl Space {
    pub fn discrete(count: usize, start: i64) -> Result<Self> {
        Discrete::new(count, start).map(Space::Discrete)
    }

    pub fn box_space<L: Into<Vec<f64>>, H: Into<Vec<f64>>>(low: L, high: H) -> Result<Self> {
        BoxSpace::new(low, high).map(Space::Box)
    }

    pub fn dict<K, I>(fields: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Space)>,
    {
        Dict::new(fields).map(Space::Dict)
    }

    pub fn tuple(elements: Vec<Space>) -> Result<Self> {
        Tuple::new(elements).map(Space::Tuple)
    }

    pub fn one_of(options: Vec<Space>) -> Result<Self> {
        OneOf::new(options).map(Space::OneOf)
    }

    /// Variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Space::Discrete(_) => "Discrete",
            Space::Box(_) => "Box",
            Space::Dict(_) => "Dict",
            Space::Tuple(_) => "Tuple",
            Space::OneOf(_) => "OneOf",
        }
    }

    /// One sample from a fresh stream seeded with `seed`.
    pub fn sample_with_seed(&self, seed: u64) -> Sample {
        self.sample(&mut rng_from_seed(seed))
    }

    fn mismatch(&self, elem: &Sample) -> SpaceError {
        SpaceError::violation(format!("{} space given a {} value", self.kind(), elem.kind()))
    }
}

impl Domain for Space {
    type Element = Sample;

    fn len(&self) -> usize {
        match self {
            Space::Discrete(s) => s.len(),
            Space::Box(s) => s.len(),
            Space::Dict(s) => s.len(),
            Space::Tuple(s) => s.len(),
            Space::OneOf(s) => s.len(),
        }
    }

    fn flat_width(&self) -> usize {
        match self {
            Space::Discrete(s) => s.flat_width(),
            Space::Box(s) => s.flat_width(),
            Space::Dict(s) => s.flat_width(),
            Space::Tuple(s) => s.flat_width(),
            Space::OneOf(s) => s.flat_width(),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        match self {
            Space::Discrete(s) => Sample::Discrete(s.sample(rng)),
            Space::Box(s) => Sample::Box(s.sample(rng)),
            Space::Dict(s) => Sample::Dict(s.sample(rng)),
            Space::Tuple(s) => Sample::Tuple(s.sample(rng)),
            Space::OneOf(s) => Sample::OneOf(s.sample(rng)),
        }
    }

    fn contains(&self, elem: &Sample) -> bool {
        match (self, elem) {
            (Space::Discrete(s), Sample::Discrete(v)) => s.contains(v),
            (Space::Box(s), Sample::Box(v)) => s.contains(v),
            (Space::Dict(s), Sample::Dict(v)) => s.contains(v),
            (Space::Tuple(s), Sample::Tuple(v)) => s.contains(v),
            (Space::OneOf(s), Sample::OneOf(v)) => s.contains(v),
            _ => false,
        }
    }

    fn flatten_into(&self, elem: &Sample, out: &mut Vec<f64>) -> Result<()> {
        match (self, elem) {
            (Space::Discrete(s), Sample::Discrete(v)) => s.flatten_into(v, out),
            (Space::Box(s), Sample::Box(v)) => s.flatten_into(v, out),
            (Space::Dict(s), Sample::Dict(v)) => s.flatten_into(v, out),
            (Space::Tuple(s), Sample::Tuple(v)) => s.flatten_into(v, out),
            (Space::OneOf(s), Sample::OneOf(v)) => s.flatten_into(v, out),
            _ => Err(self.mismatch(elem)),
        }
    }

    fn unflatten(&self, flat: &[f64]) -> Result<Sample> {
        match self {
            Space::Discrete(s) => s.unflatten(flat).map(Sample::Discrete),
            Space::Box(s) => s.unflatten(flat).map(Sample::Box),
            Space::Dict(s) => s.unflatten(flat).map(Sample::Dict),
            Space::Tuple(s) => s.unflatten(flat).map(Sample::Tuple),
            Space::OneOf(s) => s.unflatten(flat).map(Sample::OneOf),
        }
    }

    fn enumerate(&self) -> Result<Vec<Sample>> {
        fn wrap<T>(values: Vec<T>, f: fn(T) -> Sample) -> Vec<Sample> {
            values.into_iter().map(f).collect()
        }
        Ok(match self {
            Space::Discrete(s) => wrap(s.enumerate()?, Sample::Discrete),
            Space::Box(s) => wrap(s.enumerate()?, Sample::Box),
            Space::Dict(s) => wrap(s.enumerate()?, Sample::Dict),
            Space::Tuple(s) => wrap(s.enumerate()?, Sample::Tuple),
            Space::OneOf(s) => wrap(s.enumerate()?, Sample::OneOf),
        })
    }
}

impl From<Discrete> for Space { fn from(s: Discrete) -> Self { Space::Discrete(s) } }
impl From<BoxSpace> for Space { fn from(s: BoxSpace) -> Self { Space::Box(s) } }
impl From<Dict> for Space { fn from(s: Dict) -> Self { Space::Dict(s) } }
impl From<Tuple> for Space { fn from(s: Tuple) -> Self { Space::Tuple(s) } }
impl From<OneOf> for Space { fn from(s: OneOf) -> Self { Space::OneOf(s) } }

fn write_list<'a>(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = &'a Space>) -> fmt::Result {
    for (i, s) in items.enumerate() {
        if i > 0 { write!(f, ", ")?; }
        write!(f, "{s}")?;
    }
    Ok(())
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Discrete(s) => write!(f, "Discrete({}, start={})", s.count(), s.start()),
            Space::Box(s) => write!(f, "Box(low={:?}, high={:?})", s.low(), s.high()),
            Space::Dict(s) => {
                write!(f, "Dict({{")?;
                for (i, (k, v)) in s.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{k:?}: {v}")?;
                }
                write!(f, "}})")
            }
            Space::Tuple(s) => {
                write!(f, "Tuple([")?;
                write_list(f, s.elements().iter())?;
                write!(f, "])")
            }
            Space::OneOf(s) => {
                write!(f, "OneOf([")?;
                write_list(f, s.options().iter())?;
                write!(f, "])")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng_from_seed;

    fn leaves() -> (Space, Space) {
        (Space::discrete(10, 0).unwrap(), Space::box_space([0.0], [1.0]).unwrap())
    }

    #[test]
    fn composite_lengths_are_not_recursive() {
        let (d, b) = leaves();
        assert_eq!(Space::dict([("a", d.clone()), ("b", b.clone())]).unwrap().len(), 2);
        assert_eq!(Space::tuple(vec![d.clone(), b.clone()]).unwrap().len(), 2);
        assert_eq!(Space::one_of(vec![d.clone(), b.clone()]).unwrap().len(), 2);
        assert_eq!(d.len(), 10);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn mismatched_sample_variant() {
        let (d, b) = leaves();
        let v = Sample::Box(vec![0.5]);
        assert!(!d.contains(&v));
        assert!(b.contains(&v));
        assert!(matches!(d.flatten(&v), Err(SpaceError::DomainViolation(_))));
    }

    #[test]
    fn deep_nesting_round_trips() {
        let (d, b) = leaves();
        let inner = Space::dict([("choice", Space::one_of(vec![d.clone(), b.clone()]).unwrap()), ("pos", b)]).unwrap();
        let space = Space::tuple(vec![inner.clone(), inner, d]).unwrap();
        let mut rng = rng_from_seed(77);
        for _ in 0..50 {
            let v = space.sample(&mut rng);
            assert!(space.contains(&v));
            let flat = space.flatten(&v).unwrap();
            assert_eq!(flat.len(), space.flat_width());
            assert_eq!(space.unflatten(&flat).unwrap(), v);
        }
    }

    #[test]
    fn sample_with_seed_is_reproducible() {
        let (d, b) = leaves();
        let space = Space::one_of(vec![d, b]).unwrap();
        assert_eq!(space.sample_with_seed(42), space.sample_with_seed(42));
    }

    #[test]
    fn display_is_compact_and_recursive() {
        let (d, b) = leaves();
        let space = Space::one_of(vec![d.clone(), Space::dict([("x", b)]).unwrap()]).unwrap();
        assert_eq!(
            space.to_string(),
            "OneOf([Discrete(10, start=0), Dict({\"x\": Box(low=[0.0], high=[1.0])})])"
        );
        assert_eq!(Space::tuple(vec![d.clone(), d]).unwrap().to_string(), "Tuple([Discrete(10, start=0), Discrete(10, start=0)])");
    }
}
