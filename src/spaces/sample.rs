//! Concrete values drawn from, or validated against, a space.

use std::collections::BTreeMap;

/// One concrete value of a `Space`, shaped like the space it belongs to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sample {
    Discrete(i64),
    Box(Vec<f64>),
    /// Keyed like `Dict` fields; iteration is lexicographic.
    Dict(BTreeMap<String, Sample>),
    Tuple(Vec<Sample>),
    OneOf(Choice),
}

/// Value of a `OneOf` space: the selected option and a value of that option.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Choice {
    pub index: usize,
    pub value: Box<Sample>,
}

impl Choice {
    pub fn new(index: usize, value: Sample) -> Self {
        Self { index, value: Box::new(value) }
    }
}

impl Sample {
    /// Build a `Dict` sample from `(key, value)` pairs.
    pub fn dict<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Sample)>,
    {
        Sample::Dict(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn one_of(index: usize, value: Sample) -> Self {
        Sample::OneOf(Choice::new(index, value))
    }

    /// Variant name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Sample::Discrete(_) => "Discrete",
            Sample::Box(_) => "Box",
            Sample::Dict(_) => "Dict",
            Sample::Tuple(_) => "Tuple",
            Sample::OneOf(_) => "OneOf",
        }
    }
}

impl From<i64> for Sample { fn from(v: i64) -> Self { Sample::Discrete(v) } }
impl From<Vec<f64>> for Sample { fn from(v: Vec<f64>) -> Self { Sample::Box(v) } }
impl From<Choice> for Sample { fn from(v: Choice) -> Self { Sample::OneOf(v) } }
