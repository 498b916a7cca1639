//! Plain, unvalidated descriptions of space trees.
//!
//! `SpaceDef` is what configuration files and process boundaries carry.
//! Converting it into a `Space` runs every construction check, so an invalid
//! description never yields a partially built tree.

use std::collections::BTreeMap;

use super::{Dict, OneOf, Space};
use crate::error::SpaceError;

/// Serializable description of a space. With the `serde` feature it is
/// internally tagged by `"type"`, e.g. `{"type": "discrete", "count": 4}`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum SpaceDef {
    Discrete {
        count: usize,
        #[cfg_attr(feature = "serde", serde(default))]
        start: i64,
    },
    Box { low: Vec<f64>, high: Vec<f64> },
    Dict { fields: BTreeMap<String, SpaceDef> },
    Tuple { elements: Vec<SpaceDef> },
    OneOf { options: Vec<SpaceDef> },
}

impl TryFrom<SpaceDef> for Space {
    type Error = SpaceError;

    fn try_from(def: SpaceDef) -> Result<Self, Self::Error> {
        match def {
            SpaceDef::Discrete { count, start } => Space::discrete(count, start),
            SpaceDef::Box { low, high } => Space::box_space(low, high),
            SpaceDef::Dict { fields } => {
                let fields = fields
                    .into_iter()
                    .map(|(k, v)| Space::try_from(v).map(|s| (k, s)))
                    .collect::<Result<Vec<_>, _>>()?;
                Dict::new(fields).map(Space::Dict)
            }
            SpaceDef::Tuple { elements } => {
                let elements = elements.into_iter().map(Space::try_from).collect::<Result<Vec<_>, _>>()?;
                Space::tuple(elements)
            }
            SpaceDef::OneOf { options } => {
                let options = options.into_iter().map(Space::try_from).collect::<Result<Vec<_>, _>>()?;
                OneOf::new(options).map(Space::OneOf)
            }
        }
    }
}

impl From<&Space> for SpaceDef {
    fn from(space: &Space) -> Self {
        match space {
            Space::Discrete(s) => SpaceDef::Discrete { count: s.count(), start: s.start() },
            Space::Box(s) => SpaceDef::Box { low: s.low().to_vec(), high: s.high().to_vec() },
            Space::Dict(s) => SpaceDef::Dict {
                fields: s.iter().map(|(k, v)| (k.to_string(), SpaceDef::from(v))).collect(),
            },
            Space::Tuple(s) => SpaceDef::Tuple { elements: s.elements().iter().map(SpaceDef::from).collect() },
            Space::OneOf(s) => SpaceDef::OneOf { options: s.options().iter().map(SpaceDef::from).collect() },
        }
    }
}

impl From<Space> for SpaceDef {
    fn from(space: Space) -> Self {
        SpaceDef::from(&space)
    }
}

impl SpaceDef {
    /// Validate and build the described space.
    pub fn build(self) -> Result<Space, SpaceError> {
        Space::try_from(self)
    }
}
