use std::collections::BTreeMap;

use rand::Rng;

use super::tuple::cartesian;
use super::{Domain, Sample, Space};
use crate::error::{Result, SpaceError};

/// Named sub-spaces. Fields are kept in lexicographic key order, which fixes
/// the order of sampling and of the flat encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct Dict {
    fields: BTreeMap<String, Space>,
    width: usize,
}

impl Dict {
    /// Build from `(name, space)` pairs; duplicate names are rejected.
    pub fn new<K, I>(fields: I) -> Result<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Space)>,
    {
        let mut map = BTreeMap::new();
        for (key, space) in fields {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(SpaceError::invalid(format!("duplicate Dict key {key:?}")));
            }
            map.insert(key, space);
        }
        let width = SpaceError::total_width(map.values().map(Space::flat_width))?;
        Ok(Self { fields: map, width })
    }

    pub fn get(&self, key: &str) -> Option<&Space> { self.fields.get(key) }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Space)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn same_keys(&self, elem: &BTreeMap<String, Sample>) -> bool {
        elem.len() == self.fields.len() && self.fields.keys().zip(elem.keys()).all(|(a, b)| a == b)
    }
}

impl Domain for Dict {
    type Element = BTreeMap<String, Sample>;

    fn len(&self) -> usize { self.fields.len() }

    fn flat_width(&self) -> usize { self.width }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        self.fields.iter().map(|(k, s)| (k.clone(), s.sample(rng))).collect()
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        self.same_keys(elem) && self.fields.values().zip(elem.values()).all(|(s, v)| s.contains(v))
    }

    fn flatten_into(&self, elem: &Self::Element, out: &mut Vec<f64>) -> Result<()> {
        if !self.same_keys(elem) {
            return Err(SpaceError::violation(format!(
                "Dict keys {:?} given value keys {:?}",
                self.fields.keys().collect::<Vec<_>>(),
                elem.keys().collect::<Vec<_>>()
            )));
        }
        for (s, v) in self.fields.values().zip(elem.values()) {
            s.flatten_into(v, out)?;
        }
        Ok(())
    }

    fn unflatten(&self, flat: &[f64]) -> Result<Self::Element> {
        SpaceError::check_width(self.width, flat.len())?;
        let mut rest = flat;
        let mut out = BTreeMap::new();
        for (k, s) in &self.fields {
            let (head, tail) = rest.split_at(s.flat_width());
            out.insert(k.clone(), s.unflatten(head)?);
            rest = tail;
        }
        Ok(out)
    }

    fn enumerate(&self) -> Result<Vec<Self::Element>> {
        let parts = self.fields.values().map(Space::enumerate).collect::<Result<Vec<_>>>()?;
        Ok(cartesian(parts)
            .into_iter()
            .map(|values| self.fields.keys().cloned().zip(values).collect())
            .collect())
    }
}
