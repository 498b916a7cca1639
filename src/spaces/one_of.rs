use rand::Rng;
use rand::distributions::{Distribution, Uniform};

use super::{Choice, Domain, Space};
use crate::error::{Result, SpaceError};

/// A tagged union over sub-spaces.
///
/// Encoding: one-hot over the options, then the selected option's encoding
/// right-padded with zeros to the widest option, so every value of a given
/// `OneOf` flattens to the same width.
#[derive(Clone, Debug, PartialEq)]
pub struct OneOf {
    options: Vec<Space>,
    max_width: usize,
}

impl OneOf {
    pub fn new(options: Vec<Space>) -> Result<Self> {
        if options.is_empty() {
            return Err(SpaceError::invalid("OneOf requires at least one option"));
        }
        let max_width = options.iter().map(Space::flat_width).max().unwrap_or(0);
        SpaceError::total_width([options.len(), max_width])?;
        Ok(Self { options, max_width })
    }

    pub fn options(&self) -> &[Space] { &self.options }

    pub fn get(&self, index: usize) -> Option<&Space> { self.options.get(index) }

    /// Widest flat encoding among the options (the padded payload width).
    pub fn max_option_width(&self) -> usize { self.max_width }
}

impl Domain for OneOf {
    type Element = Choice;

    fn len(&self) -> usize { self.options.len() }

    fn flat_width(&self) -> usize { self.options.len() + self.max_width }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        let n = self.options.len();
        let index = if n == 1 { 0 } else { Uniform::from(0..n).sample(rng) };
        Choice::new(index, self.options[index].sample(rng))
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        self.options.get(elem.index).is_some_and(|o| o.contains(&elem.value))
    }

    fn flatten_into(&self, elem: &Self::Element, out: &mut Vec<f64>) -> Result<()> {
        let n = self.options.len();
        let option = self.options.get(elem.index).ok_or_else(|| {
            SpaceError::violation(format!("OneOf index {} out of range 0..{n}", elem.index))
        })?;
        let start = out.len();
        out.extend((0..n).map(|i| if i == elem.index { 1.0 } else { 0.0 }));
        option.flatten_into(&elem.value, out)?;
        out.resize(start + n + self.max_width, 0.0);
        Ok(())
    }

    fn unflatten(&self, flat: &[f64]) -> Result<Self::Element> {
        let n = self.options.len();
        SpaceError::check_width(self.flat_width(), flat.len())?;
        let (prefix, payload) = flat.split_at(n);
        if let Some(pos) = prefix.iter().position(|v| *v != 0.0 && *v != 1.0) {
            return Err(SpaceError::malformed(format!(
                "OneOf selector entry at position {pos} is {}, expected 0 or 1",
                prefix[pos]
            )));
        }
        let mut set = prefix.iter().enumerate().filter(|(_, v)| **v == 1.0).map(|(i, _)| i);
        let index = match (set.next(), set.next()) {
            (Some(i), None) => i,
            (None, _) => return Err(SpaceError::malformed("OneOf selector has no position set")),
            (Some(_), Some(_)) => {
                return Err(SpaceError::malformed("OneOf selector has more than one position set"));
            }
        };
        let option = &self.options[index];
        let value = option.unflatten(&payload[..option.flat_width()])?;
        Ok(Choice::new(index, value))
    }

    fn enumerate(&self) -> Result<Vec<Self::Element>> {
        let mut all = Vec::new();
        for (index, option) in self.options.iter().enumerate() {
            all.extend(option.enumerate()?.into_iter().map(|v| Choice::new(index, v)));
        }
        Ok(all)
    }
}
