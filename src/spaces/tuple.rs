use rand::Rng;

use super::{Domain, Sample, Space};
use crate::error::{Result, SpaceError};

/// An ordered sequence of sub-spaces. Order is part of the type's identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Tuple {
    elements: Vec<Space>,
    width: usize,
}

impl Tuple {
    pub fn new(elements: Vec<Space>) -> Result<Self> {
        let width = SpaceError::total_width(elements.iter().map(Space::flat_width))?;
        Ok(Self { elements, width })
    }

    pub fn elements(&self) -> &[Space] { &self.elements }

    pub fn get(&self, index: usize) -> Option<&Space> { self.elements.get(index) }
}

impl Domain for Tuple {
    type Element = Vec<Sample>;

    fn len(&self) -> usize { self.elements.len() }

    fn flat_width(&self) -> usize { self.width }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        self.elements.iter().map(|s| s.sample(rng)).collect()
    }

    fn contains(&self, elem: &Self::Element) -> bool {
        elem.len() == self.elements.len()
            && self.elements.iter().zip(elem.iter()).all(|(s, v)| s.contains(v))
    }

    fn flatten_into(&self, elem: &Self::Element, out: &mut Vec<f64>) -> Result<()> {
        if elem.len() != self.elements.len() {
            return Err(SpaceError::violation(format!(
                "Tuple of {} elements given {} values",
                self.elements.len(),
                elem.len()
            )));
        }
        for (s, v) in self.elements.iter().zip(elem.iter()) {
            s.flatten_into(v, out)?;
        }
        Ok(())
    }

    fn unflatten(&self, flat: &[f64]) -> Result<Self::Element> {
        SpaceError::check_width(self.width, flat.len())?;
        let mut rest = flat;
        let mut out = Vec::with_capacity(self.elements.len());
        for s in &self.elements {
            let (head, tail) = rest.split_at(s.flat_width());
            out.push(s.unflatten(head)?);
            rest = tail;
        }
        Ok(out)
    }

    fn enumerate(&self) -> Result<Vec<Self::Element>> {
        let parts = self.elements.iter().map(Space::enumerate).collect::<Result<Vec<_>>>()?;
        Ok(cartesian(parts))
    }
}

/// Cartesian product of per-position value lists; the first position varies slowest.
pub(super) fn cartesian(parts: Vec<Vec<Sample>>) -> Vec<Vec<Sample>> {
    parts.into_iter().fold(vec![Vec::new()], |acc, part| {
        acc.into_iter()
            .flat_map(|prefix| {
                part.iter().map(move |v| {
                    let mut next = prefix.clone();
                    next.push(v.clone());
                    next
                })
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng_from_seed;

    fn pair() -> Tuple {
        Tuple::new(vec![
            Space::discrete(3, 0).unwrap(),
            Space::box_space([0.0], [1.0]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn length_and_width() {
        let t = pair();
        assert_eq!(t.len(), 2);
        assert_eq!(t.flat_width(), 4);
        assert!(Tuple::new(vec![]).unwrap().is_empty());
    }

    #[test]
    fn preserves_order_when_flattening() {
        let t = pair();
        let v = vec![Sample::Discrete(2), Sample::Box(vec![0.5])];
        let flat = t.flatten(&v).unwrap();
        assert_eq!(flat, vec![0.0, 0.0, 1.0, 0.5]);
        assert_eq!(t.unflatten(&flat).unwrap(), v);
    }

    #[test]
    fn rejects_wrong_arity_and_swapped_order() {
        let t = pair();
        assert!(!t.contains(&vec![Sample::Discrete(0)]));
        assert!(!t.contains(&vec![Sample::Box(vec![0.5]), Sample::Discrete(0)]));
        assert!(matches!(t.flatten(&vec![Sample::Discrete(0)]), Err(SpaceError::DomainViolation(_))));
        assert!(matches!(t.unflatten(&[1.0, 0.0, 0.0]), Err(SpaceError::MalformedEncoding(_))));
    }

    #[test]
    fn width_overflow_rejected() {
        let huge = || Space::discrete(i64::MAX as usize, 0).unwrap();
        let r = Tuple::new(vec![huge(), huge(), huge()]);
        assert!(matches!(r, Err(SpaceError::InvalidConfiguration(_))));
    }

    #[test]
    fn samples_are_members() {
        let t = pair();
        let mut rng = rng_from_seed(11);
        for _ in 0..100 {
            assert!(t.contains(&t.sample(&mut rng)));
        }
    }

    #[test]
    fn enumerates_cartesian_product() {
        let t = Tuple::new(vec![Space::discrete(2, 0).unwrap(), Space::discrete(3, 10).unwrap()]).unwrap();
        let all = t.enumerate().unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![Sample::Discrete(0), Sample::Discrete(10)]);
        assert_eq!(all[5], vec![Sample::Discrete(1), Sample::Discrete(12)]);
        assert_eq!(Tuple::new(vec![]).unwrap().enumerate().unwrap(), vec![Vec::<Sample>::new()]);
    }
}
