use gym_spaces::{Domain, Sample, Sampler, Space, SpaceError, rng_from_seed};
use proptest::prelude::*;

// Discrete ranges with offsets, and boxes that sometimes collapse to a point on a coordinate.
fn leaf() -> impl Strategy<Value = Space> {
    prop_oneof![
        (1usize..12, -50i64..50).prop_map(|(count, start)| Space::discrete(count, start).unwrap()),
        prop::collection::vec((-10.0f64..10.0, prop_oneof![Just(0.0), 0.0f64..5.0]), 1..4).prop_map(|dims| {
            let (low, high): (Vec<f64>, Vec<f64>) = dims.iter().map(|&(l, w)| (l, l + w)).unzip();
            Space::box_space(low, high).unwrap()
        }),
    ]
}

fn nested() -> impl Strategy<Value = Space> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::btree_map("[a-e]{1,2}", inner.clone(), 0..4).prop_map(|m| Space::dict(m).unwrap()),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|e| Space::tuple(e).unwrap()),
            prop::collection::vec(inner, 1..4).prop_map(|o| Space::one_of(o).unwrap()),
        ]
    })
}

proptest! {
    // Every sample is a member, for every space and seed
    #[test]
    fn samples_are_members(space in nested(), seed in any::<u64>()) {
        let mut rng = rng_from_seed(seed);
        for _ in 0..20 {
            let v = space.sample(&mut rng);
            prop_assert!(space.contains(&v), "{} does not contain {:?}", space, v);
        }
    }

    // Same seed, same sequence
    #[test]
    fn sampling_is_deterministic(space in nested(), seed in any::<u64>()) {
        let mut a = Sampler::new(space.clone(), seed);
        let mut b = Sampler::new(space, seed);
        prop_assert_eq!(a.sample_n(10), b.sample_n(10));
    }

    #[test]
    fn flatten_round_trips(space in nested(), seed in any::<u64>()) {
        let mut rng = rng_from_seed(seed);
        for _ in 0..10 {
            let v = space.sample(&mut rng);
            let flat = space.flatten(&v).unwrap();
            prop_assert_eq!(flat.len(), space.flat_width());
            prop_assert_eq!(space.unflatten(&flat).unwrap(), v);
        }
    }

    #[test]
    fn one_of_width_is_fixed(options in prop::collection::vec(nested(), 1..4), seed in any::<u64>()) {
        let space = Space::one_of(options).unwrap();
        let mut rng = rng_from_seed(seed);
        for _ in 0..20 {
            let v = space.sample(&mut rng);
            prop_assert_eq!(space.flatten(&v).unwrap().len(), space.flat_width());
        }
    }

    #[test]
    fn wrong_width_is_malformed(space in nested(), seed in any::<u64>()) {
        let mut flat = space.flatten(&space.sample_with_seed(seed)).unwrap();
        flat.push(0.0);
        prop_assert!(matches!(space.unflatten(&flat), Err(SpaceError::MalformedEncoding(_))));
    }

    // Dict length counts fields, whatever the fields contain
    #[test]
    fn composite_length_is_arity(children in prop::collection::vec(nested(), 0..6)) {
        let n = children.len();
        let dict = Space::dict(children.iter().cloned().enumerate().map(|(i, s)| (format!("f{i}"), s))).unwrap();
        prop_assert_eq!(dict.len(), n);
        prop_assert_eq!(Space::tuple(children.clone()).unwrap().len(), n);
        if n > 0 {
            prop_assert_eq!(Space::one_of(children).unwrap().len(), n);
        }
    }

    #[test]
    fn discrete_single_value_always_start(start in -1000i64..1000, seed in any::<u64>()) {
        let d = Space::discrete(1, start).unwrap();
        prop_assert_eq!(d.sample_with_seed(seed), Sample::Discrete(start));
    }
}

#[test]
fn enumerated_values_are_members_and_distinct() {
    let space = Space::tuple(vec![
        Space::one_of(vec![Space::discrete(3, 5).unwrap(), Space::discrete(2, 10).unwrap()]).unwrap(),
        Space::dict([("x", Space::discrete(2, 0).unwrap()), ("p", Space::box_space([0.5], [0.5]).unwrap())]).unwrap(),
    ])
    .unwrap();
    let all = space.enumerate().unwrap();
    assert_eq!(all.len(), 5 * 2);
    for (i, v) in all.iter().enumerate() {
        assert!(space.contains(v));
        assert!(!all[..i].contains(v), "duplicate enumeration {v:?}");
    }
}

#[test]
fn values_from_a_different_space_are_rejected() {
    let a = Space::dict([("a", Space::discrete(3, 0).unwrap())]).unwrap();
    let b = Space::dict([("b", Space::discrete(3, 0).unwrap())]).unwrap();
    let v = b.sample_with_seed(0);
    assert!(!a.contains(&v));
    assert!(matches!(a.flatten(&v), Err(SpaceError::DomainViolation(_))));
}
