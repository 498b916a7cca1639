//! Composable action/observation spaces for reinforcement learning.
//!
//! A [`Space`] describes the legal values of an action or observation:
//! `Discrete` integer ranges, bounded real `Box` vectors, and `Dict`, `Tuple`
//! and `OneOf` compositions of those, nested to any finite depth. Every space
//! supports the same operations through [`Domain`]: `len`, seeded `sample`,
//! `contains`, and `flatten`/`unflatten` to a fixed-width `f64` vector.
//!
//! ```
//! use gym_spaces::{Domain, Space, rng_from_seed};
//!
//! let space = Space::dict([
//!     ("move", Space::discrete(4, 0)?),
//!     ("aim", Space::box_space([-1.0, -1.0], [1.0, 1.0])?),
//! ])?;
//! let mut rng = rng_from_seed(7);
//! let action = space.sample(&mut rng);
//! assert!(space.contains(&action));
//! let flat = space.flatten(&action)?;
//! assert_eq!(flat.len(), 6);
//! assert_eq!(space.unflatten(&flat)?, action);
//! # Ok::<(), gym_spaces::SpaceError>(())
//! ```

pub mod error;
pub mod spaces;
pub mod utils;

pub use crate::error::{Result, SpaceError};
pub use crate::spaces::{BoxSpace, Choice, Dict, Discrete, Domain, OneOf, Sample, Sampler, Space, SpaceDef, Tuple};
pub use crate::utils::{RngStream, SeedSequence, rng_from_seed, split_n};
