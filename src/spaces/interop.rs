//! Numeric backend interop for flat encodings.
//! Fully gated behind feature flags; the core works on `Vec<f64>` and `&[f64]`.

// ndarray interop
#[cfg(feature = "ndarray")]
pub mod ndarray_impl {
    use ndarray::{Array1, ArrayView1};

    use crate::error::Result;
    use crate::spaces::{Domain, Sample, Space};

    impl Space {
        /// Flatten `elem` into an `ndarray::Array1<f64>`.
        pub fn flatten_array(&self, elem: &Sample) -> Result<Array1<f64>> {
            self.flatten(elem).map(Array1::from_vec)
        }

        /// Decode a (possibly strided) 1-D view.
        pub fn unflatten_array(&self, flat: ArrayView1<'_, f64>) -> Result<Sample> {
            match flat.as_slice() {
                Some(slice) => self.unflatten(slice),
                None => self.unflatten(&flat.to_vec()),
            }
        }
    }

}

// nalgebra interop
#[cfg(feature = "nalgebra")]
pub mod nalgebra_impl {
    use nalgebra::DVector;

    use crate::error::Result;
    use crate::spaces::{Domain, Sample, Space};

    impl Space {
        /// Flatten `elem` into an `nalgebra::DVector<f64>`.
        pub fn flatten_dvector(&self, elem: &Sample) -> Result<DVector<f64>> {
            self.flatten(elem).map(DVector::from_vec)
        }

        pub fn unflatten_dvector(&self, flat: &DVector<f64>) -> Result<Sample> {
            self.unflatten(flat.as_slice())
        }
    }

}
