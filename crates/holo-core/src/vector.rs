//! The HoloVector: the value every engine operation produces.
//!
//! A HoloVector is an ordered sequence of `N` real components plus two
//! informational fields: the `semantic_binding` provenance label and the
//! `phi_ratio` display constant. Vectors are value objects: no method
//! here mutates `self`, every transformation returns a new vector.

use serde::{Deserialize, Serialize};

use crate::error::{HoloError, HoloResult};
use crate::PHI;

/// An immutable high-dimensional real vector.
///
/// Serializes to the interchange shape
/// `{ "dimensions": [...], "semanticBinding": "...", "phiRatio": 1.618... }`.
///
/// # Example
///
/// ```
/// use holo_core::HoloVector;
///
/// let v = HoloVector::from_dimensions(vec![3.0, 4.0], "point");
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.norm(), 5.0);
/// assert_eq!(v.semantic_binding, "point");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoloVector {
    /// The `N` real components.
    pub dimensions: Vec<f64>,

    /// Provenance label, e.g. `"bind(agent,cat)"`. Purely informational.
    pub semantic_binding: String,

    /// Golden-ratio metadata. Not used in any computation.
    #[serde(default = "default_phi")]
    pub phi_ratio: f64,
}

fn default_phi() -> f64 {
    PHI
}

impl HoloVector {
    /// Creates a vector from raw components with the given label.
    pub fn from_dimensions(dimensions: Vec<f64>, semantic_binding: impl Into<String>) -> Self {
        Self {
            dimensions,
            semantic_binding: semantic_binding.into(),
            phi_ratio: PHI,
        }
    }

    /// Creates the all-zero vector of length `n`.
    ///
    /// # Example
    ///
    /// ```
    /// use holo_core::HoloVector;
    ///
    /// let z = HoloVector::zeros(8);
    /// assert!(z.is_zero());
    /// assert_eq!(z.semantic_binding, "zero");
    /// ```
    pub fn zeros(n: usize) -> Self {
        Self::from_dimensions(vec![0.0; n], "zero")
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns `true` if the vector has no components.
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Returns `true` if every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.dimensions.iter().all(|&x| x == 0.0)
    }

    /// Euclidean (L2) norm. See [`l2_norm`].
    pub fn norm(&self) -> f64 {
        l2_norm(&self.dimensions)
    }

    /// Dot product with another vector of the same length.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::DimensionMismatch`] if the lengths differ.
    ///
    /// # Example
    ///
    /// ```
    /// use holo_core::HoloVector;
    ///
    /// let a = HoloVector::from_dimensions(vec![1.0, 2.0], "a");
    /// let b = HoloVector::from_dimensions(vec![3.0, -1.0], "b");
    /// assert_eq!(a.dot(&b).unwrap(), 1.0);
    /// ```
    pub fn dot(&self, other: &HoloVector) -> HoloResult<f64> {
        if self.len() != other.len() {
            return Err(HoloError::DimensionMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(self
            .dimensions
            .iter()
            .zip(&other.dimensions)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Returns `true` if every component is finite (no NaN or infinity).
    pub fn is_finite(&self) -> bool {
        self.dimensions.iter().all(|x| x.is_finite())
    }

    /// Serializes to the JSON interchange format.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::Serialization`] if a component is NaN or
    /// infinite. JSON has no encoding for those values.
    pub fn to_json(&self) -> HoloResult<String> {
        if let Some(i) = self.dimensions.iter().position(|x| !x.is_finite()) {
            return Err(HoloError::Serialization {
                message: format!("component {i} is not finite: {}", self.dimensions[i]),
            });
        }
        Ok(serde_json::to_string(self)?)
    }

    /// Parses the JSON interchange format.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::Serialization`] on malformed input.
    ///
    /// # Example
    ///
    /// ```
    /// use holo_core::HoloVector;
    ///
    /// let json = r#"{"dimensions":[0.6,0.8],"semanticBinding":"x","phiRatio":1.618033988749895}"#;
    /// let v = HoloVector::from_json(json).unwrap();
    /// assert_eq!(v.dimensions, vec![0.6, 0.8]);
    /// ```
    pub fn from_json(json: &str) -> HoloResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Largest absolute component; 0.0 for an empty slice.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |m, x| m.max(x.abs()))
}

/// Euclidean (L2) norm, scaled by the largest component so that the sum of
/// squares neither overflows nor underflows for finite input.
///
/// # Example
///
/// ```
/// use holo_core::l2_norm;
///
/// assert_eq!(l2_norm(&[3.0, 4.0]), 5.0);
/// assert!((l2_norm(&[3e200, 4e200]) / 5e200 - 1.0).abs() < 1e-15);
/// assert!((l2_norm(&[3e-200, 4e-200]) / 5e-200 - 1.0).abs() < 1e-15);
/// ```
pub fn l2_norm(values: &[f64]) -> f64 {
    let m = max_abs(values);
    if m == 0.0 || !m.is_finite() {
        return m;
    }
    m * values.iter().map(|x| (x / m) * (x / m)).sum::<f64>().sqrt()
}
