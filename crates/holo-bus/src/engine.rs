//! The Engine, the caller-facing HRR API.
//!
//! An engine owns an immutable [`EngineConfig`] and the spectral transform
//! chosen for its backend. Every method takes `&self`, returns a fresh
//! [`HoloVector`], and is safe to call from many threads at once.

use std::sync::Arc;

use serde_json::Value;

use holo_core::{Backend, EngineConfig, HoloError, HoloResult, HoloVector};

use crate::encode::encode_components;
use crate::ops::{
    circular_convolve, circular_deconvolve, cosine_similarity, normalize_components,
    rotate_left, rotate_right, superpose_components, SpectralCondition,
};
use crate::transform::{self, SpectralTransform};

/// Result of [`Engine::unbind_detailed`].
#[derive(Debug, Clone)]
pub struct Unbound {
    /// The recovered estimate.
    pub vector: HoloVector,
    /// Which deconvolution branch produced it.
    pub condition: SpectralCondition,
    /// Smallest spectral magnitude of the known operand, taken after it is
    /// rescaled to unit norm.
    pub min_magnitude: f64,
}

/// Holographic reduced representation engine.
///
/// # Example
///
/// ```
/// use holo_bus::Engine;
///
/// let engine = Engine::build(512, "fft".parse().unwrap()).unwrap();
/// let role = engine.encode("agent", &[]);
/// let filler = engine.encode("cat", &[]);
///
/// let bound = engine.bind([&role, &filler]).unwrap();
/// assert_eq!(bound.semantic_binding, "bind(agent,cat)");
///
/// let recovered = engine.unbind(&bound, &role).unwrap();
/// assert!(engine.similarity(&recovered, &filler).unwrap() > 0.9);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    transform: Arc<dyn SpectralTransform>,
}

impl Default for Engine {
    /// Dimension 1024, `fft` backend.
    fn default() -> Self {
        let config = EngineConfig::default();
        let transform = Arc::from(transform::for_backend(config.backend));
        Self { config, transform }
    }
}

impl Engine {
    /// Creates an engine from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns any error from [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> HoloResult<Self> {
        config.validate()?;
        tracing::debug!(
            dimension = config.dimension,
            backend = %config.backend,
            epsilon = config.epsilon,
            "building holo engine"
        );
        let transform = Arc::from(transform::for_backend(config.backend));
        Ok(Self { config, transform })
    }

    /// Creates an engine with the given dimension and backend, other
    /// settings at their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::InvalidDimension`] if `dimension == 0`.
    pub fn build(dimension: usize, backend: Backend) -> HoloResult<Self> {
        Self::new(
            EngineConfig::default()
                .with_dimension(dimension)
                .with_backend(backend),
        )
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Vector dimension `N`.
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Spectral backend in use.
    pub fn backend(&self) -> Backend {
        self.config.backend
    }

    /// Deterministically encodes a label and its properties.
    ///
    /// Identical inputs give bit-identical output on every backend;
    /// distinct inputs give nearly orthogonal vectors.
    ///
    /// # Example
    ///
    /// ```
    /// use holo_bus::Engine;
    /// use serde_json::json;
    ///
    /// let engine = Engine::default();
    /// let a = engine.encode("cat", &[json!("black")]);
    /// let b = engine.encode("cat", &[json!("black")]);
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 1024);
    /// assert_eq!(a.semantic_binding, "cat");
    /// ```
    pub fn encode(&self, label: &str, properties: &[Value]) -> HoloVector {
        self.produce(
            encode_components(self.config.dimension, label, properties),
            label.to_string(),
        )
    }

    /// Encodes many `(label, properties)` pairs. Output order follows input.
    pub fn encode_batch<'a, I>(&self, items: I) -> Vec<HoloVector>
    where
        I: IntoIterator<Item = (&'a str, &'a [Value])>,
    {
        items
            .into_iter()
            .map(|(label, properties)| self.encode(label, properties))
            .collect()
    }

    /// Binds operands by circular convolution, folding left to right.
    ///
    /// A single operand comes back normalized with its label unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::EmptyOperandSet`] if no operands are given and
    /// [`HoloError::DimensionMismatch`] if any operand's length is not `N`.
    pub fn bind<'a, I>(&self, vectors: I) -> HoloResult<HoloVector>
    where
        I: IntoIterator<Item = &'a HoloVector>,
    {
        let mut operands = vectors.into_iter();
        let first = operands
            .next()
            .ok_or(HoloError::EmptyOperandSet { operation: "bind" })?;
        self.check_dimension(first)?;

        let mut acc = self.produce(
            normalize_components(&first.dimensions),
            first.semantic_binding.clone(),
        );
        for next in operands {
            self.check_dimension(next)?;
            let components =
                circular_convolve(self.transform.as_ref(), &acc.dimensions, &next.dimensions);
            let label = format!("bind({},{})", acc.semantic_binding, next.semantic_binding);
            acc = self.produce(components, label);
        }
        Ok(acc)
    }

    /// Recovers the operand that, bound with `known`, produced `bound`.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::DimensionMismatch`] if either length is not `N`.
    pub fn unbind(&self, bound: &HoloVector, known: &HoloVector) -> HoloResult<HoloVector> {
        Ok(self.unbind_detailed(bound, known)?.vector)
    }

    /// Like [`Engine::unbind`], also reporting which deconvolution branch ran.
    ///
    /// # Example
    ///
    /// ```
    /// use holo_bus::{Engine, SpectralCondition};
    /// use holo_core::HoloVector;
    ///
    /// let engine = Engine::build(16, Default::default()).unwrap();
    /// let bound = engine.encode("x", &[]);
    /// let out = engine.unbind_detailed(&bound, &HoloVector::zeros(16)).unwrap();
    /// assert_eq!(out.condition, SpectralCondition::IllConditioned);
    /// assert!(out.vector.is_finite());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::DimensionMismatch`] if either length is not `N`.
    pub fn unbind_detailed(&self, bound: &HoloVector, known: &HoloVector) -> HoloResult<Unbound> {
        self.check_dimension(bound)?;
        self.check_dimension(known)?;

        let out = circular_deconvolve(
            self.transform.as_ref(),
            &bound.dimensions,
            &known.dimensions,
            self.config.epsilon,
        );
        if out.condition == SpectralCondition::IllConditioned {
            tracing::debug!(
                min_magnitude = out.min_magnitude,
                epsilon = self.config.epsilon,
                known = %known.semantic_binding,
                "ill-conditioned spectrum, unbinding by correlation"
            );
        }

        let label = format!("unbind({},{})", bound.semantic_binding, known.semantic_binding);
        Ok(Unbound {
            vector: self.produce(out.components, label),
            condition: out.condition,
            min_magnitude: out.min_magnitude,
        })
    }

    /// L2-normalizes a vector. The zero vector is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::DimensionMismatch`] if the length is not `N`.
    pub fn normalize(&self, v: &HoloVector) -> HoloResult<HoloVector> {
        self.check_dimension(v)?;
        Ok(self.produce(normalize_components(&v.dimensions), v.semantic_binding.clone()))
    }

    /// Superposes (bundles) operands: elementwise sum, then normalization.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::EmptyOperandSet`] if no operands are given and
    /// [`HoloError::DimensionMismatch`] if any operand's length is not `N`.
    pub fn superpose<'a, I>(&self, vectors: I) -> HoloResult<HoloVector>
    where
        I: IntoIterator<Item = &'a HoloVector>,
    {
        let operands: Vec<&HoloVector> = vectors.into_iter().collect();
        if operands.is_empty() {
            return Err(HoloError::EmptyOperandSet {
                operation: "superpose",
            });
        }
        for v in &operands {
            self.check_dimension(v)?;
        }

        let components = superpose_components(
            self.config.dimension,
            operands.iter().map(|v| v.dimensions.as_slice()),
        );
        let labels: Vec<&str> = operands
            .iter()
            .map(|v| v.semantic_binding.as_str())
            .collect();
        Ok(self.produce(components, format!("superpose({})", labels.join(","))))
    }

    /// Cosine similarity; 0.0 if either operand has zero norm.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::DimensionMismatch`] if either length is not `N`.
    pub fn similarity(&self, a: &HoloVector, b: &HoloVector) -> HoloResult<f64> {
        self.check_dimension(a)?;
        self.check_dimension(b)?;
        Ok(cosine_similarity(&a.dimensions, &b.dimensions))
    }

    /// Role permutation ρ: cyclic rotation right by `shift`.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::DimensionMismatch`] if the length is not `N`.
    pub fn permute(&self, v: &HoloVector, shift: usize) -> HoloResult<HoloVector> {
        self.check_dimension(v)?;
        Ok(self.produce(
            rotate_right(&v.dimensions, shift),
            format!("permute({},{shift})", v.semantic_binding),
        ))
    }

    /// Undoes [`Engine::permute`] with the same `shift`.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::DimensionMismatch`] if the length is not `N`.
    pub fn inverse_permute(&self, v: &HoloVector, shift: usize) -> HoloResult<HoloVector> {
        self.check_dimension(v)?;
        Ok(self.produce(
            rotate_left(&v.dimensions, shift),
            format!("unpermute({},{shift})", v.semantic_binding),
        ))
    }

    fn check_dimension(&self, v: &HoloVector) -> HoloResult<()> {
        if v.len() != self.config.dimension {
            return Err(HoloError::DimensionMismatch {
                expected: self.config.dimension,
                actual: v.len(),
            });
        }
        Ok(())
    }

    fn produce(&self, dimensions: Vec<f64>, semantic_binding: String) -> HoloVector {
        HoloVector {
            dimensions,
            semantic_binding,
            phi_ratio: self.config.phi_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(n: usize) -> Engine {
        Engine::build(n, Backend::Fft).unwrap()
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(
            Engine::build(0, Backend::Naive).unwrap_err(),
            HoloError::InvalidDimension { dimension: 0 }
        );
    }

    #[test]
    fn default_engine_is_1024_fft() {
        let e = Engine::default();
        assert_eq!(e.dimension(), 1024);
        assert_eq!(e.backend(), Backend::Fft);
    }

    #[test]
    fn bind_of_nothing_is_error() {
        let empty: Vec<HoloVector> = Vec::new();
        assert_eq!(
            engine(8).bind(&empty).unwrap_err(),
            HoloError::EmptyOperandSet { operation: "bind" }
        );
    }

    #[test]
    fn superpose_of_nothing_is_error() {
        let err = engine(8)
            .superpose(std::iter::empty::<&HoloVector>())
            .unwrap_err();
        assert_eq!(err, HoloError::EmptyOperandSet { operation: "superpose" });
    }

    #[test]
    fn bind_rejects_wrong_dimension() {
        let e = engine(8);
        let a = e.encode("a", &[]);
        let short = HoloVector::zeros(7);
        assert_eq!(
            e.bind([&a, &short]).unwrap_err(),
            HoloError::DimensionMismatch {
                expected: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn unbind_rejects_wrong_dimension() {
        let e = engine(8);
        let a = e.encode("a", &[]);
        assert!(matches!(
            e.unbind(&a, &HoloVector::zeros(9)),
            Err(HoloError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn labels_record_operation_history() {
        let e = engine(16);
        let a = e.encode("a", &[]);
        let b = e.encode("b", &[]);
        let c = e.encode("c", &[]);
        assert_eq!(
            e.bind([&a, &b, &c]).unwrap().semantic_binding,
            "bind(bind(a,b),c)"
        );
        assert_eq!(e.unbind(&a, &b).unwrap().semantic_binding, "unbind(a,b)");
        assert_eq!(
            e.superpose([&a, &b, &c]).unwrap().semantic_binding,
            "superpose(a,b,c)"
        );
        assert_eq!(e.permute(&a, 3).unwrap().semantic_binding, "permute(a,3)");
    }

    #[test]
    fn single_operand_bind_is_normalized_copy() {
        let e = engine(4);
        let v = HoloVector::from_dimensions(vec![2.0, 0.0, 0.0, 0.0], "x");
        let out = e.bind([&v]).unwrap();
        assert_eq!(out.dimensions, vec![1.0, 0.0, 0.0, 0.0]);
        assert_eq!(out.semantic_binding, "x");
    }

    #[test]
    fn produced_vectors_carry_configured_phi() {
        let config = EngineConfig {
            phi_ratio: 2.5,
            ..EngineConfig::default().with_dimension(8)
        };
        let e = Engine::new(config).unwrap();
        assert_eq!(e.encode("a", &[]).phi_ratio, 2.5);
    }

    #[test]
    fn normalize_leaves_zero_vector_unchanged() {
        let e = engine(8);
        let z = HoloVector::zeros(8);
        assert_eq!(e.normalize(&z).unwrap().dimensions, z.dimensions);
    }

    #[test]
    fn permute_roundtrip_is_exact() {
        let e = engine(32);
        let v = e.encode("role", &[]);
        let back = e.inverse_permute(&e.permute(&v, 5).unwrap(), 5).unwrap();
        assert_eq!(back.dimensions, v.dimensions);
    }

    #[test]
    fn permuted_vector_is_dissimilar() {
        let e = engine(256);
        let v = e.encode("role", &[]);
        let p = e.permute(&v, 1).unwrap();
        assert!(e.similarity(&v, &p).unwrap().abs() < 0.3);
    }

    #[test]
    fn encode_batch_matches_single_encode() {
        let e = engine(32);
        let props = [Value::from(1)];
        let none: &[Value] = &[];
        let items = vec![("x", none), ("y", &props[..])];
        let batch = e.encode_batch(items);
        assert_eq!(batch[0], e.encode("x", &[]));
        assert_eq!(batch[1], e.encode("y", &props));
    }
}
