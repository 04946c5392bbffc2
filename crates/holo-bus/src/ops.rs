//! Slice-level HRR operators.
//!
//! These work on raw component slices and assume the caller has already
//! checked lengths. [`crate::Engine`] wraps them with dimension checks,
//! labels, and metadata.

use holo_core::max_abs;

use crate::complex::Complex;
use crate::transform::{real_parts, SpectralTransform};

/// How unbind treated the spectrum of the known operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralCondition {
    /// Every bin cleared epsilon; regularized spectral division was used.
    WellConditioned,
    /// Some bin was at or below epsilon; plain correlation was used instead.
    IllConditioned,
}

/// Output of a guarded deconvolution.
#[derive(Debug, Clone)]
pub(crate) struct Deconvolution {
    pub components: Vec<f64>,
    pub condition: SpectralCondition,
    pub min_magnitude: f64,
}

/// Divides by the L2 norm. A zero-norm input comes back unchanged.
///
/// Components are first scaled by the largest magnitude, so finite input of
/// any magnitude yields a unit vector.
///
/// # Example
///
/// ```
/// use holo_bus::ops::normalize_components;
///
/// assert_eq!(normalize_components(&[3.0, 4.0]), vec![0.6, 0.8]);
/// assert_eq!(normalize_components(&[0.0, 0.0]), vec![0.0, 0.0]);
/// ```
pub fn normalize_components(values: &[f64]) -> Vec<f64> {
    let m = max_abs(values);
    if m == 0.0 || !m.is_finite() {
        return values.to_vec();
    }
    let scaled: Vec<f64> = values.iter().map(|x| x / m).collect();
    let norm = scaled.iter().map(|x| x * x).sum::<f64>().sqrt();
    scaled.into_iter().map(|x| x / norm).collect()
}

/// Cosine similarity of two equal-length slices; 0.0 if either has zero norm.
///
/// # Example
///
/// ```
/// use holo_bus::ops::cosine_similarity;
///
/// assert!((cosine_similarity(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < 1e-12);
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 0.0]), 0.0);
/// ```
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    if max_abs(a) == 0.0 || max_abs(b) == 0.0 {
        return 0.0;
    }
    let (a, b) = (normalize_components(a), normalize_components(b));
    a.iter().zip(&b).map(|(x, y)| x * y).sum()
}

/// Elementwise sum of equal-length slices, then normalization.
pub(crate) fn superpose_components<'a, I>(n: usize, operands: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let mut sum = vec![0.0; n];
    for operand in operands {
        for (acc, x) in sum.iter_mut().zip(operand) {
            *acc += x;
        }
    }
    normalize_components(&sum)
}

/// Circular convolution via elementwise spectral multiplication, normalized.
///
/// Both operands are rescaled to unit norm before the transform, so the
/// spectral product stays finite for any finite input.
pub(crate) fn circular_convolve(
    transform: &dyn SpectralTransform,
    a: &[f64],
    b: &[f64],
) -> Vec<f64> {
    let x = transform.forward_real(&normalize_components(a));
    let y = transform.forward_real(&normalize_components(b));
    let product: Vec<Complex> = x.iter().zip(&y).map(|(&xi, &yi)| xi * yi).collect();
    normalize_components(&real_parts(&transform.inverse(&product)))
}

/// Guarded circular deconvolution of `bound` by `known`, normalized.
///
/// With `m = min |X[i]|` over the spectrum of `known`:
/// - `m > epsilon`: `Y[i] = Z[i]·conj(X[i]) / (|X[i]|² + epsilon)`
/// - otherwise: `Y[i] = Z[i]·conj(X[i])` (correlation, no division)
///
/// The second branch is a lower-fidelity estimate, never NaN or infinity.
///
/// Both operands are rescaled to unit norm first. `epsilon` and the reported
/// `min_magnitude` therefore refer to the spectrum of the unit-norm `known`.
pub(crate) fn circular_deconvolve(
    transform: &dyn SpectralTransform,
    bound: &[f64],
    known: &[f64],
    epsilon: f64,
) -> Deconvolution {
    let z = transform.forward_real(&normalize_components(bound));
    let x = transform.forward_real(&normalize_components(known));
    let min_magnitude = x.iter().map(|xi| xi.abs()).fold(f64::INFINITY, f64::min);

    let condition = if min_magnitude > epsilon {
        SpectralCondition::WellConditioned
    } else {
        SpectralCondition::IllConditioned
    };

    let estimate: Vec<Complex> = z
        .iter()
        .zip(&x)
        .map(|(&zi, &xi)| {
            let correlated = zi * xi.conj();
            match condition {
                SpectralCondition::WellConditioned => {
                    correlated.scale(1.0 / (xi.norm_sqr() + epsilon))
                }
                SpectralCondition::IllConditioned => correlated,
            }
        })
        .collect();

    Deconvolution {
        components: normalize_components(&real_parts(&transform.inverse(&estimate))),
        condition,
        min_magnitude,
    }
}

/// Cyclic rotation to the right by `shift` positions.
pub(crate) fn rotate_right(values: &[f64], shift: usize) -> Vec<f64> {
    let mut out = values.to_vec();
    if !out.is_empty() {
        out.rotate_right(shift % values.len());
    }
    out
}

/// Cyclic rotation to the left by `shift` positions.
pub(crate) fn rotate_left(values: &[f64], shift: usize) -> Vec<f64> {
    let mut out = values.to_vec();
    if !out.is_empty() {
        out.rotate_left(shift % values.len());
    }
    out
}
