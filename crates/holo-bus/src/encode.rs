//! Deterministic spectrum encoder.
//!
//! `label + canonical(properties)` → FNV-1a seed → mulberry32 phases →
//! conjugate-symmetric unit-magnitude spectrum → inverse DFT → normalize.
//!
//! Conjugate symmetry (`X[N-k] = conj(X[k])`, with DC and Nyquist forced
//! real) makes the inverse transform real-valued, so the imaginary parts
//! dropped in the last step are rounding noise only.

use std::f64::consts::TAU;

use serde_json::Value;

use crate::complex::Complex;
use crate::ops::normalize_components;
use crate::rng::{fnv1a_32, Mulberry32};
use crate::transform::{idft_direct, real_parts};

/// Canonical serialization of an encode property list: compact JSON array.
///
/// Object keys come out sorted, so structurally equal properties always
/// serialize identically.
///
/// # Example
///
/// ```
/// use holo_bus::encode::canonical_properties;
/// use serde_json::json;
///
/// assert_eq!(canonical_properties(&[]), "[]");
/// assert_eq!(canonical_properties(&[json!("x"), json!(2)]), r#"["x",2]"#);
/// ```
pub fn canonical_properties(properties: &[Value]) -> String {
    let items: Vec<String> = properties.iter().map(Value::to_string).collect();
    format!("[{}]", items.join(","))
}

/// The 32-bit seed an encode of `(label, properties)` starts from.
///
/// # Example
///
/// ```
/// use holo_bus::encode::seed_for;
///
/// assert_eq!(seed_for("a", &[]), 0x04ad_3e98);
/// ```
pub fn seed_for(label: &str, properties: &[Value]) -> u32 {
    let mut text = String::from(label);
    text.push_str(&canonical_properties(properties));
    fnv1a_32(text.as_bytes())
}

/// Builds a length-`n` conjugate-symmetric spectrum with unit-magnitude bins.
///
/// Phases are drawn for bins `1..ceil(n/2)` in ascending order.
pub(crate) fn synthesize_spectrum(n: usize, rng: &mut Mulberry32) -> Vec<Complex> {
    let mut spectrum = vec![Complex::ZERO; n];
    if n == 0 {
        return spectrum;
    }
    spectrum[0] = Complex::ONE;
    if n % 2 == 0 {
        spectrum[n / 2] = Complex::ONE;
    }
    let mut k = 1;
    while 2 * k < n {
        let bin = Complex::from_phase(rng.next_f64() * TAU);
        spectrum[k] = bin;
        spectrum[n - k] = bin.conj();
        k += 1;
    }
    spectrum
}

/// Encodes `(label, properties)` into `n` normalized real components.
///
/// Always synthesizes through the direct inverse DFT, so the result does
/// not depend on the engine backend.
pub(crate) fn encode_components(n: usize, label: &str, properties: &[Value]) -> Vec<f64> {
    let seed = seed_for(label, properties);
    tracing::trace!(label, seed, n, "encoding label");
    let mut rng = Mulberry32::new(seed);
    let spectrum = synthesize_spectrum(n, &mut rng);
    normalize_components(&real_parts(&idft_direct(&spectrum)))
}
