//! Spectral transform layer.
//!
//! Two implementations of [`SpectralTransform`] are selected once, when the
//! engine is built:
//!
//! - [`FftTransform`]: recursive radix-2 Cooley–Tukey for power-of-two
//!   lengths; any other length goes through the direct DFT. Zero-padding is
//!   not an option there because it would turn the circular convolution that
//!   bind relies on into a linear one.
//! - [`NaiveTransform`]: direct O(N²) DFT for every length.
//!
//! Inverses reuse the forward kernel through the conjugate trick:
//! `ifft(X) = conj(fft(conj(X))) / N`.

use std::f64::consts::TAU;
use std::fmt;

use holo_core::Backend;

use crate::complex::Complex;

/// Forward/inverse discrete Fourier transform over complex buffers.
pub(crate) trait SpectralTransform: fmt::Debug + Send + Sync {
    /// Forward transform. Output length equals input length.
    fn forward(&self, signal: &[Complex]) -> Vec<Complex>;

    /// Inverse transform, normalized by `1/N`.
    fn inverse(&self, spectrum: &[Complex]) -> Vec<Complex>;

    /// Forward transform of a real signal.
    fn forward_real(&self, signal: &[f64]) -> Vec<Complex> {
        self.forward(&to_complex(signal))
    }
}

/// Radix-2 FFT with a direct-DFT path for non-power-of-two lengths.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FftTransform;

impl SpectralTransform for FftTransform {
    fn forward(&self, signal: &[Complex]) -> Vec<Complex> {
        if signal.len().is_power_of_two() {
            fft(signal)
        } else {
            dft_direct(signal)
        }
    }

    fn inverse(&self, spectrum: &[Complex]) -> Vec<Complex> {
        if spectrum.len().is_power_of_two() {
            ifft(spectrum)
        } else {
            idft_direct(spectrum)
        }
    }
}

/// Direct O(N²) DFT.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct NaiveTransform;

impl SpectralTransform for NaiveTransform {
    fn forward(&self, signal: &[Complex]) -> Vec<Complex> {
        dft_direct(signal)
    }

    fn inverse(&self, spectrum: &[Complex]) -> Vec<Complex> {
        idft_direct(spectrum)
    }
}

/// Builds the transform for a configured backend.
pub(crate) fn for_backend(backend: Backend) -> Box<dyn SpectralTransform> {
    match backend {
        Backend::Fft => Box::new(FftTransform),
        Backend::Naive => Box::new(NaiveTransform),
    }
}

/// Recursive radix-2 decimation-in-time FFT.
///
/// # Panics
///
/// Panics if `signal.len()` is not a power of two. Callers must pad.
pub(crate) fn fft(signal: &[Complex]) -> Vec<Complex> {
    let n = signal.len();
    assert!(
        n.is_power_of_two(),
        "radix-2 FFT length must be a power of two, got {n}"
    );
    if n == 1 {
        return vec![signal[0]];
    }

    let even: Vec<Complex> = signal.iter().step_by(2).copied().collect();
    let odd: Vec<Complex> = signal.iter().skip(1).step_by(2).copied().collect();
    let even = fft(&even);
    let odd = fft(&odd);

    let half = n / 2;
    let mut out = vec![Complex::ZERO; n];
    for k in 0..half {
        let twiddle = Complex::from_phase(-TAU * k as f64 / n as f64);
        let t = twiddle * odd[k];
        out[k] = even[k] + t;
        out[k + half] = even[k] - t;
    }
    out
}

/// Inverse radix-2 FFT via the conjugate trick.
///
/// # Panics
///
/// Panics if `spectrum.len()` is not a power of two.
pub(crate) fn ifft(spectrum: &[Complex]) -> Vec<Complex> {
    conjugate_inverse(spectrum, fft)
}

/// Direct DFT for any length `N ≥ 1`.
///
/// Twiddles come from a single table indexed by `(k·t) mod N`, so every
/// angle is reduced to `[0, 2π)` before the trig call.
pub(crate) fn dft_direct(signal: &[Complex]) -> Vec<Complex> {
    let n = signal.len();
    let twiddles: Vec<Complex> = (0..n)
        .map(|j| Complex::from_phase(-2.0 * std::f64::consts::PI * j as f64 / n as f64))
        .collect();

    (0..n)
        .map(|k| {
            signal
                .iter()
                .enumerate()
                .fold(Complex::ZERO, |acc, (t, &x)| acc + x * twiddles[(k * t) % n])
        })
        .collect()
}

/// Inverse direct DFT for any length `N ≥ 1`.
pub(crate) fn idft_direct(spectrum: &[Complex]) -> Vec<Complex> {
    conjugate_inverse(spectrum, dft_direct)
}

fn conjugate_inverse<F>(spectrum: &[Complex], forward: F) -> Vec<Complex>
where
    F: FnOnce(&[Complex]) -> Vec<Complex>,
{
    if spectrum.is_empty() {
        return Vec::new();
    }
    let conjugated: Vec<Complex> = spectrum.iter().map(|z| z.conj()).collect();
    let scale = 1.0 / spectrum.len() as f64;
    forward(&conjugated)
        .into_iter()
        .map(|z| z.conj().scale(scale))
        .collect()
}

pub(crate) fn to_complex(signal: &[f64]) -> Vec<Complex> {
    signal.iter().map(|&re| Complex::new(re, 0.0)).collect()
}

pub(crate) fn real_parts(buf: &[Complex]) -> Vec<f64> {
    buf.iter().map(|z| z.re).collect()
}
