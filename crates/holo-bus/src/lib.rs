//! # holo-bus
//!
//! The spectral algebra engine for holo.
//!
//! Implements Holographic Reduced Representation operations on
//! [`HoloVector`]s:
//! - **Encode**: deterministic hash-seeded, unit-magnitude-spectrum vectors
//! - **Bind** (⊛): circular convolution via the spectral domain
//! - **Unbind** (⊛⁻¹): guarded circular deconvolution with a correlation
//!   fallback for ill-conditioned spectra
//! - **Superpose** (+): additive bundling
//! - **Permute** (ρ): cyclic role permutation
//! - **Similarity**: cosine similarity
//!
//! The transform backend (`fft` or `naive`) is fixed when the [`Engine`] is
//! built.
//!
//! ## Architecture Rules
//!
//! - No `async` code; pure synchronous algebra.
//! - No shared mutable state: the PRNG is created per encode call.
//! - Within the workspace, depends only on `holo-core`.

pub use holo_core;
pub use holo_core::{Backend, EngineConfig, HoloError, HoloResult, HoloVector};

mod complex;
mod transform;

pub mod encode;
pub mod engine;
pub mod ops;
pub mod rng;

pub use engine::{Engine, Unbound};
pub use ops::SpectralCondition;
