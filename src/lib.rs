//! # holo
//!
//! Holographic Reduced Representation engine: deterministic encoding of
//! labels into high-dimensional real vectors, with spectral bind
//! (circular convolution) and guarded unbind (circular deconvolution).
//!
//! This umbrella crate re-exports the workspace libraries:
//!
//! - [`holo_core`]: `HoloVector`, `EngineConfig`, `Backend`, `HoloError`
//! - [`holo_bus`]: the [`Engine`] and its operators
//!
//! ```
//! use holo::{Backend, Engine};
//!
//! let engine = Engine::build(256, Backend::Naive).unwrap();
//! let v = engine.encode("hello", &[]);
//! assert!((v.norm() - 1.0).abs() < 1e-12);
//! ```

pub use holo_bus;
pub use holo_core;

pub use holo_bus::{Engine, SpectralCondition, Unbound};
pub use holo_core::{
    Backend, EngineConfig, HoloError, HoloResult, HoloVector, DEFAULT_DIMENSION, DEFAULT_EPSILON,
    PHI,
};
