//! # holo-core
//!
//! Foundational value types for the holo engine.
//!
//! - [`HoloVector`]: an immutable, fixed-length real vector plus its
//!   provenance label and golden-ratio metadata. This is also the JSON
//!   interchange shape: `{ dimensions, semanticBinding, phiRatio }`.
//! - [`EngineConfig`] / [`Backend`]: immutable engine configuration.
//! - [`HoloError`]: the single error type shared by every crate.
//!
//! ## Architecture Rules
//!
//! - No numerics beyond norm and dot helpers; spectral work lives in `holo-bus`.
//! - No `async` code.
//! - Depends on no other `holo-*` crate.

pub mod config;
pub mod error;
pub mod vector;

pub use config::{Backend, EngineConfig};
pub use error::{HoloError, HoloResult};
pub use vector::{l2_norm, max_abs, HoloVector};

/// Default vector dimension `N`.
pub const DEFAULT_DIMENSION: usize = 1024;

/// The golden ratio φ, carried on every vector as display metadata.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Default spectral guard used by unbind, both as the ill-conditioning
/// threshold on `min |X[i]|` and as the Tikhonov term in the division.
pub const DEFAULT_EPSILON: f64 = 1e-10;
