//! Engine configuration.
//!
//! An [`EngineConfig`] is fixed when the engine is built and never changes
//! afterwards. It is the only state an engine holds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HoloError, HoloResult};
use crate::{DEFAULT_DIMENSION, DEFAULT_EPSILON, PHI};

/// Which spectral transform the engine uses for bind and unbind.
///
/// # Example
///
/// ```
/// use holo_core::Backend;
///
/// let b: Backend = "naive".parse().unwrap();
/// assert_eq!(b, Backend::Naive);
/// assert_eq!(Backend::Fft.to_string(), "fft");
/// assert!("gpu".parse::<Backend>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Radix-2 FFT when `N` is a power of two, direct DFT otherwise.
    #[default]
    Fft,
    /// Direct O(N²) DFT for every length.
    Naive,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Fft => f.write_str("fft"),
            Backend::Naive => f.write_str("naive"),
        }
    }
}

impl FromStr for Backend {
    type Err = HoloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fft" => Ok(Backend::Fft),
            "naive" => Ok(Backend::Naive),
            _ => Err(HoloError::InvalidBackend { name: s.to_string() }),
        }
    }
}

/// Immutable engine configuration.
///
/// # Example
///
/// ```
/// use holo_core::{Backend, EngineConfig};
///
/// let config = EngineConfig::default()
///     .with_dimension(256)
///     .with_backend(Backend::Naive);
/// assert_eq!(config.dimension, 256);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Vector dimension `N`. Every vector the engine produces has this length.
    pub dimension: usize,

    /// Spectral backend for bind/unbind.
    pub backend: Backend,

    /// Unbind guard: threshold on `min |X[i]|` and regularization term.
    pub epsilon: f64,

    /// Golden-ratio metadata stamped on every produced vector.
    pub phi_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            backend: Backend::default(),
            epsilon: DEFAULT_EPSILON,
            phi_ratio: PHI,
        }
    }
}

impl EngineConfig {
    /// Sets the vector dimension.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets the spectral backend.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the unbind guard epsilon.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Checks that the configuration can build an engine.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::InvalidDimension`] if `dimension == 0`, and
    /// [`HoloError::InvalidConfig`] if `epsilon` is not a finite positive number.
    pub fn validate(&self) -> HoloResult<()> {
        if self.dimension == 0 {
            return Err(HoloError::InvalidDimension {
                dimension: self.dimension,
            });
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(HoloError::InvalidConfig {
                message: format!("epsilon must be finite and positive, got {}", self.epsilon),
            });
        }
        Ok(())
    }

    /// Parses a JSON configuration document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HoloError::InvalidConfig`] on malformed JSON or an unknown
    /// backend name, and any error from [`EngineConfig::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use holo_core::{Backend, EngineConfig};
    ///
    /// let config = EngineConfig::from_json_str(r#"{"dimension": 8, "backend": "naive"}"#).unwrap();
    /// assert_eq!(config.dimension, 8);
    /// assert_eq!(config.backend, Backend::Naive);
    /// assert_eq!(config.epsilon, holo_core::DEFAULT_EPSILON);
    /// ```
    pub fn from_json_str(json: &str) -> HoloResult<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| HoloError::InvalidConfig {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = EngineConfig::default();
        assert_eq!(config.dimension, 1024);
        assert_eq!(config.backend, Backend::Fft);
        assert_eq!(config.epsilon, 1e-10);
        assert_eq!(config.phi_ratio, PHI);
    }

    #[test]
    fn zero_dimension_rejected() {
        let config = EngineConfig::default().with_dimension(0);
        assert_eq!(
            config.validate(),
            Err(HoloError::InvalidDimension { dimension: 0 })
        );
    }

    #[test]
    fn non_positive_epsilon_rejected() {
        for eps in [-1.0, 0.0, f64::NAN] {
            let config = EngineConfig::default().with_epsilon(eps);
            assert!(matches!(
                config.validate(),
                Err(HoloError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn backend_parse_is_case_insensitive() {
        assert_eq!("FFT".parse::<Backend>().unwrap(), Backend::Fft);
        assert_eq!(" Naive ".parse::<Backend>().unwrap(), Backend::Naive);
    }

    #[test]
    fn unknown_backend_in_json_is_config_error() {
        let err = EngineConfig::from_json_str(r#"{"backend": "gpu"}"#).unwrap_err();
        assert!(matches!(err, HoloError::InvalidConfig { .. }));
    }

    #[test]
    fn json_roundtrip_keeps_values() {
        let config = EngineConfig::default()
            .with_dimension(64)
            .with_backend(Backend::Naive)
            .with_epsilon(1e-6);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"backend\":\"naive\""));
        assert!(json.contains("\"phiRatio\""));
        assert_eq!(EngineConfig::from_json_str(&json).unwrap(), config);
    }
}
