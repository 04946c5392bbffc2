//! Smoke test: verify all crates compile and basic types are accessible.

#[test]
fn core_types_accessible() {
    let _v = holo::HoloVector::zeros(4);
    let _config = holo::EngineConfig::default();
    let _err = holo::HoloError::EmptyOperandSet { operation: "bind" };
    let _engine = holo::Engine::default();
}

#[test]
fn constants_match_documented_defaults() {
    assert_eq!(holo::DEFAULT_DIMENSION, 1024);
    assert_eq!(holo::DEFAULT_EPSILON, 1e-10);
    assert!((holo::PHI - (1.0 + 5.0_f64.sqrt()) / 2.0).abs() < 1e-15);
}

#[test]
fn default_engine_produces_full_length_vectors() {
    let engine = holo::Engine::default();
    let v = engine.encode("smoke", &[]);
    assert_eq!(v.len(), holo::DEFAULT_DIMENSION);
    assert_eq!(v.phi_ratio, holo::PHI);
}
