//! Integration test: vectors round-trip through engine operations and the
//! JSON interchange format without losing their algebraic meaning.

use holo::{Backend, Engine, EngineConfig, HoloVector, SpectralCondition};

#[test]
fn subject_predicate_object_roundtrip() {
    let engine = Engine::build(1024, Backend::Fft).unwrap();

    let subject = engine.encode("subject", &[]);
    let predicate = engine.encode("predicate", &[]);
    let object = engine.encode("object", &[]);
    let alice = engine.encode("alice", &[]);
    let knows = engine.encode("knows", &[]);
    let bob = engine.encode("bob", &[]);

    let triple = engine
        .superpose([
            &engine.bind([&subject, &alice]).unwrap(),
            &engine.bind([&predicate, &knows]).unwrap(),
            &engine.bind([&object, &bob]).unwrap(),
        ])
        .unwrap();

    // Serialize and parse as an external caller would
    let wire = triple.to_json().expect("vector should serialize");
    let parsed = HoloVector::from_json(&wire).expect("vector should parse");
    assert_eq!(parsed, triple);

    let fillers = [(&subject, &alice), (&predicate, &knows), (&object, &bob)];
    let candidates = [&alice, &knows, &bob];
    for (role, expected) in fillers {
        let guess = engine.unbind(&parsed, role).unwrap();
        let best = candidates
            .iter()
            .max_by(|a, b| {
                let sa = engine.similarity(&guess, a).unwrap();
                let sb = engine.similarity(&guess, b).unwrap();
                sa.partial_cmp(&sb).unwrap()
            })
            .unwrap();
        assert_eq!(best.semantic_binding, expected.semantic_binding);
    }
}

#[test]
fn degenerate_known_vector_degrades_gracefully() {
    let engine = Engine::new(EngineConfig::default().with_dimension(64)).unwrap();
    let v = engine.encode("anything", &[]);

    let out = engine
        .unbind_detailed(&v, &HoloVector::zeros(64))
        .expect("zero known vector is not an error");
    assert_eq!(out.condition, SpectralCondition::IllConditioned);
    assert!(out.vector.is_finite());
    assert_eq!(out.vector.len(), 64);
}

#[test]
fn backends_produce_matching_pipelines() {
    let fft = Engine::build(100, Backend::Fft).unwrap();
    let naive = Engine::build(100, Backend::Naive).unwrap();

    let a = fft.encode("left", &[]);
    let b = naive.encode("right", &[]);
    let via_fft = fft.unbind(&fft.bind([&a, &b]).unwrap(), &b).unwrap();
    let via_naive = naive.unbind(&naive.bind([&a, &b]).unwrap(), &b).unwrap();

    for (x, y) in via_fft.dimensions.iter().zip(&via_naive.dimensions) {
        assert!((x - y).abs() < 1e-9);
    }
    assert!(fft.similarity(&via_fft, &a).unwrap() > 0.99);
}
