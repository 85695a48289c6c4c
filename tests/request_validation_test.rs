//! Request-level validation: size ceilings, declarations, and
//! layer-reference collection before any entity is compiled.

use dxf_compile_rs::{CompileError, CompileLimits, Compiler, DrawingRequest};
use serde_json::{json, Value};

fn compile(value: Value) -> dxf_compile_rs::Result<dxf_compile_rs::CompileOutput> {
    let request = DrawingRequest::from_value(value)?;
    Compiler::new().compile(&request)
}

#[test]
fn test_minimal_request_uses_defaults() {
    let request = DrawingRequest::from_json(
        r#"{"figures": [{"type": "line", "start": [0, 0], "end": [1, 1]}]}"#,
    )
    .unwrap();
    assert!(!request.return_summary);
    assert_eq!(request.streaming_threshold, 1_048_576);
    assert!(request.client_info.is_none());
    assert!(request.blocks.is_empty());

    let output = Compiler::new().compile(&request).unwrap();
    assert!(output.document.has_layer("default"));
    assert_eq!(output.summary.entities_by_layer["default"], 1);
}

#[test]
fn test_empty_figures_rejected() {
    let err = compile(json!({"figures": []})).unwrap_err();
    match err {
        CompileError::Request(message) => assert!(message.contains("no figures")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_entity_ceiling_fails_before_processing() {
    let figures: Vec<Value> = (0..10_001)
        .map(|i| json!({"type": "line", "start": [0, 0], "end": [i, 0]}))
        .collect();
    let err = compile(json!({"figures": figures})).unwrap_err();
    match err {
        CompileError::RequestTooLarge { what, count, limit } => {
            assert_eq!(what, "entities");
            assert_eq!(count, 10_001);
            assert_eq!(limit, 10_000);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_mesh_vertex_ceiling_counts_all_meshes() {
    // Two meshes that individually pass but together exceed the cap
    let vertices_a: Vec<Value> = (0..30_000).map(|i| json!([i, 0, 0])).collect();
    let vertices_b: Vec<Value> = (0..20_001).map(|i| json!([i, 1, 0])).collect();
    let err = compile(json!({
        "figures": [
            {"type": "mesh", "vertices": vertices_a, "faces": [[0, 1, 2]]},
            {"type": "mesh", "vertices": vertices_b, "faces": [[0, 1, 2]]}
        ]
    }))
    .unwrap_err();
    assert!(matches!(
        err,
        CompileError::RequestTooLarge { what: "mesh vertices", .. }
    ));
}

#[test]
fn test_undeclared_layer_reported_once() {
    let err = compile(json!({
        "layers": [{"name": "Walls"}],
        "figures": [
            {"type": "line", "layer": "Phantom", "start": [0, 0], "end": [1, 1]},
            {"type": "circle", "layer": "Phantom", "center": [0, 0], "radius": 1}
        ]
    }))
    .unwrap_err();
    match err {
        CompileError::LayerReference(violations) => {
            assert_eq!(violations.len(), 1);
            assert!(violations[0].contains("Phantom"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_multiple_undeclared_layers_all_collected() {
    let err = compile(json!({
        "figures": [
            {"type": "line", "layer": "A", "start": [0, 0], "end": [1, 1]},
            {"type": "line", "layer": "B", "start": [0, 0], "end": [1, 1]}
        ]
    }))
    .unwrap_err();
    match err {
        CompileError::LayerReference(violations) => {
            assert_eq!(violations.len(), 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_default_layer_always_resolvable() {
    assert!(compile(json!({
        "layers": [{"name": "Walls"}],
        "figures": [
            {"type": "line", "layer": "default", "start": [0, 0], "end": [1, 1]}
        ]
    }))
    .is_ok());
}

#[test]
fn test_duplicate_layer_declarations_rejected() {
    let err = compile(json!({
        "layers": [{"name": "Walls"}, {"name": "Walls"}],
        "figures": [{"type": "line", "start": [0, 0], "end": [1, 1]}]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("duplicate layer 'Walls'"));
}

#[test]
fn test_layer_name_pattern_enforced() {
    for bad in ["has space", "semi;colon", "", "sl/ash"] {
        let err = compile(json!({
            "layers": [{"name": bad}],
            "figures": [{"type": "line", "start": [0, 0], "end": [1, 1]}]
        }))
        .unwrap_err();
        assert!(
            err.to_string().contains("invalid layer name"),
            "name {bad:?} should be rejected"
        );
    }
}

#[test]
fn test_layer_name_length_cap() {
    let long = "L".repeat(256);
    let err = compile(json!({
        "layers": [{"name": long}],
        "figures": [{"type": "line", "start": [0, 0], "end": [1, 1]}]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("invalid layer name"));
}

#[test]
fn test_naming_violations_collected_together() {
    let err = compile(json!({
        "layers": [{"name": "bad name"}, {"name": "Walls", "color": 999}],
        "figures": [{"type": "line", "start": [0, 0], "end": [1, 1]}]
    }))
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("invalid layer name"));
    assert!(message.contains("out of range"));
}

#[test]
fn test_custom_limits_apply() {
    let request = DrawingRequest::from_value(json!({
        "figures": [
            {"type": "line", "start": [0, 0], "end": [1, 1]},
            {"type": "line", "start": [0, 0], "end": [2, 2]},
            {"type": "line", "start": [0, 0], "end": [3, 3]}
        ]
    }))
    .unwrap();
    let compiler = Compiler::with_limits(CompileLimits {
        max_entities: 2,
        ..CompileLimits::default()
    });
    let err = compiler.compile(&request).unwrap_err();
    assert!(matches!(err, CompileError::RequestTooLarge { limit: 2, .. }));
}

#[test]
fn test_block_declarations_validated() {
    let err = compile(json!({
        "blocks": [{"name": "ok"}, {"name": "ok"}],
        "figures": [{"type": "line", "start": [0, 0], "end": [1, 1]}]
    }))
    .unwrap_err();
    assert!(err.to_string().contains("duplicate block 'ok'"));
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = DrawingRequest::from_json("{not json").unwrap_err();
    assert!(matches!(err, CompileError::Json(_)));
}
