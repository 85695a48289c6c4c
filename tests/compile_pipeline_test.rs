//! End-to-end compile pipeline tests: realistic requests through the
//! full validator/factory/document path.

use dxf_compile_rs::{Color, CompileError, Compiler, DrawingRequest, EntityKind};
use serde_json::{json, Value};

fn compile(value: Value) -> dxf_compile_rs::Result<dxf_compile_rs::CompileOutput> {
    let request = DrawingRequest::from_value(value)?;
    Compiler::new().compile(&request)
}

#[test]
fn test_walls_and_dimensions_partial_failure() {
    // One valid line, one circle with a negative radius. The bad
    // circle must be recorded without aborting the run.
    let output = compile(json!({
        "layers": [{"name": "Walls", "color": 5}],
        "figures": [
            {"type": "line", "layer": "Walls", "start": [0, 0], "end": [5000, 0]},
            {"type": "circle", "layer": "Walls", "center": [100, 100], "radius": -10}
        ]
    }))
    .unwrap();

    assert_eq!(output.summary.total, 2);
    assert_eq!(output.summary.successful, 1);
    assert_eq!(output.summary.failed, 1);
    assert_eq!(output.summary.success_rate(), "50.0%");
    assert_eq!(output.document.entity_count(), 1);
    assert_eq!(output.summary.errors.len(), 1);
    assert!(output.summary.errors[0].contains("circle"));
}

#[test]
fn test_unknown_entity_type_recorded_not_fatal() {
    let output = compile(json!({
        "figures": [
            {"type": "glowball", "position": [0, 0]},
            {"type": "line", "start": [0, 0], "end": [1, 1]}
        ]
    }))
    .unwrap();

    assert_eq!(output.summary.failed, 1);
    assert_eq!(output.summary.successful, 1);
    assert!(output.summary.errors[0].contains("unknown entity type"));
    assert!(output.summary.errors[0].contains("glowball"));
}

#[test]
fn test_mesh_face_index_out_of_range_continues() {
    let output = compile(json!({
        "figures": [
            {"type": "mesh",
             "vertices": [[0, 0, 0], [100, 0, 0], [50, 100, 0]],
             "faces": [[0, 1, 10]]},
            {"type": "line", "start": [0, 0], "end": [1, 1]}
        ]
    }))
    .unwrap();

    assert_eq!(output.summary.failed, 1);
    assert!(output.summary.errors[0].contains("face index 10 out of range"));
    assert_eq!(output.document.entity_count(), 1);
}

#[test]
fn test_blocks_compiled_before_figures() {
    let output = compile(json!({
        "layers": [{"name": "Doors", "color": 3}],
        "blocks": [{"name": "door-900", "entities": [
            {"type": "line", "layer": "Doors", "start": [0, 0], "end": [0, 900]},
            {"type": "arc", "layer": "Doors", "center": [0, 0], "radius": 900,
             "start_angle": 0, "end_angle": 90}
        ]}],
        "figures": [
            {"type": "rectangle", "points": [[0, 0], [5000, 0], [5000, 3000], [0, 3000]]}
        ]
    }))
    .unwrap();

    let block = &output.document.blocks["door-900"];
    assert_eq!(block.entities.len(), 2);
    assert_eq!(block.entities[0].kind(), EntityKind::Line);
    assert_eq!(block.entities[1].kind(), EntityKind::Arc);
    // Block entities count toward the summary alongside figures
    assert_eq!(output.summary.total, 3);
    assert_eq!(output.summary.successful, 3);
}

#[test]
fn test_kitchen_layout_full_catalog_mix() {
    // A realistic floor-plan fragment spanning several entity kinds
    // and layers.
    let output = compile(json!({
        "layers": [
            {"name": "Walls", "color": 5},
            {"name": "Fixtures", "color": 3},
            {"name": "Annotations", "color": 1},
            {"name": "Hatching", "color": 8}
        ],
        "figures": [
            {"type": "rectangle", "layer": "Walls",
             "points": [[0, 0], [4000, 0], [4000, 3000], [0, 3000]]},
            {"type": "line", "layer": "Walls", "start": [0, 1500], "end": [1200, 1500]},
            {"type": "polyline", "layer": "Fixtures", "closed": true,
             "points": [[100, 100], [700, 100], [700, 700], [100, 700]]},
            {"type": "circle", "layer": "Fixtures", "center": [2000, 600], "radius": 250},
            {"type": "ellipse", "layer": "Fixtures", "center": [3200, 600],
             "major_axis": [400, 0], "ratio": 0.6},
            {"type": "arc", "layer": "Fixtures", "center": [900, 2900],
             "radius": 450, "start_angle": 180, "end_angle": 270},
            {"type": "text", "layer": "Annotations", "text": "KITCHEN",
             "position": [1800, 1500], "height": 120},
            {"type": "mtext", "layer": "Annotations",
             "text": "All dimensions in millimeters", "position": [100, 3100],
             "width": 2000, "alignment": "left"},
            {"type": "dimension", "layer": "Annotations",
             "dimension_type": "linear", "start": [0, 0], "end": [4000, 0],
             "dimline_point": [2000, -300]},
            {"type": "leader", "layer": "Annotations",
             "vertices": [[2000, 600], [2600, 1000]], "text": "sink"},
            {"type": "hatch", "layer": "Hatching", "pattern": "ANSI31",
             "boundary": [[0, 0], [4000, 0], [4000, 3000], [0, 3000]]},
            {"type": "spline", "layer": "Fixtures",
             "control_points": [[100, 2000], [600, 2400], [1100, 2000], [1600, 2400]]},
            {"type": "viewport", "center": [2000, 1500], "width": 4200, "height": 3200,
             "label": "plan"}
        ]
    }))
    .unwrap();

    assert_eq!(output.summary.total, 13);
    assert_eq!(output.summary.failed, 0);
    assert_eq!(output.summary.success_rate(), "100.0%");
    assert_eq!(output.document.entity_count(), 13);
    assert_eq!(output.summary.entities_by_layer["Annotations"], 4);
    assert_eq!(output.summary.entities_by_type["line"], 1);
    // Declared layers plus the implicit default
    assert_eq!(output.document.layers.len(), 5);
}

#[test]
fn test_table_and_transform_entities() {
    let output = compile(json!({
        "figures": [
            {"type": "linetype", "linetype_name": "CUSTOM_DASH",
             "linetype_pattern": [12.7, -6.35]},
            {"type": "layer_state", "visible": false, "frozen": true},
            {"type": "attribute", "attribute_type": "definition",
             "tag": "PART_NO", "position": [0, 0], "prompt": "Part number:"},
            {"type": "coordinate_system", "transform_type": "rotate",
             "base_point": [0, 0], "angle": 45},
            {"type": "solid", "solid_type": "sphere", "center": [0, 0, 0], "radius": 50}
        ]
    }))
    .unwrap();

    assert_eq!(output.summary.successful, 5);
    assert_eq!(output.summary.entities_by_type.len(), 5);
}

#[test]
fn test_detail_records_collapse_in_large_runs() {
    let figures: Vec<Value> = (0..150)
        .map(|i| json!({"type": "circle", "center": [i, 0], "radius": 1}))
        .collect();
    let output = compile(json!({"figures": figures})).unwrap();

    assert_eq!(output.summary.total, 150);
    let report = output.summary.to_report();
    // Above the detail threshold, records are replaced by a count
    assert!(report["entity_details"].is_string());
    assert!(report["entity_details"].as_str().unwrap().contains("150"));
    assert_eq!(report["processing_summary"]["success_rate"], "100.0%");
}

#[test]
fn test_report_keeps_detail_records_in_small_runs() {
    let output = compile(json!({
        "figures": [
            {"type": "line", "start": [0, 0], "end": [1, 1]},
            {"type": "circle", "center": [0, 0], "radius": 0}
        ]
    }))
    .unwrap();

    let report = output.summary.to_report();
    let details = report["entity_details"].as_array().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["success"], true);
    assert_eq!(details[1]["success"], false);
    assert!(details[1]["error"].as_str().unwrap().contains("radius"));
}

#[test]
fn test_entities_keep_figure_order() {
    let output = compile(json!({
        "figures": [
            {"type": "circle", "center": [0, 0], "radius": 1},
            {"type": "line", "start": [0, 0], "end": [1, 1]},
            {"type": "text", "text": "a", "position": [0, 0]}
        ]
    }))
    .unwrap();

    let kinds: Vec<EntityKind> =
        output.document.entities.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        [EntityKind::Circle, EntityKind::Line, EntityKind::Text]
    );
}

#[test]
fn test_malformed_coordinate_reports_field_path() {
    let output = compile(json!({
        "figures": [
            {"type": "line", "start": [0, "oops"], "end": [1, 1]}
        ]
    }))
    .unwrap();

    assert_eq!(output.summary.failed, 1);
    assert!(output.summary.errors[0].contains("line.start[1]"));
}

#[test]
fn test_short_spline_without_degree_compiles() {
    let output = compile(json!({
        "figures": [
            {"type": "spline", "control_points": [[0, 0], [10, 10]]}
        ]
    }))
    .unwrap();
    assert_eq!(output.summary.successful, 1);
    assert_eq!(output.summary.failed, 0);
}

#[test]
fn test_byblock_layer_color_accepted() {
    let output = compile(json!({
        "layers": [{"name": "Walls", "color": 0}],
        "figures": [
            {"type": "line", "layer": "Walls", "start": [0, 0], "end": [1, 1]}
        ]
    }))
    .unwrap();
    assert_eq!(output.document.layers["Walls"].color, Color::ByBlock);
}

#[test]
fn test_request_error_aborts_before_processing() {
    // An undeclared layer reference fails the whole request; nothing
    // is compiled.
    let err = compile(json!({
        "figures": [
            {"type": "line", "layer": "Ghost", "start": [0, 0], "end": [1, 1]},
            {"type": "circle", "center": [0, 0], "radius": 1}
        ]
    }))
    .unwrap_err();

    assert!(matches!(err, CompileError::LayerReference(_)));
}
