//! Round-trip checks for the DXF exchange writer.
//!
//! Re-reads generated documents with a minimal group-code scanner and
//! verifies that every layer carries exactly as many entities as the source
//! drawing carried primitives.

use std::collections::HashMap;

use spandrel::{
    DrawingGenerator,
    config::AppConfig,
    export::{Exporter, dxf::DxfExporter},
    layer::LayerId,
    params::{BridgeTypology, ParameterSet},
};

/// Scans the ENTITIES section and counts entities per layer.
///
/// DXF is a flat stream of (code, value) pairs; each entity starts with a
/// `0` group naming its type and carries exactly one `8` group naming its
/// layer.
fn entity_counts(content: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    let mut lines = content.lines();
    let mut in_entities = false;
    let mut in_entity = false;

    while let (Some(code), Some(value)) = (lines.next(), lines.next()) {
        let code: i32 = code.trim().parse().expect("group code is numeric");
        match (code, value) {
            (2, "ENTITIES") => in_entities = true,
            (0, "ENDSEC") => {
                in_entities = false;
                in_entity = false;
            }
            (0, _) if in_entities => in_entity = true,
            (8, layer) if in_entity => {
                *counts.entry(layer.to_string()).or_insert(0) += 1;
                in_entity = false;
            }
            _ => {}
        }
    }
    counts
}

fn assert_roundtrip(typology: BridgeTypology, params: &ParameterSet) {
    let generator = DrawingGenerator::new(AppConfig::default());
    let set = generator.generate(typology, params);

    let document = DxfExporter.export(&set).expect("DXF export succeeds");
    let content = String::from_utf8(document.into_bytes()).expect("DXF output is ASCII");
    let counts = entity_counts(&content);

    for layer in LayerId::ALL {
        let expected = set.elevation.layer(layer).len() + set.plan.layer(layer).len();
        let actual = counts.get(layer.name()).copied().unwrap_or(0);
        assert_eq!(
            actual,
            expected,
            "{typology}: layer {} expected {expected} entities, found {actual}",
            layer.name()
        );
    }
}

#[test]
fn entity_counts_match_primitives_for_every_typology() {
    let params = ParameterSet::new(90.0, 12.0, 16.0, 2, 60.0, "concrete").unwrap();
    for typology in BridgeTypology::ALL {
        assert_roundtrip(typology, &params);
    }
}

#[test]
fn entity_counts_match_for_reference_suspension_bridge() {
    let params = ParameterSet::new(200.0, 20.0, 80.0, 0, 120.0, "steel").unwrap();
    assert_roundtrip(BridgeTypology::Suspension, &params);
}

#[test]
fn layer_table_precedes_entities() {
    let params = ParameterSet::new(40.0, 12.0, 8.0, 1, 50.0, "concrete").unwrap();
    let generator = DrawingGenerator::new(AppConfig::default());
    let set = generator.generate(BridgeTypology::Beam, &params);

    let document = DxfExporter.export(&set).unwrap();
    let content = String::from_utf8(document.into_bytes()).unwrap();

    let tables = content.find("TABLES").expect("tables section");
    let entities = content.find("ENTITIES").expect("entities section");
    assert!(tables < entities);
}
