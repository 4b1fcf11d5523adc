//! Property-based tests for the resolution engine.
//!
//! Run with: cargo test --test properties

#![allow(clippy::unwrap_used)]

use dentis::dentition::{classify, from_primary_fdi, to_primary_fdi, ToothClass, PRIMARY_FDI};
use dentis::index_map::IndexMaps;
use dentis::operations::{
    HighlightStrategy, NodeNameTable, ResolveHighlightIndices, ToothHighlighter,
};
use dentis::scene::{Color, Material, MaterialRegistry, SceneGraph};
use dentis::surface::{normalize_surfaces, parse_surfaces, SurfaceCode, SurfaceInput};
use dentis::treatment::normalize_treatment_type;
use dentis::{ChartConfig, ToothNumber, TreatmentRecord};
use proptest::prelude::*;
use std::collections::BTreeSet;

const ANTERIOR: [u16; 12] = [11, 12, 13, 21, 22, 23, 31, 32, 33, 41, 42, 43];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Strategies
// =============================================================================

/// Any permanent FDI code.
fn arb_permanent() -> impl Strategy<Value = ToothNumber> {
    (1..=4u16, 1..=8u16).prop_map(|(q, p)| ToothNumber::new(q * 10 + p))
}

/// Surface shorthand, mostly clinical letters with some noise.
fn arb_surface_text() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[MODBLPFIC ]{0,8}",
        1 => Just("ROOT".to_owned()),
        1 => "\\PC{0,12}",
    ]
}

/// A mouth scene whose meshes follow the builtin node names.
fn mouth() -> (SceneGraph, MaterialRegistry) {
    let mut materials = MaterialRegistry::new();
    let enamel = materials.add(Material::new(Color::new(0.95, 0.93, 0.88)));
    let mut scene = SceneGraph::new();
    let names = NodeNameTable::builtin();
    let jaw = scene.add_group("jaw", None).unwrap();
    for tooth in dentis::dentition::permanent_teeth() {
        if let Some(name) = names.get(tooth) {
            scene.add_mesh(name, enamel, Some(jaw)).unwrap();
        }
    }
    (scene, materials)
}

fn emissive_by_name(scene: &SceneGraph, materials: &MaterialRegistry) -> Vec<(String, Material)> {
    scene
        .meshes()
        .into_iter()
        .map(|id| {
            let node = scene.node(id).unwrap();
            let mat = materials.get(node.mesh().unwrap().material).unwrap();
            (node.name.clone(), mat.clone())
        })
        .collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn classification_partitions_permanent_teeth(tooth in arb_permanent()) {
        let expected = if ANTERIOR.contains(&tooth.get()) {
            ToothClass::Anterior
        } else {
            ToothClass::Posterior
        };
        prop_assert_eq!(classify(tooth), expected);
    }

    #[test]
    fn any_integer_classifies_without_panicking(raw in any::<u16>()) {
        let class = classify(ToothNumber::new(raw));
        prop_assert!(class == ToothClass::Posterior || ANTERIOR.contains(&raw));
    }

    #[test]
    fn root_is_atomic(anterior in any::<bool>(), pad in "[ \t]{0,3}") {
        let raw = format!("{pad}root{pad}");
        prop_assert_eq!(parse_surfaces(&raw, anterior), BTreeSet::from([SurfaceCode::Root]));
    }

    #[test]
    fn parsed_surfaces_never_contain_synonyms(
        text in arb_surface_text(),
        anterior in any::<bool>(),
    ) {
        let set = parse_surfaces(&text, anterior);
        prop_assert!(!set.contains(&SurfaceCode::Letter('B')));
        prop_assert!(!set.contains(&SurfaceCode::Letter('P')));
        if anterior {
            prop_assert!(!set.contains(&SurfaceCode::Occlusal));
        }
    }

    #[test]
    fn resolution_is_total_and_deduplicated(
        tooth in any::<u16>(),
        text in arb_surface_text(),
        contact in any::<bool>(),
        root in any::<bool>(),
    ) {
        let ids = ResolveHighlightIndices::new(ToothNumber::new(tooth), &text)
            .with_contact(contact)
            .with_root(root)
            .execute(&IndexMaps::builtin());
        let unique: BTreeSet<&String> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn treatment_keys_are_compact(raw in "\\PC{0,24}") {
        let key = normalize_treatment_type(Some(&raw));
        prop_assert!(!key.as_str().chars().any(char::is_whitespace));
        prop_assert!(!key.as_str().is_empty());
    }

    #[test]
    fn normalize_surfaces_is_total(
        text in arb_surface_text(),
        tooth in any::<u16>(),
        label in proptest::option::of("\\PC{0,12}"),
    ) {
        let input = SurfaceInput::Text(text);
        let tokens = normalize_surfaces(Some(&input), ToothNumber::new(tooth), label.as_deref());
        prop_assert!(tokens.is_some());
    }

    #[test]
    fn records_resolve_without_panicking(
        tooth in any::<u16>(),
        text in proptest::option::of(arb_surface_text()),
        label in proptest::option::of("[A-Za-z ]{0,16}"),
    ) {
        let mut record = TreatmentRecord::new(tooth);
        if let Some(text) = text {
            record = record.with_surfaces(SurfaceInput::Text(text));
        }
        if let Some(label) = label {
            record = record.with_treatment(label);
        }
        let mark = ChartConfig::builtin().resolve(&record);
        prop_assert_eq!(mark.tooth.get(), tooth);
    }

    #[test]
    fn highlight_is_idempotent(tooth in arb_permanent(), diffed in any::<bool>()) {
        init_tracing();
        let strategy = if diffed { HighlightStrategy::Diffed } else { HighlightStrategy::ResetAll };
        let (mut scene, mut materials) = mouth();
        let mut hl = ToothHighlighter::new(NodeNameTable::builtin()).with_strategy(strategy);
        let first = hl.highlight(tooth, &mut scene, &mut materials);
        let once = emissive_by_name(&scene, &materials);
        let second = hl.highlight(tooth, &mut scene, &mut materials);
        prop_assert_eq!(first, second);
        prop_assert_eq!(emissive_by_name(&scene, &materials), once);
    }
}

#[test]
fn primary_mapping_round_trips() {
    for (permanent, primary) in PRIMARY_FDI {
        let p = ToothNumber::new(permanent);
        assert_eq!(to_primary_fdi(p), Some(ToothNumber::new(primary)));
        assert_eq!(to_primary_fdi(p).and_then(from_primary_fdi), Some(p));
    }
    for molar in [16u16, 17, 18, 26, 27, 28, 36, 37, 38, 46, 47, 48] {
        assert_eq!(to_primary_fdi(ToothNumber::new(molar)), None);
    }
}

#[test]
fn documented_examples() {
    use SurfaceCode::{Facial, Incisal, Lingual, Occlusal, Root};
    init_tracing();

    assert_eq!(parse_surfaces("BOL", true), BTreeSet::from([Facial, Incisal, Lingual]));
    assert_eq!(parse_surfaces("BOL", false), BTreeSet::from([Facial, Occlusal, Lingual]));
    assert_eq!(parse_surfaces("ROOT", true), BTreeSet::from([Root]));

    assert_eq!(normalize_treatment_type(Some("Crown Placement")).as_str(), "crown");
    assert_eq!(normalize_treatment_type(None).as_str(), "normal");
    assert_eq!(normalize_treatment_type(Some("Root Canal")).as_str(), "rootcanal");

    let molar = ToothNumber::new(36);
    assert_eq!(
        normalize_surfaces(None, molar, Some("Root Canal")),
        Some(BTreeSet::from(["ROOT".to_owned()]))
    );
    assert_eq!(normalize_surfaces(None, molar, Some("Filling")), None);

    let maps = IndexMaps::builtin();
    let occlusal: BTreeSet<String> = ResolveHighlightIndices::new(ToothNumber::new(16), "O")
        .execute(&maps)
        .into_iter()
        .collect();
    let expected: BTreeSet<String> = ["1", "3", "4", "5", "6", "7", "9"]
        .into_iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(occlusal, expected);

    let contact = ResolveHighlightIndices::new(ToothNumber::new(16), "")
        .with_contact(true)
        .execute(&maps);
    assert_eq!(contact, ["2", "8"]);
}
