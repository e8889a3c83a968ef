use std::collections::HashSet;

use proptest::prelude::*;
use roomkit_core::{CatalogItem, ImportError};
use roomkit_designer::geometry::Point;
use roomkit_designer::object::ObjectId;
use roomkit_designer::object_store::ObjectStore;
use roomkit_designer::room::{RoomPolygon, RoomPreset};
use roomkit_designer::serialization::{export_scene, import_scene, SceneRecord};
use roomkit_designer::DesignerState;

fn populated_store() -> ObjectStore {
    let mut store = ObjectStore::new();
    let sofa = CatalogItem::new(7, "Sofa", 2.1, 0.9, 0.8);
    let lamp = CatalogItem::new(8, "Lamp", 0.4, 0.4, 1.7);
    let a = store.add(&sofa);
    let b = store.add(&lamp);
    store.move_to(a, Point::new(1.25, 0.5));
    store.rotate(a, -37.5);
    store.move_to(b, Point::new(2.0, 2.75));
    store.select(b);
    store
}

#[test]
fn test_export_import_round_trip_preserves_records() {
    let store = populated_store();
    let json = export_scene(store.iter()).unwrap();
    let imported = import_scene(&json).unwrap();

    assert_eq!(imported.len(), store.len());
    for (original, restored) in store.iter().zip(&imported) {
        assert_eq!(SceneRecord::from_object(original), SceneRecord::from_object(restored));
        assert_ne!(original.id, restored.id);
        assert!(!restored.selected);
    }
}

#[test]
fn test_export_is_pretty_list_of_records() {
    let store = populated_store();
    let json = export_scene(store.iter()).unwrap();
    assert!(json.starts_with('['));
    assert!(json.contains('\n'));
    assert!(json.contains("\"catalog_id\": 7"));
    assert!(json.contains("\"rotation_degrees\": -37.5"));
    assert!(!json.contains("selected"));
}

#[test]
fn test_import_ignores_unknown_fields() {
    let json = r#"[{"catalog_id": 1, "pos_x": 0.5, "pos_y": 0.5, "scale_x": 1.0,
        "scale_y": 1.0, "height": 0.4, "rotation_degrees": 0.0, "colour": "red"}]"#;
    let objects = import_scene(json).unwrap();
    assert_eq!(objects[0].position, Point::new(0.5, 0.5));
}

#[test]
fn test_failed_import_leaves_state_untouched() {
    let mut state = DesignerState::new();
    state.objects = populated_store();
    let before = state.objects.clone();

    let err = state.import_scene(r#"[{"catalog_id": 1}]"#).unwrap_err();
    assert!(matches!(err, ImportError::InvalidRecord { index: 0, .. }));
    assert_eq!(state.objects, before);

    let err = state.import_scene(r#""scene""#).unwrap_err();
    assert_eq!(
        err,
        ImportError::NotAList {
            found: "string".to_string()
        }
    );
    assert_eq!(state.objects, before);
}

#[test]
fn test_import_replaces_objects_and_is_undoable() {
    let mut state = DesignerState::new();
    let json = export_scene(populated_store().iter()).unwrap();

    assert_eq!(state.import_scene(&json).unwrap(), 2);
    assert_eq!(state.objects.len(), 2);
    assert!(state.objects.selected().is_none());

    assert!(state.undo());
    assert!(state.objects.is_empty());
}

type ObjectSeed = (u64, f64, f64, f64, f64, f64, f64);

fn object_seed() -> impl Strategy<Value = ObjectSeed> {
    (
        0u64..1000,
        -50.0f64..50.0,
        -50.0f64..50.0,
        0.05f64..5.0,
        0.05f64..5.0,
        0.05f64..3.0,
        -720.0f64..720.0,
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(1.0)
}

fn same_record(a: &SceneRecord, b: &SceneRecord) -> bool {
    a.catalog_id == b.catalog_id
        && close(a.pos_x, b.pos_x)
        && close(a.pos_y, b.pos_y)
        && close(a.scale_x, b.scale_x)
        && close(a.scale_y, b.scale_y)
        && close(a.height, b.height)
        && close(a.rotation_degrees, b.rotation_degrees)
}

proptest! {
    #[test]
    fn scene_round_trip_keeps_records_and_renews_ids(
        seeds in prop::collection::vec(object_seed(), 0..12),
        selected in any::<prop::sample::Index>(),
        source_room in prop::sample::select(RoomPreset::ALL.to_vec()),
        target_room in prop::sample::select(RoomPreset::ALL.to_vec()),
    ) {
        let mut source = DesignerState::new();
        source.room = RoomPolygon::from_preset(source_room);
        for (catalog_id, x, y, width, depth, height, rotation) in &seeds {
            let item = CatalogItem::new(*catalog_id, "Item", *width, *depth, *height);
            let id = source.objects.add(&item);
            source.objects.move_to(id, Point::new(*x, *y));
            source.objects.rotate(id, *rotation);
        }
        if !seeds.is_empty() {
            let id = source.objects.iter().nth(selected.index(seeds.len())).unwrap().id;
            source.objects.select(id);
        }

        let json = source.export_scene().unwrap();
        let mut target = DesignerState::new();
        target.room = RoomPolygon::from_preset(target_room);
        let room_before = target.room.clone();
        prop_assert_eq!(target.import_scene(&json).unwrap(), seeds.len());

        prop_assert_eq!(&target.room, &room_before);
        prop_assert!(target.objects.selected().is_none());
        let source_ids: HashSet<ObjectId> = source.objects.iter().map(|o| o.id).collect();
        for (original, restored) in source.objects.iter().zip(target.objects.iter()) {
            let expected = SceneRecord::from_object(original);
            let actual = SceneRecord::from_object(restored);
            prop_assert!(same_record(&expected, &actual), "{:?} != {:?}", expected, actual);
            prop_assert!(!source_ids.contains(&restored.id));
        }
    }
}
