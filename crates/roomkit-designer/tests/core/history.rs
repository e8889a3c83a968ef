use roomkit_core::CatalogItem;
use roomkit_designer::geometry::Point;
use roomkit_designer::history::{History, ModelSnapshot};
use roomkit_designer::object_store::ObjectStore;
use roomkit_designer::room::{RoomPolygon, RoomPreset};

fn snapshot(preset: RoomPreset, object_count: usize) -> ModelSnapshot {
    let item = CatalogItem::new(1, "Chair", 0.5, 0.5, 0.9);
    let mut objects = ObjectStore::new();
    for _ in 0..object_count {
        objects.add(&item);
    }
    ModelSnapshot {
        room: RoomPolygon::from_preset(preset),
        objects,
    }
}

#[test]
fn test_history_creation() {
    let history = History::default();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 0);
    assert!(history.next_undo_description().is_none());
}

#[test]
fn test_undo_redo_swaps_snapshots() {
    let mut history = History::new(10);
    let a = snapshot(RoomPreset::FourCorner, 0);
    let b = snapshot(RoomPreset::SixCorner, 1);

    history.record("Apply 6-corner room", a.clone());
    assert_eq!(history.next_undo_description(), Some("Apply 6-corner room"));

    let undone = history.undo(b.clone()).unwrap();
    assert_eq!(undone, a);
    assert!(history.can_redo());

    let redone = history.redo(undone).unwrap();
    assert_eq!(redone, b);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_record_clears_redo() {
    let mut history = History::new(10);
    history.record("first", snapshot(RoomPreset::FourCorner, 0));
    history.undo(snapshot(RoomPreset::FourCorner, 1));
    assert_eq!(history.redo_depth(), 1);

    history.record("second", snapshot(RoomPreset::FiveCorner, 0));
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_history_is_bounded() {
    let mut history = History::new(3);
    for i in 0..5 {
        history.record(format!("edit {}", i), snapshot(RoomPreset::FourCorner, i));
    }
    assert_eq!(history.undo_depth(), 3);
    assert_eq!(history.next_undo_description(), Some("edit 4"));

    let mut current = snapshot(RoomPreset::FourCorner, 5);
    while let Some(previous) = history.undo(current.clone()) {
        current = previous;
    }
    assert_eq!(current.objects.len(), 2);
}

#[test]
fn test_snapshots_are_independent_of_later_edits() {
    let mut history = History::new(10);
    let mut room = RoomPolygon::default();
    history.record(
        "Move room corner",
        ModelSnapshot {
            room: room.clone(),
            objects: ObjectStore::new(),
        },
    );
    room.set_point_at(0, Point::new(-1.0, -1.0));

    let restored = history
        .undo(ModelSnapshot {
            room,
            objects: ObjectStore::new(),
        })
        .unwrap();
    assert_eq!(restored.room.point(0), Some(Point::new(0.0, 0.0)));
}

#[test]
fn test_clear() {
    let mut history = History::new(10);
    history.record("edit", snapshot(RoomPreset::FourCorner, 0));
    history.clear();
    assert!(!history.can_undo());
}
