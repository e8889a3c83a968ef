use proptest::prelude::*;
use roomkit_core::CatalogItem;
use roomkit_designer::geometry::Point;
use roomkit_designer::object::ObjectId;
use roomkit_designer::object_store::ObjectStore;
use roomkit_designer::room::{RoomPolygon, RoomPreset, MIN_ROOM_POINTS};
use roomkit_designer::transform::{snap, GridConfig, ALLOWED_CELL_SIZES_CM};
use roomkit_designer::viewport::{Viewport, MAX_SCALE, MIN_SCALE};

#[derive(Debug, Clone)]
enum StoreOp {
    Add,
    Select(usize),
    Remove(usize),
    SelectUnknown,
    DeselectAll,
}

fn store_op() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        Just(StoreOp::Add),
        (0usize..8).prop_map(StoreOp::Select),
        (0usize..8).prop_map(StoreOp::Remove),
        Just(StoreOp::SelectUnknown),
        Just(StoreOp::DeselectAll),
    ]
}

fn preset() -> impl Strategy<Value = RoomPreset> {
    prop::sample::select(RoomPreset::ALL.to_vec())
}

fn nth_id(store: &ObjectStore, n: usize) -> Option<ObjectId> {
    let len = store.len();
    (len > 0).then(|| store.iter().nth(n % len).map(|o| o.id)).flatten()
}

proptest! {
    #[test]
    fn at_most_one_object_is_selected(ops in prop::collection::vec(store_op(), 0..40)) {
        let item = CatalogItem::new(1, "Chair", 0.5, 0.5, 0.9);
        let mut store = ObjectStore::new();
        for op in ops {
            match op {
                StoreOp::Add => {
                    store.add(&item);
                }
                StoreOp::Select(n) => {
                    if let Some(id) = nth_id(&store, n) {
                        prop_assert!(store.select(id));
                        prop_assert_eq!(store.selected_id(), Some(id));
                    }
                }
                StoreOp::Remove(n) => {
                    if let Some(id) = nth_id(&store, n) {
                        store.remove(id);
                    }
                }
                StoreOp::SelectUnknown => {
                    let before = store.selected_id();
                    prop_assert!(!store.select(ObjectId::new()));
                    prop_assert_eq!(store.selected_id(), before);
                }
                StoreOp::DeselectAll => store.deselect_all(),
            }
            prop_assert!(store.iter().filter(|o| o.selected).count() <= 1);
        }
    }

    #[test]
    fn room_never_drops_below_three_points(
        start in preset(),
        deletions in prop::collection::vec(0usize..10, 0..20),
    ) {
        let mut room = RoomPolygon::from_preset(start);
        for index in deletions {
            let before = room.len();
            let deleted = room.delete_at(index);
            prop_assert!(room.len() >= MIN_ROOM_POINTS);
            if deleted {
                prop_assert_eq!(room.len(), before - 1);
            } else {
                prop_assert_eq!(room.len(), before);
            }
        }
    }

    #[test]
    fn snapping_is_idempotent(
        raw in -100_000.0f64..100_000.0,
        cell_cm in prop::sample::select(ALLOWED_CELL_SIZES_CM.to_vec()),
    ) {
        let cell = GridConfig::from_cell_size_cm(cell_cm).unwrap().render_cell_size();
        let once = snap(raw, cell);
        prop_assert_eq!(snap(once, cell), once);
        prop_assert!((once - raw).abs() <= cell / 2.0 + 1e-9);
    }

    #[test]
    fn zoom_keeps_content_under_pointer(
        start_scale in MIN_SCALE..MAX_SCALE,
        new_scale in 0.01f64..10.0,
        px in 0.0f64..1200.0,
        py in 0.0f64..800.0,
        pan_x in -2000.0f64..2000.0,
        pan_y in -2000.0f64..2000.0,
    ) {
        let mut vp = Viewport::default();
        vp.set_scale(start_scale);
        vp.pan_to(Point::new(pan_x, pan_y));
        let pointer = Point::new(px, py);
        let before = vp.screen_to_content(pointer);

        let applied = vp.zoom_at(pointer, new_scale);
        prop_assert!((MIN_SCALE..=MAX_SCALE).contains(&applied));
        let after = vp.screen_to_content(pointer);
        prop_assert!((after.x - before.x).abs() < 1e-6 * before.x.abs().max(1.0));
        prop_assert!((after.y - before.y).abs() < 1e-6 * before.y.abs().max(1.0));
    }

    #[test]
    fn grid_steps_by_at_most_one_allowed_size(
        start in prop::sample::select(ALLOWED_CELL_SIZES_CM.to_vec()),
        requests in prop::collection::vec(0u32..200, 1..20),
    ) {
        let mut grid = GridConfig::from_cell_size_cm(start).unwrap();
        let index_of = |size: u32| ALLOWED_CELL_SIZES_CM.iter().position(|&c| c == size);
        for requested in requests {
            let before = index_of(grid.cell_size_cm()).unwrap();
            let size = grid.step_toward(requested);
            let after = index_of(size);
            prop_assert!(after.is_some());
            prop_assert!(before.abs_diff(after.unwrap()) <= 1);
        }
    }
}
