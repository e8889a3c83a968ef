use roomkit_core::{Catalog, NodeId};
use roomkit_designer::commands::{CommandOutcome, DesignerCommand};
use roomkit_designer::geometry::Point;
use roomkit_designer::room::RoomPreset;
use roomkit_designer::view::{ViewLayer, ViewMode};
use roomkit_designer::DesignerState;

const CATALOG: &str = r##"{
    "sections": [{"id": 1, "number": "01", "title": "Kitchen", "categories": [10]}],
    "categories": [{
        "id": 10,
        "title": "Cabinets",
        "subcategories": [
            {"id": "base", "title": "Base cabinets", "items": [
                {"id": 1, "name": "Base 60", "width": 0.6, "depth": 0.6, "height": 0.85,
                 "modelPath": "models/base60.glb", "price": 120.0,
                 "width_variants": [{"id": 2}, {"id": 99}],
                 "color_variants": [{"id": 3, "color": "#ffffff"}]},
                {"id": 2, "name": "Base 80", "width": 0.8, "depth": 0.6, "height": 0.85,
                 "modelPath": "models/base80.glb", "price": 150.5},
                {"id": 3, "name": "Base 60 white", "width": 0.6, "depth": 0.6, "height": 0.85,
                 "modelPath": "models/base60w.glb", "show": false}
            ]},
            {"id": "tall", "title": "Tall cabinets", "items": [
                {"id": 4, "name": "Pantry", "width": 0.6, "depth": 0.6, "height": 2.1,
                 "modelPath": "models/pantry.glb"}
            ]}
        ]
    }]
}"##;

fn catalog() -> Catalog {
    Catalog::from_json_str(CATALOG).unwrap()
}

#[test]
fn test_designer_state_defaults() {
    let state = DesignerState::new();
    assert_eq!(state.room.len(), 4);
    assert!(state.objects.is_empty());
    assert_eq!(state.grid.cell_size_cm(), 10);
    assert_eq!(state.view_mode, ViewMode::Editing2D);
    assert_eq!(state.active_layer, ViewLayer::Lower);
    assert!(!state.is_modified);
    assert!(!state.can_undo());
}

#[test]
fn test_add_item_places_unselected_instance_at_origin() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    assert_eq!(state.apply(DesignerCommand::AddItem(1), &catalog), CommandOutcome::Applied);

    let object = state.objects.iter().next().unwrap();
    assert_eq!(object.catalog_id, 1);
    assert_eq!((object.scale_x, object.scale_y), (0.6, 0.6));
    assert_eq!(object.height, 0.85);
    assert_eq!(object.rotation_degrees, 0.0);
    assert_eq!(object.position, Point::ORIGIN);
    assert!(!object.selected);
    assert!(state.is_modified);
}

#[test]
fn test_add_unknown_item_is_rejected() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    let outcome = state.apply(DesignerCommand::AddItem(404), &catalog);
    assert!(matches!(outcome, CommandOutcome::Rejected(_)));
    assert!(state.objects.is_empty());
}

#[test]
fn test_selection_is_exclusive() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    let a = state.add_item(&catalog, 1).unwrap();
    let b = state.add_item(&catalog, 2).unwrap();

    assert!(state.apply(DesignerCommand::Select(a), &catalog).is_applied());
    assert!(state.apply(DesignerCommand::Select(b), &catalog).is_applied());
    assert_eq!(state.objects.selected_id(), Some(b));
    assert_eq!(state.objects.iter().filter(|o| o.selected).count(), 1);

    // Selecting the selected object again changes nothing.
    assert_eq!(state.apply(DesignerCommand::Select(b), &catalog), CommandOutcome::Unchanged);
    assert_eq!(state.objects.selected_id(), Some(b));

    assert!(state.apply(DesignerCommand::DeselectAll, &catalog).is_applied());
    assert_eq!(state.objects.selected_id(), None);
}

#[test]
fn test_rotate_selected_uses_step() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    let id = state.add_item(&catalog, 1).unwrap();

    // Nothing selected yet.
    assert_eq!(
        state.apply(DesignerCommand::RotateSelected { clockwise: false }, &catalog),
        CommandOutcome::Unchanged
    );

    state.select_object(id);
    state.apply(DesignerCommand::RotateSelected { clockwise: false }, &catalog);
    state.apply(DesignerCommand::RotateSelected { clockwise: false }, &catalog);
    assert_eq!(state.objects.get(id).unwrap().rotation_degrees, 10.0);
    state.apply(DesignerCommand::RotateSelected { clockwise: true }, &catalog);
    assert_eq!(state.objects.get(id).unwrap().rotation_degrees, 5.0);
}

#[test]
fn test_swap_variant_keeps_placement() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    let id = state.add_item(&catalog, 1).unwrap();
    state.select_object(id);
    state.move_object(id, Point::new(1.2, 0.4));
    state.rotate_object(id, 90.0);

    let outcome = state.apply(DesignerCommand::SwapSelectedVariant(2), &catalog);
    assert_eq!(outcome, CommandOutcome::Applied);

    assert_eq!(state.objects.len(), 1);
    let swapped = state.objects.selected().unwrap();
    assert_ne!(swapped.id, id);
    assert_eq!(swapped.catalog_id, 2);
    assert_eq!(swapped.scale_x, 0.8);
    assert_eq!(swapped.position, Point::new(1.2, 0.4));
    assert_eq!(swapped.rotation_degrees, 90.0);
}

#[test]
fn test_swap_variant_rejections() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    assert_eq!(
        state.apply(DesignerCommand::SwapSelectedVariant(2), &catalog),
        CommandOutcome::Rejected("No object selected".to_string())
    );

    let id = state.add_item(&catalog, 1).unwrap();
    state.select_object(id);
    // Pantry lives in another subcategory.
    assert_eq!(
        state.apply(DesignerCommand::SwapSelectedVariant(4), &catalog),
        CommandOutcome::Rejected("Variant not found".to_string())
    );
    assert_eq!(state.objects.get(id).unwrap().catalog_id, 1);
}

#[test]
fn test_variant_options_for_selection() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    assert!(state.width_variant_options(&catalog).is_empty());

    let id = state.add_item(&catalog, 1).unwrap();
    state.select_object(id);

    let widths = state.width_variant_options(&catalog);
    assert_eq!(widths.len(), 1);
    assert_eq!(widths[0].id, 2);
    assert_eq!(widths[0].label, "80×60×85 cm");

    let colors = state.color_variant_options(&catalog);
    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].color.as_deref(), Some("#ffffff"));
}

#[test]
fn test_add_picker_lists_visible_items() {
    let catalog = catalog();
    let state = DesignerState::new();
    let ids: Vec<u64> = state
        .add_picker_items(&catalog, &NodeId::Text("base".to_string()))
        .iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_cart_summary_totals_prices() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    state.add_item(&catalog, 1).unwrap();
    state.add_item(&catalog, 2).unwrap();
    state.add_item(&catalog, 4).unwrap();

    let cart = state.cart_summary(&catalog);
    assert_eq!(cart.lines.len(), 3);
    assert_eq!(cart.lines[2].price, 0.0);
    assert_eq!(cart.total, 270.5);

    // Items missing from the catalog are left out.
    let empty = state.cart_summary(&Catalog::default());
    assert!(empty.lines.is_empty());
    assert_eq!(empty.total, 0.0);
}

#[test]
fn test_step_grid_moves_one_size() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    let outcome = state.apply(DesignerCommand::StepGrid { requested_cm: 3 }, &catalog);
    assert!(outcome.is_applied());
    assert_eq!(state.grid.cell_size_cm(), 5);

    assert_eq!(
        state.apply(DesignerCommand::StepGrid { requested_cm: 5 }, &catalog),
        CommandOutcome::Unchanged
    );
}

#[test]
fn test_toggle_view_mode_leaves_models_alone() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    state.add_item(&catalog, 1).unwrap();
    state.apply(DesignerCommand::ApplyPreset(RoomPreset::SixCorner), &catalog);
    let room = state.room.clone();
    let objects = state.objects.clone();

    state.apply(DesignerCommand::ToggleViewMode, &catalog);
    assert_eq!(state.view_mode, ViewMode::Previewing3D);
    state.apply(DesignerCommand::ToggleViewMode, &catalog);
    assert_eq!(state.view_mode, ViewMode::Editing2D);

    assert_eq!(state.room, room);
    assert_eq!(state.objects, objects);
}

#[test]
fn test_layer_switch_deselects_other_layer() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    let base = state.add_item(&catalog, 1).unwrap();
    let pantry = state.add_item(&catalog, 4).unwrap();
    state.select_object(base);

    assert!(state.apply(DesignerCommand::SetLayer(ViewLayer::Upper), &catalog).is_applied());
    assert_eq!(state.objects.selected_id(), None);

    let lower = state.layer_presentation(ViewLayer::Lower);
    assert!(!lower.interactive);
    assert_eq!(lower.opacity, 0.2);
    assert!(state.layer_presentation(ViewLayer::Upper).interactive);

    state.select_object(pantry);
    state.apply(DesignerCommand::SetLayer(ViewLayer::Upper), &catalog);
    assert_eq!(state.objects.selected_id(), Some(pantry));
}

#[test]
fn test_room_edits_and_minimum_size() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    state.apply(DesignerCommand::DeleteRoomPoint(0), &catalog);
    assert_eq!(state.room.len(), 3);
    assert_eq!(
        state.apply(DesignerCommand::DeleteRoomPoint(0), &catalog),
        CommandOutcome::Unchanged
    );
    assert_eq!(state.room.len(), 3);

    assert!(state.apply(DesignerCommand::SplitRoomEdge(0), &catalog).is_applied());
    assert_eq!(state.room.len(), 4);
    assert!(matches!(
        state.apply(DesignerCommand::SplitRoomEdge(10), &catalog),
        CommandOutcome::Rejected(_)
    ));

    let outcome = state.apply(
        DesignerCommand::SetRoomPoint {
            index: 0,
            position: Point::new(f64::NAN, 1.0),
        },
        &catalog,
    );
    assert_eq!(outcome, CommandOutcome::Unchanged);
}

#[test]
fn test_undo_redo_commands() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    state.apply(DesignerCommand::AddItem(1), &catalog);
    state.apply(DesignerCommand::ApplyPreset(RoomPreset::EightCorner), &catalog);
    assert_eq!(state.undo_description(), Some("Apply 8-corner room"));

    assert!(state.apply(DesignerCommand::Undo, &catalog).is_applied());
    assert_eq!(state.room.len(), 4);
    assert_eq!(state.objects.len(), 1);

    assert!(state.apply(DesignerCommand::Undo, &catalog).is_applied());
    assert!(state.objects.is_empty());
    assert_eq!(state.apply(DesignerCommand::Undo, &catalog), CommandOutcome::Unchanged);

    assert!(state.apply(DesignerCommand::Redo, &catalog).is_applied());
    assert!(state.apply(DesignerCommand::Redo, &catalog).is_applied());
    assert_eq!(state.room.len(), 8);
    assert_eq!(state.apply(DesignerCommand::Redo, &catalog), CommandOutcome::Unchanged);
}

#[test]
fn test_reset_project_keeps_room_and_forgets_history() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    state.apply(DesignerCommand::ApplyPreset(RoomPreset::SixCorner), &catalog);
    let id = state.add_item(&catalog, 1).unwrap();
    state.select_object(id);
    state.project_name = "Kitchen".to_string();

    assert!(state.apply(DesignerCommand::ResetProject, &catalog).is_applied());
    assert!(state.objects.is_empty());
    assert_eq!(state.room.len(), 6);
    assert!(!state.can_undo());
    assert!(!state.is_modified);
    assert!(state.current_file_path.is_none());
    assert_eq!(state.project_name, "Untitled");
}

#[test]
fn test_clear_objects_keeps_room() {
    let catalog = catalog();
    let mut state = DesignerState::new();
    state.apply(DesignerCommand::ApplyPreset(RoomPreset::FiveCorner), &catalog);
    state.add_item(&catalog, 1).unwrap();
    assert!(state.apply(DesignerCommand::ClearObjects, &catalog).is_applied());
    assert!(state.objects.is_empty());
    assert_eq!(state.room.len(), 5);
    assert_eq!(state.apply(DesignerCommand::ClearObjects, &catalog), CommandOutcome::Unchanged);
}
