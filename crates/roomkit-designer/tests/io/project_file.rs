use glam::Vec3;
use roomkit_core::CatalogItem;
use roomkit_designer::camera::CameraPose;
use roomkit_designer::geometry::Point;
use roomkit_designer::room::RoomPreset;
use roomkit_designer::serialization::ProjectFile;
use roomkit_designer::transform::GridConfig;
use roomkit_designer::view::ViewLayer;
use roomkit_designer::DesignerState;
use tempfile::tempdir;

#[test]
fn test_create_new_project() {
    let project = ProjectFile::new("Kitchen");
    assert_eq!(project.version, "1.0");
    assert_eq!(project.metadata.name, "Kitchen");
    assert!(project.objects.is_empty());
    assert_eq!(project.room.len(), 4);
}

#[test]
fn test_designer_state_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("kitchen.roomkit.json");

    let mut state = DesignerState::new();
    state.project_name = "Kitchen".to_string();
    state.room.apply_preset(RoomPreset::SixCorner);
    let id = state.objects.add(&CatalogItem::new(3, "Fridge", 0.7, 0.7, 1.8));
    state.objects.move_to(id, Point::new(0.3, 2.0));
    state.objects.select(id);
    state.grid = GridConfig::from_cell_size_cm(20).unwrap();
    state.active_layer = ViewLayer::Upper;
    state.camera.sync_from_controls(Vec3::new(5.0, 8.0, 5.0), Vec3::new(-0.5, 0.3, 0.0));
    state.is_modified = true;

    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified);
    assert_eq!(state.current_file_path.as_deref(), Some(path.as_path()));

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.project_name, "Kitchen");
    assert_eq!(loaded.room, state.room);
    assert_eq!(loaded.objects, state.objects);
    assert_eq!(loaded.grid.cell_size_cm(), 20);
    assert_eq!(loaded.active_layer, ViewLayer::Upper);
    assert_eq!(loaded.camera.restore().position(), Vec3::new(5.0, 8.0, 5.0));
    assert!(!loaded.can_undo());
}

#[test]
fn test_load_rejects_invalid_room_and_grid() {
    let dir = tempdir().unwrap();

    let path = dir.path().join("two_points.json");
    let mut project = serde_json::to_value(ProjectFile::new("Bad")).unwrap();
    project["room"] = serde_json::json!([{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 0.0}]);
    std::fs::write(&path, project.to_string()).unwrap();
    assert!(ProjectFile::load_from_file(&path).is_err());

    let path = dir.path().join("bad_grid.json");
    let mut project = serde_json::to_value(ProjectFile::new("Bad")).unwrap();
    project["grid"] = serde_json::json!(7);
    std::fs::write(&path, project.to_string()).unwrap();
    assert!(ProjectFile::load_from_file(&path).is_err());
}

#[test]
fn test_camera_pose_is_clamped_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("camera.json");
    let mut project = serde_json::to_value(ProjectFile::new("Camera")).unwrap();
    project["camera"]["position"] = serde_json::json!([1.0, -4.0, 2.0]);
    std::fs::write(&path, project.to_string()).unwrap();

    let loaded = ProjectFile::load_from_file(&path).unwrap();
    assert!(loaded.camera.position().y > 0.0);
    assert_ne!(loaded.camera, CameraPose::default());
}

#[test]
fn test_missing_file() {
    let mut state = DesignerState::new();
    assert!(state.load_from_file("/nonexistent/roomkit/project.json").is_err());
}

#[test]
fn test_scene_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scene.json");

    let mut state = DesignerState::new();
    state.objects.add(&CatalogItem::new(1, "Chair", 0.5, 0.5, 0.9));
    state.export_scene_to_file(&path).unwrap();

    let mut other = DesignerState::new();
    assert_eq!(other.import_scene_from_file(&path).unwrap(), 1);
    assert_eq!(other.objects.iter().next().unwrap().catalog_id, 1);
}
