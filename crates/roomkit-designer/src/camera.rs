//! 3D preview camera state.
//!
//! The preview camera is driven by orbit controls while mounted. Its pose is
//! written back continuously so that re-entering the preview restores the
//! last view. World space is y-up; the camera may never dip under the floor.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Lowest allowed camera height above the floor, in world units.
pub const MIN_CAMERA_HEIGHT: f32 = 0.01;

/// Closest orbit distance to the target.
pub const MIN_ORBIT_DISTANCE: f32 = 2.0;

/// Farthest orbit distance from the target.
pub const MAX_ORBIT_DISTANCE: f32 = 100.0;

/// Largest polar angle (from straight down onto the target to level).
pub const MAX_POLAR_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

/// Position, orientation (Euler XYZ, radians) and look-at target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "PoseRecord")]
pub struct CameraPose {
    position: Vec3,
    pub rotation: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, rotation: Vec3, target: Vec3) -> Self {
        let mut pose = Self {
            position,
            rotation,
            target,
        };
        pose.set_position(position);
        pose
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Stores a position, lifting it to [`MIN_CAMERA_HEIGHT`] if needed.
    /// Non-finite positions are ignored.
    pub fn set_position(&mut self, position: Vec3) {
        if !position.is_finite() {
            return;
        }
        self.position = Vec3::new(position.x, position.y.max(MIN_CAMERA_HEIGHT), position.z);
    }
}

#[derive(Deserialize)]
struct PoseRecord {
    position: Vec3,
    rotation: Vec3,
    target: Vec3,
}

impl From<PoseRecord> for CameraPose {
    fn from(record: PoseRecord) -> Self {
        let mut pose = Self {
            position: CameraPose::default().position,
            rotation: record.rotation,
            target: record.target,
        };
        pose.set_position(record.position);
        pose
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            rotation: Vec3::new(-std::f32::consts::FRAC_PI_4, std::f32::consts::FRAC_PI_4, 0.0),
            target: Vec3::ZERO,
        }
    }
}

/// Persisted camera pose shared between preview sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pose: CameraPose,
}

impl CameraState {
    pub fn new(pose: CameraPose) -> Self {
        Self { pose }
    }

    /// Pose to restore when the preview mounts.
    pub fn restore(&self) -> CameraPose {
        self.pose
    }

    /// Called on every controls change while the preview is live.
    pub fn sync_from_controls(&mut self, position: Vec3, rotation: Vec3) {
        self.pose.set_position(position);
        if rotation.is_finite() {
            self.pose.rotation = rotation;
        }
    }

    pub fn set_target(&mut self, target: Vec3) {
        if target.is_finite() {
            self.pose.target = target;
        }
    }

    /// Writes back a full orbit camera state.
    pub fn sync_from_orbit(&mut self, orbit: &OrbitCamera) {
        let pose = orbit.to_pose();
        self.sync_from_controls(pose.position(), pose.rotation);
        self.set_target(pose.target);
    }

    pub fn reset(&mut self) {
        self.pose = CameraPose::default();
    }
}

/// Orbit controls around a target, in spherical coordinates.
///
/// `polar` is measured from the +Y axis (0 looks straight down), `azimuth`
/// around +Y starting at +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub azimuth: f32,
    pub polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_pose(&CameraPose::default())
    }
}

impl OrbitCamera {
    /// Derives the orbit parameters that reproduce `pose`'s position.
    pub fn from_pose(pose: &CameraPose) -> Self {
        let offset = pose.position() - pose.target;
        let distance = offset.length().max(f32::EPSILON);
        let mut orbit = Self {
            target: pose.target,
            distance,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            min_distance: MIN_ORBIT_DISTANCE,
            max_distance: MAX_ORBIT_DISTANCE,
            max_polar: MAX_POLAR_ANGLE,
        };
        orbit.clamp();
        orbit
    }

    fn clamp(&mut self) {
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.polar = self.polar.clamp(0.0, self.max_polar);
    }

    pub fn orbit(&mut self, delta_azimuth: f32, delta_polar: f32) {
        self.azimuth += delta_azimuth;
        self.polar += delta_polar;
        self.clamp();
    }

    /// Dolly by a factor, as a wheel notch does.
    pub fn dolly(&mut self, factor: f32) {
        if factor > 0.0 && factor.is_finite() {
            self.distance /= factor;
            self.clamp();
        }
    }

    /// Moves the target in the camera's screen plane.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let eye = self.eye_position();
        let forward = (self.target - eye).normalize_or_zero();
        let world_up = if forward.cross(Vec3::Y).length_squared() < 0.001 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let right = forward.cross(world_up).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let scale = self.distance * 0.001;
        self.target -= right * delta_x * scale;
        self.target += up * delta_y * scale;
    }

    pub fn eye_position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target + Vec3::new(sin_polar * sin_az, cos_polar, sin_polar * cos_az) * self.distance
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye_position();
        let forward = (self.target - eye).normalize_or_zero();
        let up = if forward.cross(Vec3::Y).length_squared() < 0.001 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        Mat4::look_at_rh(eye, self.target, up)
    }

    /// Pose looking from the eye position at the target.
    pub fn to_pose(&self) -> CameraPose {
        let camera_to_world = self.view_matrix().inverse();
        let (_, rotation, _) = camera_to_world.to_scale_rotation_translation();
        let (x, y, z) = Quat::normalize(rotation).to_euler(EulerRot::XYZ);
        CameraPose::new(self.eye_position(), Vec3::new(x, y, z), self.target)
    }
}
