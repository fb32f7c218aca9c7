use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Motion quantities mutated on every update tick.
///
/// `speed` is clamped to `[0, max_speed]` each frame and `speed_ratio` is
/// recomputed from it; the ratio is never set independently. The cosmetic
/// angles (`roll`, `gradient`, `tilt`) each ease toward their target at
/// their own lerp rate, decoupled from the physics root's motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    /// Signed lateral velocity bias induced by the triggers.
    pub drift: f64,
    /// Current yaw rate.
    pub angular: f64,
    /// Forward speed, world units per frame tick.
    pub speed: f64,
    /// `speed / max_speed`, recomputed every frame.
    pub speed_ratio: f64,
    pub roll: f64,
    pub gradient: f64,
    pub gradient_target: f64,
    pub tilt: f64,
    pub tilt_target: f64,
    /// Externally injected impulse, decayed geometrically each frame.
    pub repulsion_force: Vector3<f64>,
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            drift: 0.0,
            angular: 0.0,
            speed: 0.0,
            speed_ratio: 0.0,
            roll: 0.0,
            gradient: 0.0,
            gradient_target: 0.0,
            tilt: 0.0,
            tilt_target: 0.0,
            repulsion_force: Vector3::zeros(),
        }
    }
}
