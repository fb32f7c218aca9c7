use std::fmt;
use std::sync::Arc;

use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{ControlInputState, FlightTuning, MotionState, SceneNode};
use crate::resources::HeightMap;

/// Per-frame flight controller for one hover craft.
///
/// Owns the physics-root node whose position and heading are authoritative;
/// a visual body node may be attached and receives a cosmetically rotated
/// copy of the root transform each frame. The height map is a shared,
/// caller-managed collaborator: the model queries it but never assumes it
/// can invalidate it.
#[derive(Component)]
pub struct FlightModel {
    pub tuning: FlightTuning,
    pub motion: MotionState,
    pub input: ControlInputState,
    /// Steering and thrust inputs are honored only while set; drift and yaw
    /// rate still settle toward rest when cleared.
    pub active: bool,
    /// Reserved for the damage layer; never read by the update path.
    pub destroyed: bool,
    /// Terminal mode: normal dynamics are replaced by straight-down
    /// translation of the root.
    pub falling: bool,
    pub(crate) root: SceneNode,
    pub(crate) body: Option<SceneNode>,
    pub(crate) height_map: Option<Arc<dyn HeightMap>>,
}

impl Default for FlightModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightModel {
    /// A default-tuned model with a freshly owned physics root.
    pub fn new() -> Self {
        Self::with_tuning(FlightTuning::default())
    }

    pub fn with_tuning(tuning: FlightTuning) -> Self {
        Self {
            tuning,
            motion: MotionState::default(),
            input: ControlInputState::default(),
            active: true,
            destroyed: false,
            falling: false,
            root: SceneNode::new(),
            body: None,
            height_map: None,
        }
    }

    /// Takes control of a visual body node, replacing any previous one. The
    /// body's automatic matrix update is disabled (the controller sets its
    /// matrix wholesale) and the root is seeded from the body's current
    /// position.
    pub fn attach(&mut self, mut body: SceneNode) {
        body.set_matrix_auto_update(false);
        self.root.set_position(body.position());
        debug!("body node attached at {:?}", body.position());
        self.body = Some(body);
    }

    /// Releases the current body node, if any.
    pub fn detach(&mut self) -> Option<SceneNode> {
        self.body.take()
    }

    pub fn set_height_map(&mut self, map: Arc<dyn HeightMap>) {
        self.height_map = Some(map);
    }

    pub fn root(&self) -> &SceneNode {
        &self.root
    }

    /// Mutable root access for initial placement.
    pub fn root_mut(&mut self) -> &mut SceneNode {
        &mut self.root
    }

    pub fn body(&self) -> Option<&SceneNode> {
        self.body.as_ref()
    }

    pub fn speed_ratio(&self) -> f64 {
        self.motion.speed_ratio
    }

    /// Entry point for the collision layer: impulses accumulate into the
    /// decaying repulsion term.
    pub fn inject_repulsion(&mut self, impulse: Vector3<f64>) {
        self.motion.repulsion_force += impulse;
    }

    /// Switches to the terminal free-fall mode.
    pub fn fall(&mut self) {
        if !self.falling {
            debug!("craft entering free fall");
        }
        self.falling = true;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl fmt::Debug for FlightModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightModel")
            .field("tuning", &self.tuning)
            .field("motion", &self.motion)
            .field("input", &self.input)
            .field("active", &self.active)
            .field("destroyed", &self.destroyed)
            .field("falling", &self.falling)
            .field("root", &self.root)
            .field("body", &self.body)
            .field("height_map", &self.height_map.is_some())
            .finish()
    }
}
