use nalgebra::{Matrix4, Translation3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Minimal retained-mode transform node.
///
/// The flight controller drives two of these: the physics root, whose local
/// matrix is recomputed as translation × rotation, and the visual body,
/// whose matrix is set wholesale from the root's matrix with cosmetic
/// rotations layered in. Nodes here have no parent hierarchy, so the world
/// matrix is a refreshed copy of the local one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    position: Vector3<f64>,
    rotation: UnitQuaternion<f64>,
    matrix: Matrix4<f64>,
    matrix_world: Matrix4<f64>,
    matrix_auto_update: bool,
}

impl Default for SceneNode {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
            matrix: Matrix4::identity(),
            matrix_world: Matrix4::identity(),
            matrix_auto_update: true,
        }
    }
}

impl SceneNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node at a specific position with its matrix already
    /// composed.
    pub fn at_position(position: Vector3<f64>) -> Self {
        let mut node = Self {
            position,
            ..Default::default()
        };
        node.update_matrix();
        node
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn rotation(&self) -> UnitQuaternion<f64> {
        self.rotation
    }

    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    pub fn world_matrix(&self) -> &Matrix4<f64> {
        &self.matrix_world
    }

    pub fn set_position(&mut self, position: Vector3<f64>) {
        self.position = position;
    }

    pub fn set_rotation(&mut self, rotation: UnitQuaternion<f64>) {
        self.rotation = rotation;
    }

    /// Replaces the local matrix wholesale. Position and rotation are left
    /// untouched; callers composing matrices directly own the result.
    pub fn set_matrix(&mut self, matrix: Matrix4<f64>) {
        self.matrix = matrix;
    }

    pub fn set_matrix_auto_update(&mut self, auto: bool) {
        self.matrix_auto_update = auto;
    }

    pub fn matrix_auto_update(&self) -> bool {
        self.matrix_auto_update
    }

    /// Moves the node along one of its own axes. The axis is rotated into
    /// the world frame by the node's current orientation.
    pub fn translate_local(&mut self, axis: &Vector3<f64>, distance: f64) {
        self.position += self.rotation.transform_vector(axis) * distance;
    }

    /// Recomposes the local matrix from position and rotation.
    pub fn update_matrix(&mut self) {
        self.matrix = Translation3::from(self.position).to_homogeneous() * self.rotation.to_homogeneous();
        self.matrix_world = self.matrix;
    }

    /// Refreshes the world matrix from the local one. `force` mirrors the
    /// include-descendants flag of a full scene graph; nodes here are
    /// parentless so both paths copy the local matrix.
    pub fn update_world_matrix(&mut self, force: bool) {
        let _ = force;
        self.matrix_world = self.matrix;
    }
}
