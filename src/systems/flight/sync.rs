use bevy::prelude::*;
use nalgebra::Matrix4;

use crate::components::FlightModel;

/// The tunings are expressed per 60 Hz frame tick, so wall-clock deltas are
/// converted to frame units before stepping.
const FRAME_RATE: f64 = 60.0;

/// Steps every flight model and mirrors the resulting node transform into
/// the entity's `Transform`: the body node's world matrix when a body is
/// attached, the root's matrix otherwise.
pub fn flight_dynamics_system(
    time: Res<Time>,
    mut query: Query<(&mut FlightModel, &mut Transform)>,
) {
    let dt = time.delta_secs_f64() * FRAME_RATE;
    for (mut model, mut transform) in query.iter_mut() {
        model.update(dt);
        let matrix = match model.body() {
            Some(body) => *body.world_matrix(),
            None => *model.root().matrix(),
        };
        *transform = matrix_to_transform(&matrix);
    }
}

/// Narrows an f64 column-major matrix into a render-side `Transform`.
fn matrix_to_transform(matrix: &Matrix4<f64>) -> Transform {
    let mut cols = [0.0f32; 16];
    for (slot, value) in cols.iter_mut().zip(matrix.iter()) {
        *slot = *value as f32;
    }
    Transform::from_matrix(Mat4::from_cols_array(&cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Translation3, UnitQuaternion, Vector3};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn conversion_preserves_translation_and_rotation() {
        let matrix = Translation3::new(1.0, 2.0, 3.0).to_homogeneous()
            * UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2).to_homogeneous();
        let transform = matrix_to_transform(&matrix);

        assert!((transform.translation - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
        let forward = transform.rotation * Vec3::Z;
        assert!((forward - Vec3::X).length() < 1e-6);
    }
}
