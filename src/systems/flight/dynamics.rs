use nalgebra::{Matrix4, Rotation3, UnitQuaternion, Vector3};

use crate::components::FlightModel;

/// Threshold below which eased angles and the repulsion impulse are
/// considered settled. Quantities under it are left unchanged rather than
/// zeroed, so values never oscillate around the cutoff.
const EPSILON: f64 = 1e-8;

/// Downward translation rate while in free fall, world units per frame tick.
const FALL_RATE: f64 = 20.0;

/// Look-ahead distance of the gradient and tilt probes, world units.
const PROBE_DISTANCE: f64 = 5.0;

/// Samples differing from the base height by at least this much are treated
/// as off-map and discarded.
const PROBE_BOUND: f64 = 100.0;

/// Per-frame displacement accumulator in the root node's local frame.
/// Threaded explicitly through the update steps so each stage's
/// contribution stays visible: input and repulsion feed x/z, terrain
/// follow feeds y.
#[derive(Debug, Default, Clone, Copy)]
struct Movement {
    x: f64,
    y: f64,
    z: f64,
}

impl FlightModel {
    /// Advances the craft by one frame tick.
    ///
    /// `dt` is expressed in 60 Hz frame units and trusted as-is, apart from
    /// the repulsion spike guard. The step order is load-bearing:
    /// relaxation, input accumulation, angular integration, speed clamp,
    /// repulsion, horizontal translation, terrain follow, vertical
    /// translation, orientation, visual layering.
    pub fn update(&mut self, dt: f64) {
        if self.falling {
            let position = self.root.position();
            self.root
                .set_position(position + Vector3::new(0.0, -FALL_RATE * dt, 0.0));
            return;
        }

        let mut movement = Movement::default();

        // Drift and yaw rate relax toward rest before input is applied.
        self.motion.drift += (0.0 - self.motion.drift) * self.tuning.drift_lerp;
        self.motion.angular += (0.0 - self.motion.angular) * self.tuning.angular_lerp * 0.5;

        let (angular_amount, roll_amount) = if self.active {
            self.accumulate_input(dt, &mut movement)
        } else {
            (0.0, 0.0)
        };

        self.motion.angular += (angular_amount - self.motion.angular) * self.tuning.angular_lerp;
        let yaw = self.motion.angular;

        self.motion.speed = self.motion.speed.clamp(0.0, self.tuning.max_speed);
        self.motion.speed_ratio = self.motion.speed / self.tuning.max_speed;
        movement.z += self.motion.speed * dt;

        self.apply_repulsion(dt, &mut movement);

        self.root.translate_local(&Vector3::x(), movement.x);
        self.root.translate_local(&Vector3::z(), movement.z);

        self.follow_terrain(&mut movement);
        self.root.translate_local(&Vector3::y(), movement.y);

        // Positive yaw rate turns the craft toward -Y rotation; the delta is
        // applied in the world frame (delta * current).
        let delta = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -yaw);
        let rotation = delta * self.root.rotation();
        self.root.set_rotation(rotation);
        self.root.update_matrix();

        if self.body.is_some() {
            self.layer_visual(roll_amount);
        }
    }

    /// Maps held intents onto speed, drift and the frame's yaw/roll biases.
    /// Returns `(angular_amount, roll_amount)`.
    fn accumulate_input(&mut self, dt: f64, movement: &mut Movement) -> (f64, f64) {
        let tuning = &self.tuning;
        let input = self.input;
        let motion = &mut self.motion;

        let mut angular_amount = 0.0;
        let mut roll_amount = 0.0;

        if input.steer_left {
            angular_amount += tuning.angular_speed * dt;
            roll_amount -= tuning.roll_angle;
        }
        if input.steer_right {
            angular_amount -= tuning.angular_speed * dt;
            roll_amount += tuning.roll_angle;
        }

        if input.forward {
            motion.speed += tuning.thrust * dt;
        } else {
            motion.speed -= tuning.air_resist * dt;
        }

        if input.left_trigger {
            if input.steer_left {
                angular_amount += tuning.air_angular_speed * dt;
            } else {
                angular_amount += tuning.air_angular_speed * 0.5 * dt;
            }
            motion.speed -= tuning.air_brake * dt;
            motion.drift += (tuning.air_drift - motion.drift) * tuning.drift_lerp;
            movement.x += motion.speed * motion.drift * dt;
            if motion.drift > 0.0 {
                movement.z -= motion.speed * motion.drift * dt;
            }
            roll_amount -= tuning.roll_angle * 0.7;
        }

        if input.right_trigger {
            if input.steer_right {
                angular_amount -= tuning.air_angular_speed * dt;
            } else {
                angular_amount -= tuning.air_angular_speed * 0.5 * dt;
            }
            motion.speed -= tuning.air_brake * dt;
            motion.drift += (-tuning.air_drift - motion.drift) * tuning.drift_lerp;
            movement.x += motion.speed * motion.drift * dt;
            if motion.drift < 0.0 {
                movement.z += motion.speed * motion.drift * dt;
            }
            roll_amount += tuning.roll_angle * 0.7;
        }

        (angular_amount, roll_amount)
    }

    /// Feeds the decaying external impulse into the frame's movement.
    /// Once the impulse has a depth component its vertical part is dropped,
    /// keeping the push in the horizontal plane.
    fn apply_repulsion(&mut self, dt: f64, movement: &mut Movement) {
        let repulsion = &mut self.motion.repulsion_force;
        if repulsion.norm() < EPSILON {
            repulsion.fill(0.0);
        } else {
            if repulsion.z != 0.0 {
                repulsion.y = 0.0;
            }
            movement.x += repulsion.x;
            movement.y += repulsion.y;
            movement.z += repulsion.z;

            let lerp = if dt > 1.5 {
                self.tuning.repulsion_lerp * 2.0
            } else {
                self.tuning.repulsion_lerp
            };
            *repulsion -= *repulsion * lerp;
        }
    }

    /// Height correction plus look-ahead gradient/tilt sampling, using the
    /// post-horizontal-move position. Only the targets are updated here;
    /// the visual pass eases toward them at its own rate.
    fn follow_terrain(&mut self, movement: &mut Movement) {
        let map = match self.height_map.clone() {
            Some(map) => map,
            None => return,
        };

        let position = self.root.position();
        let rotation = self.root.rotation();

        let height = map.lookup(position.x, position.z);
        let delta = height + self.tuning.height_offset - position.y;
        if delta > 0.0 {
            // Below the hover line: snap up, e.g. when cresting a rise.
            movement.y += delta;
        } else {
            movement.y += delta * self.tuning.height_lerp;
        }

        // Pitch-feel probe ahead along local +Z.
        let ahead = position + rotation.transform_vector(&Vector3::new(0.0, 0.0, PROBE_DISTANCE));
        let sampled = map.lookup(ahead.x, ahead.z);
        if (sampled - height).abs() < PROBE_BOUND {
            self.motion.gradient_target = -(sampled - height).atan2(PROBE_DISTANCE);
        }

        // Roll-feel probe to local +X, retried mirrored to -X when the first
        // sample falls off the map.
        let side = position + rotation.transform_vector(&Vector3::new(PROBE_DISTANCE, 0.0, 0.0));
        let mut sampled = map.lookup(side.x, side.z);
        if (sampled - height).abs() > PROBE_BOUND {
            let side =
                position + rotation.transform_vector(&Vector3::new(-PROBE_DISTANCE, 0.0, 0.0));
            sampled = map.lookup(side.x, side.z);
        }
        if (sampled - height).abs() < PROBE_BOUND {
            self.motion.tilt_target = (sampled - height).atan2(PROBE_DISTANCE);
        }
    }

    /// Cosmetic gradient/tilt/roll layering on the body node. Physics is
    /// untouched: the body matrix is the root's with the eased rotations
    /// applied in the root's local frame.
    fn layer_visual(&mut self, roll_amount: f64) {
        let tuning = &self.tuning;
        let motion = &mut self.motion;

        let mut cosmetic = Matrix4::identity();

        let gradient_delta = (motion.gradient_target - motion.gradient) * tuning.gradient_lerp;
        if gradient_delta.abs() > EPSILON {
            motion.gradient += gradient_delta;
        }
        if motion.gradient.abs() > EPSILON {
            cosmetic *=
                Rotation3::from_axis_angle(&Vector3::x_axis(), motion.gradient).to_homogeneous();
        }

        let tilt_delta = (motion.tilt_target - motion.tilt) * tuning.tilt_lerp;
        if tilt_delta.abs() > EPSILON {
            motion.tilt += tilt_delta;
        }
        if motion.tilt.abs() > EPSILON {
            cosmetic *= Rotation3::from_axis_angle(&Vector3::z_axis(), motion.tilt).to_homogeneous();
        }

        // Roll composes after tilt; both rotate about Z so they accumulate.
        let roll_delta = (roll_amount - motion.roll) * tuning.roll_lerp;
        if roll_delta.abs() > EPSILON {
            motion.roll += roll_delta;
        }
        if motion.roll.abs() > EPSILON {
            cosmetic *= Rotation3::from_axis_angle(&Vector3::z_axis(), motion.roll).to_homogeneous();
        }

        let matrix = self.root.matrix() * cosmetic;
        if let Some(body) = self.body.as_mut() {
            body.set_matrix(matrix);
            body.update_world_matrix(true);
        }
    }
}
