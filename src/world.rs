use std::fmt;

use crate::bodies::{Body, BodyLabel, Velocity};

/// The physics engine a scene is installed into.
///
/// The engine owns the bodies and runs the simulation. It reports collisions by handing the labels
/// of each newly touching pair to a [`WinDetector`](crate::game::WinDetector).
pub trait PhysicsWorld {
    type BodyHandle: Copy + Eq + fmt::Debug;

    /// Register a body, static or dynamic as the body says.
    fn add_body(&mut self, body: &Body) -> Self::BodyHandle;

    fn bodies_labelled(&self, label: BodyLabel) -> Vec<Self::BodyHandle>;

    fn set_static(&mut self, body: Self::BodyHandle, is_static: bool);

    /// Vertical gravity. 0 turns gravity off.
    fn set_gravity(&mut self, y: f64);

    fn velocity(&self, body: Self::BodyHandle) -> Velocity;

    fn set_velocity(&mut self, body: Self::BodyHandle, velocity: Velocity);

    fn show_win_message(&mut self);
}

/// An in memory world that records what was asked of it.
#[cfg(test)]
pub(crate) mod recording {

    use super::*;

    #[derive(Debug, Default)]
    pub struct RecordingWorld {
        pub bodies: Vec<Body>,
        pub velocities: Vec<Velocity>,
        pub gravity_y: Option<f64>,
        pub set_static_calls: Vec<(usize, bool)>,
        pub win_messages: usize,
    }

    impl PhysicsWorld for RecordingWorld {
        type BodyHandle = usize;

        fn add_body(&mut self, body: &Body) -> usize {
            self.bodies.push(*body);
            self.velocities.push(Velocity::default());
            self.bodies.len() - 1
        }

        fn bodies_labelled(&self, label: BodyLabel) -> Vec<usize> {
            self.bodies
                .iter()
                .enumerate()
                .filter(|&(_, body)| body.label == label)
                .map(|(handle, _)| handle)
                .collect()
        }

        fn set_static(&mut self, body: usize, is_static: bool) {
            self.set_static_calls.push((body, is_static));
            self.bodies[body].is_static = is_static;
        }

        fn set_gravity(&mut self, y: f64) {
            self.gravity_y = Some(y);
        }

        fn velocity(&self, body: usize) -> Velocity {
            self.velocities[body]
        }

        fn set_velocity(&mut self, body: usize, velocity: Velocity) {
            self.velocities[body] = velocity;
        }

        fn show_win_message(&mut self) {
            self.win_messages += 1;
        }
    }
}
