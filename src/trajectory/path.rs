//! Lazy polyline approximation of an arc.

use nalgebra::{Point3, Vector3};

/// Number of segments a path is split into.
pub const PATH_RESOLUTION: u32 = 30;

/// Straight piece of a sampled path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
}

/// Iterator over the [`PATH_RESOLUTION`] segments of an arc.
///
/// Finite and cheap to clone; cloning before iterating gives a restartable
/// sequence. The `i`-th end point is the arc position at
/// `i / PATH_RESOLUTION` of the flight time.
#[derive(Clone, Debug)]
pub struct PathSegments {
    origin: Point3<f32>,
    initial_velocity: Vector3<f32>,
    acceleration: Vector3<f32>,
    time_to_target: f32,
    previous: Point3<f32>,
    step: u32,
}

impl PathSegments {
    pub(crate) fn new(
        origin: Point3<f32>,
        initial_velocity: Vector3<f32>,
        acceleration: Vector3<f32>,
        time_to_target: f32,
    ) -> Self {
        Self {
            origin,
            initial_velocity,
            acceleration,
            time_to_target,
            previous: origin,
            step: 0,
        }
    }

    fn point_at(&self, step: u32) -> Point3<f32> {
        let t = step as f32 / PATH_RESOLUTION as f32 * self.time_to_target;
        self.origin + self.initial_velocity * t + self.acceleration * (t * t / 2.0)
    }
}

impl Iterator for PathSegments {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.step >= PATH_RESOLUTION {
            return None;
        }
        self.step += 1;

        let end = self.point_at(self.step);
        let segment = Segment {
            start: self.previous,
            end,
        };
        self.previous = end;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (PATH_RESOLUTION - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PathSegments {}
