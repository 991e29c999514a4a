use crate::types::PointId;
use glam::Vec2;
use rand::Rng;

/// A drifting point of the network.
#[derive(Debug, Clone)]
pub struct Point {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Outgoing connections. Only ever holds ids greater than this point's own.
    pub connections: Vec<PointId>,
}

impl Point {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            connections: Vec::new(),
        }
    }

    /// Creates a point at a uniform position inside `width x height` with a
    /// random velocity whose components lie in `[-speed / 2, speed / 2)`.
    pub fn random(width: f32, height: f32, speed: f32, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(rng.random::<f32>() * width, rng.random::<f32>() * height);
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * speed,
            (rng.random::<f32>() - 0.5) * speed,
        );
        Self::new(pos, vel)
    }

    /// Moves the point by one step of its velocity.
    ///
    /// A velocity component is reflected when the new position touches or
    /// crosses the matching edge, then the position is clamped into
    /// `[0, width] x [0, height]`.
    pub fn advance(&mut self, width: f32, height: f32) {
        self.pos += self.vel;

        if self.pos.x <= 0.0 || self.pos.x >= width {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y <= 0.0 || self.pos.y >= height {
            self.vel.y = -self.vel.y;
        }

        self.clamp_to(width, height);
    }

    #[inline]
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        self.pos = self.pos.clamp(Vec2::ZERO, Vec2::new(width, height));
    }
}
