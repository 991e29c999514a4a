//! Light pulses traveling along connections.

use crate::{network::Network, types::PointId};
use glam::Vec2;
use rand::Rng;

/// A pulse moving from `start` to `end`.
///
/// `progress` runs from `0.0` at spawn and the pulse expires once it
/// exceeds `1.0`. It is an `f64` so that `ceil(1 / speed)` increments always
/// take it strictly past `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub start: PointId,
    pub end: PointId,
    pub progress: f64,
}

impl Pulse {
    pub fn new(start: PointId, end: PointId) -> Self {
        Self {
            start,
            end,
            progress: 0.0,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.progress > 1.0
    }

    /// Interpolated position between the endpoints' current positions.
    pub fn position(&self, network: &Network) -> Vec2 {
        let a = network.points[self.start].pos;
        let b = network.points[self.end].pos;
        a.lerp(b, self.progress as f32)
    }
}

/// The live pulses, in spawn order.
#[derive(Debug, Clone, Default)]
pub struct PulseSet {
    pub pulses: Vec<Pulse>,
}

impl PulseSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pulse> {
        self.pulses.iter()
    }

    /// Tries to start a pulse at `source` towards one of its connections.
    ///
    /// The destination is chosen uniformly from `source`'s connection list.
    /// Nothing is spawned if `source` is out of range or has no connections.
    ///
    /// ### Returns
    /// The spawned pulse, if any.
    pub fn spawn_from(
        &mut self,
        network: &Network,
        source: PointId,
        rng: &mut impl Rng,
    ) -> Option<Pulse> {
        let connections = &network.points.get(source)?.connections;
        if connections.is_empty() {
            return None;
        }

        let end = connections[rng.random_range(0..connections.len())];
        let pulse = Pulse::new(source, end);
        self.pulses.push(pulse);
        Some(pulse)
    }

    /// Tries to start a pulse from a uniformly chosen source point.
    pub fn spawn_random(&mut self, network: &Network, rng: &mut impl Rng) -> Option<Pulse> {
        if network.is_empty() {
            return None;
        }
        let source = rng.random_range(0..network.len());
        self.spawn_from(network, source, rng)
    }

    /// Adds `speed` to every pulse and drops the ones that went past the end.
    ///
    /// ### Returns
    /// The number of pulses removed.
    pub fn advance(&mut self, speed: f64) -> usize {
        let before = self.pulses.len();
        self.pulses.retain_mut(|p| {
            p.progress += speed;
            !p.is_expired()
        });
        before - self.pulses.len()
    }
}
