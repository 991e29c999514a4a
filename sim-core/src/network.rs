//! The fixed collection of points and the random connections between them.

use crate::{point::Point, types::PointId};
use rand::Rng;

/// All points of the effect, in insertion order.
///
/// Connections are stored one-directionally: a connection between `i` and
/// `j` with `i < j` lives only in `points[i].connections`. Use
/// [`Network::is_connected`] or [`Network::symmetric_adjacency`] when both
/// directions matter.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub points: Vec<Point>,
}

impl Network {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Scatters `count` unconnected points uniformly over `width x height`.
    pub fn scatter(count: usize, width: f32, height: f32, speed: f32, rng: &mut impl Rng) -> Self {
        let points = (0..count)
            .map(|_| Point::random(width, height, speed, rng))
            .collect();

        Self::from_points(points)
    }

    /// Connects every pair `i < j` independently with probability `probability`.
    ///
    /// Each success pushes `j` onto point `i`'s list, so lists stay sorted
    /// in ascending order. The expected number of connections is
    /// `probability * n * (n - 1) / 2`.
    ///
    /// ### Returns
    /// The number of connections created.
    pub fn connect_random(&mut self, probability: f64, rng: &mut impl Rng) -> usize {
        let n = self.points.len();
        let mut created = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(probability) {
                    self.points[i].connections.push(j);
                    created += 1;
                }
            }
        }
        created
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over all connections as `(from, to)` pairs with `from < to`.
    pub fn connections(&self) -> impl Iterator<Item = (PointId, PointId)> + '_ {
        self.points
            .iter()
            .enumerate()
            .flat_map(|(i, p)| p.connections.iter().map(move |&j| (i, j)))
    }

    pub fn connection_count(&self) -> usize {
        self.points.iter().map(|p| p.connections.len()).sum()
    }

    /// Returns `true` if `a` and `b` are connected in either direction.
    pub fn is_connected(&self, a: PointId, b: PointId) -> bool {
        let has = |from: PointId, to: PointId| {
            self.points
                .get(from)
                .is_some_and(|p| p.connections.contains(&to))
        };
        has(a, b) || has(b, a)
    }

    /// Builds an undirected adjacency list: entry `i` holds every point
    /// connected to `i`, in ascending order.
    pub fn symmetric_adjacency(&self) -> Vec<Vec<PointId>> {
        let mut adj = vec![Vec::new(); self.points.len()];
        for (i, j) in self.connections() {
            adj[i].push(j);
            adj[j].push(i);
        }
        for list in &mut adj {
            list.sort_unstable();
        }
        adj
    }

    /// Moves every point one step inside `width x height`.
    pub fn advance_all(&mut self, width: f32, height: f32) {
        for p in &mut self.points {
            p.advance(width, height);
        }
    }

    pub fn clamp_all(&mut self, width: f32, height: f32) {
        for p in &mut self.points {
            p.clamp_to(width, height);
        }
    }
}
