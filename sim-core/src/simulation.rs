//! The simulation object: owns every point, pulse and the viewport.

use crate::{
    config::Config,
    error::SimError,
    gradient::Gradient,
    network::Network,
    phases,
    pulse::{Pulse, PulseSet},
    surface::Surface,
    types::PointId,
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

/// The whole animated network.
///
/// Construct it with [`Simulation::new`], call [`Simulation::frame`] once
/// per display refresh and [`Simulation::resize`] whenever the host viewport
/// changes size.
#[derive(Debug)]
pub struct Simulation {
    cfg: Config,
    network: Network,
    pulses: PulseSet,
    width: f32,
    height: f32,
    gradient: Gradient,
    rng: StdRng,
    frame: u64,
}

impl Simulation {
    /// Scatters `cfg.point_count` points over a `width x height` surface and
    /// connects them at random.
    ///
    /// ### Parameters
    /// - `cfg` - Validated before anything is built. With `cfg.seed` set the
    ///   network and every later random choice are reproducible.
    /// - `width`, `height` - Initial drawing surface size.
    ///
    /// ### Returns
    /// - `Ok(Simulation)` ready to draw its first frame.
    /// - `Err(SimError::Config)` if `cfg` fails validation.
    /// - `Err(SimError::InvalidSurface)` if either dimension is not a finite
    ///   positive number.
    pub fn new(cfg: Config, width: f32, height: f32) -> Result<Self, SimError> {
        cfg.validate()?;
        if !is_valid_extent(width) || !is_valid_extent(height) || width == 0.0 || height == 0.0 {
            return Err(SimError::InvalidSurface { width, height });
        }

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut network = Network::scatter(cfg.point_count, width, height, cfg.point_speed, &mut rng);
        let connections = network.connect_random(cfg.connection_probability, &mut rng);

        info!(
            points = network.len(),
            connections,
            width,
            height,
            "network initialized"
        );

        Ok(Self {
            cfg,
            network,
            pulses: PulseSet::new(),
            width,
            height,
            gradient: Gradient::diagonal(width, height),
            rng,
            frame: 0,
        })
    }

    /// Adopts a new viewport size and rebuilds the background gradient.
    ///
    /// Points keep their positions unless `clamp_on_resize` is set; otherwise
    /// a point left outside a shrunk viewport is clamped on its next move.
    ///
    /// ### Returns
    /// `Err(SimError::InvalidSurface)` for a negative or non-finite size, in
    /// which case nothing changes.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SimError> {
        if !is_valid_extent(width) || !is_valid_extent(height) {
            return Err(SimError::InvalidSurface { width, height });
        }

        self.width = width;
        self.height = height;
        self.gradient = Gradient::diagonal(width, height);
        if self.cfg.clamp_on_resize {
            self.network.clamp_all(width, height);
        }

        debug!(width, height, "viewport resized");
        Ok(())
    }

    /// Renders one frame onto `surface`, advancing the simulation by one step.
    ///
    /// The frame is:
    /// 1. Fill the viewport with the cached background gradient.
    /// 2. [`phases::move_phase`]: move and bounce every point.
    /// 3. [`phases::connection_phase`]: draw the connection lines.
    /// 4. [`phases::point_phase`]: draw the points.
    /// 5. [`phases::pulse_phase`]: advance, expire and draw pulses.
    /// 6. [`phases::spawn_phase`]: maybe start a new pulse.
    ///
    /// ### Parameters
    /// - `surface` - Drawing target sized to the current viewport.
    pub fn frame(&mut self, surface: &mut impl Surface) {
        // The background covers whatever the previous frame left behind.
        surface.fill_gradient(&self.gradient, self.width, self.height);

        // Move before drawing so lines, discs and rings share positions.
        phases::move_phase(&mut self.network, self.width, self.height);
        phases::connection_phase(&self.network, surface);
        phases::point_phase(&self.network, &self.cfg, surface);
        let expired = phases::pulse_phase(&mut self.pulses, &self.network, &self.cfg, surface);
        // Spawn last: a new pulse is first advanced and drawn next frame.
        let spawned = phases::spawn_phase(&mut self.pulses, &self.network, &self.cfg, &mut self.rng);

        self.frame += 1;
        trace!(
            frame = self.frame,
            live = self.pulses.len(),
            expired,
            spawned = spawned.is_some(),
            "frame rendered"
        );
    }

    /// Starts a pulse from `source` right away, skipping the per-frame roll.
    ///
    /// ### Returns
    /// The new pulse, or `None` if `source` has no outgoing connections.
    pub fn spawn_pulse_from(&mut self, source: PointId) -> Option<Pulse> {
        self.pulses.spawn_from(&self.network, source, &mut self.rng)
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn pulses(&self) -> &PulseSet {
        &self.pulses
    }

    pub fn gradient(&self) -> &Gradient {
        &self.gradient
    }

    /// Current viewport as `(width, height)`.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }
}

#[inline]
fn is_valid_extent(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ConfigError,
        surface::{DrawCommand, Recorder},
    };
    use glam::Vec2;

    fn seeded(cfg: Config) -> Config {
        Config {
            seed: Some(1234),
            ..cfg
        }
    }

    fn pair_config() -> Config {
        seeded(Config {
            point_count: 2,
            connection_probability: 1.0,
            pulse_spawn_probability: 0.0,
            ..Config::default()
        })
    }

    #[test]
    fn new_builds_the_configured_network() {
        let sim = Simulation::new(seeded(Config::default()), 800.0, 600.0).unwrap();

        assert_eq!(sim.network().len(), 100);
        assert!(sim.pulses().is_empty());
        assert_eq!(sim.size(), (800.0, 600.0));
        assert_eq!(sim.gradient().end, Vec2::new(800.0, 600.0));
        for p in &sim.network().points {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
        }
    }

    #[test]
    fn new_fails_fast_on_unusable_surface() {
        for (w, h) in [(0.0, 600.0), (800.0, -1.0), (f32::NAN, 10.0), (10.0, f32::INFINITY)] {
            let err = Simulation::new(Config::default(), w, h).unwrap_err();
            assert!(matches!(err, SimError::InvalidSurface { .. }), "{w}x{h}: {err:?}");
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = Config {
            connection_probability: -0.5,
            ..Config::default()
        };
        assert!(matches!(
            Simulation::new(cfg, 100.0, 100.0),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn new_rejects_pulses_that_never_expire() {
        let cfg = seeded(Config {
            point_count: 2,
            connection_probability: 1.0,
            pulse_spawn_probability: 1.0,
            pulse_speed: 0.0,
            ..Config::default()
        });

        let err = Simulation::new(cfg, 100.0, 100.0).unwrap_err();
        assert_eq!(
            err,
            SimError::Config(ConfigError::NotPositive {
                name: "pulse_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn live_pulses_stay_bounded_under_constant_spawning() {
        let cfg = seeded(Config {
            point_count: 2,
            connection_probability: 1.0,
            pulse_spawn_probability: 1.0,
            ..Config::default()
        });
        let mut sim = Simulation::new(cfg, 100.0, 100.0).unwrap();
        let mut rec = Recorder::new();

        for _ in 0..2000 {
            rec.clear();
            sim.frame(&mut rec);
            // At most one spawn per frame, each living for 200 frames.
            assert!(sim.pulses().len() <= 200, "live pulses: {}", sim.pulses().len());
        }
    }

    #[test]
    fn same_seed_gives_same_network() {
        let a = Simulation::new(seeded(Config::default()), 640.0, 480.0).unwrap();
        let b = Simulation::new(seeded(Config::default()), 640.0, 480.0).unwrap();

        let ca: Vec<_> = a.network().connections().collect();
        let cb: Vec<_> = b.network().connections().collect();
        assert_eq!(ca, cb);
        assert_eq!(a.network().points[17].pos, b.network().points[17].pos);
    }

    #[test]
    fn two_points_single_pulse_lifecycle() {
        let mut sim = Simulation::new(pair_config(), 300.0, 200.0).unwrap();
        assert_eq!(sim.network().connections().collect::<Vec<_>>(), vec![(0, 1)]);

        for _ in 0..20 {
            assert!(sim.spawn_pulse_from(1).is_none());
        }
        let pulse = sim.spawn_pulse_from(0).unwrap();
        assert_eq!((pulse.start, pulse.end), (0, 1));
        assert_eq!(sim.pulses().len(), 1);

        let mut rec = Recorder::new();
        let mut last = 0.0;
        for frame in 1..=200 {
            sim.frame(&mut rec);
            if let Some(p) = sim.pulses().iter().next() {
                assert!(p.progress >= last, "progress went backwards at {frame}");
                last = p.progress;
            } else {
                assert_eq!(frame, 200, "pulse expired early");
            }
        }

        assert!(sim.pulses().is_empty());
        assert_eq!(sim.frame_count(), 200);
        // The ring was drawn in each of the first 199 frames only.
        assert_eq!(rec.rings().count(), 199);

        sim.frame(&mut rec);
        assert!(sim.pulses().is_empty());
    }

    #[test]
    fn frame_draws_in_fixed_order() {
        let mut sim = Simulation::new(pair_config(), 300.0, 200.0).unwrap();
        sim.spawn_pulse_from(0);

        let mut rec = Recorder::new();
        sim.frame(&mut rec);

        let kinds: Vec<&str> = rec
            .commands
            .iter()
            .map(|c| match c {
                DrawCommand::Gradient { .. } => "gradient",
                DrawCommand::Line { .. } => "line",
                DrawCommand::Disc { .. } => "disc",
                DrawCommand::Ring { .. } => "ring",
            })
            .collect();
        assert_eq!(kinds, vec!["gradient", "line", "disc", "disc", "ring"]);

        // Lines and discs use the positions after this frame's move.
        let points = &sim.network().points;
        assert_eq!(
            rec.commands[1],
            DrawCommand::Line {
                from: points[0].pos,
                to: points[1].pos,
                stroke: crate::style::connection_stroke(),
            }
        );
    }

    #[test]
    fn frame_keeps_points_in_bounds() {
        let cfg = seeded(Config {
            point_speed: 40.0,
            ..Config::default()
        });
        let mut sim = Simulation::new(cfg, 120.0, 90.0).unwrap();
        let mut rec = Recorder::new();

        for _ in 0..300 {
            rec.clear();
            sim.frame(&mut rec);
            for p in &sim.network().points {
                assert!(p.pos.x >= 0.0 && p.pos.x <= 120.0);
                assert!(p.pos.y >= 0.0 && p.pos.y <= 90.0);
            }
        }
    }

    #[test]
    fn resize_updates_viewport_and_gradient() {
        let mut sim = Simulation::new(seeded(Config::default()), 800.0, 600.0).unwrap();

        sim.resize(1024.0, 300.0).unwrap();

        assert_eq!(sim.size(), (1024.0, 300.0));
        assert_eq!(sim.gradient().start, Vec2::ZERO);
        assert_eq!(sim.gradient().end, Vec2::new(1024.0, 300.0));

        let mut rec = Recorder::new();
        sim.frame(&mut rec);
        assert_eq!(
            rec.commands[0],
            DrawCommand::Gradient {
                gradient: Gradient::diagonal(1024.0, 300.0),
                width: 1024.0,
                height: 300.0,
            }
        );
    }

    #[test]
    fn resize_rejects_bad_sizes_without_changes() {
        let mut sim = Simulation::new(seeded(Config::default()), 800.0, 600.0).unwrap();

        assert!(sim.resize(-5.0, 100.0).is_err());
        assert!(sim.resize(100.0, f32::NAN).is_err());
        assert_eq!(sim.size(), (800.0, 600.0));
        assert_eq!(sim.gradient().end, Vec2::new(800.0, 600.0));

        // A collapsed viewport is allowed (e.g. a minimized window).
        assert!(sim.resize(0.0, 0.0).is_ok());
    }

    #[test]
    fn resize_leaves_points_until_next_move_by_default() {
        let mut sim = Simulation::new(seeded(Config::default()), 800.0, 600.0).unwrap();
        let before: Vec<Vec2> = sim.network().points.iter().map(|p| p.pos).collect();

        sim.resize(10.0, 10.0).unwrap();
        let after: Vec<Vec2> = sim.network().points.iter().map(|p| p.pos).collect();
        assert_eq!(before, after);

        sim.frame(&mut Recorder::new());
        for p in &sim.network().points {
            assert!(p.pos.x <= 10.0 && p.pos.y <= 10.0);
        }
    }

    #[test]
    fn clamp_on_resize_clamps_immediately() {
        let cfg = seeded(Config {
            clamp_on_resize: true,
            ..Config::default()
        });
        let mut sim = Simulation::new(cfg, 800.0, 600.0).unwrap();

        sim.resize(10.0, 10.0).unwrap();

        for p in &sim.network().points {
            assert!(p.pos.x <= 10.0 && p.pos.y <= 10.0);
        }
    }
}
