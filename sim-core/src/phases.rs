//! Per-frame phases of the network animation.
//!
//! A frame runs, in order:
//! 1. [`move_phase`]: every point drifts one step and bounces off the edges.
//! 2. [`connection_phase`]: every connection is drawn as a faint line.
//! 3. [`point_phase`]: every point is drawn as a small disc.
//! 4. [`pulse_phase`]: live pulses advance, expired ones are dropped and
//!    the survivors are drawn as rings.
//! 5. [`spawn_phase`]: maybe start one new pulse.
//!
//! The background fill happens before all of these, in
//! [`crate::simulation::Simulation::frame`].

use crate::{
    config::Config,
    network::Network,
    pulse::{Pulse, PulseSet},
    style,
    surface::Surface,
};
use rand::Rng;

/// Advances every point inside the `width x height` viewport.
///
/// Each point moves by its velocity, reflects the velocity component of any
/// edge it touched and is clamped back into the viewport. Points left outside
/// a viewport that shrank since the last frame are pulled in here.
///
/// ### Parameters
/// - `network` - Points to move; connections are untouched.
/// - `width`, `height` - Current viewport size.
pub fn move_phase(network: &mut Network, width: f32, height: f32) {
    network.advance_all(width, height);
}

/// Draws each connection between the endpoints' current positions.
///
/// ### Parameters
/// - `network` - Source of the connections and positions. Run after
///   [`move_phase`] so lines follow this frame's positions.
/// - `surface` - Target of one faint line per connection.
pub fn connection_phase(network: &Network, surface: &mut impl Surface) {
    let stroke = style::connection_stroke();
    // Each connection is stored once, on its lower-indexed endpoint.
    for (i, j) in network.connections() {
        surface.stroke_line(network.points[i].pos, network.points[j].pos, stroke);
    }
}

/// Draws every point as a filled disc of radius `cfg.point_radius`.
///
/// ### Parameters
/// - `network` - Points to draw.
/// - `cfg` - Provides the disc radius.
/// - `surface` - Target; discs go on top of the connection lines.
pub fn point_phase(network: &Network, cfg: &Config, surface: &mut impl Surface) {
    let color = style::point_fill();
    for p in &network.points {
        surface.fill_circle(p.pos, cfg.point_radius, color);
    }
}

/// Advances, expires and draws the live pulses.
///
/// 1. Adds `cfg.pulse_speed` to every pulse's progress.
/// 2. Removes every pulse whose progress went past `1.0`.
/// 3. Draws each survivor as a ring at [`Pulse::position`], i.e. between the
///    endpoints' positions after this frame's move.
///
/// ### Parameters
/// - `pulses` - Live pulses; expired ones are removed in place.
/// - `network` - Endpoint positions for interpolation.
/// - `cfg` - Provides the pulse speed and the ring radius.
/// - `surface` - Target of one ring per surviving pulse.
///
/// ### Returns
/// The number of pulses that expired this frame.
pub fn pulse_phase(
    pulses: &mut PulseSet,
    network: &Network,
    cfg: &Config,
    surface: &mut impl Surface,
) -> usize {
    // Expire before drawing: a pulse is never drawn in the frame it ends.
    let expired = pulses.advance(cfg.pulse_speed);

    let stroke = style::pulse_stroke();
    let radius = cfg.pulse_radius();
    for pulse in pulses.iter() {
        surface.stroke_circle(pulse.position(network), radius, stroke);
    }
    expired
}

/// With probability `cfg.pulse_spawn_probability`, tries to spawn one pulse
/// from a random point.
///
/// The source is drawn uniformly from all points, not only connected ones,
/// so isolated points simply waste the roll.
///
/// ### Parameters
/// - `pulses` - Receives the new pulse, if any.
/// - `network` - Source of candidate start points and their connections.
/// - `cfg` - Provides the spawn probability.
/// - `rng` - Random source for the roll, the source and the destination.
///
/// ### Returns
/// The new pulse, or `None` if the roll failed or the chosen point has no
/// connections.
pub fn spawn_phase(
    pulses: &mut PulseSet,
    network: &Network,
    cfg: &Config,
    rng: &mut impl Rng,
) -> Option<Pulse> {
    if !rng.random_bool(cfg.pulse_spawn_probability) {
        return None;
    }
    pulses.spawn_random(network, rng)
}
