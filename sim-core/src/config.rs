use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Startup parameters of the effect.
///
/// The defaults reproduce the classic look: 100 points, sparse random
/// connections and roughly one new pulse every ten frames.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of points, fixed for the lifetime of a simulation.
    pub point_count: usize,
    /// Probability that a given pair of points is connected.
    pub connection_probability: f64,
    /// Radius of a drawn point. Pulse rings are drawn at 1.5x this.
    pub point_radius: f32,
    /// Per-frame drift speed scale. Each velocity component starts in
    /// `[-point_speed / 2, point_speed / 2)`.
    pub point_speed: f32,
    /// Progress added to every live pulse per frame.
    pub pulse_speed: f64,
    /// Probability of attempting a new pulse each frame.
    pub pulse_spawn_probability: f64,
    /// Seed for the random generator. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Clamp points into the new viewport immediately on resize instead of
    /// waiting for their next move.
    pub clamp_on_resize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            point_count: 100,
            connection_probability: 0.03,
            point_radius: 2.0,
            point_speed: 0.2,
            pulse_speed: 0.005,
            pulse_spawn_probability: 0.1,
            seed: None,
            clamp_on_resize: false,
        }
    }
}

impl Config {
    /// Checks that every probability lies in `[0, 1]`, that the radius and
    /// drift speed are finite and non-negative, and that `pulse_speed` is
    /// finite and strictly positive.
    ///
    /// ### Returns
    /// - `Ok(())` if the configuration is usable.
    /// - `Err(ConfigError)` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("connection_probability", self.connection_probability)?;
        check_probability("pulse_spawn_probability", self.pulse_spawn_probability)?;
        check_non_negative("point_radius", self.point_radius as f64)?;
        check_non_negative("point_speed", self.point_speed as f64)?;
        // A zero speed would keep every pulse alive forever.
        check_positive("pulse_speed", self.pulse_speed)?;
        Ok(())
    }

    /// Radius of the ring drawn for a traveling pulse.
    #[inline]
    pub fn pulse_radius(&self) -> f32 {
        self.point_radius * 1.5
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
