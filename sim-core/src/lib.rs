//! Core of the animated "neural network" backdrop.
//!
//! Main components:
//! - [`point`]: drifting points that bounce off the viewport edges.
//! - [`network`]: the fixed point collection and its random connections.
//! - [`pulse`]: light pulses traveling along connections.
//! - [`simulation`]: owns all state and renders frames.
//! - [`driver`]: frame loop with resize forwarding and cancellation.
//! - [`surface`]: the drawing boundary implemented by hosts.
//! - [`gradient`] and [`style`]: background gradient and draw styles.
//! - [`config`], [`error`], [`types`]: shared configuration, errors and ids.
//! - [`phases`]: the individual steps of a frame.

pub mod config;
pub mod driver;
pub mod error;
pub mod gradient;
pub mod network;
pub mod phases;
pub mod point;
pub mod pulse;
pub mod simulation;
pub mod style;
pub mod surface;
pub mod types;
