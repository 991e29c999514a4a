//! Application entry point for the network backdrop window.
//!
//! Sets up logging, builds the simulation (failing fast if that is not
//! possible) and hands it to [`Viewer`] inside an eframe native window.

mod surface;
mod viewer;

use anyhow::Context;
use sim_core::{config::Config, driver::FrameLoop, simulation::Simulation};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use viewer::Viewer;

const INITIAL_SIZE: [f32; 2] = [1280.0, 800.0];

/// Optional fixed seed for reproducible runs.
const SEED_VAR: &str = "NEURAL_BACKDROP_SEED";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config() -> Config {
    let mut cfg = Config::default();
    if let Ok(raw) = std::env::var(SEED_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => cfg.seed = Some(seed),
            Err(err) => warn!(%err, value = %raw, "ignoring {SEED_VAR}"),
        }
    }
    cfg
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cfg = load_config();
    let [width, height] = INITIAL_SIZE;
    let sim = Simulation::new(cfg, width, height).context("failed to start the simulation")?;
    let frame_loop = FrameLoop::new(sim);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(INITIAL_SIZE)
            .with_title("Neural Backdrop"),
        ..Default::default()
    };

    info!(seed = ?cfg.seed, "opening window");
    eframe::run_native(
        "Neural Backdrop",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(frame_loop)))),
    )
    .map_err(|err| anyhow::anyhow!("window failed: {err}"))
}
