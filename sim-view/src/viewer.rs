//! Full-window host for the network backdrop, built with eframe/egui.
//!
//! [`Viewer`] owns the [`FrameLoop`] and adapts eframe's callbacks to it:
//! the central panel size stands in for the viewport, `update` is the
//! per-refresh tick and `request_repaint` schedules the next one.

use crate::surface::PainterSurface;
use eframe::App;
use sim_core::driver::{FrameLoop, LoopControl};
use tracing::{info, warn};

pub struct Viewer {
    frame_loop: FrameLoop,
    /// Drawable size seen on the previous frame.
    last_size: Option<egui::Vec2>,
    /// Set while the host keeps reporting an unusable size, so it is logged once.
    size_rejected: bool,
}

impl Viewer {
    pub fn new(frame_loop: FrameLoop) -> Self {
        Self {
            frame_loop,
            last_size: None,
            size_rejected: false,
        }
    }

    /// Forwards a change of the drawable size to the simulation.
    ///
    /// ### Returns
    /// `true` if `size` differs from the last size seen and was applied.
    fn sync_viewport(&mut self, size: egui::Vec2) -> bool {
        if self.last_size == Some(size) {
            return false;
        }

        match self.frame_loop.on_resize(size.x, size.y) {
            Ok(()) => {
                self.last_size = Some(size);
                self.size_rejected = false;
                true
            }
            Err(err) => {
                // A NaN size never matches `last_size`; warn on the first rejection only.
                if !self.size_rejected {
                    warn!(%err, "ignoring viewport size");
                    self.size_rejected = true;
                }
                false
            }
        }
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.frame_loop.is_running() && ctx.input(|i| i.viewport().close_requested()) {
            info!("close requested");
            self.frame_loop.stop();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                self.sync_viewport(rect.size());

                let painter = ui.painter_at(rect);
                let mut surface = PainterSurface::new(&painter, rect.min);
                if self.frame_loop.tick(&mut surface) == LoopControl::Continue {
                    ctx.request_repaint();
                }
            });
    }
}
