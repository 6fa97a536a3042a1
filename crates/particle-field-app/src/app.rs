//! eframe application: hosts the frame loop inside a central panel.

use eframe::egui;
use tracing::{error, info};

use particle_field_core::types::Viewport;
use particle_field_sim::FieldEngine;

use crate::frame_loop::{FrameLoop, FrameScheduler, SystemClock};
use crate::input::{PointerSample, PointerTracker};
use crate::render::{to_color32, PainterSurface};
use crate::settings::Settings;

impl FrameScheduler for egui::Context {
    fn request_frame(&mut self) {
        self.request_repaint();
    }
}

pub struct FieldApp {
    settings: Settings,
    frame_loop: Option<FrameLoop<SystemClock>>,
    tracker: PointerTracker,
    failure: Option<String>,
}

impl FieldApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            frame_loop: None,
            tracker: PointerTracker::default(),
            failure: None,
        }
    }

    /// Build the engine once, sized to the panel as first measured.
    fn start(&mut self, rect: egui::Rect) {
        let viewport = match Viewport::new(rect.width() as f64, rect.height() as f64) {
            Ok(viewport) => viewport,
            // Nothing to measure yet (e.g. minimized); try again next frame.
            Err(_) => return,
        };

        match FieldEngine::new(self.settings.sim.clone(), viewport) {
            Ok(engine) => {
                info!(width = viewport.width, height = viewport.height, "viewport measured");
                self.frame_loop = Some(FrameLoop::new(engine, SystemClock::default()));
            }
            Err(e) => {
                error!(error = %e, "failed to start particle field");
                self.failure = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for FieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let background = self.settings.window.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(to_color32(background)))
            .show(ctx, |ui| {
                if let Some(failure) = &self.failure {
                    ui.colored_label(egui::Color32::LIGHT_RED, failure);
                    return;
                }

                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;

                if self.frame_loop.is_none() {
                    self.start(rect);
                }
                let Some(frame_loop) = self.frame_loop.as_mut() else {
                    ctx.request_repaint();
                    return;
                };

                let sample = PointerSample {
                    position: response
                        .hover_pos()
                        .map(|p| ((p.x - rect.left()) as f64, (p.y - rect.top()) as f64)),
                    primary_down: response.hovered() && ui.input(|i| i.pointer.primary_down()),
                };
                frame_loop.queue_inputs(self.tracker.update(sample));

                let mut surface = PainterSurface::new(&painter, rect.min, background);
                let mut scheduler = ctx.clone();
                frame_loop.on_frame(&mut scheduler, &mut surface);
            });
    }
}
