//! Frame loop — runs one update/draw pass per host refresh and reschedules itself.
//!
//! The host decides when a frame happens (a display refresh in the window,
//! an explicit call in tests). `FrameLoop` never sleeps and has no stop
//! condition: every pass ends by requesting the next one.

use std::time::{Duration, Instant};

use tracing::info;

use particle_field_core::commands::PointerCommand;
use particle_field_core::state::FrameSnapshot;
use particle_field_sim::FieldEngine;

use crate::render::{self, Surface};

/// How often the frame rate is logged.
pub const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Monotonic time source.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Something that can be asked for another frame.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Wall clock measured from construction.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Frame counter for periodic frame-rate reports.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    frames: u64,
    last_report: Duration,
    last_fps: Option<f64>,
}

impl FrameStats {
    pub fn new(now: Duration) -> Self {
        Self {
            frames: 0,
            last_report: now,
            last_fps: None,
        }
    }

    /// Count one frame. Returns the frame rate once per report interval.
    pub fn record(&mut self, now: Duration) -> Option<f64> {
        self.frames += 1;
        let elapsed = now.saturating_sub(self.last_report);
        if elapsed < REPORT_INTERVAL {
            return None;
        }

        let fps = self.frames as f64 / elapsed.as_secs_f64();
        self.frames = 0;
        self.last_report = now;
        self.last_fps = Some(fps);
        Some(fps)
    }

    pub fn last_fps(&self) -> Option<f64> {
        self.last_fps
    }
}

/// Owns the engine and drives it one frame at a time.
pub struct FrameLoop<C: Clock> {
    engine: FieldEngine,
    clock: C,
    stats: FrameStats,
    last_snapshot: Option<FrameSnapshot>,
}

impl<C: Clock> FrameLoop<C> {
    pub fn new(engine: FieldEngine, clock: C) -> Self {
        let stats = FrameStats::new(clock.now());
        Self {
            engine,
            clock,
            stats,
            last_snapshot: None,
        }
    }

    /// Forward pointer commands to the engine; they apply on the next frame.
    pub fn queue_inputs(&mut self, commands: impl IntoIterator<Item = PointerCommand>) {
        self.engine.queue_inputs(commands);
    }

    /// One update + draw pass, then request the next frame.
    pub fn on_frame<S, R>(&mut self, scheduler: &mut S, surface: &mut R) -> &FrameSnapshot
    where
        S: FrameScheduler + ?Sized,
        R: Surface + ?Sized,
    {
        let snapshot = self.step(surface);
        scheduler.request_frame();
        self.last_snapshot.insert(snapshot)
    }

    /// Run `frames` passes back to back without a scheduler.
    pub fn run_frames<R: Surface + ?Sized>(
        &mut self,
        frames: u64,
        surface: &mut R,
    ) -> Option<&FrameSnapshot> {
        for _ in 0..frames {
            let snapshot = self.step(surface);
            self.last_snapshot = Some(snapshot);
        }
        self.last_snapshot.as_ref()
    }

    fn step<R: Surface + ?Sized>(&mut self, surface: &mut R) -> FrameSnapshot {
        let snapshot = self.engine.tick();
        render::draw_frame(&snapshot, surface);

        if let Some(fps) = self.stats.record(self.clock.now()) {
            info!(
                fps = format_args!("{:.2}", fps),
                frame = snapshot.time.frame,
                glowing = snapshot.glowing_count(),
                "frame rate"
            );
        }
        snapshot
    }

    pub fn engine(&self) -> &FieldEngine {
        &self.engine
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}
