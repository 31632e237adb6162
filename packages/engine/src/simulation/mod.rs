//! Session - one running game: world, launcher, input and preview
//!
//! A tick runs in a fixed order:
//! - resolve the step length (fixed, or frame delta clamped)
//! - fold pending input into a pointer position and fire count
//! - aim the launcher at the pointer
//! - spawn one projectile per fire event
//! - advance the world
//! - fly a shadow shot through the static bodies and resample it into markers
//!
//! The world is only written by the tick and by the launcher's spawn; the
//! aim solver and the preview read a snapshot of the static bodies.

use crate::core::{Result, Vec2};
use crate::domain::config::EngineConfig;
use crate::systems::aim::{AimSolution, AimSolver};
use crate::systems::world::{BodyHandle, StepReport, World};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "input/input.rs"]
mod input;
#[path = "launcher/launcher.rs"]
mod launcher;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Engine;
pub use input::InputEvent;
pub use launcher::Launcher;
pub use perf_stats::PerfStats;
pub use render_extract::{BodyView, EntityKind, FrameSnapshot, LauncherView, BODY_STRIDE, MARKER_STRIDE};

use input::InputState;

/// Outcome of one `Session::tick`.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Step length actually integrated
    pub dt: f64,
    pub aim: AimSolution,
    pub spawned: Vec<BodyHandle>,
    pub step: StepReport,
    pub preview_points: usize,
}

/// Packed render buffers, rebuilt on demand for JS.
#[derive(Default)]
struct RenderBuffers {
    bodies: Vec<f64>,
    markers: Vec<f64>,
}

pub struct Session {
    config: EngineConfig,
    world: World,
    launcher: Launcher,
    aim: AimSolver,
    input: InputState,
    markers: Vec<Vec2>,
    frame: u64,

    render: RenderBuffers,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Session {
    /// Fails if `config` does not validate.
    pub fn new(config: EngineConfig) -> Result<Self> {
        init::create_session(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        Self::new(EngineConfig::from_json(json)?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    /// Aim markers from the last tick.
    pub fn markers(&self) -> &[Vec2] {
        &self.markers
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn pointer(&self) -> Vec2 {
        self.input.pointer()
    }

    // === INPUT ===

    pub fn subscribe_input(&mut self) {
        settings::subscribe_input(self);
    }

    pub fn unsubscribe_input(&mut self) {
        settings::unsubscribe_input(self);
    }

    pub fn is_input_subscribed(&self) -> bool {
        self.input.is_subscribed()
    }

    /// Queue an input event for the next tick. Returns false (and drops the
    /// event) while input is unsubscribed.
    pub fn push_input(&mut self, event: InputEvent) -> bool {
        self.input.push(event)
    }

    // === LEVEL ===

    /// Place a static peg with the configured radius and an opaque tag.
    pub fn add_peg(&mut self, position: Vec2, tag: u8) -> BodyHandle {
        commands::add_peg(self, position, tag)
    }

    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        commands::remove_body(self, handle)
    }

    /// Drop every body, queued input and marker; the config is kept.
    pub fn reset(&mut self) {
        commands::reset(self)
    }

    // === TICK ===

    /// Advance one frame that took `frame_dt` seconds on the driver's clock.
    pub fn tick(&mut self, frame_dt: f64) -> Result<TickReport> {
        step::tick(self, frame_dt)
    }

    // === OUTPUT ===

    pub fn snapshot(&self) -> FrameSnapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> Result<String> {
        render_extract::snapshot_json(self)
    }

    // === PERF ===

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
