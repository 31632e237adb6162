use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result, Vec2};

/// Axis-aligned play-field rectangle. Dynamic bodies expire once they are
/// more than their own radius outside of it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True when a circle at `pos` with `radius` is past any edge by more than `radius`.
    pub fn is_outside(&self, pos: Vec2, radius: f64) -> bool {
        pos.x < self.min.x - radius
            || pos.x > self.max.x + radius
            || pos.y < self.min.y - radius
            || pos.y > self.max.y + radius
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0))
    }
}

/// Candidate interval scanned by the aim solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleRange {
    /// `[0, π)`: sample `i` is `i * π / samples`
    #[default]
    HalfOpen,
    /// `[0, π]`: sample `i` is `i * π / (samples - 1)`
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimConfig {
    pub samples: u32,
    pub range: AngleRange,
    /// Angle handed back when no candidate has a forward-time intercept
    pub fallback_angle: f64,
}

impl Default for AimConfig {
    fn default() -> Self {
        Self {
            samples: 980,
            range: AngleRange::HalfOpen,
            fallback_angle: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub time_step: f64,
    /// Simulated seconds per preview run
    pub horizon: f64,
    /// End the run early once the shadow body leaves the play field.
    /// Off by default: the run lasts the full horizon.
    pub stop_at_bounds: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            horizon: 50.0,
            stop_at_bounds: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Arc length between consecutive markers
    pub spacing: f64,
    pub count: u32,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self { spacing: 25.0, count: 20 }
    }
}

/// How the frame clock's delta is turned into a simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimeStep {
    /// Ignore the frame delta and always advance by `dt`.
    Fixed { dt: f64 },
    /// Use the frame delta, clamped to `[0, max_dt]`.
    Variable { max_dt: f64 },
}

impl TimeStep {
    /// Step length to integrate for a frame that took `frame_dt` seconds.
    /// Non-finite or negative deltas resolve to a zero step.
    pub fn resolve(&self, frame_dt: f64) -> f64 {
        match *self {
            TimeStep::Fixed { dt } => dt,
            TimeStep::Variable { max_dt } => {
                if frame_dt.is_finite() {
                    frame_dt.clamp(0.0, max_dt)
                } else {
                    0.0
                }
            }
        }
    }
}

impl Default for TimeStep {
    fn default() -> Self {
        TimeStep::Fixed { dt: 1.0 / 60.0 }
    }
}

/// Every tunable constant of the engine, fixed at session start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Downward acceleration (+y)
    pub gravity: f64,
    pub launch_speed: f64,
    pub launcher_position: Vec2,
    pub orbit_radius: f64,
    pub peg_radius: f64,
    pub projectile_radius: f64,
    /// Seconds a peg stays solid after its first hit
    pub decay_duration: f64,
    pub bounds: Bounds,
    /// Fraction of the reflected normal speed removed on contact
    pub damping: f64,
    pub aim: AimConfig,
    pub path: PathConfig,
    pub markers: MarkerConfig,
    pub time_step: TimeStep,
}

/// Projectiles are this fraction of a peg's radius.
pub const PROJECTILE_TO_PEG_RADIUS: f64 = 0.65;

impl EngineConfig {
    /// Fixed 1/60 s step regardless of frame timing.
    pub fn fixed_step() -> Self {
        let peg_radius = 10.0;
        Self {
            gravity: 220.0,
            launch_speed: 200.0,
            launcher_position: Vec2::new(400.0, 0.0),
            orbit_radius: 160.0,
            peg_radius,
            projectile_radius: peg_radius * PROJECTILE_TO_PEG_RADIUS,
            decay_duration: 1.5,
            bounds: Bounds::default(),
            damping: 0.3,
            aim: AimConfig::default(),
            path: PathConfig::default(),
            markers: MarkerConfig::default(),
            time_step: TimeStep::default(),
        }
    }

    /// Frame delta driven, clamped at 1/5 s so a backgrounded tab does not
    /// produce one huge jump.
    pub fn variable_step() -> Self {
        Self {
            time_step: TimeStep::Variable { max_dt: 0.2 },
            ..Self::fixed_step()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(gravity = config.gravity, launch_speed = config.launch_speed, "config loaded");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| EngineError::Serialization(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f64) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(EngineError::Config(format!("{name} must be a positive number, got {value}")))
            }
        }

        positive("launch_speed", self.launch_speed)?;
        positive("peg_radius", self.peg_radius)?;
        positive("projectile_radius", self.projectile_radius)?;
        positive("decay_duration", self.decay_duration)?;
        positive("path.time_step", self.path.time_step)?;
        positive("markers.spacing", self.markers.spacing)?;

        if !self.gravity.is_finite() {
            return Err(EngineError::Config("gravity must be finite".into()));
        }
        if !(self.orbit_radius.is_finite() && self.orbit_radius >= 0.0) {
            return Err(EngineError::Config("orbit_radius must be zero or positive".into()));
        }
        if !self.launcher_position.is_finite() {
            return Err(EngineError::Config("launcher_position must be finite".into()));
        }
        if !(self.damping.is_finite() && (0.0..=1.0).contains(&self.damping)) {
            return Err(EngineError::Config(format!("damping must lie in [0, 1], got {}", self.damping)));
        }
        if !(self.bounds.width() > 0.0 && self.bounds.height() > 0.0) {
            return Err(EngineError::Config("bounds must have a positive area".into()));
        }
        if !(self.path.horizon.is_finite() && self.path.horizon >= 0.0) {
            return Err(EngineError::Config("path.horizon must be zero or positive".into()));
        }
        match self.aim.range {
            AngleRange::HalfOpen if self.aim.samples == 0 => {
                return Err(EngineError::Config("aim.samples must be at least 1".into()));
            }
            AngleRange::Closed if self.aim.samples < 2 => {
                return Err(EngineError::Config("aim.samples must be at least 2 for a closed range".into()));
            }
            _ => {}
        }
        if !(self.aim.fallback_angle.is_finite() && (0.0..=PI).contains(&self.aim.fallback_angle)) {
            return Err(EngineError::Config("aim.fallback_angle must lie in [0, π]".into()));
        }
        match self.time_step {
            TimeStep::Fixed { dt } => positive("time_step.dt", dt)?,
            TimeStep::Variable { max_dt } => positive("time_step.max_dt", max_dt)?,
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::fixed_step()
    }
}
