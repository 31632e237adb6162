//! Trajectory preview
//!
//! A shadow body is flown through a private world holding copies of the
//! static bodies only, so in-flight projectiles are ignored and the live
//! world is never touched. The raw polyline is then resampled at fixed
//! arc-length intervals for the aiming markers.

use crate::core::{Result, Vec2};
use crate::domain::body::Body;
use crate::domain::config::{Bounds, EngineConfig};

use super::world::{StepParams, StepReport, World};

/// Launch state and integration settings of one preview run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathQuery {
    pub start: Vec2,
    pub velocity: Vec2,
    pub radius: f64,
    pub gravity: f64,
    pub time_step: f64,
    /// Simulated seconds; points are recorded while elapsed time is below it
    pub horizon: f64,
    pub damping: f64,
    pub stop_at_bounds: bool,
}

impl PathQuery {
    /// Query for a shot leaving `start` with `velocity`, everything else from `config`.
    pub fn from_config(config: &EngineConfig, start: Vec2, velocity: Vec2) -> Self {
        Self {
            start,
            velocity,
            radius: config.projectile_radius,
            gravity: config.gravity,
            time_step: config.path.time_step,
            horizon: config.path.horizon,
            damping: config.damping,
            stop_at_bounds: config.path.stop_at_bounds,
        }
    }
}

/// One-shot lazy sequence of shadow positions.
///
/// Each item is the position before the step that follows it. The private
/// world and the shadow are dropped as soon as the run ends.
pub struct PathSampler {
    run: Option<ShadowRun>,
    time_step: f64,
    horizon: f64,
    elapsed: f64,
    stop_at_bounds: bool,
}

struct ShadowRun {
    world: World,
    shadow: Body,
    params: StepParams,
}

impl PathSampler {
    /// `statics` should be the static bodies of the live world; non-static
    /// bodies passed here are skipped.
    pub fn new(statics: impl IntoIterator<Item = Body>, bounds: Bounds, query: &PathQuery) -> Self {
        let world = World::with_bodies(bounds, statics.into_iter().filter(Body::is_static));
        let params = StepParams {
            dt: query.time_step,
            gravity: query.gravity,
            damping: query.damping,
            decay_duration: f64::INFINITY,
        };
        Self {
            run: Some(ShadowRun {
                world,
                shadow: Body::shadow(query.start, query.radius, query.velocity),
                params,
            }),
            time_step: query.time_step,
            horizon: query.horizon,
            elapsed: 0.0,
            stop_at_bounds: query.stop_at_bounds,
        }
    }

    /// Seconds simulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    fn finish(&mut self) {
        self.run = None;
    }
}

impl Iterator for PathSampler {
    type Item = Result<Vec2>;

    fn next(&mut self) -> Option<Self::Item> {
        if !(self.elapsed < self.horizon) || !(self.time_step > 0.0) {
            self.finish();
            return None;
        }
        let run = self.run.as_mut()?;

        let point = run.shadow.position;
        run.shadow.velocity.y += run.params.gravity * run.params.dt;

        let mut report = StepReport::default();
        if let Err(err) = run.world.integrate_body(&mut run.shadow, &run.params, &mut report) {
            self.finish();
            return Some(Err(err));
        }
        self.elapsed += self.time_step;

        if self.stop_at_bounds {
            let bounds = run.world.bounds();
            if bounds.is_outside(run.shadow.position, run.shadow.radius()) {
                self.finish();
            }
        }

        Some(Ok(point))
    }
}

/// Collect a full preview run.
pub fn simulate_path(statics: impl IntoIterator<Item = Body>, bounds: Bounds, query: &PathQuery) -> Result<Vec<Vec2>> {
    PathSampler::new(statics, bounds, query).collect()
}

/// Points spaced `spacing` apart along the polyline, measured by arc
/// length from the first point. Marker `i` sits at `i * spacing`; markers
/// past the end of the path are left out.
pub fn resample_by_arc_length(points: &[Vec2], spacing: f64, count: usize) -> Vec<Vec2> {
    let mut markers = Vec::with_capacity(count);
    if points.is_empty() {
        return markers;
    }

    let mut seg = 0usize;
    let mut walked = 0.0;

    for i in 0..count {
        let target = i as f64 * spacing;

        let marker = loop {
            let here = points[seg];
            let Some(&next) = points.get(seg + 1) else {
                break (target <= walked).then_some(here);
            };

            let len = here.distance(next);
            if walked + len >= target {
                let t = if len > 0.0 { (target - walked) / len } else { 0.0 };
                break Some(here.lerp(next, t));
            }
            walked += len;
            seg += 1;
        };

        match marker {
            Some(p) => markers.push(p),
            None => break,
        }
    }

    markers
}

#[cfg(test)]
#[path = "tests/trajectory_tests.rs"]
mod tests;
