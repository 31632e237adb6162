//! Aim solver - brute-force search over launch angle
//!
//! For every candidate angle the launch point sits on the launcher's orbit
//! circle. The time at which the projectile reaches the target's x is found
//! from the constant horizontal speed, and the vertical miss at that time
//! is the candidate's error. The smallest error wins; ties keep the first
//! candidate in increasing-angle order.

use std::f64::consts::PI;

use crate::core::Vec2;
use crate::domain::config::{AimConfig, AngleRange};

/// Inputs of one solve. Gravity pulls towards +y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimQuery {
    pub target: Vec2,
    pub launcher: Vec2,
    pub orbit_radius: f64,
    pub launch_speed: f64,
    pub gravity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AimSolution {
    /// Best candidate and its absolute vertical miss
    Hit { angle: f64, error: f64 },
    /// No candidate reaches the target's x going forward in time
    Fallback { angle: f64 },
}

impl AimSolution {
    pub fn angle(&self) -> f64 {
        match *self {
            AimSolution::Hit { angle, .. } | AimSolution::Fallback { angle } => angle,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AimSolution::Fallback { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AimSolver {
    samples: u32,
    range: AngleRange,
    fallback_angle: f64,
}

impl AimSolver {
    pub fn new(config: &AimConfig) -> Self {
        Self {
            samples: config.samples,
            range: config.range,
            fallback_angle: config.fallback_angle,
        }
    }

    /// Candidate angle for sample `i`.
    pub fn candidate(&self, i: u32) -> f64 {
        match self.range {
            AngleRange::HalfOpen => i as f64 * PI / self.samples as f64,
            AngleRange::Closed => i as f64 * PI / (self.samples.saturating_sub(1).max(1)) as f64,
        }
    }

    /// Vertical miss for candidate `angle`, or `None` if the intercept
    /// time is negative or not a number.
    pub fn vertical_error(query: &AimQuery, angle: f64) -> Option<f64> {
        let dir = Vec2::from_angle(angle);
        let start = query.launcher + dir * query.orbit_radius;

        let t = (query.target.x - start.x) / (query.launch_speed * dir.x);
        if !(t >= 0.0) {
            return None;
        }

        let y = start.y + query.launch_speed * dir.y * t + 0.5 * query.gravity * t * t;
        let error = (y - query.target.y).abs();
        if error.is_nan() {
            None
        } else {
            Some(error)
        }
    }

    pub fn solve(&self, query: &AimQuery) -> AimSolution {
        match self.best_candidate(query) {
            Some((index, error)) => AimSolution::Hit {
                angle: self.candidate(index),
                error,
            },
            None => {
                tracing::debug!(
                    target_x = query.target.x,
                    target_y = query.target.y,
                    "no forward intercept, using fallback angle"
                );
                AimSolution::Fallback { angle: self.fallback_angle }
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn best_candidate(&self, query: &AimQuery) -> Option<(u32, f64)> {
        let mut best: Option<(u32, f64)> = None;
        for i in 0..self.samples {
            let Some(error) = Self::vertical_error(query, self.candidate(i)) else {
                continue;
            };
            if best.map_or(true, |(_, min)| error < min) {
                best = Some((i, error));
            }
        }
        best
    }

    /// Same result as the sequential scan: the reduction keeps the lower
    /// index whenever two errors are equal.
    #[cfg(feature = "parallel")]
    fn best_candidate(&self, query: &AimQuery) -> Option<(u32, f64)> {
        use rayon::prelude::*;

        (0..self.samples)
            .into_par_iter()
            .filter_map(|i| Self::vertical_error(query, self.candidate(i)).map(|error| (i, error)))
            .reduce_with(|a, b| {
                if b.1 < a.1 || (b.1 == a.1 && b.0 < a.0) {
                    b
                } else {
                    a
                }
            })
    }
}

impl Default for AimSolver {
    fn default() -> Self {
        Self::new(&AimConfig::default())
    }
}
