//! Simulation systems: the body arena, aim solver and trajectory preview.

pub mod aim;
pub mod trajectory;
pub mod world;

pub use aim::{AimQuery, AimSolution, AimSolver};
pub use trajectory::{resample_by_arc_length, simulate_path, PathQuery, PathSampler};
pub use world::{BodyHandle, StepParams, StepReport, World};
