use crate::core::Result;
use crate::domain::config::TimeStep;
use crate::systems::trajectory::{resample_by_arc_length, simulate_path, PathQuery};
use crate::systems::world::StepParams;

use super::perf_timer::{now_ms, timed};
use super::{Session, TickReport};

pub(super) fn tick(session: &mut Session, frame_dt: f64) -> Result<TickReport> {
    let perf_on = session.perf_enabled;
    let tick_start = perf_on.then(now_ms);

    let dt = session.config.time_step.resolve(frame_dt);
    if let TimeStep::Variable { max_dt } = session.config.time_step {
        if frame_dt > max_dt {
            tracing::debug!(frame_dt, max_dt, "frame delta clamped");
        }
    }

    let frame_input = session.input.drain();

    // === AIM ===
    let query = session.launcher.aim_query(frame_input.pointer, session.config.gravity);
    let (aim, aim_ms) = timed(perf_on, || session.aim.solve(&query));
    session.launcher.angle = aim.angle();

    // === FIRE ===
    let radius = session.config.projectile_radius;
    let spawned: Vec<_> = (0..frame_input.fire_count)
        .map(|_| session.launcher.fire(&mut session.world, radius))
        .collect();

    // === WORLD ===
    let params = StepParams {
        dt,
        gravity: session.config.gravity,
        damping: session.config.damping,
        decay_duration: session.config.decay_duration,
    };
    let (step_result, world_ms) = timed(perf_on, || session.world.step(&params));
    let step = step_result?;

    // === PREVIEW ===
    let path_query = PathQuery::from_config(
        &session.config,
        session.launcher.muzzle(),
        session.launcher.launch_velocity(),
    );
    let bounds = session.world.bounds();
    let statics = session.world.statics();
    let (points, preview_ms) = timed(perf_on, || simulate_path(statics, bounds, &path_query));
    let points = points?;
    session.markers = resample_by_arc_length(
        &points,
        session.config.markers.spacing,
        session.config.markers.count as usize,
    );

    session.frame += 1;

    let stats = &mut session.perf_stats;
    stats.contacts = step.contacts;
    stats.expired = step.expired;
    stats.decay_started = step.decay_started;
    stats.pegs_destroyed = step.pegs_destroyed;
    stats.spawned = spawned.len() as u32;
    stats.preview_points = points.len() as u32;
    stats.markers = session.markers.len() as u32;
    stats.bodies = session.world.len() as u32;
    stats.aim_ms = aim_ms;
    stats.world_ms = world_ms;
    stats.preview_ms = preview_ms;
    stats.tick_ms = tick_start.map(|t0| now_ms() - t0).unwrap_or(0.0);

    Ok(TickReport {
        dt,
        aim,
        spawned,
        step,
        preview_points: points.len(),
    })
}
