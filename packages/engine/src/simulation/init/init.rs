use crate::core::Result;
use crate::domain::config::EngineConfig;
use crate::systems::aim::AimSolver;
use crate::systems::world::World;

use super::input::InputState;
use super::launcher::Launcher;
use super::perf_stats::PerfStats;
use super::{RenderBuffers, Session};

pub(super) fn create_session(config: EngineConfig) -> Result<Session> {
    config.validate()?;

    let marker_count = config.markers.count as usize;
    Ok(Session {
        world: World::new(config.bounds),
        launcher: Launcher::from_config(&config),
        aim: AimSolver::new(&config.aim),
        input: InputState::default(),
        markers: Vec::with_capacity(marker_count),
        frame: 0,

        render: RenderBuffers {
            bodies: Vec::with_capacity(64 * super::BODY_STRIDE),
            markers: Vec::with_capacity(marker_count * super::MARKER_STRIDE),
        },

        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    })
}
