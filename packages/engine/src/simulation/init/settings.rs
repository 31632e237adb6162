use super::perf_stats::PerfStats;
use super::Session;

pub(super) fn enable_perf_metrics(session: &mut Session, enabled: bool) {
    session.perf_enabled = enabled;
    if !enabled {
        session.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(session: &Session) -> PerfStats {
    session.perf_stats.clone()
}

pub(super) fn subscribe_input(session: &mut Session) {
    tracing::debug!("input subscribed");
    session.input.subscribe();
}

pub(super) fn unsubscribe_input(session: &mut Session) {
    tracing::debug!("input unsubscribed");
    session.input.unsubscribe();
}
