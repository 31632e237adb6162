/// Wall clock in milliseconds: `Date.now()` in the browser, a process-local
/// monotonic clock natively.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Run `f`, timing it only when `enabled`. The second value is 0 when off.
pub(crate) fn timed<R>(enabled: bool, f: impl FnOnce() -> R) -> (R, f64) {
    if !enabled {
        return (f(), 0.0);
    }
    let t0 = now_ms();
    let out = f();
    (out, now_ms() - t0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timing_reports_zero() {
        let (value, ms) = timed(false, || 7);
        assert_eq!(value, 7);
        assert_eq!(ms, 0.0);
    }

    #[test]
    fn enabled_timing_is_non_negative() {
        let (_, ms) = timed(true, || (0..1000u64).sum::<u64>());
        assert!(ms >= 0.0);
        assert!(now_ms() >= 0.0);
    }
}
