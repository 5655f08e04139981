//! Common utilities

use std::time::{Duration, Instant};

/// Human-readable elapsed time: `850µs`, `12.345ms`, `1.200s`
pub fn format_duration(elapsed: Duration) -> String {
    let micros = elapsed.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.3}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.3}s", elapsed.as_secs_f64())
    }
}

/// Run `f` and return its result with the time it took
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(Duration::from_micros(850)), "850µs");
        assert_eq!(format_duration(Duration::from_micros(12_345)), "12.345ms");
        assert_eq!(format_duration(Duration::from_millis(1_200)), "1.200s");
        assert_eq!(format_duration(Duration::ZERO), "0µs");
    }

    #[test]
    fn test_timed_returns_value() {
        let (value, elapsed) = timed(|| 40 + 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }
}
