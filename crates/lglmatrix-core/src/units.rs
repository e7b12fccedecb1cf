//! Feed rate conversions
//!
//! Speeds are configured in distance per second but project files store
//! distance per minute.

/// Convert a per-second speed to per-minute.
pub fn per_minute(per_second: f64) -> f64 {
    per_second * 60.0
}
