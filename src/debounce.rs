use std::time::{Duration, Instant};

/// Whether a keystroke at `now` arrived at least `threshold` after the previous one.
///
/// The very first keystroke (`last_pressed == None`) always passes.
pub fn should_handle(now: Instant, last_pressed: Option<Instant>, threshold: Duration) -> bool {
    match last_pressed {
        None => true,
        Some(last) => now.saturating_duration_since(last) >= threshold,
    }
}
