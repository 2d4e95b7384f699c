//! Timing for theme loading, enabled via SCOPETHEME_METRICS=1.
//!
//! Reading a theme file and compiling its rules into the scope trie are the
//! only steps slow enough to measure; resolution is served from the memo
//! cache. Timings are emitted as `tracing` events under the
//! `scopetheme::metrics` target.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static METRICS_ENABLED: AtomicBool = AtomicBool::new(false);

/// Read SCOPETHEME_METRICS. Call once at startup.
pub fn init() {
    let enabled = std::env::var("SCOPETHEME_METRICS")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    set_enabled(enabled);
}

/// Turn theme timing on or off.
pub fn set_enabled(enabled: bool) {
    METRICS_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Whether theme timing is on.
#[inline]
pub fn enabled() -> bool {
    METRICS_ENABLED.load(Ordering::Relaxed)
}

/// A timed step of getting a theme ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// [`Theme::load`](crate::theme::Theme::load): file read plus build.
    Load,
    /// [`Theme::from_document`](crate::theme::Theme::from_document): color
    /// validation and trie construction.
    Build,
}

impl Phase {
    /// Name used in the emitted event.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Load => "theme_load",
            Phase::Build => "theme_build",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emits the elapsed time of a [`Phase`] when dropped.
#[must_use = "the phase is timed until the timer is dropped"]
pub struct Timer {
    phase: Phase,
    start: Instant,
}

impl Timer {
    /// `None` when timing is off, so the disabled path costs one atomic load.
    #[inline]
    pub fn start(phase: Phase) -> Option<Self> {
        enabled().then(|| Self {
            phase,
            start: Instant::now(),
        })
    }

    /// The phase being timed.
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        tracing::info!(
            target: "scopetheme::metrics",
            phase = self.phase.as_str(),
            ?elapsed,
            "theme timing"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_follows_enabled_flag() {
        set_enabled(false);
        assert!(Timer::start(Phase::Load).is_none());

        set_enabled(true);
        let timer = Timer::start(Phase::Build);
        assert_eq!(timer.as_ref().map(Timer::phase), Some(Phase::Build));
        drop(timer);
        set_enabled(false);
    }

    #[test]
    fn phase_names() {
        assert_eq!(Phase::Load.to_string(), "theme_load");
        assert_eq!(Phase::Build.as_str(), "theme_build");
    }
}
