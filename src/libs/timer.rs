//! Focus timer.
//!
//! A single state machine covers both the plain countdown (`custom` phase)
//! and the Pomodoro cycle `focus -> short-break -> focus -> ... ->
//! long-break`. [`Timer::tick`] is called once per second while running;
//! [`run`] drives it from a tokio interval.

use super::document::lenient_int;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::debug;

pub const PRESETS: [u32; 3] = [30, 60, 90];

const CUSTOM_RANGE: (u32, u32) = (1, 999);
const FOCUS_RANGE: (u32, u32) = (1, 180);
const SHORT_BREAK_RANGE: (u32, u32) = (1, 60);
const LONG_BREAK_RANGE: (u32, u32) = (1, 120);
const CYCLE_RANGE: (u32, u32) = (1, 12);

fn clamp(value: i64, (min, max): (u32, u32)) -> u32 {
    value.clamp(min as i64, max as i64) as u32
}

/// Persisted timer preferences. Every field is clamped to a sane range.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", from = "StoredPrefs")]
pub struct TimerPrefs {
    pub custom_minutes: u32,
    pub focus_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    /// Every Nth completed focus session is followed by a long break.
    pub cycle_every: u32,
}

impl Default for TimerPrefs {
    fn default() -> Self {
        TimerPrefs {
            custom_minutes: 30,
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            cycle_every: 4,
        }
    }
}

/// On-disk shape of [`TimerPrefs`]. Fractions are rounded down and values
/// that are not numbers fall back to the default of their field.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct StoredPrefs {
    #[serde(deserialize_with = "lenient_int")]
    custom_minutes: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    focus_minutes: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    short_break_minutes: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    long_break_minutes: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    cycle_every: Option<i64>,
}

impl From<StoredPrefs> for TimerPrefs {
    fn from(stored: StoredPrefs) -> Self {
        let default = TimerPrefs::default();
        let pick = |value: Option<i64>, fallback: u32, range| clamp(value.unwrap_or(fallback as i64), range);
        TimerPrefs {
            custom_minutes: pick(stored.custom_minutes, default.custom_minutes, CUSTOM_RANGE),
            focus_minutes: pick(stored.focus_minutes, default.focus_minutes, FOCUS_RANGE),
            short_break_minutes: pick(stored.short_break_minutes, default.short_break_minutes, SHORT_BREAK_RANGE),
            long_break_minutes: pick(stored.long_break_minutes, default.long_break_minutes, LONG_BREAK_RANGE),
            cycle_every: pick(stored.cycle_every, default.cycle_every, CYCLE_RANGE),
        }
    }
}

impl TimerPrefs {
    pub fn clamped(&self) -> Self {
        TimerPrefs {
            custom_minutes: clamp(self.custom_minutes as i64, CUSTOM_RANGE),
            focus_minutes: clamp(self.focus_minutes as i64, FOCUS_RANGE),
            short_break_minutes: clamp(self.short_break_minutes as i64, SHORT_BREAK_RANGE),
            long_break_minutes: clamp(self.long_break_minutes as i64, LONG_BREAK_RANGE),
            cycle_every: clamp(self.cycle_every as i64, CYCLE_RANGE),
        }
    }

    pub fn set_custom_minutes(&mut self, minutes: i64) -> u32 {
        self.custom_minutes = clamp(minutes, CUSTOM_RANGE);
        self.custom_minutes
    }

    pub fn set_focus_minutes(&mut self, minutes: i64) -> u32 {
        self.focus_minutes = clamp(minutes, FOCUS_RANGE);
        self.focus_minutes
    }

    pub fn set_short_break_minutes(&mut self, minutes: i64) -> u32 {
        self.short_break_minutes = clamp(minutes, SHORT_BREAK_RANGE);
        self.short_break_minutes
    }

    pub fn set_long_break_minutes(&mut self, minutes: i64) -> u32 {
        self.long_break_minutes = clamp(minutes, LONG_BREAK_RANGE);
        self.long_break_minutes
    }

    pub fn set_cycle_every(&mut self, cycle: i64) -> u32 {
        self.cycle_every = clamp(cycle, CYCLE_RANGE);
        self.cycle_every
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Custom,
    Focus,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn is_break(&self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Custom => "custom",
            Phase::Focus => "focus",
            Phase::ShortBreak => "short-break",
            Phase::LongBreak => "long-break",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A custom countdown reached zero and stopped.
    Finished,
    /// A Pomodoro phase ended and the next one started.
    PhaseChanged { from: Phase, to: Phase },
}

#[derive(Debug, Clone)]
pub struct Timer {
    prefs: TimerPrefs,
    phase: Phase,
    remaining: u32,
    running: bool,
    completed_focus: u32,
}

impl Timer {
    /// A plain countdown of `prefs.custom_minutes`.
    pub fn custom(prefs: TimerPrefs) -> Self {
        Self::with_phase(prefs, Phase::Custom)
    }

    /// A Pomodoro cycle starting with a focus session.
    pub fn pomodoro(prefs: TimerPrefs) -> Self {
        Self::with_phase(prefs, Phase::Focus)
    }

    fn with_phase(prefs: TimerPrefs, phase: Phase) -> Self {
        let prefs = prefs.clamped();
        let mut timer = Timer {
            prefs,
            phase,
            remaining: 0,
            running: false,
            completed_focus: 0,
        };
        timer.remaining = timer.phase_seconds(phase);
        timer
    }

    pub fn prefs(&self) -> &TimerPrefs {
        &self.prefs
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_pomodoro(&self) -> bool {
        self.phase != Phase::Custom
    }

    pub fn completed_focus(&self) -> u32 {
        self.completed_focus
    }

    pub fn phase_seconds(&self, phase: Phase) -> u32 {
        let minutes = match phase {
            Phase::Custom => self.prefs.custom_minutes,
            Phase::Focus => self.prefs.focus_minutes,
            Phase::ShortBreak => self.prefs.short_break_minutes,
            Phase::LongBreak => self.prefs.long_break_minutes,
        };
        minutes * 60
    }

    /// Starts or resumes the countdown. A countdown at zero cannot start.
    pub fn start(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stops and restores the full duration of the current phase.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.phase_seconds(self.phase);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.remaining = 0;
    }

    /// Switches to a custom countdown of `minutes` (clamped to 1..=999).
    pub fn set_custom(&mut self, minutes: i64) -> u32 {
        let minutes = self.prefs.set_custom_minutes(minutes);
        self.running = false;
        self.phase = Phase::Custom;
        self.completed_focus = 0;
        self.remaining = minutes * 60;
        minutes
    }

    pub fn set_preset(&mut self, minutes: u32) -> u32 {
        self.set_custom(minutes as i64)
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return None;
        }

        let from = self.phase;
        let to = match from {
            Phase::Custom => {
                self.running = false;
                return Some(TimerEvent::Finished);
            }
            Phase::Focus => {
                self.completed_focus += 1;
                if self.completed_focus % self.prefs.cycle_every == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                }
            }
            Phase::ShortBreak | Phase::LongBreak => Phase::Focus,
        };
        self.phase = to;
        self.remaining = self.phase_seconds(to);
        debug!(%from, %to, completed_focus = self.completed_focus, "timer phase changed");
        Some(TimerEvent::PhaseChanged { from, to })
    }

    pub fn status_label(&self) -> &'static str {
        if self.running {
            "RUNNING"
        } else if self.remaining == 0 {
            "DONE"
        } else {
            "READY"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The countdown stopped on its own (or the callback paused it).
    Stopped,
    /// `shutdown` resolved first; the timer is left paused.
    Interrupted,
}

/// Drives `timer` once per second until it stops running or `shutdown`
/// resolves. `on_tick` sees every tick and may pause the timer to end the
/// loop.
pub async fn run<S, F>(timer: &mut Timer, shutdown: S, mut on_tick: F) -> RunOutcome
where
    S: Future<Output = ()>,
    F: FnMut(&mut Timer, Option<TimerEvent>),
{
    if !timer.start() {
        return RunOutcome::Stopped;
    }
    let mut interval = time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;
    tokio::pin!(shutdown);

    while timer.is_running() {
        tokio::select! {
            _ = &mut shutdown => {
                timer.pause();
                return RunOutcome::Interrupted;
            }
            _ = interval.tick() => {
                let event = timer.tick();
                on_tick(timer, event);
            }
        }
    }
    RunOutcome::Stopped
}
