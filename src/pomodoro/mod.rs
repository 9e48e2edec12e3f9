//! Tick-driven pomodoro timer.
//!
//! [`Pomodoro`] is a pure state machine: one [`tick`](Pomodoro::tick) call
//! advances the countdown by one second. The caller owns the clock, so the
//! machine works the same under an interactive countdown loop and under
//! catch-up ticking between prompts.

use std::fmt;
use std::time::Duration;

/// Phase of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    ShortBreak,
    LongBreak,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::ShortBreak => "shortbreak",
            Phase::LongBreak => "longbreak",
        };
        f.write_str(s)
    }
}

/// Timer durations and cadence.
#[derive(Debug, Clone)]
pub struct PomodoroConfig {
    pub work: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
    /// A long break replaces the short one after every Nth work session.
    pub sessions_before_long_break: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            work: Duration::from_secs(25 * 60),
            short_break: Duration::from_secs(5 * 60),
            long_break: Duration::from_secs(15 * 60),
            sessions_before_long_break: 4,
        }
    }
}

/// Point-in-time view of the timer for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: Phase,
    pub remaining_secs: u64,
    pub session: u32,
}

/// A phase change produced by a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
}

impl Transition {
    /// Whether this transition completes a work session.
    pub fn completed_work_session(&self) -> bool {
        self.from == Phase::Running
            && matches!(self.to, Phase::ShortBreak | Phase::LongBreak)
    }
}

/// The pomodoro state machine.
#[derive(Debug)]
pub struct Pomodoro {
    config: PomodoroConfig,
    phase: Phase,
    remaining: u64,
    session: u32,
}

impl Pomodoro {
    /// Create an idle timer.
    pub fn new(config: PomodoroConfig) -> Self {
        let remaining = config.work.as_secs();
        Self {
            config,
            phase: Phase::Idle,
            remaining,
            session: 1,
        }
    }

    /// Begin a work session, or resume from pause with remaining time intact.
    ///
    /// No-op while already running.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Running => {}
            Phase::Paused => self.phase = Phase::Running,
            _ => {
                self.phase = Phase::Running;
                self.remaining = self.config.work.as_secs();
            }
        }
    }

    /// Freeze the countdown. Only a running timer can pause.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Reset to idle: countdown cleared, session counter back to one.
    pub fn stop(&mut self) {
        self.phase = Phase::Idle;
        self.remaining = 0;
        self.session = 1;
    }

    /// Advance one second.
    ///
    /// Returns the phase change when the countdown expired on this tick.
    /// Idle and paused timers do not move.
    pub fn tick(&mut self) -> Option<Transition> {
        match self.phase {
            Phase::Idle | Phase::Paused => None,
            Phase::Running => {
                if self.remaining > 0 {
                    self.remaining -= 1;
                    return None;
                }
                let to = if self.session % self.config.sessions_before_long_break == 0 {
                    Phase::LongBreak
                } else {
                    Phase::ShortBreak
                };
                self.remaining = match to {
                    Phase::LongBreak => self.config.long_break.as_secs(),
                    _ => self.config.short_break.as_secs(),
                };
                self.session += 1;
                self.phase = to;
                Some(Transition {
                    from: Phase::Running,
                    to,
                })
            }
            Phase::ShortBreak | Phase::LongBreak => {
                if self.remaining > 0 {
                    self.remaining -= 1;
                    return None;
                }
                let from = self.phase;
                self.phase = Phase::Running;
                self.remaining = self.config.work.as_secs();
                Some(Transition {
                    from,
                    to: Phase::Running,
                })
            }
        }
    }

    /// Current view of the timer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            remaining_secs: self.remaining,
            session: self.session,
        }
    }

    /// The configured durations.
    pub fn config(&self) -> &PomodoroConfig {
        &self.config
    }
}

impl Default for Pomodoro {
    fn default() -> Self {
        Self::new(PomodoroConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config() -> PomodoroConfig {
        PomodoroConfig {
            work: Duration::from_secs(3),
            short_break: Duration::from_secs(2),
            long_break: Duration::from_secs(4),
            sessions_before_long_break: 2,
        }
    }

    /// Run ticks until the next transition, with a safety bound.
    fn tick_until_transition(timer: &mut Pomodoro) -> Transition {
        for _ in 0..1000 {
            if let Some(t) = timer.tick() {
                return t;
            }
        }
        panic!("no transition within bound");
    }

    #[test]
    fn new_timer_is_idle() {
        let timer = Pomodoro::default();
        let snap = timer.snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!(snap.session, 1);
    }

    #[test]
    fn idle_timer_does_not_move() {
        let mut timer = Pomodoro::new(short_config());
        assert!(timer.tick().is_none());
        assert_eq!(timer.snapshot().phase, Phase::Idle);
    }

    #[test]
    fn start_begins_work_countdown() {
        let mut timer = Pomodoro::new(short_config());
        timer.start();

        assert_eq!(timer.snapshot().phase, Phase::Running);
        assert_eq!(timer.snapshot().remaining_secs, 3);

        timer.tick();
        assert_eq!(timer.snapshot().remaining_secs, 2);
    }

    #[test]
    fn work_expiry_moves_to_short_break() {
        let mut timer = Pomodoro::new(short_config());
        timer.start();

        let transition = tick_until_transition(&mut timer);

        assert_eq!(transition.from, Phase::Running);
        assert_eq!(transition.to, Phase::ShortBreak);
        assert!(transition.completed_work_session());
        assert_eq!(timer.snapshot().remaining_secs, 2);
    }

    #[test]
    fn long_break_replaces_short_on_session_boundary() {
        let mut timer = Pomodoro::new(short_config());
        timer.start();

        // Session 1 ends in a short break, session 2 in a long one.
        assert_eq!(tick_until_transition(&mut timer).to, Phase::ShortBreak);
        assert_eq!(tick_until_transition(&mut timer).to, Phase::Running);
        assert_eq!(tick_until_transition(&mut timer).to, Phase::LongBreak);
    }

    #[test]
    fn break_expiry_returns_to_work() {
        let mut timer = Pomodoro::new(short_config());
        timer.start();
        tick_until_transition(&mut timer);

        let transition = tick_until_transition(&mut timer);

        assert_eq!(transition.to, Phase::Running);
        assert!(!transition.completed_work_session());
        assert_eq!(timer.snapshot().remaining_secs, 3);
    }

    #[test]
    fn pause_freezes_countdown() {
        let mut timer = Pomodoro::new(short_config());
        timer.start();
        timer.tick();
        let frozen = timer.snapshot().remaining_secs;

        timer.pause();
        assert!(timer.tick().is_none());
        assert_eq!(timer.snapshot().remaining_secs, frozen);
    }

    #[test]
    fn start_resumes_from_pause_with_remaining_intact() {
        let mut timer = Pomodoro::new(short_config());
        timer.start();
        timer.tick();
        timer.pause();
        let frozen = timer.snapshot().remaining_secs;

        timer.start();

        assert_eq!(timer.snapshot().phase, Phase::Running);
        assert_eq!(timer.snapshot().remaining_secs, frozen);
    }

    #[test]
    fn start_while_running_is_noop() {
        let mut timer = Pomodoro::new(short_config());
        timer.start();
        timer.tick();
        let remaining = timer.snapshot().remaining_secs;

        timer.start();
        assert_eq!(timer.snapshot().remaining_secs, remaining);
    }

    #[test]
    fn pause_outside_running_is_noop() {
        let mut timer = Pomodoro::new(short_config());
        timer.pause();
        assert_eq!(timer.snapshot().phase, Phase::Idle);
    }

    #[test]
    fn stop_resets_everything() {
        let mut timer = Pomodoro::new(short_config());
        timer.start();
        tick_until_transition(&mut timer);

        timer.stop();

        let snap = timer.snapshot();
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!(snap.remaining_secs, 0);
        assert_eq!(snap.session, 1);
    }

    #[test]
    fn phase_displays_lowercase() {
        assert_eq!(Phase::ShortBreak.to_string(), "shortbreak");
        assert_eq!(Phase::Idle.to_string(), "idle");
    }
}
