//! 4-7-8 breathing-exercise state machine.
//!
//! The timer is a pure transition function over integer ticks of 0.1 s, so a
//! driver (UI loop, test) advances it explicitly and no wall clock is
//! involved. One session is a fixed number of inhale → hold → exhale → rest
//! cycles, except the final cycle skips the rest phase and drops straight
//! back to idle, reporting completion exactly once.

/// Ticks per second of exercise time.
pub const TICKS_PER_SECOND: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Inhale,
    Hold,
    Exhale,
    Rest,
}

/// Phase durations and cycle target, in seconds. The default is the 4-7-8
/// pattern repeated three times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub inhale_secs: u32,
    pub hold_secs: u32,
    pub exhale_secs: u32,
    pub rest_secs: u32,
    pub cycles: u32,
}

impl Default for Pattern {
    fn default() -> Self {
        Self {
            inhale_secs: 4,
            hold_secs: 7,
            exhale_secs: 8,
            rest_secs: 2,
            cycles: 3,
        }
    }
}

impl Pattern {
    fn phase_ticks(&self, phase: Phase) -> u32 {
        let secs = match phase {
            Phase::Inhale => self.inhale_secs,
            Phase::Hold => self.hold_secs,
            Phase::Exhale => self.exhale_secs,
            Phase::Rest => self.rest_secs,
            Phase::Idle => return 0,
        };
        secs * TICKS_PER_SECOND
    }
}

#[derive(Debug, Clone)]
pub struct BreathingTimer {
    pattern: Pattern,
    phase: Phase,
    running: bool,
    /// Ticks spent in the current phase.
    counter: u32,
    /// Completed inhale→…→rest cycles this session.
    cycle: u32,
    /// Ticks elapsed since start, across all phases.
    total: u32,
}

impl BreathingTimer {
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            phase: Phase::Idle,
            running: false,
            counter: 0,
            cycle: 0,
            total: 0,
        }
    }

    /// Begin a session: enter the first inhale with every counter zeroed.
    pub fn start(&mut self) {
        self.phase = Phase::Inhale;
        self.running = true;
        self.counter = 0;
        self.cycle = 0;
        self.total = 0;
    }

    /// Pause or resume without disturbing any counter. A paused timer ignores
    /// ticks; resuming continues from the exact position it stopped at.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Force idle and zero everything.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.running = false;
        self.counter = 0;
        self.cycle = 0;
        self.total = 0;
    }

    /// Advance one 0.1 s tick. Returns `true` on the tick that completes the
    /// session (final exhale finished, state back to idle).
    pub fn tick(&mut self) -> bool {
        if !self.running || self.phase == Phase::Idle {
            return false;
        }

        self.total += 1;
        self.counter += 1;
        if self.counter < self.pattern.phase_ticks(self.phase) {
            return false;
        }

        self.counter = 0;
        match self.phase {
            Phase::Inhale => {
                self.phase = Phase::Hold;
            }
            Phase::Hold => {
                self.phase = Phase::Exhale;
            }
            Phase::Exhale => {
                if self.cycle + 1 >= self.pattern.cycles {
                    // Last cycle skips the rest phase entirely.
                    self.phase = Phase::Idle;
                    self.running = false;
                    self.cycle = 0;
                    return true;
                }
                self.phase = Phase::Rest;
            }
            Phase::Rest => {
                self.phase = Phase::Inhale;
                self.cycle += 1;
            }
            Phase::Idle => unreachable!(),
        }
        false
    }

    /// Fold `ticks` ticks through the machine; reports whether the session
    /// completed along the way.
    pub fn advance(&mut self, ticks: u32) -> bool {
        let mut completed = false;
        for _ in 0..ticks {
            completed |= self.tick();
        }
        completed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed cycles; the display counts from `cycle() + 1`.
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// Progress through the current phase as a 0–100 percentage.
    pub fn progress(&self) -> f32 {
        let ticks = self.pattern.phase_ticks(self.phase);
        if ticks == 0 {
            return 0.0;
        }
        self.counter as f32 / ticks as f32 * 100.0
    }

    /// Seconds left in the current phase.
    pub fn remaining_in_phase_secs(&self) -> f32 {
        let ticks = self.pattern.phase_ticks(self.phase);
        ticks.saturating_sub(self.counter) as f32 / TICKS_PER_SECOND as f32
    }

    /// Seconds elapsed since start, accumulated over every running tick and
    /// reset only by `start` or `reset`.
    pub fn total_secs(&self) -> f32 {
        self.total as f32 / TICKS_PER_SECOND as f32
    }
}

impl Default for BreathingTimer {
    fn default() -> Self {
        Self::new(Pattern::default())
    }
}
