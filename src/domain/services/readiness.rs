//! Readiness polling state machine
//!
//! After `compose up` the dashboard container needs a while before it
//! accepts connections. The poll probes it at a fixed interval until the
//! probe succeeds or the time budget is spent. Time is the only bound: there
//! is no attempt limit, backoff, or jitter.
//!
//! ```text
//! Polling --probe ok--> Ready
//! Polling --probe not ok, sleep--> Polling
//! Polling --elapsed >= timeout--> TimedOut
//! ```

use std::time::{Duration, Instant};

use crate::domain::ports::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    Polling,
    Ready,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    pub timeout: Duration,
    pub interval: Duration,
}

/// Final state of a finished poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessOutcome {
    pub state: ReadinessState,
    pub attempts: u32,
    pub elapsed: Duration,
}

pub struct ReadinessPoll<'c, C: Clock + ?Sized> {
    clock: &'c C,
    policy: ReadinessPolicy,
    started: Instant,
    attempts: u32,
    state: ReadinessState,
}

impl<'c, C: Clock + ?Sized> ReadinessPoll<'c, C> {
    /// Begin polling; the budget starts now
    pub fn start(clock: &'c C, policy: ReadinessPolicy) -> Self {
        Self {
            clock,
            policy,
            started: clock.now(),
            attempts: 0,
            state: ReadinessState::Polling,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started)
    }

    /// Run one iteration of the loop.
    ///
    /// Terminal states are sticky; stepping a finished poll never probes.
    pub fn step(&mut self, probe: &mut dyn FnMut() -> bool) -> ReadinessState {
        if self.state != ReadinessState::Polling {
            return self.state;
        }

        if self.elapsed() >= self.policy.timeout {
            self.state = ReadinessState::TimedOut;
            return self.state;
        }

        self.attempts += 1;
        if probe() {
            self.state = ReadinessState::Ready;
            return self.state;
        }

        self.clock.sleep(self.policy.interval);
        ReadinessState::Polling
    }

    /// Step until a terminal state is reached
    pub fn run(mut self, probe: &mut dyn FnMut() -> bool) -> ReadinessOutcome {
        while self.step(probe) == ReadinessState::Polling {}
        self.outcome()
    }

    pub fn outcome(&self) -> ReadinessOutcome {
        ReadinessOutcome {
            state: self.state,
            attempts: self.attempts,
            elapsed: self.elapsed(),
        }
    }
}
