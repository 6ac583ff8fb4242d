//! Test doubles for the domain ports

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::{
    Clock, CommandRunner, Invocation, LifecycleEvent, LifecycleEventSink, ProcessError,
};

/// Clock whose time only moves when something sleeps
pub struct FakeClock {
    origin: Instant,
    offset: Cell<Duration>,
    sleeps: Cell<u32>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Cell::new(Duration::ZERO),
            sleeps: Cell::new(0),
        }
    }

    pub fn sleeps(&self) -> u32 {
        self.sleeps.get()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }

    fn sleep(&self, duration: Duration) {
        self.offset.set(self.offset.get() + duration);
        self.sleeps.set(self.sleeps.get() + 1);
    }
}

/// Records every invocation and fails the ones matching a scripted prefix
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<Invocation>>,
    missing_tools: Vec<String>,
    failures: Vec<(String, Vec<String>)>,
    captures: RefCell<VecDeque<Result<String, ()>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_tool(mut self, tool: &str) -> Self {
        self.missing_tools.push(tool.to_string());
        self
    }

    /// Make any run of `program` whose args start with `prefix` exit 1
    pub fn failing(mut self, program: &str, prefix: &[&str]) -> Self {
        self.failures.push((
            program.to_string(),
            prefix.iter().map(|s| s.to_string()).collect(),
        ));
        self
    }

    /// Queue results for successive `capture` calls; `Err(())` is a failed
    /// process. Once drained, captures return empty output.
    pub fn with_captures(self, results: Vec<Result<&str, ()>>) -> Self {
        *self.captures.borrow_mut() = results
            .into_iter()
            .map(|r| r.map(str::to_string))
            .collect();
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, program: &str, prefix: &[&str]) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.program == program && c.has_args(prefix))
            .count()
    }

    fn should_fail(&self, invocation: &Invocation) -> bool {
        self.failures.iter().any(|(program, prefix)| {
            let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();
            invocation.program == *program && invocation.has_args(&prefix)
        })
    }
}

impl CommandRunner for RecordingRunner {
    fn is_available(&self, tool: &str) -> bool {
        !self.missing_tools.iter().any(|t| t == tool)
    }

    fn run(&self, invocation: &Invocation) -> Result<(), ProcessError> {
        self.calls.borrow_mut().push(invocation.clone());
        if self.should_fail(invocation) {
            return Err(ProcessError::Exit {
                program: invocation.program.clone(),
                code: Some(1),
            });
        }
        Ok(())
    }

    fn capture(&self, invocation: &Invocation) -> Result<String, ProcessError> {
        self.calls.borrow_mut().push(invocation.clone());
        match self.captures.borrow_mut().pop_front() {
            Some(Ok(output)) => Ok(output),
            Some(Err(())) => Err(ProcessError::Exit {
                program: invocation.program.clone(),
                code: Some(1),
            }),
            None => Ok(String::new()),
        }
    }
}

/// Sink that keeps every event for assertions
#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<LifecycleEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.borrow().clone()
    }
}

impl LifecycleEventSink for RecordingSink {
    fn on_event(&self, event: LifecycleEvent) {
        self.events.borrow_mut().push(event);
    }
}
