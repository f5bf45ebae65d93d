//! Step Traces
//!
//! Engines never sleep, render or call back into a UI. Instead, every
//! operation can report what it is doing, one [`Step`] at a time, through a
//! [`StepSink`]. A visualizer records a [`Trace`] and replays it at whatever
//! pace it likes; callers that only want the result pass [`NoTrace`].
//!
//! # Restartability
//!
//! Sinks are passed per call and engines keep no reference to them, so
//! re-running an operation on the same input produces the same trace again.
//!
//! # Export
//!
//! A trace serializes as a flat array of steps tagged by `kind`, either as
//! JSON or as MessagePack with named fields.

mod step;

pub use step::Step;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Receiver for the steps an engine reports.
pub trait StepSink {
    /// Record one step.
    fn emit(&mut self, step: Step);
}

/// A sink that drops every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl StepSink for NoTrace {
    #[inline]
    fn emit(&mut self, _step: Step) {}
}

/// A sink that keeps every step in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps recorded so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Take ownership of the recorded steps.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Count the steps matching a predicate.
    pub fn count(&self, pred: impl Fn(&Step) -> bool) -> usize {
        self.steps.iter().filter(|s| pred(s)).count()
    }

    /// Serialize as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a trace previously written by [`Trace::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as MessagePack, keeping field names.
    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec_named(self)?)
    }
}

impl StepSink for Trace {
    fn emit(&mut self, step: Step) {
        self.steps.push(step);
    }
}

impl<S: StepSink + ?Sized> StepSink for &mut S {
    fn emit(&mut self, step: Step) {
        (**self).emit(step);
    }
}
