//! Diagnostics routing.
//!
//! Solvers never print. Invariant violations and trace events are handed to
//! a [`DiagnosticSink`] chosen by the caller, gated by the
//! [`DiagnosticLevel`] in the solver config. The default sink forwards to
//! `tracing`.

use std::cell::RefCell;

use crate::config::DiagnosticLevel;

/// Receiver for solver diagnostics.
pub trait DiagnosticSink {
    /// An internal invariant did not hold at `site`. The solver has already
    /// fallen back to a safe result for the affected branch.
    fn invariant_violated(&self, site: &'static str, detail: &str);

    /// A progress event, only emitted at [`DiagnosticLevel::Trace`].
    fn trace(&self, _event: &str) {}
}

/// Forwards diagnostics to the `tracing` macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn invariant_violated(&self, site: &'static str, detail: &str) {
        tracing::warn!(site, detail, "invariant violated");
    }

    fn trace(&self, event: &str) {
        tracing::debug!("{event}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn invariant_violated(&self, _site: &'static str, _detail: &str) {}
}

static NULL_SINK: NullSink = NullSink;

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    violations: RefCell<Vec<String>>,
    events: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded violations, formatted as `site: detail`.
    pub fn violations(&self) -> Vec<String> {
        self.violations.borrow().clone()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn invariant_violated(&self, site: &'static str, detail: &str) {
        self.violations.borrow_mut().push(format!("{site}: {detail}"));
    }

    fn trace(&self, event: &str) {
        self.events.borrow_mut().push(event.to_string());
    }
}

/// A level paired with a sink, threaded through one solve.
#[derive(Clone, Copy)]
pub struct Diagnostics<'a> {
    level: DiagnosticLevel,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Diagnostics<'a> {
    pub fn new(level: DiagnosticLevel, sink: &'a dyn DiagnosticSink) -> Self {
        Self { level, sink }
    }

    /// Diagnostics that report nothing.
    pub fn silent() -> Diagnostics<'static> {
        Diagnostics {
            level: DiagnosticLevel::Off,
            sink: &NULL_SINK,
        }
    }

    #[inline]
    pub fn level(&self) -> DiagnosticLevel {
        self.level
    }

    /// Report a violation at `site`. `detail` is only evaluated when
    /// asserts are enabled.
    pub fn violation<F>(&self, site: &'static str, detail: F)
    where
        F: FnOnce() -> String,
    {
        if self.level.asserts_enabled() {
            self.sink.invariant_violated(site, &detail());
        }
    }

    /// Report a violation unless `holds`; returns `holds`.
    pub fn check<F>(&self, holds: bool, site: &'static str, detail: F) -> bool
    where
        F: FnOnce() -> String,
    {
        if !holds {
            self.violation(site, detail);
        }
        holds
    }

    pub fn trace<F>(&self, event: F)
    where
        F: FnOnce() -> String,
    {
        if self.level.trace_enabled() {
            self.sink.trace(&event());
        }
    }
}

impl std::fmt::Debug for Diagnostics<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
