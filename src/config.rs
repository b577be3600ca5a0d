//! Solver configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::RunError;

/// How much a solve reports through its [`DiagnosticSink`](crate::DiagnosticSink).
///
/// The level never changes the answer, only what gets reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Report nothing.
    #[default]
    Off,
    /// Report internal invariant violations.
    Assert,
    /// Report violations plus progress events (best-run improvements,
    /// cache statistics).
    Trace,
}

impl DiagnosticLevel {
    #[inline]
    pub fn asserts_enabled(self) -> bool {
        self >= DiagnosticLevel::Assert
    }

    #[inline]
    pub fn trace_enabled(self) -> bool {
        self >= DiagnosticLevel::Trace
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticLevel::Off => "off",
            DiagnosticLevel::Assert => "assert",
            DiagnosticLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosticLevel {
    type Err = RunError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "off" => Ok(Self::Off),
            "assert" => Ok(Self::Assert),
            "trace" => Ok(Self::Trace),
            other => Err(RunError::UnknownDiagnostics(other.to_string())),
        }
    }
}

/// Per-call solver settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub diagnostics: DiagnosticLevel,
}

impl SolverConfig {
    pub fn with_diagnostics(diagnostics: DiagnosticLevel) -> Self {
        Self { diagnostics }
    }
}
