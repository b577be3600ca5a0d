use crate::config::{DiagnosticLevel, SolverConfig};
use crate::{RunEngine, RunStrategy};

pub struct RunEngineBuilder<S: RunStrategy> {
    strategy: S,
    diagnostics: Option<DiagnosticLevel>,
}

impl<S: RunStrategy> RunEngineBuilder<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            diagnostics: None,
        }
    }
    pub fn diagnostics(mut self, level: DiagnosticLevel) -> Self {
        self.diagnostics = Some(level);
        self
    }
    pub fn build(self) -> RunEngine<S> {
        match self.diagnostics {
            Some(level) => {
                RunEngine::with_config(self.strategy, SolverConfig::with_diagnostics(level))
            }
            None => RunEngine::new(self.strategy),
        }
    }
}
