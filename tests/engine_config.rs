use bounded_run::{
    config::DiagnosticLevel,
    diagnostics::RecordingSink,
    strategies::{ShrinkMemo, StrategyKind},
    Diagnostics, RunEngineBuilder, RunStrategy, SolverConfig, Subsequence,
};

#[test]
fn builder_defaults_to_silent() {
    let engine = RunEngineBuilder::new(StrategyKind::PrefixTree.strategy()).build();
    assert_eq!(engine.config(), SolverConfig::default());
}

#[test]
fn builder_sets_diagnostics() {
    let engine = RunEngineBuilder::new(StrategyKind::BruteForce.strategy())
        .diagnostics(DiagnosticLevel::Trace)
        .build();
    assert_eq!(engine.config().diagnostics, DiagnosticLevel::Trace);
}

#[test]
fn trace_level_streams_progress_without_violations() {
    let sink = RecordingSink::new();
    let engine = RunEngineBuilder::new(StrategyKind::PrefixTree.strategy())
        .diagnostics(DiagnosticLevel::Trace)
        .build();
    let best = engine.run_with_sink(&[4, 4, -1, -1, 4], 3, &sink);
    assert_eq!(best, Subsequence::new(1, 3, 2));
    assert!(!sink.events().is_empty());
    assert!(sink.violations().is_empty());
}

#[test]
fn diagnostics_never_change_the_answer() {
    let items = [6, -2, 5, -7, 3, 3, -1, 8];
    let answers: Vec<_> = [
        DiagnosticLevel::Off,
        DiagnosticLevel::Assert,
        DiagnosticLevel::Trace,
    ]
    .into_iter()
    .flat_map(|level| {
        StrategyKind::ALL.into_iter().map(move |kind| {
            let sink = RecordingSink::new();
            RunEngineBuilder::new(kind.strategy())
                .diagnostics(level)
                .build()
                .run_with_sink(&items, 4, &sink)
        })
    })
    .collect();
    assert!(answers.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn shrink_cache_is_returned_for_inspection() {
    let (best, cache) = ShrinkMemo.solve_with_cache(&[8, 1, 8], 1, &Diagnostics::silent());
    assert_eq!(best, Subsequence::new(1, 1, 1));
    assert!(cache.is_dead(0, 0));
    assert!(cache.is_dead(2, 2));
    assert!(cache.solved_count() >= 1);
    assert_eq!(ShrinkMemo.name(), "shrink_memo");
}
