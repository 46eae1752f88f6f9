//! Driver tests: passes, failure gate, diagnostics.

use docgen::DocGenError;
use docgen::hir::{DiagnosticCollector, ModuleHandle, Severity, diagnostic_codes};
use docgen::project::{DocGenerator, PassReport, ResultStore, Workspace};

use crate::helpers::fixtures::api_workspace;
use crate::helpers::render_helpers::*;

struct Run {
    diagnostics: DiagnosticCollector,
    results: ResultStore,
}

impl Run {
    fn new() -> Self {
        Self {
            diagnostics: DiagnosticCollector::new(),
            results: ResultStore::new(),
        }
    }

    fn pass(&mut self, generator: &mut DocGenerator<'_>, ws: &Workspace) -> Result<PassReport, DocGenError> {
        generator.run_pass(ws, &mut self.diagnostics, &mut self.results)
    }
}

fn generated(ws: &mut Workspace, name: &str, imports: &[&str], doc: &str) {
    add_documented_module(ws, name, imports, doc);
    ws.mark_generated(name);
}

// =============================================================================
// CLEAN PASSES
// =============================================================================

#[test]
fn test_clean_pass_delivers_every_module() {
    let mut ws = api_workspace();
    generated(&mut ws, "first", &["io.vertx.core.Vertx"], "{@link Vertx}");
    generated(&mut ws, "second", &[], "plain");

    let mut generator = DocGenerator::new(&ws, &ws, &TestLinks, ws.config());
    let mut run = Run::new();
    let report = run.pass(&mut generator, &ws).unwrap();

    assert_eq!(report.rendered, vec!["first", "second"]);
    assert!(report.failed.is_empty());
    assert!(!report.skipped);
    assert_eq!(run.results.get_doc("first"), Some("link:type:io.vertx.core.Vertx[`Vertx`]"));
    assert_eq!(run.results.get_doc("second"), Some("plain"));
    assert!(run.diagnostics.is_empty());
}

#[test]
fn test_clean_runs_keep_rendering() {
    let mut ws = api_workspace();
    generated(&mut ws, "docs", &[], "text");

    let mut generator = DocGenerator::new(&ws, &ws, &TestLinks, ws.config());
    let mut run = Run::new();
    for _ in 0..3 {
        assert_eq!(run.pass(&mut generator, &ws).unwrap().rendered.len(), 1);
    }
    assert!(!generator.context().has_failures());
}

#[test]
fn test_unmarked_modules_are_only_rendered_through_includes() {
    let mut ws = api_workspace();
    generated(&mut ws, "p", &[], "[{@include s}]");
    add_documented_module(&mut ws, "p.s", &[], "s");

    let mut generator = DocGenerator::new(&ws, &ws, &TestLinks, ws.config());
    let mut run = Run::new();
    run.pass(&mut generator, &ws).unwrap();

    assert_eq!(run.results.len(), 1);
    assert_eq!(run.results.get_doc("p"), Some("[s]"));
}

#[test]
fn test_explicit_module_list_as_discovery() {
    let mut ws = api_workspace();
    add_documented_module(&mut ws, "x", &[], "X");
    add_documented_module(&mut ws, "y", &[], "Y");

    let modules = vec![ModuleHandle::new("y"), ModuleHandle::new("x")];
    let mut generator = DocGenerator::new(&ws, &ws, &TestLinks, ws.config());
    let mut diagnostics = DiagnosticCollector::new();
    let mut results = ResultStore::new();
    let report = generator
        .run_pass(&modules, &mut diagnostics, &mut results)
        .unwrap();

    assert_eq!(report.rendered, vec!["y", "x"]);
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_failure_is_isolated_to_its_module() {
    let mut ws = api_workspace();
    generated(&mut ws, "good", &[], "ok");
    generated(&mut ws, "bad", &[], "{@link Missing}");
    generated(&mut ws, "also.good", &[], "fine");

    let mut generator = DocGenerator::new(&ws, &ws, &TestLinks, ws.config());
    let mut run = Run::new();
    let report = run.pass(&mut generator, &ws).unwrap();

    assert_eq!(report.rendered, vec!["good", "also.good"]);
    assert_eq!(report.failed, vec!["bad"]);
    assert_eq!(report.attempted(), 3);
    assert_eq!(run.results.get_doc("bad"), None);
    assert_eq!(run.results.get_doc("also.good"), Some("fine"));

    let context = generator.context();
    assert_eq!(context.failure_count(), 1);
    assert_eq!(context.failure("bad"), Some("Could not resolve Missing"));

    let diagnostics: Vec<_> = run.diagnostics.for_module("bad").collect();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(
        diagnostics[0].code.as_deref(),
        Some(diagnostic_codes::UNRESOLVED_LINK)
    );
}

#[test]
fn test_later_passes_render_nothing_after_a_failure() {
    let mut ws = api_workspace();
    generated(&mut ws, "good", &[], "ok");
    generated(&mut ws, "bad", &[], "{@include nope}");

    let mut generator = DocGenerator::new(&ws, &ws, &TestLinks, ws.config());
    let mut run = Run::new();
    let first = run.pass(&mut generator, &ws).unwrap();
    assert_eq!(first.attempted(), 2);

    for _ in 0..2 {
        let next = run.pass(&mut generator, &ws).unwrap();
        assert!(next.skipped);
        assert_eq!(next.attempted(), 0);
    }
    assert_eq!(run.results.len(), 1);
    assert_eq!(run.diagnostics.len(), 1);
}

#[test]
fn test_failure_recorded_against_included_module() {
    let mut ws = api_workspace();
    generated(&mut ws, "p", &[], "{@include s}");
    add_documented_module(&mut ws, "p.s", &[], "{@link Vertx#nothing()}");

    let mut generator = DocGenerator::new(&ws, &ws, &TestLinks, ws.config());
    let mut run = Run::new();
    let report = run.pass(&mut generator, &ws).unwrap();

    assert_eq!(report.failed, vec!["p"]);
    assert!(generator.context().failure("p").is_none());
    assert!(generator.context().failure("p.s").is_some());
    assert_eq!(run.diagnostics.for_module("p.s").count(), 1);
}

#[test]
fn test_circular_include_fails_the_pass_module() {
    let mut ws = api_workspace();
    generated(&mut ws, "a", &[], "{@include b}");
    add_documented_module(&mut ws, "a.b", &[], "{@link a}");

    let mut generator = DocGenerator::new(&ws, &ws, &TestLinks, ws.config());
    let mut run = Run::new();
    let report = run.pass(&mut generator, &ws).unwrap();

    assert_eq!(report.failed, vec!["a"]);
    assert_eq!(
        generator.context().failure("a"),
        Some("Circular include of a: a -> a.b -> a")
    );
    assert_eq!(
        run.diagnostics.diagnostics()[0].code.as_deref(),
        Some(diagnostic_codes::CIRCULAR_INCLUDE)
    );
}

#[test]
fn test_malformed_import_aborts_the_pass() {
    let mut ws = api_workspace();
    generated(&mut ws, "before", &[], "ok");
    generated(&mut ws, "broken", &["Vertx"], "{@link Buffer}");
    generated(&mut ws, "after", &[], "never");

    let mut generator = DocGenerator::new(&ws, &ws, &TestLinks, ws.config());
    let mut run = Run::new();
    let err = run.pass(&mut generator, &ws).unwrap_err();

    assert!(err.is_fatal());
    assert_eq!(
        err,
        DocGenError::MalformedImport {
            module: "broken".into(),
            import: "Vertx".into(),
        }
    );
    assert_eq!(run.results.get_doc("before"), Some("ok"));
    assert_eq!(run.results.get_doc("after"), None);
    assert!(!generator.context().has_failures());
    assert!(run.diagnostics.is_empty());
}
