//! Workspace description tests (`interchange` feature).

use docgen::hir::DiagnosticCollector;
use docgen::project::interchange::load_workspace_json;
use docgen::project::{DocGenerator, ResultStore};
use docgen::render::JavadocLinks;

const PROJECT: &str = r#"{
    "modules": [
        { "name": "guide", "imports": ["io.vertx.core.Vertx"], "generate": true,
          "doc": "/**\n * Create one with {@link Vertx#vertx() the factory}.\n *\n * {@include net}\n */" },
        { "name": "guide.net", "imports": ["io.vertx.core.net.NetServer"],
          "doc": "/** Listen with {@link NetServer#listen(int)}. */" }
    ],
    "types": [
        { "name": "io.vertx.core.Vertx",
          "members": [ { "name": "vertx", "kind": "method" } ] },
        { "name": "io.vertx.core.net.NetServer",
          "members": [ { "name": "listen", "kind": "method", "params": [ { "primitive": "int" } ] } ] }
    ]
}"#;

#[test]
fn test_loaded_workspace_renders_end_to_end() {
    let ws = load_workspace_json(PROJECT).unwrap();
    let links = JavadocLinks::new("https://example.org/apidocs/");
    let mut generator = DocGenerator::new(&ws, &ws, &links, ws.config());
    let mut diagnostics = DiagnosticCollector::new();
    let mut results = ResultStore::new();

    let report = generator
        .run_pass(&ws, &mut diagnostics, &mut results)
        .unwrap();

    assert_eq!(report.rendered, vec!["guide"]);
    assert_eq!(
        results.get_doc("guide"),
        Some(
            "Create one with link:https://example.org/apidocs/io/vertx/core/Vertx.html#vertx--[`the factory`].\n\
             \n\
             Listen with link:https://example.org/apidocs/io/vertx/core/net/NetServer.html#listen-int-[`listen`]. "
        )
    );
}
