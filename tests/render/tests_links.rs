//! Link rendering tests: type resolution order and labels.

use docgen::DocGenError;
use docgen::parser::SignatureError;

use crate::helpers::fixtures::api_workspace;
use crate::helpers::render_helpers::*;

const CORE_IMPORTS: &[&str] = &["io.vertx.core.Vertx", "io.vertx.core.buffer.Buffer"];

fn render_doc(imports: &[&str], doc: &str) -> Result<String, DocGenError> {
    let mut ws = api_workspace();
    add_documented_module(&mut ws, "docs", imports, doc);
    render(&ws, "docs")
}

// =============================================================================
// LABELS
// =============================================================================

#[test]
fn test_unlabelled_link_uses_simple_name() {
    let text = render_doc(CORE_IMPORTS, "See {@link Vertx}.").unwrap();
    assert_eq!(text, "See link:type:io.vertx.core.Vertx[`Vertx`].");
}

#[test]
fn test_labelled_link_uses_label() {
    let text = render_doc(CORE_IMPORTS, "See {@link Vertx the core}.").unwrap();
    assert_eq!(text, "See link:type:io.vertx.core.Vertx[`the core`].");
}

#[test]
fn test_label_with_nested_markup_is_flattened() {
    let text = render_doc(CORE_IMPORTS, "{@link Vertx the {@code core} api}").unwrap();
    assert_eq!(text, "link:type:io.vertx.core.Vertx[`the  core api`]");
}

#[test]
fn test_label_follows_spaced_parameter_list() {
    let text = render_doc(CORE_IMPORTS, "{@link Buffer#setBytes(int, byte[]) write bytes}").unwrap();
    assert_eq!(
        text,
        "link:method:io.vertx.core.buffer.Buffer#setBytes(int,byte[])[`write bytes`]"
    );
}

#[test]
fn test_deeply_nested_braces_render_as_text() {
    let doc = format!("{}{{@link Vertx}}", "{".repeat(100_000));
    let text = render_doc(CORE_IMPORTS, &doc).unwrap();
    assert_eq!(text.len(), doc.len());
    assert!(text.ends_with("{@link Vertx}"));
}

#[test]
fn test_linkplain_is_a_link_tag() {
    let text = render_doc(CORE_IMPORTS, "{@linkplain Buffer}").unwrap();
    assert_eq!(text, "link:type:io.vertx.core.buffer.Buffer[`Buffer`]");
}

#[test]
fn test_member_link_label_is_member_name() {
    let text = render_doc(CORE_IMPORTS, "{@link Vertx#vertx()}").unwrap();
    assert_eq!(text, "link:method:io.vertx.core.Vertx#vertx()[`vertx`]");
}

#[test]
fn test_text_and_unknown_tags_pass_through() {
    let text = render_doc(&[], "Use {@code vertx.close()} {braces}").unwrap();
    assert_eq!(text, "Use  vertx.close() {braces}");
}

// =============================================================================
// TYPE RESOLUTION ORDER
// =============================================================================

#[test]
fn test_qualified_name_resolves_directly() {
    let text = render_doc(&[], "{@link io.vertx.core.Vertx}").unwrap();
    assert_eq!(text, "link:type:io.vertx.core.Vertx[`Vertx`]");
}

#[test]
fn test_import_wins_over_default_namespace() {
    let text = render_doc(&["ui.Widget"], "{@link Widget}").unwrap();
    assert_eq!(text, "link:type:ui.Widget[`Widget`]");
}

#[test]
fn test_default_namespace_used_without_import() {
    let text = render_doc(&[], "{@link Widget}").unwrap();
    assert_eq!(text, "link:type:java.lang.Widget[`Widget`]");
}

#[test]
fn test_import_of_unknown_type_falls_back_to_default_namespace() {
    let text = render_doc(&["gone.String"], "{@link String}").unwrap();
    assert_eq!(text, "link:type:java.lang.String[`String`]");
}

#[test]
fn test_unresolvable_name_is_unresolved_link() {
    let err = render_doc(CORE_IMPORTS, "{@link Missing}").unwrap_err();
    assert_eq!(
        err,
        DocGenError::UnresolvedLink {
            module: "docs".into(),
            signature: "Missing".into(),
        }
    );
    assert_eq!(err.to_string(), "Could not resolve Missing");
}

#[test]
fn test_simple_name_without_import_is_unresolved() {
    let err = render_doc(&[], "{@link Vertx}").unwrap_err();
    assert!(matches!(err, DocGenError::UnresolvedLink { .. }));
}

#[test]
fn test_malformed_signature_reported() {
    let err = render_doc(CORE_IMPORTS, "{@link Vertx#}").unwrap_err();
    assert_eq!(
        err,
        DocGenError::MalformedSignature {
            module: "docs".into(),
            signature: "Vertx#".into(),
            source: SignatureError::MalformedMember("Vertx#".into()),
        }
    );
}

#[test]
fn test_module_without_documentation_renders_empty() {
    let mut ws = api_workspace();
    ws.add_module(docgen::hir::ModuleDecl::new("bare"));
    assert_eq!(assert_renders(&ws, "bare"), "");
}
