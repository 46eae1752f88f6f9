//! Member matching tests: fields vs methods, overloads, inheritance.

use rstest::rstest;

use crate::helpers::fixtures::api_workspace;
use crate::helpers::render_helpers::*;

const IMPORTS: &[&str] = &["io.vertx.core.Vertx", "io.vertx.core.buffer.Buffer"];

fn render_link(signature: &str) -> Option<String> {
    let mut ws = api_workspace();
    add_documented_module(&mut ws, "docs", IMPORTS, &format!("{{@link {signature}}}"));
    render(&ws, "docs").ok()
}

#[rstest]
// No parentheses: the first field or method with the name.
#[case("Buffer#length", "field:io.vertx.core.buffer.Buffer#length")]
// Empty parentheses: only a zero-argument method.
#[case("Buffer#length()", "method:io.vertx.core.buffer.Buffer#length()")]
// Written parameters: a field still matches by name.
#[case("Buffer#length(int)", "field:io.vertx.core.buffer.Buffer#length")]
#[case("Buffer#getInt(int)", "method:io.vertx.core.buffer.Buffer#getInt(int)")]
// A trailing comma adds no parameter.
#[case("Buffer#getInt(int,)", "method:io.vertx.core.buffer.Buffer#getInt(int)")]
#[case(
    "Buffer#setBytes(int, byte[])",
    "method:io.vertx.core.buffer.Buffer#setBytes(int,byte[])"
)]
#[case(
    "Buffer#setBytes( int ,\n byte[] )",
    "method:io.vertx.core.buffer.Buffer#setBytes(int,byte[])"
)]
#[case("Vertx#close", "method:io.vertx.core.Vertx#close()")]
#[case("Vertx#close()", "method:io.vertx.core.Vertx#close()")]
#[case(
    "Vertx#close(io.vertx.core.Handler)",
    "method:io.vertx.core.Vertx#close(io.vertx.core.Handler)"
)]
#[case(
    "Vertx#deployVerticle(String)",
    "method:io.vertx.core.Vertx#deployVerticle(java.lang.String)"
)]
// Inherited from the supertype.
#[case("Vertx#toString()", "method:io.vertx.core.Vertx#toString()")]
fn test_member_resolves(#[case] signature: &str, #[case] destination: &str) {
    let text = render_link(signature).unwrap();
    assert!(
        text.starts_with(&format!("link:{destination}[")),
        "'{}' rendered as '{}'",
        signature,
        text
    );
}

#[rstest]
#[case("Buffer#getInt()")]
#[case("Buffer#getInt(long)")]
#[case("Buffer#setBytes(int)")]
#[case("Buffer#setBytes(int, byte)")]
#[case("Vertx#vertx(int)")]
// Parameter types resolve through the module's imports only.
#[case("Vertx#close(Handler)")]
#[case("Vertx#nothing")]
#[case("Nowhere#close()")]
fn test_member_unresolved(#[case] signature: &str) {
    assert_eq!(render_link(signature), None, "'{}' should not resolve", signature);
}

#[test]
fn test_parameter_type_resolved_through_import() {
    let mut ws = api_workspace();
    add_documented_module(
        &mut ws,
        "docs",
        &["io.vertx.core.Vertx", "io.vertx.core.Handler"],
        "{@link Vertx#close(Handler) close it}",
    );
    assert_eq!(
        assert_renders(&ws, "docs"),
        "link:method:io.vertx.core.Vertx#close(io.vertx.core.Handler)[`close it`]"
    );
}
