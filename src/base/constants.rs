//! Language constants shared by the parser and the resolvers.

/// Separator between segments of a qualified name (`java.util.List`).
pub const QUALIFIER_SEPARATOR: char = '.';

/// Separator between a reference target and its member (`List#size`).
pub const MEMBER_SEPARATOR: char = '#';

/// Suffix marking an array type in a written signature (`int[]`).
pub const ARRAY_SUFFIX: &str = "[]";

/// Namespace implicitly visible to every compilation unit.
pub const DEFAULT_NAMESPACE: &str = "java.lang";

/// Inline tag that splices a sub-module's documentation.
pub const INCLUDE_TAG: &str = "include";

/// Inline tags that produce cross-reference links.
pub const LINK_TAGS: &[&str] = &["link", "linkplain"];

/// The primitive type keywords, in declaration order.
pub const PRIMITIVE_KEYWORDS: &[&str] = &[
    "boolean", "byte", "short", "int", "long", "float", "double", "char",
];

/// Root of the type hierarchy; the erasure of an unbounded type variable.
pub const ROOT_TYPE: &str = "java.lang.Object";
