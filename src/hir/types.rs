//! Handles and type representations shared by the resolvers and symbol tables.

use std::fmt;

use crate::base::constants::{PRIMITIVE_KEYWORDS, QUALIFIER_SEPARATOR, ROOT_TYPE};
use crate::base::{Name, simple_name};

// ============================================================================
// TYPES
// ============================================================================

/// The eight primitive types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
}

impl PrimitiveKind {
    const ALL: [PrimitiveKind; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
    ];

    /// Map a primitive keyword to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        PRIMITIVE_KEYWORDS
            .iter()
            .position(|k| *k == keyword)
            .map(|i| Self::ALL[i])
    }

    pub fn keyword(&self) -> &'static str {
        PRIMITIVE_KEYWORDS[*self as usize]
    }
}

/// A type as written in a signature or declared on a member.
///
/// Comparison between written and declared parameter types happens on
/// erased forms (see [`TypeRef::erasure`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    Array(Box<TypeRef>),
    /// A declared (class or interface) type by qualified name.
    Declared(Name),
    /// A generic instantiation such as `java.util.List<java.lang.String>`.
    Parameterized { base: Name, args: Vec<TypeRef> },
    /// A type variable; erases to its bound.
    Variable {
        name: Name,
        bound: Option<Box<TypeRef>>,
    },
}

impl TypeRef {
    pub fn declared(qualified_name: impl Into<Name>) -> Self {
        TypeRef::Declared(qualified_name.into())
    }

    pub fn array(component: TypeRef) -> Self {
        TypeRef::Array(Box::new(component))
    }

    /// The generic-erased form: parameterized types lose their arguments,
    /// type variables become their bound (or the root type).
    pub fn erasure(&self) -> TypeRef {
        match self {
            TypeRef::Primitive(_) | TypeRef::Declared(_) => self.clone(),
            TypeRef::Array(component) => TypeRef::array(component.erasure()),
            TypeRef::Parameterized { base, .. } => TypeRef::Declared(base.clone()),
            TypeRef::Variable { bound, .. } => match bound {
                Some(bound) => bound.erasure(),
                None => TypeRef::declared(ROOT_TYPE),
            },
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Primitive(kind) => f.write_str(kind.keyword()),
            TypeRef::Array(component) => write!(f, "{component}[]"),
            TypeRef::Declared(name) => f.write_str(name),
            TypeRef::Parameterized { base, args } => {
                write!(f, "{base}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(">")
            }
            TypeRef::Variable { name, .. } => f.write_str(name),
        }
    }
}

// ============================================================================
// HANDLES
// ============================================================================

/// A declared type known to the symbol table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeHandle {
    pub qualified_name: Name,
}

impl TypeHandle {
    pub fn new(qualified_name: impl Into<Name>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }

    /// The (raw) type this handle declares.
    pub fn as_type_ref(&self) -> TypeRef {
        TypeRef::Declared(self.qualified_name.clone())
    }
}

/// A documentation module (package).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModuleHandle {
    pub qualified_name: Name,
}

impl ModuleHandle {
    pub fn new(qualified_name: impl Into<Name>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    pub fn simple_name(&self) -> &str {
        simple_name(&self.qualified_name)
    }
}

// ============================================================================
// MEMBERS
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MemberKind {
    Field,
    Method,
    Constructor,
    EnumConstant,
}

/// A member of a declared type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Member {
    pub name: Name,
    pub kind: MemberKind,
    /// Declared parameter types, in order. Empty for fields.
    pub params: Vec<TypeRef>,
    /// Qualified name of the declaring type.
    pub owner: Name,
}

impl Member {
    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }

    pub fn is_method(&self) -> bool {
        self.kind == MemberKind::Method
    }
}

// ============================================================================
// IMPORTS
// ============================================================================

/// An import declaration of a module's compilation unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImportDecl {
    /// The imported path as written (`java.util.List`, `java.util.*`).
    pub path: Name,
    pub is_static: bool,
}

impl ImportDecl {
    pub fn new(path: impl Into<Name>) -> Self {
        Self {
            path: path.into(),
            is_static: false,
        }
    }

    pub fn new_static(path: impl Into<Name>) -> Self {
        Self {
            path: path.into(),
            is_static: true,
        }
    }

    /// Split into qualifier and trailing identifier.
    ///
    /// `None` for a path without a qualifier, which cannot be written in a
    /// well-formed compilation unit.
    pub fn split(&self) -> Option<(&str, &str)> {
        let pos = self.path.rfind(QUALIFIER_SEPARATOR)?;
        let (qualifier, identifier) = (&self.path[..pos], &self.path[pos + 1..]);
        if qualifier.is_empty() || identifier.is_empty() {
            return None;
        }
        Some((qualifier, identifier))
    }
}

// ============================================================================
// RESOLVED SYMBOLS
// ============================================================================

/// What a link reference resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedSymbol {
    Module(ModuleHandle),
    Type(TypeHandle),
    Method { owner: TypeHandle, method: Member },
    Field { owner: TypeHandle, field: Member },
}

impl ResolvedSymbol {
    /// The symbol's simple name, used as the default link label.
    pub fn simple_name(&self) -> &str {
        match self {
            ResolvedSymbol::Module(module) => module.simple_name(),
            ResolvedSymbol::Type(ty) => ty.simple_name(),
            ResolvedSymbol::Method { method, .. } => &method.name,
            ResolvedSymbol::Field { field, .. } => &field.name,
        }
    }
}
