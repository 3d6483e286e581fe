#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for idl2proto.
//!
//! The model mirrors an IDL program graph that has already been parsed and
//! resolved by the front end:
//! - **Programs**: one per source file, identified by a stable [`ProgramKey`]
//! - **Types**: a closed union over scalars, containers and named references
//! - **Declarations**: structs, enums, typedefs and services in source order
//!
//! Everything deserializes from JSON so a driver can hand over a graph
//! produced by any front end.

use std::fmt;

use indexmap::IndexMap;

mod graph;
pub mod utils;


pub use graph::ProgramGraph;

/// Namespace scope that carries the proto package of a program.
pub const GRPC_SCOPE: &str = "grpc";

/// Parse a JSON array of programs into a graph.
pub fn parse_program_graph(json: &str) -> Result<ProgramGraph, serde_json::Error> {
    serde_json::from_str(json)
}

// ============================================================================
// Identity
// ============================================================================

/// Stable identity of a program (canonical path or declared name).
///
/// Program identity is always a key comparison, never object identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Deserialize)]
#[serde(transparent)]
pub struct ProgramKey(String);

impl ProgramKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProgramKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ProgramKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

// ============================================================================
// Types
// ============================================================================

/// Scalar base types of the source IDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    Void,
    String,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Double,
}

impl BaseType {
    /// Name as spelled in the source IDL.
    pub fn name(self) -> &'static str {
        match self {
            BaseType::Void => "void",
            BaseType::String => "string",
            BaseType::Bool => "bool",
            BaseType::I8 => "i8",
            BaseType::I16 => "i16",
            BaseType::I32 => "i32",
            BaseType::I64 => "i64",
            BaseType::Double => "double",
        }
    }
}

/// Reference to a named type declared in some program.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
pub struct TypeRef {
    /// Program that declares the referenced type.
    pub program: ProgramKey,
    pub name: String,
}

impl TypeRef {
    pub fn new(program: impl Into<ProgramKey>, name: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            name: name.into(),
        }
    }
}

/// A source IDL type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Base(BaseType),
    Binary,
    Uuid,
    List(Box<Type>),
    Set(Box<Type>),
    Map { key: Box<Type>, value: Box<Type> },
    Struct(TypeRef),
    Enum(TypeRef),
    Typedef(TypeRef),
}

impl Type {
    pub const VOID: Type = Type::Base(BaseType::Void);
    pub const STRING: Type = Type::Base(BaseType::String);
    pub const BOOL: Type = Type::Base(BaseType::Bool);
    pub const I8: Type = Type::Base(BaseType::I8);
    pub const I16: Type = Type::Base(BaseType::I16);
    pub const I32: Type = Type::Base(BaseType::I32);
    pub const I64: Type = Type::Base(BaseType::I64);
    pub const DOUBLE: Type = Type::Base(BaseType::Double);

    pub fn list(elem: Type) -> Self {
        Type::List(Box::new(elem))
    }

    pub fn set(elem: Type) -> Self {
        Type::Set(Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn struct_ref(program: impl Into<ProgramKey>, name: impl Into<String>) -> Self {
        Type::Struct(TypeRef::new(program, name))
    }

    pub fn enum_ref(program: impl Into<ProgramKey>, name: impl Into<String>) -> Self {
        Type::Enum(TypeRef::new(program, name))
    }

    pub fn typedef_ref(program: impl Into<ProgramKey>, name: impl Into<String>) -> Self {
        Type::Typedef(TypeRef::new(program, name))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Type::Base(BaseType::Void))
    }

    /// Container types render as `repeated` or `map` fields.
    pub fn is_container(&self) -> bool {
        matches!(self, Type::List(_) | Type::Set(_) | Type::Map { .. })
    }

    /// The named reference, if this is a struct, enum or typedef.
    pub fn type_ref(&self) -> Option<&TypeRef> {
        match self {
            Type::Struct(r) | Type::Enum(r) | Type::Typedef(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Base(base) => f.write_str(base.name()),
            Type::Binary => f.write_str("binary"),
            Type::Uuid => f.write_str("uuid"),
            Type::List(elem) => write!(f, "list<{elem}>"),
            Type::Set(elem) => write!(f, "set<{elem}>"),
            Type::Map { key, value } => write!(f, "map<{key},{value}>"),
            Type::Struct(r) | Type::Enum(r) | Type::Typedef(r) => f.write_str(&r.name),
        }
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Field requiredness qualifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requiredness {
    Required,
    Optional,
    #[default]
    Default,
}

/// A struct field or function argument.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub requiredness: Requiredness,
    /// Source field id. Proto field numbers are positional, so this is ignored.
    #[serde(default)]
    pub id: Option<i16>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            requiredness: Requiredness::Default,
            id: None,
            doc: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.requiredness = Requiredness::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.requiredness = Requiredness::Optional;
        self
    }

    pub fn id(mut self, id: i16) -> Self {
        self.id = Some(id);
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Struct {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Struct {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i32,
    #[serde(default)]
    pub doc: Option<String>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            doc: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnumValue>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>, values: Vec<EnumValue>) -> Self {
        Self {
            name: name.into(),
            values,
            doc: None,
        }
    }

    pub fn has_zero(&self) -> bool {
        self.values.iter().any(|v| v.value == 0)
    }
}

/// A named alias for another type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Typedef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Typedef {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Field>,
    pub returns: Type,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Function {
    pub fn new(name: impl Into<String>, args: Vec<Field>, returns: Type) -> Self {
        Self {
            name: name.into(),
            args,
            returns,
            doc: None,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<Function>,
    /// Parent service (single inheritance).
    #[serde(default)]
    pub extends: Option<TypeRef>,
    #[serde(default)]
    pub doc: Option<String>,
}

impl Service {
    pub fn new(name: impl Into<String>, functions: Vec<Function>) -> Self {
        Self {
            name: name.into(),
            functions,
            extends: None,
            doc: None,
        }
    }

    pub fn extends(mut self, program: impl Into<ProgramKey>, name: impl Into<String>) -> Self {
        self.extends = Some(TypeRef::new(program, name));
        self
    }
}

/// One source IDL file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Program {
    pub key: ProgramKey,
    pub name: String,
    /// Namespace per target scope (`grpc`, `java`, ...).
    #[serde(default)]
    pub namespaces: IndexMap<String, String>,
    /// Programs included directly by this one.
    #[serde(default)]
    pub includes: Vec<ProgramKey>,
    #[serde(default)]
    pub enums: Vec<Enum>,
    #[serde(default)]
    pub typedefs: Vec<Typedef>,
    #[serde(default)]
    pub structs: Vec<Struct>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Program {
    pub fn new(key: impl Into<ProgramKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            namespaces: IndexMap::new(),
            includes: Vec::new(),
            enums: Vec::new(),
            typedefs: Vec::new(),
            structs: Vec::new(),
            services: Vec::new(),
        }
    }

    /// Namespace declared for `scope`, empty if none.
    pub fn namespace(&self, scope: &str) -> &str {
        self.namespaces.get(scope).map(String::as_str).unwrap_or("")
    }

    pub fn grpc_namespace(&self) -> &str {
        self.namespace(GRPC_SCOPE)
    }

    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    pub fn with_namespace(mut self, scope: impl Into<String>, ns: impl Into<String>) -> Self {
        self.namespaces.insert(scope.into(), ns.into());
        self
    }

    pub fn include(mut self, key: impl Into<ProgramKey>) -> Self {
        self.includes.push(key.into());
        self
    }

    pub fn with_enum(mut self, e: Enum) -> Self {
        self.enums.push(e);
        self
    }

    pub fn with_typedef(mut self, t: Typedef) -> Self {
        self.typedefs.push(t);
        self
    }

    pub fn with_struct(mut self, s: Struct) -> Self {
        self.structs.push(s);
        self
    }

    pub fn with_service(mut self, s: Service) -> Self {
        self.services.push(s);
        self
    }
}
