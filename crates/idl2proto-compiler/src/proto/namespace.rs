//! Package, import and file name derivation.

use idl2proto_core::Program;
use idl2proto_core::utils::to_lower_snake_case;

/// Suffix of generated schema files.
pub const PROTO_EXTENSION: &str = "proto";

/// Proto package of `program`: its `grpc` namespace in lower snake case,
/// or `fallback` when the namespace is empty.
pub fn package_name(program: &Program, fallback: &str) -> String {
    let namespace = program.grpc_namespace();
    if namespace.is_empty() {
        return fallback.to_string();
    }
    to_lower_snake_case(namespace)
}

/// Path other schemas use to import the one generated for `program`.
pub fn import_path(program: &Program) -> String {
    format!("{}.{PROTO_EXTENSION}", to_lower_snake_case(&program.name))
}

/// File name of the schema generated for `program`.
pub fn file_name(program: &Program) -> String {
    import_path(program)
}

/// Package prefix for a type declared in `declaring` and referenced from
/// `current`, or `None` when the bare name resolves.
///
/// Only cross-file references into programs with a `grpc` namespace are
/// qualified.
pub fn qualifier(current: &Program, declaring: &Program) -> Option<String> {
    let namespace = declaring.grpc_namespace();
    if declaring.key == current.key || namespace.is_empty() {
        return None;
    }
    Some(to_lower_snake_case(namespace))
}
