//! Test fixtures and translation helpers.

use idl2proto_core::{
    Enum, EnumValue, Field, Function, Program, ProgramGraph, ProgramKey, Service, Struct, Type,
    Typedef,
};

use crate::{Config, Error, generate};

pub const TEST: &str = "test.thrift";
pub const SHARED: &str = "shared.thrift";
pub const CALC: &str = "calc.thrift";

pub fn key(key: &str) -> ProgramKey {
    ProgramKey::new(key)
}

/// Empty program `test.thrift` in package `test`.
pub fn test_program() -> Program {
    Program::new(TEST, "test").with_namespace("grpc", "test")
}

pub fn single(program: Program) -> ProgramGraph {
    ProgramGraph::new([program])
}

/// `shared.thrift`: Color, UserId, Point and a Base service.
pub fn shared_program() -> Program {
    Program::new(SHARED, "shared")
        .with_namespace("grpc", "shared")
        .with_enum(Enum::new(
            "Color",
            vec![EnumValue::new("RED", 1), EnumValue::new("GREEN", 2)],
        ))
        .with_typedef(Typedef::new("UserId", Type::I64))
        .with_struct(Struct::new(
            "Point",
            vec![
                Field::new("x", Type::I32).required(),
                Field::new("y", Type::I32).required(),
            ],
        ))
        .with_service(Service::new(
            "Base",
            vec![
                Function::new("ping", vec![], Type::VOID),
                Function::new("who_am_i", vec![], Type::typedef_ref(SHARED, "UserId")),
            ],
        ))
}

/// `calc.thrift`: includes shared, extends its Base service.
pub fn calc_program() -> Program {
    Program::new(CALC, "calc")
        .with_namespace("grpc", "calc")
        .include(SHARED)
        .with_struct(Struct::new(
            "Shape",
            vec![
                Field::new("points", Type::list(Type::struct_ref(SHARED, "Point"))),
                Field::new("color", Type::enum_ref(SHARED, "Color")).optional(),
            ],
        ))
        .with_service(
            Service::new(
                "Calculator",
                vec![
                    Function::new(
                        "add",
                        vec![Field::new("a", Type::I32), Field::new("b", Type::I32)],
                        Type::I32,
                    ),
                    Function::new("reset", vec![], Type::VOID),
                ],
            )
            .extends(SHARED, "Base"),
        )
}

pub fn sample_graph() -> ProgramGraph {
    ProgramGraph::new([shared_program(), calc_program()])
}

pub fn emit(graph: &ProgramGraph, program: &str) -> String {
    emit_with(graph, program, &Config::default())
}

pub fn emit_with(graph: &ProgramGraph, program: &str, config: &Config) -> String {
    generate(graph, &key(program), config)
        .unwrap_or_else(|e| panic!("translation of {program} failed: {e}"))
}

pub fn emit_err(graph: &ProgramGraph, program: &str) -> Error {
    emit_err_with(graph, program, &Config::default())
}

pub fn emit_err_with(graph: &ProgramGraph, program: &str, config: &Config) -> Error {
    match generate(graph, &key(program), config) {
        Ok(output) => panic!("expected translation of {program} to fail, got:\n{output}"),
        Err(e) => e,
    }
}
