use idl2proto_core::{
    Enum, EnumValue, Field, Function, Program, ProgramGraph, Service, Struct, Type, Typedef,
};

use crate::proto::generate_into;
use crate::test_utils::{
    CALC, SHARED, TEST, emit, emit_err, emit_with, key, sample_graph, single, test_program,
};
use crate::{Config, Error, VoidResponse, generate};

#[test]
fn full_document() {
    insta::assert_snapshot!(emit(&sample_graph(), CALC), @r#"
    syntax = "proto3";

    package calc;

    import "shared.proto";

    message Shape {
      repeated shared.Point points = 1;
      optional shared.Color color = 2;
    }

    message AddPRequest {
      int32 a = 1;
      int32 b = 2;
    }

    message AddPResponse {
      int32 value = 1;
    }

    message ResetPRequest {}

    message ResetPResponse {}

    service Calculator {
      rpc Add (AddPRequest) returns (AddPResponse);
      rpc Reset (ResetPRequest) returns (ResetPResponse);
      rpc Ping (shared.PingPRequest) returns (shared.PingPResponse);
      rpc WhoAmI (shared.WhoAmIPRequest) returns (shared.UserId);
    }
    "#);
}

#[test]
fn included_program_document() {
    insta::assert_snapshot!(emit(&sample_graph(), SHARED), @r#"
    syntax = "proto3";

    package shared;

    enum Color {
      COLOR_UNSPECIFIED = 0;
      RED = 1;
      GREEN = 2;
    }

    message UserId {
      int64 value = 1;
    }

    message Point {
      int32 x = 1;
      int32 y = 2;
    }

    message PingPRequest {}

    message PingPResponse {}

    message WhoAmIPRequest {}

    service Base {
      rpc Ping (PingPRequest) returns (PingPResponse);
      rpc WhoAmI (WhoAmIPRequest) returns (UserId);
    }
    "#);
}

#[test]
fn empty_program_without_namespace() {
    let graph = single(Program::new("empty.thrift", "empty"));

    assert_eq!(
        emit(&graph, "empty.thrift"),
        "syntax = \"proto3\";\n\npackage default_package;\n"
    );
}

#[test]
fn fallback_package_is_configurable() {
    let graph = single(Program::new("empty.thrift", "empty"));
    let config = Config::new().fallback_package("legacy.api");

    assert_eq!(
        emit_with(&graph, "empty.thrift", &config),
        "syntax = \"proto3\";\n\npackage legacy.api;\n"
    );
}

#[test]
fn sections_follow_fixed_order() {
    // Declared in reverse of the emitted order
    let program = test_program()
        .with_service(Service::new("Svc", vec![]))
        .with_struct(Struct::new("Record", vec![]))
        .with_typedef(Typedef::new("Alias", Type::STRING))
        .with_enum(Enum::new("Kind", vec![EnumValue::new("NONE", 0)]));
    let output = emit(&single(program), TEST);

    let positions: Vec<usize> = [
        "syntax = ",
        "package test;",
        "enum Kind",
        "message Alias",
        "message Record",
        "service Svc",
    ]
    .iter()
    .map(|needle| output.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{output}");
}

#[test]
fn declarations_keep_source_order_within_a_section() {
    let program = test_program()
        .with_struct(Struct::new("Zeta", vec![]))
        .with_struct(Struct::new("Alpha", vec![]))
        .with_struct(Struct::new("Mid", vec![]));
    let output = emit(&single(program), TEST);

    let zeta = output.find("message Zeta").unwrap();
    let alpha = output.find("message Alpha").unwrap();
    let mid = output.find("message Mid").unwrap();
    assert!(zeta < alpha && alpha < mid);
}

#[test]
fn imports_cover_transitive_includes_in_order() {
    let graph = ProgramGraph::new([
        test_program().include("b").include("a"),
        Program::new("b", "b_types").include("c"),
        Program::new("a", "AlphaTypes").include("c"),
        Program::new("c", "common"),
    ]);

    insta::assert_snapshot!(emit(&graph, TEST), @r#"
    syntax = "proto3";

    package test;

    import "b_types.proto";
    import "common.proto";
    import "alpha_types.proto";
    "#);
}

#[test]
fn well_known_empty_adds_import() {
    let config = Config::new().void_response(VoidResponse::WellKnownEmpty);
    let output = emit_with(&sample_graph(), CALC, &config);

    assert!(output.contains(
        "import \"shared.proto\";\nimport \"google/protobuf/empty.proto\";\n\n"
    ));
    assert!(!output.contains("ResetPResponse"));
}

#[test]
fn well_known_empty_import_only_when_needed() {
    let program = test_program().with_service(Service::new(
        "Calc",
        vec![Function::new("one", vec![], Type::I32)],
    ));
    let config = Config::new().void_response(VoidResponse::WellKnownEmpty);

    assert!(!emit_with(&single(program), TEST, &config).contains("import"));
}

#[test]
fn inherited_void_rpc_needs_empty_import() {
    let graph = ProgramGraph::new([
        crate::test_utils::shared_program(),
        test_program()
            .include(SHARED)
            .with_service(Service::new("Child", vec![]).extends(SHARED, "Base")),
    ]);
    let config = Config::new().void_response(VoidResponse::WellKnownEmpty);

    assert!(emit_with(&graph, TEST, &config).contains("import \"google/protobuf/empty.proto\";"));
}

#[test]
fn missing_include_is_reported() {
    let graph = single(test_program().include("gone.thrift"));
    let err = emit_err(&graph, TEST);

    assert!(matches!(
        &err,
        Error::MissingInclude { include, .. } if include.as_str() == "gone.thrift"
    ));
    assert_eq!(
        err.to_string(),
        "test.thrift: included program `gone.thrift` is not in the program graph"
    );
}

#[test]
fn unknown_program_is_reported() {
    let err = generate(&sample_graph(), &key("nope.thrift"), &Config::default()).unwrap_err();

    assert_eq!(err.to_string(), "unknown program `nope.thrift`");
}

#[test]
fn document_ends_with_single_newline() {
    for program in [CALC, SHARED] {
        let output = emit(&sample_graph(), program);
        assert!(output.ends_with("}\n"), "{output}");
        assert!(!output.ends_with("\n\n"), "{output}");
    }
}

#[test]
fn translation_is_deterministic() {
    let graph = sample_graph();
    let first = emit(&graph, CALC);

    for _ in 0..5 {
        assert_eq!(emit(&graph, CALC), first);
    }
}

#[test]
fn generate_into_writes_document() {
    let mut out = String::from("// header\n");
    generate_into(&sample_graph(), &key(SHARED), &Config::default(), &mut out).unwrap();

    assert!(out.starts_with("// header\nsyntax = \"proto3\";"));
    assert_eq!(&out["// header\n".len()..], emit(&sample_graph(), SHARED));
}

#[test]
fn failed_translation_leaves_sink_untouched() {
    let program = test_program()
        .with_struct(Struct::new("Good", vec![Field::new("a", Type::I32)]))
        .with_struct(Struct::new("Bad", vec![Field::new("b", Type::VOID)]));
    let mut out = String::new();
    let result = generate_into(&single(program), &key(TEST), &Config::default(), &mut out);

    assert!(matches!(result, Err(Error::UnsupportedBaseType { .. })));
    assert!(out.is_empty());
}

#[test]
fn error_aborts_whole_document() {
    let program = test_program()
        .with_enum(Enum::new("Fine", vec![EnumValue::new("A", 1)]))
        .with_struct(Struct::new("Broken", vec![Field::new(
            "m",
            Type::map(Type::BOOL, Type::STRING),
        )]));
    let err = emit_err(&single(program), TEST);

    assert_eq!(
        err.to_string(),
        "test.thrift:Broken.m: unsupported proto3 map key type `bool` (expected string, int32 or int64)"
    );
}
