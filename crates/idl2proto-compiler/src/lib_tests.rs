use idl2proto_core::ProgramKey;

use crate::Origin;

#[test]
fn origin_renders_program_then_entity_path() {
    let key = ProgramKey::new("calc.thrift");

    assert_eq!(Origin::new(&key, "Calculator").to_string(), "calc.thrift:Calculator");
    assert_eq!(
        Origin::new(&key, "Calculator.add").field("a").to_string(),
        "calc.thrift:Calculator.add.a"
    );
}

#[test]
fn origin_field_replaces_previous_field() {
    let at = Origin::new(&ProgramKey::new("t"), "S").field("a").field("b");

    assert_eq!(at.field.as_deref(), Some("b"));
    assert_eq!(at.to_string(), "t:S.b");
}
