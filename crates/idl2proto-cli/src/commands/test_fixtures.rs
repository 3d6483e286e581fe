//! JSON program graphs shared by command tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// `shared.thrift` and `calc.thrift`, calc extending the shared Base service.
pub const GRAPH_JSON: &str = r#"[
  {
    "key": "shared.thrift",
    "name": "shared",
    "namespaces": { "grpc": "shared" },
    "enums": [{ "name": "Color", "values": [{ "name": "RED", "value": 1 }] }],
    "typedefs": [{ "name": "UserId", "type": { "base": "i64" } }],
    "structs": [{ "name": "Point", "fields": [
      { "name": "x", "type": { "base": "i32" }, "requiredness": "required" }
    ]}],
    "services": [{ "name": "Base", "extends": null, "functions": [
      { "name": "ping", "args": [], "returns": { "base": "void" } }
    ]}]
  },
  {
    "key": "calc.thrift",
    "name": "calc",
    "namespaces": { "grpc": "calc", "java": "com.example.calc" },
    "includes": ["shared.thrift"],
    "structs": [{ "name": "Shape", "doc": "A shape.", "fields": [
      { "name": "points", "type": { "list": { "struct": { "program": "shared.thrift", "name": "Point" } } } },
      { "name": "tags", "type": { "set": "uuid" }, "requiredness": "optional" }
    ]}],
    "services": [{
      "name": "Calculator",
      "extends": { "program": "shared.thrift", "name": "Base" },
      "functions": [{
        "name": "add",
        "args": [
          { "name": "a", "type": { "base": "i32" }, "id": 1 },
          { "name": "b", "type": { "base": "i32" }, "id": 2 }
        ],
        "returns": { "base": "i64" }
      }]
    }]
  }
]"#;

/// `ok.thrift` translates, `bad.thrift` has a void struct field.
pub const BROKEN_JSON: &str = r#"[
  { "key": "ok.thrift", "name": "ok" },
  {
    "key": "bad.thrift",
    "name": "bad",
    "structs": [{ "name": "Hole", "fields": [{ "name": "v", "type": { "base": "void" } }] }]
  }
]"#;

/// Write `json` to `graph.json` in a fresh temp dir.
pub fn graph_file(json: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(&path, json).unwrap();
    (dir, path)
}
