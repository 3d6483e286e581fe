//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so `generate` and `check` can share
//! definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// JSON program graph (positional, `-` for stdin).
pub fn graph_path_arg() -> Arg {
    Arg::new("graph_path")
        .value_name("GRAPH")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Program graph as JSON (use - for stdin)")
}

/// Restrict translation to selected programs (-p/--program, repeatable).
pub fn program_arg() -> Arg {
    Arg::new("program")
        .short('p')
        .long("program")
        .value_name("KEY")
        .action(ArgAction::Append)
        .help("Translate only this program (repeatable, default: all)")
}

/// Output directory (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .default_value("gen-grpc")
        .value_parser(value_parser!(PathBuf))
        .help("Directory for generated .proto files (created if missing)")
}

/// Print documents instead of writing files (--stdout).
pub fn stdout_arg() -> Arg {
    Arg::new("stdout")
        .long("stdout")
        .action(ArgAction::SetTrue)
        .conflicts_with("out_dir")
        .help("Print generated documents to stdout")
}

/// Void RPC response representation (--void-response).
pub fn void_response_arg() -> Arg {
    Arg::new("void_response")
        .long("void-response")
        .value_name("STYLE")
        .default_value("empty-message")
        .value_parser(["empty-message", "well-known-empty"])
        .help("Response type of void RPCs")
}

/// Package for programs without a grpc namespace (--fallback-package).
pub fn fallback_package_arg() -> Arg {
    Arg::new("fallback_package")
        .long("fallback-package")
        .value_name("NAME")
        .help("Package for programs without a grpc namespace [default: default_package]")
}

/// Drop doc comments (--no-docs).
pub fn no_docs_arg() -> Arg {
    Arg::new("no_docs")
        .long("no-docs")
        .action(ArgAction::SetTrue)
        .help("Don't render doc strings as comments")
}

/// Debug logging on stderr (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Log translation steps to stderr")
}
