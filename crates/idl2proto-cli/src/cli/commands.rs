//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("idl2proto")
        .about("Translate IDL program graphs into proto3 schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(generate_command())
        .subcommand(check_command())
}

/// Translate programs and write one `.proto` file each.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate proto3 schemas")
        .after_help(
            r#"EXAMPLES:
  idl2proto generate graph.json                      # all programs into gen-grpc/
  idl2proto generate graph.json -o protos            # custom output directory
  idl2proto generate graph.json -p calc.thrift       # one program
  idl2proto generate - --stdout < graph.json         # stdin to stdout
  idl2proto generate graph.json --void-response well-known-empty"#,
        )
        .arg(graph_path_arg())
        .arg(out_dir_arg())
        .arg(program_arg())
        .arg(stdout_arg())
        .arg(void_response_arg())
        .arg(fallback_package_arg())
        .arg(no_docs_arg())
}

/// Translate in memory and report errors, writing nothing.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate that programs translate to proto3")
        .after_help(
            r#"EXAMPLES:
  idl2proto check graph.json                  # every program
  idl2proto check graph.json -p calc.thrift   # one program
  idl2proto check graph.json --void-response well-known-empty"#,
        )
        .arg(graph_path_arg())
        .arg(program_arg())
        .arg(void_response_arg())
        .arg(fallback_package_arg())
}
