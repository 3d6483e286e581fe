//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but stay close to clap's
//! string values; the `From` impls turn them into compiler configuration.

use std::path::PathBuf;

use clap::ArgMatches;
use idl2proto_compiler::{Config, VoidResponse};
use idl2proto_core::ProgramKey;

use crate::commands::check::CheckArgs;
use crate::commands::generate::{GenerateArgs, Output};

pub struct GenerateParams {
    pub graph_path: PathBuf,
    pub out_dir: PathBuf,
    pub programs: Vec<String>,
    pub stdout: bool,
    pub void_response: VoidResponse,
    pub fallback_package: Option<String>,
    pub no_docs: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: parse_graph_path(m),
            out_dir: m
                .get_one::<PathBuf>("out_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("gen-grpc")),
            programs: parse_programs(m),
            stdout: m.get_flag("stdout"),
            void_response: parse_void_response(m),
            fallback_package: m.get_one::<String>("fallback_package").cloned(),
            no_docs: m.get_flag("no_docs"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            graph_path: p.graph_path,
            programs: into_keys(p.programs),
            output: if p.stdout {
                Output::Stdout
            } else {
                Output::Dir(p.out_dir)
            },
            config: build_config(p.void_response, p.fallback_package).emit_docs(!p.no_docs),
        }
    }
}

pub struct CheckParams {
    pub graph_path: PathBuf,
    pub programs: Vec<String>,
    pub void_response: VoidResponse,
    pub fallback_package: Option<String>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: parse_graph_path(m),
            programs: parse_programs(m),
            void_response: parse_void_response(m),
            fallback_package: m.get_one::<String>("fallback_package").cloned(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            graph_path: p.graph_path,
            programs: into_keys(p.programs),
            config: build_config(p.void_response, p.fallback_package),
        }
    }
}

fn parse_graph_path(m: &ArgMatches) -> PathBuf {
    // Required by clap; `-` is the stdin fallback for programmatic matches
    m.get_one::<PathBuf>("graph_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_programs(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("program")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_void_response(m: &ArgMatches) -> VoidResponse {
    match m.get_one::<String>("void_response").map(|s| s.as_str()) {
        Some("well-known-empty") => VoidResponse::WellKnownEmpty,
        _ => VoidResponse::EmptyMessage,
    }
}

/// Emission settings shared by `generate` and `check`, so both translate
/// the same way.
fn build_config(void_response: VoidResponse, fallback_package: Option<String>) -> Config {
    let config = Config::new().void_response(void_response);
    match fallback_package {
        Some(package) => config.fallback_package(package),
        None => config,
    }
}

fn into_keys(programs: Vec<String>) -> Vec<ProgramKey> {
    programs.into_iter().map(ProgramKey::from).collect()
}
