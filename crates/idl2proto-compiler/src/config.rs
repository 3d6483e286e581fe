//! Configuration types for proto3 emission.

/// Fallback package for programs without a `grpc` namespace.
pub const DEFAULT_PACKAGE: &str = "default_package";

/// How to represent the response of a void RPC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoidResponse {
    /// `<Method>PResponse {}` - a synthesized empty message
    #[default]
    EmptyMessage,
    /// `google.protobuf.Empty` - the well-known empty type
    WellKnownEmpty,
}

/// Configuration for proto3 emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// How void RPC responses are represented
    pub(crate) void_response: VoidResponse,
    /// Package used when a program has no `grpc` namespace
    pub(crate) fallback_package: String,
    /// Whether to render source doc strings as comments
    pub(crate) emit_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            void_response: VoidResponse::default(),
            fallback_package: DEFAULT_PACKAGE.to_string(),
            emit_docs: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the void response representation.
    pub fn void_response(mut self, value: VoidResponse) -> Self {
        self.void_response = value;
        self
    }

    /// Set the package used for programs without a `grpc` namespace.
    pub fn fallback_package(mut self, value: impl Into<String>) -> Self {
        self.fallback_package = value.into();
        self
    }

    /// Set whether doc strings are emitted as `//` comments.
    pub fn emit_docs(mut self, value: bool) -> Self {
        self.emit_docs = value;
        self
    }

    pub fn uses_well_known_empty(&self) -> bool {
        self.void_response == VoidResponse::WellKnownEmpty
    }
}
