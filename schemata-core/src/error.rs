use miette::Diagnostic;
use thiserror::Error;

/// A type token that has no mapping for the requested target.
///
/// `target` names the vocabulary that rejected the token (`sql`, `cql` or
/// `native`).
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unknown {target} type '{token}'")]
#[diagnostic(
    code(schemata::unknown_type),
    help("supported {target} types are: {supported}")
)]
pub struct UnknownType {
    pub token: String,
    pub target: &'static str,
    supported: String,
}

impl UnknownType {
    pub fn new(token: impl Into<String>, target: &'static str, supported: &[&str]) -> Self {
        Self {
            token: token.into(),
            target,
            supported: supported.join(", "),
        }
    }

    /// Comma separated list of the tokens the target accepts.
    pub fn supported(&self) -> &str {
        &self.supported
    }
}
