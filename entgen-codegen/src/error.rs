use thiserror::Error;

/// Errors raised while substituting template slots.
///
/// The generation driver catches these at the per-table boundary and
/// aborts the run with the owning table named in the context chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no value supplied for template slot '{name}'")]
    MissingValue { name: String },
}
