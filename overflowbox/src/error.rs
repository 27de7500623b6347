//! Errors surfaced at the widget's fallible edges.
//!
//! Event handling itself never fails: a missing surface or unknown media id is
//! a silent no-op. Only lookups the caller asks for explicitly return errors.

use thiserror::Error;

/// Errors returned by `overflowbox`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverflowboxError {
    /// `use_position_store` was called outside `provide_position_store`.
    #[error("no position store provided; wrap the caller in `provide_position_store`")]
    MissingPositionStore,
    /// A preset name did not match any known preset.
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
}
