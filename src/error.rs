//! Error types for choice set construction

use thiserror::Error;

/// Errors raised while building a choice set.
///
/// All failures happen at construction time; once a [`crate::ChoiceSet`]
/// exists, every read-side query is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoicesError {
    /// The same key was bound to two groups within one declaration.
    #[error("attempted to reuse group key: {0:?}")]
    DuplicateGroupKey(String),

    /// A member or group name was bound twice within one declaration.
    #[error("attempted to reuse key: {0:?}")]
    DuplicateKey(String),

    /// A declared name collides with a name the API reserves
    /// (`choices` at the set level, `display` inside a group).
    #[error("invalid {context} name: {name:?} is reserved")]
    ReservedName {
        name: String,
        context: &'static str,
    },
}
