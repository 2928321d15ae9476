//! Configuration errors.

use thiserror::Error;

/// Errors that abort construction of a [`LanguageSelector`](crate::LanguageSelector).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The language list is empty.
    #[error("language selector needs at least one language")]
    NoLanguages,

    /// A language descriptor has an empty id.
    #[error("language at position {index} has an empty id")]
    EmptyLanguageId {
        /// Position in the configured language list.
        index: usize,
    },
}
