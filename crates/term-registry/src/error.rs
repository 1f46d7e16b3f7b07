// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for the term registry

use serde::Serialize;
use sqlterm_ir::DialectFamily;
use thiserror::Error;

use crate::Term;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised while parsing terms or verifying the translation table
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum RegistryError {
    /// The term name is not part of the vocabulary
    #[error("Unknown term: '{0}'")]
    UnknownTerm(String),

    /// A term resolves to an empty spelling
    #[error("Term {term} has an empty spelling for {family:?}")]
    EmptySpelling { term: Term, family: DialectFamily },

    /// Two overrides of the same term claim the same family
    #[error("Term {term} declares conflicting overrides for {family:?}: '{first}' and '{second}'")]
    ConflictingOverride {
        term: Term,
        family: DialectFamily,
        first: &'static str,
        second: &'static str,
    },

    /// An override repeats the default spelling
    #[error("Term {term} overrides {family:?} with its default spelling '{spelling}'")]
    RedundantOverride {
        term: Term,
        family: DialectFamily,
        spelling: &'static str,
    },
}
