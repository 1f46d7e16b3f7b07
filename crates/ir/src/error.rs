// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Error types for IR operations

use serde::Serialize;
use thiserror::Error;

/// Result type alias for IR operations
pub type IrResult<T> = Result<T, IrError>;

/// Errors that can occur while building IR values from external input
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum IrError {
    /// The dialect name is not recognized
    #[error("Unknown SQL dialect: '{0}'")]
    UnknownDialect(String),

    /// A name was built without any parts
    #[error("Name must have at least one part")]
    EmptyName,

    /// One of the parts of a name is empty
    #[error("Name part {index} is empty")]
    EmptyNamePart { index: usize },
}
