// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Term - Shared Vocabulary
//!
//! This crate provides the dialect-independent types shared by the term
//! translation crates:
//! - SQL dialects and the families they resolve to
//! - Structured, quotable identifiers
//! - Function classification

pub mod dialect;
pub mod error;
pub mod function;
pub mod name;

// Re-export commonly used types
pub use dialect::{Dialect, DialectFamily, IdentifierQuote};
pub use error::{IrError, IrResult};
pub use function::FunctionType;
pub use name::Name;
