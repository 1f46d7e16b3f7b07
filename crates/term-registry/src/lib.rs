// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Term Registry
//!
//! This crate maps a closed vocabulary of standard SQL expressions
//! (aggregate, window and statistical functions) to the spelling each
//! dialect family expects.
//!
//! ## Features
//!
//! - Closed [`Term`] vocabulary with exhaustive translation rules
//! - Default spellings derived from the canonical term name
//! - Family specific overrides stored as static data
//! - Table invariants verified when the registry is built
//! - [`Translator`] bound to a configured target dialect
//!
//! ## Usage
//!
//! ```rust
//! use sqlterm_registry::{Dialect, Term, TermRegistry};
//!
//! let registry = TermRegistry::global();
//! assert_eq!(registry.translate(Term::CharLength, Dialect::SQLite), "length");
//! assert_eq!(registry.translate(Term::CharLength, Dialect::PostgreSQL), "char_length");
//! assert_eq!(Term::RowNumber.translate(Dialect::HSQLDB), "rownum");
//! ```

pub mod config;
pub mod error;
pub mod registry;
pub mod rule;
pub mod term;
pub mod translator;

// Re-exports from ir for convenience
pub use sqlterm_ir::{Dialect, DialectFamily, FunctionType, Name};

pub use config::{ConfigError, ConfigResult, TranslatorConfig};
pub use error::{RegistryError, RegistryResult};
pub use registry::TermRegistry;
pub use rule::{Override, TranslationRule};
pub use term::Term;
pub use translator::Translator;
