// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Structured SQL names
//!
//! A [`Name`] is an identifier made of one or more parts (`table`,
//! `schema.table`, ...). It is rendered either verbatim or delimited
//! according to the conventions of a target dialect.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{IrError, IrResult};

/// A possibly qualified SQL identifier
///
/// Serialized as the list of its parts; deserialization applies the same
/// checks as [`Name::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Name {
    parts: Vec<String>,
}

impl Name {
    /// Create a name from its parts, validating that there is at least one
    /// part and that no part is empty
    pub fn new<I, S>(parts: I) -> IrResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        if parts.is_empty() {
            return Err(IrError::EmptyName);
        }
        if let Some(index) = parts.iter().position(String::is_empty) {
            return Err(IrError::EmptyNamePart { index });
        }
        Ok(Self { parts })
    }

    /// Create a single-part name
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            parts: vec![name.into()],
        }
    }

    /// Qualify this name with a prefix, e.g. a schema
    pub fn qualified_by(mut self, qualifier: impl Into<String>) -> Self {
        self.parts.insert(0, qualifier.into());
        self
    }

    /// All parts, outermost qualifier first
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// The unqualified part of the name
    pub fn last(&self) -> &str {
        // `parts` is never empty
        self.parts.last().map(String::as_str).unwrap_or_default()
    }

    /// The qualifier of the name, if any
    pub fn qualifier(&self) -> Option<Name> {
        if self.is_qualified() {
            Some(Self {
                parts: self.parts[..self.parts.len() - 1].to_vec(),
            })
        } else {
            None
        }
    }

    pub fn is_qualified(&self) -> bool {
        self.parts.len() > 1
    }

    /// Render the name with every part delimited for the given dialect
    ///
    /// - Default / PostgreSQL / SQLite / ...: `"part"`
    /// - MySQL family: `` `part` ``
    /// - SQL Server: `[part]`
    pub fn quoted(&self, dialect: Dialect) -> String {
        let quote = dialect.family().identifier_quote();
        self.parts
            .iter()
            .map(|part| quote.quote(part))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl TryFrom<Vec<String>> for Name {
    type Error = IrError;

    fn try_from(parts: Vec<String>) -> IrResult<Self> {
        Self::new(parts)
    }
}

impl From<Name> for Vec<String> {
    fn from(name: Name) -> Self {
        name.parts
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("."))
    }
}
