// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Support
//!
//! This module defines SQL dialects and the families they belong to.
//!
//! ## Design
//!
//! The dialect system is organized into two levels:
//!
//! 1. **Dialect Family**: Groupings of databases that share translation behavior
//! 2. **Specific Dialect**: Individual database products (MySQL, TiDB, PostgreSQL, ...)
//!
//! Every dialect resolves to exactly one family. Code that decides how to spell
//! something for a database should match on the family, never on the dialect.
//!
//! ## Dialect Families
//!
//! - **MySQL Family**: MySQL, TiDB and MariaDB
//! - **PostgreSQL Family**: PostgreSQL, CockroachDB and YugabyteDB
//! - **Embedded / single-product families**: SQLite, Derby, H2, HSQLDB, CUBRID,
//!   Firebird, DuckDB
//! - **Commercial families**: Oracle, SQL Server
//! - **Default**: the catch-all family for dialects without specific behavior

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::error::IrError;

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, VariantArray)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// MySQL (5.7, 8.0)
    MySQL,
    /// TiDB (MySQL compatible)
    TiDB,
    /// MariaDB (MySQL compatible)
    MariaDB,
    /// PostgreSQL (12, 14, 15+)
    PostgreSQL,
    /// CockroachDB (PostgreSQL wire compatible)
    CockroachDB,
    /// YugabyteDB (PostgreSQL compatible)
    YugabyteDB,
    /// SQLite 3
    SQLite,
    /// Apache Derby
    Derby,
    /// H2 Database
    H2,
    /// HyperSQL
    HSQLDB,
    /// CUBRID
    Cubrid,
    /// Firebird
    Firebird,
    /// DuckDB
    DuckDB,
    /// Oracle Database
    Oracle,
    /// Microsoft SQL Server
    SqlServer,
    /// Generic SQL with no database specific behavior
    Default,
}

impl Dialect {
    /// All known dialects, in declaration order
    pub const ALL: &'static [Dialect] = <Dialect as VariantArray>::VARIANTS;

    /// Returns the family this dialect belongs to
    pub fn family(&self) -> DialectFamily {
        match self {
            Dialect::MySQL | Dialect::TiDB | Dialect::MariaDB => DialectFamily::MySQL,
            Dialect::PostgreSQL | Dialect::CockroachDB | Dialect::YugabyteDB => {
                DialectFamily::PostgreSQL
            }
            Dialect::SQLite => DialectFamily::SQLite,
            Dialect::Derby => DialectFamily::Derby,
            Dialect::H2 => DialectFamily::H2,
            Dialect::HSQLDB => DialectFamily::Hsqldb,
            Dialect::Cubrid => DialectFamily::Cubrid,
            Dialect::Firebird => DialectFamily::Firebird,
            Dialect::DuckDB => DialectFamily::DuckDb,
            Dialect::Oracle => DialectFamily::Oracle,
            Dialect::SqlServer => DialectFamily::SqlServer,
            Dialect::Default => DialectFamily::Default,
        }
    }

    /// Lower-case name of the dialect, as used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::MySQL => "mysql",
            Dialect::TiDB => "tidb",
            Dialect::MariaDB => "mariadb",
            Dialect::PostgreSQL => "postgresql",
            Dialect::CockroachDB => "cockroachdb",
            Dialect::YugabyteDB => "yugabytedb",
            Dialect::SQLite => "sqlite",
            Dialect::Derby => "derby",
            Dialect::H2 => "h2",
            Dialect::HSQLDB => "hsqldb",
            Dialect::Cubrid => "cubrid",
            Dialect::Firebird => "firebird",
            Dialect::DuckDB => "duckdb",
            Dialect::Oracle => "oracle",
            Dialect::SqlServer => "sqlserver",
            Dialect::Default => "default",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = IrError;

    /// Parse a dialect name (case-insensitive). Common aliases are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dialect = match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Dialect::MySQL,
            "tidb" => Dialect::TiDB,
            "mariadb" => Dialect::MariaDB,
            "postgresql" | "postgres" | "pg" => Dialect::PostgreSQL,
            "cockroachdb" | "cockroach" => Dialect::CockroachDB,
            "yugabytedb" | "yugabyte" => Dialect::YugabyteDB,
            "sqlite" | "sqlite3" => Dialect::SQLite,
            "derby" => Dialect::Derby,
            "h2" => Dialect::H2,
            "hsqldb" | "hsql" => Dialect::HSQLDB,
            "cubrid" => Dialect::Cubrid,
            "firebird" => Dialect::Firebird,
            "duckdb" => Dialect::DuckDB,
            "oracle" => Dialect::Oracle,
            "sqlserver" | "mssql" | "tsql" => Dialect::SqlServer,
            "default" | "ansi" => Dialect::Default,
            _ => return Err(IrError::UnknownDialect(s.to_string())),
        };
        Ok(dialect)
    }
}

/// Dialect family groupings
///
/// Families are the unit of translation behavior: two dialects in the same
/// family always receive the same spelling for a given term.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, VariantArray,
)]
#[serde(rename_all = "lowercase")]
pub enum DialectFamily {
    Cubrid,
    Derby,
    DuckDb,
    Firebird,
    H2,
    Hsqldb,
    MySQL,
    Oracle,
    PostgreSQL,
    SQLite,
    SqlServer,
    /// Dialects without family specific behavior
    Default,
}

impl DialectFamily {
    /// All known families, in declaration order
    pub const ALL: &'static [DialectFamily] = <DialectFamily as VariantArray>::VARIANTS;

    /// How identifiers are delimited by databases of this family
    pub fn identifier_quote(&self) -> IdentifierQuote {
        match self {
            DialectFamily::MySQL => IdentifierQuote::Backtick,
            DialectFamily::SqlServer => IdentifierQuote::Bracket,
            _ => IdentifierQuote::DoubleQuote,
        }
    }
}

/// Identifier delimiter styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierQuote {
    /// `"identifier"` (ANSI)
    DoubleQuote,
    /// `` `identifier` ``
    Backtick,
    /// `[identifier]`
    Bracket,
}

impl IdentifierQuote {
    /// Delimit a single identifier, doubling any embedded closing delimiter
    pub fn quote(&self, ident: &str) -> String {
        match self {
            IdentifierQuote::DoubleQuote => format!("\"{}\"", ident.replace('"', "\"\"")),
            IdentifierQuote::Backtick => format!("`{}`", ident.replace('`', "``")),
            IdentifierQuote::Bracket => format!("[{}]", ident.replace(']', "]]")),
        }
    }
}
