// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Term vocabulary
//!
//! The closed set of standard SQL expressions whose spelling depends on the
//! target dialect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlterm_ir::{Dialect, FunctionType, Name};
use strum::{EnumCount, VariantArray};

use crate::error::RegistryError;
use crate::registry::TermRegistry;

/// A standard SQL expression with dialect specific spellings
///
/// Variants are declared in alphabetical order of their canonical names;
/// [`Term::ALL`] and [`Term::index`] rely on that order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumCount,
    VariantArray,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Term {
    ArrayAgg,
    Atan2,
    BitLength,
    CharLength,
    CumeDist,
    DenseRank,
    FirstValue,
    Lag,
    LastValue,
    Lead,
    ListAgg,
    Median,
    Mode,
    NthValue,
    Ntile,
    OctetLength,
    PercentRank,
    Product,
    Rank,
    RowNumber,
    StddevPop,
    StddevSamp,
    VarPop,
    VarSamp,
}

impl Term {
    /// The complete vocabulary, in declaration order
    ///
    /// Generated from the enum itself, so it cannot miss a variant.
    pub const ALL: &'static [Term] = <Term as VariantArray>::VARIANTS;

    /// Position of the term in [`Term::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The upper-case identifier of the term, e.g. `CHAR_LENGTH`
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Term::ArrayAgg => "ARRAY_AGG",
            Term::Atan2 => "ATAN2",
            Term::BitLength => "BIT_LENGTH",
            Term::CharLength => "CHAR_LENGTH",
            Term::CumeDist => "CUME_DIST",
            Term::DenseRank => "DENSE_RANK",
            Term::FirstValue => "FIRST_VALUE",
            Term::Lag => "LAG",
            Term::LastValue => "LAST_VALUE",
            Term::Lead => "LEAD",
            Term::ListAgg => "LIST_AGG",
            Term::Median => "MEDIAN",
            Term::Mode => "MODE",
            Term::NthValue => "NTH_VALUE",
            Term::Ntile => "NTILE",
            Term::OctetLength => "OCTET_LENGTH",
            Term::PercentRank => "PERCENT_RANK",
            Term::Product => "PRODUCT",
            Term::Rank => "RANK",
            Term::RowNumber => "ROW_NUMBER",
            Term::StddevPop => "STDDEV_POP",
            Term::StddevSamp => "STDDEV_SAMP",
            Term::VarPop => "VAR_POP",
            Term::VarSamp => "VAR_SAMP",
        }
    }

    /// Kind of function the term denotes
    pub fn kind(self) -> FunctionType {
        match self {
            Term::Atan2 | Term::BitLength | Term::CharLength | Term::OctetLength => {
                FunctionType::Scalar
            }
            Term::ArrayAgg
            | Term::ListAgg
            | Term::Median
            | Term::Mode
            | Term::Product
            | Term::StddevPop
            | Term::StddevSamp
            | Term::VarPop
            | Term::VarSamp => FunctionType::Aggregate,
            Term::CumeDist
            | Term::DenseRank
            | Term::FirstValue
            | Term::Lag
            | Term::LastValue
            | Term::Lead
            | Term::NthValue
            | Term::Ntile
            | Term::PercentRank
            | Term::Rank
            | Term::RowNumber => FunctionType::Window,
        }
    }

    /// Translate the term to its dialect specific spelling
    ///
    /// Shorthand for [`TermRegistry::translate`] on the global registry.
    pub fn translate(self, dialect: Dialect) -> String {
        TermRegistry::global().translate(self, dialect)
    }

    /// The term as an unqualified identifier, e.g. `CHAR_LENGTH`
    pub fn to_name(self) -> Name {
        TermRegistry::global().to_name(self)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for Term {
    type Err = RegistryError;

    /// Parse a canonical name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Term::ALL
            .iter()
            .copied()
            .find(|t| t.canonical_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| RegistryError::UnknownTerm(s.to_string()))
    }
}
