// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Translation rules
//!
//! A [`TranslationRule`] describes how a single term is spelled: an optional
//! explicit default plus a list of family specific overrides. Rules are plain
//! `static` data; the registry owns the resolution logic.

use sqlterm_ir::DialectFamily;

use crate::Term;
use crate::error::{RegistryError, RegistryResult};

/// Families lacking native `*_LENGTH` functions
const LENGTH_FAMILIES: &[DialectFamily] = &[DialectFamily::Derby, DialectFamily::SQLite];

/// Families spelling `LISTAGG` as `GROUP_CONCAT`
const GROUP_CONCAT_FAMILIES: &[DialectFamily] = &[
    DialectFamily::Cubrid,
    DialectFamily::H2,
    DialectFamily::Hsqldb,
    DialectFamily::MySQL,
    DialectFamily::SQLite,
];

static DERIVED: TranslationRule = TranslationRule::derived();

static ATAN2: TranslationRule = TranslationRule::explicit("atan2");

static BIT_LENGTH_OVERRIDES: [Override; 1] = [Override::new(LENGTH_FAMILIES, "8 * length")];
static BIT_LENGTH: TranslationRule =
    TranslationRule::derived().with_overrides(&BIT_LENGTH_OVERRIDES);

static CHAR_LENGTH_OVERRIDES: [Override; 1] = [Override::new(LENGTH_FAMILIES, "length")];
static CHAR_LENGTH: TranslationRule =
    TranslationRule::derived().with_overrides(&CHAR_LENGTH_OVERRIDES);

static LIST_AGG_OVERRIDES: [Override; 2] = [
    Override::new(GROUP_CONCAT_FAMILIES, "group_concat"),
    Override::new(&[DialectFamily::PostgreSQL], "string_agg"),
];
static LIST_AGG: TranslationRule =
    TranslationRule::explicit("listagg").with_overrides(&LIST_AGG_OVERRIDES);

static MODE: TranslationRule = TranslationRule::explicit("mode");

static OCTET_LENGTH_OVERRIDES: [Override; 1] = [Override::new(LENGTH_FAMILIES, "length")];
static OCTET_LENGTH: TranslationRule =
    TranslationRule::derived().with_overrides(&OCTET_LENGTH_OVERRIDES);

static ROW_NUMBER_OVERRIDES: [Override; 1] = [Override::new(&[DialectFamily::Hsqldb], "rownum")];
static ROW_NUMBER: TranslationRule =
    TranslationRule::derived().with_overrides(&ROW_NUMBER_OVERRIDES);

static STDDEV_POP: TranslationRule = TranslationRule::explicit("stddev_pop");
static STDDEV_SAMP: TranslationRule = TranslationRule::explicit("stddev_samp");
static VAR_POP: TranslationRule = TranslationRule::explicit("var_pop");
static VAR_SAMP: TranslationRule = TranslationRule::explicit("var_samp");

/// A family specific spelling of a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Override {
    /// Families receiving this spelling
    pub families: &'static [DialectFamily],
    /// Literal text emitted for those families
    pub spelling: &'static str,
}

impl Override {
    pub const fn new(families: &'static [DialectFamily], spelling: &'static str) -> Self {
        Self { families, spelling }
    }

    pub fn applies_to(&self, family: DialectFamily) -> bool {
        self.families.contains(&family)
    }
}

/// How a term is spelled across dialect families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationRule {
    /// Explicit default spelling. `None` means the lower-cased canonical name.
    pub default: Option<&'static str>,
    /// Family specific spellings, disjoint by family
    pub overrides: &'static [Override],
}

impl TranslationRule {
    /// Rule using the lower-cased canonical name everywhere
    pub const fn derived() -> Self {
        Self {
            default: None,
            overrides: &[],
        }
    }

    /// Rule with an explicitly declared default spelling
    pub const fn explicit(default: &'static str) -> Self {
        Self {
            default: Some(default),
            overrides: &[],
        }
    }

    pub const fn with_overrides(self, overrides: &'static [Override]) -> Self {
        Self {
            default: self.default,
            overrides,
        }
    }

    /// The spelling declared for `family`, if the rule overrides it
    pub fn override_for(&self, family: DialectFamily) -> Option<&'static str> {
        self.overrides
            .iter()
            .find(|o| o.applies_to(family))
            .map(|o| o.spelling)
    }

    /// Check the rule against its table invariants
    ///
    /// `default` is the resolved default spelling of `term` (explicit or
    /// derived). Every family must resolve to a non-empty spelling, no family
    /// may be claimed by two overrides, and no override may repeat the default.
    pub fn verify(&self, term: Term, default: &str) -> RegistryResult<()> {
        for &family in DialectFamily::ALL {
            let mut claimed: Option<&'static str> = None;
            for o in self.overrides.iter().filter(|o| o.applies_to(family)) {
                if let Some(first) = claimed {
                    return Err(RegistryError::ConflictingOverride {
                        term,
                        family,
                        first,
                        second: o.spelling,
                    });
                }
                if o.spelling.is_empty() {
                    return Err(RegistryError::EmptySpelling { term, family });
                }
                if o.spelling == default {
                    return Err(RegistryError::RedundantOverride {
                        term,
                        family,
                        spelling: o.spelling,
                    });
                }
                claimed = Some(o.spelling);
            }
            if claimed.is_none() && default.is_empty() {
                return Err(RegistryError::EmptySpelling { term, family });
            }
        }
        Ok(())
    }
}

impl Term {
    /// The translation rule of this term
    ///
    /// Every term is listed explicitly, so a new term does not compile until
    /// it has a rule.
    pub fn rule(self) -> &'static TranslationRule {
        match self {
            Term::Atan2 => &ATAN2,
            Term::BitLength => &BIT_LENGTH,
            Term::CharLength => &CHAR_LENGTH,
            Term::ListAgg => &LIST_AGG,
            Term::Mode => &MODE,
            Term::OctetLength => &OCTET_LENGTH,
            Term::RowNumber => &ROW_NUMBER,
            Term::StddevPop => &STDDEV_POP,
            Term::StddevSamp => &STDDEV_SAMP,
            Term::VarPop => &VAR_POP,
            Term::VarSamp => &VAR_SAMP,
            Term::ArrayAgg
            | Term::CumeDist
            | Term::DenseRank
            | Term::FirstValue
            | Term::Lag
            | Term::LastValue
            | Term::Lead
            | Term::Median
            | Term::NthValue
            | Term::Ntile
            | Term::PercentRank
            | Term::Product
            | Term::Rank => &DERIVED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_for() {
        assert_eq!(
            LIST_AGG.override_for(DialectFamily::PostgreSQL),
            Some("string_agg")
        );
        assert_eq!(
            LIST_AGG.override_for(DialectFamily::SQLite),
            Some("group_concat")
        );
        assert_eq!(LIST_AGG.override_for(DialectFamily::Oracle), None);
        assert_eq!(DERIVED.override_for(DialectFamily::Hsqldb), None);
    }

    #[test]
    fn test_verify_accepts_declared_rules() {
        for &term in Term::ALL {
            let default = term
                .rule()
                .default
                .map(str::to_string)
                .unwrap_or_else(|| term.canonical_name().to_ascii_lowercase());
            assert_eq!(term.rule().verify(term, &default), Ok(()));
        }
    }

    #[test]
    fn test_verify_rejects_conflicting_overrides() {
        static OVERRIDES: [Override; 2] = [
            Override::new(&[DialectFamily::MySQL, DialectFamily::H2], "group_concat"),
            Override::new(&[DialectFamily::H2], "listagg_h2"),
        ];
        let rule = TranslationRule::derived().with_overrides(&OVERRIDES);

        assert_eq!(
            rule.verify(Term::ListAgg, "list_agg"),
            Err(RegistryError::ConflictingOverride {
                term: Term::ListAgg,
                family: DialectFamily::H2,
                first: "group_concat",
                second: "listagg_h2",
            })
        );
    }

    #[test]
    fn test_verify_rejects_redundant_override() {
        static OVERRIDES: [Override; 1] = [Override::new(&[DialectFamily::Derby], "rank")];
        let rule = TranslationRule::derived().with_overrides(&OVERRIDES);

        assert!(matches!(
            rule.verify(Term::Rank, "rank"),
            Err(RegistryError::RedundantOverride {
                family: DialectFamily::Derby,
                ..
            })
        ));
    }

    #[test]
    fn test_verify_rejects_empty_spelling() {
        static OVERRIDES: [Override; 1] = [Override::new(&[DialectFamily::Oracle], "")];
        let rule = TranslationRule::derived().with_overrides(&OVERRIDES);

        assert_eq!(
            rule.verify(Term::Median, "median"),
            Err(RegistryError::EmptySpelling {
                term: Term::Median,
                family: DialectFamily::Oracle,
            })
        );
        assert!(matches!(
            TranslationRule::explicit("").verify(Term::Median, ""),
            Err(RegistryError::EmptySpelling { .. })
        ));
    }
}
