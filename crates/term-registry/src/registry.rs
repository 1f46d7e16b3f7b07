// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use once_cell::sync::Lazy;
use sqlterm_ir::{Dialect, DialectFamily, Name};
use tracing::{debug, trace};

use crate::Term;
use crate::error::RegistryResult;

static GLOBAL: Lazy<TermRegistry> = Lazy::new(TermRegistry::new);

/// Translation table for the term vocabulary
///
/// The registry resolves each term to the spelling expected by a dialect
/// family. It is immutable once built and can be shared freely between
/// threads.
#[derive(Debug, Clone)]
pub struct TermRegistry {
    /// Default spelling of each term, indexed by [`Term::index`]
    defaults: Vec<String>,
}

impl TermRegistry {
    /// Build the registry and verify the translation table
    ///
    /// # Panics
    ///
    /// Panics if the table violates one of its invariants (see
    /// [`TermRegistry::verify`]). The table is static data, so this happens
    /// on first use or never.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlterm_registry::{Term, TermRegistry};
    /// use sqlterm_ir::Dialect;
    ///
    /// let registry = TermRegistry::new();
    /// assert_eq!(registry.translate(Term::CharLength, Dialect::SQLite), "length");
    /// ```
    pub fn new() -> Self {
        let defaults = Term::ALL
            .iter()
            .map(|term| match term.rule().default {
                Some(explicit) => explicit.to_string(),
                None => term.canonical_name().to_ascii_lowercase(),
            })
            .collect();
        let registry = Self { defaults };

        if let Err(e) = registry.verify() {
            panic!("Invalid term translation table: {}", e);
        }
        debug!("Term registry initialized with {} terms", Term::ALL.len());

        registry
    }

    /// The process wide registry, built on first use
    pub fn global() -> &'static TermRegistry {
        &GLOBAL
    }

    /// Check every term against the table invariants
    ///
    /// For every term and every family the spelling must be non-empty,
    /// overrides must not claim the same family twice and must not repeat
    /// the default spelling.
    pub fn verify(&self) -> RegistryResult<()> {
        for &term in Term::ALL {
            term.rule().verify(term, self.default_spelling(term))?;
        }
        debug!("Verified translation rules for {} families", DialectFamily::ALL.len());
        Ok(())
    }

    /// The spelling used by families without an override
    pub fn default_spelling(&self, term: Term) -> &str {
        &self.defaults[term.index()]
    }

    /// Translate a term for a dialect family
    pub fn translate_family(&self, term: Term, family: DialectFamily) -> &str {
        let spelling = match term.rule().override_for(family) {
            Some(spelling) => spelling,
            None => self.default_spelling(term),
        };
        trace!("Translated {} for {:?} as '{}'", term, family, spelling);
        spelling
    }

    /// Translate a term to the literal text expected by `dialect`
    ///
    /// The result is a bare function name or expression fragment; callers
    /// supply the argument list.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sqlterm_registry::{Term, TermRegistry};
    /// # use sqlterm_ir::Dialect;
    /// let registry = TermRegistry::global();
    /// assert_eq!(registry.translate(Term::ListAgg, Dialect::MySQL), "group_concat");
    /// assert_eq!(registry.translate(Term::ListAgg, Dialect::PostgreSQL), "string_agg");
    /// assert_eq!(registry.translate(Term::ListAgg, Dialect::Oracle), "listagg");
    /// ```
    pub fn translate(&self, term: Term, dialect: Dialect) -> String {
        self.translate_family(term, dialect.family()).to_string()
    }

    /// The raw term identifier as a structured name
    pub fn to_name(&self, term: Term) -> Name {
        Name::unqualified(term.canonical_name())
    }

    /// Declared overrides of a term, one entry per family
    pub fn overrides(&self, term: Term) -> impl Iterator<Item = (DialectFamily, &'static str)> {
        term.rule()
            .overrides
            .iter()
            .flat_map(|o| o.families.iter().map(move |&family| (family, o.spelling)))
    }
}

impl Default for TermRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use strum::EnumCount;

    use super::*;

    #[test]
    fn test_new_registry() {
        let registry = TermRegistry::new();
        assert_eq!(registry.defaults.len(), Term::ALL.len());
        assert!(registry.verify().is_ok());
    }

    #[test]
    fn test_defaults_cover_every_variant() {
        let registry = TermRegistry::new();
        assert_eq!(registry.defaults.len(), Term::COUNT);
        for &term in Term::ALL {
            assert!(!registry.default_spelling(term).is_empty());
        }
    }

    #[test]
    fn test_default_spelling_is_lowercased_name() {
        let registry = TermRegistry::new();
        assert_eq!(registry.default_spelling(Term::CharLength), "char_length");
        assert_eq!(registry.default_spelling(Term::NthValue), "nth_value");
    }

    #[test]
    fn test_explicit_default() {
        let registry = TermRegistry::new();
        assert_eq!(registry.default_spelling(Term::ListAgg), "listagg");
        assert_eq!(registry.default_spelling(Term::Mode), "mode");
    }

    #[test]
    fn test_translate_family() {
        let registry = TermRegistry::global();
        assert_eq!(
            registry.translate_family(Term::BitLength, DialectFamily::Derby),
            "8 * length"
        );
        assert_eq!(
            registry.translate_family(Term::BitLength, DialectFamily::Oracle),
            "bit_length"
        );
    }

    #[test]
    fn test_overrides_flattened_per_family() {
        let registry = TermRegistry::global();
        let overrides: Vec<_> = registry.overrides(Term::ListAgg).collect();
        assert_eq!(overrides.len(), 6);
        assert!(overrides.contains(&(DialectFamily::PostgreSQL, "string_agg")));
        assert!(overrides.contains(&(DialectFamily::Hsqldb, "group_concat")));
        assert_eq!(registry.overrides(Term::Atan2).count(), 0);
    }

    #[test]
    fn test_to_name() {
        let name = TermRegistry::global().to_name(Term::RowNumber);
        assert!(!name.is_qualified());
        assert_eq!(name.last(), "ROW_NUMBER");
    }
}
