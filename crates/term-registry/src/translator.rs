// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Translator
//!
//! A [`Translator`] binds a [`TermRegistry`] to one target dialect, so that a
//! renderer working on a single statement does not have to thread the dialect
//! through every call.

use sqlterm_ir::Dialect;

use crate::Term;
use crate::config::TranslatorConfig;
use crate::registry::TermRegistry;

/// Term translation for a fixed target dialect
#[derive(Debug, Clone)]
pub struct Translator<'r> {
    registry: &'r TermRegistry,
    config: TranslatorConfig,
}

impl Translator<'static> {
    /// Create a translator backed by the global registry
    pub fn new(config: TranslatorConfig) -> Self {
        Self::with_registry(TermRegistry::global(), config)
    }

    /// Create a translator for `dialect` with default settings
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new(TranslatorConfig::new(dialect))
    }
}

impl<'r> Translator<'r> {
    pub fn with_registry(registry: &'r TermRegistry, config: TranslatorConfig) -> Self {
        Self { registry, config }
    }

    pub fn dialect(&self) -> Dialect {
        self.config.dialect
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// The dialect specific spelling of `term`
    pub fn translate(&self, term: Term) -> String {
        self.registry.translate(term, self.config.dialect)
    }

    /// The raw term identifier, delimited when `quote_names` is set
    pub fn name(&self, term: Term) -> String {
        let name = self.registry.to_name(term);
        if self.config.quote_names {
            name.quoted(self.config.dialect)
        } else {
            name.to_string()
        }
    }
}
