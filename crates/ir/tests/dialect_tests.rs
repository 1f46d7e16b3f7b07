// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Integration tests for dialects, families and names

use sqlterm_ir::{Dialect, DialectFamily, IdentifierQuote, IrError, Name};

#[test]
fn test_each_dialect_has_exactly_one_family() {
    for dialect in Dialect::ALL {
        let family = dialect.family();
        assert!(DialectFamily::ALL.contains(&family));
        assert_eq!(dialect.family(), family);
    }
}

#[test]
fn test_embedded_dialects_have_own_family() {
    assert_eq!(Dialect::SQLite.family(), DialectFamily::SQLite);
    assert_eq!(Dialect::Derby.family(), DialectFamily::Derby);
    assert_eq!(Dialect::HSQLDB.family(), DialectFamily::Hsqldb);
    assert_eq!(Dialect::H2.family(), DialectFamily::H2);
    assert_eq!(Dialect::Cubrid.family(), DialectFamily::Cubrid);
}

#[test]
fn test_default_dialect_resolves_to_default_family() {
    assert_eq!(Dialect::Default.family(), DialectFamily::Default);
}

#[test]
fn test_dialect_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Dialect::PostgreSQL).unwrap();
    assert_eq!(json, "\"postgresql\"");

    let dialect: Dialect = serde_json::from_str("\"sqlite\"").unwrap();
    assert_eq!(dialect, Dialect::SQLite);
}

#[test]
fn test_dialect_display_matches_name() {
    assert_eq!(Dialect::SqlServer.to_string(), "sqlserver");
    assert_eq!(Dialect::HSQLDB.to_string(), "hsqldb");
}

#[test]
fn test_unknown_dialect_error_message() {
    let err = "db9".parse::<Dialect>().unwrap_err();
    assert!(matches!(err, IrError::UnknownDialect(_)));
    assert_eq!(err.to_string(), "Unknown SQL dialect: 'db9'");
}

#[test]
fn test_identifier_quote_per_family() {
    assert_eq!(
        DialectFamily::MySQL.identifier_quote(),
        IdentifierQuote::Backtick
    );
    assert_eq!(
        DialectFamily::SqlServer.identifier_quote(),
        IdentifierQuote::Bracket
    );
    assert_eq!(
        DialectFamily::PostgreSQL.identifier_quote(),
        IdentifierQuote::DoubleQuote
    );
}

#[test]
fn test_name_display_is_unquoted() {
    let name = Name::new(["public", "users"]).unwrap();
    assert_eq!(name.to_string(), "public.users");
}

#[test]
fn test_name_quoted_per_dialect() {
    let name = Name::new(["public", "users"]).unwrap();
    assert_eq!(name.quoted(Dialect::PostgreSQL), "\"public\".\"users\"");
    assert_eq!(name.quoted(Dialect::MariaDB), "`public`.`users`");
    assert_eq!(name.quoted(Dialect::SqlServer), "[public].[users]");
}

#[test]
fn test_name_serde() {
    let name = Name::unqualified("ROW_NUMBER").qualified_by("pg_catalog");
    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, r#"["pg_catalog","ROW_NUMBER"]"#);
    let back: Name = serde_json::from_str(&json).unwrap();
    assert_eq!(back, name);
}

#[test]
fn test_name_deserialize_rejects_empty_name() {
    let err = serde_json::from_str::<Name>("[]").unwrap_err();
    assert!(err.to_string().contains("at least one part"));
}

#[test]
fn test_name_deserialize_rejects_empty_part() {
    let err = serde_json::from_str::<Name>(r#"["public", ""]"#).unwrap_err();
    assert!(err.to_string().contains("Name part 1 is empty"));
}
