// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for parsing configuration files and reading typed values.

mod common;

use common::{create_temp_config, init_tracing, TEST_CONFIG};
use kvparse::prelude::*;

/// Parses the shared fixture from a real file on disk.
fn fixture() -> Store {
    init_tracing();
    let file = create_temp_config(TEST_CONFIG);
    let mut store = Store::new();
    store.parse_file(file.path()).unwrap();
    store
}

fn kind<T: std::fmt::Debug>(result: Result<T>) -> ErrorKind {
    result.unwrap_err().kind()
}

// ---------------------------------------------------------------------------
// Syntax
// ---------------------------------------------------------------------------

#[test]
fn test_syntax_missing_delimiter() {
    let file = create_temp_config("good: 1\njusttext\n");
    let err = Store::new()
        .parse_source(&mut FileSource::from_file(file.path()))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(
        err.to_string(),
        format!("syntax error in {} (2): justtext", file.path().display())
    );
}

#[test]
fn test_syntax_missing_value_and_delimiter() {
    let mut store = Store::new();
    assert_eq!(kind(store.parse_str("mem", "keyword\n")), ErrorKind::Syntax);
    assert_eq!(kind(store.parse_str("mem", "keyword value\n")), ErrorKind::Syntax);
}

#[test]
fn test_syntax_valid_identifiers() {
    let content = "\
key.word: value
key_word: value
key-word: value
_keyword: value
k--ey.word_--_: value
keyword': value
keyword'': value
K: value
";
    let mut store = Store::new();
    store.parse_str("identifiers", content).unwrap();

    for keyword in [
        "key.word",
        "key_word",
        "key-word",
        "_keyword",
        "k--ey.word_--_",
        "keyword'",
        "keyword''",
        "K",
    ] {
        assert_eq!(store.require_string(keyword).unwrap(), "value", "{}", keyword);
    }
}

#[test]
fn test_syntax_invalid_identifiers() {
    for line in [
        "1bad: value",
        "bad key: value",
        "-bad: value",
        "bad'key: value",
        "bad$: value",
        ": value",
    ] {
        let err = Store::new().parse_str("mem", line).unwrap_err();
        assert!(
            matches!(
                err,
                KvError::Syntax {
                    issue: kvparse::domain::SyntaxIssue::InvalidKeyword(_),
                    ..
                }
            ),
            "line {:?} gave {:?}",
            line,
            err
        );
    }
}

#[test]
fn test_syntax_error_reports_line_number_after_blank_lines() {
    let err = Store::new()
        .parse_str("ga.cfg", "# header\n\n\na: 1\n\n9lives: 3 # cat\n")
        .unwrap_err();
    match err {
        KvError::Syntax {
            source_name,
            line_number,
            line,
            ..
        } => {
            assert_eq!(source_name, "ga.cfg");
            assert_eq!(line_number, 6);
            assert_eq!(line, "9lives: 3 ");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error_not_syntax() {
    let dir = tempfile::tempdir().unwrap();
    let err = Store::new()
        .parse_source(&mut FileSource::from_file(dir.path().join("none.cfg")))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_comment_stripping() {
    let mut store = Store::new();
    store
        .parse_str("mem", "k: value # trailing comment\n")
        .unwrap();
    assert_eq!(store.require_string("k").unwrap(), "value");
}

#[test]
fn test_hash_inside_quotes_still_starts_comment() {
    let store = fixture();
    assert_eq!(store.require_string("string6").unwrap(), "\"quoted");
}

// ---------------------------------------------------------------------------
// Integers
// ---------------------------------------------------------------------------

#[test]
fn test_integer_delimiter_and_spacing_variants() {
    let store = fixture();
    for (keyword, expected) in [
        ("integer1", 1),
        ("integer2", 2),
        ("integer3", 3),
        ("integer4", 4),
        ("integer5", 5),
        ("integer6", 6),
        ("integer7", -7),
        ("integer8", -8),
        ("integer15", 15),
    ] {
        assert_eq!(store.require_integer(keyword).unwrap(), expected, "{}", keyword);
    }
}

#[test]
fn test_integer_leading_zero_is_decimal() {
    let store = fixture();
    assert_eq!(store.require_integer("integer9").unwrap(), 9);
    assert_eq!(store.require_integer("integer9a").unwrap(), 10);
}

#[test]
fn test_integer_illegal_values() {
    let store = fixture();
    assert_eq!(kind(store.get_integer("integer10")), ErrorKind::IllegalValue);
    assert_eq!(kind(store.get_integer("integer11")), ErrorKind::IllegalValue);
    assert_eq!(kind(store.get_integer("integer12")), ErrorKind::IllegalValue);
}

#[test]
fn test_integer_duplicate_is_ambiguous() {
    let store = fixture();
    assert_eq!(
        kind(store.get_integer("integer13")),
        ErrorKind::AmbiguousKeyword
    );
}

#[test]
fn test_missing_required() {
    let store = fixture();
    assert_eq!(
        kind(store.require_integer("integer99")),
        ErrorKind::MissingKeyword
    );
    assert_eq!(
        kind(store.get("integer99", ValueType::Integer, true)),
        ErrorKind::MissingKeyword
    );
}

#[test]
fn test_optional_default_is_preserved() {
    let store = fixture();
    let mut ivalue = 42;
    if let Some(found) = store.get_integer("integer99").unwrap() {
        ivalue = found;
    }
    assert_eq!(ivalue, 42);
    assert_eq!(store.get("integer99", ValueType::Integer, false).unwrap(), None);
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

#[test]
fn test_string_parameters() {
    let store = fixture();
    assert_eq!(store.require_string("string1").unwrap(), "hello");
    assert_eq!(store.require_string("string2").unwrap(), "100");
    assert_eq!(
        store.require_string("string3").unwrap(),
        "This is a multiword string"
    );
}

#[test]
fn test_string_optional() {
    let store = fixture();
    let svalue = store
        .get_string("stringXXXX")
        .unwrap()
        .unwrap_or_else(|| "hello".to_string());
    assert_eq!(svalue, "hello");
}

#[test]
fn test_string_only_quote_is_rejected() {
    let store = fixture();
    assert_eq!(kind(store.get_string("string4")), ErrorKind::IllegalValue);
}

#[test]
fn test_string_only_double_quotes_is_empty() {
    let store = fixture();
    assert_eq!(store.require_string("string5").unwrap(), "");
}

#[test]
fn test_keyword_with_trailing_apostrophes() {
    let store = fixture();
    assert_eq!(store.require_string("key.with''").unwrap(), "primes");
}

// ---------------------------------------------------------------------------
// Unsigned integers
// ---------------------------------------------------------------------------

#[test]
fn test_unsigned_parameter() {
    let store = fixture();
    assert_eq!(store.require_unsigned("uint-param1").unwrap(), 99);
}

#[test]
fn test_unsigned_negative_is_illegal() {
    let store = fixture();
    assert_eq!(
        kind(store.require_unsigned("uint-param2")),
        ErrorKind::IllegalValue
    );
}

#[test]
fn test_unsigned_string_is_illegal() {
    let store = fixture();
    assert_eq!(
        kind(store.get_unsigned("uint-param3")),
        ErrorKind::IllegalValue
    );
}

// ---------------------------------------------------------------------------
// Doubles
// ---------------------------------------------------------------------------

#[test]
fn test_double_parameters() {
    let store = fixture();
    for (keyword, expected) in [
        ("double_param", 3.14159),
        ("double_param2", 2001.0),
        ("double_param5", -0.001),
        ("double_param6", 0.001),
        ("double_param7", 0.5),
        ("double_param8", -0.5),
        ("double_param9", 0.5),
    ] {
        let value = store.require_double(keyword).unwrap();
        assert!((value - expected).abs() < 1e-12, "{} = {}", keyword, value);
    }
}

#[test]
fn test_double_illegal_values() {
    let store = fixture();
    assert_eq!(
        kind(store.get_double("double_param-3")),
        ErrorKind::IllegalValue
    );
    assert_eq!(
        kind(store.get_double("double_param-4")),
        ErrorKind::IllegalValue
    );
}

// ---------------------------------------------------------------------------
// Booleans
// ---------------------------------------------------------------------------

#[test]
fn test_bool_parameters() {
    let store = fixture();
    for (keyword, expected) in [
        ("bool1", true),
        ("bool2", false),
        ("bool3", true),
        ("bool4", false),
        ("bool5", true),
        ("bool6", false),
        ("bool7", true),
        ("bool8", false),
        ("bool10", true),
        ("bool11", false),
    ] {
        assert_eq!(store.require_bool(keyword).unwrap(), expected, "{}", keyword);
    }
}

#[test]
fn test_bool_invalid() {
    let store = fixture();
    let err = store.get_bool("bool9").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalValue);
    assert!(err.to_string().contains("maybe"));
}

#[test]
fn test_bool_optional_keeps_default() {
    let store = fixture();
    for default in [true, false] {
        let bvalue = store.get_bool("boolXXX").unwrap().unwrap_or(default);
        assert_eq!(bvalue, default);
    }
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[test]
fn test_string_list() {
    let store = fixture();
    assert_eq!(
        store.require_string_list("string_vals").unwrap(),
        vec!["alpha", "bravo", "delta"]
    );
}

#[test]
fn test_string_list_keeps_raw_values() {
    let store = fixture();
    assert_eq!(
        store.require_string_list("string_vals2").unwrap(),
        vec!["alpha", "\"bravo delta\"", "gamma"]
    );
}

#[test]
fn test_string_list_of_single_value() {
    let store = fixture();
    assert_eq!(store.require_string_list("string1").unwrap(), vec!["hello"]);
}

#[test]
fn test_token_lists() {
    let store = fixture();
    assert_eq!(store.require_integer_list("int_vec").unwrap(), vec![1, 2, 3, -4]);
    assert_eq!(store.require_unsigned_list("uint_vec").unwrap(), vec![10, 20, 30]);
    assert_eq!(
        store.require_double_list("double_vec").unwrap(),
        vec![0.5, 1.5, -2.0]
    );
    assert_eq!(
        store.require_bool_list("bool_vec").unwrap(),
        vec![true, false, true]
    );
    assert_eq!(
        store.require_token_list("word_vec").unwrap(),
        vec!["red", "green", "blue"]
    );
}

#[test]
fn test_token_list_failure_is_total() {
    let store = fixture();
    assert_eq!(
        kind(store.get_integer_list("bad_vec")),
        ErrorKind::IllegalValue
    );
    assert_eq!(
        kind(store.get_unsigned_list("int_vec")),
        ErrorKind::IllegalValue
    );
}

#[test]
fn test_token_list_requires_unique_value() {
    let store = fixture();
    assert_eq!(
        kind(store.get_token_list("string_vals")),
        ErrorKind::AmbiguousKeyword
    );
}

#[test]
fn test_empty_token_list() {
    let store = fixture();
    assert_eq!(store.require_integer_list("empty_vec").unwrap(), Vec::<i64>::new());
}

// ---------------------------------------------------------------------------
// Store behaviour
// ---------------------------------------------------------------------------

#[test]
fn test_insertion_accumulation() {
    let mut store = Store::new();
    store.parse_str("first", "k: a").unwrap();
    store.parse_str("second", "k: b").unwrap();

    assert!(store.keyword_exists("k"));
    assert!(!store.has_unique_value("k"));
    assert_eq!(store.require_string_list("k").unwrap(), vec!["a", "b"]);
}

#[test]
fn test_clear_and_reparse_yields_same_contents() {
    let file = create_temp_config(TEST_CONFIG);
    let mut store = Store::new();

    store
        .parse_source(&mut FileSource::from_file(file.path()))
        .unwrap();
    let first = store.clone();

    store.clear();
    assert!(store.is_empty());
    store
        .parse_source(&mut FileSource::from_file(file.path()))
        .unwrap();
    assert_eq!(store, first);
}

#[test]
fn test_dump_lists_every_keyword() {
    let store = fixture();
    let mut out = Vec::new();
    store.dump(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), store.len());
    assert!(text.contains("Keyword: string_vals  |  Values: alpha bravo delta\n"));
    assert!(text.contains("Keyword: integer13  |  Values: 13 14\n"));
}

#[test]
fn test_builder_layers_files() {
    let defaults = create_temp_config("generations: 100\nelitism: no\n");
    let overrides = create_temp_config("operators: swap\n");

    let store = StoreBuilder::new()
        .with_file(defaults.path())
        .with_file(overrides.path())
        .with_text("inline", "operators: invert\n")
        .build()
        .unwrap();

    assert_eq!(store.require_integer("generations").unwrap(), 100);
    assert!(!store.require_bool("elitism").unwrap());
    assert_eq!(
        store.require_string_list("operators").unwrap(),
        vec!["swap", "invert"]
    );
}

#[test]
fn test_polymorphic_get_matches_typed_getters() {
    let store = fixture();
    assert_eq!(
        store.get("string1", ValueType::String, true).unwrap(),
        Some(TypedValue::String("hello".to_string()))
    );
    assert_eq!(
        store.get("uint-param1", ValueType::Unsigned, true).unwrap(),
        Some(TypedValue::Unsigned(99))
    );
    assert_eq!(
        store.get("int_vec", ValueType::IntegerList, true).unwrap(),
        Some(TypedValue::IntegerList(vec![1, 2, 3, -4]))
    );
    assert_eq!(
        kind(store.get("integer13", ValueType::Integer, false)),
        ErrorKind::AmbiguousKeyword
    );
}
