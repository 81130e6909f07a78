//! Unit tests for the AST types, list folding and canonical formatting.

use super::{
    ast::{Derive, NameValue, Value},
    literals::{fold_literals, ListTypeError, Literal, LiteralKind},
};

#[test]
fn test_fold_integers() {
    let value = fold_literals(vec![
        Literal::Integer(1),
        Literal::Integer(2),
        Literal::Integer(3),
    ]);

    assert_eq!(value, Ok(Value::IntegerList(vec![1, 2, 3])));
}

#[test]
fn test_fold_widens_integers_when_a_float_is_present() {
    let value = fold_literals(vec![
        Literal::Float(1.1),
        Literal::Integer(2),
        Literal::Integer(3),
    ]);

    assert_eq!(value, Ok(Value::FloatList(vec![1.1, 2.0, 3.0])));
}

#[test]
fn test_fold_widens_regardless_of_float_position() {
    let value = fold_literals(vec![Literal::Integer(7), Literal::Float(0.5)]);

    assert_eq!(value, Ok(Value::FloatList(vec![7.0, 0.5])));
}

#[test]
fn test_fold_strings_and_bools() {
    assert_eq!(
        fold_literals(vec![
            Literal::String("a".to_string()),
            Literal::String("b".to_string()),
        ]),
        Ok(Value::StringList(vec!["a".to_string(), "b".to_string()]))
    );
    assert_eq!(
        fold_literals(vec![
            Literal::Bool(true),
            Literal::Bool(false),
            Literal::Bool(false),
        ]),
        Ok(Value::BoolList(vec![true, false, false]))
    );
}

#[test]
fn test_fold_rejects_mixed_families() {
    let error = fold_literals(vec![
        Literal::Bool(true),
        Literal::Bool(false),
        Literal::String("x".to_string()),
    ]);

    assert_eq!(
        error,
        Err(ListTypeError::Mixed {
            index: 2,
            expected: LiteralKind::Bool,
            received: LiteralKind::String,
        })
    );
}

#[test]
fn test_fold_rejects_numbers_among_strings() {
    let error = fold_literals(vec![Literal::Integer(1), Literal::String("1".to_string())]);

    assert!(matches!(error, Err(ListTypeError::Mixed { index: 1, .. })));
}

#[test]
fn test_fold_empty() {
    assert_eq!(fold_literals(vec![]), Err(ListTypeError::Empty));
}

#[test]
fn test_widened() {
    assert_eq!(Literal::Integer(3).widened(), Some(3.0));
    assert_eq!(Literal::Float(2.5).widened(), Some(2.5));
    assert_eq!(Literal::Bool(true).widened(), None);
}

#[test]
fn test_display_bare_identity() {
    assert_eq!(Derive::new("ident").to_string(), "#[ident]");
}

#[test]
fn test_display_attributes() {
    let derive = Derive::new("ident")
        .with_attr("s", Value::String("v".to_string()))
        .with_attr("i", Value::Integer(1))
        .with_attr("f", Value::Float(2.0))
        .with_attr("b", Value::Bool(false))
        .with_attr("fl", Value::FloatList(vec![1.1, 2.0]))
        .with_attr("sl", Value::StringList(vec!["x".to_string()]))
        .with_attr(
            "m",
            Value::Map(vec![
                NameValue::new("a", Value::BoolList(vec![true])),
                NameValue::new("e", Value::Map(vec![])),
            ]),
        );

    assert_eq!(
        derive.to_string(),
        r#"#[ident(s="v", i=1, f=2.0, b=false, fl=[1.1, 2.0], sl=["x"], m={a=[true], e={}})]"#
    );
}

#[test]
fn test_lookup_helpers() {
    let derive = Derive::new("ident")
        .with_attr("k", Value::Integer(1))
        .with_attr("k", Value::Integer(2))
        .with_attr(
            "m",
            Value::Map(vec![NameValue::new("inner", Value::Bool(true))]),
        );

    assert_eq!(derive.get("k"), Some(&Value::Integer(1)));
    assert_eq!(derive.get("missing"), None);
    assert_eq!(
        derive.get("m").and_then(|m| m.get("inner")),
        Some(&Value::Bool(true))
    );
    assert_eq!(Value::Integer(1).get("inner"), None);
}

#[test]
fn test_kind_names() {
    assert_eq!(Value::FloatList(vec![]).kind_name(), "FloatList");
    assert_eq!(Value::Map(vec![]).kind_name(), "Map");
}

#[test]
fn test_serializes_to_json() {
    let derive = Derive::new("ident").with_attr("k", Value::IntegerList(vec![1, 2]));

    assert_eq!(
        serde_json::to_string(&derive).unwrap(),
        r#"{"identity":"ident","attrs":[{"name":"k","value":{"IntegerList":[1,2]}}]}"#
    );
}
