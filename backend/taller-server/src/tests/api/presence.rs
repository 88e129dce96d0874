use crate::CreateUsuarioRequest;
use crate::api::presence::{required_id, required_text};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use serde_json::{Value, json};

#[test]
fn given_missing_or_empty_text_when_checked_then_absent() {
    assert_that!(required_text(None), none());
    assert_that!(required_text(Some(&Value::Null)), none());
    assert_that!(required_text(Some(&json!(""))), none());
    assert_that!(required_text(Some(&json!(false))), none());
    assert_that!(required_text(Some(&json!(0))), none());
    assert_that!(required_text(Some(&json!(["Ana"]))), none());
}

#[test]
fn given_text_or_number_when_checked_then_present() {
    assert_eq!(required_text(Some(&json!("Ana"))), Some("Ana".to_string()));
    assert_eq!(required_text(Some(&json!(" "))), Some(" ".to_string()));
    assert_eq!(required_text(Some(&json!(42))), Some("42".to_string()));
}

#[test]
fn given_falsy_ids_when_checked_then_absent() {
    for value in [json!(null), json!(0), json!(""), json!(false), json!("0")] {
        assert_that!(required_id(Some(&value)), none());
    }
    assert_that!(required_id(None), none());
}

#[test]
fn given_non_integer_ids_when_checked_then_absent() {
    for value in [json!(7.5), json!("siete"), json!({ "id": 7 }), json!(true)] {
        assert_that!(required_id(Some(&value)), none());
    }
}

#[test]
fn given_integer_or_numeric_string_when_checked_then_id() {
    assert_that!(required_id(Some(&json!(7))), some(eq(7)));
    assert_that!(required_id(Some(&json!("12"))), some(eq(12)));
    assert_that!(required_id(Some(&json!(-3))), some(eq(-3)));
}

#[test]
fn given_explicit_null_uuid_when_deserialized_then_kept_apart_from_missing() {
    let sent: CreateUsuarioRequest = serde_json::from_value(json!({ "uuid": null })).unwrap();
    let missing: CreateUsuarioRequest = serde_json::from_value(json!({})).unwrap();

    assert_eq!(sent.uuid, Some(Value::Null));
    assert_that!(missing.uuid, none());
}
