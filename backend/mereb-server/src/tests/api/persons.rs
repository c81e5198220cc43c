use crate::{CreatePersonRequest, PersonDto, UpdatePersonRequest};

use mereb_core::{Person, PersonCreate};

use googletest::prelude::*;

#[test]
fn given_full_body_when_decoding_create_then_fields_copied() {
    // Given
    let body = r#"{"name":"Ana","age":30,"hobbies":["reading","chess"]}"#;

    // When
    let req: CreatePersonRequest = serde_json::from_str(body).unwrap();
    let create = PersonCreate::from(req);

    // Then
    assert_that!(
        create,
        eq(&PersonCreate::new(
            "Ana",
            30,
            vec!["reading".to_string(), "chess".to_string()]
        ))
    );
}

#[test]
fn given_missing_and_null_fields_when_decoding_create_then_zero_values() {
    let req: CreatePersonRequest = serde_json::from_str(r#"{"name":null}"#).unwrap();
    let create = PersonCreate::from(req);

    assert_that!(create, eq(&PersonCreate::default()));
}

#[test]
fn given_wrong_type_when_decoding_update_then_error() {
    let result = serde_json::from_str::<UpdatePersonRequest>(r#"{"name":"Ana","age":"thirty"}"#);

    assert_that!(result, err(anything()));
}

#[test]
fn given_update_body_when_converting_then_fields_copied() {
    let req: UpdatePersonRequest =
        serde_json::from_str(r#"{"name":"Bo","age":0,"hobbies":["x"]}"#).unwrap();
    let create = PersonCreate::from(req);

    assert_that!(create.name, eq("Bo"));
    assert_that!(create.age, eq(0));
    assert_that!(create.hobbies, elements_are![eq("x")]);
}

#[test]
fn given_persons_when_mapping_list_then_order_preserved() {
    // Given
    let persons = vec![
        Person::new("1".to_string(), "A".to_string(), 1, vec!["a".to_string()]),
        Person::new("2".to_string(), "B".to_string(), 2, vec!["b".to_string()]),
    ];

    // When
    let dtos = PersonDto::from_list(persons);

    // Then
    let ids: Vec<&str> = dtos.iter().map(|d| d.id.as_str()).collect();
    assert_that!(ids, elements_are![eq(&"1"), eq(&"2")]);
}

#[test]
fn given_no_persons_when_mapping_list_then_serializes_as_empty_array() {
    let dtos = PersonDto::from_list(Vec::new());

    assert_that!(serde_json::to_string(&dtos).unwrap(), eq("[]"));
}
