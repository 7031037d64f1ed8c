//! End-to-end validation of realistic OpenAPI and Swagger documents

use apistar_schemas::{
    resolve_base_format, validate, BaseFormat, SchemaKind, ValidationOutcome,
};
use std::path::Path;

const PETSTORE_OPENAPI: &str = r#"openapi: "3.0.0"
info:
  title: Pet Store
  version: "1.0.0"
  description: A sample pet store API.
paths:
  /pets:
    get:
      operationId: listPets
      summary: List all pets
      tags:
        - pets
      parameters:
        - name: limit
          in: query
          required: false
          schema:
            type: integer
      responses:
        "200":
          description: A paged array of pets
    post:
      operationId: createPet
      summary: Create a pet
      tags:
        - pets
      responses:
        "201":
          description: Created
"#;

const PETSTORE_SWAGGER: &str = r#"{
  "swagger": "2.0",
  "info": {
    "title": "Pet Store",
    "version": "1.0.0"
  },
  "host": "petstore.example.com",
  "basePath": "/v1",
  "schemes": ["https"],
  "paths": {
    "/pets": {
      "get": {
        "operationId": "listPets",
        "responses": {
          "200": {"description": "ok"}
        }
      }
    }
  }
}"#;

#[test]
fn accepts_valid_openapi_yaml() {
    let outcome = validate(
        PETSTORE_OPENAPI.as_bytes(),
        SchemaKind::OpenApi,
        Some(BaseFormat::Yaml),
    )
    .unwrap();
    assert!(outcome.is_success());
}

#[test]
fn accepts_valid_swagger_json() {
    let outcome = validate(
        PETSTORE_SWAGGER.as_bytes(),
        SchemaKind::Swagger,
        Some(BaseFormat::Json),
    )
    .unwrap();
    assert!(outcome.is_success());
}

#[test]
fn rejects_openapi_without_info_version() {
    let content = br#"{"openapi": "3.0.0", "info": {"title": "Pets"}, "paths": {}}"#;
    let outcome = validate(content, SchemaKind::OpenApi, Some(BaseFormat::Json)).unwrap();
    let ValidationOutcome::Failure(diagnostic) = outcome else {
        panic!("expected failure");
    };
    assert_eq!(diagnostic.summary, "Invalid OpenAPI schema.");
    assert!(!diagnostic.messages.is_empty());
    let required = diagnostic
        .messages
        .iter()
        .find(|m| m.code == "required")
        .expect("a required violation");
    assert_eq!(required.index.to_string(), "info.version");
}

#[test]
fn rejects_swagger_with_wrong_version_literal() {
    let content = br#"{"swagger": "3.0", "info": {"title": "P", "version": "1"}, "paths": {}}"#;
    let outcome = validate(content, SchemaKind::Swagger, Some(BaseFormat::Json)).unwrap();
    let ValidationOutcome::Failure(diagnostic) = outcome else {
        panic!("expected failure");
    };
    assert_eq!(diagnostic.summary, "Invalid Swagger schema.");
    let message = diagnostic
        .messages
        .iter()
        .find(|m| m.index.to_string() == "swagger")
        .expect("a violation at the swagger field");
    assert_eq!(message.code, "enum");
    assert_eq!(message.position.line_no, 1);
}

#[test]
fn rejects_openapi_with_bad_parameter_location() {
    let content = r#"openapi: "3.0.0"
info:
  title: Pets
  version: "1.0"
paths:
  /pets:
    get:
      parameters:
        - name: limit
          in: belly
      responses:
        "200":
          description: ok
"#;
    let outcome = validate(content.as_bytes(), SchemaKind::OpenApi, Some(BaseFormat::Yaml)).unwrap();
    let ValidationOutcome::Failure(diagnostic) = outcome else {
        panic!("expected failure");
    };
    let message = diagnostic
        .messages
        .iter()
        .find(|m| m.code == "enum")
        .expect("an enum violation for the parameter location");
    assert_eq!(
        message.index.to_string(),
        "paths./pets.get.parameters[0].in"
    );
}

#[test]
fn reserializing_accepted_value_validates_again() {
    let outcome = validate(
        PETSTORE_SWAGGER.as_bytes(),
        SchemaKind::Swagger,
        Some(BaseFormat::Json),
    )
    .unwrap();
    let ValidationOutcome::Success(value) = outcome else {
        panic!("expected success");
    };

    let reserialized = serde_json::to_string_pretty(&value).unwrap();
    let again = validate(
        reserialized.as_bytes(),
        SchemaKind::Swagger,
        Some(BaseFormat::Json),
    )
    .unwrap();
    assert!(again.is_success());
}

#[test]
fn base_format_derivation_feeds_the_validator() {
    let base = resolve_base_format(None, Path::new("fixtures/petstore.yaml"));
    assert_eq!(base, Some(BaseFormat::Yaml));
    let outcome = validate(PETSTORE_OPENAPI.as_bytes(), SchemaKind::OpenApi, base).unwrap();
    assert!(outcome.is_success());
}
