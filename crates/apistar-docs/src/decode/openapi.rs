//! OpenAPI 3.0 document decoder
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

use super::{group_sections, string_field, METHODS};
use crate::document::{Document, Operation, Parameter};
use crate::DocsError;
use serde_json::Value;

pub fn decode(value: &Value) -> Result<Document, DocsError> {
    let root = value
        .as_object()
        .ok_or_else(|| DocsError::Decode("OpenAPI document root must be an object".to_string()))?;

    let info = root.get("info").cloned().unwrap_or(Value::Null);
    let base_url = root
        .get("servers")
        .and_then(Value::as_array)
        .and_then(|servers| servers.first())
        .and_then(|server| string_field(server, "url"));

    let mut tagged = Vec::new();
    if let Some(paths) = root.get("paths").and_then(Value::as_object) {
        for (url, item) in paths {
            if !url.starts_with('/') {
                continue;
            }
            let shared = parameters(item.get("parameters"));
            for method in METHODS {
                let Some(op) = item.get(*method) else {
                    continue;
                };
                let mut params = shared.clone();
                params.extend(parameters(op.get("parameters")));
                let tag = op
                    .get("tags")
                    .and_then(Value::as_array)
                    .and_then(|tags| tags.first())
                    .and_then(Value::as_str)
                    .map(str::to_string);
                tagged.push((
                    tag,
                    Operation {
                        method: method.to_ascii_uppercase(),
                        url: url.clone(),
                        id: string_field(op, "operationId"),
                        summary: string_field(op, "summary"),
                        description: string_field(op, "description"),
                        parameters: params,
                    },
                ));
            }
        }
    }

    Ok(Document {
        title: string_field(&info, "title").unwrap_or_default(),
        version: string_field(&info, "version").unwrap_or_default(),
        description: string_field(&info, "description"),
        base_url,
        sections: group_sections(tagged),
    })
}

fn parameters(value: Option<&Value>) -> Vec<Parameter> {
    let Some(list) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    list.iter()
        .map(|param| Parameter {
            name: string_field(param, "name").unwrap_or_default(),
            location: string_field(param, "in").unwrap_or_default(),
            required: param
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            schema_type: param
                .get("schema")
                .and_then(|schema| string_field(schema, "type")),
            description: string_field(param, "description"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_info_servers_and_operations() {
        let value = json!({
            "openapi": "3.0.0",
            "info": {
                "title": "Pet Store",
                "version": "1.0.0",
                "description": "A sample API."
            },
            "servers": [{"url": "https://petstore.example.com/v1"}],
            "paths": {
                "/pets": {
                    "parameters": [
                        {"name": "trace", "in": "header"}
                    ],
                    "get": {
                        "operationId": "listPets",
                        "summary": "List all pets",
                        "tags": ["pets"],
                        "parameters": [
                            {
                                "name": "limit",
                                "in": "query",
                                "required": true,
                                "schema": {"type": "integer"}
                            }
                        ],
                        "responses": {"200": {"description": "ok"}}
                    }
                }
            }
        });

        let document = decode(&value).unwrap();
        assert_eq!(document.title, "Pet Store");
        assert_eq!(document.version, "1.0.0");
        assert_eq!(document.description.as_deref(), Some("A sample API."));
        assert_eq!(
            document.base_url.as_deref(),
            Some("https://petstore.example.com/v1")
        );

        assert_eq!(document.sections.len(), 1);
        let section = &document.sections[0];
        assert_eq!(section.name, "pets");
        assert_eq!(section.operations.len(), 1);

        let operation = &section.operations[0];
        assert_eq!(operation.method, "GET");
        assert_eq!(operation.url, "/pets");
        assert_eq!(operation.id.as_deref(), Some("listPets"));
        // Path-level parameters come first.
        assert_eq!(operation.parameters.len(), 2);
        assert_eq!(operation.parameters[0].name, "trace");
        assert_eq!(operation.parameters[1].name, "limit");
        assert!(operation.parameters[1].required);
        assert_eq!(operation.parameters[1].schema_type.as_deref(), Some("integer"));
    }

    #[test]
    fn test_rejects_non_object_root() {
        assert!(decode(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_untagged_operations_fall_back_to_default_section() {
        let value = json!({
            "openapi": "3.0.0",
            "info": {"title": "T", "version": "1"},
            "paths": {
                "/things": {
                    "get": {"responses": {"200": {"description": "ok"}}}
                }
            }
        });
        let document = decode(&value).unwrap();
        assert_eq!(document.sections.len(), 1);
        assert_eq!(document.sections[0].name, "default");
    }
}
