//! Swagger 2.0 document decoder
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
        .ok_or_else(|| DocsError::Decode("Swagger document root must be an object".to_string()))?;

    let info = root.get("info").cloned().unwrap_or(Value::Null);
    let base_url = base_url(root);

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

/// Assemble `scheme://host{basePath}` when the schema declares a host.
fn base_url(root: &serde_json::Map<String, Value>) -> Option<String> {
    let host = root.get("host").and_then(Value::as_str)?;
    let scheme = root
        .get("schemes")
        .and_then(Value::as_array)
        .and_then(|schemes| schemes.first())
        .and_then(Value::as_str)
        .unwrap_or("https");
    let base_path = root.get("basePath").and_then(Value::as_str).unwrap_or("");
    Some(format!("{}://{}{}", scheme, host, base_path))
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
            // Swagger parameters carry their type inline; body parameters
            // carry a schema object instead.
            schema_type: string_field(param, "type").or_else(|| {
                param
                    .get("schema")
                    .and_then(|schema| string_field(schema, "type"))
            }),
            description: string_field(param, "description"),
        })
        .collect()
}
