//! Kind-specific decoders from validated values to the document model
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

mod openapi;
mod swagger;

use crate::document::{Document, Operation, Section};
use crate::DocsError;
use serde_json::Value;
use std::collections::BTreeMap;

/// The two schema kinds documentation can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    OpenApi,
    Swagger,
}

/// Decode a validated value into the document model.
pub fn decode(kind: DocKind, value: &Value) -> Result<Document, DocsError> {
    match kind {
        DocKind::OpenApi => openapi::decode(value),
        DocKind::Swagger => swagger::decode(value),
    }
}

/// Methods recognized inside a path item, in presentation order.
const METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Group flat (tag, operation) pairs into sections, preserving first-seen
/// tag order. Untagged operations land in a trailing "default" section.
fn group_sections(tagged: Vec<(Option<String>, Operation)>) -> Vec<Section> {
    let mut order: Vec<String> = Vec::new();
    let mut grouped: BTreeMap<String, Vec<Operation>> = BTreeMap::new();
    let mut untagged: Vec<Operation> = Vec::new();

    for (tag, operation) in tagged {
        match tag {
            Some(tag) => {
                if !order.contains(&tag) {
                    order.push(tag.clone());
                }
                grouped.entry(tag).or_default().push(operation);
            }
            None => untagged.push(operation),
        }
    }

    let mut sections: Vec<Section> = order
        .into_iter()
        .map(|name| {
            let operations = grouped.remove(&name).unwrap_or_default();
            Section { name, operations }
        })
        .collect();

    if !untagged.is_empty() {
        sections.push(Section {
            name: "default".to_string(),
            operations: untagged,
        });
    }

    sections
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}
