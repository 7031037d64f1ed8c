//! The decoded, strongly-shaped representation of an API document
//!
//! Copyright (c) 2025 API Star Team
//! Licensed under the Apache-2.0 license

use serde::Serialize;

/// An API document decoded from a generically-validated value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    /// Base URL requests are made against, when the schema declares one.
    pub base_url: Option<String>,
    pub sections: Vec<Section>,
}

/// A presentation group of operations, keyed by tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub operations: Vec<Operation>,
}

/// One HTTP operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Operation {
    /// Upper-cased HTTP method.
    pub method: String,
    /// The templated URL path.
    pub url: String,
    pub id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<Parameter>,
}

/// A single operation parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,
    /// Where the parameter lives: query, path, header, ...
    pub location: String,
    pub required: bool,
    pub schema_type: Option<String>,
    pub description: Option<String>,
}
