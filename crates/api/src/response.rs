//! Shared response envelope types for API handlers.
//!
//! JSON responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })`.

use cinequery_core::operation::{FieldKind, Operation};
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Description of one operation: how to call it and what it needs.
#[derive(Debug, Serialize)]
pub struct OperationInfo {
    pub operation: &'static str,
    pub title: &'static str,
    pub method: &'static str,
    pub fields: Vec<FieldInfo>,
}

#[derive(Debug, Serialize)]
pub struct FieldInfo {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl From<Operation> for OperationInfo {
    fn from(op: Operation) -> Self {
        Self {
            operation: op.as_str(),
            title: op.title(),
            method: if op.takes_parameters() { "POST" } else { "GET" },
            fields: op
                .fields()
                .iter()
                .map(|f| FieldInfo {
                    name: f.name,
                    label: f.label,
                    kind: match f.kind {
                        FieldKind::Text => "text",
                        FieldKind::Integer => "integer",
                        FieldKind::Float => "float",
                    },
                })
                .collect(),
        }
    }
}
