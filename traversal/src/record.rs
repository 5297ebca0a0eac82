//! Typed projection results.
//!
//! Executing a `project` step yields one `Record` per traverser: a flat
//! map of field name to `Token`. Mappers rebuild domain entities from
//! records through the typed extractors here, so no downcasting of
//! untyped result values is ever needed.

use quiver_core::{Value, VertexId};
use std::collections::HashMap;
use thiserror::Error;

/// One value position inside a projection result.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A vertex identifier.
    Id(VertexId),
    /// A scalar property value.
    Scalar(Value),
    /// An ordered list of tokens.
    List(Vec<Token>),
    /// A nested projection record.
    Record(Record),
}

impl Token {
    /// Returns the kind name of this token.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Id(_) => "Id",
            Token::Scalar(_) => "Scalar",
            Token::List(_) => "List",
            Token::Record(_) => "Record",
        }
    }
}

/// A flat, named projection result.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: HashMap<String, Token>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field.
    pub fn insert(&mut self, name: impl Into<String>, token: Token) {
        self.fields.insert(name.into(), token);
    }

    /// Get a field, if present.
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.fields.get(name)
    }

    /// Get a field or fail with a missing-field error.
    pub fn require(&self, name: &str) -> Result<&Token, RecordError> {
        self.fields
            .get(name)
            .ok_or_else(|| RecordError::missing_field(name))
    }

    /// Extract a vertex identifier field.
    pub fn require_id(&self, name: &str) -> Result<VertexId, RecordError> {
        match self.require(name)? {
            Token::Id(id) => Ok(*id),
            other => Err(RecordError::field_type(name, "Id", other.kind())),
        }
    }

    /// Extract a string field.
    pub fn require_str(&self, name: &str) -> Result<&str, RecordError> {
        match self.require(name)? {
            Token::Scalar(Value::String(s)) => Ok(s),
            Token::Scalar(other) => {
                Err(RecordError::field_type(name, "String", other.type_name()))
            }
            other => Err(RecordError::field_type(name, "String", other.kind())),
        }
    }

    /// Extract a list field.
    pub fn require_list(&self, name: &str) -> Result<&[Token], RecordError> {
        match self.require(name)? {
            Token::List(items) => Ok(items),
            other => Err(RecordError::field_type(name, "List", other.kind())),
        }
    }

    /// Iterate the nested records of a list field, failing on any
    /// non-record element.
    pub fn require_records<'r>(
        &'r self,
        name: &str,
    ) -> Result<impl Iterator<Item = &'r Record>, RecordError> {
        let items = self.require_list(name)?;
        for item in items {
            if !matches!(item, Token::Record(_)) {
                return Err(RecordError::field_type(name, "Record", item.kind()));
            }
        }
        Ok(items.iter().filter_map(|item| match item {
            Token::Record(record) => Some(record),
            _ => None,
        }))
    }
}

/// Errors raised while extracting typed fields from a projection record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Missing projection field: {field}")]
    MissingField { field: String },

    #[error("Field {field}: expected {expected}, got {actual}")]
    FieldType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl RecordError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn field_type(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::FieldType {
            field: field.into(),
            expected,
            actual,
        }
    }
}
