//! Schema file model consumed by stages.
//!
//! These types mirror the parts of protobuf's `FileDescriptorProto` that
//! stages need, and deserialize from its canonical JSON form (camelCase
//! keys, every field optional):
//!
//! ```json
//! {
//!   "name": "person.proto",
//!   "messageType": [
//!     { "name": "Person", "field": [{ "name": "name" }, { "name": "age" }] }
//!   ],
//!   "sourceCodeInfo": {
//!     "location": [
//!       { "path": [4, 0, 2, 0], "trailingComments": " valid:\"required\"\n" }
//!     ]
//!   }
//! }
//! ```
//!
//! # Paths
//!
//! A [`SourcePath`] addresses an element of the file by the descriptor field
//! numbers leading to it. `[4, 0, 2, 1]` is "message type 0, field 1";
//! `[4, 0, 3, 2, 2, 0]` is "message type 0, nested type 2, field 0".

use crate::StageResult;
use serde::{Deserialize, Serialize};

/// `FileDescriptorProto.message_type`
pub const MESSAGE_TYPE_TAG: i32 = 4;
/// `DescriptorProto.nested_type`
pub const NESTED_TYPE_TAG: i32 = 3;
/// `DescriptorProto.field`
pub const FIELD_TAG: i32 = 2;

/// One compiled schema file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaFile {
    /// File name, e.g. `person.proto`.
    pub name: String,

    /// Package declared by the file.
    pub package: Option<String>,

    /// Top-level message declarations in declaration order.
    pub message_type: Vec<StructuredType>,

    /// Source locations recorded by the parser.
    pub source_code_info: SourceCodeInfo,
}

impl SchemaFile {
    /// Parse a schema file from its JSON descriptor form.
    pub fn from_json(bytes: &[u8]) -> StageResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// A message declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredType {
    pub name: String,
    pub field: Vec<Field>,
    pub nested_type: Vec<StructuredType>,
}

impl StructuredType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style helper that appends a field.
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.field.push(Field { name: name.into() });
        self
    }

    /// Builder-style helper that appends a nested type.
    pub fn with_nested(mut self, nested: StructuredType) -> Self {
        self.nested_type.push(nested);
        self
    }
}

/// A field of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Field {
    /// Name as declared in the schema.
    pub name: String,
}

/// Side table of source locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceCodeInfo {
    pub location: Vec<Location>,
}

impl SourceCodeInfo {
    /// Locations whose path equals `path` exactly, in table order.
    pub fn locations_at<'a>(&'a self, path: &SourcePath) -> impl Iterator<Item = &'a Location> {
        self.location.iter().filter(move |loc| loc.path == *path)
    }
}

/// One entry of the source location table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub path: SourcePath,
    pub span: Vec<i32>,
    pub leading_comments: Option<String>,
    pub trailing_comments: Option<String>,
}

impl Location {
    pub fn new(path: SourcePath) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// Builder-style helper that sets the trailing comment.
    pub fn with_trailing(mut self, comment: impl Into<String>) -> Self {
        self.trailing_comments = Some(comment.into());
        self
    }
}

/// Path into the descriptor tree.
///
/// Two paths are equal only when they have the same length and the same
/// elements in order; a prefix never matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcePath(Vec<i32>);

impl SourcePath {
    /// Path of the top-level message at `index`.
    pub fn message(index: usize) -> Self {
        Self(vec![MESSAGE_TYPE_TAG, to_i32(index)])
    }

    /// Path of the nested type at `index` below this message.
    pub fn nested(&self, index: usize) -> Self {
        self.child(NESTED_TYPE_TAG, index)
    }

    /// Path of the field at `index` of this message.
    pub fn field(&self, index: usize) -> Self {
        self.child(FIELD_TAG, index)
    }

    fn child(&self, tag: i32, index: usize) -> Self {
        let mut elements = Vec::with_capacity(self.0.len() + 2);
        elements.extend_from_slice(&self.0);
        elements.push(tag);
        elements.push(to_i32(index));
        Self(elements)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i32>> for SourcePath {
    fn from(elements: Vec<i32>) -> Self {
        Self(elements)
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

// Descriptor indices are i32 on the wire.
fn to_i32(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}
