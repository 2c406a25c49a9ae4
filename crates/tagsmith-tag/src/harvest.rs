//! Collect trailing field comments from a schema file.

use crate::naming::field_key;
use crate::rewrite::RewriteOptions;
use std::collections::BTreeMap;
use tagsmith_core::{SchemaFile, SourceCodeInfo, SourcePath, StructuredType};
use tracing::debug;

/// Comments per type, keyed by type name then by [`field_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentMap {
    types: BTreeMap<String, BTreeMap<String, String>>,
}

impl CommentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a comment; an existing entry for the same type and key wins.
    pub fn insert(
        &mut self,
        type_name: impl Into<String>,
        key: impl Into<String>,
        comment: impl Into<String>,
    ) {
        self.types
            .entry(type_name.into())
            .or_default()
            .entry(key.into())
            .or_insert_with(|| comment.into());
    }

    pub fn contains_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn get(&self, type_name: &str, key: &str) -> Option<&str> {
        self.types
            .get(type_name)
            .and_then(|fields| fields.get(key))
            .map(String::as_str)
    }

    /// Comment for the field, or `fallback` when there is no entry.
    pub fn lookup_or<'a>(&'a self, type_name: &str, key: &str, fallback: &'a str) -> &'a str {
        self.get(type_name, key).unwrap_or(fallback)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Build the comment map for every top-level type and its direct nested types.
///
/// Fields without a non-blank trailing comment get the default tag. Types
/// nested more than one level deep are not visited.
pub fn harvest(file: &SchemaFile, options: &RewriteOptions) -> CommentMap {
    let info = &file.source_code_info;
    let mut comments = CommentMap::new();

    for (i, message) in file.message_type.iter().enumerate() {
        let path = SourcePath::message(i);

        for (j, nested) in message.nested_type.iter().enumerate() {
            add_field_comments(&mut comments, &path.nested(j), nested, info, options);
        }

        add_field_comments(&mut comments, &path, message, info, options);
    }

    comments
}

fn add_field_comments(
    comments: &mut CommentMap,
    path: &SourcePath,
    message: &StructuredType,
    info: &SourceCodeInfo,
    options: &RewriteOptions,
) {
    for (k, field) in message.field.iter().enumerate() {
        let comment = trailing_comment(&path.field(k), info, &options.default_tag);
        let key = field_key(&field.name, options.match_go_names);
        comments.insert(message.name.as_str(), key, comment);
    }
    debug!(
        type_name = %message.name,
        path = %path,
        fields = message.field.len(),
        "harvested field comments"
    );
}

/// First non-blank trailing comment recorded at exactly `path`, trimmed.
pub fn trailing_comment<'a>(path: &SourcePath, info: &'a SourceCodeInfo, sentinel: &'a str) -> &'a str {
    info.locations_at(path)
        .filter_map(|loc| loc.trailing_comments.as_deref())
        .map(str::trim)
        .find(|comment| !comment.is_empty())
        .unwrap_or(sentinel)
}
