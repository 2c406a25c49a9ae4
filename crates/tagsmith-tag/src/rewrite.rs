//! Line-oriented rewrite of a generated Go stub.
//!
//! The stub follows a fixed textual convention:
//!
//! ```text
//! type Person struct {
//! 	Name	string	`json:"name"`
//! 	Age	int32	`json:"age"`
//! }
//! ```
//!
//! Every field line of a struct that appears in the [`CommentMap`] gets the
//! harvested comment spliced in front of its closing backtick:
//!
//! ```text
//! 	Name	string	`json:"name" valid:"required"`
//! ```
//!
//! All other lines are copied unchanged. Block comments (`/* ... */`) are
//! copied as is; by default, leaving one puts the rewriter back outside of
//! any struct, even when the comment sat inside a struct body.

use crate::harvest::CommentMap;
use crate::naming::field_key;
use once_cell::sync::Lazy;
use regex::Regex;
use tagsmith_core::{DEFAULT_TAG, StageConfig};
use tracing::{debug, trace};

#[allow(clippy::expect_used)] // Safe: literal pattern
static STRUCT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"type (.+) struct \{").expect("struct header pattern"));

#[allow(clippy::expect_used)] // Safe: literal pattern
static FIELD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\t(.+)\t.+\t.+").expect("field line pattern"));

const BLOCK_COMMENT_OPEN: &str = "/*";
const BLOCK_COMMENT_CLOSE: &str = "*/";
const BLOCK_CLOSE: &str = "}";
const TAG_DELIMITER: char = '`';

/// Options for a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Tag inserted when the comment map has no entry for a field.
    pub default_tag: String,
    /// Return to the enclosing struct when a block comment closes.
    pub resume_after_block_comment: bool,
    /// Key fields by their Go name on both sides (see [`field_key`]).
    pub match_go_names: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_string(),
            resume_after_block_comment: false,
            match_go_names: false,
        }
    }
}

impl From<&StageConfig> for RewriteOptions {
    fn from(config: &StageConfig) -> Self {
        Self {
            default_tag: config.default_tag.clone(),
            resume_after_block_comment: config.resume_after_block_comment,
            match_go_names: config.match_go_names,
        }
    }
}

/// Where the rewriter is in the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// Not inside a tracked struct body.
    Outside,
    /// Inside `/* ... */`; `resume` is the struct to return to, if any.
    InCommentBlock { resume: Option<String> },
    /// Inside the body of the tracked struct with this name.
    InsideType(String),
}

/// Counters for one rewrite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub lines: usize,
    pub fields_tagged: usize,
}

/// Single forward pass over the lines of a stub.
pub struct Rewriter<'a> {
    comments: &'a CommentMap,
    options: &'a RewriteOptions,
    state: State,
    stats: RewriteStats,
}

impl<'a> Rewriter<'a> {
    pub fn new(comments: &'a CommentMap, options: &'a RewriteOptions) -> Self {
        Self {
            comments,
            options,
            state: State::Outside,
            stats: RewriteStats::default(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn stats(&self) -> RewriteStats {
        self.stats
    }

    /// Feed one line (without its terminator) and get the line to emit.
    pub fn rewrite_line(&mut self, line: &str) -> String {
        self.stats.lines += 1;
        let trimmed = line.trim();

        if trimmed.starts_with(BLOCK_COMMENT_OPEN) {
            let resume = match std::mem::replace(&mut self.state, State::Outside) {
                State::InsideType(name) => Some(name),
                State::InCommentBlock { resume } => resume,
                State::Outside => None,
            };
            self.state = State::InCommentBlock { resume };
        }

        if let State::InCommentBlock { resume } = &mut self.state {
            if line.contains(BLOCK_COMMENT_CLOSE) {
                self.state = match resume.take() {
                    Some(name) if self.options.resume_after_block_comment => {
                        State::InsideType(name)
                    }
                    _ => State::Outside,
                };
            }
            return line.to_string();
        }

        let State::InsideType(type_name) = &self.state else {
            if let Some(name) = struct_name(line)
                && self.comments.contains_type(name)
            {
                trace!(type_name = name, "entering tracked struct");
                self.state = State::InsideType(name.to_string());
            }
            return line.to_string();
        };

        if trimmed.starts_with(BLOCK_CLOSE) {
            self.state = State::Outside;
            return line.to_string();
        }

        let key = field_key(
            field_name(line).unwrap_or_default(),
            self.options.match_go_names,
        );
        let comment = self
            .comments
            .lookup_or(type_name, &key, &self.options.default_tag);
        if line.ends_with(TAG_DELIMITER) {
            self.stats.fields_tagged += 1;
            trace!(type_name = %type_name, field = %key, comment, "tagging field");
        }
        insert_tag(line, comment)
    }
}

/// Rewrite a whole stub. Every output line ends with `\n`, and one extra
/// `\n` follows the last line.
pub fn rewrite(stub: &str, comments: &CommentMap, options: &RewriteOptions) -> String {
    let mut rewriter = Rewriter::new(comments, options);
    let mut out = String::with_capacity(stub.len() + stub.len() / 8 + 1);

    for line in stub.lines() {
        out.push_str(&rewriter.rewrite_line(line));
        out.push('\n');
    }
    out.push('\n');

    let stats = rewriter.stats();
    debug!(
        lines = stats.lines,
        fields_tagged = stats.fields_tagged,
        "rewrote stub"
    );
    out
}

/// Name captured from a `type <Name> struct {` header.
pub fn struct_name(line: &str) -> Option<&str> {
    STRUCT_HEADER
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Field name captured from a `\t<Name>\t<Type>\t<Tag>` line.
pub fn field_name(line: &str) -> Option<&str> {
    FIELD_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Insert ` <tag>` before the line's trailing backtick; other lines are
/// returned unchanged.
pub fn insert_tag(line: &str, tag: &str) -> String {
    match line.strip_suffix(TAG_DELIMITER) {
        Some(head) => format!("{head} {tag}{TAG_DELIMITER}"),
        None => line.to_string(),
    }
}
