//! tagsmith-tag - Struct tags from trailing schema comments
//!
//! A schema author writes the tag for a field as its trailing comment:
//!
//! ```text
//! message Person {
//!   string name = 1; // valid:"required"
//!   int32 age = 2;
//! }
//! ```
//!
//! and this stage splices it into the generated Go struct:
//!
//! ```text
//! type Person struct {
//! 	Name	string	`json:"name" valid:"required"`
//! 	Age	int32	`json:"age" valid:"-"`
//! }
//! ```
//!
//! Fields without a comment get the configured default tag.
//!
//! The work happens in two passes per schema file:
//! - [`harvest`] walks the schema and builds a [`CommentMap`]
//! - [`rewrite`] runs a line-oriented state machine over the stub
//!
//! [`TagStage`] wires both into the [`tagsmith_core::Stage`] lifecycle.

pub mod harvest;
pub mod naming;
pub mod rewrite;
mod stage;

pub use harvest::{CommentMap, harvest};
pub use rewrite::{RewriteOptions, rewrite};
pub use stage::{STAGE_NAME, TagStage};
