//! # tagsmith
//!
//! Copy trailing protobuf field comments into generated Go struct tags.
//!
//! tagsmith runs as a post-processing stage after a protobuf Go generator
//! has produced its stub:
//! - The harvester reads each field's trailing comment from the descriptor
//! - The rewriter splices it into the field's struct tag
//! - Fields without a comment get a configurable default tag
//!
//! ## Quick Start
//!
//! ```ignore
//! use tagsmith::prelude::*;
//!
//! let file = SchemaFile::from_json(&std::fs::read("person.json")?)?;
//!
//! let mut host = Host::new(StageConfig::default());
//! host.register(Box::new(TagStage::new()))?;
//! host.init()?;
//!
//! let mut engine = Generator::from_text(std::fs::read_to_string("person.pb.go")?);
//! host.generate(&file, &mut engine)?;
//! print!("{}", engine.buffer());
//! ```
//!
//! ## Writing Another Stage
//!
//! Implement [`Stage`](tagsmith_core::Stage) and register it next to the
//! tag stage; stages run in registration order.

// Re-export core types
pub use tagsmith_core::{
    DEFAULT_TAG, Generator, Host, LifecycleState, LogLevel, SchemaFile, Stage, StageConfig,
    StageContext, StageError, StageResult, descriptor,
};

// Re-export the tag stage
pub use tagsmith_tag::{CommentMap, RewriteOptions, TagStage, harvest, naming, rewrite};

// Re-export logging
pub use tagsmith_logging::init_logging;

// Re-export tracing for stage authors
pub use tracing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use tagsmith_core::prelude::*;
    pub use tagsmith_tag::TagStage;
    pub use tagsmith_logging::init_logging;

    pub use tracing::{debug, error, info, trace, warn};
}
