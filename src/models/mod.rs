pub mod config;
pub mod format;
pub mod problem;
pub mod source;
pub mod tags;

// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use format::OutputFormat;
pub use problem::{ProblemDetails, ProblemRecord, Rating};
pub use source::Source;
pub use tags::TagUniverse;
