pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod json_store;
pub mod matcher;
pub mod report;
pub mod scanner;
pub mod storage;
pub mod types;

pub use config::MonitorConfig;
pub use error::{MonitorError, Result};
pub use json_store::JsonSeenStore;
pub use scanner::JobScanner;
pub use storage::SeenStore;
pub use types::{PostId, PostRef, RunOutcome};
