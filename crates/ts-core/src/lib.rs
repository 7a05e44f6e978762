pub mod error;
pub mod host;
pub mod types;

pub use error::{HostError, TestScriptError};
pub use host::{PathResolver, ScoreHost, ScoreView};
pub use types::*;
