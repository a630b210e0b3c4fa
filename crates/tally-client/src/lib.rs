pub mod commands;
pub mod contracts;
pub mod error;
pub mod migrations;
pub mod setup;
pub mod state;
pub mod statistics;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
