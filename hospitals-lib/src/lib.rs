//! Core of the hospital records desk.
//!
//! Holds the client-side view of the hospital resource ([`RecordStore`]), the
//! create/edit form state ([`FormController`]) and the glue that issues API
//! requests and applies their outcomes ([`Screen`]). Presentation lives in the
//! GUI and CLI crates.

use std::path::PathBuf;

use thiserror::Error;

pub mod api;
pub mod config;
pub mod form;
pub mod fs;
pub mod record;
pub mod screen;
pub mod store;

pub use api::{ApiError, HospitalApi, HttpClient};
pub use config::Config;
pub use form::{Draft, Fields, FormController, Submission};
pub use record::{Hospital, HospitalId};
pub use screen::{Outcome, Screen};
pub use store::RecordStore;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not determine the user's home directory")]
    NoHomeDir,
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("Invalid API endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
