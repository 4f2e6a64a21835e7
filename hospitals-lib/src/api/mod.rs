//! Contract of the remote hospital resource.

use std::{future::Future, sync::Arc};

use thiserror::Error;

use crate::record::{Hospital, HospitalId};

mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use http::HttpClient;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// An API call failed. Callers treat every variant the same way; the variants only exist to
/// make the log useful.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(Arc<reqwest::Error>),
    #[error("Server responded with status {status}")]
    Status { status: u16 },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(Arc::new(err))
    }
}

/// The four operations of the hospital resource.
///
/// Implementations are cheap to clone so a request can own its client while it is in flight.
pub trait HospitalApi: Clone + Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = ApiResult<Vec<Hospital>>> + Send;

    /// `hospital.id` is [`HospitalId::UNASSIGNED`]; the returned record carries the real id.
    fn create(&self, hospital: Hospital) -> impl Future<Output = ApiResult<Hospital>> + Send;

    fn update(
        &self,
        id: HospitalId,
        hospital: Hospital,
    ) -> impl Future<Output = ApiResult<Hospital>> + Send;

    fn delete(&self, id: HospitalId) -> impl Future<Output = ApiResult<()>> + Send;
}
