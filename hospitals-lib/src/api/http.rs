use std::time::Duration;

use reqwest::{Client, Response, Url};
use tracing::{debug, instrument};

use crate::{
    Error, Result,
    api::{ApiError, ApiResult, HospitalApi},
    config::ApiConfig,
    record::{Hospital, HospitalId},
};

/// [`HospitalApi`] over REST/JSON.
///
/// `GET` and `POST` go to the collection endpoint, `PUT` and `DELETE` to `{endpoint}/{id}`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    endpoint: Url,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let endpoint = parse_endpoint(&config.endpoint)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        // Loopback endpoints never go through a system proxy
        if endpoint
            .host_str()
            .is_some_and(|host| matches!(host, "localhost" | "127.0.0.1" | "[::1]"))
        {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(Error::HttpClient)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn record_url(&self, id: HospitalId) -> Url {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .expect("endpoint is checked to be a base URL on construction")
            .pop_if_empty()
            .push(&id.to_string());
        url
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let invalid = |reason: String| Error::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".into()));
    }

    Ok(url)
}

/// Turn a non-2xx answer into an error.
fn check(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

impl HospitalApi for HttpClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn list(&self) -> ApiResult<Vec<Hospital>> {
        debug!("Listing hospitals");
        let response = check(self.client.get(self.endpoint.clone()).send().await?)?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, hospital), fields(endpoint = %self.endpoint))]
    async fn create(&self, hospital: Hospital) -> ApiResult<Hospital> {
        debug!("Creating hospital '{}'", hospital.name);
        let response = check(
            self.client
                .post(self.endpoint.clone())
                .json(&hospital)
                .send()
                .await?,
        )?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self, hospital), fields(endpoint = %self.endpoint))]
    async fn update(&self, id: HospitalId, hospital: Hospital) -> ApiResult<Hospital> {
        debug!("Updating hospital {id}");
        let response = check(
            self.client
                .put(self.record_url(id))
                .json(&hospital)
                .send()
                .await?,
        )?;
        Ok(response.json().await?)
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn delete(&self, id: HospitalId) -> ApiResult<()> {
        debug!("Deleting hospital {id}");
        check(self.client.delete(self.record_url(id)).send().await?)?;
        Ok(())
    }
}
