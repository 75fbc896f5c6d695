//! reqwest implementation of the employee repository.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::error::UpstreamError;
use crate::config::Config;
use crate::domain::entities::{Employee, EmployeeInput};
use crate::domain::repositories::EmployeeRepository;
use crate::error::AppError;

/// Upstream employee service client.
///
/// Holds one [`reqwest::Client`]; the client pools connections internally and
/// is cheap to share, so a single repository serves every inbound request.
/// Every method issues exactly one request against `base_url`.
///
/// # Upstream endpoints
///
/// - `GET    {base}/`                                  - all employees
/// - `GET    {base}/search/{text}`                     - name search
/// - `GET    {base}/{id}`                              - one employee
/// - `GET    {base}/highestSalary`                     - highest salary
/// - `GET    {base}/topTenHighestEarningEmployeeNames` - top earners
/// - `POST   {base}/`                                  - create
/// - `DELETE {base}/{id}`                              - delete
#[derive(Debug, Clone)]
pub struct HttpEmployeeRepository {
    client: Client,
    base_url: Url,
}

impl HttpEmployeeRepository {
    /// Creates a repository from an existing client.
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Builds the HTTP client and repository from service configuration.
    ///
    /// Without `upstream_timeout_seconds` no timeout is set and the transport
    /// defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.upstream_base_url)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.upstream_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self::new(client, base_url))
    }

    /// The upstream base URL requests are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The base URL with its password masked, for logging.
    pub fn redacted_base_url(&self) -> Url {
        redact(&self.base_url)
    }

    /// Appends percent-encoded path segments to the base URL.
    ///
    /// `&[""]` yields the base URL with a single trailing slash.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, UpstreamError> {
        let url = self.endpoint(segments)?;
        tracing::debug!(%method, url = %redact(&url), "Forwarding to upstream");
        Ok(self.client.request(method, url))
    }

    /// Sends the request and turns non-success statuses into [`UpstreamError::Status`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, UpstreamError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Upstream request failed");
            UpstreamError::Transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(%status, error = %e, "Failed to read upstream error body");
                String::new()
            }
        };
        tracing::warn!(%status, "Upstream returned error status");
        Err(UpstreamError::Status { status, body })
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, UpstreamError> {
        let response = self.send(self.request(Method::GET, segments)?).await?;
        response.json::<T>().await.map_err(UpstreamError::Decode)
    }
}

/// Replaces the password of `url`, if any, with `***`.
fn redact(url: &Url) -> Url {
    let mut url = url.clone();
    if url.password().is_some() {
        // Only fails for URLs that cannot carry credentials, which have no password.
        let _ = url.set_password(Some("***"));
    }
    url
}

#[async_trait]
impl EmployeeRepository for HttpEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.get_json(&[""]).await?)
    }

    async fn search_by_name(&self, search: &str) -> Result<Vec<Employee>, AppError> {
        Ok(self.get_json(&["search", search]).await?)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, AppError> {
        match self.get_json::<Employee>(&[id]).await {
            Ok(employee) => Ok(Some(employee)),
            Err(e) if e.is_client_error() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn highest_salary(&self) -> Result<i32, AppError> {
        Ok(self.get_json(&["highestSalary"]).await?)
    }

    async fn top_ten_earner_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.get_json(&["topTenHighestEarningEmployeeNames"]).await?)
    }

    async fn create(&self, input: EmployeeInput) -> Result<Employee, AppError> {
        let request = self.request(Method::POST, &[""])?.json(&input);
        let response = self.send(request).await?;

        Ok(response
            .json::<Employee>()
            .await
            .map_err(UpstreamError::Decode)?)
    }

    async fn delete(&self, id: &str) -> Result<String, AppError> {
        let response = self.send(self.request(Method::DELETE, &[id])?).await?;

        Ok(response.text().await.map_err(UpstreamError::Decode)?)
    }

    async fn is_reachable(&self) -> bool {
        let Ok(request) = self.request(Method::GET, &[""]) else {
            return false;
        };
        request.send().await.is_ok()
    }
}
