//! Breach lookup against the LeakCheck public API.
//!
//! One call, one request: validate the address, GET the endpoint with the
//! address as the `check` query parameter, then normalize the JSON reply.
//! Every failure is terminal and reported once; nothing is retried.

mod normalize;

use log::{debug, warn};

use crate::config::{Config, CHECK_QUERY_PARAM};
use crate::error_handling::{
    categorize_reqwest_error, network_error, InitializationError, LookupError, LookupFailure,
};
use crate::initialization::init_client;
use crate::models::LookupResult;
use crate::validation::is_valid_email;

pub use normalize::{is_truthy, normalize, parse_body};

/// Issues breach lookups.
///
/// Holds no mutable state, so one service can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct LookupService {
    client: reqwest::Client,
    endpoint: String,
}

impl LookupService {
    /// Builds a service with its own HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Ok(Self::with_client(client, config.endpoint.clone()))
    }

    /// Builds a service around an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this service queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Looks up `email` and returns the normalized result or the failure reason.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use breach_check::{Config, LookupService};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let service = LookupService::new(&Config::default())?;
    /// match service.check("someone@example.com").await {
    ///     Ok(result) => println!("{} breaches", result.breach_count),
    ///     Err(failure) => eprintln!("{}", failure.reason),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check(&self, email: &str) -> Result<LookupResult, LookupFailure> {
        self.lookup(email).await.map_err(LookupFailure::from)
    }

    /// Same as [`check`](Self::check) but keeps the typed error.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the address fails the syntax check (no request is made)
    /// - `Network` on transport failure, including the timeout
    /// - `HttpStatus` if the status is not 200
    /// - `InvalidJson` if the body is not JSON
    /// - `UnexpectedFormat` if the JSON is not an object
    /// - `UpstreamRejected` if upstream reports no success
    pub async fn lookup(&self, email: &str) -> Result<LookupResult, LookupError> {
        if !is_valid_email(email) {
            debug!("Rejected malformed address without querying upstream");
            return Err(LookupError::InvalidInput);
        }

        debug!("Querying {} for {email}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[(CHECK_QUERY_PARAM, email)])
            .send()
            .await
            .map_err(|e| {
                warn!("Lookup request failed ({}): {e}", categorize_reqwest_error(&e));
                network_error(&e)
            })?;

        let status = response.status();
        debug!("Upstream responded with {status}");
        if status.as_u16() != 200 {
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read lookup response ({}): {e}", categorize_reqwest_error(&e));
            network_error(&e)
        })?;

        let data = parse_body(&body)?;
        let result = normalize(email, data)?;
        debug!(
            "Normalized {} breach entries (reported count {})",
            result.breaches.len(),
            result.breach_count
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{matchers::*, responders::*, Expectation, Server};

    fn service_for(server: &Server) -> LookupService {
        let config = Config {
            endpoint: server.url("/api/public").to_string(),
            timeout_seconds: 5,
            ..Default::default()
        };
        LookupService::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_email_makes_no_request() {
        // A server with no expectations fails the test on any request
        let server = Server::run();
        let service = service_for(&server);

        let failure = service.check("not-an-email").await.unwrap_err();
        assert_eq!(failure.reason, "Invalid email format");
    }

    #[tokio::test]
    async fn test_sends_email_as_check_query_param() {
        let server = Server::run();
        server.expect(
            Expectation::matching(httptest::all_of![
                request::method_path("GET", "/api/public"),
                request::query(url_decoded(contains(("check", "a+b@example.com")))),
            ])
            .respond_with(json_encoded(serde_json::json!({
                "success": true,
                "found": 0,
                "sources": []
            }))),
        );

        let result = service_for(&server).check("a+b@example.com").await.unwrap();
        assert_eq!(result.email, "a+b@example.com");
        assert_eq!(result.breach_count, 0);
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/public"))
                .respond_with(status_code(500)),
        );

        let failure = service_for(&server).check("a@b.com").await.unwrap_err();
        assert!(failure.reason.contains("HTTP 500"), "{}", failure.reason);
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/public"))
                .respond_with(status_code(200).body("<html>maintenance</html>")),
        );

        let error = service_for(&server).lookup("a@b.com").await.unwrap_err();
        assert_eq!(error, LookupError::InvalidJson);
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let config = Config {
            // Port 9 (discard) on loopback is closed on test hosts
            endpoint: "http://127.0.0.1:9/api/public".to_string(),
            timeout_seconds: 2,
            ..Default::default()
        };
        let service = LookupService::new(&config).unwrap();

        let error = service.lookup("a@b.com").await.unwrap_err();
        assert!(matches!(error, LookupError::Network(_)));
        assert!(error.to_string().starts_with("Network error: "));
    }
}
