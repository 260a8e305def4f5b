//! Outbound client for the restaurant-data provider.
//!
//! One GET per invocation: base URL, endpoint path, caller parameters as the
//! query string, API key in the `user-key` header. No retries, no caching.

use anyhow::anyhow;
use reqwest::Client;
use serde::Serialize;

use crate::config::UpstreamConfig;
use crate::error::AppError;
use crate::model::UpstreamReply;

/// HTTP client wrapper for talking to the provider.
#[derive(Clone)]
pub struct ZomatoClient {
    base_url: String,
    user_key: String,
    client: Client,
}

impl ZomatoClient {
    /// Construct a new client using the provided configuration.
    pub fn try_new(config: UpstreamConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow!("Failed to build upstream client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url,
            user_key: config.user_key,
            client,
        })
    }

    /// Issue one GET to `base_url/endpoint` with `params` as the query string.
    ///
    /// Any response from the provider, error status included, comes back as an
    /// [`UpstreamReply`]; only failures with no response at all (connect, DNS,
    /// timeout) surface as `Err`.
    pub async fn request<P>(&self, endpoint: &str, params: &P) -> Result<UpstreamReply, AppError>
    where
        P: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);

        let response = self
            .client
            .get(url)
            .query(params)
            .header("user-key", &self.user_key)
            .send()
            .await
            .map_err(|e| AppError::Internal(anyhow!("Upstream request failed: {}", e)))?;

        let status_code = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::Internal(anyhow!("Failed to read upstream response: {}", e)))?;

        // A non-JSON body relays as JSON null rather than failing the request.
        let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);

        Ok(UpstreamReply { status_code, body })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::model::CityParams;

    fn client_for(base_url: String) -> ZomatoClient {
        ZomatoClient::try_new(UpstreamConfig {
            base_url,
            user_key: "test-key".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn sends_key_header_and_omits_absent_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cities"))
            .and(header("user-key", "test-key"))
            .and(query_param("q", "delhi"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": "bar"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(server.uri());
        let params = CityParams {
            q: Some("delhi".to_string()),
            ..Default::default()
        };
        let reply = client.request("cities", &params).await.unwrap();

        assert_eq!(reply.status_code, 200);
        assert_eq!(reply.body, json!({"foo": "bar"}));

        // city_ids and count were None, so q must be the whole query string.
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("q=delhi"));
    }

    #[tokio::test]
    async fn provider_error_statuses_come_back_as_replies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cities"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})),
            )
            .mount(&server)
            .await;

        let client = client_for(server.uri());
        let reply = client
            .request("cities", &CityParams::default())
            .await
            .unwrap();

        assert_eq!(reply.status_code, 404);
        assert_eq!(reply.message(), Some("not found"));
    }

    #[tokio::test]
    async fn non_json_bodies_decode_to_null() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cities"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = client_for(server.uri());
        let reply = client
            .request("cities", &CityParams::default())
            .await
            .unwrap();

        assert_eq!(reply.status_code, 502);
        assert_eq!(reply.body, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn connection_failure_is_an_error() {
        let client = client_for("http://127.0.0.1:1".to_string());
        let result = client.request("cities", &CityParams::default()).await;
        assert!(result.is_err());
    }
}
