use crate::config::{ClientConfig, ConfigError};
use crate::error::FeedlyError;
use futures::StreamExt;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

const MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const JSON: &str = "application/json";

/// Async client for the Feedly Cloud API.
///
/// Cheap to clone: the underlying connection pool and the configuration are
/// shared. Resource methods live next to their endpoints in the sibling
/// modules (`profile`, `boards`, `collections`).
#[derive(Debug, Clone)]
pub struct FeedlyClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl FeedlyClient {
    /// Build a client with a default `reqwest::Client`.
    pub fn new(config: ClientConfig) -> Result<Self, FeedlyError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(config, http))
    }

    /// Use a caller-configured `reqwest::Client` (proxies, TLS, etc.).
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base_url}/{version}/{segments...}`, each segment percent-encoded on
    /// its own so ids containing `/` stay a single path segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, FeedlyError> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| FeedlyError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .push(self.config.version())
            .extend(segments);
        Ok(url)
    }

    /// Start a request carrying the bearer token.
    fn request(&self, method: Method, url: Url) -> Result<RequestBuilder, FeedlyError> {
        let mut auth = HeaderValue::from_str(&self.config.bearer())
            .map_err(|_| FeedlyError::Config(ConfigError::InvalidToken))?;
        auth.set_sensitive(true);

        tracing::debug!(method = %method, url = %url, "Preparing Feedly request");
        Ok(self.http.request(method, url).header(AUTHORIZATION, auth))
    }

    /// Issue a JSON request and return the raw response body.
    pub(crate) async fn fetch(
        &self,
        method: Method,
        url: Url,
        payload: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, FeedlyError> {
        let mut request = self.request(method, url)?.header(CONTENT_TYPE, JSON);
        if let Some(payload) = payload {
            request = request.body(payload);
        }
        self.execute(request).await
    }

    /// Issue a POST whose body is already encoded with its own content type.
    pub(crate) async fn upload(
        &self,
        url: Url,
        body: Vec<u8>,
        content_type: String,
    ) -> Result<Vec<u8>, FeedlyError> {
        let request = self
            .request(Method::POST, url)?
            .header(CONTENT_TYPE, content_type)
            .body(body);
        self.execute(request).await
    }

    /// Send `request` and read its body, all under the configured timeout.
    async fn execute(&self, request: RequestBuilder) -> Result<Vec<u8>, FeedlyError> {
        tokio::time::timeout(self.config.timeout(), send_and_read(request))
            .await
            .map_err(|_| FeedlyError::Timeout)?
    }
}

async fn send_and_read(request: RequestBuilder) -> Result<Vec<u8>, FeedlyError> {
    let response = request.send().await.map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            url = %response.url(),
            "Feedly request rejected"
        );
        return Err(FeedlyError::HttpStatus(status.as_u16()));
    }

    let body = read_limited_body(response, MAX_RESPONSE_SIZE).await?;
    tracing::trace!(bytes = body.len(), status = status.as_u16(), "Read Feedly response");
    Ok(body)
}

/// Timeouts set on a caller-supplied `reqwest::Client` surface as `Timeout` too.
fn network_error(e: reqwest::Error) -> FeedlyError {
    if e.is_timeout() {
        FeedlyError::Timeout
    } else {
        FeedlyError::Network(e)
    }
}

/// Append `name=true` for each enabled flag.
pub(crate) fn with_flags(mut url: Url, flags: &[(&str, bool)]) -> Url {
    if flags.iter().any(|(_, on)| *on) {
        let mut pairs = url.query_pairs_mut();
        for (name, on) in flags {
            if *on {
                pairs.append_pair(name, "true");
            }
        }
    }
    url
}

pub(crate) fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, FeedlyError> {
    serde_json::to_vec(body).map_err(FeedlyError::Encode)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, FeedlyError> {
    serde_json::from_slice(body).map_err(FeedlyError::Decode)
}

async fn read_limited_body(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FeedlyError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FeedlyError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(network_error)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FeedlyError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FeedlyClient {
        let config = ClientConfig::new("test-token")
            .with_base_url(&server.uri())
            .unwrap();
        FeedlyClient::new(config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_version_and_segments() {
        let client = FeedlyClient::new(ClientConfig::new("t")).unwrap();
        let url = client.endpoint(&["collections", "abc"]).unwrap();
        assert_eq!(url.as_str(), "https://cloud.feedly.com/v3/collections/abc");
    }

    #[test]
    fn test_endpoint_encodes_slashes_in_ids() {
        let client = FeedlyClient::new(ClientConfig::new("t")).unwrap();
        let url = client
            .endpoint(&["collections", "user/123/category/tech", "feeds"])
            .unwrap();
        assert_eq!(
            url.path(),
            "/v3/collections/user%2F123%2Fcategory%2Ftech/feeds"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let config = ClientConfig::new("t")
            .with_base_url("https://proxy.example.com/feedly/")
            .unwrap()
            .with_version("v4");
        let client = FeedlyClient::new(config).unwrap();
        let url = client.endpoint(&["profile"]).unwrap();
        assert_eq!(url.as_str(), "https://proxy.example.com/feedly/v4/profile");
    }

    #[test]
    fn test_with_flags() {
        let base = Url::parse("https://cloud.feedly.com/v3/collections").unwrap();

        let none = with_flags(base.clone(), &[("withStats", false)]);
        assert_eq!(none.as_str(), "https://cloud.feedly.com/v3/collections");

        let both = with_flags(base, &[("withStats", true), ("withEnterprise", true)]);
        assert_eq!(both.query(), Some("withStats=true&withEnterprise=true"));
    }

    #[tokio::test]
    async fn test_fetch_sends_auth_and_json_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/profile"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let url = client.endpoint(&["profile"]).unwrap();
        let body = client.fetch(Method::GET, url, None).await.unwrap();
        assert_eq!(body, b"{}");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let url = client.endpoint(&["profile"]).unwrap();
        let err = client.fetch(Method::GET, url, None).await.unwrap_err();
        assert!(matches!(err, FeedlyError::HttpStatus(401)));
    }

    #[tokio::test]
    async fn test_response_too_large() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![b'a'; MAX_RESPONSE_SIZE + 1]))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let url = client.endpoint(&["profile"]).unwrap();
        let err = client.fetch(Method::GET, url, None).await.unwrap_err();
        assert!(matches!(err, FeedlyError::ResponseTooLarge(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let config = ClientConfig::new("t")
            .with_base_url(&server.uri())
            .unwrap()
            .with_timeout(Duration::from_millis(50));
        let client = FeedlyClient::new(config).unwrap();
        let url = client.endpoint(&["profile"]).unwrap();
        let err = client.fetch(Method::GET, url, None).await.unwrap_err();
        assert!(matches!(err, FeedlyError::Timeout));
    }

    #[tokio::test]
    async fn test_timeout_covers_stalled_body() {
        use tokio::io::AsyncWriteExt;

        // Headers and part of the body arrive promptly, then the server stalls
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = tokio::io::AsyncReadExt::read(&mut socket, &mut buf).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 20\r\n\r\n{\"id\":")
                .await
                .unwrap();
            socket.flush().await.unwrap();
            tokio::time::sleep(Duration::from_secs(3)).await;
        });

        let config = ClientConfig::new("t")
            .with_base_url(&format!("http://{addr}"))
            .unwrap()
            .with_timeout(Duration::from_millis(200));
        let client = FeedlyClient::new(config).unwrap();
        let url = client.endpoint(&["profile"]).unwrap();

        let started = std::time::Instant::now();
        let err = client.fetch(Method::GET, url, None).await.unwrap_err();
        assert!(matches!(err, FeedlyError::Timeout), "got {err:?}");
        assert!(started.elapsed() < Duration::from_secs(2));

        server.abort();
    }

    #[tokio::test]
    async fn test_client_timeout_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let config = ClientConfig::new("t").with_base_url(&server.uri()).unwrap();
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let client = FeedlyClient::with_http_client(config, http);
        let url = client.endpoint(&["profile"]).unwrap();
        let err = client.fetch(Method::GET, url, None).await.unwrap_err();
        assert!(matches!(err, FeedlyError::Timeout));
    }

    #[test]
    fn test_authorization_header_is_sensitive() {
        let client = FeedlyClient::new(ClientConfig::new("secret-token-123")).unwrap();
        let url = client.endpoint(&["profile"]).unwrap();
        let request = client
            .request(Method::GET, url)
            .unwrap()
            .build()
            .unwrap();

        let auth = request.headers().get(AUTHORIZATION).unwrap();
        assert!(auth.is_sensitive());
        assert_eq!(auth.to_str().unwrap(), "Bearer secret-token-123");
        assert!(!format!("{:?}", request.headers()).contains("secret-token-123"));
    }

    #[test]
    fn test_token_with_newline_rejected() {
        let client = FeedlyClient::new(ClientConfig::new("bad\ntoken")).unwrap();
        let url = client.endpoint(&["profile"]).unwrap();
        let err = client.request(Method::GET, url).unwrap_err();
        assert!(matches!(err, FeedlyError::Config(ConfigError::InvalidToken)));
    }

    #[test]
    fn test_decode_reports_bad_json() {
        let err = decode::<serde_json::Value>(b"not json").unwrap_err();
        assert!(matches!(err, FeedlyError::Decode(_)));
    }
}
