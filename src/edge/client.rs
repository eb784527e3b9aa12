use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::envelope;
use crate::config::EdgeConfig;
use crate::error::EdgeError;

/// Calls Edge Functions over HTTP.
///
/// Every call is a `POST { action, ...params }` to
/// `<base_url>/functions/v1/<function>`. No retries; each call stands alone.
#[derive(Debug, Clone)]
pub struct EdgeClient {
    http: reqwest::Client,
    functions_url: Url,
    anon_key: String,
    access_token: Option<String>,
    log_requests: bool,
}

impl EdgeClient {
    pub fn new(config: &EdgeConfig) -> Result<Self, EdgeError> {
        if config.base_url.trim().is_empty() {
            return Err(EdgeError::Config(
                "edge base URL is not set (OPSDASH_EDGE_URL or SUPABASE_URL)".to_string(),
            ));
        }

        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let functions_url = Url::parse(&base)
            .and_then(|url| url.join("functions/v1/"))
            .map_err(|e| EdgeError::Config(format!("invalid edge base URL '{}': {}", config.base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            functions_url,
            anon_key: config.anon_key.clone(),
            access_token: config.access_token.clone(),
            log_requests: config.log_requests,
        })
    }

    /// Use a signed-in user's token instead of the anon key.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn function_url(&self, function: &str) -> Result<Url, EdgeError> {
        if function.is_empty() || function.contains('/') {
            return Err(EdgeError::InvalidParams(format!("invalid function name '{}'", function)));
        }
        self.functions_url
            .join(function)
            .map_err(|e| EdgeError::InvalidParams(format!("invalid function name '{}': {}", function, e)))
    }

    /// Invoke `action` on `function` and decode the `data` payload.
    pub async fn invoke<T, P>(&self, function: &str, action: &str, params: &P) -> Result<T, EdgeError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = envelope::request_body(action, params)?;
        let url = self.function_url(function)?;
        let started = Instant::now();

        if self.log_requests {
            tracing::debug!("POST {} action={}", url, action);
        }

        let mut request = self.http.post(url).json(&body);
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }
        if !self.anon_key.is_empty() {
            request = request.header("apikey", &self.anon_key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!("Edge function {} unreachable: {}", function, e);
            EdgeError::from(e)
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::warn!("{}:{} response body unreadable: {}", function, action, e);
            EdgeError::from(e)
        })?;

        let result = envelope::decode(status, &text);
        match &result {
            Ok(_) if self.log_requests => {
                tracing::debug!(
                    "{}:{} -> {} in {}ms",
                    function,
                    action,
                    status.as_u16(),
                    started.elapsed().as_millis()
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("{}:{} failed: {}", function, action, e),
        }
        result
    }

    /// Invoke an action that takes no params.
    pub async fn call<T: DeserializeOwned>(&self, function: &str, action: &str) -> Result<T, EdgeError> {
        self.invoke(function, action, &()).await
    }

    fn bearer_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .or_else(|| Some(self.anon_key.as_str()).filter(|k| !k.is_empty()))
    }
}
