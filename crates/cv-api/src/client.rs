//! Convai API client
//!
//! Every call is a JSON request authenticated with the configured bearer
//! token. Non-2xx responses surface as [`ConvaiError::Api`] carrying the
//! status and the raw response body.

use std::time::Duration;

use async_trait::async_trait;
use cv_core::config::ClientConfig;
use cv_core::error::ConvaiError;
use cv_core::result::CvResult;
use cv_models::{
    BroadcastInput, BroadcastResult, ChannelUser, Execution, ExecutionQueryResult,
    MergeUsersRequest, Session, SuperUser, TriggerRequest, UpdateUserDataInput,
    UserQueryReachableResult, UserQueryResult,
};
use cv_queries::{ExecutionQuery, UserQuery};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::api::ConvaiApi;
use crate::document::QueryDocument;

/// HTTP client for the platform API
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ConvaiClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl ConvaiClient {
    pub fn new(config: ClientConfig) -> CvResult<Self> {
        config.check()?;

        let base_url = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ConvaiError::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Client against the production API with default settings
    pub fn with_api_key(api_key: impl Into<String>) -> CvResult<Self> {
        Self::new(ClientConfig::new(api_key))
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Point the client at another API root
    pub fn set_base_url(&mut self, base_url: &str) -> CvResult<()> {
        self.base_url = parse_base_url(base_url)?;
        Ok(())
    }

    /// Submit a query document to its endpoint
    ///
    /// Incomplete predicates are sent as built; the platform decides how to
    /// treat them.
    #[instrument(skip_all, fields(endpoint = %Q::PATH.join("/")))]
    pub async fn submit<Q: QueryDocument>(&self, document: &Q) -> CvResult<Q::Output> {
        if !document.is_complete() {
            warn!("Submitting a query with predicates missing operands");
        }
        self.send(Method::POST, Q::PATH, Some(document)).await
    }

    fn endpoint(&self, segments: &[&str]) -> CvResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ConvaiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> CvResult<T> {
        self.send::<(), T>(Method::DELETE, segments, None).await
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> CvResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "Sending request");

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .bearer_auth(&self.api_key);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ConvaiError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ConvaiError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "Request failed");
            return Err(ConvaiError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ConvaiError::Decode(e.to_string()))
    }
}

fn parse_base_url(base_url: &str) -> CvResult<Url> {
    let url = Url::parse(base_url).map_err(|e| ConvaiError::InvalidUrl(format!("{base_url}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConvaiError::InvalidUrl(base_url.to_string()));
    }

    Ok(url)
}

#[async_trait]
impl ConvaiApi for ConvaiClient {
    async fn query_executions(&self, query: &ExecutionQuery) -> CvResult<ExecutionQueryResult> {
        self.submit(query).await
    }

    async fn trigger(&self, req: &TriggerRequest) -> CvResult<Execution> {
        self.send(Method::POST, &["executions", "trigger"], Some(req)).await
    }

    async fn broadcast(&self, input: &BroadcastInput) -> CvResult<BroadcastResult> {
        self.send(Method::POST, &["executions", "broadcast"], Some(input)).await
    }

    async fn query_users(&self, query: &UserQuery) -> CvResult<UserQueryResult> {
        self.submit(query).await
    }

    async fn query_users_reachable(&self, query: &UserQuery) -> CvResult<UserQueryReachableResult> {
        self.send(Method::POST, &["users", "super", "query", "reachable"], Some(query))
            .await
    }

    async fn merge_users(&self, req: &MergeUsersRequest) -> CvResult<SuperUser> {
        self.send(Method::POST, &["users", "super", "merge"], Some(req)).await
    }

    #[instrument(skip(self))]
    async fn delete_super_user(&self, id: &str) -> CvResult<SuperUser> {
        self.delete(&["users", "super", id]).await
    }

    #[instrument(skip(self, input))]
    async fn update_user_data(
        &self,
        super_user_id: &str,
        input: &UpdateUserDataInput,
    ) -> CvResult<SuperUser> {
        self.send(Method::PUT, &["users", "super", super_user_id], Some(input))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_channel_user(&self, user_id: &str) -> CvResult<ChannelUser> {
        self.delete(&["users", "channel", user_id]).await
    }

    #[instrument(skip(self, input))]
    async fn update_session(&self, user_id: &str, input: &UpdateUserDataInput) -> CvResult<Session> {
        self.send(Method::PUT, &["users", "session", user_id], Some(input))
            .await
    }

    #[instrument(skip(self))]
    async fn delete_session(&self, user_id: &str) -> CvResult<Session> {
        self.delete(&["users", "session", user_id]).await
    }
}
