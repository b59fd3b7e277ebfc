use crate::{
    Error, Result,
    models::{FeedStatus, FeedStatusUpdate},
};
use futures::future::try_join_all;
use reqwest::{
    Method, Response,
    header::{HeaderMap, HeaderValue},
};
use std::fmt::Display;
use tracing::{debug, error, instrument};
use url::Url;

pub const DEFAULT_STATUS_PATH: &str = "update-feed-status";
pub const PROFILE_UPDATE_PATH: &str = "profile/update-feed";

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    status_path: String,
    client: reqwest::Client,
}

pub fn new(base_url: &str, status_path: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "User-Agent",
        HeaderValue::from_static(concat!("feed-admin/", env!("CARGO_PKG_VERSION"))),
    );

    let http_client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    let base_url = Url::parse(base_url)?;

    Ok(Client {
        base_url,
        status_path: status_path.unwrap_or(DEFAULT_STATUS_PATH).to_string(),
        client: http_client,
    })
}

enum Endpoint<'a> {
    UpdateFeedStatus(&'a str),
    ProfileUpdateFeed,
}

impl Display for Endpoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endpoint = match self {
            Endpoint::UpdateFeedStatus(path) => *path,
            Endpoint::ProfileUpdateFeed => PROFILE_UPDATE_PATH,
        };

        f.write_str(endpoint)
    }
}

impl Client {
    /// Moderator update of any feed.
    #[instrument(skip(self))]
    pub async fn update_feed_status(&self, feed_id: i32, action: FeedStatus) -> Result<()> {
        if !action.is_review_action() {
            return Err(Error::InvalidAction { status: action });
        }

        self.patch_status(Endpoint::UpdateFeedStatus(&self.status_path), feed_id, action)
            .await
    }

    /// Owner update of one of their own feeds, limited to `Online` and `Offline`.
    #[instrument(skip(self))]
    pub async fn update_own_feed(&self, feed_id: i32, action: FeedStatus) -> Result<()> {
        if !action.is_visibility_action() {
            return Err(Error::InvalidAction { status: action });
        }

        self.patch_status(Endpoint::ProfileUpdateFeed, feed_id, action)
            .await
    }

    /// Sends one update per feed concurrently. Any failure fails the whole batch.
    pub async fn update_feed_statuses<I>(&self, feed_ids: I, action: FeedStatus) -> Result<usize>
    where
        I: IntoIterator<Item = i32>,
    {
        let updates: Vec<_> = feed_ids
            .into_iter()
            .map(|feed_id| self.update_feed_status(feed_id, action))
            .collect();

        if updates.is_empty() {
            return Err(Error::EmptySelection);
        }

        let count = updates.len();
        try_join_all(updates).await.inspect_err(|err| {
            error!("bulk update to {action} failed: {err}");
        })?;

        Ok(count)
    }

    async fn patch_status(
        &self,
        endpoint: Endpoint<'_>,
        feed_id: i32,
        action: FeedStatus,
    ) -> Result<()> {
        let endpoint = self.base_url.join(&endpoint.to_string())?;
        let body = FeedStatusUpdate { feed_id, action };

        debug!("calling {} endpoint, with body {body:?}", endpoint);
        let response = self
            .client
            .request(Method::PATCH, endpoint)
            .json(&body)
            .send()
            .await?;

        self.handle_response(feed_id, response)
    }

    fn handle_response(&self, feed_id: i32, response: Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Status {
                feed_id,
                status: status.as_u16(),
            })
        }
    }
}
