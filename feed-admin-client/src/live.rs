//! Typed decoding of the live feed stream.
//!
//! The server pushes one JSON encoded [`ModeratorFeed`] per message. Messages
//! are validated here so that nothing but well formed feed records ever
//! reaches the review table.

use futures::{Stream, StreamExt};
use tracing::warn;
use url::Url;

use crate::{Error, Result, models::ModeratorFeed};

pub fn decode(message: &str) -> Result<ModeratorFeed> {
    let feed: ModeratorFeed = serde_json::from_str(message.trim())?;
    validate(&feed)?;
    Ok(feed)
}

fn validate(feed: &ModeratorFeed) -> Result<()> {
    if feed.id <= 0 {
        return Err(invalid(format!("feed id {} is not positive", feed.id)));
    }

    if feed.title.trim().is_empty() {
        return Err(invalid(format!("feed {} has no title", feed.id)));
    }

    check_http_url(&feed.url)?;
    if let Some(link) = &feed.link_web {
        check_http_url(link)?;
    }

    Ok(())
}

fn check_http_url(value: &str) -> Result<()> {
    let url = Url::parse(value).map_err(|err| invalid(format!("{value}: {err}")))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("{value}: unsupported scheme {scheme}"))),
    }
}

fn invalid(message: String) -> Error {
    Error::DeserializeJSON { message }
}

/// Decodes every text frame of `messages`, skipping empty keep-alive frames.
pub fn feed_updates<S>(messages: S) -> impl Stream<Item = Result<ModeratorFeed>>
where
    S: Stream<Item = String>,
{
    messages
        .filter(|message| futures::future::ready(!message.trim().is_empty()))
        .map(|message| {
            decode(&message).inspect_err(|err| warn!("dropping live update: {err}"))
        })
}
