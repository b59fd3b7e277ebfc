use snafu::prelude::*;

pub mod client;
pub mod live;
pub mod models;

pub use client::Client;
pub use models::{FeedStatus, FeedStatusUpdate, ModeratorFeed};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("Invalid base url: {message}"))]
    InvalidUrl { message: String },
    #[snafu(display("Request failed: {message}"))]
    Request { message: String },
    #[snafu(display("Updating feed {feed_id} failed with status {status}"))]
    Status { feed_id: i32, status: u16 },
    #[snafu(display("{status} cannot be set here"))]
    InvalidAction { status: FeedStatus },
    #[snafu(display("No feeds selected"))]
    EmptySelection,
    #[snafu(display("Unable to decode live update: {message}"))]
    DeserializeJSON { message: String },
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Request {
            message: value.to_string(),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(value: url::ParseError) -> Self {
        Error::InvalidUrl {
            message: value.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::DeserializeJSON {
            message: value.to_string(),
        }
    }
}
