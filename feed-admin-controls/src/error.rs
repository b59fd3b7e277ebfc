use std::time::Duration;

use crate::{Status, rows::RowId};
use snafu::prelude::*;

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("Unable to play track: {message}"))]
    Playback { message: String },
    #[snafu(display("Playback did not start within {timeout:?}"))]
    PlaybackTimeout { timeout: Duration },
    #[snafu(display("Cannot {operation} while {status}"))]
    InvalidState {
        operation: &'static str,
        status: Status,
    },
    #[snafu(display("Row {row} is no longer in the table"))]
    RowNotFound { row: RowId },
    #[snafu(display("failed to seek"))]
    Seek,
    #[snafu(display("{message}"))]
    Client { message: String },
    #[snafu(display("Unable to init mpris. Is address already taken?"))]
    MprisInitError,
    #[snafu(display("Unable to set mpris property: {property}"))]
    MprisPropertyError { property: String },
}

impl Error {
    pub(crate) fn playback(message: impl Into<String>) -> Self {
        Error::Playback {
            message: message.into(),
        }
    }
}

impl From<rodio::source::SeekError> for Error {
    fn from(_: rodio::source::SeekError) -> Self {
        Error::Seek
    }
}

impl From<rodio::StreamError> for Error {
    fn from(value: rodio::StreamError) -> Self {
        Self::Playback {
            message: value.to_string(),
        }
    }
}

impl From<rodio::decoder::DecoderError> for Error {
    fn from(value: rodio::decoder::DecoderError) -> Self {
        Self::Playback {
            message: value.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Playback {
            message: value.to_string(),
        }
    }
}

impl From<feed_admin_client::Error> for Error {
    fn from(value: feed_admin_client::Error) -> Self {
        Error::Client {
            message: value.to_string(),
        }
    }
}
