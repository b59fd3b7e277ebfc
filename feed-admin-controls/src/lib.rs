use std::time::Duration;

use tokio::sync::watch;

pub mod controls;
pub mod error;
pub mod notification;
pub mod player;
pub mod rows;
pub mod selection;
pub mod session;
pub mod source;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type StatusReceiver = watch::Receiver<Status>;
pub type MetadataReceiver = watch::Receiver<Option<TrackMetadata>>;
pub type PositionReceiver = watch::Receiver<Duration>;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Playing,
    Paused,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Status::Idle => "idle",
            Status::Playing => "playing",
            Status::Paused => "paused",
        };

        f.write_str(status)
    }
}

/// What the host media session shows for the current track.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    pub title: String,
    pub artist: Option<String>,
    pub url: String,
    pub length: Option<Duration>,
}
