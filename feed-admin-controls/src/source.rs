use std::{io::Cursor, time::Duration};

use async_trait::async_trait;
use rodio::{Source, decoder::DecoderBuilder};
use tokio::time::timeout;
use tracing::{debug, instrument};

use crate::{Error, Result};

/// An owned, playable audio resource.
///
/// Sources live on the player task and are never shared, so they are not
/// required to be `Send`.
#[async_trait(?Send)]
pub trait AudioSource {
    /// Starts or resumes output. Resolves once the output has actually started.
    async fn play(&mut self) -> Result<()>;
    fn pause(&mut self);
    fn position(&self) -> Duration;
    fn duration(&self) -> Option<Duration>;
    fn seek(&mut self, position: Duration) -> Result<()>;

    fn is_finished(&self) -> bool {
        false
    }
}

#[async_trait(?Send)]
pub trait SourceFactory {
    async fn open(&self, url: &str) -> Result<Box<dyn AudioSource>>;
}

/// Downloads a media file and plays it on the default output device.
#[derive(Debug, Clone)]
pub struct RodioSourceFactory {
    client: reqwest::Client,
    stall_timeout: Duration,
}

impl RodioSourceFactory {
    /// `stall_timeout` bounds connecting and every wait for the next chunk of
    /// the body, not the download as a whole.
    pub fn new(stall_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(stall_timeout)
            .build()?;

        Ok(Self {
            client,
            stall_timeout,
        })
    }
}

#[async_trait(?Send)]
impl SourceFactory for RodioSourceFactory {
    #[instrument(skip(self))]
    async fn open(&self, url: &str) -> Result<Box<dyn AudioSource>> {
        let bytes = download(&self.client, url, self.stall_timeout).await?;
        debug!("fetched {} bytes", bytes.len());

        let decoder = DecoderBuilder::new()
            .with_data(Cursor::new(bytes))
            .with_seekable(true)
            .build()?;
        let duration = decoder.total_duration();

        let mut stream_handle = rodio::OutputStreamBuilder::from_default_device()?.open_stream()?;
        stream_handle.log_on_drop(false);

        let sink = rodio::Sink::connect_new(stream_handle.mixer());
        sink.pause();
        sink.append(decoder);

        Ok(Box::new(RodioSource {
            _stream_handle: stream_handle,
            sink,
            duration,
        }))
    }
}

async fn download(client: &reqwest::Client, url: &str, stall_timeout: Duration) -> Result<Vec<u8>> {
    let stalled = || Error::PlaybackTimeout {
        timeout: stall_timeout,
    };

    let mut response = timeout(stall_timeout, client.get(url).send())
        .await
        .map_err(|_| stalled())??
        .error_for_status()?;

    let mut bytes = Vec::with_capacity(response.content_length().unwrap_or_default() as usize);
    while let Some(chunk) = timeout(stall_timeout, response.chunk())
        .await
        .map_err(|_| stalled())??
    {
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

pub struct RodioSource {
    _stream_handle: rodio::OutputStream,
    sink: rodio::Sink,
    duration: Option<Duration>,
}

#[async_trait(?Send)]
impl AudioSource for RodioSource {
    async fn play(&mut self) -> Result<()> {
        if self.sink.empty() {
            return Err(Error::playback("track has already finished"));
        }

        self.sink.play();

        if self.sink.is_paused() {
            return Err(Error::playback("output device refused to start"));
        }

        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        self.sink.try_seek(position)?;
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}
