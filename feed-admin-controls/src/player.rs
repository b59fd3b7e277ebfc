use std::{sync::Arc, time::Duration};

use tokio::{
    select,
    sync::{mpsc::UnboundedReceiver, watch},
};
use tracing::{debug, error, instrument};

use crate::{
    Error, MetadataReceiver, PositionReceiver, Result, Status, StatusReceiver, TrackMetadata,
    controls::ControlCommand,
    notification::NotificationBroadcast,
    rows::{RowId, RowRegistry},
    source::{AudioSource, SourceFactory},
};

/// Distance covered by one seek forward or backward.
pub const SKIP_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_START_TIMEOUT: Duration = Duration::from_secs(10);
const POSITION_INTERVAL: Duration = Duration::from_millis(500);

struct Track {
    source: Box<dyn AudioSource>,
    row: RowId,
}

#[derive(Default)]
enum PlayerState {
    #[default]
    Idle,
    Playing(Track),
    Paused(Track),
}

impl PlayerState {
    fn status(&self) -> Status {
        match self {
            PlayerState::Idle => Status::Idle,
            PlayerState::Playing(_) => Status::Playing,
            PlayerState::Paused(_) => Status::Paused,
        }
    }

    fn track(&self) -> Option<&Track> {
        match self {
            PlayerState::Idle => None,
            PlayerState::Playing(track) | PlayerState::Paused(track) => Some(track),
        }
    }
}

/// Plays one track at a time and keeps the play/pause indicators of the
/// bound row in line with what is actually audible.
pub struct AudioPlayer {
    state: PlayerState,
    factory: Box<dyn SourceFactory>,
    rows: Arc<RowRegistry>,
    broadcast: Arc<NotificationBroadcast>,
    artist: Option<String>,
    start_timeout: Duration,
    status_tx: watch::Sender<Status>,
    metadata_tx: watch::Sender<Option<TrackMetadata>>,
    position_tx: watch::Sender<Duration>,
}

impl AudioPlayer {
    pub fn new(
        factory: Box<dyn SourceFactory>,
        rows: Arc<RowRegistry>,
        broadcast: Arc<NotificationBroadcast>,
    ) -> Self {
        let (status_tx, _) = watch::channel(Status::Idle);
        let (metadata_tx, _) = watch::channel(None);
        let (position_tx, _) = watch::channel(Duration::ZERO);

        Self {
            state: PlayerState::Idle,
            factory,
            rows,
            broadcast,
            artist: None,
            start_timeout: DEFAULT_START_TIMEOUT,
            status_tx,
            metadata_tx,
            position_tx,
        }
    }

    /// Artist label published with every track, usually the podcast title.
    pub fn with_artist(mut self, artist: Option<String>) -> Self {
        self.artist = artist;
        self
    }

    pub fn with_start_timeout(mut self, start_timeout: Duration) -> Self {
        self.start_timeout = start_timeout;
        self
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn bound_row(&self) -> Option<RowId> {
        self.state.track().map(|track| track.row)
    }

    pub fn position(&self) -> Option<Duration> {
        self.state.track().map(|track| track.source.position())
    }

    pub fn status_receiver(&self) -> StatusReceiver {
        self.status_tx.subscribe()
    }

    pub fn metadata_receiver(&self) -> MetadataReceiver {
        self.metadata_tx.subscribe()
    }

    pub fn position_receiver(&self) -> PositionReceiver {
        self.position_tx.subscribe()
    }

    /// Starts `url` for `row`, pausing whatever is playing first.
    ///
    /// The row indicators only flip once the new source has confirmed that
    /// playback started. If it fails, the previous track stays bound and
    /// paused.
    #[instrument(skip(self))]
    pub async fn play(&mut self, url: &str, row: RowId) -> Result<()> {
        self.start(url, row).await.map_err(|err| self.report(err))
    }

    #[instrument(skip(self))]
    pub async fn resume(&mut self) -> Result<()> {
        self.restart().await.map_err(|err| self.report(err))
    }

    /// Pausing a paused player is a no-op.
    #[instrument(skip(self))]
    pub async fn pause(&mut self) -> Result<()> {
        self.halt().await.map_err(|err| self.report(err))
    }

    pub fn seek_forward(&mut self) -> Result<()> {
        self.skip_forward().map_err(|err| self.report(err))
    }

    pub fn seek_backward(&mut self) -> Result<()> {
        self.skip_backward().map_err(|err| self.report(err))
    }

    async fn start(&mut self, url: &str, row: RowId) -> Result<()> {
        if url.trim().is_empty() {
            return Err(Error::playback("media url is empty"));
        }

        let title = self.rows.title(row).await?;

        if let PlayerState::Playing(_) = self.state {
            self.halt().await?;
        }

        // Opening may take as long as the download needs; only the start of
        // output is bounded.
        let mut source = self.factory.open(url).await?;

        let timeout = self.start_timeout;
        match tokio::time::timeout(timeout, source.play()).await {
            Ok(started) => started?,
            Err(_) => return Err(Error::PlaybackTimeout { timeout }),
        }

        let metadata = TrackMetadata {
            title,
            artist: self.artist.clone(),
            url: url.to_string(),
            length: source.duration(),
        };

        self.state = PlayerState::Playing(Track { source, row });
        self.metadata_tx.send_replace(Some(metadata));
        self.position_tx.send_replace(Duration::ZERO);
        self.publish_status();
        self.rows.set_playing(row, true).await;

        debug!("playing {url} for row {row}");
        Ok(())
    }

    async fn restart(&mut self) -> Result<()> {
        let timeout = self.start_timeout;

        let track = match &mut self.state {
            PlayerState::Idle => {
                return Err(Error::InvalidState {
                    operation: "resume",
                    status: Status::Idle,
                });
            }
            PlayerState::Playing(_) => return Ok(()),
            PlayerState::Paused(track) => track,
        };

        let row = track.row;
        let started = match tokio::time::timeout(timeout, track.source.play()).await {
            Ok(started) => started,
            Err(_) => Err(Error::PlaybackTimeout { timeout }),
        };

        if let Err(err) = started {
            track.source.pause();
            return Err(err);
        }

        self.transition(true);
        self.publish_status();
        self.rows.set_playing(row, true).await;

        Ok(())
    }

    async fn halt(&mut self) -> Result<()> {
        let track = match &mut self.state {
            PlayerState::Idle => {
                return Err(Error::InvalidState {
                    operation: "pause",
                    status: Status::Idle,
                });
            }
            PlayerState::Paused(_) => return Ok(()),
            PlayerState::Playing(track) => track,
        };

        track.source.pause();
        let row = track.row;

        self.transition(false);
        self.publish_status();
        self.rows.set_playing(row, false).await;

        Ok(())
    }

    fn skip_forward(&mut self) -> Result<()> {
        let position = {
            let track = self.track_mut("seek forward")?;
            let target = track.source.position() + SKIP_INTERVAL;
            let target = match track.source.duration() {
                Some(duration) => target.min(duration),
                None => target,
            };

            track.source.seek(target)?;
            target
        };

        self.position_tx.send_replace(position);
        Ok(())
    }

    fn skip_backward(&mut self) -> Result<()> {
        let position = {
            let track = self.track_mut("seek backward")?;
            let target = track.source.position().saturating_sub(SKIP_INTERVAL);

            track.source.seek(target)?;
            target
        };

        self.position_tx.send_replace(position);
        Ok(())
    }

    async fn play_pause(&mut self) -> Result<()> {
        match self.state {
            PlayerState::Playing(_) => self.pause().await,
            _ => self.resume().await,
        }
    }

    fn track_mut(&mut self, operation: &'static str) -> Result<&mut Track> {
        match &mut self.state {
            PlayerState::Idle => Err(Error::InvalidState {
                operation,
                status: Status::Idle,
            }),
            PlayerState::Playing(track) | PlayerState::Paused(track) => Ok(track),
        }
    }

    fn transition(&mut self, playing: bool) {
        self.state = match std::mem::take(&mut self.state) {
            PlayerState::Idle => PlayerState::Idle,
            PlayerState::Playing(track) | PlayerState::Paused(track) => {
                if playing {
                    PlayerState::Playing(track)
                } else {
                    PlayerState::Paused(track)
                }
            }
        };
    }

    fn publish_status(&self) {
        self.status_tx.send_replace(self.state.status());
    }

    fn report(&self, err: Error) -> Error {
        error!("{err}");
        self.broadcast.send_error(err.to_string());
        err
    }

    async fn tick(&mut self) {
        let PlayerState::Playing(track) = &self.state else {
            return;
        };

        if track.source.is_finished() {
            let row = track.row;
            debug!("track for row {row} finished");

            self.state = PlayerState::Idle;
            self.metadata_tx.send_replace(None);
            self.position_tx.send_replace(Duration::ZERO);
            self.publish_status();
            self.rows.set_playing(row, false).await;
            return;
        }

        self.position_tx.send_replace(track.source.position());
    }

    async fn handle_command(&mut self, command: ControlCommand) -> bool {
        let result = match &command {
            ControlCommand::Play { url, row } => self.play(url, *row).await,
            ControlCommand::Resume => self.resume().await,
            ControlCommand::Pause => self.pause().await,
            ControlCommand::PlayPause => self.play_pause().await,
            ControlCommand::SeekForward => self.seek_forward(),
            ControlCommand::SeekBackward => self.seek_backward(),
            ControlCommand::Quit => return true,
        };

        if let Err(err) = result {
            debug!("{command:?} failed: {err}");
        }

        false
    }

    pub async fn player_loop(
        &mut self,
        mut commands: UnboundedReceiver<ControlCommand>,
    ) -> Result<()> {
        let mut interval = tokio::time::interval(POSITION_INTERVAL);

        loop {
            select! {
                _ = interval.tick() => {
                    self.tick().await;
                }

                command = commands.recv() => {
                    let Some(command) = command else {
                        break;
                    };

                    let quit = self.handle_command(command).await;
                    if quit {
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{controls::Controls, notification::Notification, rows::Row};
    use async_trait::async_trait;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Debug, Default)]
    struct SourceProbe {
        url: String,
        playing: bool,
        position: Duration,
        refuse_play: bool,
        finished: bool,
    }

    struct FakeSource {
        probe: Rc<RefCell<SourceProbe>>,
        duration: Option<Duration>,
        hang: bool,
    }

    #[async_trait(?Send)]
    impl AudioSource for FakeSource {
        async fn play(&mut self) -> Result<()> {
            if self.hang {
                return std::future::pending().await;
            }
            if self.probe.borrow().refuse_play {
                return Err(Error::playback("refused"));
            }
            self.probe.borrow_mut().playing = true;
            Ok(())
        }

        fn pause(&mut self) {
            self.probe.borrow_mut().playing = false;
        }

        fn position(&self) -> Duration {
            self.probe.borrow().position
        }

        fn duration(&self) -> Option<Duration> {
            self.duration
        }

        fn seek(&mut self, position: Duration) -> Result<()> {
            self.probe.borrow_mut().position = position;
            Ok(())
        }

        fn is_finished(&self) -> bool {
            self.probe.borrow().finished
        }
    }

    #[derive(Clone, Default)]
    struct FakeFactory {
        sources: Rc<RefCell<Vec<Rc<RefCell<SourceProbe>>>>>,
        duration: Option<Duration>,
    }

    impl FakeFactory {
        fn source(&self, index: usize) -> Rc<RefCell<SourceProbe>> {
            self.sources.borrow()[index].clone()
        }

        fn opened(&self) -> usize {
            self.sources.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl SourceFactory for FakeFactory {
        async fn open(&self, url: &str) -> Result<Box<dyn AudioSource>> {
            if url.contains("broken") {
                return Err(Error::playback("unsupported format"));
            }
            if url.contains("slow") {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }

            let probe = Rc::new(RefCell::new(SourceProbe {
                url: url.to_string(),
                ..Default::default()
            }));
            self.sources.borrow_mut().push(probe.clone());

            Ok(Box::new(FakeSource {
                probe,
                duration: self.duration,
                hang: url.contains("hang"),
            }))
        }
    }

    struct Harness {
        player: AudioPlayer,
        rows: Arc<RowRegistry>,
        factory: FakeFactory,
        broadcast: Arc<NotificationBroadcast>,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_duration(Some(Duration::from_secs(600)))
        }

        fn with_duration(duration: Option<Duration>) -> Self {
            let rows = Arc::new(RowRegistry::new());
            let broadcast = Arc::new(NotificationBroadcast::new());
            let factory = FakeFactory {
                duration,
                ..Default::default()
            };
            let player = AudioPlayer::new(Box::new(factory.clone()), rows.clone(), broadcast.clone())
                .with_artist(Some("Bits und so".to_string()));

            Self {
                player,
                rows,
                factory,
                broadcast,
            }
        }

        async fn row(&self, title: &str) -> RowId {
            self.rows.insert(Row::new(title)).await
        }

        async fn is_playing(&self, row: RowId) -> bool {
            self.rows.get(row).await.unwrap().is_playing()
        }

        async fn shows_play(&self, row: RowId) -> bool {
            let row = self.rows.get(row).await.unwrap();
            row.play_visible && !row.pause_visible
        }
    }

    #[tokio::test]
    async fn play_binds_row_and_flips_indicators() {
        let mut h = Harness::new();
        let row = h.row("Episode 1").await;

        h.player.play("http://host/a.mp3", row).await.unwrap();

        assert_eq!(h.player.status(), Status::Playing);
        assert_eq!(h.player.bound_row(), Some(row));
        assert!(h.is_playing(row).await);
        assert!(h.factory.source(0).borrow().playing);
    }

    #[tokio::test]
    async fn play_publishes_metadata_and_status() {
        let mut h = Harness::new();
        let row = h.row("Episode 1").await;
        let status = h.player.status_receiver();
        let metadata = h.player.metadata_receiver();

        h.player.play("http://host/a.mp3", row).await.unwrap();

        assert_eq!(*status.borrow(), Status::Playing);
        assert_eq!(
            *metadata.borrow(),
            Some(TrackMetadata {
                title: "Episode 1".to_string(),
                artist: Some("Bits und so".to_string()),
                url: "http://host/a.mp3".to_string(),
                length: Some(Duration::from_secs(600)),
            })
        );
    }

    #[tokio::test]
    async fn second_play_pauses_the_first_track() {
        let mut h = Harness::new();
        let row_a = h.row("A").await;
        let row_b = h.row("B").await;

        h.player.play("http://host/a.mp3", row_a).await.unwrap();
        h.player.play("http://host/b.mp3", row_b).await.unwrap();

        assert!(h.shows_play(row_a).await);
        assert!(h.is_playing(row_b).await);
        assert!(!h.factory.source(0).borrow().playing);
        assert!(h.factory.source(1).borrow().playing);
        assert_eq!(h.player.bound_row(), Some(row_b));
    }

    #[tokio::test]
    async fn play_play_pause_leaves_both_rows_showing_play() {
        let mut h = Harness::new();
        let row_1 = h.row("1").await;
        let row_2 = h.row("2").await;

        h.player.play("a.mp3", row_1).await.unwrap();
        h.player.play("b.mp3", row_2).await.unwrap();
        h.player.pause().await.unwrap();

        assert!(h.shows_play(row_1).await);
        assert!(h.shows_play(row_2).await);
        assert_eq!(h.player.status(), Status::Paused);
        assert_eq!(h.player.bound_row(), Some(row_2));
    }

    #[tokio::test]
    async fn at_most_one_row_shows_playing() {
        let mut h = Harness::new();
        let mut rows = Vec::new();
        for title in ["a", "b", "c", "d"] {
            rows.push(h.row(title).await);
        }

        for (index, row) in [0, 2, 2, 1, 3, 0].into_iter().map(|i| (i, rows[i])) {
            h.player
                .play(&format!("http://host/{index}.mp3"), row)
                .await
                .unwrap();

            assert_eq!(h.rows.playing_rows().await, vec![row]);
        }
    }

    #[tokio::test]
    async fn pause_then_resume_keeps_row_and_position() {
        let mut h = Harness::new();
        let row = h.row("Episode").await;
        h.player.play("a.mp3", row).await.unwrap();
        h.factory.source(0).borrow_mut().position = Duration::from_secs(42);

        h.player.pause().await.unwrap();
        assert!(h.shows_play(row).await);

        h.player.resume().await.unwrap();

        assert_eq!(h.player.status(), Status::Playing);
        assert_eq!(h.player.bound_row(), Some(row));
        assert_eq!(h.player.position(), Some(Duration::from_secs(42)));
        assert_eq!(h.factory.opened(), 1);
        assert!(h.is_playing(row).await);
    }

    #[tokio::test]
    async fn resume_while_idle_is_rejected() {
        let mut h = Harness::new();
        let row = h.row("Episode").await;

        let result = h.player.resume().await;

        assert!(matches!(
            result,
            Err(Error::InvalidState {
                status: Status::Idle,
                ..
            })
        ));
        assert!(h.shows_play(row).await);
        assert_eq!(h.player.status(), Status::Idle);
    }

    #[tokio::test]
    async fn resume_while_playing_is_noop() {
        let mut h = Harness::new();
        let row = h.row("Episode").await;
        h.player.play("a.mp3", row).await.unwrap();

        h.player.resume().await.unwrap();

        assert_eq!(h.player.status(), Status::Playing);
        assert_eq!(h.factory.opened(), 1);
    }

    #[tokio::test]
    async fn pause_is_idempotent_and_rejected_while_idle() {
        let mut h = Harness::new();
        let row = h.row("Episode").await;

        assert!(matches!(
            h.player.pause().await,
            Err(Error::InvalidState { .. })
        ));

        h.player.play("a.mp3", row).await.unwrap();
        h.player.pause().await.unwrap();
        h.player.pause().await.unwrap();

        assert_eq!(h.player.status(), Status::Paused);
        assert!(h.shows_play(row).await);
    }

    #[tokio::test]
    async fn seek_backward_clamps_at_zero() {
        let mut h = Harness::new();
        let row = h.row("Episode").await;
        h.player.play("a.mp3", row).await.unwrap();
        h.factory.source(0).borrow_mut().position = Duration::from_secs(12);

        h.player.seek_backward().unwrap();

        assert_eq!(h.player.position(), Some(Duration::ZERO));
    }

    #[tokio::test]
    async fn seek_forward_then_backward_returns_to_start() {
        let mut h = Harness::new();
        let row = h.row("Episode").await;
        h.player.play("a.mp3", row).await.unwrap();
        h.factory.source(0).borrow_mut().position = Duration::from_secs(40);

        h.player.seek_forward().unwrap();
        assert_eq!(h.player.position(), Some(Duration::from_secs(70)));

        h.player.seek_backward().unwrap();
        assert_eq!(h.player.position(), Some(Duration::from_secs(40)));
    }

    #[tokio::test]
    async fn seek_forward_stops_at_duration() {
        let mut h = Harness::with_duration(Some(Duration::from_secs(100)));
        let row = h.row("Episode").await;
        h.player.play("a.mp3", row).await.unwrap();
        h.factory.source(0).borrow_mut().position = Duration::from_secs(90);

        h.player.seek_forward().unwrap();

        assert_eq!(h.player.position(), Some(Duration::from_secs(100)));
    }

    #[tokio::test]
    async fn seek_works_while_paused_and_fails_while_idle() {
        let mut h = Harness::with_duration(None);
        let row = h.row("Episode").await;

        assert!(h.player.seek_forward().is_err());
        assert!(h.player.seek_backward().is_err());

        h.player.play("a.mp3", row).await.unwrap();
        h.player.pause().await.unwrap();
        h.player.seek_forward().unwrap();

        assert_eq!(h.player.position(), Some(SKIP_INTERVAL));
        assert_eq!(h.player.status(), Status::Paused);
    }

    #[tokio::test]
    async fn failed_play_keeps_previous_track_paused() {
        let mut h = Harness::new();
        let row_a = h.row("A").await;
        let row_b = h.row("B").await;
        let mut notifications = h.broadcast.subscribe();

        h.player.play("a.mp3", row_a).await.unwrap();
        let result = h.player.play("broken.ogg", row_b).await;

        assert!(matches!(result, Err(Error::Playback { .. })));
        assert!(h.rows.playing_rows().await.is_empty());
        assert_eq!(h.player.status(), Status::Paused);
        assert_eq!(h.player.bound_row(), Some(row_a));
        assert!(matches!(
            notifications.recv().await.unwrap(),
            Notification::Error(_)
        ));

        h.player.resume().await.unwrap();
        assert!(h.is_playing(row_a).await);
    }

    #[tokio::test]
    async fn failed_first_play_stays_idle() {
        let mut h = Harness::new();
        let row = h.row("A").await;

        assert!(h.player.play("broken.ogg", row).await.is_err());

        assert_eq!(h.player.status(), Status::Idle);
        assert!(h.shows_play(row).await);
        assert!(h.player.play("ok.mp3", row).await.is_ok());
    }

    #[tokio::test]
    async fn empty_url_is_rejected() {
        let mut h = Harness::new();
        let row = h.row("A").await;

        assert!(h.player.play("  ", row).await.is_err());
        assert_eq!(h.factory.opened(), 0);
    }

    #[tokio::test]
    async fn play_for_removed_row_is_rejected() {
        let mut h = Harness::new();
        let row = h.row("A").await;
        h.rows.remove(row).await;

        assert!(matches!(
            h.player.play("a.mp3", row).await,
            Err(Error::RowNotFound { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn hung_start_times_out() {
        let mut h = Harness::new();
        let row = h.row("A").await;
        h.player = h.player.with_start_timeout(Duration::from_secs(5));

        let result = h.player.play("http://host/hang.mp3", row).await;

        assert!(matches!(result, Err(Error::PlaybackTimeout { .. })));
        assert_eq!(h.player.status(), Status::Idle);
        assert!(h.shows_play(row).await);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_download_is_not_a_start_timeout() {
        let mut h = Harness::new();
        let row = h.row("A").await;
        h.player = h.player.with_start_timeout(Duration::from_secs(5));

        h.player.play("http://host/slow.mp3", row).await.unwrap();

        assert_eq!(h.player.status(), Status::Playing);
        assert!(h.is_playing(row).await);
    }

    #[tokio::test]
    async fn refused_resume_stays_paused() {
        let mut h = Harness::new();
        let row = h.row("A").await;
        h.player.play("a.mp3", row).await.unwrap();
        h.player.pause().await.unwrap();
        h.factory.source(0).borrow_mut().refuse_play = true;

        assert!(h.player.resume().await.is_err());

        assert_eq!(h.player.status(), Status::Paused);
        assert!(h.shows_play(row).await);
    }

    #[tokio::test]
    async fn finished_track_returns_to_idle() {
        let mut h = Harness::new();
        let row = h.row("A").await;
        h.player.play("a.mp3", row).await.unwrap();
        h.factory.source(0).borrow_mut().finished = true;

        h.player.tick().await;

        assert_eq!(h.player.status(), Status::Idle);
        assert_eq!(h.player.bound_row(), None);
        assert!(h.shows_play(row).await);
        assert!(h.player.metadata_receiver().borrow().is_none());
    }

    #[tokio::test]
    async fn player_loop_runs_commands_until_quit() {
        let mut h = Harness::new();
        let row_a = h.row("A").await;
        let row_b = h.row("B").await;
        let (controls, commands) = Controls::channel();

        controls.play("a.mp3", row_a);
        controls.play("b.mp3", row_b);
        controls.seek_forward();
        controls.play_pause();
        controls.quit();

        h.player.player_loop(commands).await.unwrap();

        assert_eq!(h.player.status(), Status::Paused);
        assert_eq!(h.player.bound_row(), Some(row_b));
        assert_eq!(h.player.position(), Some(SKIP_INTERVAL));
        assert_eq!(h.factory.source(1).borrow().url, "b.mp3");
        assert!(h.rows.playing_rows().await.is_empty());
    }

    #[tokio::test]
    async fn player_loop_broadcasts_every_failed_command() {
        let mut h = Harness::new();
        let row = h.row("A").await;
        h.rows.remove(row).await;
        let mut notifications = h.broadcast.subscribe();
        let (controls, commands) = Controls::channel();

        controls.play("a.mp3", row);
        controls.resume();
        controls.seek_forward();
        controls.quit();

        h.player.player_loop(commands).await.unwrap();

        let mut errors = Vec::new();
        while let Ok(notification) = notifications.try_recv() {
            assert_eq!(notification.style(), crate::notification::AlertStyle::Error);
            errors.push(notification.message().to_string());
        }

        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("no longer in the table"));
        assert!(errors[1].contains("resume"));
        assert!(errors[2].contains("seek forward"));
    }
}
