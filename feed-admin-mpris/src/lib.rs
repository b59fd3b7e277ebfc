use feed_admin_controls::{
    MetadataReceiver, PositionReceiver, Result, Status, StatusReceiver, TrackMetadata,
    controls::Controls, error::Error,
};
use mpris_server::{
    LoopStatus, Metadata, PlaybackRate, PlaybackStatus, PlayerInterface, Property, RootInterface,
    Server, Time, TrackId, Volume,
    zbus::{self, fdo},
};
use tracing::debug;

const BUS_NAME: &str = "com.github.sofusa-feed-admin";

struct MprisPlayer {
    controls: Controls,
    status_receiver: StatusReceiver,
    metadata_receiver: MetadataReceiver,
    position_receiver: PositionReceiver,
}

impl RootInterface for MprisPlayer {
    async fn identity(&self) -> fdo::Result<String> {
        Ok("Feed-admin".into())
    }
    async fn raise(&self) -> fdo::Result<()> {
        Err(fdo::Error::NotSupported("Not supported".into()))
    }
    async fn quit(&self) -> fdo::Result<()> {
        self.controls.quit();
        Ok(())
    }
    async fn can_quit(&self) -> fdo::Result<bool> {
        Ok(true)
    }
    async fn fullscreen(&self) -> fdo::Result<bool> {
        Err(fdo::Error::NotSupported("Not supported".into()))
    }
    async fn set_fullscreen(&self, _fullscreen: bool) -> zbus::Result<()> {
        Err(zbus::Error::Unsupported)
    }
    async fn can_set_fullscreen(&self) -> fdo::Result<bool> {
        Ok(false)
    }
    async fn can_raise(&self) -> fdo::Result<bool> {
        Ok(false)
    }
    async fn has_track_list(&self) -> fdo::Result<bool> {
        Ok(false)
    }
    async fn desktop_entry(&self) -> fdo::Result<String> {
        Ok(BUS_NAME.into())
    }
    async fn supported_uri_schemes(&self) -> fdo::Result<Vec<String>> {
        Ok(vec![])
    }
    async fn supported_mime_types(&self) -> fdo::Result<Vec<String>> {
        Ok(vec![])
    }
}

impl PlayerInterface for MprisPlayer {
    async fn next(&self) -> fdo::Result<()> {
        Err(fdo::Error::NotSupported("Not supported".into()))
    }

    async fn previous(&self) -> fdo::Result<()> {
        Err(fdo::Error::NotSupported("Not supported".into()))
    }

    async fn pause(&self) -> fdo::Result<()> {
        self.controls.pause();
        Ok(())
    }

    async fn play_pause(&self) -> fdo::Result<()> {
        self.controls.play_pause();
        Ok(())
    }

    async fn stop(&self) -> fdo::Result<()> {
        self.controls.pause();
        Ok(())
    }

    async fn play(&self) -> fdo::Result<()> {
        self.controls.resume();
        Ok(())
    }

    async fn seek(&self, offset: Time) -> fdo::Result<()> {
        // Any offset is mapped onto one fixed skip in its direction.
        match offset.as_micros() {
            micros if micros > 0 => self.controls.seek_forward(),
            micros if micros < 0 => self.controls.seek_backward(),
            _ => debug!("ignoring zero seek"),
        }
        Ok(())
    }

    async fn set_position(&self, _track_id: TrackId, _position: Time) -> fdo::Result<()> {
        Err(fdo::Error::NotSupported("Not supported".into()))
    }

    async fn open_uri(&self, _uri: String) -> fdo::Result<()> {
        Err(fdo::Error::NotSupported("Not supported".into()))
    }

    async fn playback_status(&self) -> fdo::Result<PlaybackStatus> {
        Ok(playback_status(*self.status_receiver.borrow()))
    }

    async fn loop_status(&self) -> fdo::Result<LoopStatus> {
        Err(fdo::Error::NotSupported("Not supported".into()))
    }

    async fn set_loop_status(&self, _loop_status: LoopStatus) -> zbus::Result<()> {
        Err(zbus::Error::Unsupported)
    }

    async fn rate(&self) -> fdo::Result<PlaybackRate> {
        Ok(1.0)
    }

    async fn set_rate(&self, _rate: PlaybackRate) -> zbus::Result<()> {
        Err(zbus::Error::Unsupported)
    }

    async fn shuffle(&self) -> fdo::Result<bool> {
        Ok(false)
    }

    async fn set_shuffle(&self, _shuffle: bool) -> zbus::Result<()> {
        Err(zbus::Error::Unsupported)
    }

    async fn metadata(&self) -> fdo::Result<Metadata> {
        let metadata = self.metadata_receiver.borrow();

        Ok(metadata
            .as_ref()
            .map(track_to_metadata)
            .unwrap_or_else(Metadata::new))
    }

    async fn volume(&self) -> fdo::Result<Volume> {
        Ok(1.0)
    }

    async fn set_volume(&self, _volume: Volume) -> zbus::Result<()> {
        Err(zbus::Error::Unsupported)
    }

    async fn position(&self) -> fdo::Result<Time> {
        let position_millis = self.position_receiver.borrow().as_millis();
        let time = Time::from_millis(position_millis as i64);
        Ok(time)
    }

    async fn minimum_rate(&self) -> fdo::Result<PlaybackRate> {
        Ok(1.0)
    }

    async fn maximum_rate(&self) -> fdo::Result<PlaybackRate> {
        Ok(1.0)
    }

    async fn can_go_next(&self) -> fdo::Result<bool> {
        Ok(false)
    }

    async fn can_go_previous(&self) -> fdo::Result<bool> {
        Ok(false)
    }

    async fn can_play(&self) -> fdo::Result<bool> {
        Ok(*self.status_receiver.borrow() != Status::Idle)
    }

    async fn can_pause(&self) -> fdo::Result<bool> {
        Ok(*self.status_receiver.borrow() != Status::Idle)
    }

    async fn can_seek(&self) -> fdo::Result<bool> {
        Ok(*self.status_receiver.borrow() != Status::Idle)
    }

    async fn can_control(&self) -> fdo::Result<bool> {
        Ok(true)
    }
}

/// Publishes the player on the session bus and keeps its properties in sync
/// until the player goes away.
pub async fn init(
    controls: Controls,
    mut status_receiver: StatusReceiver,
    mut metadata_receiver: MetadataReceiver,
    position_receiver: PositionReceiver,
) -> Result<()> {
    let Ok(server) = Server::new(
        BUS_NAME,
        MprisPlayer {
            controls,
            status_receiver: status_receiver.clone(),
            metadata_receiver: metadata_receiver.clone(),
            position_receiver,
        },
    )
    .await
    else {
        return Err(Error::MprisInitError);
    };

    loop {
        tokio::select! {
            Ok(_) = metadata_receiver.changed() => {
                let metadata = metadata_receiver
                    .borrow_and_update()
                    .as_ref()
                    .map(track_to_metadata)
                    .unwrap_or_else(Metadata::new);

                let Ok(_) = server
                    .properties_changed([Property::Metadata(metadata)])
                    .await else {
                        return Err(Error::MprisPropertyError { property: "Metadata".into() });
                    };
            },
            Ok(_) = status_receiver.changed() => {
                let status = *status_receiver.borrow_and_update();
                let controllable = status != Status::Idle;

                let Ok(_) = server
                    .properties_changed([
                        Property::CanPlay(controllable),
                        Property::CanPause(controllable),
                        Property::CanSeek(controllable),
                        Property::PlaybackStatus(playback_status(status)),
                    ])
                    .await else {
                        return Err(Error::MprisPropertyError { property: "CanPlay, CanPause, CanSeek, PlaybackStatus".into() });
                    };
            },
            else => return Ok(()),
        }
    }
}

fn playback_status(status: Status) -> PlaybackStatus {
    match status {
        Status::Idle => PlaybackStatus::Stopped,
        Status::Paused => PlaybackStatus::Paused,
        Status::Playing => PlaybackStatus::Playing,
    }
}

fn track_to_metadata(track: &TrackMetadata) -> Metadata {
    let mut metadata = Metadata::new();

    if let Some(length) = track.length {
        metadata.set_length(Some(Time::from_millis(length.as_millis() as i64)));
    }

    metadata.set_title(Some(track.title.clone()));
    metadata.set_artist(track.artist.as_ref().map(|artist| vec![artist]));
    metadata.set_url(Some(track.url.clone()));

    metadata
}
