use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::warn;

use crate::rows::RowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    Play { url: String, row: RowId },
    Resume,
    Pause,
    PlayPause,
    SeekForward,
    SeekBackward,
    Quit,
}

/// Cloneable handle used by input handlers and the media transport bridge to
/// drive the player task.
#[derive(Debug, Clone)]
pub struct Controls {
    tx: UnboundedSender<ControlCommand>,
}

impl Controls {
    pub fn new(tx: UnboundedSender<ControlCommand>) -> Self {
        Self { tx }
    }

    pub fn channel() -> (Self, UnboundedReceiver<ControlCommand>) {
        let (tx, rx) = unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, command: ControlCommand) {
        if let Err(err) = self.tx.send(command) {
            warn!("player is gone, dropping {:?}", err.0);
        }
    }

    pub fn play(&self, url: &str, row: RowId) {
        self.send(ControlCommand::Play {
            url: url.to_string(),
            row,
        });
    }

    pub fn resume(&self) {
        self.send(ControlCommand::Resume);
    }

    pub fn pause(&self) {
        self.send(ControlCommand::Pause);
    }

    pub fn play_pause(&self) {
        self.send(ControlCommand::PlayPause);
    }

    pub fn seek_forward(&self) {
        self.send(ControlCommand::SeekForward);
    }

    pub fn seek_backward(&self) {
        self.send(ControlCommand::SeekBackward);
    }

    pub fn quit(&self) {
        self.send(ControlCommand::Quit);
    }
}
