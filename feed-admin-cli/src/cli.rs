use std::{sync::Arc, time::Duration};

use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use feed_admin_client::{FeedStatus, live};
use feed_admin_controls::{
    controls::Controls,
    notification::{Notification, NotificationBroadcast},
    player::AudioPlayer,
    rows::{Row, RowRegistry},
    session::{AdminSession, ReviewOutcome},
    source::RodioSourceFactory,
};
use futures::StreamExt;
use snafu::prelude::*;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast::{Receiver, error::RecvError},
};
use tokio_stream::wrappers::LinesStream;
use tracing::warn;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(long, env = "FEED_ADMIN_BASE_URL", default_value = "http://localhost:8080/")]
    /// Address of the admin panel. Endpoint paths are resolved against it.
    base_url: String,

    #[clap(long, env = "FEED_ADMIN_STATUS_PATH")]
    /// Path of the feed status endpoint. Defaults to `update-feed-status`.
    status_path: Option<String>,

    #[clap(long, env = "FEED_ADMIN_ARTIST")]
    /// Artist shown by the media controls, usually the podcast title.
    artist: Option<String>,

    #[clap(long, default_value_t = 10)]
    /// Seconds to wait for playback to start before giving up.
    start_timeout: u64,

    #[cfg(target_os = "linux")]
    #[clap(long, default_value_t = false)]
    /// Disable the mpris interface.
    disable_mpris: bool,

    #[clap(short, long)]
    /// Log level
    verbosity: Option<tracing::Level>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an episode
    Play {
        url: String,
        /// Title shown by the media controls.
        #[clap(short, long)]
        title: Option<String>,
    },
    /// Set feeds online
    Approve {
        #[clap(required = true)]
        feed_ids: Vec<i32>,
    },
    /// Block feeds
    Reject {
        #[clap(required = true)]
        feed_ids: Vec<i32>,
    },
    /// Put one of your own feeds online
    Online {
        feed_id: i32,
        /// Skip the confirmation prompt.
        #[clap(short, long, default_value_t = false)]
        yes: bool,
    },
    /// Take one of your own feeds offline
    Offline {
        feed_id: i32,
        /// Skip the confirmation prompt.
        #[clap(short, long, default_value_t = false)]
        yes: bool,
    },
    /// Read live feed updates from stdin, one JSON message per line
    Watch,
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{error}"))]
    ClientError { error: String },
    #[snafu(display("{error}"))]
    PlayerError { error: String },
    #[snafu(display("{error}"))]
    PromptError { error: String },
}

impl From<feed_admin_client::Error> for Error {
    fn from(error: feed_admin_client::Error) -> Self {
        Error::ClientError {
            error: error.to_string(),
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(error: dialoguer::Error) -> Self {
        Error::PromptError {
            error: error.to_string(),
        }
    }
}

impl From<feed_admin_controls::Error> for Error {
    fn from(error: feed_admin_controls::Error) -> Self {
        Error::PlayerError {
            error: error.to_string(),
        }
    }
}

pub async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_target(false)
        .compact()
        .init();

    let client = Arc::new(feed_admin_client::client::new(
        &cli.base_url,
        cli.status_path.as_deref(),
    )?);
    let rows = Arc::new(RowRegistry::new());
    let broadcast = Arc::new(NotificationBroadcast::new());
    let (controls, commands) = Controls::channel();

    let mut session = AdminSession::new(
        controls.clone(),
        rows.clone(),
        client,
        broadcast.clone(),
    );

    match cli.command {
        Commands::Play { url, title } => {
            let title = title.unwrap_or_else(|| url.clone());
            let row = rows.insert(Row::new(title).with_media_url(url)).await;

            let start_timeout = Duration::from_secs(cli.start_timeout);
            let factory = RodioSourceFactory::new(start_timeout)?;
            let mut player = AudioPlayer::new(Box::new(factory), rows, broadcast.clone())
                .with_artist(cli.artist)
                .with_start_timeout(start_timeout);

            #[cfg(target_os = "linux")]
            if !cli.disable_mpris {
                let controls = controls.clone();
                let status_receiver = player.status_receiver();
                let metadata_receiver = player.metadata_receiver();
                let position_receiver = player.position_receiver();
                tokio::spawn(async move {
                    if let Err(err) = feed_admin_mpris::init(
                        controls,
                        status_receiver,
                        metadata_receiver,
                        position_receiver,
                    )
                    .await
                    {
                        warn!("{err}");
                    }
                });
            }

            tokio::spawn(print_notifications(broadcast.subscribe()));
            tokio::spawn(input_loop(controls));

            println!("[p] play/pause  [f] forward 30s  [b] back 30s  [q] quit");
            session.play_row(row).await?;
            player.player_loop(commands).await?;

            Ok(())
        }
        Commands::Approve { feed_ids } => {
            review(&mut session, feed_ids, FeedStatus::Online).await
        }
        Commands::Reject { feed_ids } => {
            review(&mut session, feed_ids, FeedStatus::Blocked).await
        }
        Commands::Online { feed_id, yes } => {
            toggle_own_feed(&mut session, feed_id, FeedStatus::Online, yes).await
        }
        Commands::Offline { feed_id, yes } => {
            toggle_own_feed(&mut session, feed_id, FeedStatus::Offline, yes).await
        }
        Commands::Watch => {
            let lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines())
                .filter_map(|line| futures::future::ready(line.ok()));
            let mut updates = Box::pin(live::feed_updates(lines));

            while let Some(update) = updates.next().await {
                match update {
                    Ok(feed) => {
                        let (id, title, status) = (feed.id, feed.title.clone(), feed.status);
                        let row = session.apply_live_update(feed).await;
                        println!("{row}\t{id}\t{status}\t{title}");
                    }
                    Err(err) => warn!("{err}"),
                }
            }

            Ok(())
        }
    }
}

async fn review(
    session: &mut AdminSession,
    feed_ids: Vec<i32>,
    action: FeedStatus,
) -> Result<(), Error> {
    for feed_id in feed_ids {
        session.select_feed(feed_id, true);
    }

    let outcome = session.review_selected(action).await;

    if let Some(notification) = session.alert().visible() {
        println!("{}", notification.message());
    }

    match outcome? {
        ReviewOutcome::Reload => Ok(()),
        ReviewOutcome::NothingSelected => Err(Error::ClientError {
            error: "no feeds given".to_string(),
        }),
    }
}

async fn toggle_own_feed(
    session: &mut AdminSession,
    feed_id: i32,
    action: FeedStatus,
    yes: bool,
) -> Result<(), Error> {
    if !yes
        && !Confirm::new()
            .with_prompt(format!("Set feed {feed_id} {action}. Are you sure?"))
            .default(false)
            .interact()?
    {
        println!("Nothing changed.");
        return Ok(());
    }

    let outcome = match action {
        FeedStatus::Offline => session.set_feed_offline(feed_id).await,
        _ => session.set_feed_online(feed_id).await,
    };

    if let Some(notification) = session.alert().visible() {
        println!("{}", notification.message());
    }

    outcome?;
    Ok(())
}

async fn input_loop(controls: Controls) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        match line.trim() {
            "" | "p" => controls.play_pause(),
            "f" => controls.seek_forward(),
            "b" => controls.seek_backward(),
            "q" => break,
            other => warn!("unknown command {other:?}"),
        }
    }

    controls.quit();
}

async fn print_notifications(mut receiver: Receiver<Notification>) {
    loop {
        let notification = match receiver.recv().await {
            Ok(notification) => notification,
            Err(RecvError::Lagged(skipped)) => {
                warn!("skipped {skipped} notifications");
                continue;
            }
            Err(RecvError::Closed) => break,
        };

        match notification {
            Notification::Error(message) | Notification::Warning(message) => {
                eprintln!("{message}")
            }
            Notification::Success(message) | Notification::Info(message) => println!("{message}"),
        }
    }
}
