use std::sync::Arc;

use feed_admin_client::{Client, FeedStatus, ModeratorFeed};
use tracing::{info, instrument, warn};

use crate::{
    Result,
    controls::Controls,
    notification::{AlertSlot, Notification, NotificationBroadcast},
    rows::{Row, RowId, RowRegistry},
    selection::{FeedSelection, parse_feed_id},
};

pub const EMPTY_SELECTION_MESSAGE: &str = "Please select a row before.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Every update went through, the table should be reloaded.
    Reload,
    NothingSelected,
}

/// Everything the review page's input handlers share for one admin session.
pub struct AdminSession {
    controls: Controls,
    rows: Arc<RowRegistry>,
    client: Arc<Client>,
    broadcast: Arc<NotificationBroadcast>,
    selection: FeedSelection,
    alert: AlertSlot,
}

impl AdminSession {
    pub fn new(
        controls: Controls,
        rows: Arc<RowRegistry>,
        client: Arc<Client>,
        broadcast: Arc<NotificationBroadcast>,
    ) -> Self {
        Self {
            controls,
            rows,
            client,
            broadcast,
            selection: Default::default(),
            alert: Default::default(),
        }
    }

    pub fn rows(&self) -> &Arc<RowRegistry> {
        &self.rows
    }

    pub fn selection(&self) -> &FeedSelection {
        &self.selection
    }

    pub fn alert(&self) -> &AlertSlot {
        &self.alert
    }

    pub fn notify(&mut self, notification: Notification) {
        self.alert.show(notification.clone());
        self.broadcast.send_message(notification);
    }

    pub fn select_feed(&mut self, feed_id: i32, checked: bool) {
        self.selection.set_checked(feed_id, checked);
    }

    /// Checkbox handler. `cell_text` is the content of the row's id cell.
    pub fn set_feed_checked(&mut self, cell_text: &str, checked: bool) -> bool {
        match parse_feed_id(cell_text) {
            Some(feed_id) => {
                self.select_feed(feed_id, checked);
                true
            }
            None => {
                warn!("ignoring checkbox for unparsable feed id {cell_text:?}");
                false
            }
        }
    }

    pub async fn approve_selected(&mut self) -> Result<ReviewOutcome> {
        self.review_selected(FeedStatus::Online).await
    }

    pub async fn reject_selected(&mut self) -> Result<ReviewOutcome> {
        self.review_selected(FeedStatus::Blocked).await
    }

    #[instrument(skip(self))]
    pub async fn review_selected(&mut self, action: FeedStatus) -> Result<ReviewOutcome> {
        if self.selection.is_empty() {
            self.notify(Notification::Error(EMPTY_SELECTION_MESSAGE.to_string()));
            return Ok(ReviewOutcome::NothingSelected);
        }

        match self
            .client
            .update_feed_statuses(self.selection.ids(), action)
            .await
        {
            Ok(count) => {
                info!("set {count} feeds to {action}");
                self.selection.clear();
                self.notify(Notification::Success(format!(
                    "{count} feeds set to {action}"
                )));
                Ok(ReviewOutcome::Reload)
            }
            Err(err) => {
                self.notify(Notification::Error(format!(
                    "Unable to set feeds to {action}: {err}"
                )));
                Err(err.into())
            }
        }
    }

    pub async fn set_feed_online(&mut self, feed_id: i32) -> Result<ReviewOutcome> {
        self.set_own_feed(feed_id, FeedStatus::Online).await
    }

    pub async fn set_feed_offline(&mut self, feed_id: i32) -> Result<ReviewOutcome> {
        self.set_own_feed(feed_id, FeedStatus::Offline).await
    }

    /// Owner toggle from the profile page. Confirmation is up to the caller.
    #[instrument(skip(self))]
    async fn set_own_feed(&mut self, feed_id: i32, action: FeedStatus) -> Result<ReviewOutcome> {
        match self.client.update_own_feed(feed_id, action).await {
            Ok(()) => {
                info!("set own feed {feed_id} to {action}");
                self.notify(Notification::Success(format!(
                    "Feed {feed_id} is now {action}"
                )));
                Ok(ReviewOutcome::Reload)
            }
            Err(err) => {
                self.notify(Notification::Error(format!(
                    "Unable to set feed {feed_id} to {action}: {err}"
                )));
                Err(err.into())
            }
        }
    }

    /// Play button handler: resolves the row's media url and hands it to the player.
    pub async fn play_row(&self, row: RowId) -> Result<()> {
        let url = self.rows.media_url(row).await?;
        self.controls.play(&url, row);
        Ok(())
    }

    pub fn pause(&self) {
        self.controls.pause();
    }

    /// Adds a feed pushed by the live stream to the table, once.
    pub async fn apply_live_update(&self, feed: ModeratorFeed) -> RowId {
        if let Some(row) = self.rows.find_by_feed(feed.id).await {
            return row;
        }

        self.rows
            .insert(Row::new(feed.title).with_feed_id(feed.id))
            .await
    }
}
