use std::{collections::BTreeMap, fmt::Display};

use tokio::sync::RwLock;
use tracing::debug;

use crate::{Error, Result};

/// Lookup handle for a table row. Holding one never keeps the row alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(u32);

impl Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub feed_id: Option<i32>,
    pub title: String,
    pub media_url: Option<String>,
    pub play_visible: bool,
    pub pause_visible: bool,
}

impl Row {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            feed_id: None,
            title: title.into(),
            media_url: None,
            play_visible: true,
            pause_visible: false,
        }
    }

    pub fn with_media_url(mut self, media_url: impl Into<String>) -> Self {
        self.media_url = Some(media_url.into());
        self
    }

    pub fn with_feed_id(mut self, feed_id: i32) -> Self {
        self.feed_id = Some(feed_id);
        self
    }

    pub fn is_playing(&self) -> bool {
        self.pause_visible && !self.play_visible
    }
}

#[derive(Debug, Default)]
struct Rows {
    next_id: u32,
    rows: BTreeMap<RowId, Row>,
}

/// The rows currently rendered in the review table.
#[derive(Debug, Default)]
pub struct RowRegistry {
    inner: RwLock<Rows>,
}

impl RowRegistry {
    pub fn new() -> Self {
        Default::default()
    }

    pub async fn insert(&self, mut row: Row) -> RowId {
        row.play_visible = true;
        row.pause_visible = false;

        let mut inner = self.inner.write().await;
        let id = RowId(inner.next_id);
        inner.next_id += 1;
        inner.rows.insert(id, row);

        id
    }

    pub async fn remove(&self, id: RowId) -> Option<Row> {
        self.inner.write().await.rows.remove(&id)
    }

    pub async fn get(&self, id: RowId) -> Option<Row> {
        self.inner.read().await.rows.get(&id).cloned()
    }

    pub async fn title(&self, id: RowId) -> Result<String> {
        self.get(id)
            .await
            .map(|row| row.title)
            .ok_or(Error::RowNotFound { row: id })
    }

    pub async fn media_url(&self, id: RowId) -> Result<String> {
        let row = self.get(id).await.ok_or(Error::RowNotFound { row: id })?;

        row.media_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::playback(format!("row {id} has no media url")))
    }

    pub async fn find_by_feed(&self, feed_id: i32) -> Option<RowId> {
        self.inner
            .read()
            .await
            .rows
            .iter()
            .find(|(_, row)| row.feed_id == Some(feed_id))
            .map(|(id, _)| *id)
    }

    /// Flips the play/pause indicators of a row. Returns `false` when the row
    /// has been removed in the meantime.
    pub async fn set_playing(&self, id: RowId, playing: bool) -> bool {
        let mut inner = self.inner.write().await;

        match inner.rows.get_mut(&id) {
            Some(row) => {
                row.pause_visible = playing;
                row.play_visible = !playing;
                true
            }
            None => {
                debug!("row {id} is gone, skipping indicator update");
                false
            }
        }
    }

    pub async fn playing_rows(&self) -> Vec<RowId> {
        self.inner
            .read()
            .await
            .rows
            .iter()
            .filter(|(_, row)| row.pause_visible)
            .map(|(id, _)| *id)
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}
