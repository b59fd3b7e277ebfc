use std::collections::BTreeSet;

/// Feed ids ticked in the review table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FeedSelection {
    ids: BTreeSet<i32>,
}

impl FeedSelection {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_checked(&mut self, feed_id: i32, checked: bool) {
        if checked {
            self.ids.insert(feed_id);
        } else {
            self.ids.remove(&feed_id);
        }
    }

    pub fn contains(&self, feed_id: i32) -> bool {
        self.ids.contains(&feed_id)
    }

    pub fn ids(&self) -> Vec<i32> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Reads a feed id out of the id cell next to a checkbox.
pub fn parse_feed_id(cell_text: &str) -> Option<i32> {
    cell_text.trim().parse().ok()
}
