use super::{Dashboard, PendingAction, ToastLevel};
use crate::types::NewFeed;

/// Inputs of the add-feed modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedField {
    Name,
    Url,
    Theme,
}

impl Dashboard {
    /// Refreshes the feed table. On failure the previous rows stay visible.
    pub async fn load_feeds(&self) {
        match self.api().feeds().await {
            Ok(feeds) => self.update(|state| state.feeds.items = feeds),
            Err(err) => tracing::warn!("Feed load failed: {err}"),
        }
    }

    pub fn open_feed_modal(&self) {
        self.update(|state| {
            state.feeds.draft = NewFeed::default();
            state.feeds.modal_open = true;
        });
    }

    pub fn close_feed_modal(&self) {
        self.update(|state| state.feeds.modal_open = false);
    }

    pub fn set_feed_draft(&self, field: FeedField, value: String) {
        self.update(|state| {
            let draft = &mut state.feeds.draft;
            match field {
                FeedField::Name => draft.name = value,
                FeedField::Url => draft.url = value,
                FeedField::Theme => draft.theme = value,
            }
        });
    }

    pub async fn create_feed(&self) {
        let draft = self.read(|state| state.feeds.draft.clone());
        match self.api().create_feed(&draft).await {
            Ok(()) => {
                tracing::info!(name = %draft.name, "Feed added");
                self.close_feed_modal();
            }
            Err(err) => self.notify_failure("Feed create", &err),
        }
        self.load_feeds().await;
    }

    pub async fn toggle_feed(&self, id: i64) {
        if let Err(err) = self.api().toggle_feed(id).await {
            self.notify_failure("Feed toggle", &err);
        }
        self.load_feeds().await;
    }

    pub fn request_delete_feed(&self, id: i64) {
        let message = self.translator().text("confirm_delete_feed");
        self.confirm(message.to_string(), PendingAction::DeleteFeed(id));
    }

    pub(super) async fn execute_delete_feed(&self, id: i64) {
        match self.api().delete_feed(id).await {
            Ok(()) => self.notify_key(ToastLevel::Success, "toast_feed_removed"),
            Err(err) => self.notify_failure("Feed delete", &err),
        }
        self.load_feeds().await;
    }

    pub fn request_delete_all_feeds(&self) {
        let message = self.translator().text("confirm_delete_all_feeds");
        self.confirm(message.to_string(), PendingAction::DeleteAllFeeds);
    }

    pub(super) async fn execute_delete_all_feeds(&self) {
        match self.api().delete_all_feeds().await {
            Ok(()) => self.notify_key(ToastLevel::Warning, "toast_feeds_removed"),
            Err(err) => self.notify_failure("Feed purge", &err),
        }
        self.load_feeds().await;
    }
}
