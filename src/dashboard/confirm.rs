use super::{Confirmation, Dashboard, PendingAction};

impl Dashboard {
    /// Stores a prompt; the action runs only when the operator accepts it.
    /// A newer request replaces an unanswered one.
    pub(super) fn confirm(&self, message: String, action: PendingAction) {
        self.update(|state| state.confirmation = Some(Confirmation { message, action }));
    }

    /// Closes the open prompt and, if `accepted`, runs its action to
    /// completion.
    pub async fn resolve_confirmation(&self, accepted: bool) {
        let Some(confirmation) = self.update(|state| state.confirmation.take()) else {
            return;
        };
        if !accepted {
            return;
        }
        match confirmation.action {
            PendingAction::Control(action) => self.execute_control(action).await,
            PendingAction::Optimize => self.execute_optimize().await,
            PendingAction::ApproveArticle(id) => self.execute_approve(id).await,
            PendingAction::RejectArticle(id) => self.execute_reject(id).await,
            PendingAction::DeleteFeed(id) => self.execute_delete_feed(id).await,
            PendingAction::DeleteAllFeeds => self.execute_delete_all_feeds().await,
            PendingAction::ClearHistory(kind) => self.execute_clear_history(kind).await,
            PendingAction::ClearAllHistories => self.execute_clear_all_histories().await,
        }
    }
}
