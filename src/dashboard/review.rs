use super::{Dashboard, PendingAction, PendingItem, ToastLevel};
use crate::i18n::DICTATION_LANGUAGE;
use crate::types::PendingArticle;
use async_trait::async_trait;
use serde_json::Value;
use time::macros::format_description;

// ============================================
// Speech capture port
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech recognition is not available on this platform")]
    Unavailable,
    #[error("speech recognition failed: {0}")]
    Failed(String),
}

/// Platform speech-to-text used to dictate into review drafts.
#[async_trait]
pub trait SpeechCapture: Send + Sync {
    fn is_available(&self) -> bool;

    /// Listens for one utterance and returns its final transcript.
    async fn listen(&self, language: &str) -> Result<String, SpeechError>;
}

/// Capture for platforms without speech recognition.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSpeechCapture;

#[async_trait]
impl SpeechCapture for NoSpeechCapture {
    fn is_available(&self) -> bool {
        false
    }

    async fn listen(&self, _language: &str) -> Result<String, SpeechError> {
        Err(SpeechError::Unavailable)
    }
}

// ============================================
// Content helpers
// ============================================

/// Extracts the article body from a pending item's content.
///
/// Content is usually a JSON envelope carrying `conteudo_completo`. Anything
/// that does not parse is treated as the body itself.
pub fn decode_content(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match serde_json::from_str::<Value>(raw) {
        Err(_) | Ok(Value::Null) => raw.to_string(),
        Ok(Value::Object(envelope)) => envelope
            .get("conteudo_completo")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Ok(_) => String::new(),
    }
}

/// Maps a stored image path to the backend's static route by file name.
pub fn static_path(image: Option<&str>) -> Option<String> {
    let image = image?.trim();
    if image.is_empty() {
        return None;
    }
    let name = image.rsplit(['\\', '/']).next().unwrap_or(image);
    Some(format!("/static/{name}"))
}

fn today_stamp() -> String {
    super::local_now()
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

impl Dashboard {
    fn pending_item(&self, article: PendingArticle) -> PendingItem {
        PendingItem {
            id: article.id,
            title: article.title,
            date: article.date,
            image_url: static_path(article.image.as_deref()).map(|path| self.api().asset_url(&path)),
            draft: decode_content(article.content.as_deref()),
        }
    }

    /// Loads the pending queue and today's completed generations.
    pub async fn load_review(&self) {
        self.update(|state| state.review.loading = true);
        let (pending, history) = futures::join!(self.api().pending(), self.api().history());

        let pending = match pending {
            Ok(articles) => Some(
                articles
                    .into_iter()
                    .map(|article| self.pending_item(article))
                    .collect::<Vec<_>>(),
            ),
            Err(err) => {
                tracing::warn!("Review queue load failed: {err}");
                None
            }
        };
        let today = match history {
            Ok(listing) => {
                let stamp = today_stamp();
                Some(
                    listing
                        .threads
                        .into_iter()
                        .filter(|thread| {
                            thread
                                .date
                                .as_deref()
                                .is_some_and(|date| date.contains(&stamp))
                        })
                        .collect::<Vec<_>>(),
                )
            }
            Err(err) => {
                tracing::debug!("Review history load failed: {err}");
                None
            }
        };

        self.update(|state| {
            state.review.loading = false;
            if let Some(pending) = pending {
                state.review.pending = pending;
            }
            if let Some(today) = today {
                state.review.today = today;
            }
        });
    }

    pub fn edit_draft(&self, id: i64, text: String) {
        self.update(|state| {
            if let Some(item) = state.review.pending.iter_mut().find(|item| item.id == id) {
                item.draft = text;
            }
        });
    }

    pub fn request_approve(&self, id: i64) {
        let message = self.translator().text("confirm_approve");
        self.confirm(message.to_string(), PendingAction::ApproveArticle(id));
    }

    pub fn request_reject(&self, id: i64) {
        let message = self.translator().text("confirm_reject");
        self.confirm(message.to_string(), PendingAction::RejectArticle(id));
    }

    /// Publishes the item with its edited draft.
    pub(super) async fn execute_approve(&self, id: i64) {
        let draft = self.read(|state| {
            state
                .review
                .pending
                .iter()
                .find(|item| item.id == id)
                .map(|item| item.draft.clone())
                .unwrap_or_default()
        });
        let result = self.api().approve(id, &draft).await;
        futures::join!(self.load_review(), self.refresh_stats());
        match result {
            Ok(()) => {
                tracing::info!(id, "Article approved");
                self.notify_key(ToastLevel::Success, "toast_approved");
            }
            Err(err) => self.notify_failure("Approve", &err),
        }
    }

    pub(super) async fn execute_reject(&self, id: i64) {
        let result = self.api().reject(id).await;
        self.load_review().await;
        match result {
            Ok(()) => {
                tracing::info!(id, "Article rejected");
                self.notify_key(ToastLevel::Warning, "toast_rejected");
            }
            Err(err) => self.notify_failure("Reject", &err),
        }
    }

    /// Appends one dictated utterance to the item's draft.
    pub async fn dictate(&self, id: i64) {
        let speech = self.inner.speech.clone();
        if !speech.is_available() {
            self.notify_key(ToastLevel::Error, "err_browser");
            return;
        }

        self.update(|state| state.review.dictating = Some(id));
        let transcript = speech.listen(DICTATION_LANGUAGE).await;
        self.update(|state| {
            if state.review.dictating == Some(id) {
                state.review.dictating = None;
            }
            match transcript {
                Ok(text) if !text.trim().is_empty() => {
                    if let Some(item) = state.review.pending.iter_mut().find(|item| item.id == id) {
                        item.draft.push(' ');
                        item.draft.push_str(text.trim());
                    }
                }
                Ok(_) => {}
                Err(err) => tracing::warn!("Dictation failed: {err}"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let raw = r#"{"conteudo_completo":"<p>Body</p>","titulo":"T"}"#;
        assert_eq!(decode_content(Some(raw)), "<p>Body</p>");
    }

    #[test]
    fn test_decode_envelope_without_body() {
        assert_eq!(decode_content(Some(r#"{"titulo":"T"}"#)), "");
    }

    #[test]
    fn test_decode_falls_back_to_raw_text() {
        assert_eq!(decode_content(Some("plain body")), "plain body");
        assert_eq!(decode_content(Some("null")), "null");
        assert_eq!(decode_content(None), "");
    }

    #[test]
    fn test_decode_non_object_json_is_empty() {
        assert_eq!(decode_content(Some("[1,2]")), "");
        assert_eq!(decode_content(Some("42")), "");
    }

    #[test]
    fn test_static_path_uses_file_name() {
        assert_eq!(
            static_path(Some(r"C:\s1m0n\static\cover.jpg")).as_deref(),
            Some("/static/cover.jpg")
        );
        assert_eq!(
            static_path(Some("/var/app/static/img.png")).as_deref(),
            Some("/static/img.png")
        );
        assert_eq!(static_path(Some("")), None);
        assert_eq!(static_path(None), None);
    }

    #[tokio::test]
    async fn test_no_speech_capture_is_unavailable() {
        let capture = NoSpeechCapture;
        assert!(!capture.is_available());
        assert!(matches!(
            capture.listen("pt-BR").await,
            Err(SpeechError::Unavailable)
        ));
    }
}
