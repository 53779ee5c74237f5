//! Assistant conversations with per-user context.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::timestamp;
use crate::application::chat::{respond, scripted_reply, Activity, Reply};
use crate::domain::{DocumentId, UserId};
use crate::error::{BackendError, Result};
use crate::port::outbound::auth::AuthProvider;
use crate::port::outbound::store::{collections, Direction, DocumentStore, Fields, Query};

const RECENT_VIEW_WINDOW: usize = 3;

/// Answers assistant messages and collects feedback on the answers.
pub struct ChatService<S, A> {
    store: Arc<S>,
    auth: Arc<A>,
}

impl<S: DocumentStore, A: AuthProvider> ChatService<S, A> {
    pub fn new(store: Arc<S>, auth: Arc<A>) -> Self {
        Self { store, auth }
    }

    /// Reply to `message`.
    ///
    /// Signed-in users have the message logged, and unscripted messages are
    /// answered from what the store knows about them. Neither step can fail
    /// the reply.
    pub async fn reply(&self, message: &str) -> Reply {
        let user = self.auth.current_user();

        if let Some(user) = &user {
            let entry = object(json!({
                "userId": user.as_str(),
                "message": message,
                "timestamp": timestamp(Utc::now()),
            }));
            if let Err(e) = self.store.insert(collections::CHAT_INTERACTIONS, entry).await {
                warn!(user = %user, error = %e, "Failed to log chat message");
            }
        }

        if let Some(reply) = scripted_reply(message) {
            return reply;
        }

        let activity = match &user {
            Some(user) => match self.activity(user).await {
                Ok(activity) => Some(activity),
                Err(e) => {
                    warn!(user = %user, error = %e, "Chat reply without user activity");
                    None
                }
            },
            None => None,
        };
        debug!(?activity, "Unscripted chat message");
        respond(message, activity)
    }

    /// Record whether a reply helped.
    pub async fn record_feedback(
        &self,
        chat_id: &str,
        helpful: bool,
        feedback: Option<&str>,
    ) -> Result<DocumentId> {
        let user = self
            .auth
            .current_user()
            .map_or_else(|| "anonymous".to_string(), |u| u.as_str().to_string());
        let entry = object(json!({
            "chatId": chat_id,
            "userId": user,
            "wasHelpful": helpful,
            "feedback": feedback,
            "timestamp": timestamp(Utc::now()),
        }));
        Ok(self.store.insert(collections::CHAT_FEEDBACK, entry).await?)
    }

    async fn activity(&self, user: &UserId) -> std::result::Result<Activity, BackendError> {
        let listings = self
            .store
            .query(
                &Query::collection(collections::BOOKS)
                    .where_eq("ownerId", user.as_str())
                    .limit(1),
            )
            .await?;
        if !listings.is_empty() {
            return Ok(Activity {
                has_listings: true,
                has_recent_views: false,
            });
        }

        let views = self
            .store
            .query(
                &Query::collection(collections::BOOK_VIEWS)
                    .where_eq("userId", user.as_str())
                    .order_by("timestamp", Direction::Descending)
                    .limit(RECENT_VIEW_WINDOW),
            )
            .await?;
        Ok(Activity {
            has_listings: false,
            has_recent_views: !views.is_empty(),
        })
    }
}

fn object(value: Value) -> Fields {
    match value {
        Value::Object(fields) => fields,
        _ => Fields::new(),
    }
}
