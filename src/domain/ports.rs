use super::conversation::ConversationState;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared, lockable handle to one conversation's record.
///
/// Holding the lock is what makes a turn's read-modify-write atomic for that
/// identifier; other identifiers are unaffected.
pub type ConversationHandle = Arc<Mutex<ConversationState>>;

#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Returns the record for `conversation_id`, creating it with
    /// `start_time = now` if the identifier has not been seen before.
    ///
    /// Every call with the same identifier yields a handle to the same record.
    async fn get_or_create(
        &self,
        conversation_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ConversationHandle>;

    /// A snapshot of the record, without creating one.
    async fn get(&self, conversation_id: &str) -> Result<Option<ConversationState>>;

    async fn all_conversations(&self) -> Result<Vec<(String, ConversationState)>>;
}

pub type ConversationStoreBox = Box<dyn ConversationStore>;
