use crate::domain::conversation::ConversationState;
use crate::domain::ports::{ConversationHandle, ConversationStore};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// A thread-safe in-memory store for conversation records.
///
/// The map sits behind an `RwLock` and each record behind its own `Mutex`, so
/// turns for the same conversation serialise while different conversations
/// proceed in parallel. Records live for as long as the store does.
#[derive(Default, Clone)]
pub struct InMemoryConversationStore {
    conversations: Arc<RwLock<HashMap<String, ConversationHandle>>>,
}

impl InMemoryConversationStore {
    /// Creates a new, empty in-memory conversation store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get_or_create(
        &self,
        conversation_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ConversationHandle> {
        if let Some(handle) = self.conversations.read().await.get(conversation_id) {
            return Ok(Arc::clone(handle));
        }

        // Another task may have created it between the two locks; `entry`
        // keeps whichever record got there first.
        let mut conversations = self.conversations.write().await;
        let handle = conversations
            .entry(conversation_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(ConversationState::new(now))));
        Ok(Arc::clone(handle))
    }

    async fn get(&self, conversation_id: &str) -> Result<Option<ConversationState>> {
        let handle = self.conversations.read().await.get(conversation_id).cloned();
        match handle {
            Some(handle) => Ok(Some(handle.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn all_conversations(&self) -> Result<Vec<(String, ConversationState)>> {
        let handles: Vec<(String, ConversationHandle)> = self
            .conversations
            .read()
            .await
            .iter()
            .map(|(id, handle)| (id.clone(), Arc::clone(handle)))
            .collect();

        let mut snapshot = Vec::with_capacity(handles.len());
        for (id, handle) in handles {
            snapshot.push((id, handle.lock().await.clone()));
        }
        Ok(snapshot)
    }
}
