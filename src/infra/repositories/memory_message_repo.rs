use crate::domain::models::message::{Message, MessageRole};
use crate::domain::ports::MessageRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

pub struct MemoryMessageRepo {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    messages: HashMap<i64, Message>,
}

impl MemoryMessageRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                messages: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner.lock().map_err(|_| AppError::Internal)
    }
}

impl Default for MemoryMessageRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for MemoryMessageRepo {
    async fn create(&self, content: String, role: MessageRole) -> Result<Message, AppError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        let message = Message {
            id,
            content,
            role,
            timestamp: Utc::now(),
        };
        inner.messages.insert(id, message.clone());
        Ok(message)
    }

    async fn list(&self) -> Result<Vec<Message>, AppError> {
        let mut messages: Vec<Message> = self.lock()?.messages.values().cloned().collect();
        // Ascending by timestamp; id breaks ties between messages
        // stamped in the same instant.
        messages.sort_by_key(|m| (m.timestamp, m.id));
        Ok(messages)
    }
}
