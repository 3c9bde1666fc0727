use crate::domain::models::trend::{NewTrend, Trend};
use crate::domain::ports::TrendRepository;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

pub struct MemoryTrendRepo {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    trends: HashMap<i64, Trend>,
}

impl MemoryTrendRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                trends: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner.lock().map_err(|_| AppError::Internal)
    }
}

impl Default for MemoryTrendRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TrendRepository for MemoryTrendRepo {
    async fn create(&self, trend: NewTrend) -> Result<Trend, AppError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        let trend = Trend {
            id,
            title: trend.title,
            description: trend.description,
            image_url: trend.image_url,
            source_url: trend.source_url,
        };
        inner.trends.insert(id, trend.clone());
        Ok(trend)
    }

    async fn list(&self) -> Result<Vec<Trend>, AppError> {
        let mut trends: Vec<Trend> = self.lock()?.trends.values().cloned().collect();
        trends.sort_by_key(|t| t.id);
        Ok(trends)
    }
}
