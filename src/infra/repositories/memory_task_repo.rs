use crate::domain::models::task::{NewTask, Task};
use crate::domain::ports::TaskRepository;
use crate::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

pub struct MemoryTaskRepo {
    inner: Mutex<Inner>,
}

struct Inner {
    next_id: i64,
    tasks: HashMap<i64, Task>,
}

impl MemoryTaskRepo {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                tasks: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner.lock().map_err(|_| AppError::Internal)
    }
}

impl Default for MemoryTaskRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskRepo {
    async fn create(&self, task: NewTask) -> Result<Task, AppError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        let task = Task {
            id,
            title: task.title,
            is_completed: task.is_completed,
            due_date: task.due_date,
        };
        inner.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>, AppError> {
        let mut tasks: Vec<Task> = self.lock()?.tasks.values().cloned().collect();
        tasks.sort_by_key(|t| t.id);
        Ok(tasks)
    }

    async fn toggle(&self, id: i64, is_completed: bool) -> Result<Task, AppError> {
        let mut inner = self.lock()?;
        let task = inner
            .tasks
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Task not found".into()))?;
        task.is_completed = is_completed;
        Ok(task.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_task(title: &str, is_completed: bool) -> NewTask {
        NewTask {
            title: title.to_string(),
            is_completed,
            due_date: Some(Utc::now()),
        }
    }

    #[tokio::test]
    async fn toggle_sets_the_supplied_value_not_a_flip() {
        let repo = MemoryTaskRepo::new();
        let task = repo.create(new_task("Water the Fiddle Leaf", false)).await.unwrap();

        let toggled = repo.toggle(task.id, true).await.unwrap();
        assert!(toggled.is_completed);

        // Repeating with the same value is idempotent.
        let toggled_again = repo.toggle(task.id, true).await.unwrap();
        assert!(toggled_again.is_completed);
    }

    #[tokio::test]
    async fn toggle_on_already_completed_task_is_a_noop_update() {
        let repo = MemoryTaskRepo::new();
        let task = repo.create(new_task("Fertilize Tomatoes", true)).await.unwrap();

        let toggled = repo.toggle(task.id, true).await.unwrap();
        assert!(toggled.is_completed);
        assert_eq!(toggled.title, "Fertilize Tomatoes");
    }

    #[tokio::test]
    async fn toggle_unknown_id_is_not_found() {
        let repo = MemoryTaskRepo::new();
        let err = repo.toggle(5, true).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn toggle_leaves_other_fields_untouched() {
        let repo = MemoryTaskRepo::new();
        let created = repo.create(new_task("Check pH Levels", false)).await.unwrap();

        let toggled = repo.toggle(created.id, true).await.unwrap();
        assert_eq!(toggled.id, created.id);
        assert_eq!(toggled.title, created.title);
        assert_eq!(toggled.due_date, created.due_date);
    }
}
