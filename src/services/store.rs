use crate::error::AppError;
use crate::models::Goal;
use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

/// Persistence seam for goal records. The production implementation is
/// [`MongoDb`](super::MongoDb); [`InMemoryGoalStore`] backs the integration
/// tests and local experiments.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// All stored goals, in whatever order the store yields them.
    async fn list(&self) -> Result<Vec<Goal>, AppError>;

    /// Persist a new goal with the supplied text; the store assigns the id.
    async fn insert(&self, text: &str) -> Result<Goal, AppError>;

    /// Remove the goal with the given id. Removing an id that matches
    /// nothing is a no-op, not an error.
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Verify the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryGoalStore {
    goals: Mutex<Vec<Goal>>,
}

impl InMemoryGoalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The store stays usable even if a panic poisoned the lock; the goals
    /// vector is valid after any interrupted operation.
    fn lock_goals(&self) -> std::sync::MutexGuard<'_, Vec<Goal>> {
        self.goals.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl GoalStore for InMemoryGoalStore {
    async fn list(&self) -> Result<Vec<Goal>, AppError> {
        Ok(self.lock_goals().clone())
    }

    async fn insert(&self, text: &str) -> Result<Goal, AppError> {
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
        };
        self.lock_goals().push(goal.clone());
        Ok(goal)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.lock_goals().retain(|goal| goal.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
