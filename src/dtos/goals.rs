use crate::models::Goal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateGoalRequest {
    /// Optional so a body without the field reaches validation instead of
    /// failing JSON deserialization with a different status.
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub id: String,
    pub text: String,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            id: goal.id,
            text: goal.text,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListGoalsResponse {
    pub goals: Vec<GoalResponse>,
}

#[derive(Debug, Serialize)]
pub struct CreateGoalResponse {
    pub message: String,
    pub goal: GoalResponse,
}
