mod goals;

pub use goals::{CreateGoalRequest, CreateGoalResponse, GoalResponse, ListGoalsResponse};
