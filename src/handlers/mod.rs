mod goals;
mod health;

pub use goals::{create_goal, delete_goal, list_goals};
pub use health::health_check;
