mod database;
mod store;

pub use database::MongoDb;
pub use store::{GoalStore, InMemoryGoalStore};
