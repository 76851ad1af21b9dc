//! Domain Layer
//!
//! Goal entity, the ordered list that owns goals, and domain errors.
//! No browser dependencies live here.

mod error;
mod goal;
mod goal_list;

pub use error::{GoalError, GoalResult};
pub use goal::Goal;
pub use goal_list::GoalList;
