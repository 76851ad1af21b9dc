//! UI Components
//!
//! Leptos components for the goal list.

mod goal_list_view;
mod goal_row;
mod new_goal_form;
mod transfer_bar;

pub use goal_list_view::GoalListView;
pub use goal_row::GoalRow;
pub use new_goal_form::NewGoalForm;
pub use transfer_bar::TransferBar;
