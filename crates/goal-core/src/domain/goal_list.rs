//! Goal List
//!
//! The ordered sequence of goals. Order is exactly the order the user last
//! arranged: appends go to the end, drags move a goal between positions.

use super::goal::Goal;

/// Ordered, owning collection of goals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalList {
    goals: Vec<Goal>,
}

impl GoalList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Goal> {
        self.goals.iter()
    }

    pub fn as_slice(&self) -> &[Goal] {
        &self.goals
    }

    /// Text of every goal, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.goals.iter().map(Goal::text).collect()
    }

    /// Append a goal built from raw input.
    /// Blank input is ignored; returns whether the list changed.
    pub fn append(&mut self, text: &str) -> bool {
        match Goal::new(text) {
            Some(goal) => {
                self.goals.push(goal);
                true
            }
            None => false,
        }
    }

    /// Remove the goal at `index`. Out-of-range indices leave the list as is.
    pub fn remove_at(&mut self, index: usize) -> Option<Goal> {
        if index < self.goals.len() {
            Some(self.goals.remove(index))
        } else {
            None
        }
    }

    /// Move the goal at `from` so it sits at `to` among the remaining goals.
    ///
    /// `to` counts positions in the list with the moved goal taken out, which
    /// is what drop geometry produces. Positions past the end append.
    /// Returns false when `from` is out of range.
    pub fn move_to(&mut self, from: usize, to: usize) -> bool {
        if from >= self.goals.len() {
            return false;
        }
        let goal = self.goals.remove(from);
        let to = to.min(self.goals.len());
        self.goals.insert(to, goal);
        true
    }

    /// Discard the current goals and install `goals` in their place.
    pub fn replace_all(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }
}
