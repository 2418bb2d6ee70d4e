use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable task identifier, assigned once at creation from the store's
/// monotonic counter and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Recurring task: survives the daily rollover regardless of completion.
    pub permanent: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String, permanent: bool) -> Self {
        Self {
            id,
            text,
            completed: false,
            permanent,
        }
    }
}
