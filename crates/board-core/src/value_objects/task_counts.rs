//! Denormalized task counters carried by a milestone

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Pair of task counters with `completed <= all`
///
/// The fields are private so that every value in circulation went through
/// [`TaskCounts::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "RawTaskCounts")]
pub struct TaskCounts {
    all_tasks_count: u64,
    completed_tasks_count: u64,
}

#[derive(Deserialize)]
struct RawTaskCounts {
    all_tasks_count: u64,
    completed_tasks_count: u64,
}

impl TryFrom<RawTaskCounts> for TaskCounts {
    type Error = DomainError;

    fn try_from(raw: RawTaskCounts) -> Result<Self, Self::Error> {
        Self::new(raw.all_tasks_count, raw.completed_tasks_count)
    }
}

impl TaskCounts {
    /// Create a counter pair, rejecting `completed > all`
    pub fn new(all_tasks_count: u64, completed_tasks_count: u64) -> Result<Self, DomainError> {
        if completed_tasks_count > all_tasks_count {
            return Err(DomainError::InvalidTaskCounts {
                all: all_tasks_count,
                completed: completed_tasks_count,
            });
        }
        Ok(Self {
            all_tasks_count,
            completed_tasks_count,
        })
    }

    #[inline]
    pub fn all(&self) -> u64 {
        self.all_tasks_count
    }

    #[inline]
    pub fn completed(&self) -> u64 {
        self.completed_tasks_count
    }

    #[inline]
    pub fn remaining(&self) -> u64 {
        self.all_tasks_count - self.completed_tasks_count
    }

    /// Completion ratio in percent, 0 for an empty milestone
    pub fn percent_complete(&self) -> u8 {
        if self.all_tasks_count == 0 {
            return 0;
        }
        (u128::from(self.completed_tasks_count) * 100 / u128::from(self.all_tasks_count)) as u8
    }

    pub fn is_complete(&self) -> bool {
        self.all_tasks_count > 0 && self.completed_tasks_count == self.all_tasks_count
    }
}
