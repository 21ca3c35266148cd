//! Value objects - immutable types that represent domain concepts

mod record_id;
mod task_counts;

pub use record_id::RecordId;
pub use task_counts::TaskCounts;
