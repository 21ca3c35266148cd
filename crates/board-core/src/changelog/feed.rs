//! Feed records and ordering

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::{AuditRow, ChangeLogEntry, EnrichmentContext, ProjectScope};
use crate::value_objects::RecordId;

/// One row as handed over by the query layer, with everything joined
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRecord {
    pub row: AuditRow,
    pub context: Option<EnrichmentContext>,
    pub project: ProjectScope,
}

impl FeedRecord {
    pub fn new(row: AuditRow, context: Option<EnrichmentContext>, project: ProjectScope) -> Self {
        Self {
            row,
            context,
            project,
        }
    }
}

/// Newest first; ties broken by id, highest first. Rows without a timestamp
/// sort after every timestamped row.
pub fn sort_feed(entries: &mut [ChangeLogEntry]) {
    entries.sort_by(|a, b| feed_order((a.created_at(), a.id()), (b.created_at(), b.id())));
}

/// Same order as [`sort_feed`], applied to raw records. Sources use it to
/// pick the newest rows of a page.
pub fn sort_records(records: &mut [FeedRecord]) {
    records.sort_by(|a, b| {
        feed_order(
            (a.row.created_at, &a.row.id),
            (b.row.created_at, &b.row.id),
        )
    });
}

fn feed_order(
    (a_at, a_id): (Option<DateTime<Utc>>, &RecordId),
    (b_at, b_id): (Option<DateTime<Utc>>, &RecordId),
) -> Ordering {
    match (a_at, b_at) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| b_id.natural_cmp(a_id))
}
