//! Dedup merging of incoming records into a category list
//!
//! Records are keyed on `name` alone: an incoming record whose name is
//! already present is discarded even if its secondary value differs. A list
//! that has reached the cap is returned untouched.

use std::collections::HashSet;

use shared::ProjectedRecord;

use crate::types::MergeOutcome;

/// Merge `incoming` into `existing`, preserving order and the cap.
///
/// `existing_count` and `capped` describe the list as it was before the
/// merge; the driver uses them for its termination check.
pub fn merge(existing: Vec<ProjectedRecord>, incoming: Vec<ProjectedRecord>, cap: usize) -> MergeOutcome {
    let existing_count = existing.len();

    if existing_count >= cap {
        return MergeOutcome {
            records: existing,
            existing_count,
            capped: true,
            appended: 0,
            duplicates: Vec::new(),
        };
    }

    // Every existing name, so the check covers the whole list
    let mut seen: HashSet<Option<String>> = existing.iter().map(|record| record.name.clone()).collect();
    let mut records = existing;
    let mut appended = 0;
    let mut duplicates = Vec::new();

    for record in incoming {
        if seen.contains(&record.name) {
            duplicates.push(record);
            continue;
        }
        if records.len() >= cap {
            break;
        }
        seen.insert(record.name.clone());
        records.push(record);
        appended += 1;
    }

    MergeOutcome {
        records,
        existing_count,
        capped: false,
        appended,
        duplicates,
    }
}
