//! Reduction of all records to the latest copy of every file name.

use std::collections::{BTreeMap, HashMap};

use crate::record::FileRecord;

/// Records grouped by entry name, in discovery order within each group.
pub type Groups = HashMap<String, Vec<FileRecord>>;

/// The chosen record per entry name, iterated in name order.
pub type Resolution = BTreeMap<String, FileRecord>;

/// Append one archive's records to the grouping map.
pub fn add_records(groups: &mut Groups, records: Vec<FileRecord>) {
    for record in records {
        groups
            .entry(record.name().to_owned())
            .or_default()
            .push(record);
    }
}

/// Pick the most recently modified record for every name.
///
/// Each group is stably sorted by modification time and its last record
/// taken, so among equal timestamps the record added last wins. Empty
/// groups produce no entry.
pub fn resolve(groups: Groups) -> Resolution {
    let mut latest = Resolution::new();

    for (name, mut versions) in groups {
        versions.sort_by_key(FileRecord::mod_time);

        if let Some(newest) = versions.pop() {
            latest.insert(name, newest);
        }
    }

    latest
}
