//! Partitioning of records into NAICS groups
//!
//! Records join the group whose representative has the same NAICS code,
//! compared case-insensitively as plain strings (a range such as `4400-4599`
//! only matches the identical text). Unseen codes open a new group at the end,
//! so group order is the order of first appearance.

use crate::app::models::{CollectionStrategy, Group, Record, Sequence};
use std::collections::HashMap;
use tracing::debug;

/// Group records by the code in `code_column`, preserving first-seen order
pub fn group_records<I>(
    records: I,
    code_column: usize,
    strategy: CollectionStrategy,
) -> Sequence<Group>
where
    I: IntoIterator<Item = Record>,
{
    let mut groups: Sequence<Group> = Sequence::new(strategy);
    // Lowercased code -> position in `groups`
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = record.field(code_column).to_lowercase();

        if let Some(group) = positions.get(&key).and_then(|&pos| groups.get_mut(pos)) {
            group.push(record);
            continue;
        }

        debug!(
            "New NAICS group '{}' at position {}",
            record.field(code_column),
            groups.len()
        );
        positions.insert(key, groups.len());
        groups.push(Group::new(record, strategy));
    }

    groups
}
