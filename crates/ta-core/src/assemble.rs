//! Final ordering of report rows.

use std::cmp::Ordering;

use crate::types::AttendanceRecord;

/// Orders records by group, then by name (ordinal comparison).
pub fn compare_members(a: &AttendanceRecord, b: &AttendanceRecord) -> Ordering {
    a.group
        .cmp(&b.group)
        .then_with(|| a.full_name.cmp(&b.full_name))
}

/// Drops unnamed records and sorts the rest by group, then name.
///
/// Sorting by name first and then stably by group keeps the name order
/// within each group; the result matches [`compare_members`].
pub fn sort_members(mut members: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
    members.retain(|m| !m.full_name.is_empty());
    members.sort_unstable_by(|a, b| a.full_name.cmp(&b.full_name));
    members.sort_by(|a, b| a.group.cmp(&b.group));
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DurationCategory, Lateness};

    fn member(group: &str, name: &str) -> AttendanceRecord {
        AttendanceRecord::observed(group, name, Lateness::OnTime, DurationCategory::Full)
    }

    fn names(members: &[AttendanceRecord]) -> Vec<(&str, &str)> {
        members
            .iter()
            .map(|m| (m.group.as_str(), m.full_name.as_str()))
            .collect()
    }

    fn sample() -> Vec<AttendanceRecord> {
        vec![
            member("МТ-32", "Sidorov S"),
            member("Guest", "Zed Z"),
            member("МП-21", "Petrov P"),
            member("МТ-32", "Abramov A"),
            member("МП-21", "Ivanov I"),
            AttendanceRecord::absent("МП-21", "Bykov B"),
            member("Guest", "Adams A"),
        ]
    }

    #[test]
    fn sorts_by_group_then_name() {
        let sorted = sort_members(sample());
        assert_eq!(
            names(&sorted),
            vec![
                ("Guest", "Adams A"),
                ("Guest", "Zed Z"),
                ("МП-21", "Bykov B"),
                ("МП-21", "Ivanov I"),
                ("МП-21", "Petrov P"),
                ("МТ-32", "Abramov A"),
                ("МТ-32", "Sidorov S"),
            ]
        );
    }

    #[test]
    fn two_pass_sort_matches_single_comparator() {
        let mut expected = sample();
        expected.sort_by(compare_members);
        assert_eq!(sort_members(sample()), expected);

        // Also on input that is already reverse-ordered.
        let mut reversed = sample();
        reversed.sort_by(|a, b| compare_members(b, a));
        assert_eq!(sort_members(reversed), expected);
    }

    #[test]
    fn equal_groups_keep_name_order() {
        let sorted = sort_members(sample());
        let mut by_name = sample();
        by_name.sort_by(|a, b| a.full_name.cmp(&b.full_name));

        for group in ["Guest", "МП-21", "МТ-32"] {
            let in_sorted: Vec<&str> = sorted
                .iter()
                .filter(|m| m.group == group)
                .map(|m| m.full_name.as_str())
                .collect();
            let in_name_order: Vec<&str> = by_name
                .iter()
                .filter(|m| m.group == group)
                .map(|m| m.full_name.as_str())
                .collect();
            assert_eq!(in_sorted, in_name_order, "group {group}");
        }
    }

    #[test]
    fn unnamed_records_are_dropped() {
        let members = vec![member("Guest", ""), member("МП-21", "Ivanov I")];
        let sorted = sort_members(members);
        assert_eq!(names(&sorted), vec![("МП-21", "Ivanov I")]);
    }

    #[test]
    fn ordering_is_ordinal() {
        // Uppercase Latin sorts before lowercase, Cyrillic after Latin.
        let sorted = sort_members(vec![
            member("g", "b"),
            member("G", "a"),
            member("Г", "c"),
        ]);
        assert_eq!(names(&sorted), vec![("G", "a"), ("g", "b"), ("Г", "c")]);
    }
}
