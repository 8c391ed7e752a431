//! Roster lookup and absentee reconciliation.
//!
//! # Algorithm Summary
//!
//! 1. Collect the distinct groups among observed participants
//! 2. Keep only roster members of those groups
//! 3. Mark every kept member whose name was observed
//! 4. Append an `Absent` record for each unmarked member
//!
//! Names are compared by exact string equality. Observed names are already
//! normalized by the identity parser, so a roster spelling that differs in
//! whitespace or diacritics shows up as both a guest and an absentee.

use std::collections::{HashMap, HashSet};

use crate::types::{AttendanceRecord, GUEST_GROUP};

/// One expected participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub full_name: String,
    pub group: String,
}

impl RosterEntry {
    pub fn new(full_name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            group: group.into(),
        }
    }
}

/// Resolves a participant's group by name.
///
/// This trait lets classification work against the loaded roster or an
/// in-memory fixture.
pub trait GroupLookup {
    /// Returns the group for `full_name`, if known.
    fn lookup_group(&self, full_name: &str) -> Option<&str>;

    /// Returns the group for `full_name`, or [`GUEST_GROUP`].
    fn group_or_guest(&self, full_name: &str) -> String {
        self.lookup_group(full_name)
            .unwrap_or(GUEST_GROUP)
            .to_string()
    }
}

/// The authoritative list of expected participants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub const fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RosterEntry> for Roster {
    fn from_iter<T: IntoIterator<Item = RosterEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl GroupLookup for Roster {
    /// Linear scan; the first entry with a matching name wins.
    fn lookup_group(&self, full_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.full_name == full_name)
            .map(|e| e.group.as_str())
    }
}

/// Appends an `Absent` record for every roster member of an observed group
/// who does not appear in `observed`.
///
/// Absentees follow roster order and each name is added once. Their group
/// comes from `lookup`, which may differ from the group that selected them
/// when the roster lists a name twice.
pub fn reconcile<L: GroupLookup + ?Sized>(
    mut observed: Vec<AttendanceRecord>,
    roster: &Roster,
    lookup: &L,
) -> Vec<AttendanceRecord> {
    let groups: HashSet<&str> = observed.iter().map(|r| r.group.as_str()).collect();

    let expected: Vec<&RosterEntry> = roster
        .entries()
        .iter()
        .filter(|e| groups.contains(e.group.as_str()))
        .collect();

    let mut seen: HashMap<&str, bool> = expected
        .iter()
        .map(|e| (e.full_name.as_str(), false))
        .collect();

    for record in &observed {
        if let Some(flag) = seen.get_mut(record.full_name.as_str()) {
            *flag = true;
        }
    }

    let mut absentees = Vec::new();
    for entry in expected {
        let name = entry.full_name.as_str();
        if seen.get(name) == Some(&false) {
            tracing::debug!(name, group = %entry.group, "roster member absent");
            absentees.push(AttendanceRecord::absent(lookup.group_or_guest(name), name));
            // Later duplicates of the same name are already covered.
            seen.insert(name, true);
        }
    }

    observed.extend(absentees);
    observed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DurationCategory, Lateness, Presence};

    fn roster() -> Roster {
        [
            ("Ivanov Ivan Ivanovich", "МП-21"),
            ("Petrov Petr Petrovich", "МП-21"),
            ("Sidorov Sidor Sidorovich", "МТ-32"),
            ("Smirnova Anna Olegovna", "МТ-32"),
            ("Kuznetsov Oleg Igorevich", "МК-11"),
        ]
        .into_iter()
        .map(|(name, group)| RosterEntry::new(name, group))
        .collect()
    }

    fn seen(group: &str, name: &str) -> AttendanceRecord {
        AttendanceRecord::observed(group, name, Lateness::OnTime, DurationCategory::Full)
    }

    #[test]
    fn lookup_finds_first_match_or_guest() {
        let roster = roster();
        assert_eq!(roster.lookup_group("Petrov Petr Petrovich"), Some("МП-21"));
        assert_eq!(roster.lookup_group("Nobody"), None);
        assert_eq!(roster.group_or_guest("Nobody"), "Guest");

        let dup: Roster = [RosterEntry::new("X Y", "A"), RosterEntry::new("X Y", "B")]
            .into_iter()
            .collect();
        assert_eq!(dup.lookup_group("X Y"), Some("A"));
    }

    #[test]
    fn absentees_only_for_observed_groups() {
        let roster = roster();
        let observed = vec![seen("МП-21", "Ivanov Ivan Ivanovich")];

        let result = reconcile(observed, &roster, &roster);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].full_name, "Ivanov Ivan Ivanovich");
        assert_eq!(result[1].full_name, "Petrov Petr Petrovich");
        assert_eq!(result[1].group, "МП-21");
        assert_eq!(result[1].presence, Presence::Absent);
    }

    #[test]
    fn observed_records_are_untouched() {
        let roster = roster();
        let observed = vec![
            seen("МТ-32", "Smirnova Anna Olegovna"),
            seen("Guest", "Stranger Someone"),
        ];
        let before = observed.clone();

        let result = reconcile(observed, &roster, &roster);

        assert_eq!(&result[..2], &before[..]);
        let absent: Vec<&str> = result[2..].iter().map(|r| r.full_name.as_str()).collect();
        assert_eq!(absent, vec!["Sidorov Sidor Sidorovich"]);
    }

    #[test]
    fn nothing_observed_means_nobody_absent() {
        let roster = roster();
        assert!(reconcile(Vec::new(), &roster, &roster).is_empty());
    }

    #[test]
    fn reconcile_is_idempotent() {
        let roster = roster();
        let observed = vec![
            seen("МП-21", "Ivanov Ivan Ivanovich"),
            seen("МТ-32", "Smirnova Anna Olegovna"),
        ];

        let once = reconcile(observed, &roster, &roster);
        let twice = reconcile(once.clone(), &roster, &roster);

        assert_eq!(once.len(), 4);
        assert_eq!(twice, once);
    }

    #[test]
    fn duplicate_roster_names_yield_one_absentee() {
        let roster: Roster = [
            RosterEntry::new("A B", "G1"),
            RosterEntry::new("C D", "G1"),
            RosterEntry::new("C D", "G1"),
        ]
        .into_iter()
        .collect();

        let result = reconcile(vec![seen("G1", "A B")], &roster, &roster);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn absentee_group_comes_from_lookup() {
        let roster: Roster = [RosterEntry::new("A B", "G1"), RosterEntry::new("C D", "G1")]
            .into_iter()
            .collect();
        let other: Roster = [RosterEntry::new("C D", "G9")].into_iter().collect();

        let result = reconcile(vec![seen("G1", "A B")], &roster, &other);
        assert_eq!(result[1].group, "G9");
    }
}
