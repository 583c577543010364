use std::collections::HashMap;

use chrono::NaiveDate;

pub const EXCUSED_CATEGORY: &str = "IZIN";
pub const UNEXPLAINED_CATEGORY: &str = "GHOIB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub name: String,
    pub class: String,
    pub hours: i32,
    pub category: String,
}

/// The two categories that are tallied. Everything else is recorded only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsenceKind {
    Excused,
    Unexplained,
}

impl AbsenceKind {
    pub fn classify(category: &str) -> Option<Self> {
        match category {
            EXCUSED_CATEGORY => Some(AbsenceKind::Excused),
            UNEXPLAINED_CATEGORY => Some(AbsenceKind::Unexplained),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsenceEvent {
    pub date: NaiveDate,
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonSummary {
    pub events: Vec<AbsenceEvent>,
    pub excused_count: usize,
    pub unexplained_count: usize,
}

impl PersonSummary {
    pub fn record(&mut self, date: NaiveDate, category: &str) {
        self.events.push(AbsenceEvent {
            date,
            category: category.to_string(),
        });

        match AbsenceKind::classify(category) {
            Some(AbsenceKind::Excused) => self.excused_count += 1,
            Some(AbsenceKind::Unexplained) => self.unexplained_count += 1,
            None => {}
        }
    }
}

/// Per-name summaries keyed by the exact name string from the file.
#[derive(Debug, Clone, Default)]
pub struct AttendanceIndex {
    people: HashMap<String, PersonSummary>,
}

impl AttendanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&mut self, name: &str) -> &mut PersonSummary {
        self.people.entry(name.to_string()).or_default()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&PersonSummary> {
        self.people.get(name)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PersonSummary)> {
        self.people
            .iter()
            .map(|(name, summary)| (name.as_str(), summary))
    }

    pub fn sorted_by_name(&self) -> Vec<(&str, &PersonSummary)> {
        let mut people: Vec<(&str, &PersonSummary)> = self.iter().collect();
        people.sort_by(|a, b| a.0.cmp(b.0));
        people
    }
}
