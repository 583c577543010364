use crate::models::{AttendanceIndex, AttendanceRecord};

pub fn aggregate(records: &[AttendanceRecord]) -> AttendanceIndex {
    let mut index = AttendanceIndex::new();

    for record in records {
        index.entry(&record.name).record(record.date, &record.category);
    }

    index
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_record(day: u32, name: &str, category: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            name: name.to_string(),
            class: "X".to_string(),
            hours: 1,
            category: category.to_string(),
        }
    }

    #[test]
    fn tallies_per_person() {
        let records = vec![
            sample_record(1, "Alice", "IZIN"),
            sample_record(2, "Alice", "GHOIB"),
            sample_record(3, "Bob", "HADIR"),
        ];

        let index = aggregate(&records);
        assert_eq!(index.len(), 2);

        let alice = index.get("Alice").unwrap();
        assert_eq!(alice.excused_count, 1);
        assert_eq!(alice.unexplained_count, 1);
        assert_eq!(alice.events.len(), 2);

        let bob = index.get("Bob").unwrap();
        assert_eq!(bob.excused_count, 0);
        assert_eq!(bob.unexplained_count, 0);
        assert_eq!(bob.events.len(), 1);
        assert_eq!(bob.events[0].category, "HADIR");
    }

    #[test]
    fn events_keep_input_order() {
        let records = vec![
            sample_record(20, "Alice", "IZIN"),
            sample_record(5, "Alice", ""),
            sample_record(11, "Alice", "IZIN"),
        ];

        let index = aggregate(&records);
        let days: Vec<NaiveDate> = index
            .get("Alice")
            .unwrap()
            .events
            .iter()
            .map(|event| event.date)
            .collect();
        let expected: Vec<NaiveDate> = records.iter().map(|record| record.date).collect();
        assert_eq!(days, expected);
        assert_eq!(index.get("Alice").unwrap().excused_count, 2);
    }

    #[test]
    fn names_match_exactly() {
        let records = vec![
            sample_record(1, "Alice", "GHOIB"),
            sample_record(2, "alice", "GHOIB"),
            sample_record(3, "Alice ", "GHOIB"),
        ];
        assert_eq!(aggregate(&records).len(), 3);
    }

    #[test]
    fn counters_never_exceed_events() {
        let records = vec![
            sample_record(1, "Dewi", "IZIN"),
            sample_record(2, "Dewi", "SAKIT"),
            sample_record(3, "Dewi", "GHOIB"),
            sample_record(4, "Dewi", "ghoib"),
        ];
        let index = aggregate(&records);
        for (_, summary) in index.iter() {
            let excused = summary
                .events
                .iter()
                .filter(|event| event.category == "IZIN")
                .count();
            let unexplained = summary
                .events
                .iter()
                .filter(|event| event.category == "GHOIB")
                .count();
            assert_eq!(summary.excused_count, excused);
            assert_eq!(summary.unexplained_count, unexplained);
            assert!(summary.events.len() >= excused + unexplained);
        }
    }

    #[test]
    fn empty_input_gives_empty_index() {
        assert!(aggregate(&[]).is_empty());
    }
}
