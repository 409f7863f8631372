use crate::models::{AttendanceCounts, AttendanceStatus, ClassmateRecord, Student};

// Replaces one student's status, leaving every other entry untouched.
// An id that is not on the roster is a no-op.
pub fn set_status(roster: &mut [Student], student_id: &str, status: AttendanceStatus) -> bool {
    match roster.iter_mut().find(|student| student.id == student_id) {
        Some(student) => {
            student.status = status;
            true
        }
        None => false,
    }
}

pub fn mark_all(roster: &mut [Student], status: AttendanceStatus) {
    for student in roster.iter_mut() {
        student.status = status;
    }
}

// Tally of the roster by status. Always recomputed from the roster itself,
// never cached.
pub fn aggregate(roster: &[Student]) -> AttendanceCounts {
    let mut counts = AttendanceCounts::default();
    for student in roster {
        match student.status {
            AttendanceStatus::Present => counts.present += 1,
            AttendanceStatus::Absent => counts.absent += 1,
            AttendanceStatus::Late => counts.late += 1,
            AttendanceStatus::Excused => counts.excused += 1,
        }
        counts.total += 1;
    }
    counts
}

fn matches_query(name: &str, student_id: &str, query: &str) -> bool {
    let query = query.to_lowercase();
    name.to_lowercase().contains(&query) || student_id.to_lowercase().contains(&query)
}

// Case-insensitive substring match on name or student id. Keeps the
// roster order; an empty query keeps everything.
pub fn filter_students<'a>(roster: &'a [Student], query: &str) -> Vec<&'a Student> {
    roster
        .iter()
        .filter(|student| matches_query(&student.name, &student.student_id, query))
        .collect()
}

pub fn filter_directory<'a>(records: &'a [ClassmateRecord], query: &str) -> Vec<&'a ClassmateRecord> {
    records
        .iter()
        .filter(|record| matches_query(&record.name, &record.student_id, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Vec<Student> {
        vec![
            Student {
                id: "1".to_string(),
                name: "Alex Johnson".to_string(),
                student_id: "CS2024001".to_string(),
                email: "alex.johnson@university.edu".to_string(),
                avatar: None,
                status: AttendanceStatus::Present,
            },
            Student {
                id: "2".to_string(),
                name: "Sarah Chen".to_string(),
                student_id: "CS2024002".to_string(),
                email: "sarah.chen@university.edu".to_string(),
                avatar: None,
                status: AttendanceStatus::Absent,
            },
            Student {
                id: "3".to_string(),
                name: "Emily Davis".to_string(),
                student_id: "CS2024004".to_string(),
                email: "emily.davis@university.edu".to_string(),
                avatar: None,
                status: AttendanceStatus::Late,
            },
        ]
    }

    #[test]
    fn set_status_changes_only_the_target() {
        let mut roster = sample_roster();
        let changed = set_status(&mut roster, "2", AttendanceStatus::Excused);

        assert!(changed);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].status, AttendanceStatus::Present);
        assert_eq!(roster[1].status, AttendanceStatus::Excused);
        assert_eq!(roster[2].status, AttendanceStatus::Late);
    }

    #[test]
    fn set_status_with_unknown_id_is_a_noop() {
        let mut roster = sample_roster();
        let before: Vec<AttendanceStatus> = roster.iter().map(|s| s.status).collect();

        let changed = set_status(&mut roster, "99", AttendanceStatus::Absent);

        assert!(!changed);
        assert_eq!(roster.len(), 3);
        let after: Vec<AttendanceStatus> = roster.iter().map(|s| s.status).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn mark_all_present_leaves_only_present_counts() {
        let mut roster = sample_roster();
        mark_all(&mut roster, AttendanceStatus::Present);

        let counts = aggregate(&roster);
        assert_eq!(counts.present, roster.len());
        assert_eq!(counts.absent, 0);
        assert_eq!(counts.late, 0);
        assert_eq!(counts.excused, 0);
    }

    #[test]
    fn mark_all_absent_matches_expected_counts() {
        let mut roster = vec![
            Student {
                id: "1".to_string(),
                name: "A".to_string(),
                student_id: "S1".to_string(),
                email: "a@university.edu".to_string(),
                avatar: None,
                status: AttendanceStatus::Present,
            },
            Student {
                id: "2".to_string(),
                name: "B".to_string(),
                student_id: "S2".to_string(),
                email: "b@university.edu".to_string(),
                avatar: None,
                status: AttendanceStatus::Absent,
            },
        ];

        mark_all(&mut roster, AttendanceStatus::Absent);

        let counts = aggregate(&roster);
        assert_eq!(counts.present, 0);
        assert_eq!(counts.absent, 2);
        assert_eq!(counts.late, 0);
        assert_eq!(counts.excused, 0);
        assert_eq!(counts.total, 2);
    }

    #[test]
    fn aggregate_of_empty_roster_is_all_zeros() {
        let counts = aggregate(&[]);
        assert_eq!(counts, AttendanceCounts::default());
    }

    #[test]
    fn aggregate_counts_every_status() {
        let roster = sample_roster();
        let counts = aggregate(&roster);
        assert_eq!(counts.present, 1);
        assert_eq!(counts.absent, 1);
        assert_eq!(counts.late, 1);
        assert_eq!(counts.excused, 0);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn empty_query_returns_the_roster_in_order() {
        let roster = sample_roster();
        let filtered = filter_students(&roster, "");

        let ids: Vec<&str> = filtered.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let roster = sample_roster();
        let filtered = filter_students(&roster, "sarah");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Sarah Chen");
    }

    #[test]
    fn search_matches_student_id() {
        let roster = sample_roster();
        let filtered = filter_students(&roster, "cs2024004");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Emily Davis");
    }

    #[test]
    fn filtering_is_idempotent() {
        let roster = sample_roster();
        let once: Vec<Student> = filter_students(&roster, "cs")
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<&Student> = filter_students(&once, "cs");

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.id, b.id);
        }
    }
}
