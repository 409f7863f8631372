use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

// Visual descriptor for a status badge. Every status maps to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub icon: &'static str,
    pub badge_class: &'static str,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::Excused,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "present" => Some(AttendanceStatus::Present),
            "absent" => Some(AttendanceStatus::Absent),
            "late" => Some(AttendanceStatus::Late),
            "excused" => Some(AttendanceStatus::Excused),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Excused => "excused",
        }
    }

    pub fn display(self) -> StatusDisplay {
        match self {
            AttendanceStatus::Present => StatusDisplay {
                label: "Present",
                icon: "✓",
                badge_class: "badge-present",
            },
            AttendanceStatus::Absent => StatusDisplay {
                label: "Absent",
                icon: "✕",
                badge_class: "badge-absent",
            },
            AttendanceStatus::Late => StatusDisplay {
                label: "Late",
                icon: "🕒",
                badge_class: "badge-late",
            },
            AttendanceStatus::Excused => StatusDisplay {
                label: "Excused",
                icon: "⚠",
                badge_class: "badge-excused",
            },
        }
    }
}

// Today's-schedule rows carry their own status set: a class later in the
// day is "upcoming", which is not an attendance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Present,
    Absent,
    Upcoming,
}

impl ScheduleStatus {
    pub fn display(self) -> StatusDisplay {
        match self {
            ScheduleStatus::Present => StatusDisplay {
                label: "Present",
                icon: "✓",
                badge_class: "badge-present",
            },
            ScheduleStatus::Absent => StatusDisplay {
                label: "Absent",
                icon: "✕",
                badge_class: "badge-absent",
            },
            ScheduleStatus::Upcoming => StatusDisplay {
                label: "Upcoming",
                icon: "🕒",
                badge_class: "badge-upcoming",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub avatar: Option<String>,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassInfo {
    pub id: String,
    pub name: String,
    pub code: String,
    pub schedule: String,
    pub room: String,
    pub enrolled: u32,
    pub capacity: u32,
    pub attendance: u32,
    pub semester: String,
}

// Directory entry with the per-student attendance record shown on the
// class management and students screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassmateRecord {
    pub id: String,
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub attendance: u32,
    pub total_classes: u32,
    pub present_classes: u32,
    pub avatar: String,
}

// The attendance percentage is mock data and intentionally not derived
// from present/total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectAttendance {
    pub subject: String,
    pub attendance: u32,
    pub total: u32,
    pub present: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayClass {
    pub id: u32,
    pub name: String,
    pub time: String,
    pub room: String,
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub student_id: String,
    pub semester: String,
    pub overall_attendance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }

    pub fn toggled(self) -> Role {
        match self {
            Role::Student => Role::Teacher,
            Role::Teacher => Role::Student,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceCounts {
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    pub excused: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBadge {
    pub label: &'static str,
    pub badge_class: &'static str,
}

pub fn attendance_tier(attendance: u32) -> TierBadge {
    if attendance >= 90 {
        TierBadge {
            label: "Excellent",
            badge_class: "badge-excellent",
        }
    } else if attendance >= 80 {
        TierBadge {
            label: "Good",
            badge_class: "badge-good",
        }
    } else if attendance >= 70 {
        TierBadge {
            label: "Average",
            badge_class: "badge-average",
        }
    } else {
        TierBadge {
            label: "Poor",
            badge_class: "badge-poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_the_four_statuses() {
        assert_eq!(
            AttendanceStatus::parse("present"),
            Some(AttendanceStatus::Present)
        );
        assert_eq!(
            AttendanceStatus::parse("absent"),
            Some(AttendanceStatus::Absent)
        );
        assert_eq!(AttendanceStatus::parse("late"), Some(AttendanceStatus::Late));
        assert_eq!(
            AttendanceStatus::parse("excused"),
            Some(AttendanceStatus::Excused)
        );
        assert_eq!(AttendanceStatus::parse("Present"), None);
        assert_eq!(AttendanceStatus::parse("upcoming"), None);
        assert_eq!(AttendanceStatus::parse(""), None);
    }

    #[test]
    fn status_round_trips_through_as_str() {
        for status in AttendanceStatus::ALL {
            assert_eq!(AttendanceStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn every_status_has_a_distinct_badge() {
        let classes: Vec<&str> = AttendanceStatus::ALL
            .iter()
            .map(|s| s.display().badge_class)
            .collect();
        for (i, class) in classes.iter().enumerate() {
            for other in classes.iter().skip(i + 1) {
                assert_ne!(class, other);
            }
        }
    }

    #[test]
    fn tier_boundaries_match_the_thresholds() {
        assert_eq!(attendance_tier(95).label, "Excellent");
        assert_eq!(attendance_tier(90).label, "Excellent");
        assert_eq!(attendance_tier(89).label, "Good");
        assert_eq!(attendance_tier(80).label, "Good");
        assert_eq!(attendance_tier(79).label, "Average");
        assert_eq!(attendance_tier(70).label, "Average");
        assert_eq!(attendance_tier(69).label, "Poor");
        assert_eq!(attendance_tier(0).label, "Poor");
    }

    #[test]
    fn role_toggle_flips_and_returns() {
        assert_eq!(Role::Teacher.toggled(), Role::Student);
        assert_eq!(Role::Teacher.toggled().toggled(), Role::Teacher);
    }
}
