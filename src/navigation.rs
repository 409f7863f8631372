use serde::Serialize;

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
}

const TEACHER_NAV: [NavEntry; 6] = [
    NavEntry {
        label: "Dashboard",
        path: "/",
    },
    NavEntry {
        label: "Classes",
        path: "/classes",
    },
    NavEntry {
        label: "Attendance",
        path: "/attendance",
    },
    NavEntry {
        label: "Analytics",
        path: "/analytics",
    },
    NavEntry {
        label: "Students",
        path: "/students",
    },
    NavEntry {
        label: "Settings",
        path: "/settings",
    },
];

const STUDENT_NAV: [NavEntry; 5] = [
    NavEntry {
        label: "Dashboard",
        path: "/",
    },
    NavEntry {
        label: "My Classes",
        path: "/classes",
    },
    NavEntry {
        label: "Attendance",
        path: "/my-attendance",
    },
    NavEntry {
        label: "Reports",
        path: "/analytics",
    },
    NavEntry {
        label: "Settings",
        path: "/settings",
    },
];

pub fn entries_for(role: Role) -> &'static [NavEntry] {
    match role {
        Role::Teacher => &TEACHER_NAV,
        Role::Student => &STUDENT_NAV,
    }
}

// The active entry is an exact path match, never a prefix match.
pub fn is_active(entry: &NavEntry, current_path: &str) -> bool {
    entry.path == current_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_and_student_sets_differ_exactly() {
        let teacher = entries_for(Role::Teacher);
        let student = entries_for(Role::Student);

        assert_eq!(teacher.len(), 6);
        assert_eq!(student.len(), 5);

        let teacher_labels: Vec<&str> = teacher.iter().map(|e| e.label).collect();
        let student_labels: Vec<&str> = student.iter().map(|e| e.label).collect();
        assert_eq!(
            teacher_labels,
            vec![
                "Dashboard",
                "Classes",
                "Attendance",
                "Analytics",
                "Students",
                "Settings"
            ]
        );
        assert_eq!(
            student_labels,
            vec!["Dashboard", "My Classes", "Attendance", "Reports", "Settings"]
        );
    }

    #[test]
    fn switching_roles_swaps_and_restores_the_set() {
        let role = Role::Teacher;
        assert_eq!(entries_for(role).len(), 6);
        assert_eq!(entries_for(role.toggled()).len(), 5);
        assert_eq!(entries_for(role.toggled().toggled()), entries_for(role));
    }

    #[test]
    fn active_entry_requires_an_exact_match() {
        let classes = NavEntry {
            label: "Classes",
            path: "/classes",
        };
        assert!(is_active(&classes, "/classes"));
        assert!(!is_active(&classes, "/classes/cs101"));
        assert!(!is_active(&classes, "/"));

        let dashboard = NavEntry {
            label: "Dashboard",
            path: "/",
        };
        assert!(is_active(&dashboard, "/"));
        assert!(!is_active(&dashboard, "/classes"));
    }

    #[test]
    fn student_attendance_points_at_my_attendance() {
        let student = entries_for(Role::Student);
        let attendance = student.iter().find(|e| e.label == "Attendance").unwrap();
        assert_eq!(attendance.path, "/my-attendance");
    }
}
