use crate::models::{
    AttendanceStatus, ClassInfo, ClassmateRecord, Role, ScheduleStatus, Student, StudentInfo,
    SubjectAttendance, TodayClass, UserProfile,
};

// Demo datasets. Everything on the screens comes from here; nothing is
// persisted between runs.

pub fn roster() -> Vec<Student> {
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
            status: AttendanceStatus::Present,
        },
        Student {
            id: "3".to_string(),
            name: "Michael Rodriguez".to_string(),
            student_id: "CS2024003".to_string(),
            email: "michael.rodriguez@university.edu".to_string(),
            avatar: None,
            status: AttendanceStatus::Absent,
        },
        Student {
            id: "4".to_string(),
            name: "Emily Davis".to_string(),
            student_id: "CS2024004".to_string(),
            email: "emily.davis@university.edu".to_string(),
            avatar: None,
            status: AttendanceStatus::Late,
        },
        Student {
            id: "5".to_string(),
            name: "David Kim".to_string(),
            student_id: "CS2024005".to_string(),
            email: "david.kim@university.edu".to_string(),
            avatar: None,
            status: AttendanceStatus::Present,
        },
        Student {
            id: "6".to_string(),
            name: "Jessica Wilson".to_string(),
            student_id: "CS2024006".to_string(),
            email: "jessica.wilson@university.edu".to_string(),
            avatar: None,
            status: AttendanceStatus::Excused,
        },
    ]
}

pub fn classes() -> Vec<ClassInfo> {
    vec![
        ClassInfo {
            id: "cs101".to_string(),
            name: "Data Structures".to_string(),
            code: "CS 101".to_string(),
            schedule: "Mon, Wed, Fri 9:00 AM".to_string(),
            room: "CS-101".to_string(),
            enrolled: 45,
            capacity: 50,
            attendance: 87,
            semester: "Fall 2024".to_string(),
        },
        ClassInfo {
            id: "cs205".to_string(),
            name: "Database Systems".to_string(),
            code: "CS 205".to_string(),
            schedule: "Tue, Thu 11:00 AM".to_string(),
            room: "CS-205".to_string(),
            enrolled: 38,
            capacity: 40,
            attendance: 92,
            semester: "Fall 2024".to_string(),
        },
        ClassInfo {
            id: "cs301".to_string(),
            name: "Software Engineering".to_string(),
            code: "CS 301".to_string(),
            schedule: "Mon, Wed 2:00 PM".to_string(),
            room: "CS-301".to_string(),
            enrolled: 32,
            capacity: 35,
            attendance: 85,
            semester: "Fall 2024".to_string(),
        },
        ClassInfo {
            id: "cs401".to_string(),
            name: "Computer Networks".to_string(),
            code: "CS 401".to_string(),
            schedule: "Tue, Thu 4:00 PM".to_string(),
            room: "CS-401".to_string(),
            enrolled: 28,
            capacity: 30,
            attendance: 89,
            semester: "Fall 2024".to_string(),
        },
    ]
}

pub fn directory() -> Vec<ClassmateRecord> {
    vec![
        ClassmateRecord {
            id: "1".to_string(),
            name: "Alex Johnson".to_string(),
            student_id: "CS2024001".to_string(),
            email: "alex.johnson@university.edu".to_string(),
            attendance: 95,
            total_classes: 20,
            present_classes: 19,
            avatar: "/student-avatar.png".to_string(),
        },
        ClassmateRecord {
            id: "2".to_string(),
            name: "Sarah Chen".to_string(),
            student_id: "CS2024002".to_string(),
            email: "sarah.chen@university.edu".to_string(),
            attendance: 88,
            total_classes: 20,
            present_classes: 17,
            avatar: "/student-avatar.png".to_string(),
        },
        ClassmateRecord {
            id: "3".to_string(),
            name: "Michael Rodriguez".to_string(),
            student_id: "CS2024003".to_string(),
            email: "michael.rodriguez@university.edu".to_string(),
            attendance: 92,
            total_classes: 20,
            present_classes: 18,
            avatar: "/student-avatar.png".to_string(),
        },
        ClassmateRecord {
            id: "4".to_string(),
            name: "Emily Davis".to_string(),
            student_id: "CS2024004".to_string(),
            email: "emily.davis@university.edu".to_string(),
            attendance: 85,
            total_classes: 20,
            present_classes: 17,
            avatar: "/student-avatar.png".to_string(),
        },
        ClassmateRecord {
            id: "5".to_string(),
            name: "David Kim".to_string(),
            student_id: "CS2024005".to_string(),
            email: "david.kim@university.edu".to_string(),
            attendance: 78,
            total_classes: 20,
            present_classes: 15,
            avatar: "/student-avatar.png".to_string(),
        },
    ]
}

pub fn today_schedule() -> Vec<TodayClass> {
    vec![
        TodayClass {
            id: 1,
            name: "Data Structures".to_string(),
            time: "09:00 AM".to_string(),
            room: "CS-101".to_string(),
            status: ScheduleStatus::Present,
        },
        TodayClass {
            id: 2,
            name: "Database Systems".to_string(),
            time: "11:00 AM".to_string(),
            room: "CS-205".to_string(),
            status: ScheduleStatus::Upcoming,
        },
        TodayClass {
            id: 3,
            name: "Software Engineering".to_string(),
            time: "02:00 PM".to_string(),
            room: "CS-301".to_string(),
            status: ScheduleStatus::Upcoming,
        },
        TodayClass {
            id: 4,
            name: "Computer Networks".to_string(),
            time: "04:00 PM".to_string(),
            room: "CS-401".to_string(),
            status: ScheduleStatus::Upcoming,
        },
    ]
}

pub fn subject_attendance() -> Vec<SubjectAttendance> {
    vec![
        SubjectAttendance {
            subject: "Data Structures".to_string(),
            attendance: 92,
            total: 25,
            present: 23,
        },
        SubjectAttendance {
            subject: "Database Systems".to_string(),
            attendance: 88,
            total: 24,
            present: 21,
        },
        SubjectAttendance {
            subject: "Software Engineering".to_string(),
            attendance: 85,
            total: 20,
            present: 17,
        },
        SubjectAttendance {
            subject: "Computer Networks".to_string(),
            attendance: 82,
            total: 22,
            present: 18,
        },
    ]
}

pub fn student_info() -> StudentInfo {
    StudentInfo {
        name: "Alex Johnson".to_string(),
        student_id: "CS2024001".to_string(),
        semester: "Fall 2024".to_string(),
        overall_attendance: 87,
    }
}

pub fn user_for(role: Role) -> UserProfile {
    match role {
        Role::Teacher => UserProfile {
            name: "Dr. Sarah Wilson".to_string(),
            email: "sarah.wilson@university.edu".to_string(),
            role: "Professor".to_string(),
            avatar: "/placeholder.svg".to_string(),
        },
        Role::Student => UserProfile {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@university.edu".to_string(),
            role: "Student".to_string(),
            avatar: "/placeholder.svg".to_string(),
        },
    }
}

// Weekday columns for the schedule grid, matched against the abbreviated
// day names inside each class's schedule string.
pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

pub fn classes_on_day<'a>(classes: &'a [ClassInfo], day: &str) -> Vec<&'a ClassInfo> {
    let abbrev = &day[..3.min(day.len())];
    classes
        .iter()
        .filter(|class| class.schedule.contains(abbrev))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_the_six_demo_students() {
        let roster = roster();
        assert_eq!(roster.len(), 6);
        assert_eq!(roster[0].name, "Alex Johnson");
        assert_eq!(roster[5].status, AttendanceStatus::Excused);
    }

    #[test]
    fn enrollment_never_exceeds_capacity() {
        for class in classes() {
            assert!(class.enrolled <= class.capacity, "{}", class.code);
        }
    }

    #[test]
    fn schedule_grid_places_classes_on_their_days() {
        let classes = classes();
        let monday: Vec<&str> = classes_on_day(&classes, "Monday")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(monday, vec!["cs101", "cs301"]);

        let tuesday: Vec<&str> = classes_on_day(&classes, "Tuesday")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(tuesday, vec!["cs205", "cs401"]);

        let friday: Vec<&str> = classes_on_day(&classes, "Friday")
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(friday, vec!["cs101"]);
    }

    #[test]
    fn identities_follow_the_role() {
        assert_eq!(user_for(Role::Teacher).role, "Professor");
        assert_eq!(user_for(Role::Student).role, "Student");
    }
}
