use attendance_tracker::models::{AttendanceStatus, Role};
use attendance_tracker::pages;
use attendance_tracker::session::Session;
use attendance_tracker::{analytics, mock, navigation, roster};

#[test]
fn marking_everyone_absent_tallies_the_whole_roster() {
    let mut students = mock::roster();
    roster::mark_all(&mut students, AttendanceStatus::Absent);

    let counts = roster::aggregate(&students);
    assert_eq!(counts.present, 0);
    assert_eq!(counts.absent, students.len());
    assert_eq!(counts.late, 0);
    assert_eq!(counts.excused, 0);
    assert_eq!(counts.total, students.len());
}

#[test]
fn searching_sarah_finds_only_sarah_chen() {
    let students = mock::roster();
    let matches = roster::filter_students(&students, "sarah");

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "Sarah Chen");
}

#[test]
fn single_status_update_keeps_the_rest_of_the_roster() {
    let mut students = mock::roster();
    let before = students.len();

    roster::set_status(&mut students, "3", AttendanceStatus::Excused);

    assert_eq!(students.len(), before);
    assert_eq!(students[2].status, AttendanceStatus::Excused);
    assert_eq!(students[0].status, AttendanceStatus::Present);
    assert_eq!(students[3].status, AttendanceStatus::Late);
}

#[test]
fn role_switch_swaps_navigation_and_identity_round_trip() {
    let mut session = Session::default();
    assert_eq!(navigation::entries_for(session.role).len(), 6);

    session.switch_role();
    let student_nav = navigation::entries_for(session.role);
    assert_eq!(student_nav.len(), 5);
    assert!(student_nav.iter().any(|entry| entry.path == "/my-attendance"));
    assert_eq!(session.user().name, "Alex Johnson");

    session.switch_role();
    assert_eq!(navigation::entries_for(session.role).len(), 6);
    assert_eq!(session.user().name, "Dr. Sarah Wilson");
}

#[test]
fn logged_out_sessions_still_render_every_screen() {
    let mut session = Session::default();
    session.log_out();

    let page = pages::dashboard_page(&session);
    assert!(page.contains("Welcome back"));
    assert!(!page.contains("Log out"));

    let page = pages::analytics_page(&session);
    assert!(page.contains("Analytics"));
    assert!(!page.contains(r#"class="nav-link"#));
}

#[test]
fn export_report_covers_every_class() {
    let report = analytics::export_report_csv().unwrap();

    assert!(report.starts_with("class,code,students,attendance_pct,generated_at"));
    for class in mock::classes() {
        assert!(report.contains(&class.code), "missing {}", class.code);
    }
}

#[test]
fn login_then_logout_matches_the_session_contract() {
    let mut session = Session::default();
    session.log_out();
    assert!(!session.authenticated);

    session.log_in(Role::Student);
    assert!(session.authenticated);
    assert_eq!(session.role, Role::Student);

    let page = pages::render_page(&session, "/", "Dashboard", "<p>home</p>");
    assert!(page.contains("Switch to Teacher"));
    assert!(page.contains("Current Role: <strong>Student</strong>"));
}
