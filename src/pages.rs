use crate::mock;
use crate::navigation;
use crate::session::Session;

// Every screen is a self-contained HTML page: shared chrome, inline
// styles, and plain fetch() wiring against the screen's own endpoints.

const BASE_STYLE: &str = r##"
    <style>
        * { box-sizing: border-box; }
        body { font-family: Arial, sans-serif; margin: 0; background: #f5f5f5; color: #212529; }
        a { text-decoration: none; color: inherit; }
        .topbar { background: white; border-bottom: 1px solid #ddd; position: sticky; top: 0; z-index: 10; }
        .topbar-inner { max-width: 1100px; margin: 0 auto; padding: 12px 20px; display: flex; align-items: center; justify-content: space-between; gap: 16px; }
        .logo { font-weight: bold; font-size: 18px; }
        .nav { display: flex; gap: 4px; flex-wrap: wrap; }
        .nav-link { padding: 8px 12px; border-radius: 4px; font-size: 14px; color: #495057; }
        .nav-link:hover { background: #e9ecef; }
        .nav-link.active { background: #007bff; color: white; }
        .user-menu { display: flex; align-items: center; gap: 12px; }
        .bell { position: relative; cursor: default; }
        .bell-badge { position: absolute; top: -6px; right: -10px; background: #dc3545; color: white; border-radius: 50%; font-size: 11px; padding: 1px 5px; }
        .avatar { width: 34px; height: 34px; border-radius: 50%; border: none; background: #007bff; color: white; font-weight: bold; cursor: pointer; }
        .dropdown { position: relative; }
        .dropdown-content { display: none; position: absolute; right: 0; top: 40px; background: white; border: 1px solid #ddd; border-radius: 6px; padding: 12px; min-width: 220px; box-shadow: 0 4px 10px rgba(0,0,0,0.1); }
        .dropdown:hover .dropdown-content { display: block; }
        .dropdown-name { font-weight: bold; margin: 0; }
        .dropdown-email { color: #6c757d; font-size: 13px; margin: 4px 0 8px 0; }
        .dropdown-item { background: none; border: none; color: #dc3545; cursor: pointer; padding: 6px 0; font-size: 14px; width: 100%; text-align: left; }
        .content { max-width: 1100px; margin: 0 auto; padding: 24px 20px; }
        .footer { border-top: 1px solid #ddd; background: white; margin-top: 40px; }
        .footer-inner { max-width: 1100px; margin: 0 auto; padding: 16px 20px; display: flex; justify-content: space-between; align-items: center; gap: 12px; color: #6c757d; font-size: 13px; flex-wrap: wrap; }
        .page-header { display: flex; justify-content: space-between; align-items: center; gap: 16px; flex-wrap: wrap; margin-bottom: 20px; }
        .page-title { font-size: 26px; font-weight: bold; margin: 0; }
        .page-subtitle { color: #6c757d; margin: 4px 0 0 0; }
        .header-actions { display: flex; gap: 8px; }
        .card { background: white; border: 1px solid #ddd; border-radius: 8px; padding: 20px; margin-bottom: 20px; }
        .card-title { font-weight: bold; margin: 0 0 4px 0; }
        .card-subtitle { color: #6c757d; font-size: 13px; margin: 0 0 12px 0; }
        .grid-2 { display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px; }
        .grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; }
        .grid-4 { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }
        .grid-5 { display: grid; grid-template-columns: repeat(5, 1fr); gap: 16px; }
        .stat-card { background: white; border: 1px solid #ddd; border-radius: 8px; padding: 16px; }
        .stat-value { font-size: 24px; font-weight: bold; margin: 0; }
        .stat-label { color: #6c757d; font-size: 12px; margin: 4px 0 0 0; }
        .btn { display: inline-block; border: none; border-radius: 4px; padding: 9px 16px; font-size: 14px; cursor: pointer; background: #007bff; color: white; }
        .btn:hover { background: #0056b3; }
        .btn-outline { background: white; color: #212529; border: 1px solid #ced4da; }
        .btn-outline:hover { background: #e9ecef; }
        .btn-danger { background: #dc3545; }
        .btn-danger:hover { background: #b02a37; }
        .btn-sm { padding: 6px 10px; font-size: 13px; }
        .btn-block { width: 100%; }
        .badge { display: inline-block; border-radius: 10px; padding: 3px 10px; font-size: 12px; }
        .badge-present { background: #d4edda; color: #155724; }
        .badge-absent { background: #f8d7da; color: #721c24; }
        .badge-late { background: #fff3cd; color: #856404; }
        .badge-excused { background: #d1ecf1; color: #0c5460; }
        .badge-upcoming { background: #e2e3e5; color: #383d41; }
        .badge-excellent { background: #d4edda; color: #155724; }
        .badge-good { background: #e2e3e5; color: #383d41; }
        .badge-average { background: white; color: #495057; border: 1px solid #ced4da; }
        .badge-poor { background: #f8d7da; color: #721c24; }
        .badge-secondary { background: #e9ecef; color: #495057; }
        .badge-outline { background: white; border: 1px solid #ced4da; color: #495057; }
        .row-item { display: flex; justify-content: space-between; align-items: center; padding: 12px; border: 1px solid #e9ecef; border-radius: 6px; margin-bottom: 8px; background: white; }
        .row-left { display: flex; align-items: center; gap: 12px; }
        .row-right { display: flex; align-items: center; gap: 12px; }
        .row-avatar { width: 36px; height: 36px; border-radius: 50%; background: #e9ecef; color: #495057; display: flex; align-items: center; justify-content: center; font-size: 13px; font-weight: bold; }
        .muted { color: #6c757d; font-size: 13px; margin: 2px 0 0 0; }
        .strong { font-weight: bold; margin: 0; }
        .search-input { width: 100%; max-width: 360px; padding: 9px 12px; border: 1px solid #ced4da; border-radius: 4px; }
        .form-group { margin: 12px 0; }
        .form-group label { display: block; margin-bottom: 5px; font-weight: bold; font-size: 14px; }
        .form-group input, .form-group select { width: 100%; padding: 9px 12px; border: 1px solid #ced4da; border-radius: 4px; background: white; }
        .tabs { display: flex; gap: 4px; background: #e9ecef; border-radius: 6px; padding: 4px; margin-bottom: 20px; }
        .tab-btn { flex: 1; border: none; background: none; padding: 8px; border-radius: 4px; cursor: pointer; font-size: 14px; }
        .tab-btn.active { background: white; font-weight: bold; }
        .tab-panel { display: none; }
        .tab-panel.active { display: block; }
        .progress { background: #e9ecef; border-radius: 4px; height: 8px; overflow: hidden; }
        .progress-fill { background: #007bff; height: 100%; }
        .bar-row { display: flex; align-items: center; gap: 10px; margin-bottom: 8px; }
        .bar-label { width: 90px; font-size: 13px; color: #495057; }
        .bar-track { flex: 1; background: #e9ecef; border-radius: 4px; height: 14px; overflow: hidden; }
        .bar-fill { height: 100%; background: #007bff; }
        .bar-value { width: 48px; font-size: 13px; text-align: right; }
        .legend-dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 8px; }
        .rank-circle { width: 30px; height: 30px; border-radius: 50%; background: #007bff; color: white; display: flex; align-items: center; justify-content: center; font-weight: bold; font-size: 13px; }
        .status-buttons { display: flex; gap: 4px; }
        .status-btn { border: 1px solid #ced4da; background: white; border-radius: 4px; padding: 6px 9px; cursor: pointer; }
        .status-btn.active { background: #007bff; color: white; border-color: #007bff; }
        .status-btn.active-absent { background: #dc3545; color: white; border-color: #dc3545; }
        .info-box { display: flex; gap: 18px; flex-wrap: wrap; background: #f8f9fa; border-radius: 6px; padding: 14px; font-size: 14px; }
        .schedule-grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: 12px; }
        .day-title { color: #6c757d; font-size: 13px; font-weight: bold; margin: 0 0 8px 0; }
        .schedule-card { border: 1px solid #e9ecef; border-radius: 6px; padding: 10px; margin-bottom: 8px; background: white; }
        .login-wrap { max-width: 420px; margin: 48px auto; padding: 0 16px; }
        .login-logo { text-align: center; margin-bottom: 20px; }
        .role-toggle { display: flex; gap: 8px; margin-bottom: 16px; }
        .role-toggle .btn { flex: 1; }
        .toggle-row { display: flex; justify-content: space-between; align-items: center; padding: 10px 0; border-bottom: 1px solid #e9ecef; font-size: 14px; }
    </style>
"##;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

fn shell(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title} - AttendanceTracker</title>
{style}</head>
<body>
{body}
</body>
</html>"##,
        title = title,
        style = BASE_STYLE,
        body = body,
    )
}

// Wraps a screen body in the navigation chrome. A logged-out session gets
// the bare body with no chrome; the path itself stays reachable.
pub fn render_page(session: &Session, path: &str, title: &str, body: &str) -> String {
    if !session.authenticated {
        return shell(title, &format!(r##"<main class="content">{body}</main>"##, body = body));
    }

    let user = session.user();
    let mut nav = String::new();
    for entry in navigation::entries_for(session.role) {
        let class = if navigation::is_active(entry, path) {
            "nav-link active"
        } else {
            "nav-link"
        };
        nav.push_str(&format!(
            r##"<a class="{class}" href="{path}">{label}</a>"##,
            class = class,
            path = entry.path,
            label = entry.label,
        ));
    }

    let chrome = format!(
        r##"<header class="topbar">
    <div class="topbar-inner">
        <a class="logo" href="/">📅 AttendanceTracker</a>
        <nav class="nav">{nav}</nav>
        <div class="user-menu">
            <form method="post" action="/session/role">
                <button class="btn btn-outline btn-sm" type="submit">Switch to {other_role}</button>
            </form>
            <span class="bell">🔔<span class="bell-badge">3</span></span>
            <div class="dropdown">
                <button class="avatar" type="button">{initials}</button>
                <div class="dropdown-content">
                    <p class="dropdown-name">{name}</p>
                    <p class="dropdown-email">{email}</p>
                    <span class="badge badge-secondary">{role}</span>
                    <hr>
                    <form method="post" action="/session/logout">
                        <button class="dropdown-item" type="submit">Log out</button>
                    </form>
                </div>
            </div>
        </div>
    </div>
</header>
<main class="content">{body}</main>
<footer class="footer">
    <div class="footer-inner">
        <p>Built with AttendanceTracker. © 2024 University Management System.</p>
        <div>
            <span class="badge badge-outline">v1.0.0</span>
            <span>Current Role: <strong>{role}</strong></span>
        </div>
    </div>
</footer>"##,
        nav = nav,
        other_role = session.role.toggled().label(),
        initials = initials(&user.name),
        name = user.name,
        email = user.email,
        role = user.role,
        body = body,
    );

    shell(title, &chrome)
}

const LOGIN_SCRIPT: &str = r##"
    <script>
        function selectRole(role) {
            document.getElementById('role-input').value = role;
            const studentBtn = document.getElementById('role-student');
            const teacherBtn = document.getElementById('role-teacher');
            studentBtn.className = role === 'student' ? 'btn' : 'btn btn-outline';
            teacherBtn.className = role === 'teacher' ? 'btn' : 'btn btn-outline';
            document.getElementById('portal-label').textContent = role;
            document.getElementById('submit-btn').textContent =
                'Sign In as ' + (role === 'student' ? 'Student' : 'Teacher');
            document.getElementById('email').placeholder =
                role === 'student' ? 'student@university.edu' : 'professor@university.edu';
        }
    </script>
"##;

pub fn login_page() -> String {
    let body = format!(
        r##"<div class="login-wrap">
    <div class="login-logo">
        <div style="font-size: 34px;">📅</div>
        <h1 style="margin: 8px 0 4px 0;">AttendanceTracker</h1>
        <p class="muted">Sign in to your account</p>
    </div>
    <div class="role-toggle">
        <button id="role-student" class="btn" type="button" onclick="selectRole('student')">👤 Student</button>
        <button id="role-teacher" class="btn btn-outline" type="button" onclick="selectRole('teacher')">🎓 Teacher</button>
    </div>
    <div class="card">
        <p class="card-title">Sign In <span id="portal-label" class="badge badge-secondary">student</span></p>
        <p class="card-subtitle">Enter your credentials to access the portal</p>
        <form method="post" action="/login">
            <input type="hidden" id="role-input" name="role" value="student">
            <div class="form-group">
                <label for="email">Email</label>
                <input id="email" name="email" type="email" placeholder="student@university.edu" required>
            </div>
            <div class="form-group">
                <label for="password">Password</label>
                <input id="password" name="password" type="password" placeholder="Enter your password" required>
            </div>
            <button id="submit-btn" class="btn btn-block" type="submit">Sign In as Student</button>
        </form>
    </div>
    <div class="card" style="background: #f8f9fa;">
        <p class="card-title" style="font-size: 14px;">Demo Credentials</p>
        <p class="strong" style="font-size: 14px;">Student:</p>
        <p class="muted">alex.johnson@university.edu / student123</p>
        <p class="strong" style="font-size: 14px;">Teacher:</p>
        <p class="muted">sarah.wilson@university.edu / teacher123</p>
    </div>
    <div style="text-align: center;" class="muted">
        <p>© 2024 University Management System</p>
        <p>Need help? Contact IT Support</p>
    </div>
</div>
{script}"##,
        script = LOGIN_SCRIPT,
    );

    shell("Sign In", &body)
}

pub fn dashboard_page(session: &Session) -> String {
    let info = mock::student_info();
    let schedule = mock::today_schedule();
    let subjects = mock::subject_attendance();
    let attended = schedule
        .iter()
        .filter(|class| class.status == crate::models::ScheduleStatus::Present)
        .count();

    let mut schedule_rows = String::new();
    for class in &schedule {
        let display = class.status.display();
        schedule_rows.push_str(&format!(
            r##"<div class="row-item">
    <div class="row-left">
        <span>{icon}</span>
        <div>
            <p class="strong">{name}</p>
            <p class="muted">{time} • {room}</p>
        </div>
    </div>
    <span class="badge {badge}">{label}</span>
</div>
"##,
            icon = display.icon,
            name = class.name,
            time = class.time,
            room = class.room,
            badge = display.badge_class,
            label = display.label,
        ));
    }

    let mut subject_rows = String::new();
    for subject in &subjects {
        subject_rows.push_str(&format!(
            r##"<div style="margin-bottom: 14px;">
    <div style="display: flex; justify-content: space-between; font-size: 14px; margin-bottom: 4px;">
        <span class="strong">{subject}</span>
        <span class="muted">{present}/{total} ({attendance}%)</span>
    </div>
    <div class="progress"><div class="progress-fill" style="width: {attendance}%;"></div></div>
</div>
"##,
            subject = subject.subject,
            present = subject.present,
            total = subject.total,
            attendance = subject.attendance,
        ));
    }

    let body = format!(
        r##"<div class="page-header">
    <div>
        <h1 class="page-title">Welcome back, {name}</h1>
        <p class="page-subtitle">Student ID: {student_id} • {semester}</p>
    </div>
    <div>
        <span style="font-size: 24px; font-weight: bold; color: #007bff;">📈 {overall}%</span>
        <span class="muted">Overall Attendance</span>
    </div>
</div>
<div class="grid-4">
    <div class="stat-card">
        <p class="stat-label">Today's Classes</p>
        <p class="stat-value">{today_count}</p>
        <p class="stat-label">{attended} attended</p>
    </div>
    <div class="stat-card">
        <p class="stat-label">This Week</p>
        <p class="stat-value">18/20</p>
        <p class="stat-label">Classes attended</p>
    </div>
    <div class="stat-card">
        <p class="stat-label">Total Subjects</p>
        <p class="stat-value">{subject_count}</p>
        <p class="stat-label">Enrolled courses</p>
    </div>
    <div class="stat-card">
        <p class="stat-label">Attendance Goal</p>
        <p class="stat-value">85%</p>
        <p class="stat-label">Minimum required</p>
    </div>
</div>
<div class="grid-2" style="margin-top: 20px;">
    <div class="card">
        <p class="card-title">📅 Today's Schedule</p>
        <p class="card-subtitle">Your classes for today</p>
        {schedule_rows}
        <a class="btn btn-block" style="text-align: center;" href="/classes">View Full Schedule</a>
    </div>
    <div class="card">
        <p class="card-title">📈 Attendance Overview</p>
        <p class="card-subtitle">Your attendance percentage by subject</p>
        {subject_rows}
        <a class="btn btn-outline btn-block" style="text-align: center;" href="/analytics">View Detailed Reports</a>
    </div>
</div>
<div class="card">
    <p class="card-title">Quick Actions</p>
    <p class="card-subtitle">Common tasks and shortcuts</p>
    <div class="grid-3">
        <a class="btn" style="text-align: center;" href="/attendance">✓ Mark Attendance</a>
        <a class="btn btn-outline" style="text-align: center;" href="/classes">📚 View All Subjects</a>
        <a class="btn btn-outline" style="text-align: center;" href="/analytics">📈 Analytics</a>
    </div>
</div>"##,
        name = info.name,
        student_id = info.student_id,
        semester = info.semester,
        overall = info.overall_attendance,
        today_count = schedule.len(),
        attended = attended,
        subject_count = subjects.len(),
        schedule_rows = schedule_rows,
        subject_rows = subject_rows,
    );

    render_page(session, "/", "Dashboard", &body)
}

const CLASSES_SCRIPT: &str = r##"
    <script>
        function showTab(name) {
            document.querySelectorAll('.tab-panel').forEach(panel => panel.classList.remove('active'));
            document.querySelectorAll('.tab-btn').forEach(btn => btn.classList.remove('active'));
            document.getElementById('panel-' + name).classList.add('active');
            document.getElementById('tab-' + name).classList.add('active');
        }

        async function searchStudents() {
            const query = document.getElementById('student-search').value;
            const response = await fetch('/classes/data?search=' + encodeURIComponent(query));
            const data = await response.json();
            const list = document.getElementById('class-students');
            document.getElementById('student-count').textContent = data.students.length + ' students found';
            list.innerHTML = data.students.map(student => `
                <div class="row-item">
                    <div class="row-left">
                        <div class="row-avatar">${student.name.split(' ').map(n => n[0]).join('')}</div>
                        <div>
                            <p class="strong">${student.name}</p>
                            <p class="muted">${student.student_id} • ${student.email}</p>
                        </div>
                    </div>
                    <div class="row-right">
                        <div style="text-align: right;">
                            <p class="strong">${student.attendance}%</p>
                            <p class="muted">${student.present_classes}/${student.total_classes} classes</p>
                        </div>
                        <span class="badge ${student.tier_class}">${student.tier_label}</span>
                    </div>
                </div>`).join('');
        }

        function selectClass(id, label) {
            document.querySelectorAll('.class-pick').forEach(btn => {
                btn.className = btn.id === 'pick-' + id ? 'btn btn-sm class-pick' : 'btn btn-outline btn-sm class-pick';
            });
            document.getElementById('selected-class-label').textContent = label;
        }
    </script>
"##;

pub fn classes_page(session: &Session) -> String {
    let classes = mock::classes();
    let students = mock::directory();

    let mut class_cards = String::new();
    for class in &classes {
        class_cards.push_str(&format!(
            r##"<div class="card">
    <div style="display: flex; justify-content: space-between;">
        <div>
            <p class="card-title">{name}</p>
            <p class="card-subtitle">{code} • {semester}</p>
        </div>
        <span class="badge badge-outline">{attendance}% Avg</span>
    </div>
    <div class="grid-2" style="font-size: 14px; margin-bottom: 12px;">
        <span>🕒 {schedule}</span>
        <span>📍 {room}</span>
        <span>👥 {enrolled}/{capacity} students</span>
        <span>📈 {attendance}% attendance</span>
    </div>
    <div style="display: flex; gap: 8px;">
        <a class="btn btn-sm" style="flex: 1; text-align: center;" href="/attendance">✓ Mark Attendance</a>
        <button class="btn btn-outline btn-sm" type="button">📚 View Details</button>
    </div>
</div>
"##,
            name = class.name,
            code = class.code,
            semester = class.semester,
            schedule = class.schedule,
            room = class.room,
            enrolled = class.enrolled,
            capacity = class.capacity,
            attendance = class.attendance,
        ));
    }

    let total_enrolled: u32 = classes.iter().map(|class| class.enrolled).sum();
    let avg_attendance = (classes.iter().map(|class| class.attendance).sum::<u32>() as f64
        / classes.len() as f64)
        .round() as u32;

    let mut class_picks = String::new();
    for (index, class) in classes.iter().enumerate() {
        let class_btn = if index == 0 {
            "btn btn-sm class-pick"
        } else {
            "btn btn-outline btn-sm class-pick"
        };
        class_picks.push_str(&format!(
            r##"<button id="pick-{id}" class="{class_btn}" type="button" onclick="selectClass('{id}', '{name} ({code})')">{code}</button>
"##,
            id = class.id,
            class_btn = class_btn,
            name = class.name,
            code = class.code,
        ));
    }

    let mut student_rows = String::new();
    for student in &students {
        let tier = crate::models::attendance_tier(student.attendance);
        student_rows.push_str(&format!(
            r##"<div class="row-item">
    <div class="row-left">
        <div class="row-avatar">{initials}</div>
        <div>
            <p class="strong">{name}</p>
            <p class="muted">{student_id} • {email}</p>
        </div>
    </div>
    <div class="row-right">
        <div style="text-align: right;">
            <p class="strong">{attendance}%</p>
            <p class="muted">{present}/{total} classes</p>
        </div>
        <span class="badge {tier_class}">{tier_label}</span>
    </div>
</div>
"##,
            initials = initials(&student.name),
            name = student.name,
            student_id = student.student_id,
            email = student.email,
            attendance = student.attendance,
            present = student.present_classes,
            total = student.total_classes,
            tier_class = tier.badge_class,
            tier_label = tier.label,
        ));
    }

    let mut schedule_cols = String::new();
    for day in mock::WEEKDAYS {
        let mut day_cards = String::new();
        for class in mock::classes_on_day(&classes, day) {
            let time = class
                .schedule
                .split(' ')
                .rev()
                .take(2)
                .collect::<Vec<&str>>()
                .into_iter()
                .rev()
                .collect::<Vec<&str>>()
                .join(" ");
            day_cards.push_str(&format!(
                r##"<div class="schedule-card">
    <p class="strong" style="font-size: 14px;">{name}</p>
    <p class="muted">{room}</p>
    <p class="muted">{time}</p>
</div>
"##,
                name = class.name,
                room = class.room,
                time = time,
            ));
        }
        schedule_cols.push_str(&format!(
            r##"<div>
    <p class="day-title">{day}</p>
    {day_cards}
</div>
"##,
            day = day,
            day_cards = day_cards,
        ));
    }

    let first_class_label = format!("{} ({})", classes[0].name, classes[0].code);
    let body = format!(
        r##"<div class="page-header">
    <div>
        <h1 class="page-title">Class Management</h1>
        <p class="page-subtitle">Manage your classes, students, and attendance records</p>
    </div>
    <button class="btn" type="button">＋ Add New Class</button>
</div>
<div class="tabs">
    <button id="tab-overview" class="tab-btn active" type="button" onclick="showTab('overview')">Overview</button>
    <button id="tab-students" class="tab-btn" type="button" onclick="showTab('students')">Students</button>
    <button id="tab-schedule" class="tab-btn" type="button" onclick="showTab('schedule')">Schedule</button>
</div>
<div id="panel-overview" class="tab-panel active">
    <div class="grid-2">
        {class_cards}
    </div>
    <div class="grid-4" style="margin-top: 4px;">
        <div class="stat-card">
            <p class="stat-label">Total Classes</p>
            <p class="stat-value">{class_count}</p>
            <p class="stat-label">Active courses</p>
        </div>
        <div class="stat-card">
            <p class="stat-label">Total Students</p>
            <p class="stat-value">{total_enrolled}</p>
            <p class="stat-label">Enrolled students</p>
        </div>
        <div class="stat-card">
            <p class="stat-label">Avg Attendance</p>
            <p class="stat-value">{avg_attendance}%</p>
            <p class="stat-label">Across all classes</p>
        </div>
        <div class="stat-card">
            <p class="stat-label">This Week</p>
            <p class="stat-value">12</p>
            <p class="stat-label">Classes scheduled</p>
        </div>
    </div>
</div>
<div id="panel-students" class="tab-panel">
    <div style="display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 16px;">
        <input id="student-search" class="search-input" placeholder="Search students by name or ID..." oninput="searchStudents()">
        <div style="display: flex; gap: 6px;">{class_picks}</div>
    </div>
    <div class="card">
        <p class="card-title"><span id="selected-class-label">{first_class_label}</span></p>
        <p class="card-subtitle">Select a class to view its enrolled students</p>
    </div>
    <div class="card">
        <p class="card-title">Student List</p>
        <p id="student-count" class="card-subtitle">{student_count} students found</p>
        <div id="class-students">
            {student_rows}
        </div>
    </div>
</div>
<div id="panel-schedule" class="tab-panel">
    <div class="card">
        <p class="card-title">Weekly Schedule</p>
        <p class="card-subtitle">Your class schedule for this week</p>
        <div class="schedule-grid">
            {schedule_cols}
        </div>
    </div>
</div>
{script}"##,
        class_cards = class_cards,
        class_count = classes.len(),
        total_enrolled = total_enrolled,
        avg_attendance = avg_attendance,
        class_picks = class_picks,
        first_class_label = first_class_label,
        student_count = students.len(),
        student_rows = student_rows,
        schedule_cols = schedule_cols,
        script = CLASSES_SCRIPT,
    );

    render_page(session, "/classes", "Classes", &body)
}

const ATTENDANCE_SCRIPT: &str = r##"
    <script>
        let classList = [];

        async function loadClasses() {
            const response = await fetch('/attendance/classes');
            classList = await response.json();
            const select = document.getElementById('class-select');
            select.innerHTML = classList.map(item =>
                `<option value="${item.id}">${item.name} (${item.code})</option>`).join('');
            updateClassInfo();
        }

        function updateClassInfo() {
            const id = document.getElementById('class-select').value;
            const item = classList.find(c => c.id === id);
            if (!item) return;
            document.getElementById('class-info').innerHTML =
                `<span>🕒 ${item.schedule}</span><span>📍 ${item.room}</span>` +
                `<span>👥 <span id="roster-size"></span> students</span>`;
            loadRoster();
        }

        function renderRoster(data) {
            const sizeSpan = document.getElementById('roster-size');
            if (sizeSpan) sizeSpan.textContent = data.counts.total;
            document.getElementById('stat-present').textContent = data.counts.present;
            document.getElementById('stat-absent').textContent = data.counts.absent;
            document.getElementById('stat-late').textContent = data.counts.late;
            document.getElementById('stat-excused').textContent = data.counts.excused;
            document.getElementById('stat-total').textContent = data.counts.total;

            document.getElementById('roster').innerHTML = data.students.map(student => `
                <div class="row-item">
                    <div class="row-left">
                        <div class="row-avatar">${student.name.split(' ').map(n => n[0]).join('')}</div>
                        <div>
                            <p class="strong">${student.name}</p>
                            <p class="muted">${student.student_id}</p>
                        </div>
                    </div>
                    <div class="row-right">
                        <span class="badge ${student.badge_class}">${student.status_label}</span>
                        <div class="status-buttons">
                            <button class="status-btn ${student.status === 'present' ? 'active' : ''}"
                                onclick="setStatus('${student.id}', 'present')" title="Present">✓</button>
                            <button class="status-btn ${student.status === 'late' ? 'active' : ''}"
                                onclick="setStatus('${student.id}', 'late')" title="Late">🕒</button>
                            <button class="status-btn ${student.status === 'excused' ? 'active' : ''}"
                                onclick="setStatus('${student.id}', 'excused')" title="Excused">⚠</button>
                            <button class="status-btn ${student.status === 'absent' ? 'active-absent' : ''}"
                                onclick="setStatus('${student.id}', 'absent')" title="Absent">✕</button>
                        </div>
                    </div>
                </div>`).join('');
        }

        async function loadRoster() {
            const query = document.getElementById('roster-search').value;
            const response = await fetch('/attendance/roster?search=' + encodeURIComponent(query));
            renderRoster(await response.json());
        }

        async function setStatus(studentId, status) {
            const response = await fetch('/attendance/status', {
                method: 'POST',
                headers: {'Content-Type': 'application/json'},
                body: JSON.stringify({student_id: studentId, status: status})
            });
            await response.json();
            loadRoster();
        }

        async function markAll(status) {
            const response = await fetch('/attendance/mark-all', {
                method: 'POST',
                headers: {'Content-Type': 'application/json'},
                body: JSON.stringify({status: status})
            });
            await response.json();
            loadRoster();
        }

        loadClasses();
        loadRoster();
    </script>
"##;

pub fn attendance_page(session: &Session, today: &str) -> String {
    let body = format!(
        r##"<div class="page-header">
    <div>
        <h1 class="page-title">Mark Attendance</h1>
        <p class="page-subtitle">Record student attendance for your classes</p>
    </div>
    <div class="header-actions">
        <button class="btn btn-outline" type="button">⬜ QR Code</button>
        <button class="btn" type="button">💾 Save Attendance</button>
    </div>
</div>
<div class="card">
    <p class="card-title">Class Information</p>
    <p class="card-subtitle">Select the class and date for attendance marking</p>
    <div class="grid-2">
        <div class="form-group">
            <label for="class-select">Select Class</label>
            <select id="class-select" onchange="updateClassInfo()"></select>
        </div>
        <div class="form-group">
            <label for="date-select">Date</label>
            <input id="date-select" type="date" value="{today}">
        </div>
    </div>
    <div id="class-info" class="info-box"></div>
</div>
<div class="grid-5">
    <div class="stat-card">
        <p class="stat-value" id="stat-present">0</p>
        <p class="stat-label">✓ Present</p>
    </div>
    <div class="stat-card">
        <p class="stat-value" id="stat-absent">0</p>
        <p class="stat-label">✕ Absent</p>
    </div>
    <div class="stat-card">
        <p class="stat-value" id="stat-late">0</p>
        <p class="stat-label">🕒 Late</p>
    </div>
    <div class="stat-card">
        <p class="stat-value" id="stat-excused">0</p>
        <p class="stat-label">⚠ Excused</p>
    </div>
    <div class="stat-card">
        <p class="stat-value" id="stat-total">0</p>
        <p class="stat-label">👥 Total</p>
    </div>
</div>
<div class="card" style="margin-top: 20px;">
    <div style="display: flex; justify-content: space-between; gap: 12px; flex-wrap: wrap;">
        <input id="roster-search" class="search-input" placeholder="Search students..." oninput="loadRoster()">
        <div style="display: flex; gap: 8px;">
            <button class="btn btn-outline btn-sm" type="button" onclick="markAll('present')">✓ Mark All Present</button>
            <button class="btn btn-outline btn-sm" type="button" onclick="markAll('absent')">✕ Mark All Absent</button>
        </div>
    </div>
</div>
<div class="card">
    <p class="card-title">Student Attendance</p>
    <p class="card-subtitle">Mark attendance for each student</p>
    <div id="roster"></div>
</div>
{script}"##,
        today = today,
        script = ATTENDANCE_SCRIPT,
    );

    render_page(session, "/attendance", "Mark Attendance", &body)
}

const ANALYTICS_SCRIPT: &str = r##"
    <script>
        function showTab(name) {
            document.querySelectorAll('.tab-panel').forEach(panel => panel.classList.remove('active'));
            document.querySelectorAll('.tab-btn').forEach(btn => btn.classList.remove('active'));
            document.getElementById('panel-' + name).classList.add('active');
            document.getElementById('tab-' + name).classList.add('active');
        }

        async function loadAnalytics() {
            const response = await fetch('/analytics/data');
            const data = await response.json();

            document.getElementById('overall-students').textContent = data.overall.total_students;
            document.getElementById('overall-average').textContent = data.overall.average_attendance + '%';
            document.getElementById('overall-improvement').textContent =
                '+' + data.overall.improvement + '% from last month';
            document.getElementById('overall-held').textContent = data.overall.total_classes;
            document.getElementById('overall-rate').textContent =
                data.overall.attended_classes + '/' + data.overall.total_classes;

            document.getElementById('trend-bars').innerHTML = data.trends.map(point => `
                <div class="bar-row">
                    <span class="bar-label">${point.week}</span>
                    <div class="bar-track"><div class="bar-fill" style="width: ${point.attendance}%;"></div></div>
                    <span class="bar-value">${point.attendance}%</span>
                </div>`).join('') +
                `<p class="muted">Dashed target: ${data.trends[0].target}% weekly attendance</p>`;

            const monthlyMax = Math.max(...data.monthly.map(m => m.present + m.absent + m.late));
            document.getElementById('monthly-bars').innerHTML = data.monthly.map(month => `
                <div class="bar-row">
                    <span class="bar-label">${month.month}</span>
                    <div class="bar-track">
                        <div style="display: flex; height: 100%; width: ${(month.present + month.absent + month.late) / monthlyMax * 100}%;">
                            <div style="background: #28a745; width: ${month.present / (month.present + month.absent + month.late) * 100}%;"></div>
                            <div style="background: #ffc107; width: ${month.late / (month.present + month.absent + month.late) * 100}%;"></div>
                            <div style="background: #dc3545; width: ${month.absent / (month.present + month.absent + month.late) * 100}%;"></div>
                        </div>
                    </div>
                    <span class="bar-value">${month.present}</span>
                </div>`).join('') +
                `<p class="muted">🟩 present 🟨 late 🟥 absent</p>`;

            document.getElementById('comparison-bars').innerHTML = data.comparison.map(row => `
                <div class="bar-row">
                    <span class="bar-label">${row.class}</span>
                    <div class="bar-track"><div class="bar-fill" style="width: ${row.attendance}%;"></div></div>
                    <span class="bar-value">${row.attendance}%</span>
                </div>
                <p class="muted" style="margin: 0 0 8px 100px;">${row.students} students</p>`).join('');

            document.getElementById('distribution-list').innerHTML = data.distribution.map(slice => `
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 10px;">
                    <span><span class="legend-dot" style="background: ${slice.color};"></span>${slice.name}</span>
                    <span style="text-align: right;">
                        <strong>${slice.value} students</strong>
                        <span class="muted" style="display: block;">${slice.share.toFixed(1)}%</span>
                    </span>
                </div>`).join('');

            document.getElementById('performer-list').innerHTML = data.top_performers.map((student, index) => `
                <div class="row-item">
                    <div class="row-left">
                        <div class="rank-circle">${index + 1}</div>
                        <div>
                            <p class="strong">${student.name}</p>
                            <p class="muted">${student.class}</p>
                        </div>
                    </div>
                    <div class="row-right">
                        <div style="text-align: right;">
                            <p class="strong">${student.attendance}%</p>
                            <p class="muted">${student.streak} day streak</p>
                        </div>
                        <span class="badge badge-excellent">Excellent</span>
                    </div>
                </div>`).join('');
        }

        loadAnalytics();
    </script>
"##;

pub fn analytics_page(session: &Session) -> String {
    let mut class_options = String::new();
    class_options.push_str(r##"<option value="all">All Classes</option>"##);
    for class in mock::classes() {
        class_options.push_str(&format!(
            r##"<option value="{id}">{code} - {name}</option>"##,
            id = class.id,
            code = class.code,
            name = class.name,
        ));
    }

    let body = format!(
        r##"<div class="page-header">
    <div>
        <h1 class="page-title">Analytics &amp; Reports</h1>
        <p class="page-subtitle">Comprehensive attendance insights and performance metrics</p>
    </div>
    <div class="header-actions">
        <button class="btn btn-outline" type="button">Filters</button>
        <a class="btn" href="/analytics/export">⬇ Export Report</a>
    </div>
</div>
<div class="card">
    <div class="grid-2">
        <div class="form-group">
            <label for="period-select">Time Period</label>
            <select id="period-select">
                <option value="week">This Week</option>
                <option value="month">This Month</option>
                <option value="semester" selected>This Semester</option>
                <option value="year">This Year</option>
            </select>
        </div>
        <div class="form-group">
            <label for="class-filter">Class</label>
            <select id="class-filter">{class_options}</select>
        </div>
    </div>
</div>
<div class="grid-4">
    <div class="stat-card">
        <p class="stat-label">Total Students</p>
        <p class="stat-value" id="overall-students">...</p>
        <p class="stat-label">Across all classes</p>
    </div>
    <div class="stat-card">
        <p class="stat-label">Average Attendance</p>
        <p class="stat-value" id="overall-average">...</p>
        <p class="stat-label" id="overall-improvement" style="color: #28a745;">...</p>
    </div>
    <div class="stat-card">
        <p class="stat-label">Classes Held</p>
        <p class="stat-value" id="overall-held">...</p>
        <p class="stat-label">This semester</p>
    </div>
    <div class="stat-card">
        <p class="stat-label">Attendance Rate</p>
        <p class="stat-value" id="overall-rate">...</p>
        <p class="stat-label">Classes attended</p>
    </div>
</div>
<div class="tabs" style="margin-top: 20px;">
    <button id="tab-trends" class="tab-btn active" type="button" onclick="showTab('trends')">Trends</button>
    <button id="tab-comparison" class="tab-btn" type="button" onclick="showTab('comparison')">Comparison</button>
    <button id="tab-distribution" class="tab-btn" type="button" onclick="showTab('distribution')">Distribution</button>
    <button id="tab-performance" class="tab-btn" type="button" onclick="showTab('performance')">Performance</button>
</div>
<div id="panel-trends" class="tab-panel active">
    <div class="grid-2">
        <div class="card">
            <p class="card-title">📈 Attendance Trends</p>
            <p class="card-subtitle">Weekly attendance percentage over time</p>
            <div id="trend-bars"></div>
        </div>
        <div class="card">
            <p class="card-title">📊 Monthly Overview</p>
            <p class="card-subtitle">Present, absent, and late statistics by month</p>
            <div id="monthly-bars"></div>
        </div>
    </div>
</div>
<div id="panel-comparison" class="tab-panel">
    <div class="card">
        <p class="card-title">📊 Class-wise Comparison</p>
        <p class="card-subtitle">Attendance rates across different classes</p>
        <div id="comparison-bars"></div>
    </div>
</div>
<div id="panel-distribution" class="tab-panel">
    <div class="card">
        <p class="card-title">Distribution Summary</p>
        <p class="card-subtitle">Student distribution by attendance ranges</p>
        <div id="distribution-list"></div>
    </div>
</div>
<div id="panel-performance" class="tab-panel">
    <div class="card">
        <p class="card-title">📈 Top Performers</p>
        <p class="card-subtitle">Students with highest attendance rates</p>
        <div id="performer-list"></div>
    </div>
</div>
<div class="card">
    <p class="card-title">Generate Reports</p>
    <p class="card-subtitle">Export detailed reports for further analysis</p>
    <div class="grid-3">
        <a class="btn btn-outline" style="text-align: center;" href="/analytics/export">📄 Attendance Summary</a>
        <button class="btn btn-outline" type="button">📊 Performance Report</button>
        <button class="btn btn-outline" type="button">👥 Student Analytics</button>
    </div>
</div>
{script}"##,
        class_options = class_options,
        script = ANALYTICS_SCRIPT,
    );

    render_page(session, "/analytics", "Analytics", &body)
}

const STUDENTS_SCRIPT: &str = r##"
    <script>
        async function loadStudents() {
            const query = document.getElementById('directory-search').value;
            const response = await fetch('/students/data?search=' + encodeURIComponent(query));
            const data = await response.json();
            document.getElementById('directory-count').textContent = data.students.length + ' students found';
            document.getElementById('directory').innerHTML = data.students.map(student => `
                <div class="row-item">
                    <div class="row-left">
                        <div class="row-avatar">${student.name.split(' ').map(n => n[0]).join('')}</div>
                        <div>
                            <p class="strong">${student.name}</p>
                            <p class="muted">${student.student_id} • ${student.email}</p>
                        </div>
                    </div>
                    <div class="row-right">
                        <div style="text-align: right;">
                            <p class="strong">${student.attendance}%</p>
                            <p class="muted">${student.present_classes}/${student.total_classes} classes</p>
                        </div>
                        <span class="badge ${student.tier_class}">${student.tier_label}</span>
                    </div>
                </div>`).join('');
        }

        loadStudents();
    </script>
"##;

pub fn students_page(session: &Session) -> String {
    let body = format!(
        r##"<div class="page-header">
    <div>
        <h1 class="page-title">Students</h1>
        <p class="page-subtitle">Browse enrolled students and their attendance records</p>
    </div>
</div>
<div class="card">
    <input id="directory-search" class="search-input" placeholder="Search students by name or ID..." oninput="loadStudents()">
</div>
<div class="card">
    <p class="card-title">Student Directory</p>
    <p id="directory-count" class="card-subtitle"></p>
    <div id="directory"></div>
</div>
{script}"##,
        script = STUDENTS_SCRIPT,
    );

    render_page(session, "/students", "Students", &body)
}

pub fn settings_page(session: &Session) -> String {
    let user = session.user();
    let body = format!(
        r##"<div class="page-header">
    <div>
        <h1 class="page-title">Settings</h1>
        <p class="page-subtitle">Manage your account and preferences</p>
    </div>
</div>
<div class="card">
    <p class="card-title">Profile</p>
    <p class="card-subtitle">Your account details</p>
    <div class="row-item">
        <div class="row-left">
            <div class="row-avatar">{initials}</div>
            <div>
                <p class="strong">{name}</p>
                <p class="muted">{email}</p>
            </div>
        </div>
        <span class="badge badge-secondary">{role}</span>
    </div>
</div>
<div class="card">
    <p class="card-title">Notifications</p>
    <p class="card-subtitle">Choose what you want to be notified about</p>
    <div class="toggle-row"><span>Email notifications</span><input type="checkbox" checked></div>
    <div class="toggle-row"><span>Attendance reminders</span><input type="checkbox" checked></div>
    <div class="toggle-row"><span>Weekly summary reports</span><input type="checkbox"></div>
    <div class="toggle-row"><span>Low attendance alerts</span><input type="checkbox" checked></div>
</div>
<div class="card">
    <p class="card-title">Preferences</p>
    <div class="form-group">
        <label for="semester-pref">Default Semester</label>
        <select id="semester-pref">
            <option selected>Fall 2024</option>
            <option>Spring 2025</option>
        </select>
    </div>
    <button class="btn" type="button">Save Changes</button>
</div>"##,
        initials = initials(&user.name),
        name = user.name,
        email = user.email,
        role = user.role,
    );

    render_page(session, "/settings", "Settings", &body)
}

pub fn my_attendance_page(session: &Session) -> String {
    let info = mock::student_info();
    let subjects = mock::subject_attendance();

    let mut subject_rows = String::new();
    for subject in &subjects {
        let tier = crate::models::attendance_tier(subject.attendance);
        subject_rows.push_str(&format!(
            r##"<div style="margin-bottom: 16px;">
    <div style="display: flex; justify-content: space-between; font-size: 14px; margin-bottom: 4px;">
        <span class="strong">{subject}</span>
        <span>
            <span class="muted">{present}/{total} sessions</span>
            <span class="badge {tier_class}">{attendance}%</span>
        </span>
    </div>
    <div class="progress"><div class="progress-fill" style="width: {attendance}%;"></div></div>
</div>
"##,
            subject = subject.subject,
            present = subject.present,
            total = subject.total,
            attendance = subject.attendance,
            tier_class = tier.badge_class,
        ));
    }

    let body = format!(
        r##"<div class="page-header">
    <div>
        <h1 class="page-title">My Attendance</h1>
        <p class="page-subtitle">Student ID: {student_id} • {semester}</p>
    </div>
    <div>
        <span style="font-size: 24px; font-weight: bold; color: #007bff;">{overall}%</span>
        <span class="muted">Overall Attendance</span>
    </div>
</div>
<div class="card">
    <p class="card-title">Attendance by Subject</p>
    <p class="card-subtitle">Sessions attended this semester • 85% minimum required</p>
    {subject_rows}
</div>
<div class="card">
    <p class="card-title">Keep it up</p>
    <p class="card-subtitle">Attendance above the 85% goal keeps you eligible for exams</p>
    <a class="btn btn-outline" href="/analytics">View Detailed Reports</a>
</div>"##,
        student_id = info.student_id,
        semester = info.semester,
        overall = info.overall_attendance,
        subject_rows = subject_rows,
    );

    render_page(session, "/my-attendance", "My Attendance", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn chrome_renders_role_scoped_navigation() {
        let teacher = Session::new(Role::Teacher);
        let page = render_page(&teacher, "/classes", "Classes", "<p>body</p>");
        assert!(page.contains(">Students<"));
        assert!(page.contains("Switch to Student"));
        assert!(page.contains(r#"class="nav-link active" href="/classes""#));

        let student = Session::new(Role::Student);
        let page = render_page(&student, "/", "Dashboard", "<p>body</p>");
        assert!(page.contains(">My Classes<"));
        assert!(page.contains("/my-attendance"));
        assert!(!page.contains(">Students<"));
    }

    #[test]
    fn logged_out_shell_has_no_chrome() {
        let mut session = Session::default();
        session.log_out();
        let page = render_page(&session, "/", "Dashboard", "<p>still reachable</p>");
        assert!(page.contains("still reachable"));
        assert!(!page.contains("Log out"));
        assert!(!page.contains(r#"class="nav-link"#));
    }

    #[test]
    fn active_nav_entry_is_an_exact_match_only() {
        let session = Session::new(Role::Teacher);
        let page = render_page(&session, "/attendance", "Mark Attendance", "");
        assert!(page.contains(r#"class="nav-link active" href="/attendance""#));
        assert!(page.contains(r#"class="nav-link" href="/""#));
    }

    #[test]
    fn dashboard_lists_every_subject() {
        let session = Session::new(Role::Student);
        let page = dashboard_page(&session);
        for subject in mock::subject_attendance() {
            assert!(page.contains(&subject.subject));
        }
        assert!(page.contains("Welcome back, Alex Johnson"));
    }

    #[test]
    fn attendance_page_embeds_the_selected_date() {
        let session = Session::new(Role::Teacher);
        let page = attendance_page(&session, "2024-10-07");
        assert!(page.contains(r#"value="2024-10-07""#));
        assert!(page.contains("Mark All Present"));
        assert!(page.contains("Mark All Absent"));
    }

    #[test]
    fn initials_take_the_first_letter_of_each_word() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("Dr. Sarah Wilson"), "DSW");
        assert_eq!(initials(""), "");
    }
}
