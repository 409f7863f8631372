use std::error::Error;
use std::sync::Mutex;

use actix_web::{web, App, HttpResponse, HttpServer};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use attendance_tracker::analytics;
use attendance_tracker::mock;
use attendance_tracker::models::{attendance_tier, AttendanceCounts, AttendanceStatus, Role, Student};
use attendance_tracker::pages;
use attendance_tracker::roster;
use attendance_tracker::session::Session;

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: String,
}

#[derive(Deserialize)]
struct LoginForm {
    #[allow(dead_code)]
    email: String,
    #[allow(dead_code)]
    password: String,
    role: Role,
}

#[derive(Deserialize)]
struct StatusUpdate {
    student_id: String,
    status: AttendanceStatus,
}

#[derive(Deserialize)]
struct BulkUpdate {
    status: AttendanceStatus,
}

#[derive(Serialize)]
struct RosterEntry {
    id: String,
    name: String,
    student_id: String,
    email: String,
    status: AttendanceStatus,
    status_label: &'static str,
    status_icon: &'static str,
    badge_class: &'static str,
}

#[derive(Serialize)]
struct RosterResponse {
    students: Vec<RosterEntry>,
    counts: AttendanceCounts,
}

#[derive(Serialize)]
struct DirectoryEntry {
    id: String,
    name: String,
    student_id: String,
    email: String,
    attendance: u32,
    total_classes: u32,
    present_classes: u32,
    tier_label: &'static str,
    tier_class: &'static str,
}

#[derive(Serialize)]
struct DirectoryResponse {
    students: Vec<DirectoryEntry>,
}

fn roster_entry(student: &Student) -> RosterEntry {
    let display = student.status.display();
    RosterEntry {
        id: student.id.clone(),
        name: student.name.clone(),
        student_id: student.student_id.clone(),
        email: student.email.clone(),
        status: student.status,
        status_label: display.label,
        status_icon: display.icon,
        badge_class: display.badge_class,
    }
}

fn directory_response(search: &str) -> DirectoryResponse {
    let records = mock::directory();
    let students = roster::filter_directory(&records, search)
        .into_iter()
        .map(|record| {
            let tier = attendance_tier(record.attendance);
            DirectoryEntry {
                id: record.id.clone(),
                name: record.name.clone(),
                student_id: record.student_id.clone(),
                email: record.email.clone(),
                attendance: record.attendance,
                total_classes: record.total_classes,
                present_classes: record.present_classes,
                tier_label: tier.label,
                tier_class: tier.badge_class,
            }
        })
        .collect();
    DirectoryResponse { students }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

// Screen handlers

async fn serve_dashboard(session: web::Data<Mutex<Session>>) -> HttpResponse {
    let session = session.lock().unwrap();
    html(pages::dashboard_page(&session))
}

async fn serve_login() -> HttpResponse {
    html(pages::login_page())
}

async fn serve_classes(session: web::Data<Mutex<Session>>) -> HttpResponse {
    let session = session.lock().unwrap();
    html(pages::classes_page(&session))
}

async fn serve_attendance(session: web::Data<Mutex<Session>>) -> HttpResponse {
    let session = session.lock().unwrap();
    let today = Utc::now().date_naive().to_string();
    html(pages::attendance_page(&session, &today))
}

async fn serve_analytics(session: web::Data<Mutex<Session>>) -> HttpResponse {
    let session = session.lock().unwrap();
    html(pages::analytics_page(&session))
}

async fn serve_students(session: web::Data<Mutex<Session>>) -> HttpResponse {
    let session = session.lock().unwrap();
    html(pages::students_page(&session))
}

async fn serve_settings(session: web::Data<Mutex<Session>>) -> HttpResponse {
    let session = session.lock().unwrap();
    html(pages::settings_page(&session))
}

async fn serve_my_attendance(session: web::Data<Mutex<Session>>) -> HttpResponse {
    let session = session.lock().unwrap();
    html(pages::my_attendance_page(&session))
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("AttendanceTracker is running!")
}

// Session handlers. Login never checks credentials: the form is presence-
// validated in the browser and the submission just lands on the dashboard.

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

async fn handle_login(
    form: web::Form<LoginForm>,
    session: web::Data<Mutex<Session>>,
) -> HttpResponse {
    let mut session = session.lock().unwrap();
    session.log_in(form.role);
    redirect_home()
}

async fn handle_logout(session: web::Data<Mutex<Session>>) -> HttpResponse {
    let mut session = session.lock().unwrap();
    session.log_out();
    redirect_home()
}

async fn handle_switch_role(session: web::Data<Mutex<Session>>) -> HttpResponse {
    let mut session = session.lock().unwrap();
    session.switch_role();
    redirect_home()
}

// Attendance-marking endpoints

async fn get_attendance_classes() -> HttpResponse {
    HttpResponse::Ok().json(mock::classes())
}

async fn get_attendance_roster(
    query: web::Query<SearchQuery>,
    state: web::Data<Mutex<Vec<Student>>>,
) -> HttpResponse {
    let state = state.lock().unwrap();
    let students = roster::filter_students(&state, &query.search)
        .into_iter()
        .map(roster_entry)
        .collect();
    let counts = roster::aggregate(&state);
    HttpResponse::Ok().json(RosterResponse { students, counts })
}

async fn update_status(
    payload: web::Json<StatusUpdate>,
    state: web::Data<Mutex<Vec<Student>>>,
) -> HttpResponse {
    let mut state = state.lock().unwrap();
    // An unknown id falls through as a no-op; the client still gets the
    // recomputed counts.
    roster::set_status(&mut state, &payload.student_id, payload.status);
    let students = state.iter().map(roster_entry).collect();
    let counts = roster::aggregate(&state);
    HttpResponse::Ok().json(RosterResponse { students, counts })
}

async fn mark_all_statuses(
    payload: web::Json<BulkUpdate>,
    state: web::Data<Mutex<Vec<Student>>>,
) -> HttpResponse {
    let mut state = state.lock().unwrap();
    roster::mark_all(&mut state, payload.status);
    let students = state.iter().map(roster_entry).collect();
    let counts = roster::aggregate(&state);
    HttpResponse::Ok().json(RosterResponse { students, counts })
}

// Directory endpoints for the class-management and students screens

async fn get_classes_data(query: web::Query<SearchQuery>) -> HttpResponse {
    HttpResponse::Ok().json(directory_response(&query.search))
}

async fn get_students_data(query: web::Query<SearchQuery>) -> HttpResponse {
    HttpResponse::Ok().json(directory_response(&query.search))
}

// Analytics endpoints

async fn get_analytics_data() -> HttpResponse {
    HttpResponse::Ok().json(analytics::analytics_data())
}

async fn export_report() -> HttpResponse {
    match analytics::export_report_csv() {
        Ok(report) => HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"attendance-report.csv\"",
            ))
            .body(report),
        Err(err) => {
            HttpResponse::InternalServerError().body(format!("Failed to build report: {err}"))
        }
    }
}

async fn start_server(
    session: web::Data<Mutex<Session>>,
    roster_state: web::Data<Mutex<Vec<Student>>>,
) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .app_data(session.clone())
            .app_data(roster_state.clone())
            .route("/", web::get().to(serve_dashboard))
            .route("/login", web::get().to(serve_login))
            .route("/login", web::post().to(handle_login))
            .route("/classes", web::get().to(serve_classes))
            .route("/classes/data", web::get().to(get_classes_data))
            .route("/attendance", web::get().to(serve_attendance))
            .route("/attendance/classes", web::get().to(get_attendance_classes))
            .route("/attendance/roster", web::get().to(get_attendance_roster))
            .route("/attendance/status", web::post().to(update_status))
            .route("/attendance/mark-all", web::post().to(mark_all_statuses))
            .route("/analytics", web::get().to(serve_analytics))
            .route("/analytics/data", web::get().to(get_analytics_data))
            .route("/analytics/export", web::get().to(export_report))
            .route("/students", web::get().to(serve_students))
            .route("/students/data", web::get().to(get_students_data))
            .route("/settings", web::get().to(serve_settings))
            .route("/my-attendance", web::get().to(serve_my_attendance))
            .route("/session/role", web::post().to(handle_switch_role))
            .route("/session/logout", web::post().to(handle_logout))
            .route("/health", web::get().to(health_check))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    println!("🎓 Starting AttendanceTracker...");

    let initial_roster = mock::roster();
    println!(
        "Loaded {} students across {} classes",
        initial_roster.len(),
        mock::classes().len()
    );

    let session = web::Data::new(Mutex::new(Session::default()));
    let roster_state = web::Data::new(Mutex::new(initial_roster));

    println!("🌐 AttendanceTracker running on http://127.0.0.1:8080");
    println!("   Visit http://127.0.0.1:8080 in your browser!");
    println!("   Screens: / /classes /attendance /analytics /students /settings /my-attendance");

    start_server(session, roster_state).await?;

    Ok(())
}
