use serde::{Deserialize, Serialize};

/// A registered person as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Present,
    Absent,
    Late,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Present, Status::Absent, Status::Late];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
            Status::Late => "Late",
        }
    }

    pub fn parse(value: &str) -> Option<Status> {
        match value {
            "Present" => Some(Status::Present),
            "Absent" => Some(Status::Absent),
            "Late" => Some(Status::Late),
            _ => None,
        }
    }
}

/// One recorded attendance mark. The backend enriches its listings with
/// a display name; we drop that field and resolve names against the
/// directory when rendering instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub status: Status,
}

/// Server-computed per-person summary row. Never derived locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub role: String,
    pub present: u64,
    pub absent: u64,
    pub late: u64,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub role: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewPersonRequest<'a> {
    pub name: &'a str,
    pub role: &'a str,
}

#[derive(Debug, Serialize)]
pub struct NewAttendanceRequest<'a> {
    pub user_id: i64,
    pub date: &'a str,
    pub status: Status,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub authenticated: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub name: String,
    pub role: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct PersonForm {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Default)]
pub struct MarkForm {
    pub user_id: Option<i64>,
    pub status: Status,
}

/// The whole client-side application state: session flag, form fields,
/// and the server-data mirrors. Owned by [`crate::state::AppState`] and
/// mutated only through the handlers in [`crate::actions`].
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub session: Session,
    pub auth_mode: AuthMode,
    pub auth_form: AuthForm,
    pub auth_notice: String,
    pub users: Vec<Person>,
    pub attendance: Vec<AttendanceEntry>,
    pub report: Vec<ReportRow>,
    pub person_form: PersonForm,
    pub mark_form: MarkForm,
}

/// Resolves an attendance entry's display name from the directory at
/// render time. Returns `None` when the person is not (or no longer)
/// in the local directory.
pub fn person_name(users: &[Person], user_id: i64) -> Option<&str> {
    users
        .iter()
        .find(|person| person.id == user_id)
        .map(|person| person.name.as_str())
}
