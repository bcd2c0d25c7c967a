//! In-process mock of the attendance backend: the eight REST endpoints
//! with cookie sessions and server-side report aggregation, backed by
//! plain vectors. Tests reach into `data` to seed fixtures and to
//! assert which requests actually went out.
#![allow(dead_code)]

use attendance_front::models::{Person, ReportRow, Status};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct Account {
    pub name: String,
    pub role: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoredEntry {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub status: Status,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct BackendData {
    next_person_id: i64,
    next_entry_id: i64,
    next_session_id: u64,
    pub accounts: Vec<Account>,
    pub people: Vec<Person>,
    pub entries: Vec<StoredEntry>,
    pub sessions: HashSet<String>,
}

impl BackendData {
    pub fn add_person(&mut self, name: &str, role: &str) -> Person {
        self.next_person_id += 1;
        let person = Person {
            id: self.next_person_id,
            name: name.to_owned(),
            role: role.to_owned(),
        };
        self.people.push(person.clone());
        person
    }

    pub fn add_account(&mut self, name: &str, role: &str, password: &str) -> Person {
        self.accounts.push(Account {
            name: name.to_owned(),
            role: role.to_owned(),
            password: password.to_owned(),
        });
        self.add_person(name, role)
    }
}

pub struct BackendHandle {
    pub base_url: String,
    pub data: Arc<Mutex<BackendData>>,
    server: JoinHandle<()>,
}

impl BackendHandle {
    /// Stops the mock so that every further request fails at the
    /// transport level.
    pub fn shut_down(&self) {
        self.server.abort();
    }
}

impl Drop for BackendHandle {
    fn drop(&mut self) {
        self.server.abort();
    }
}

pub async fn spawn_backend() -> BackendHandle {
    let data = Arc::new(Mutex::new(BackendData::default()));
    let app = Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/attendance", get(list_attendance).post(create_attendance))
        .route("/api/attendance/report", get(report))
        .with_state(data.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend");
    });

    BackendHandle {
        base_url: format!("http://{addr}/api"),
        data,
        server,
    }
}

type Shared = Arc<Mutex<BackendData>>;

#[derive(Debug, Deserialize)]
struct RegisterBody {
    name: String,
    #[serde(default)]
    role: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    name: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct NewPersonBody {
    name: String,
    role: String,
}

#[derive(Debug, Deserialize)]
struct NewEntryBody {
    user_id: i64,
    date: String,
    status: Status,
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn session_id(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix("sid="))
        .map(str::to_owned)
}

async fn authorized(headers: &HeaderMap, data: &Shared) -> bool {
    match session_id(headers) {
        Some(sid) => data.lock().await.sessions.contains(&sid),
        None => false,
    }
}

async fn register(State(data): State<Shared>, Json(body): Json<RegisterBody>) -> Response {
    let mut data = data.lock().await;
    if body.name.is_empty() || body.password.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Name and password required");
    }
    if data.accounts.iter().any(|account| account.name == body.name) {
        return error(StatusCode::BAD_REQUEST, "User already exists");
    }
    data.add_account(&body.name, &body.role, &body.password);
    Json(json!({})).into_response()
}

async fn login(State(data): State<Shared>, Json(body): Json<LoginBody>) -> Response {
    let mut data = data.lock().await;
    let matched = data
        .accounts
        .iter()
        .any(|account| account.name == body.name && account.password == body.password);
    if !matched {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    data.next_session_id += 1;
    let sid = format!("s{}", data.next_session_id);
    data.sessions.insert(sid.clone());
    (
        [(header::SET_COOKIE, format!("sid={sid}; Path=/"))],
        Json(json!({})),
    )
        .into_response()
}

async fn logout(headers: HeaderMap, State(data): State<Shared>) -> Response {
    if let Some(sid) = session_id(&headers) {
        data.lock().await.sessions.remove(&sid);
    }
    Json(json!({})).into_response()
}

async fn list_users(headers: HeaderMap, State(data): State<Shared>) -> Response {
    if !authorized(&headers, &data).await {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    Json(data.lock().await.people.clone()).into_response()
}

async fn create_user(
    headers: HeaderMap,
    State(data): State<Shared>,
    Json(body): Json<NewPersonBody>,
) -> Response {
    if !authorized(&headers, &data).await {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    let mut data = data.lock().await;
    if body.name.is_empty() || body.role.is_empty() {
        return error(StatusCode::BAD_REQUEST, "Name and role required");
    }
    let person = data.add_person(&body.name, &body.role);
    Json(person).into_response()
}

async fn list_attendance(headers: HeaderMap, State(data): State<Shared>) -> Response {
    if !authorized(&headers, &data).await {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    Json(data.lock().await.entries.clone()).into_response()
}

async fn create_attendance(
    headers: HeaderMap,
    State(data): State<Shared>,
    Json(body): Json<NewEntryBody>,
) -> Response {
    if !authorized(&headers, &data).await {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    let mut data = data.lock().await;
    let Some(name) = data
        .people
        .iter()
        .find(|person| person.id == body.user_id)
        .map(|person| person.name.clone())
    else {
        return error(StatusCode::BAD_REQUEST, "Unknown user");
    };
    data.next_entry_id += 1;
    let entry = StoredEntry {
        id: data.next_entry_id,
        user_id: body.user_id,
        date: body.date,
        status: body.status,
        name,
    };
    data.entries.push(entry.clone());
    Json(entry).into_response()
}

async fn report(headers: HeaderMap, State(data): State<Shared>) -> Response {
    if !authorized(&headers, &data).await {
        return error(StatusCode::UNAUTHORIZED, "Not authenticated");
    }
    let data = data.lock().await;
    let rows: Vec<ReportRow> = data
        .people
        .iter()
        .map(|person| {
            let mut row = ReportRow {
                name: person.name.clone(),
                role: person.role.clone(),
                present: 0,
                absent: 0,
                late: 0,
            };
            for entry in data.entries.iter().filter(|e| e.user_id == person.id) {
                match entry.status {
                    Status::Present => row.present += 1,
                    Status::Absent => row.absent += 1,
                    Status::Late => row.late += 1,
                }
            }
            row
        })
        .collect();
    Json(rows).into_response()
}
