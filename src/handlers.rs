use crate::actions;
use crate::models::Status;
use crate::state::AppState;
use crate::ui;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AuthSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct PersonSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct MarkSubmission {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub status: String,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(ui::render(&data))
}

pub async fn login(
    State(state): State<AppState>,
    Form(submission): Form<AuthSubmission>,
) -> Redirect {
    actions::login(&state, &submission.name, &submission.password).await;
    Redirect::to("/")
}

pub async fn register(
    State(state): State<AppState>,
    Form(submission): Form<AuthSubmission>,
) -> Redirect {
    actions::register(
        &state,
        &submission.name,
        &submission.role,
        &submission.password,
    )
    .await;
    Redirect::to("/")
}

pub async fn logout(State(state): State<AppState>) -> Redirect {
    actions::logout(&state).await;
    Redirect::to("/")
}

pub async fn toggle_mode(State(state): State<AppState>) -> Redirect {
    actions::toggle_auth_mode(&state).await;
    Redirect::to("/")
}

pub async fn add_person(
    State(state): State<AppState>,
    Form(submission): Form<PersonSubmission>,
) -> Redirect {
    if !authenticated(&state).await {
        return Redirect::to("/");
    }
    actions::add_person(&state, &submission.name, &submission.role).await;
    Redirect::to("/")
}

pub async fn mark_attendance(
    State(state): State<AppState>,
    Form(submission): Form<MarkSubmission>,
) -> Redirect {
    if !authenticated(&state).await {
        return Redirect::to("/");
    }
    // The empty "Select User" option posts an empty string.
    let user_id = submission.user_id.parse::<i64>().ok();
    let status = Status::parse(&submission.status).unwrap_or_default();
    actions::mark_attendance(&state, user_id, status).await;
    Redirect::to("/")
}

async fn authenticated(state: &AppState) -> bool {
    state.data.lock().await.session.authenticated
}
