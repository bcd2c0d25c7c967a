//! One handler per user-visible operation. Every state change goes
//! through here; the axum layer only parses forms and redirects.

use crate::models::{AuthForm, AuthMode, MarkForm, PersonForm, Status};
use crate::state::AppState;
use chrono::Local;
use tracing::error;

/// Attempts a login. On success the session flips to authenticated and
/// all three mirrors are refreshed, in that order. On failure the
/// submitted fields stay in the form and the notice carries the
/// backend's text (or the generic fallback).
pub async fn login(state: &AppState, name: &str, password: &str) {
    {
        let mut data = state.data.lock().await;
        data.auth_form.name = name.to_owned();
        data.auth_form.password = password.to_owned();
        data.auth_notice.clear();
    }

    match state.api.login(name, password).await {
        Ok(()) => {
            {
                let mut data = state.data.lock().await;
                data.session.authenticated = true;
            }
            refresh_all(state).await;
        }
        Err(err) => {
            let mut data = state.data.lock().await;
            data.auth_notice = err.user_message("Login failed");
        }
    }
}

/// Registers a new account. Success switches the auth page back to
/// login mode with an informational notice; it never auto-logins.
pub async fn register(state: &AppState, name: &str, role: &str, password: &str) {
    {
        let mut data = state.data.lock().await;
        data.auth_form = AuthForm {
            name: name.to_owned(),
            role: role.to_owned(),
            password: password.to_owned(),
        };
        data.auth_notice.clear();
    }

    match state.api.register(name, role, password).await {
        Ok(()) => {
            let mut data = state.data.lock().await;
            data.auth_mode = AuthMode::Login;
            data.auth_notice = "Registration successful! Please log in.".to_owned();
        }
        Err(err) => {
            let mut data = state.data.lock().await;
            data.auth_notice = err.user_message("Registration failed");
        }
    }
}

/// Tells the backend to drop the session, then clears local auth state
/// unconditionally. The reply's content is irrelevant; we only wait for
/// the round trip to finish.
pub async fn logout(state: &AppState) {
    if let Err(err) = state.api.logout().await {
        error!("logout request failed: {err}");
    }

    let mut data = state.data.lock().await;
    data.session.authenticated = false;
    data.auth_form = AuthForm::default();
    data.auth_notice.clear();
    data.auth_mode = AuthMode::Login;
}

/// Flips between the login and register forms, dropping any notice.
pub async fn toggle_auth_mode(state: &AppState) {
    let mut data = state.data.lock().await;
    data.auth_mode = match data.auth_mode {
        AuthMode::Login => AuthMode::Register,
        AuthMode::Register => AuthMode::Login,
    };
    data.auth_notice.clear();
}

/// Adds a person to the directory. An empty name or role blocks the
/// action locally: nothing is sent and the typed values stay in the
/// form. On success the returned person is appended, the form cleared,
/// and the report re-fetched (the reportable population changed).
pub async fn add_person(state: &AppState, name: &str, role: &str) {
    if name.trim().is_empty() || role.trim().is_empty() {
        let mut data = state.data.lock().await;
        data.person_form = PersonForm {
            name: name.to_owned(),
            role: role.to_owned(),
        };
        return;
    }

    match state.api.create_person(name, role).await {
        Ok(person) => {
            {
                let mut data = state.data.lock().await;
                data.users.push(person);
                data.person_form = PersonForm::default();
            }
            refresh_report(state).await;
        }
        Err(err) => {
            error!("add person failed: {err}");
            let mut data = state.data.lock().await;
            data.person_form = PersonForm {
                name: name.to_owned(),
                role: role.to_owned(),
            };
        }
    }
}

/// Records an attendance mark for the selected person, dated with the
/// client-local calendar day. No selection means no request. Marking
/// the same person twice on one day is allowed and yields two entries.
pub async fn mark_attendance(state: &AppState, user_id: Option<i64>, status: Status) {
    let Some(user_id) = user_id else {
        return;
    };

    let date = today_string();
    match state.api.create_attendance(user_id, &date, status).await {
        Ok(entry) => {
            {
                let mut data = state.data.lock().await;
                data.attendance.push(entry);
                data.mark_form = MarkForm::default();
            }
            refresh_report(state).await;
        }
        Err(err) => {
            error!("mark attendance failed: {err}");
            let mut data = state.data.lock().await;
            data.mark_form = MarkForm {
                user_id: Some(user_id),
                status,
            };
        }
    }
}

/// Full refresh after login: users, then attendance, then report. A
/// failed fetch leaves that mirror at its previous value.
pub async fn refresh_all(state: &AppState) {
    refresh_users(state).await;
    refresh_attendance(state).await;
    refresh_report(state).await;
}

pub async fn refresh_users(state: &AppState) {
    match state.api.users().await {
        Ok(users) => state.data.lock().await.users = users,
        Err(err) => error!("failed to refresh users: {err}"),
    }
}

pub async fn refresh_attendance(state: &AppState) {
    match state.api.attendance().await {
        Ok(entries) => state.data.lock().await.attendance = entries,
        Err(err) => error!("failed to refresh attendance: {err}"),
    }
}

pub async fn refresh_report(state: &AppState) {
    match state.api.report().await {
        Ok(rows) => state.data.lock().await.report = rows,
        Err(err) => error!("failed to refresh report: {err}"),
    }
}

pub fn today_string() -> String {
    Local::now().date_naive().to_string()
}
