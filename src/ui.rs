use crate::models::{person_name, AppData, AuthMode, Status};

/// Renders the page for the current application state: the auth page
/// while logged out, the dashboard once a session exists.
pub fn render(data: &AppData) -> String {
    if data.session.authenticated {
        render_dashboard(data)
    } else {
        render_auth(data)
    }
}

fn render_auth(data: &AppData) -> String {
    let (title, role_field, action, toggle_label) = match data.auth_mode {
        AuthMode::Login => ("Login", String::new(), "/login", "Create Account"),
        AuthMode::Register => (
            "Register",
            format!(
                r#"<input name="role" placeholder="Role" value="{}" />"#,
                escape(&data.auth_form.role)
            ),
            "/register",
            "Back to Login",
        ),
    };

    let notice = if data.auth_notice.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="notice">{}</div>"#, escape(&data.auth_notice))
    };

    AUTH_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{TITLE}}", title)
        .replace("{{ACTION}}", action)
        .replace("{{NAME}}", &escape(&data.auth_form.name))
        .replace("{{ROLE_FIELD}}", &role_field)
        .replace("{{TOGGLE_LABEL}}", toggle_label)
        .replace("{{NOTICE}}", &notice)
}

fn render_dashboard(data: &AppData) -> String {
    DASHBOARD_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{PERSON_NAME}}", &escape(&data.person_form.name))
        .replace("{{PERSON_ROLE}}", &escape(&data.person_form.role))
        .replace("{{USER_OPTIONS}}", &user_options(data))
        .replace("{{STATUS_OPTIONS}}", &status_options(data))
        .replace("{{ATTENDANCE_ROWS}}", &attendance_rows(data))
        .replace("{{REPORT_ROWS}}", &report_rows(data))
}

fn user_options(data: &AppData) -> String {
    let mut options = String::from(r#"<option value="">Select User</option>"#);
    for person in &data.users {
        let selected = if data.mark_form.user_id == Some(person.id) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{}"{selected}>{} ({})</option>"#,
            person.id,
            escape(&person.name),
            escape(&person.role)
        ));
    }
    options
}

fn status_options(data: &AppData) -> String {
    let mut options = String::new();
    for status in Status::ALL {
        let selected = if data.mark_form.status == status {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{name}"{selected}>{name}</option>"#,
            name = status.as_str()
        ));
    }
    options
}

fn attendance_rows(data: &AppData) -> String {
    let mut rows = String::new();
    for entry in &data.attendance {
        let name = person_name(&data.users, entry.user_id).unwrap_or("(unknown)");
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(name),
            escape(&entry.date),
            entry.status.as_str()
        ));
    }
    rows
}

fn report_rows(data: &AppData) -> String {
    let mut rows = String::new();
    for row in &data.report {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&row.name),
            escape(&row.role),
            row.present,
            row.absent,
            row.late
        ));
    }
    rows
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STYLE: &str = r#"<style>
    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(150deg, #eef2f7, #dde7f0);
      color: #23313f;
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 40px 16px;
    }

    .container {
      width: min(720px, 100%);
      background: white;
      border-radius: 14px;
      box-shadow: 0 18px 40px rgba(35, 49, 63, 0.14);
      padding: 28px 32px;
    }

    h2 {
      margin: 20px 0 10px;
      font-size: 1.3rem;
    }

    input, select {
      padding: 8px 10px;
      margin: 4px 8px 4px 0;
      border: 1px solid #b9c6d2;
      border-radius: 8px;
      font-size: 0.95rem;
    }

    button {
      padding: 8px 16px;
      border: none;
      border-radius: 8px;
      background: #3c6e9f;
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    button.secondary {
      background: #8195a8;
    }

    form {
      display: inline-block;
    }

    .logout {
      float: right;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      margin: 8px 0 18px;
    }

    th, td {
      text-align: left;
      padding: 6px 10px;
      border-bottom: 1px solid #e2e9ef;
    }

    .notice {
      margin-top: 12px;
      color: #c63b2b;
    }
  </style>"#;

const AUTH_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance</title>
  {{STYLE}}
</head>
<body>
  <main class="container">
    <h2>{{TITLE}}</h2>
    <form method="post" action="{{ACTION}}">
      <input name="name" placeholder="Name" value="{{NAME}}" />
      {{ROLE_FIELD}}
      <input name="password" type="password" placeholder="Password" />
      <button type="submit">{{TITLE}}</button>
    </form>
    <form method="post" action="/mode">
      <button class="secondary" type="submit">{{TOGGLE_LABEL}}</button>
    </form>
    {{NOTICE}}
  </main>
</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Attendance</title>
  {{STYLE}}
</head>
<body>
  <main class="container">
    <form class="logout" method="post" action="/logout">
      <button class="secondary" type="submit">Logout</button>
    </form>

    <h2>Add User</h2>
    <form method="post" action="/people">
      <input name="name" placeholder="Name" value="{{PERSON_NAME}}" />
      <input name="role" placeholder="Role" value="{{PERSON_ROLE}}" />
      <button type="submit">Add</button>
    </form>

    <h2>Mark Attendance</h2>
    <form method="post" action="/attendance">
      <select name="user_id">{{USER_OPTIONS}}</select>
      <select name="status">{{STATUS_OPTIONS}}</select>
      <button type="submit">Mark</button>
    </form>

    <h2>Attendance Records</h2>
    <table>
      <thead>
        <tr><th>Name</th><th>Date</th><th>Status</th></tr>
      </thead>
      <tbody>{{ATTENDANCE_ROWS}}</tbody>
    </table>

    <h2>Attendance Summary Report</h2>
    <table>
      <thead>
        <tr><th>Name</th><th>Role</th><th>Present</th><th>Absent</th><th>Late</th></tr>
      </thead>
      <tbody>{{REPORT_ROWS}}</tbody>
    </table>
  </main>
</body>
</html>
"#;
