use crate::errors::ApiError;
use crate::models::{
    AttendanceEntry, ErrorBody, LoginRequest, NewAttendanceRequest, NewPersonRequest, Person,
    RegisterRequest, ReportRow, Status,
};
use reqwest::{Client, Response};

/// Thin client for the attendance backend. The session is an opaque
/// server-side cookie carried by the shared cookie store, never
/// inspected locally.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn register(&self, name: &str, role: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/register"))
            .json(&RegisterRequest {
                name,
                role,
                password,
            })
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn login(&self, name: &str, password: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest { name, password })
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/logout"))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    pub async fn users(&self) -> Result<Vec<Person>, ApiError> {
        let response = self.http.get(self.url("/users")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn create_person(&self, name: &str, role: &str) -> Result<Person, ApiError> {
        let response = self
            .http
            .post(self.url("/users"))
            .json(&NewPersonRequest { name, role })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn attendance(&self) -> Result<Vec<AttendanceEntry>, ApiError> {
        let response = self.http.get(self.url("/attendance")).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn create_attendance(
        &self,
        user_id: i64,
        date: &str,
        status: Status,
    ) -> Result<AttendanceEntry, ApiError> {
        let response = self
            .http
            .post(self.url("/attendance"))
            .json(&NewAttendanceRequest {
                user_id,
                date,
                status,
            })
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn report(&self) -> Result<Vec<ReportRow>, ApiError> {
        let response = self.http.get(self.url("/attendance/report")).send().await?;
        Ok(check(response).await?.json().await?)
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.error);
    Err(ApiError::Rejected { message })
}
