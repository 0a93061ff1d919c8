use crate::api::{
    ApiClient, ApiError, Holiday, HolidayPayload, LeaveType, LeaveTypePayload,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct SettingsRepository {
    client: Rc<ApiClient>,
}

impl SettingsRepository {
    pub fn new() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub fn new_with_client(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn leave_types(&self) -> Result<Vec<LeaveType>, ApiError> {
        let page = self.client.list_leave_types().await?;
        Ok(page.results)
    }

    pub async fn create_type(&self, payload: LeaveTypePayload) -> Result<LeaveType, ApiError> {
        self.client.create_leave_type(&payload).await
    }

    pub async fn update_type(
        &self,
        id: &str,
        payload: LeaveTypePayload,
    ) -> Result<LeaveType, ApiError> {
        self.client.update_leave_type(id, &payload).await
    }

    pub async fn delete_type(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_leave_type(id).await
    }

    pub async fn holidays(&self, year: Option<i32>) -> Result<Vec<Holiday>, ApiError> {
        let page = self.client.list_holidays(year).await?;
        Ok(page.results)
    }

    pub async fn create_holiday(&self, payload: HolidayPayload) -> Result<Holiday, ApiError> {
        self.client.create_holiday(&payload).await
    }

    pub async fn update_holiday(
        &self,
        id: &str,
        payload: HolidayPayload,
    ) -> Result<Holiday, ApiError> {
        self.client.update_holiday(id, &payload).await
    }

    pub async fn delete_holiday(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_holiday(id).await
    }
}

impl Default for SettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> SettingsRepository {
        SettingsRepository::new_with_client(ApiClient::new_with_base_url(server.base_url()))
    }

    #[tokio::test]
    async fn type_deletion_tolerates_an_empty_body() {
        let server = MockServer::start_async().await;
        let delete = server.mock(|when, then| {
            when.method(DELETE).path("/api/hrm/leave-types/lt-3/");
            then.status(204);
        });

        repo(&server).delete_type("lt-3").await.unwrap();
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn holiday_create_posts_the_payload() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST)
                .path("/api/hrm/holidays/")
                .json_body(json!({ "name": "Founding Day", "date": "2025-10-03" }));
            then.status(201).header("content-type", "application/json").json_body(json!({
                "id": "h-9",
                "name": "Founding Day",
                "date": "2025-10-03"
            }));
        });

        let payload = HolidayPayload {
            name: "Founding Day".into(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
            description: None,
        };
        let created = repo(&server).create_holiday(payload).await.unwrap();
        assert_eq!(created.id.as_deref(), Some("h-9"));
        create.assert_async().await;
    }

    #[tokio::test]
    async fn conflict_on_type_deletion_keeps_the_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/hrm/leave-types/lt-1/");
            then.status(409)
                .json_body(json!({ "detail": "Leave type is still in use." }));
        });

        let error = repo(&server).delete_type("lt-1").await.unwrap_err();
        assert_eq!(error.status, Some(409));
        assert_eq!(error.error, "Leave type is still in use.");
    }
}
