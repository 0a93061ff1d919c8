use super::client::{ApiClient, CallOptions};
use super::pagination::{PageRequest, PaginatedResponse};
use super::routes;
use super::types::{ApiError, Holiday, HolidayPayload};

impl ApiClient {
    pub async fn list_holidays(&self, year: Option<i32>) -> Result<PaginatedResponse<Holiday>, ApiError> {
        self.invoke_paginated(
            &routes::holidays::LIST,
            CallOptions::new().query_opt("year", year),
            PageRequest::default(),
        )
        .await
    }

    pub async fn create_holiday(&self, payload: &HolidayPayload) -> Result<Holiday, ApiError> {
        self.invoke(&routes::holidays::CREATE, CallOptions::new().body(payload)?)
            .await
    }

    pub async fn update_holiday(&self, id: &str, payload: &HolidayPayload) -> Result<Holiday, ApiError> {
        self.invoke(
            &routes::holidays::UPDATE,
            CallOptions::new().path_param("id", id).body(payload)?,
        )
        .await
    }

    pub async fn delete_holiday(&self, id: &str) -> Result<(), ApiError> {
        self.invoke::<serde_json::Value>(
            &routes::holidays::DELETE,
            CallOptions::new().path_param("id", id),
        )
        .await
        .map(|_| ())
    }
}
