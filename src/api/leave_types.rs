use super::client::{ApiClient, CallOptions};
use super::pagination::{PageRequest, PaginatedResponse};
use super::routes;
use super::types::{ApiError, LeaveType, LeaveTypePayload};

impl ApiClient {
    pub async fn list_leave_types(&self) -> Result<PaginatedResponse<LeaveType>, ApiError> {
        self.invoke_paginated(
            &routes::leave_types::LIST,
            CallOptions::new(),
            PageRequest::default(),
        )
        .await
    }

    pub async fn get_leave_type(&self, id: &str) -> Result<LeaveType, ApiError> {
        self.invoke(&routes::leave_types::DETAIL, CallOptions::new().path_param("id", id))
            .await
    }

    pub async fn create_leave_type(&self, payload: &LeaveTypePayload) -> Result<LeaveType, ApiError> {
        self.invoke(&routes::leave_types::CREATE, CallOptions::new().body(payload)?)
            .await
    }

    pub async fn update_leave_type(
        &self,
        id: &str,
        payload: &LeaveTypePayload,
    ) -> Result<LeaveType, ApiError> {
        self.invoke(
            &routes::leave_types::UPDATE,
            CallOptions::new().path_param("id", id).body(payload)?,
        )
        .await
    }

    pub async fn delete_leave_type(&self, id: &str) -> Result<(), ApiError> {
        self.invoke::<serde_json::Value>(
            &routes::leave_types::DELETE,
            CallOptions::new().path_param("id", id),
        )
        .await
        .map(|_| ())
    }
}
