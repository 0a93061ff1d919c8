use super::client::{ApiClient, CallOptions};
use super::pagination::{PageRequest, PaginatedResponse};
use super::routes;
use super::types::{ApiError, LeaveBalance, LeaveBalancePayload};

impl ApiClient {
    pub async fn list_leave_balances(
        &self,
        employee: Option<&str>,
    ) -> Result<PaginatedResponse<LeaveBalance>, ApiError> {
        self.invoke_paginated(
            &routes::leave_balances::LIST,
            CallOptions::new().query_opt("employee", employee),
            PageRequest::default(),
        )
        .await
    }

    pub async fn get_leave_balance(&self, id: &str) -> Result<LeaveBalance, ApiError> {
        self.invoke(
            &routes::leave_balances::DETAIL,
            CallOptions::new().path_param("id", id),
        )
        .await
    }

    pub async fn create_leave_balance(
        &self,
        payload: &LeaveBalancePayload,
    ) -> Result<LeaveBalance, ApiError> {
        self.invoke(&routes::leave_balances::CREATE, CallOptions::new().body(payload)?)
            .await
    }

    /// HR balance adjustment. The new value is sent as-is; range policy
    /// (including negatives) is the server's call.
    pub async fn set_leave_balance(&self, id: &str, balance: f64) -> Result<LeaveBalance, ApiError> {
        let payload = LeaveBalancePayload {
            employee: None,
            leave_type: None,
            balance,
        };
        self.invoke(
            &routes::leave_balances::UPDATE,
            CallOptions::new().path_param("id", id).body(&payload)?,
        )
        .await
    }
}
