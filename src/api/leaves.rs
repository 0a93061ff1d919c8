use super::client::{ApiClient, CallOptions, Route};
use super::pagination::{PageRequest, PaginatedResponse};
use super::routes;
use super::types::{ApiError, LeaveRequest, LeaveRequestPayload, LeaveStatus};
use super::workflow::LeaveAction;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveListFilter {
    pub employee: Option<String>,
    pub statuses: Vec<LeaveStatus>,
}

impl LeaveListFilter {
    pub fn for_employee(id: impl Into<String>) -> Self {
        Self {
            employee: Some(id.into()),
            statuses: Vec::new(),
        }
    }

    pub fn with_statuses(statuses: impl IntoIterator<Item = LeaveStatus>) -> Self {
        Self {
            employee: None,
            statuses: statuses.into_iter().collect(),
        }
    }

    fn apply(&self, options: CallOptions) -> CallOptions {
        options
            .query_opt("employee", self.employee.as_deref())
            .query_each("status", self.statuses.iter().map(LeaveStatus::as_str))
    }
}

impl ApiClient {
    pub async fn list_leaves(
        &self,
        filter: &LeaveListFilter,
        paging: PageRequest,
    ) -> Result<PaginatedResponse<LeaveRequest>, ApiError> {
        self.invoke_paginated(&routes::leaves::LIST, filter.apply(CallOptions::new()), paging)
            .await
    }

    pub async fn get_leave(&self, id: &str) -> Result<LeaveRequest, ApiError> {
        self.invoke(&routes::leaves::DETAIL, CallOptions::new().path_param("id", id))
            .await
    }

    pub async fn create_leave(&self, payload: &LeaveRequestPayload) -> Result<LeaveRequest, ApiError> {
        self.invoke(&routes::leaves::CREATE, CallOptions::new().body(payload)?)
            .await
    }

    /// Full resubmission of an editable request. Status is untouched.
    pub async fn update_leave(
        &self,
        id: &str,
        payload: &LeaveRequestPayload,
    ) -> Result<LeaveRequest, ApiError> {
        self.invoke(
            &routes::leaves::UPDATE,
            CallOptions::new().path_param("id", id).body(payload)?,
        )
        .await
    }

    /// Posts a workflow action and returns the updated record.
    pub async fn apply_leave_action(
        &self,
        id: &str,
        action: LeaveAction,
    ) -> Result<LeaveRequest, ApiError> {
        let route: &Route = match action {
            LeaveAction::Approve => &routes::leaves::APPROVE,
            LeaveAction::Reject => &routes::leaves::REJECT,
            LeaveAction::Cancel | LeaveAction::RequestCancellation => &routes::leaves::CANCEL,
            LeaveAction::ApproveCancellation => &routes::leaves::APPROVE_CANCELLATION,
        };
        self.invoke(route, CallOptions::new().path_param("id", id)).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn leave_body(status: &str) -> serde_json::Value {
        json!({
            "id": "lr-7",
            "employee": "emp-1",
            "leave_type": "lt-1",
            "start_date": "2025-06-02",
            "end_date": "2025-06-04",
            "days_requested": 3.0,
            "status": status,
            "can_edit": false,
            "can_cancel": false
        })
    }

    #[tokio::test]
    async fn approve_updates_status_on_subsequent_reads() {
        let server = MockServer::start_async().await;
        let approve = server.mock(|when, then| {
            when.method(POST).path("/api/hrm/leaves/lr-7/approve/");
            then.status(200).header("content-type", "application/json").json_body(leave_body("approved"));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/hrm/leaves/lr-7/");
            then.status(200).header("content-type", "application/json").json_body(leave_body("approved"));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let updated = client
            .apply_leave_action("lr-7", LeaveAction::Approve)
            .await
            .unwrap();
        assert_eq!(updated.status, LeaveStatus::Approved);

        let reread = client.get_leave("lr-7").await.unwrap();
        assert_eq!(reread.status, LeaveStatus::Approved);
        approve.assert_async().await;
    }

    #[tokio::test]
    async fn cancellation_request_posts_to_cancel() {
        let server = MockServer::start_async().await;
        let cancel = server.mock(|when, then| {
            when.method(POST).path("/api/hrm/leaves/lr-7/cancel/");
            then.status(200).header("content-type", "application/json").json_body(leave_body("cancellation_requested"));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let updated = client
            .apply_leave_action("lr-7", LeaveAction::RequestCancellation)
            .await
            .unwrap();
        assert_eq!(updated.status, LeaveStatus::CancellationRequested);
        cancel.assert_async().await;
    }

    #[tokio::test]
    async fn status_filter_repeats_the_query_key() {
        let server = MockServer::start_async().await;
        let list = server.mock(|when, then| {
            when.method(GET)
                .path("/api/hrm/leaves/")
                .query_param("status", "pending")
                .query_param("status", "approved")
                .query_param("offset", "0");
            then.status(200).header("content-type", "application/json").json_body(json!({ "count": 0, "results": [] }));
        });

        let client = ApiClient::new_with_base_url(server.base_url());
        let filter =
            LeaveListFilter::with_statuses([LeaveStatus::Pending, LeaveStatus::Approved]);
        let page = client
            .list_leaves(&filter, PageRequest::default())
            .await
            .unwrap();
        assert!(page.results.is_empty());
        list.assert_async().await;
    }
}
