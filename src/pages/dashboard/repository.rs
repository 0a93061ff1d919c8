use crate::api::{
    ApiClient, ApiError, Holiday, LeaveAction, LeaveListFilter, LeaveRequest, LeaveStatus,
    PageRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub fn new_with_client(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Requests awaiting an HR decision, across all employees.
    pub async fn review_queue(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let page = self
            .client
            .list_leaves(
                &LeaveListFilter::with_statuses([
                    LeaveStatus::Pending,
                    LeaveStatus::CancellationRequested,
                ]),
                PageRequest::default(),
            )
            .await?;
        Ok(page.results)
    }

    pub async fn approved_leaves(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        let page = self
            .client
            .list_leaves(
                &LeaveListFilter::with_statuses([LeaveStatus::Approved]),
                PageRequest::default(),
            )
            .await?;
        Ok(page.results)
    }

    pub async fn holidays(&self, year: i32) -> Result<Vec<Holiday>, ApiError> {
        let page = self.client.list_holidays(Some(year)).await?;
        Ok(page.results)
    }

    pub async fn decide(&self, id: &str, action: LeaveAction) -> Result<LeaveRequest, ApiError> {
        self.client.apply_leave_action(id, action).await
    }
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn review_queue_asks_for_both_pending_states() {
        let server = MockServer::start_async().await;
        let list = server.mock(|when, then| {
            when.method(GET)
                .path("/api/hrm/leaves/")
                .query_param("status", "pending")
                .query_param("status", "cancellation_requested");
            then.status(200).header("content-type", "application/json").json_body(json!({
                "count": 1,
                "results": [{
                    "id": "lr-9",
                    "employee": "emp-2",
                    "employee_name": "Dana Flores",
                    "leave_type": "lt-1",
                    "start_date": "2025-08-11",
                    "end_date": "2025-08-12",
                    "days_requested": 2.0,
                    "status": "cancellation_requested"
                }]
            }));
        });

        let repo =
            DashboardRepository::new_with_client(ApiClient::new_with_base_url(server.base_url()));
        let queue = repo.review_queue().await.unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].status, LeaveStatus::CancellationRequested);
        list.assert_async().await;
    }

    #[tokio::test]
    async fn holidays_are_scoped_to_a_year() {
        let server = MockServer::start_async().await;
        let list = server.mock(|when, then| {
            when.method(GET)
                .path("/api/hrm/holidays/")
                .query_param("year", "2025");
            then.status(200).header("content-type", "application/json").json_body(json!({
                "count": 1,
                "results": [{ "id": "h-1", "name": "New Year", "date": "2025-01-01" }]
            }));
        });

        let repo =
            DashboardRepository::new_with_client(ApiClient::new_with_base_url(server.base_url()));
        let holidays = repo.holidays(2025).await.unwrap();
        assert_eq!(holidays[0].name, "New Year");
        list.assert_async().await;
    }
}
