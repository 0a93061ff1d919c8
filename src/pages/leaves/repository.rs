use crate::api::{
    ApiClient, ApiError, LeaveAction, LeaveBalance, LeaveListFilter, LeaveRequest,
    LeaveRequestPayload, LeaveType, PageRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub fn new_with_client(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn my_leaves(&self, employee_id: &str) -> Result<Vec<LeaveRequest>, ApiError> {
        let page = self
            .client
            .list_leaves(
                &LeaveListFilter::for_employee(employee_id),
                PageRequest::default(),
            )
            .await?;
        Ok(page.results)
    }

    pub async fn my_balances(&self, employee_id: &str) -> Result<Vec<LeaveBalance>, ApiError> {
        let page = self.client.list_leave_balances(Some(employee_id)).await?;
        Ok(page.results)
    }

    pub async fn leave_types(&self) -> Result<Vec<LeaveType>, ApiError> {
        let page = self.client.list_leave_types().await?;
        Ok(page.results)
    }

    pub async fn submit(&self, payload: LeaveRequestPayload) -> Result<LeaveRequest, ApiError> {
        self.client.create_leave(&payload).await
    }

    pub async fn update(
        &self,
        id: &str,
        payload: LeaveRequestPayload,
    ) -> Result<LeaveRequest, ApiError> {
        self.client.update_leave(id, &payload).await
    }

    pub async fn apply(&self, id: &str, action: LeaveAction) -> Result<LeaveRequest, ApiError> {
        self.client.apply_leave_action(id, action).await
    }
}

impl Default for LeaveRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::LeaveStatus;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> LeaveRepository {
        LeaveRepository::new_with_client(ApiClient::new_with_base_url(server.base_url()))
    }

    #[tokio::test]
    async fn my_leaves_filter_by_employee() {
        let server = MockServer::start_async().await;
        let list = server.mock(|when, then| {
            when.method(GET)
                .path("/api/hrm/leaves/")
                .query_param("employee", "emp-1");
            then.status(200).header("content-type", "application/json").json_body(json!({
                "count": 1,
                "results": [{
                    "id": "lr-1",
                    "employee": "emp-1",
                    "leave_type": "lt-1",
                    "start_date": "2025-06-02",
                    "end_date": "2025-06-04",
                    "days_requested": 3.0,
                    "status": "pending",
                    "can_edit": true,
                    "can_cancel": true
                }]
            }));
        });

        let leaves = repo(&server).my_leaves("emp-1").await.unwrap();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].status, LeaveStatus::Pending);
        assert!(leaves[0].can_cancel);
        list.assert_async().await;
    }

    #[tokio::test]
    async fn submit_posts_the_payload() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/hrm/leaves/");
            then.status(201).header("content-type", "application/json").json_body(json!({
                "id": "lr-2",
                "employee": "emp-1",
                "leave_type": "lt-1",
                "start_date": "2025-07-01",
                "end_date": "2025-07-03",
                "days_requested": 3.0,
                "status": "pending"
            }));
        });

        let payload = LeaveRequestPayload {
            employee: Some("emp-1".into()),
            leave_type: "lt-1".into(),
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
            days_requested: Some(3.0),
            reason: None,
        };
        let created = repo(&server).submit(payload).await.unwrap();
        assert_eq!(created.id, "lr-2");
    }
}
