use crate::api::{
    ApiClient, ApiError, Debouncer, Employee, EmployeeListFilter, EmployeePayload,
    PaginatedResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
    debouncer: Debouncer,
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self::new_with_client(leptos::use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    }

    pub fn new_with_client(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
            debouncer: Debouncer::new(),
        }
    }

    /// Debounced directory search; `None` means a newer keystroke took
    /// over before the request started.
    pub async fn search(
        &self,
        term: String,
    ) -> Result<Option<PaginatedResponse<Employee>>, ApiError> {
        self.client
            .search_employees(&self.debouncer, &EmployeeListFilter::search(term))
            .await
    }

    pub async fn page(
        &self,
        term: String,
        page: u64,
    ) -> Result<PaginatedResponse<Employee>, ApiError> {
        self.client
            .employee_page(&EmployeeListFilter::search(term), page)
            .await
    }

    pub async fn create(&self, payload: EmployeePayload) -> Result<Employee, ApiError> {
        self.client.create_employee(&payload).await
    }

    pub async fn update(&self, id: &str, payload: EmployeePayload) -> Result<Employee, ApiError> {
        self.client.update_employee(id, &payload).await
    }

    pub async fn export_csv(&self) -> Result<Vec<u8>, ApiError> {
        self.client.export_employees().await
    }
}

impl Default for EmployeesRepository {
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
    async fn repeated_searches_reach_the_server_once() {
        let server = MockServer::start_async().await;
        let list = server.mock(|when, then| {
            when.method(GET).path("/api/hrm/employees/");
            then.status(200).header("content-type", "application/json").json_body(json!({
                "count": 1,
                "results": [{ "id": "emp-1", "full_name": "Ada Lovelace" }]
            }));
        });

        let repo =
            EmployeesRepository::new_with_client(ApiClient::new_with_base_url(server.base_url()));
        let (stale, fresh) = futures::join!(repo.search("a".into()), repo.search("ada".into()));
        assert!(stale.unwrap().is_none());
        assert_eq!(fresh.unwrap().unwrap().results[0].full_name, "Ada Lovelace");
        assert_eq!(list.hits_async().await, 1);
    }

    #[tokio::test]
    async fn page_requests_use_the_page_offset() {
        let server = MockServer::start_async().await;
        let second_page = server.mock(|when, then| {
            when.method(GET)
                .path("/api/hrm/employees/")
                .query_param("limit", "14")
                .query_param("offset", "14");
            then.status(200).header("content-type", "application/json").json_body(json!({ "count": 15, "results": [
                { "id": "emp-15", "full_name": "Grace Hopper" }
            ]}));
        });

        let repo =
            EmployeesRepository::new_with_client(ApiClient::new_with_base_url(server.base_url()));
        let page = repo.page(String::new(), 1).await.unwrap();
        assert_eq!(page.count, 15);
        second_page.assert_async().await;
    }
}
