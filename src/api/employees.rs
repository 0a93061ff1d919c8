use super::client::{ApiClient, CallOptions};
use super::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use super::pagination::{PageRequest, PaginatedResponse, DEFAULT_PAGE_SIZE};
use super::routes;
use super::types::{ApiError, CalendarEntry, Employee, EmployeePayload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeListFilter {
    pub search: Option<String>,
    pub department: Option<String>,
}

impl EmployeeListFilter {
    pub fn search(term: impl Into<String>) -> Self {
        let term = term.into();
        Self {
            search: if term.trim().is_empty() { None } else { Some(term) },
            department: None,
        }
    }

    fn apply(&self, options: CallOptions) -> CallOptions {
        options
            .query_opt("search", self.search.as_deref())
            .query_opt("department", self.department.as_deref())
    }
}

impl ApiClient {
    pub async fn list_employees(
        &self,
        filter: &EmployeeListFilter,
        paging: PageRequest,
    ) -> Result<PaginatedResponse<Employee>, ApiError> {
        self.invoke_paginated(&routes::employees::LIST, filter.apply(CallOptions::new()), paging)
            .await
    }

    /// Type-ahead directory search: debounced, first page only.
    pub async fn search_employees(
        &self,
        debouncer: &Debouncer,
        filter: &EmployeeListFilter,
    ) -> Result<Option<PaginatedResponse<Employee>>, ApiError> {
        let options = filter
            .apply(CallOptions::new())
            .query("limit", DEFAULT_PAGE_SIZE)
            .query("offset", 0);
        self.invoke_debounced(debouncer, DEFAULT_DEBOUNCE, &routes::employees::LIST, options)
            .await
    }

    /// One directory page at an explicit page index, for paging controls.
    pub async fn employee_page(
        &self,
        filter: &EmployeeListFilter,
        page: u64,
    ) -> Result<PaginatedResponse<Employee>, ApiError> {
        let options = filter
            .apply(CallOptions::new())
            .query("limit", DEFAULT_PAGE_SIZE)
            .query("offset", page * DEFAULT_PAGE_SIZE);
        self.invoke(&routes::employees::LIST, options).await
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, ApiError> {
        self.invoke(&routes::employees::DETAIL, CallOptions::new().path_param("id", id))
            .await
    }

    pub async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ApiError> {
        self.invoke(&routes::employees::CREATE, CallOptions::new().body(payload)?)
            .await
    }

    pub async fn update_employee(
        &self,
        id: &str,
        payload: &EmployeePayload,
    ) -> Result<Employee, ApiError> {
        self.invoke(
            &routes::employees::UPDATE,
            CallOptions::new().path_param("id", id).body(payload)?,
        )
        .await
    }

    /// The signed-in user's own employee record; loaded once at startup
    /// and shared through context.
    pub async fn current_employee(&self) -> Result<Employee, ApiError> {
        self.invoke(&routes::employees::CURRENT, CallOptions::new()).await
    }

    pub async fn employee_calendar(
        &self,
        id: &str,
    ) -> Result<PaginatedResponse<CalendarEntry>, ApiError> {
        self.invoke(&routes::employees::CALENDAR, CallOptions::new().path_param("id", id))
            .await
    }

    /// CSV export of the directory, as raw bytes for a browser download.
    pub async fn export_employees(&self) -> Result<Vec<u8>, ApiError> {
        self.invoke_bytes(&routes::employees::EXPORT, CallOptions::new()).await
    }
}
