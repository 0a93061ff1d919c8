mod client;
mod debounce;
mod employees;
mod files;
mod holidays;
mod leave_balances;
mod leave_types;
mod leaves;
mod pagination;
pub mod routes;
mod types;
mod workflow;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

pub use client::{
    ApiClient, CallOptions, ResponseBody, Route, SessionTokenProvider, StaticTokenProvider,
    TokenProvider, ACCESS_TOKEN_KEY,
};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use employees::EmployeeListFilter;
pub use leaves::LeaveListFilter;
pub use pagination::{PageRequest, PaginatedResponse, DEFAULT_PAGE_SIZE};
pub use types::{
    ApiError, ArchiveFileRequest, CalendarEntry, Employee, EmployeePayload, FilePayload,
    FileUploadModel, Holiday, HolidayPayload, LeaveBalance, LeaveBalancePayload, LeaveRequest,
    LeaveRequestPayload, LeaveStatus, LeaveType, LeaveTypePayload,
};
pub use workflow::{allowed_actions, available_actions, Actor, LeaveAction};
