use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Structured error surfaced by every API call and by form validation.
/// `cause` keeps the backend's JSON error body (field errors, detail
/// messages) so callers can render something better than a status line.
#[derive(Debug, Clone, Serialize, Deserialize, Error, PartialEq)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<Value>,
    #[serde(default)]
    pub silent: bool,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "VALIDATION_ERROR".to_string(),
            status: None,
            cause: None,
            silent: false,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "UNKNOWN_ERROR".to_string(),
            status: None,
            cause: None,
            silent: false,
        }
    }

    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "REQUEST_FAILED".to_string(),
            status: None,
            cause: None,
            silent: false,
        }
    }

    pub fn missing_path_param(path: &str, name: &str) -> Self {
        Self {
            error: format!("No value provided for '{{{}}}' in {}", name, path),
            code: "MISSING_PATH_PARAM".to_string(),
            status: None,
            cause: None,
            silent: false,
        }
    }

    pub fn http(status: u16, cause: Option<Value>, silent: bool) -> Self {
        let error = cause
            .as_ref()
            .and_then(extract_error_message)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        Self {
            error,
            code: "HTTP_ERROR".to_string(),
            status: Some(status),
            cause,
            silent,
        }
    }
}

/// Best human-readable message from a backend error body: a bare string,
/// a DRF-style `detail`, or the first per-field message.
fn extract_error_message(body: &Value) -> Option<String> {
    match body {
        Value::String(message) => Some(message.clone()),
        Value::Object(map) => {
            if let Some(detail) = map.get("detail").and_then(|v| v.as_str()) {
                return Some(detail.to_string());
            }
            map.iter().find_map(|(field, messages)| match messages {
                Value::String(message) => Some(format!("{}: {}", field, message)),
                Value::Array(items) => items
                    .iter()
                    .find_map(|item| item.as_str())
                    .map(|message| format!("{}: {}", field, message)),
                _ => None,
            })
        }
        _ => None,
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        view! { <p class="text-sm text-danger">{self.error}</p> }.into_view()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: String,
    #[serde(default)]
    pub user: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Create and full-update share one shape; the backend treats PUT as a
/// complete resubmission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmployeePayload {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    CancellationRequested,
    Cancelled,
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::CancellationRequested => "cancellation_requested",
            LeaveStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::CancellationRequested => "Cancellation requested",
            LeaveStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub id: String,
    pub employee: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub leave_type: String,
    #[serde(default)]
    pub leave_type_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub days_requested: f64,
    #[serde(default)]
    pub reason: Option<String>,
    pub status: LeaveStatus,
    // Server-computed; the workflow table gates on top of these, never
    // instead of them.
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_cancel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequestPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_requested: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveType {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub default_days: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveTypePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_days: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveBalance {
    #[serde(default)]
    pub id: Option<String>,
    pub employee: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub leave_type: String,
    #[serde(default)]
    pub leave_type_name: Option<String>,
    // Fractional day grants (half days) are valid.
    #[serde(default)]
    pub balance: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveBalancePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holiday {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HolidayPayload {
    pub name: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One row of an employee's calendar feed: company holidays and the
/// employee's own leave spans share the endpoint, distinguished by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileUploadModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub associating_id: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub upload_completed: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub archive_reason: Option<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associating_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArchiveFileRequest {
    pub archive_reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn leave_status_uses_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::CancellationRequested).unwrap(),
            "\"cancellation_requested\""
        );
        let parsed: LeaveStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(parsed, LeaveStatus::Pending);
    }

    #[test]
    fn leave_request_defaults_action_flags_to_false() {
        let parsed: LeaveRequest = serde_json::from_value(json!({
            "id": "lr-1",
            "employee": "emp-1",
            "leave_type": "lt-1",
            "start_date": "2025-06-02",
            "end_date": "2025-06-04",
            "status": "pending"
        }))
        .unwrap();
        assert!(!parsed.can_edit);
        assert!(!parsed.can_cancel);
        assert_eq!(parsed.days_requested, 0.0);
    }

    #[test]
    fn http_error_prefers_detail_message() {
        let error = ApiError::http(403, Some(json!({ "detail": "Forbidden." })), false);
        assert_eq!(error.error, "Forbidden.");
        assert_eq!(error.status, Some(403));
    }

    #[test]
    fn http_error_reads_first_field_message() {
        let body = json!({ "start_date": ["This field is required."] });
        let error = ApiError::http(422, Some(body.clone()), false);
        assert_eq!(error.error, "start_date: This field is required.");
        assert_eq!(error.cause, Some(body));
    }

    #[test]
    fn http_error_without_body_reports_status() {
        let error = ApiError::http(502, None, true);
        assert_eq!(error.error, "Request failed with status 502");
        assert!(error.silent);
    }

    #[test]
    fn api_error_converts_to_plain_message() {
        let message: String = ApiError::validation("End date must not precede start date").into();
        assert_eq!(message, "End date must not precede start date");
    }

    #[test]
    fn payload_omits_unset_optional_fields() {
        let payload = LeaveRequestPayload {
            employee: None,
            leave_type: "lt-1".into(),
            start_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
            days_requested: None,
            reason: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("employee").is_none());
        assert!(value.get("reason").is_none());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn api_error_round_trips_in_wasm() {
        let error = ApiError::http(404, Some(serde_json::json!({ "detail": "Not found." })), false);
        let encoded = serde_json::to_string(&error).unwrap();
        let decoded: ApiError = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, error);
    }
}
