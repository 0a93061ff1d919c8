use crate::api::{ApiError, LeaveRequest, LeaveRequestPayload};
use crate::utils::time::inclusive_days;
use chrono::NaiveDate;
use leptos::*;

fn parse_date(raw: &str, message: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ApiError::validation(message))
}

fn optional_string(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Leave request form backing state. `editing` carries the id of the
/// request being resubmitted, if any.
#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
    editing: RwSignal<Option<String>>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
            editing: create_rw_signal(None),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn editing_signal(&self) -> RwSignal<Option<String>> {
        self.editing
    }

    pub fn reset(&self) {
        self.leave_type.set(String::new());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
        self.editing.set(None);
    }

    pub fn load_from(&self, request: &LeaveRequest) {
        self.leave_type.set(request.leave_type.clone());
        self.start_date.set(request.start_date.format("%Y-%m-%d").to_string());
        self.end_date.set(request.end_date.format("%Y-%m-%d").to_string());
        self.reason.set(request.reason.clone().unwrap_or_default());
        self.editing.set(Some(request.id.clone()));
    }

    pub fn to_payload(self, employee_id: Option<String>) -> Result<LeaveRequestPayload, ApiError> {
        let leave_type = self.leave_type.get();
        if leave_type.trim().is_empty() {
            return Err(ApiError::validation("Choose a leave type."));
        }
        let start = parse_date(&self.start_date.get(), "Enter the start date as YYYY-MM-DD.")?;
        let end = parse_date(&self.end_date.get(), "Enter the end date as YYYY-MM-DD.")?;
        if end < start {
            return Err(ApiError::validation(
                "The end date must not precede the start date.",
            ));
        }
        Ok(LeaveRequestPayload {
            employee: employee_id,
            leave_type,
            start_date: start,
            end_date: end,
            days_requested: Some(inclusive_days(start, end) as f64),
            reason: optional_string(self.reason.get()),
        })
    }
}
