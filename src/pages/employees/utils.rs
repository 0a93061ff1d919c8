use crate::api::{ApiError, Employee, EmployeePayload};
use chrono::NaiveDate;
use leptos::*;

fn optional_string(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    full_name: RwSignal<String>,
    email: RwSignal<String>,
    department: RwSignal<String>,
    role: RwSignal<String>,
    hire_date: RwSignal<String>,
    phone_number: RwSignal<String>,
    editing: RwSignal<Option<String>>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            role: create_rw_signal(String::new()),
            hire_date: create_rw_signal(String::new()),
            phone_number: create_rw_signal(String::new()),
            editing: create_rw_signal(None),
        }
    }
}

impl EmployeeFormState {
    pub fn full_name_signal(&self) -> RwSignal<String> {
        self.full_name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn department_signal(&self) -> RwSignal<String> {
        self.department
    }

    pub fn role_signal(&self) -> RwSignal<String> {
        self.role
    }

    pub fn hire_date_signal(&self) -> RwSignal<String> {
        self.hire_date
    }

    pub fn phone_signal(&self) -> RwSignal<String> {
        self.phone_number
    }

    pub fn editing_signal(&self) -> RwSignal<Option<String>> {
        self.editing
    }

    pub fn reset(&self) {
        self.full_name.set(String::new());
        self.email.set(String::new());
        self.department.set(String::new());
        self.role.set(String::new());
        self.hire_date.set(String::new());
        self.phone_number.set(String::new());
        self.editing.set(None);
    }

    pub fn load_from(&self, employee: &Employee) {
        self.full_name.set(employee.full_name.clone());
        self.email.set(employee.email.clone().unwrap_or_default());
        self.department.set(employee.department.clone().unwrap_or_default());
        self.role.set(employee.role.clone().unwrap_or_default());
        self.hire_date.set(
            employee
                .hire_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        self.phone_number.set(employee.phone_number.clone().unwrap_or_default());
        self.editing.set(Some(employee.id.clone()));
    }

    pub fn to_payload(self) -> Result<EmployeePayload, ApiError> {
        let full_name = self.full_name.get().trim().to_string();
        if full_name.is_empty() {
            return Err(ApiError::validation("Enter the employee's full name."));
        }
        let email = self.email.get().trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::validation("Enter a valid email address."));
        }
        let hire_date_raw = self.hire_date.get();
        let hire_date = match hire_date_raw.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| ApiError::validation("Enter the hire date as YYYY-MM-DD."))?,
            ),
        };
        Ok(EmployeePayload {
            full_name,
            email,
            department: optional_string(self.department.get()),
            role: optional_string(self.role.get()),
            hire_date,
            phone_number: optional_string(self.phone_number.get()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    fn filled_state() -> EmployeeFormState {
        let state = EmployeeFormState::default();
        state.full_name_signal().set("Ada Lovelace".into());
        state.email_signal().set("ada@example.com".into());
        state.department_signal().set("engineering".into());
        state
    }

    #[test]
    fn payload_keeps_required_and_trims_optionals() {
        with_runtime(|| {
            let state = filled_state();
            state.phone_signal().set("   ".into());
            let payload = state.to_payload().unwrap();
            assert_eq!(payload.full_name, "Ada Lovelace");
            assert_eq!(payload.department.as_deref(), Some("engineering"));
            assert!(payload.phone_number.is_none());
            assert!(payload.hire_date.is_none());
        });
    }

    #[test]
    fn email_must_look_like_an_address() {
        with_runtime(|| {
            let state = filled_state();
            state.email_signal().set("not-an-email".into());
            let error = state.to_payload().unwrap_err();
            assert_eq!(error.code, "VALIDATION_ERROR");
        });
    }

    #[test]
    fn hire_date_is_optional_but_strict_when_present() {
        with_runtime(|| {
            let state = filled_state();
            state.hire_date_signal().set("2023-04-01".into());
            assert!(state.to_payload().is_ok());
            state.hire_date_signal().set("04/01/2023".into());
            assert!(state.to_payload().is_err());
        });
    }
}
