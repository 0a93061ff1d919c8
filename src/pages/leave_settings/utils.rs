use crate::api::{ApiError, Holiday, HolidayPayload, LeaveType, LeaveTypePayload};
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

/// Leave type form backing state. `editing` carries the id of the type
/// being updated, if any.
#[derive(Clone, Copy)]
pub struct LeaveTypeFormState {
    name: RwSignal<String>,
    default_days: RwSignal<String>,
    editing: RwSignal<Option<String>>,
}

impl Default for LeaveTypeFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            default_days: create_rw_signal(String::new()),
            editing: create_rw_signal(None),
        }
    }
}

impl LeaveTypeFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn default_days_signal(&self) -> RwSignal<String> {
        self.default_days
    }

    pub fn editing_signal(&self) -> RwSignal<Option<String>> {
        self.editing
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.default_days.set(String::new());
        self.editing.set(None);
    }

    pub fn load_from(&self, leave_type: &LeaveType) {
        self.name.set(leave_type.name.clone());
        self.default_days.set(
            leave_type
                .default_days
                .map(|days| days.to_string())
                .unwrap_or_default(),
        );
        self.editing.set(leave_type.id.clone());
    }

    pub fn to_payload(self) -> Result<LeaveTypePayload, ApiError> {
        let name = self.name.get().trim().to_string();
        if name.is_empty() {
            return Err(ApiError::validation("The leave type needs a name."));
        }
        let raw_days = self.default_days.get();
        let default_days = match raw_days.trim() {
            "" => None,
            raw => {
                let days: f64 = raw.parse().map_err(|_| {
                    ApiError::validation("Enter the annual grant as a number of days.")
                })?;
                if !days.is_finite() || days < 0.0 {
                    return Err(ApiError::validation(
                        "The annual grant cannot be negative.",
                    ));
                }
                Some(days)
            }
        };
        Ok(LeaveTypePayload { name, default_days })
    }
}

/// Holiday form backing state.
#[derive(Clone, Copy)]
pub struct HolidayFormState {
    name: RwSignal<String>,
    date: RwSignal<String>,
    description: RwSignal<String>,
    editing: RwSignal<Option<String>>,
}

impl Default for HolidayFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            editing: create_rw_signal(None),
        }
    }
}

impl HolidayFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn editing_signal(&self) -> RwSignal<Option<String>> {
        self.editing
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.date.set(String::new());
        self.description.set(String::new());
        self.editing.set(None);
    }

    pub fn load_from(&self, holiday: &Holiday) {
        self.name.set(holiday.name.clone());
        self.date.set(holiday.date.format("%Y-%m-%d").to_string());
        self.description
            .set(holiday.description.clone().unwrap_or_default());
        self.editing.set(holiday.id.clone());
    }

    pub fn to_payload(self) -> Result<HolidayPayload, ApiError> {
        let name = self.name.get().trim().to_string();
        if name.is_empty() {
            return Err(ApiError::validation("The holiday needs a name."));
        }
        let date = NaiveDate::parse_from_str(self.date.get().trim(), "%Y-%m-%d")
            .map_err(|_| ApiError::validation("Enter the date as YYYY-MM-DD."))?;
        Ok(HolidayPayload {
            name,
            date,
            description: optional_string(self.description.get()),
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

    #[test]
    fn blank_grant_becomes_none() {
        with_runtime(|| {
            let state = LeaveTypeFormState::default();
            state.name_signal().set("Annual".into());
            let payload = state.to_payload().unwrap();
            assert_eq!(payload.default_days, None);
        });
    }

    #[test]
    fn fractional_grants_are_accepted() {
        with_runtime(|| {
            let state = LeaveTypeFormState::default();
            state.name_signal().set("Annual".into());
            state.default_days_signal().set("22.5".into());
            assert_eq!(state.to_payload().unwrap().default_days, Some(22.5));
        });
    }

    #[test]
    fn negative_grants_are_rejected() {
        with_runtime(|| {
            let state = LeaveTypeFormState::default();
            state.name_signal().set("Annual".into());
            state.default_days_signal().set("-2".into());
            assert_eq!(state.to_payload().unwrap_err().code, "VALIDATION_ERROR");
        });
    }

    #[test]
    fn nameless_types_are_rejected() {
        with_runtime(|| {
            let state = LeaveTypeFormState::default();
            state.default_days_signal().set("10".into());
            assert!(state.to_payload().is_err());
        });
    }

    #[test]
    fn loading_a_type_marks_the_form_as_editing() {
        with_runtime(|| {
            let state = LeaveTypeFormState::default();
            state.load_from(&LeaveType {
                id: Some("lt-2".into()),
                name: "Sick".into(),
                default_days: Some(10.0),
            });
            assert_eq!(state.editing_signal().get(), Some("lt-2".to_string()));
            assert_eq!(state.default_days_signal().get(), "10");
        });
    }

    #[test]
    fn holiday_payload_trims_and_parses() {
        with_runtime(|| {
            let state = HolidayFormState::default();
            state.name_signal().set("  Founding Day ".into());
            state.date_signal().set("2025-10-03".into());
            state.description_signal().set("   ".into());
            let payload = state.to_payload().unwrap();
            assert_eq!(payload.name, "Founding Day");
            assert_eq!(payload.description, None);
        });
    }

    #[test]
    fn malformed_holiday_dates_are_rejected() {
        with_runtime(|| {
            let state = HolidayFormState::default();
            state.name_signal().set("Founding Day".into());
            state.date_signal().set("03/10/2025".into());
            assert!(state.to_payload().is_err());
        });
    }
}
