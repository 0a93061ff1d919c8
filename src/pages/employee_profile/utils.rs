use crate::api::{ApiError, LeaveBalance};
use leptos::*;

/// Backing state for the HR balance adjustment dialog. `target` holds the
/// balance row being edited while the dialog is open.
#[derive(Clone, Copy)]
pub struct BalanceAdjustState {
    target: RwSignal<Option<LeaveBalance>>,
    value: RwSignal<String>,
}

impl Default for BalanceAdjustState {
    fn default() -> Self {
        Self {
            target: create_rw_signal(None),
            value: create_rw_signal(String::new()),
        }
    }
}

impl BalanceAdjustState {
    pub fn target_signal(&self) -> RwSignal<Option<LeaveBalance>> {
        self.target
    }

    pub fn value_signal(&self) -> RwSignal<String> {
        self.value
    }

    pub fn open(&self, balance: &LeaveBalance) {
        self.value
            .set(balance.balance.map(|b| b.to_string()).unwrap_or_default());
        self.target.set(Some(balance.clone()));
    }

    pub fn close(&self) {
        self.target.set(None);
        self.value.set(String::new());
    }

    /// The balance row id plus the parsed value. The number is passed
    /// through unchanged; the server owns the range policy.
    pub fn to_adjustment(self) -> Result<(String, f64), ApiError> {
        let target = self
            .target
            .get()
            .ok_or_else(|| ApiError::validation("No balance selected."))?;
        let id = target
            .id
            .ok_or_else(|| ApiError::validation("This balance cannot be edited yet."))?;
        let value: f64 = self
            .value
            .get()
            .trim()
            .parse()
            .map_err(|_| ApiError::validation("Enter the balance as a number of days."))?;
        if !value.is_finite() {
            return Err(ApiError::validation("Enter the balance as a number of days."));
        }
        Ok((id, value))
    }
}
