#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::Employee;
    use crate::state::employee::EmployeeState;
    use leptos::*;

    pub fn sample_employee(permissions: &[&str]) -> Employee {
        Employee {
            id: "emp-1".into(),
            user: Some("ada".into()),
            full_name: "Ada Lovelace".into(),
            email: Some("ada@example.com".into()),
            department: Some("engineering".into()),
            role: Some("staff".into()),
            hire_date: chrono::NaiveDate::from_ymd_opt(2023, 4, 1),
            phone_number: None,
            permissions: permissions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Seeds the employee context the way `EmployeeProvider` would after a
    /// successful fetch. `None` simulates an account with no HR record.
    pub fn provide_employee(permissions: Option<&[&str]>) {
        let (state, set_state) = create_signal(EmployeeState {
            employee: permissions.map(sample_employee),
            loading: false,
        });
        provide_context((state, set_state));
    }
}
