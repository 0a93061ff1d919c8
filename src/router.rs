use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireEmployee, RequirePermission},
    pages::{
        dashboard::DashboardPage, employee_profile::EmployeeProfilePage, employees::EmployeesPage,
        leave_settings::LeaveSettingsPage, leaves::LeavePage,
    },
    state::{employee::EmployeeProvider, permissions},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/employees",
    "/employees/:id",
    "/leave",
    "/leave/settings",
];

/// Routes that additionally require a permission grant on top of a
/// loaded employee record.
pub const GATED_ROUTE_PATHS: &[&str] = &["/", "/employees", "/leave/settings"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    leptos_meta::provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <EmployeeProvider>
            <Router>
                <Routes>
                    <Route path="/" view=GatedDashboard/>
                    <Route path="/employees" view=GatedEmployees/>
                    <Route path="/employees/:id" view=GatedProfile/>
                    <Route path="/leave" view=GatedLeave/>
                    <Route path="/leave/settings" view=GatedSettings/>
                </Routes>
            </Router>
        </EmployeeProvider>
    }
}

#[component]
fn GatedDashboard() -> impl IntoView {
    view! {
        <RequireEmployee>
            <RequirePermission permission=permissions::VIEW_HR_DASHBOARD>
                <DashboardPage/>
            </RequirePermission>
        </RequireEmployee>
    }
}

#[component]
fn GatedEmployees() -> impl IntoView {
    view! {
        <RequireEmployee>
            <RequirePermission permission=permissions::VIEW_EMPLOYEE_LIST>
                <EmployeesPage/>
            </RequirePermission>
        </RequireEmployee>
    }
}

#[component]
fn GatedProfile() -> impl IntoView {
    view! {
        <RequireEmployee>
            <RequirePermission permission=permissions::VIEW_EMPLOYEE_LIST>
                <EmployeeProfilePage/>
            </RequirePermission>
        </RequireEmployee>
    }
}

#[component]
fn GatedLeave() -> impl IntoView {
    view! {
        <RequireEmployee>
            <LeavePage/>
        </RequireEmployee>
    }
}

#[component]
fn GatedSettings() -> impl IntoView {
    view! {
        <RequireEmployee>
            <RequirePermission permission=permissions::LIST_LEAVE_TYPES>
                <LeaveSettingsPage/>
            </RequirePermission>
        </RequireEmployee>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn gated_routes_are_a_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in GATED_ROUTE_PATHS {
            assert!(all.contains(path), "gated path missing from ROUTE_PATHS: {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn profile_route_carries_the_id_param() {
        assert!(ROUTE_PATHS.contains(&"/employees/:id"));
    }
}
