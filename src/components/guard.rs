use crate::components::layout::LoadingSpinner;
use crate::state::employee::{use_current_employee, EmployeeState};
use crate::state::permissions::employee_has_permission;
use leptos::*;

fn should_render_children(state: &EmployeeState) -> bool {
    state.employee.is_some() && !state.loading
}

fn should_render_gated(state: &EmployeeState, permission: &str) -> bool {
    should_render_children(state) && employee_has_permission(state.employee.as_ref(), permission)
}

/// Blocks the page until the current employee record has loaded. Without
/// one there is nothing to show; the host shell owns sign-in.
#[component]
pub fn RequireEmployee(children: ChildrenFn) -> impl IntoView {
    let (state, _) = use_current_employee();
    let is_loading = create_memo(move |_| state.get().loading);
    view! {
        <Show
            when=move || should_render_children(&state.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner/> }.into_view()
                } else {
                    view! { <p class="p-8 text-sm text-fg-muted">"No employee profile is available for this account."</p> }
                        .into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Additionally requires a permission slug on the employee record.
#[component]
pub fn RequirePermission(permission: &'static str, children: ChildrenFn) -> impl IntoView {
    let (state, _) = use_current_employee();
    let is_loading = create_memo(move |_| state.get().loading);
    create_effect(move |_| {
        let snapshot = state.get();
        if snapshot.loading || should_render_gated(&snapshot, permission) {
            return;
        }
        if snapshot.employee.is_some() {
            if let Some(win) = web_sys::window() {
                let _ = win.location().set_href("/leave");
            }
        }
    });
    view! {
        <Show
            when=move || should_render_gated(&state.get(), permission)
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner/> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Employee;
    use crate::state::permissions::VIEW_HR_DASHBOARD;

    fn employee(permissions: &[&str]) -> Employee {
        Employee {
            id: "emp-1".into(),
            user: None,
            full_name: "Ada Lovelace".into(),
            email: None,
            department: None,
            role: None,
            hire_date: None,
            phone_number: None,
            permissions: permissions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn guard_blocks_until_the_record_is_loaded() {
        assert!(!should_render_children(&EmployeeState {
            employee: None,
            loading: true,
        }));
        assert!(!should_render_children(&EmployeeState {
            employee: None,
            loading: false,
        }));
        assert!(!should_render_children(&EmployeeState {
            employee: Some(employee(&[])),
            loading: true,
        }));
        assert!(should_render_children(&EmployeeState {
            employee: Some(employee(&[])),
            loading: false,
        }));
    }

    #[test]
    fn gated_guard_also_checks_the_grant() {
        let granted = EmployeeState {
            employee: Some(employee(&[VIEW_HR_DASHBOARD])),
            loading: false,
        };
        let denied = EmployeeState {
            employee: Some(employee(&[])),
            loading: false,
        };
        assert!(should_render_gated(&granted, VIEW_HR_DASHBOARD));
        assert!(!should_render_gated(&denied, VIEW_HR_DASHBOARD));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn require_employee_renders_children_once_loaded() {
        let html = render_to_string(|| {
            provide_employee(Some(&[]));
            view! {
                <RequireEmployee>
                    <p>"gated content"</p>
                </RequireEmployee>
            }
        });
        assert!(html.contains("gated content"));
    }

    #[test]
    fn require_permission_hides_children_without_the_grant() {
        let html = render_to_string(|| {
            provide_employee(Some(&[]));
            view! {
                <RequirePermission permission=crate::state::permissions::VIEW_HR_DASHBOARD>
                    <p>"hr only"</p>
                </RequirePermission>
            }
        });
        assert!(!html.contains("hr only"));
    }
}
