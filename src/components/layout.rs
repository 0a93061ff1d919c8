use crate::state::employee::{use_current_employee, use_permission};
use crate::state::permissions;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (employee, _set_employee) = use_current_employee();
    let can_view_directory = use_permission(permissions::VIEW_EMPLOYEE_LIST);
    let can_view_hr_dashboard = use_permission(permissions::VIEW_HR_DASHBOARD);
    let can_manage_leave_types = use_permission(permissions::LIST_LEAVE_TYPES);
    let display_name = move || {
        employee
            .get()
            .employee
            .map(|employee| employee.full_name)
            .unwrap_or_default()
    };
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-fg">"HRM"</h1>
                    </div>
                    <div class="flex items-center">
                        <nav class="hidden lg:flex space-x-4">
                            <Show when=move || can_view_hr_dashboard.get()>
                                <a href="/" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                    "Dashboard"
                                </a>
                            </Show>
                            <Show when=move || can_view_directory.get()>
                                <a href="/employees" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                    "Employees"
                                </a>
                            </Show>
                            <a href="/leave" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                "Leave"
                            </a>
                            <Show when=move || can_manage_leave_types.get()>
                                <a href="/leave/settings" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium">
                                    "Leave settings"
                                </a>
                            </Show>
                        </nav>
                        <span class="ml-4 text-sm text-fg-muted">{display_name}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">{children()}</main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_children_inside_main() {
        let html = render_to_string(|| {
            view! {
                <Layout>
                    <p>"page body"</p>
                </Layout>
            }
        });
        assert!(html.contains("page body"));
        assert!(html.contains("<main"));
    }

    #[test]
    fn header_hides_gated_navigation_without_grants() {
        let html = render_to_string(|| view! { <Header/> });
        assert!(html.contains("Leave"));
        assert!(!html.contains("href=\"/employees\""));
        assert!(!html.contains("href=\"/leave/settings\""));
    }
}
