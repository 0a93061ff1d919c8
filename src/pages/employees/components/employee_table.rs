use crate::components::empty_state::EmptyState;
use crate::components::layout::LoadingSpinner;
use crate::pages::employees::view_model::EmployeesViewModel;
use crate::state::employee::use_permission;
use crate::state::permissions;
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn EmployeeTable(vm: EmployeesViewModel) -> impl IntoView {
    let can_edit = use_permission(permissions::EDIT_EMPLOYEE);
    let rows = Signal::derive(move || vm.directory.get().results);
    let count = Signal::derive(move || vm.directory.get().count);
    let has_prev = Signal::derive(move || vm.page.get() > 0);
    let has_next = Signal::derive(move || vm.page.get() + 1 < vm.total_pages());

    view! {
        <Show when=move || !vm.directory_loading.get() fallback=|| view! { <LoadingSpinner/> }>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <EmptyState title="No employees found" description="Adjust the search or add a new employee."/> }
            >
                <div class="overflow-hidden rounded-lg border border-border">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class="px-4 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Name"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Department"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Role"</th>
                                <th class="px-4 py-3 text-left text-xs font-medium uppercase text-fg-muted">"Hired"</th>
                                <th class="px-4 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border bg-surface-elevated">
                            <For
                                each=move || rows.get()
                                key=|employee| employee.id.clone()
                                children=move |employee| {
                                    let profile_href = format!("/employees/{}", employee.id);
                                    let hired = employee.hire_date.map(format_date).unwrap_or_default();
                                    let edit_employee = employee.clone();
                                    view! {
                                        <tr>
                                            <td class="px-4 py-3 text-sm font-medium text-fg">
                                                <a href=profile_href class="hover:underline">{employee.full_name.clone()}</a>
                                            </td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{employee.department.clone().unwrap_or_default()}</td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{employee.role.clone().unwrap_or_default()}</td>
                                            <td class="px-4 py-3 text-sm text-fg-muted">{hired}</td>
                                            <td class="px-4 py-3 text-right text-sm">
                                                <Show when=move || can_edit.get()>
                                                    <button
                                                        type="button"
                                                        class="font-medium text-action-primary-bg hover:underline"
                                                        on:click={
                                                            let edit_employee = edit_employee.clone();
                                                            move |_| {
                                                                vm.form_state.load_from(&edit_employee);
                                                                vm.form_message.update(|msg| msg.clear());
                                                                vm.form_open.set(true);
                                                            }
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
                <div class="flex items-center justify-between text-sm text-fg-muted">
                    <span>{move || format!("{} employees", count.get())}</span>
                    <div class="flex items-center gap-2">
                        <button
                            type="button"
                            class="rounded-md px-3 py-1 hover:bg-surface-muted disabled:opacity-50"
                            disabled=move || !has_prev.get()
                            on:click=move |_| vm.go_to_page(vm.page.get_untracked().saturating_sub(1))
                        >
                            "Previous"
                        </button>
                        <span>{move || format!("Page {} of {}", vm.page.get() + 1, vm.total_pages())}</span>
                        <button
                            type="button"
                            class="rounded-md px-3 py-1 hover:bg-surface-muted disabled:opacity-50"
                            disabled=move || !has_next.get()
                            on:click=move |_| vm.go_to_page(vm.page.get_untracked() + 1)
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </Show>
        </Show>
    }
}
