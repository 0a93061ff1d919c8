use crate::components::error::InlineErrorMessage;
use crate::pages::employees::{
    components::{employee_form::EmployeeForm, employee_table::EmployeeTable},
    layout::EmployeesLayout,
    view_model::EmployeesViewModel,
};
use crate::state::employee::use_permission;
use crate::state::permissions;
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = EmployeesViewModel::new();
    let can_create = use_permission(permissions::CREATE_EMPLOYEE);
    let list_error = Signal::derive(move || vm.list_message.get().error);

    view! {
        <EmployeesLayout>
            <div class="flex flex-wrap items-center justify-between gap-4">
                <input
                    type="search"
                    placeholder="Search by name"
                    class="w-72 rounded-md border border-border bg-surface px-3 py-2 text-sm"
                    prop:value=move || vm.search_term.get()
                    on:input=move |ev| vm.on_search_input(event_target_value(&ev))
                />
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md bg-surface-muted px-4 py-2 text-sm font-semibold text-fg hover:bg-surface-elevated disabled:opacity-50"
                        disabled=move || vm.export_action.pending().get()
                        on:click=move |_| vm.export_action.dispatch(())
                    >
                        "Export CSV"
                    </button>
                    <Show when=move || can_create.get()>
                        <button
                            type="button"
                            class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| {
                                vm.form_state.reset();
                                vm.form_message.update(|msg| msg.clear());
                                vm.form_open.set(true);
                            }
                        >
                            "Add employee"
                        </button>
                    </Show>
                </div>
            </div>
            <InlineErrorMessage error=list_error/>
            <Show when=move || vm.form_open.get()>
                <EmployeeForm vm=vm/>
            </Show>
            <EmployeeTable vm=vm/>
        </EmployeesLayout>
    }
}
