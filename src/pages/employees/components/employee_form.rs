use crate::components::error::InlineErrorMessage;
use crate::components::layout::SuccessMessage;
use crate::pages::employees::view_model::EmployeesViewModel;
use leptos::*;

#[component]
pub fn EmployeeForm(vm: EmployeesViewModel) -> impl IntoView {
    let form_state = vm.form_state;
    let is_editing = Signal::derive(move || form_state.editing_signal().get().is_some());
    let pending = Signal::derive(move || {
        vm.create_action.pending().get() || vm.update_action.pending().get()
    });
    let error = Signal::derive(move || vm.form_message.get().error);
    let success = move || vm.form_message.get().success;

    view! {
        <section class="rounded-lg border border-border bg-surface-elevated p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">
                {move || if is_editing.get() { "Edit employee" } else { "Add employee" }}
            </h2>
            {move || success().map(|message| view! { <SuccessMessage message=message/> })}
            <InlineErrorMessage error=error/>
            <form on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_form();
            }>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <label class="block">
                        <span class="text-sm text-fg-muted">"Full name"</span>
                        <input
                            type="text"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || form_state.full_name_signal().get()
                            on:input=move |ev| form_state.full_name_signal().set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm text-fg-muted">"Email"</span>
                        <input
                            type="email"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || form_state.email_signal().get()
                            on:input=move |ev| form_state.email_signal().set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm text-fg-muted">"Department"</span>
                        <input
                            type="text"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || form_state.department_signal().get()
                            on:input=move |ev| form_state.department_signal().set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm text-fg-muted">"Role"</span>
                        <input
                            type="text"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || form_state.role_signal().get()
                            on:input=move |ev| form_state.role_signal().set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm text-fg-muted">"Hire date"</span>
                        <input
                            type="date"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || form_state.hire_date_signal().get()
                            on:input=move |ev| form_state.hire_date_signal().set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm text-fg-muted">"Phone"</span>
                        <input
                            type="tel"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || form_state.phone_signal().get()
                            on:input=move |ev| form_state.phone_signal().set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="mt-4 flex gap-2">
                    <button
                        type="submit"
                        class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if is_editing.get() { "Save changes" } else { "Create employee" }}
                    </button>
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md bg-surface-muted px-4 py-2 text-sm font-semibold text-fg hover:bg-surface-elevated"
                        on:click=move |_| {
                            form_state.reset();
                            vm.form_message.update(|msg| msg.clear());
                            vm.form_open.set(false);
                        }
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}
