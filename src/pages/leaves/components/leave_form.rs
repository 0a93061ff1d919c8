use crate::components::error::InlineErrorMessage;
use crate::components::layout::SuccessMessage;
use crate::pages::leaves::view_model::LeaveViewModel;
use leptos::*;

#[component]
pub fn LeaveRequestForm(vm: LeaveViewModel) -> impl IntoView {
    let form_state = vm.form_state;
    let leave_types = Signal::derive(move || {
        vm.leave_types_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let pending = Signal::derive(move || {
        vm.submit_action.pending().get() || vm.update_action.pending().get()
    });
    let is_editing = Signal::derive(move || form_state.editing_signal().get().is_some());
    let error = Signal::derive(move || vm.form_message.get().error);
    let success = move || vm.form_message.get().success;

    view! {
        <section class="rounded-lg border border-border bg-surface-elevated p-6 space-y-4">
            <h2 class="text-lg font-semibold text-fg">
                {move || if is_editing.get() { "Edit leave request" } else { "Request leave" }}
            </h2>
            {move || success().map(|message| view! { <SuccessMessage message=message/> })}
            <InlineErrorMessage error=error/>
            <form on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_form();
            }>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <label class="block">
                        <span class="text-sm text-fg-muted">"Leave type"</span>
                        <select
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            on:change=move |ev| form_state.leave_type_signal().set(event_target_value(&ev))
                            prop:value=move || form_state.leave_type_signal().get()
                        >
                            <option value="">"Choose..."</option>
                            <For
                                each=move || leave_types.get()
                                key=|leave_type| leave_type.id.clone().unwrap_or_else(|| leave_type.name.clone())
                                children=|leave_type| {
                                    let value = leave_type.id.clone().unwrap_or_default();
                                    view! { <option value=value>{leave_type.name}</option> }
                                }
                            />
                        </select>
                    </label>
                    <label class="block">
                        <span class="text-sm text-fg-muted">"Start date"</span>
                        <input
                            type="date"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || form_state.start_signal().get()
                            on:input=move |ev| form_state.start_signal().set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block">
                        <span class="text-sm text-fg-muted">"End date"</span>
                        <input
                            type="date"
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || form_state.end_signal().get()
                            on:input=move |ev| form_state.end_signal().set(event_target_value(&ev))
                        />
                    </label>
                    <label class="block sm:col-span-2">
                        <span class="text-sm text-fg-muted">"Reason (optional)"</span>
                        <textarea
                            class="mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm"
                            prop:value=move || form_state.reason_signal().get()
                            on:input=move |ev| form_state.reason_signal().set(event_target_value(&ev))
                        ></textarea>
                    </label>
                </div>
                <div class="mt-4 flex gap-2">
                    <button
                        type="submit"
                        class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if is_editing.get() { "Save changes" } else { "Submit request" }}
                    </button>
                    <Show when=move || is_editing.get()>
                        <button
                            type="button"
                            class="inline-flex items-center rounded-md bg-surface-muted px-4 py-2 text-sm font-semibold text-fg hover:bg-surface-elevated"
                            on:click=move |_| {
                                form_state.reset();
                                vm.form_message.update(|msg| msg.clear());
                            }
                        >
                            "Discard edit"
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
