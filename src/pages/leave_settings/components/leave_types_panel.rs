use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{LoadingSpinner, SuccessMessage};
use crate::pages::leave_settings::view_model::SettingsViewModel;
use crate::state::employee::use_permission;
use crate::state::permissions;
use leptos::*;

#[component]
pub fn LeaveTypesPanel(vm: SettingsViewModel) -> impl IntoView {
    let types = Signal::derive(move || {
        vm.types_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let loading = vm.types_resource.loading();
    let error = Signal::derive(move || vm.type_message.get().error);
    let success = move || vm.type_message.get().success;
    let can_edit = use_permission(permissions::UPDATE_LEAVE_TYPE);
    let can_delete = use_permission(permissions::DELETE_LEAVE_TYPE);
    let pending_delete = create_rw_signal(None::<String>);
    let dialog_open = Signal::derive(move || pending_delete.get().is_some());

    let on_confirm = Callback::new(move |_| {
        if let Some(id) = pending_delete.get_untracked() {
            vm.delete_type_action.dispatch(id);
        }
        pending_delete.set(None);
    });
    let on_cancel = Callback::new(move |_| pending_delete.set(None));

    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Leave types"</h2>
            {move || success().map(|message| view! { <SuccessMessage message=message/> })}
            <InlineErrorMessage error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !types.get().is_empty()
                    fallback=|| view! { <EmptyState title="No leave types yet" description="Employees cannot request leave until a type exists."/> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                        <For
                            each=move || types.get()
                            key=|leave_type| leave_type.id.clone()
                            children=move |leave_type| {
                                let name = leave_type.name.clone();
                                let grant = leave_type
                                    .default_days
                                    .map(|days| format!("{} days / year", days))
                                    .unwrap_or_else(|| "no annual grant".to_string());
                                let id = leave_type.id.clone();
                                let edit_target = leave_type.clone();
                                view! {
                                    <li class="flex items-center justify-between gap-4 p-4">
                                        <div>
                                            <p class="text-sm font-medium text-fg">{name}</p>
                                            <p class="text-sm text-fg-muted">{grant}</p>
                                        </div>
                                        <div class="flex items-center gap-2 text-sm">
                                            <Show when=move || can_edit.get()>
                                                <button
                                                    type="button"
                                                    class="font-medium text-action-primary-bg hover:underline"
                                                    on:click={
                                                        let edit_target = edit_target.clone();
                                                        move |_| {
                                                            vm.type_message.update(|msg| msg.clear());
                                                            vm.type_form.load_from(&edit_target);
                                                        }
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                            </Show>
                                            <Show when={
                                                let id = id.clone();
                                                move || can_delete.get() && id.is_some()
                                            }>
                                                <button
                                                    type="button"
                                                    class="font-medium text-action-danger-bg hover:underline"
                                                    on:click={
                                                        let id = id.clone();
                                                        move |_| pending_delete.set(id.clone())
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </Show>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
            <LeaveTypeForm vm=vm/>
            <ConfirmDialog
                is_open=dialog_open
                title="Delete leave type"
                message="Types still referenced by balances or requests cannot be deleted."
                confirm_label="Delete"
                destructive=true
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </section>
    }
}

#[component]
fn LeaveTypeForm(vm: SettingsViewModel) -> impl IntoView {
    let form = vm.type_form;
    let is_editing = Signal::derive(move || form.editing_signal().get().is_some());
    let pending = Signal::derive(move || {
        vm.create_type_action.pending().get() || vm.update_type_action.pending().get()
    });

    view! {
        <form
            class="flex flex-wrap items-end gap-3 rounded-lg border border-border bg-surface-elevated p-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_type_form();
            }
        >
            <label class="block">
                <span class="text-sm text-fg-muted">"Name"</span>
                <input
                    type="text"
                    class="mt-1 block w-48 rounded-md border border-border bg-surface px-3 py-2 text-sm"
                    prop:value=move || form.name_signal().get()
                    on:input=move |ev| form.name_signal().set(event_target_value(&ev))
                />
            </label>
            <label class="block">
                <span class="text-sm text-fg-muted">"Days per year"</span>
                <input
                    type="number"
                    step="0.5"
                    min="0"
                    class="mt-1 block w-32 rounded-md border border-border bg-surface px-3 py-2 text-sm"
                    prop:value=move || form.default_days_signal().get()
                    on:input=move |ev| form.default_days_signal().set(event_target_value(&ev))
                />
            </label>
            <button
                type="submit"
                class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if is_editing.get() { "Save type" } else { "Add type" }}
            </button>
            <Show when=move || is_editing.get()>
                <button
                    type="button"
                    class="inline-flex items-center rounded-md bg-surface-muted px-4 py-2 text-sm font-semibold text-fg hover:bg-surface-elevated"
                    on:click=move |_| form.reset()
                >
                    "Discard"
                </button>
            </Show>
        </form>
    }
}
