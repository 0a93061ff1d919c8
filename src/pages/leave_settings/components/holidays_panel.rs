use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{LoadingSpinner, SuccessMessage};
use crate::pages::leave_settings::view_model::SettingsViewModel;
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn HolidaysPanel(vm: SettingsViewModel) -> impl IntoView {
    let holidays = Signal::derive(move || {
        let mut holidays = vm
            .holidays_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default();
        holidays.sort_by_key(|holiday| holiday.date);
        holidays
    });
    let loading = vm.holidays_resource.loading();
    let error = Signal::derive(move || vm.holiday_message.get().error);
    let success = move || vm.holiday_message.get().success;
    let pending_delete = create_rw_signal(None::<String>);
    let dialog_open = Signal::derive(move || pending_delete.get().is_some());

    let on_confirm = Callback::new(move |_| {
        if let Some(id) = pending_delete.get_untracked() {
            vm.delete_holiday_action.dispatch(id);
        }
        pending_delete.set(None);
    });
    let on_cancel = Callback::new(move |_| pending_delete.set(None));

    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-fg">"Holidays"</h2>
            {move || success().map(|message| view! { <SuccessMessage message=message/> })}
            <InlineErrorMessage error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !holidays.get().is_empty()
                    fallback=|| view! { <EmptyState title="No holidays on the calendar"/> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                        <For
                            each=move || holidays.get()
                            key=|holiday| (holiday.id.clone(), holiday.date)
                            children=move |holiday| {
                                let name = holiday.name.clone();
                                let date = format_date(holiday.date);
                                let description = holiday.description.clone().unwrap_or_default();
                                let id = holiday.id.clone();
                                let edit_target = holiday.clone();
                                view! {
                                    <li class="flex items-center justify-between gap-4 p-4">
                                        <div>
                                            <p class="text-sm font-medium text-fg">{name} " " <span class="text-fg-muted">{date}</span></p>
                                            <Show when={
                                                let description = description.clone();
                                                move || !description.is_empty()
                                            }>
                                                <p class="text-xs text-fg-muted">{description.clone()}</p>
                                            </Show>
                                        </div>
                                        <div class="flex items-center gap-2 text-sm">
                                            <button
                                                type="button"
                                                class="font-medium text-action-primary-bg hover:underline"
                                                on:click={
                                                    let edit_target = edit_target.clone();
                                                    move |_| {
                                                        vm.holiday_message.update(|msg| msg.clear());
                                                        vm.holiday_form.load_from(&edit_target);
                                                    }
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <Show when={
                                                let id = id.clone();
                                                move || id.is_some()
                                            }>
                                                <button
                                                    type="button"
                                                    class="font-medium text-action-danger-bg hover:underline"
                                                    on:click={
                                                        let id = id.clone();
                                                        move |_| pending_delete.set(id.clone())
                                                    }
                                                >
                                                    "Remove"
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
            <HolidayForm vm=vm/>
            <ConfirmDialog
                is_open=dialog_open
                title="Remove holiday"
                message="The day stops counting as a company holiday."
                confirm_label="Remove"
                destructive=true
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </section>
    }
}

#[component]
fn HolidayForm(vm: SettingsViewModel) -> impl IntoView {
    let form = vm.holiday_form;
    let is_editing = Signal::derive(move || form.editing_signal().get().is_some());
    let pending = Signal::derive(move || {
        vm.create_holiday_action.pending().get() || vm.update_holiday_action.pending().get()
    });

    view! {
        <form
            class="flex flex-wrap items-end gap-3 rounded-lg border border-border bg-surface-elevated p-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_holiday_form();
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
                <span class="text-sm text-fg-muted">"Date"</span>
                <input
                    type="date"
                    class="mt-1 block w-40 rounded-md border border-border bg-surface px-3 py-2 text-sm"
                    prop:value=move || form.date_signal().get()
                    on:input=move |ev| form.date_signal().set(event_target_value(&ev))
                />
            </label>
            <label class="block">
                <span class="text-sm text-fg-muted">"Description"</span>
                <input
                    type="text"
                    class="mt-1 block w-56 rounded-md border border-border bg-surface px-3 py-2 text-sm"
                    prop:value=move || form.description_signal().get()
                    on:input=move |ev| form.description_signal().set(event_target_value(&ev))
                />
            </label>
            <button
                type="submit"
                class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || pending.get()
            >
                {move || if is_editing.get() { "Save holiday" } else { "Add holiday" }}
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
