use crate::api::{available_actions, Actor, LeaveAction, LeaveRequest};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{LoadingSpinner, SuccessMessage};
use crate::components::status_badge::LeaveStatusBadge;
use crate::pages::leaves::view_model::LeaveViewModel;
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn LeaveActivityList(vm: LeaveViewModel) -> impl IntoView {
    let leaves = Signal::derive(move || {
        vm.leaves_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let loading = vm.leaves_resource.loading();
    let error = Signal::derive(move || vm.list_message.get().error);
    let success = move || vm.list_message.get().success;
    let pending_cancel = create_rw_signal(None::<(String, LeaveAction)>);
    let dialog_open = Signal::derive(move || pending_cancel.get().is_some());

    let on_confirm = Callback::new(move |_| {
        if let Some((id, action)) = pending_cancel.get_untracked() {
            vm.workflow_action.dispatch((id, action));
        }
        pending_cancel.set(None);
    });
    let on_cancel = Callback::new(move |_| pending_cancel.set(None));

    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-semibold text-fg">"Leave activity"</h2>
            {move || success().map(|message| view! { <SuccessMessage message=message/> })}
            <InlineErrorMessage error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !leaves.get().is_empty()
                    fallback=|| view! { <EmptyState title="No leave requests yet" description="Requests you submit show up here."/> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                        <For
                            each=move || leaves.get()
                            key=|request| (request.id.clone(), request.status)
                            children=move |request| {
                                view! { <ActivityRow vm=vm request=request pending_cancel=pending_cancel/> }
                            }
                        />
                    </ul>
                </Show>
            </Show>
            <ConfirmDialog
                is_open=dialog_open
                title="Cancel leave request"
                message="An approved request needs HR confirmation before it is cancelled."
                confirm_label="Yes, cancel it"
                destructive=true
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </section>
    }
}

#[component]
fn ActivityRow(
    vm: LeaveViewModel,
    request: LeaveRequest,
    pending_cancel: RwSignal<Option<(String, LeaveAction)>>,
) -> impl IntoView {
    let actions = available_actions(&request, Actor::Employee);
    let can_edit = request.can_edit;
    let status = request.status;
    let type_name = request
        .leave_type_name
        .clone()
        .unwrap_or_else(|| request.leave_type.clone());
    let span = format!(
        "{} to {} ({} days)",
        format_date(request.start_date),
        format_date(request.end_date),
        request.days_requested,
    );
    let reason = request.reason.clone().unwrap_or_default();
    let edit_request = request.clone();
    let row_id = request.id.clone();

    view! {
        <li class="flex items-center justify-between gap-4 p-4">
            <div>
                <p class="text-sm font-medium text-fg">{type_name}</p>
                <p class="text-sm text-fg-muted">{span}</p>
                <Show when={
                    let reason = reason.clone();
                    move || !reason.is_empty()
                }>
                    <p class="text-xs text-fg-muted">{reason.clone()}</p>
                </Show>
            </div>
            <div class="flex items-center gap-2">
                <LeaveStatusBadge status=Signal::derive(move || status)/>
                <Show when=move || can_edit>
                    <button
                        type="button"
                        class="text-sm font-medium text-action-primary-bg hover:underline"
                        on:click={
                            let edit_request = edit_request.clone();
                            move |_| {
                                vm.form_state.load_from(&edit_request);
                                vm.form_message.update(|msg| msg.clear());
                            }
                        }
                    >
                        "Edit"
                    </button>
                </Show>
                {actions
                    .into_iter()
                    .map(|action| {
                        let row_id = row_id.clone();
                        view! {
                            <button
                                type="button"
                                class="text-sm font-medium text-action-danger-bg hover:underline"
                                on:click=move |_| pending_cancel.set(Some((row_id.clone(), action)))
                            >
                                {action.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </li>
    }
}
