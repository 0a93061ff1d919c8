use crate::api::{available_actions, Actor, LeaveAction, LeaveRequest};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{LoadingSpinner, SuccessMessage};
use crate::components::status_badge::LeaveStatusBadge;
use crate::pages::dashboard::view_model::DashboardViewModel;
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn ReviewQueue(vm: DashboardViewModel) -> impl IntoView {
    let queue = Signal::derive(move || {
        vm.queue_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let loading = vm.queue_resource.loading();
    let error = Signal::derive(move || vm.queue_message.get().error);
    let success = move || vm.queue_message.get().success;
    let pending_decision = create_rw_signal(None::<(String, LeaveAction)>);
    let dialog_open = Signal::derive(move || pending_decision.get().is_some());
    let dialog_title = Signal::derive(move || {
        pending_decision
            .get()
            .map(|(_, action)| action.label().to_string())
            .unwrap_or_default()
    });

    let on_confirm = Callback::new(move |_| {
        if let Some((id, action)) = pending_decision.get_untracked() {
            vm.decide_action.dispatch((id, action));
        }
        pending_decision.set(None);
    });
    let on_cancel = Callback::new(move |_| pending_decision.set(None));

    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-semibold text-fg">"Awaiting review"</h2>
            {move || success().map(|message| view! { <SuccessMessage message=message/> })}
            <InlineErrorMessage error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !queue.get().is_empty()
                    fallback=|| view! { <EmptyState title="All caught up" description="No requests are waiting on a decision."/> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                        <For
                            each=move || queue.get()
                            key=|request| (request.id.clone(), request.status)
                            children=move |request| {
                                view! { <QueueRow request=request pending_decision=pending_decision/> }
                            }
                        />
                    </ul>
                </Show>
            </Show>
            <ConfirmDialog
                is_open=dialog_open
                title=dialog_title
                message="The employee is notified of the decision."
                confirm_label="Confirm decision"
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </section>
    }
}

#[component]
fn QueueRow(
    request: LeaveRequest,
    pending_decision: RwSignal<Option<(String, LeaveAction)>>,
) -> impl IntoView {
    let actions = available_actions(&request, Actor::HumanResources);
    let status = request.status;
    let who = request
        .employee_name
        .clone()
        .unwrap_or_else(|| request.employee.clone());
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
    let row_id = request.id.clone();

    view! {
        <li class="flex items-center justify-between gap-4 p-4">
            <div>
                <p class="text-sm font-medium text-fg">{who} " " <span class="text-fg-muted">{type_name}</span></p>
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
                {actions
                    .into_iter()
                    .map(|action| {
                        let row_id = row_id.clone();
                        view! {
                            <button
                                type="button"
                                class="text-sm font-medium text-action-primary-bg hover:underline"
                                on:click=move |_| pending_decision.set(Some((row_id.clone(), action)))
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
