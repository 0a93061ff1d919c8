use crate::api::{available_actions, Actor, LeaveAction, LeaveBalance, LeaveRequest};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{LoadingSpinner, SuccessMessage};
use crate::components::status_badge::LeaveStatusBadge;
use crate::pages::employee_profile::view_model::ProfileViewModel;
use crate::state::employee::use_permission;
use crate::state::permissions;
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn LeavesTab(vm: ProfileViewModel) -> impl IntoView {
    let error = Signal::derive(move || vm.leave_message.get().error);
    let success = move || vm.leave_message.get().success;

    view! {
        <div class="space-y-6">
            {move || success().map(|message| view! { <SuccessMessage message=message/> })}
            <InlineErrorMessage error=error/>
            <BalanceSection vm=vm/>
            <HistorySection vm=vm/>
            <CalendarSection vm=vm/>
        </div>
    }
}

#[component]
fn BalanceSection(vm: ProfileViewModel) -> impl IntoView {
    let balances = Signal::derive(move || {
        vm.balances_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let loading = vm.balances_resource.loading();
    let can_adjust = use_permission(permissions::UPDATE_LEAVE_BALANCE);
    let adjusting = Signal::derive(move || vm.adjust_state.target_signal().get().is_some());

    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-semibold text-fg">"Balances"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !balances.get().is_empty()
                    fallback=|| view! { <EmptyState title="No balances yet" description="Balances appear once leave types are granted."/> }
                >
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        <For
                            each=move || balances.get()
                            key=|balance| (balance.id.clone(), balance.leave_type.clone())
                            children=move |balance| {
                                view! { <BalanceCard vm=vm balance=balance can_adjust=can_adjust/> }
                            }
                        />
                    </div>
                </Show>
            </Show>
            <Show when=move || adjusting.get()>
                <AdjustPanel vm=vm/>
            </Show>
        </section>
    }
}

#[component]
fn BalanceCard(vm: ProfileViewModel, balance: LeaveBalance, can_adjust: Memo<bool>) -> impl IntoView {
    let type_name = balance
        .leave_type_name
        .clone()
        .unwrap_or_else(|| balance.leave_type.clone());
    let days = balance
        .balance
        .map(|value| format!("{} days", value))
        .unwrap_or_else(|| "not set".to_string());
    let editable = balance.id.is_some();
    let target = balance.clone();

    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-4">
            <p class="text-sm text-fg-muted">{type_name}</p>
            <p class="mt-1 text-2xl font-semibold text-fg">{days}</p>
            <Show when=move || can_adjust.get() && editable>
                <button
                    type="button"
                    class="mt-2 text-sm font-medium text-action-primary-bg hover:underline"
                    on:click={
                        let target = target.clone();
                        move |_| {
                            vm.leave_message.update(|msg| msg.clear());
                            vm.adjust_state.open(&target);
                        }
                    }
                >
                    "Adjust"
                </button>
            </Show>
        </div>
    }
}

#[component]
fn AdjustPanel(vm: ProfileViewModel) -> impl IntoView {
    let adjust_state = vm.adjust_state;
    let heading = Signal::derive(move || {
        adjust_state
            .target_signal()
            .get()
            .map(|balance| {
                let name = balance
                    .leave_type_name
                    .unwrap_or_else(|| balance.leave_type.clone());
                format!("Adjust {}", name)
            })
            .unwrap_or_default()
    });
    let pending = vm.adjust_action.pending();

    view! {
        <form
            class="flex flex-wrap items-end gap-3 rounded-lg border border-border bg-surface-elevated p-4"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_adjustment();
            }
        >
            <label class="block">
                <span class="text-sm text-fg-muted">{move || heading.get()}</span>
                <input
                    type="number"
                    step="0.5"
                    class="mt-1 block w-32 rounded-md border border-border bg-surface px-3 py-2 text-sm"
                    prop:value=move || adjust_state.value_signal().get()
                    on:input=move |ev| adjust_state.value_signal().set(event_target_value(&ev))
                />
            </label>
            <button
                type="submit"
                class="inline-flex items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                disabled=move || pending.get()
            >
                "Save"
            </button>
            <button
                type="button"
                class="inline-flex items-center rounded-md bg-surface-muted px-4 py-2 text-sm font-semibold text-fg hover:bg-surface-elevated"
                on:click=move |_| adjust_state.close()
            >
                "Cancel"
            </button>
        </form>
    }
}

#[component]
fn HistorySection(vm: ProfileViewModel) -> impl IntoView {
    let leaves = Signal::derive(move || {
        vm.leaves_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let loading = vm.leaves_resource.loading();
    let is_reviewer = use_permission(permissions::APPROVE_LEAVE_REQUEST);
    let pending_decision = create_rw_signal(None::<(String, LeaveAction)>);
    let dialog_open = Signal::derive(move || pending_decision.get().is_some());

    let on_confirm = Callback::new(move |_| {
        if let Some((id, action)) = pending_decision.get_untracked() {
            vm.decide_action.dispatch((id, action));
        }
        pending_decision.set(None);
    });
    let on_cancel = Callback::new(move |_| pending_decision.set(None));

    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-semibold text-fg">"Leave history"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !leaves.get().is_empty()
                    fallback=|| view! { <EmptyState title="No leave on record"/> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                        <For
                            each=move || leaves.get()
                            key=|request| (request.id.clone(), request.status)
                            children=move |request| {
                                view! {
                                    <HistoryRow
                                        request=request
                                        is_reviewer=is_reviewer
                                        pending_decision=pending_decision
                                    />
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
            <ConfirmDialog
                is_open=dialog_open
                title="Record decision"
                message="The employee is notified of the decision."
                confirm_label="Confirm decision"
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </section>
    }
}

#[component]
fn HistoryRow(
    request: LeaveRequest,
    is_reviewer: Memo<bool>,
    pending_decision: RwSignal<Option<(String, LeaveAction)>>,
) -> impl IntoView {
    let actions = available_actions(&request, Actor::HumanResources);
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
    let row_id = request.id.clone();

    view! {
        <li class="flex items-center justify-between gap-4 p-4">
            <div>
                <p class="text-sm font-medium text-fg">{type_name}</p>
                <p class="text-sm text-fg-muted">{span}</p>
            </div>
            <div class="flex items-center gap-2">
                <LeaveStatusBadge status=Signal::derive(move || status)/>
                <Show when=move || is_reviewer.get()>
                    {actions
                        .clone()
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
                </Show>
            </div>
        </li>
    }
}

#[component]
fn CalendarSection(vm: ProfileViewModel) -> impl IntoView {
    let entries = Signal::derive(move || {
        vm.calendar_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let loading = vm.calendar_resource.loading();

    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-semibold text-fg">"Calendar"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !entries.get().is_empty()
                    fallback=|| view! { <p class="text-sm text-fg-muted">"Nothing on the calendar."</p> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                        <For
                            each=move || entries.get()
                            key=|entry| (entry.id.clone(), entry.name.clone())
                            children=move |entry| {
                                let when = match (entry.date, entry.start_date, entry.end_date) {
                                    (Some(date), _, _) => format_date(date),
                                    (None, Some(start), Some(end)) => {
                                        format!("{} to {}", format_date(start), format_date(end))
                                    }
                                    (None, Some(start), None) => format_date(start),
                                    _ => String::new(),
                                };
                                let kind = entry.kind.clone().unwrap_or_default();
                                view! {
                                    <li class="flex items-center justify-between p-3 text-sm">
                                        <span class="font-medium text-fg">{entry.name.clone()}</span>
                                        <span class="text-fg-muted">{when} " " {kind}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
