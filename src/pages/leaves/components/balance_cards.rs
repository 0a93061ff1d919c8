use crate::api::{LeaveBalance, LeaveType};
use crate::components::empty_state::EmptyState;
use crate::components::layout::LoadingSpinner;
use crate::pages::leaves::view_model::LeaveViewModel;
use leptos::*;

/// Prefers the name the balance row already carries, then the loaded
/// leave types, then the raw id.
pub(crate) fn leave_type_name(balance: &LeaveBalance, types: &[LeaveType]) -> String {
    if let Some(name) = &balance.leave_type_name {
        return name.clone();
    }
    types
        .iter()
        .find(|leave_type| leave_type.id.as_deref() == Some(balance.leave_type.as_str()))
        .map(|leave_type| leave_type.name.clone())
        .unwrap_or_else(|| balance.leave_type.clone())
}

#[component]
pub fn BalanceCards(vm: LeaveViewModel) -> impl IntoView {
    let balances = Signal::derive(move || {
        vm.balances_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let types = Signal::derive(move || {
        vm.leave_types_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let loading = vm.balances_resource.loading();
    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-semibold text-fg">"Balances"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !balances.get().is_empty()
                    fallback=|| view! { <EmptyState title="No leave balances yet"/> }
                >
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                        <For
                            each=move || balances.get()
                            key=|balance| balance.id.clone().unwrap_or_else(|| balance.leave_type.clone())
                            children=move |balance| {
                                let name = leave_type_name(&balance, &types.get());
                                let remaining = balance
                                    .balance
                                    .map(|days| format!("{} days", days))
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <div class="rounded-lg border border-border bg-surface-elevated p-4">
                                        <p class="text-sm text-fg-muted">{name}</p>
                                        <p class="mt-1 text-2xl font-semibold text-fg">{remaining}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_resolution_prefers_the_row_then_the_catalog() {
        let types = vec![LeaveType {
            id: Some("lt-1".into()),
            name: "Annual leave".into(),
            default_days: Some(25.0),
        }];
        let named = LeaveBalance {
            id: Some("bal-1".into()),
            employee: "emp-1".into(),
            employee_name: None,
            leave_type: "lt-1".into(),
            leave_type_name: Some("Vacation".into()),
            balance: Some(10.0),
        };
        let unnamed = LeaveBalance {
            leave_type_name: None,
            ..named.clone()
        };
        let unknown = LeaveBalance {
            leave_type: "lt-9".into(),
            leave_type_name: None,
            ..named.clone()
        };
        assert_eq!(leave_type_name(&named, &types), "Vacation");
        assert_eq!(leave_type_name(&unnamed, &types), "Annual leave");
        assert_eq!(leave_type_name(&unknown, &types), "lt-9");
    }
}
