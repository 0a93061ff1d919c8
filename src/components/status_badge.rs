use crate::api::LeaveStatus;
use leptos::*;

fn badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
        LeaveStatus::CancellationRequested => "bg-status-info-bg text-status-info-text",
        LeaveStatus::Cancelled => "bg-surface-muted text-fg-muted",
    }
}

#[component]
pub fn LeaveStatusBadge(#[prop(into)] status: Signal<LeaveStatus>) -> impl IntoView {
    view! {
        <span class=move || {
            format!(
                "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium {}",
                badge_class(status.get()),
            )
        }>{move || status.get().label()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_distinct_badge() {
        let statuses = [
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Rejected,
            LeaveStatus::CancellationRequested,
            LeaveStatus::Cancelled,
        ];
        for (index, status) in statuses.iter().enumerate() {
            for other in &statuses[index + 1..] {
                assert_ne!(badge_class(*status), badge_class(*other));
            }
        }
    }
}
