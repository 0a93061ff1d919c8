//! Legal leave-request transitions, in one table.
//!
//! The table decides which actions a client may offer; the backend's
//! `can_edit`/`can_cancel` flags stay authoritative on top of it.

use super::types::{LeaveRequest, LeaveStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveAction {
    Approve,
    Reject,
    Cancel,
    RequestCancellation,
    ApproveCancellation,
}

/// Who is acting on the request: its owner, or an HR reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Employee,
    HumanResources,
}

struct TransitionRule {
    action: LeaveAction,
    from: &'static [LeaveStatus],
    to: LeaveStatus,
    actor: Actor,
}

const TRANSITIONS: &[TransitionRule] = &[
    TransitionRule {
        action: LeaveAction::Approve,
        // Re-approving a rejected request is an allowed HR correction.
        from: &[LeaveStatus::Pending, LeaveStatus::Rejected],
        to: LeaveStatus::Approved,
        actor: Actor::HumanResources,
    },
    TransitionRule {
        action: LeaveAction::Reject,
        from: &[LeaveStatus::Pending, LeaveStatus::Approved],
        to: LeaveStatus::Rejected,
        actor: Actor::HumanResources,
    },
    TransitionRule {
        action: LeaveAction::Cancel,
        from: &[LeaveStatus::Pending],
        to: LeaveStatus::Cancelled,
        actor: Actor::Employee,
    },
    TransitionRule {
        action: LeaveAction::RequestCancellation,
        from: &[LeaveStatus::Approved],
        to: LeaveStatus::CancellationRequested,
        actor: Actor::Employee,
    },
    TransitionRule {
        action: LeaveAction::ApproveCancellation,
        from: &[LeaveStatus::CancellationRequested],
        to: LeaveStatus::Cancelled,
        actor: Actor::HumanResources,
    },
];

impl LeaveAction {
    /// URL segment of the action endpoint. A cancellation request on an
    /// approved leave reuses the cancel endpoint; the backend resolves
    /// the resulting status from the current one.
    pub fn endpoint_segment(&self) -> &'static str {
        match self {
            LeaveAction::Approve => "approve",
            LeaveAction::Reject => "reject",
            LeaveAction::Cancel | LeaveAction::RequestCancellation => "cancel",
            LeaveAction::ApproveCancellation => "approve_cancellation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveAction::Approve => "Approve",
            LeaveAction::Reject => "Reject",
            LeaveAction::Cancel => "Cancel",
            LeaveAction::RequestCancellation => "Request cancellation",
            LeaveAction::ApproveCancellation => "Approve cancellation",
        }
    }

    pub fn target(&self) -> LeaveStatus {
        match TRANSITIONS.iter().find(|rule| rule.action == *self) {
            Some(rule) => rule.to,
            None => unreachable!("every action has a transition rule"),
        }
    }

    pub fn allowed_from(&self, status: LeaveStatus) -> bool {
        TRANSITIONS
            .iter()
            .any(|rule| rule.action == *self && rule.from.contains(&status))
    }
}

/// Actions the table permits for `actor` on a request in `status`.
pub fn allowed_actions(status: LeaveStatus, actor: Actor) -> Vec<LeaveAction> {
    TRANSITIONS
        .iter()
        .filter(|rule| rule.actor == actor && rule.from.contains(&status))
        .map(|rule| rule.action)
        .collect()
}

/// Table verdict narrowed by the server-computed flags on the record.
pub fn available_actions(request: &LeaveRequest, actor: Actor) -> Vec<LeaveAction> {
    allowed_actions(request.status, actor)
        .into_iter()
        .filter(|action| match action {
            LeaveAction::Cancel => request.can_cancel,
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(status: LeaveStatus, can_edit: bool, can_cancel: bool) -> LeaveRequest {
        LeaveRequest {
            id: "lr-1".into(),
            employee: "emp-1".into(),
            employee_name: None,
            leave_type: "lt-1".into(),
            leave_type_name: None,
            start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
            days_requested: 3.0,
            reason: None,
            status,
            can_edit,
            can_cancel,
        }
    }

    #[test]
    fn pending_offers_approve_and_reject_to_hr() {
        assert_eq!(
            allowed_actions(LeaveStatus::Pending, Actor::HumanResources),
            vec![LeaveAction::Approve, LeaveAction::Reject]
        );
    }

    #[test]
    fn cancellation_requested_offers_only_its_approval() {
        assert_eq!(
            allowed_actions(LeaveStatus::CancellationRequested, Actor::HumanResources),
            vec![LeaveAction::ApproveCancellation]
        );
        assert!(allowed_actions(LeaveStatus::CancellationRequested, Actor::Employee).is_empty());
    }

    #[test]
    fn terminal_cancelled_offers_nothing() {
        assert!(allowed_actions(LeaveStatus::Cancelled, Actor::HumanResources).is_empty());
        assert!(allowed_actions(LeaveStatus::Cancelled, Actor::Employee).is_empty());
    }

    #[test]
    fn hr_may_reverse_a_decision() {
        assert!(LeaveAction::Approve.allowed_from(LeaveStatus::Rejected));
        assert!(LeaveAction::Reject.allowed_from(LeaveStatus::Approved));
        assert!(!LeaveAction::Approve.allowed_from(LeaveStatus::Cancelled));
    }

    #[test]
    fn owner_may_request_cancellation_of_approved_leave() {
        assert_eq!(
            allowed_actions(LeaveStatus::Approved, Actor::Employee),
            vec![LeaveAction::RequestCancellation]
        );
        assert_eq!(
            LeaveAction::RequestCancellation.target(),
            LeaveStatus::CancellationRequested
        );
    }

    #[test]
    fn server_flag_still_gates_pending_cancel() {
        let allowed = available_actions(&request(LeaveStatus::Pending, true, true), Actor::Employee);
        assert_eq!(allowed, vec![LeaveAction::Cancel]);
        let blocked =
            available_actions(&request(LeaveStatus::Pending, true, false), Actor::Employee);
        assert!(blocked.is_empty());
    }

    #[test]
    fn both_cancellation_paths_share_the_endpoint() {
        assert_eq!(LeaveAction::Cancel.endpoint_segment(), "cancel");
        assert_eq!(LeaveAction::RequestCancellation.endpoint_segment(), "cancel");
        assert_eq!(
            LeaveAction::ApproveCancellation.endpoint_segment(),
            "approve_cancellation"
        );
    }
}
