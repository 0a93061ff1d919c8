//! Permission slugs granted by the backend on the employee record.

pub const VIEW_EMPLOYEE_LIST: &str = "view_employee_list";
pub const CREATE_EMPLOYEE: &str = "create_employee";
pub const EDIT_EMPLOYEE: &str = "edit_employee";
pub const VIEW_HR_DASHBOARD: &str = "view_hr_dashboard";

pub const CREATE_LEAVE_REQUEST: &str = "can_create_leave_request";
pub const LIST_LEAVE_REQUESTS: &str = "can_list_leave_requests";
pub const UPDATE_LEAVE_REQUEST: &str = "can_update_leave_request";
pub const APPROVE_LEAVE_REQUEST: &str = "can_approve_leave_request";
pub const REJECT_LEAVE_REQUEST: &str = "can_reject_leave_request";
pub const LIST_LEAVE_TYPES: &str = "can_list_leave_types";
pub const CREATE_LEAVE_TYPE: &str = "can_create_leave_type";
pub const UPDATE_LEAVE_TYPE: &str = "can_update_leave_type";
pub const DELETE_LEAVE_TYPE: &str = "can_delete_leave_type";
pub const LIST_LEAVE_BALANCES: &str = "can_list_leave_balances";
pub const UPDATE_LEAVE_BALANCE: &str = "can_update_leave_balance";

use crate::api::Employee;

pub fn has_permission(permission: &str, granted: &[String]) -> bool {
    granted.iter().any(|slug| slug == permission)
}

pub fn employee_has_permission(employee: Option<&Employee>, permission: &str) -> bool {
    employee
        .map(|employee| has_permission(permission, &employee.permissions))
        .unwrap_or(false)
}

/// HR reviewers are recognized by their grant set, not by a role string.
pub fn is_hr_reviewer(employee: Option<&Employee>) -> bool {
    employee_has_permission(employee, APPROVE_LEAVE_REQUEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(permissions: &[&str]) -> Employee {
        Employee {
            id: "emp-1".into(),
            user: Some("ada".into()),
            full_name: "Ada Lovelace".into(),
            email: None,
            department: None,
            role: None,
            hire_date: None,
            phone_number: None,
            permissions: permissions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn grants_are_exact_slug_matches() {
        let granted = vec![VIEW_EMPLOYEE_LIST.to_string()];
        assert!(has_permission(VIEW_EMPLOYEE_LIST, &granted));
        assert!(!has_permission(CREATE_EMPLOYEE, &granted));
        assert!(!has_permission("view_employee", &granted));
    }

    #[test]
    fn missing_employee_has_no_grants() {
        assert!(!employee_has_permission(None, VIEW_EMPLOYEE_LIST));
    }

    #[test]
    fn approver_grant_marks_hr_reviewers() {
        let reviewer = employee(&[APPROVE_LEAVE_REQUEST]);
        let regular = employee(&[CREATE_LEAVE_REQUEST]);
        assert!(is_hr_reviewer(Some(&reviewer)));
        assert!(!is_hr_reviewer(Some(&regular)));
    }
}
