//! Every backend endpoint this module talks to, declared once.

use reqwest::Method;

use super::client::Route;

pub mod employees {
    use super::*;

    pub const LIST: Route = Route::new(Method::GET, "/api/hrm/employees/");
    pub const CREATE: Route = Route::new(Method::POST, "/api/hrm/employees/");
    pub const DETAIL: Route = Route::new(Method::GET, "/api/hrm/employees/{id}/");
    pub const UPDATE: Route = Route::new(Method::PUT, "/api/hrm/employees/{id}/");
    pub const CURRENT: Route = Route::new(Method::GET, "/api/hrm/employees/current/");
    pub const CALENDAR: Route = Route::new(Method::GET, "/api/hrm/employees/{id}/holidays/");
    pub const EXPORT: Route = Route::new(Method::GET, "/api/hrm/employees/export/");
}

pub mod leaves {
    use super::*;

    pub const LIST: Route = Route::new(Method::GET, "/api/hrm/leaves/");
    pub const CREATE: Route = Route::new(Method::POST, "/api/hrm/leaves/");
    pub const DETAIL: Route = Route::new(Method::GET, "/api/hrm/leaves/{id}/");
    pub const UPDATE: Route = Route::new(Method::PUT, "/api/hrm/leaves/{id}/");
    pub const APPROVE: Route = Route::new(Method::POST, "/api/hrm/leaves/{id}/approve/");
    pub const REJECT: Route = Route::new(Method::POST, "/api/hrm/leaves/{id}/reject/");
    pub const CANCEL: Route = Route::new(Method::POST, "/api/hrm/leaves/{id}/cancel/");
    pub const APPROVE_CANCELLATION: Route =
        Route::new(Method::POST, "/api/hrm/leaves/{id}/approve_cancellation/");
}

pub mod leave_types {
    use super::*;

    pub const LIST: Route = Route::new(Method::GET, "/api/hrm/leave-types/");
    pub const CREATE: Route = Route::new(Method::POST, "/api/hrm/leave-types/");
    pub const DETAIL: Route = Route::new(Method::GET, "/api/hrm/leave-types/{id}/");
    pub const UPDATE: Route = Route::new(Method::PUT, "/api/hrm/leave-types/{id}/");
    pub const DELETE: Route = Route::new(Method::DELETE, "/api/hrm/leave-types/{id}/");
}

pub mod leave_balances {
    use super::*;

    pub const LIST: Route = Route::new(Method::GET, "/api/hrm/leave-balances/");
    pub const CREATE: Route = Route::new(Method::POST, "/api/hrm/leave-balances/");
    pub const DETAIL: Route = Route::new(Method::GET, "/api/hrm/leave-balances/{id}/");
    pub const UPDATE: Route = Route::new(Method::PUT, "/api/hrm/leave-balances/{id}/");
}

pub mod holidays {
    use super::*;

    pub const LIST: Route = Route::new(Method::GET, "/api/hrm/holidays/");
    pub const CREATE: Route = Route::new(Method::POST, "/api/hrm/holidays/");
    pub const UPDATE: Route = Route::new(Method::PUT, "/api/hrm/holidays/{id}/");
    pub const DELETE: Route = Route::new(Method::DELETE, "/api/hrm/holidays/{id}/");
}

pub mod files {
    use super::*;

    pub const LIST: Route = Route::new(Method::GET, "/api/v1/files/");
    pub const CREATE: Route = Route::new(Method::POST, "/api/v1/files/");
    pub const DETAIL: Route = Route::new(Method::GET, "/api/v1/files/{id}/");
    pub const UPDATE: Route = Route::new(Method::PUT, "/api/v1/files/{id}/");
    pub const ARCHIVE: Route = Route::new(Method::POST, "/api/v1/files/{id}/archive/");
}

pub mod users {
    use super::*;

    pub const PROFILE_PICTURE: Route =
        Route::new(Method::GET, "/api/v1/users/{username}/profile_picture/");
    pub const UPLOAD_PROFILE_PICTURE: Route =
        Route::new(Method::POST, "/api/v1/users/{username}/profile_picture/");
    pub const DELETE_PROFILE_PICTURE: Route =
        Route::new(Method::DELETE, "/api/v1/users/{username}/profile_picture/");
}
