use crate::api::ApiError;

/// Success/error banner state shared by the page panels. Setting one side
/// clears the other.
#[derive(Clone, Default)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, error: ApiError) {
        if !error.silent {
            self.error = Some(error);
            self.success = None;
        }
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_replaces_a_previous_error() {
        let mut message = MessageState::default();
        message.set_error(ApiError::request_failed("offline"));
        message.set_success("Saved");
        assert!(message.error.is_none());
        assert_eq!(message.success.as_deref(), Some("Saved"));
    }

    #[test]
    fn silent_errors_do_not_surface() {
        let mut message = MessageState::default();
        message.set_error(ApiError::http(404, None, true));
        assert!(message.error.is_none());
    }
}
