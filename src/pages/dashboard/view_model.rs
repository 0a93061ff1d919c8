use crate::api::{ApiError, Holiday, LeaveAction, LeaveRequest};
use crate::pages::dashboard::repository::DashboardRepository;
use crate::pages::message::MessageState;
use crate::utils::time::today;
use chrono::Datelike;
use leptos::*;

type QueueResource = Resource<u32, Result<Vec<LeaveRequest>, ApiError>>;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub queue_message: RwSignal<MessageState>,
    pub queue_resource: QueueResource,
    pub approved_resource: QueueResource,
    pub holidays_resource: Resource<(), Result<Vec<Holiday>, ApiError>>,
    pub decide_action: Action<(String, LeaveAction), Result<(), ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let repository = store_value(DashboardRepository::new());
        let queue_message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);

        let queue_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.review_queue().await }
            },
        );
        let approved_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.approved_leaves().await }
            },
        );
        let holidays_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.holidays(today().year()).await }
            },
        );

        let decide_action = create_action(move |input: &(String, LeaveAction)| {
            let repo = repository.get_value();
            let (id, action) = input.clone();
            async move { repo.decide(&id, action).await.map(|_| ()) }
        });

        create_effect(move |_| {
            if let Some(result) = decide_action.value().get() {
                match result {
                    Ok(_) => {
                        queue_message.update(|msg| msg.set_success("Decision recorded."));
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(error) => queue_message.update(|msg| msg.set_error(error)),
                }
            }
        });

        Self {
            queue_message,
            queue_resource,
            approved_resource,
            holidays_resource,
            decide_action,
        }
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
