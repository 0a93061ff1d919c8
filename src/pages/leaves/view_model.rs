use crate::api::{
    ApiError, LeaveAction, LeaveBalance, LeaveRequest, LeaveRequestPayload, LeaveType,
};
use crate::pages::leaves::{repository::LeaveRepository, utils::LeaveFormState};
use crate::pages::message::MessageState;
use crate::state::employee::use_current_employee;
use leptos::*;

type LeavesResource = Resource<(u32, Option<String>), Result<Vec<LeaveRequest>, ApiError>>;
type BalancesResource = Resource<(u32, Option<String>), Result<Vec<LeaveBalance>, ApiError>>;

#[derive(Clone, Copy)]
pub struct LeaveViewModel {
    pub form_state: LeaveFormState,
    pub form_message: RwSignal<MessageState>,
    pub list_message: RwSignal<MessageState>,
    pub employee_id: Signal<Option<String>>,
    pub leaves_resource: LeavesResource,
    pub balances_resource: BalancesResource,
    pub leave_types_resource: Resource<(), Result<Vec<LeaveType>, ApiError>>,
    pub submit_action: Action<LeaveRequestPayload, Result<(), ApiError>>,
    pub update_action: Action<(String, LeaveRequestPayload), Result<(), ApiError>>,
    pub workflow_action: Action<(String, LeaveAction), Result<(), ApiError>>,
}

impl LeaveViewModel {
    pub fn new() -> Self {
        let repository = store_value(LeaveRepository::new());
        let (employee_state, _) = use_current_employee();
        let employee_id =
            Signal::derive(move || employee_state.get().employee.map(|employee| employee.id));

        let form_state = LeaveFormState::default();
        let form_message = create_rw_signal(MessageState::default());
        let list_message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);

        let leaves_resource = create_resource(
            move || (reload.get(), employee_id.get()),
            move |(_, employee_id)| {
                let repo = repository.get_value();
                async move {
                    match employee_id {
                        Some(id) => repo.my_leaves(&id).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        );
        let balances_resource = create_resource(
            move || (reload.get(), employee_id.get()),
            move |(_, employee_id)| {
                let repo = repository.get_value();
                async move {
                    match employee_id {
                        Some(id) => repo.my_balances(&id).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        );
        let leave_types_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.leave_types().await }
            },
        );

        let submit_action = create_action(move |payload: &LeaveRequestPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.submit(payload).await.map(|_| ()) }
        });
        let update_action = create_action(move |input: &(String, LeaveRequestPayload)| {
            let repo = repository.get_value();
            let (id, payload) = input.clone();
            async move { repo.update(&id, payload).await.map(|_| ()) }
        });
        let workflow_action = create_action(move |input: &(String, LeaveAction)| {
            let repo = repository.get_value();
            let (id, action) = input.clone();
            async move { repo.apply(&id, action).await.map(|_| ()) }
        });

        create_effect(move |_| {
            if let Some(result) = submit_action.value().get() {
                match result {
                    Ok(_) => {
                        form_message.update(|msg| msg.set_success("Leave request submitted."));
                        form_state.reset();
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(error) => form_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = update_action.value().get() {
                match result {
                    Ok(_) => {
                        form_message.update(|msg| msg.set_success("Leave request updated."));
                        form_state.reset();
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(error) => form_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = workflow_action.value().get() {
                match result {
                    Ok(_) => {
                        list_message.update(|msg| msg.set_success("Request updated."));
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(error) => list_message.update(|msg| msg.set_error(error)),
                }
            }
        });

        Self {
            form_state,
            form_message,
            list_message,
            employee_id,
            leaves_resource,
            balances_resource,
            leave_types_resource,
            submit_action,
            update_action,
            workflow_action,
        }
    }

    /// Validates the form and dispatches either an update (when editing)
    /// or a fresh submission.
    pub fn submit_form(&self) {
        self.form_message.update(|msg| msg.clear());
        let payload = match self.form_state.to_payload(self.employee_id.get_untracked()) {
            Ok(payload) => payload,
            Err(error) => {
                self.form_message.update(|msg| msg.set_error(error));
                return;
            }
        };
        match self.form_state.editing_signal().get_untracked() {
            Some(id) => self.update_action.dispatch((id, payload)),
            None => self.submit_action.dispatch(payload),
        }
    }
}

impl Default for LeaveViewModel {
    fn default() -> Self {
        Self::new()
    }
}
