use crate::api::{ApiError, Holiday, HolidayPayload, LeaveType, LeaveTypePayload};
use crate::pages::leave_settings::{
    repository::SettingsRepository,
    utils::{HolidayFormState, LeaveTypeFormState},
};
use crate::pages::message::MessageState;
use leptos::*;

#[derive(Clone, Copy)]
pub struct SettingsViewModel {
    pub type_form: LeaveTypeFormState,
    pub type_message: RwSignal<MessageState>,
    pub holiday_form: HolidayFormState,
    pub holiday_message: RwSignal<MessageState>,
    pub types_resource: Resource<u32, Result<Vec<LeaveType>, ApiError>>,
    pub holidays_resource: Resource<u32, Result<Vec<Holiday>, ApiError>>,
    pub create_type_action: Action<LeaveTypePayload, Result<(), ApiError>>,
    pub update_type_action: Action<(String, LeaveTypePayload), Result<(), ApiError>>,
    pub delete_type_action: Action<String, Result<(), ApiError>>,
    pub create_holiday_action: Action<HolidayPayload, Result<(), ApiError>>,
    pub update_holiday_action: Action<(String, HolidayPayload), Result<(), ApiError>>,
    pub delete_holiday_action: Action<String, Result<(), ApiError>>,
}

impl SettingsViewModel {
    pub fn new() -> Self {
        let repository = store_value(SettingsRepository::new());
        let type_form = LeaveTypeFormState::default();
        let type_message = create_rw_signal(MessageState::default());
        let holiday_form = HolidayFormState::default();
        let holiday_message = create_rw_signal(MessageState::default());
        let types_reload = create_rw_signal(0u32);
        let holidays_reload = create_rw_signal(0u32);

        let types_resource = create_resource(
            move || types_reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.leave_types().await }
            },
        );
        // The admin list is unscoped; year filtering is a dashboard concern.
        let holidays_resource = create_resource(
            move || holidays_reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.holidays(None).await }
            },
        );

        let create_type_action = create_action(move |payload: &LeaveTypePayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create_type(payload).await.map(|_| ()) }
        });
        let update_type_action = create_action(move |input: &(String, LeaveTypePayload)| {
            let repo = repository.get_value();
            let (id, payload) = input.clone();
            async move { repo.update_type(&id, payload).await.map(|_| ()) }
        });
        let delete_type_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move { repo.delete_type(&id).await }
        });
        let create_holiday_action = create_action(move |payload: &HolidayPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create_holiday(payload).await.map(|_| ()) }
        });
        let update_holiday_action = create_action(move |input: &(String, HolidayPayload)| {
            let repo = repository.get_value();
            let (id, payload) = input.clone();
            async move { repo.update_holiday(&id, payload).await.map(|_| ()) }
        });
        let delete_holiday_action = create_action(move |id: &String| {
            let repo = repository.get_value();
            let id = id.clone();
            async move { repo.delete_holiday(&id).await }
        });

        let type_outcome = move |result: Result<(), ApiError>, success: &'static str| match result {
            Ok(_) => {
                type_message.update(|msg| msg.set_success(success));
                type_form.reset();
                types_reload.update(|value| *value = value.wrapping_add(1));
            }
            Err(error) => type_message.update(|msg| msg.set_error(error)),
        };
        create_effect(move |_| {
            if let Some(result) = create_type_action.value().get() {
                type_outcome(result, "Leave type created.");
            }
        });
        create_effect(move |_| {
            if let Some(result) = update_type_action.value().get() {
                type_outcome(result, "Leave type updated.");
            }
        });
        create_effect(move |_| {
            if let Some(result) = delete_type_action.value().get() {
                type_outcome(result, "Leave type deleted.");
            }
        });

        let holiday_outcome =
            move |result: Result<(), ApiError>, success: &'static str| match result {
                Ok(_) => {
                    holiday_message.update(|msg| msg.set_success(success));
                    holiday_form.reset();
                    holidays_reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(error) => holiday_message.update(|msg| msg.set_error(error)),
            };
        create_effect(move |_| {
            if let Some(result) = create_holiday_action.value().get() {
                holiday_outcome(result, "Holiday added.");
            }
        });
        create_effect(move |_| {
            if let Some(result) = update_holiday_action.value().get() {
                holiday_outcome(result, "Holiday updated.");
            }
        });
        create_effect(move |_| {
            if let Some(result) = delete_holiday_action.value().get() {
                holiday_outcome(result, "Holiday removed.");
            }
        });

        Self {
            type_form,
            type_message,
            holiday_form,
            holiday_message,
            types_resource,
            holidays_resource,
            create_type_action,
            update_type_action,
            delete_type_action,
            create_holiday_action,
            update_holiday_action,
            delete_holiday_action,
        }
    }

    pub fn submit_type_form(&self) {
        self.type_message.update(|msg| msg.clear());
        let payload = match self.type_form.to_payload() {
            Ok(payload) => payload,
            Err(error) => {
                self.type_message.update(|msg| msg.set_error(error));
                return;
            }
        };
        match self.type_form.editing_signal().get_untracked() {
            Some(id) => self.update_type_action.dispatch((id, payload)),
            None => self.create_type_action.dispatch(payload),
        }
    }

    pub fn submit_holiday_form(&self) {
        self.holiday_message.update(|msg| msg.clear());
        let payload = match self.holiday_form.to_payload() {
            Ok(payload) => payload,
            Err(error) => {
                self.holiday_message.update(|msg| msg.set_error(error));
                return;
            }
        };
        match self.holiday_form.editing_signal().get_untracked() {
            Some(id) => self.update_holiday_action.dispatch((id, payload)),
            None => self.create_holiday_action.dispatch(payload),
        }
    }
}

impl Default for SettingsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
