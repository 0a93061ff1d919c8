use crate::api::{
    ApiError, CalendarEntry, Employee, FileUploadModel, LeaveAction, LeaveBalance, LeaveRequest,
};
use crate::pages::employee_profile::{repository::ProfileRepository, utils::BalanceAdjustState};
use crate::pages::message::MessageState;
use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    Leaves,
    Documents,
}

type ProfileKey = (u32, String);

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub employee_id: Signal<String>,
    pub tab: RwSignal<ProfileTab>,
    pub adjust_state: BalanceAdjustState,
    pub leave_message: RwSignal<MessageState>,
    pub document_message: RwSignal<MessageState>,
    pub employee_resource: Resource<ProfileKey, Result<Employee, ApiError>>,
    pub balances_resource: Resource<ProfileKey, Result<Vec<LeaveBalance>, ApiError>>,
    pub leaves_resource: Resource<ProfileKey, Result<Vec<LeaveRequest>, ApiError>>,
    pub calendar_resource: Resource<String, Result<Vec<CalendarEntry>, ApiError>>,
    pub documents_resource: Resource<ProfileKey, Result<Vec<FileUploadModel>, ApiError>>,
    pub avatar_resource: Resource<(u32, Option<String>), Option<Vec<u8>>>,
    pub decide_action: Action<(String, LeaveAction), Result<(), ApiError>>,
    pub adjust_action: Action<(String, f64), Result<(), ApiError>>,
    pub upload_document_action: Action<(String, String, Vec<u8>), Result<(), ApiError>>,
    pub rename_document_action: Action<(String, String), Result<(), ApiError>>,
    pub archive_document_action: Action<(String, String), Result<(), ApiError>>,
    pub upload_avatar_action: Action<(String, String, Vec<u8>), Result<(), ApiError>>,
    pub remove_avatar_action: Action<(), Result<(), ApiError>>,
}

impl ProfileViewModel {
    pub fn new(employee_id: Signal<String>) -> Self {
        let repository = store_value(ProfileRepository::new());
        let tab = create_rw_signal(ProfileTab::Leaves);
        let adjust_state = BalanceAdjustState::default();
        let leave_message = create_rw_signal(MessageState::default());
        let document_message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);
        let documents_reload = create_rw_signal(0u32);
        let avatar_reload = create_rw_signal(0u32);

        let employee_resource = create_resource(
            move || (reload.get(), employee_id.get()),
            move |(_, id)| {
                let repo = repository.get_value();
                async move { repo.employee(&id).await }
            },
        );
        let balances_resource = create_resource(
            move || (reload.get(), employee_id.get()),
            move |(_, id)| {
                let repo = repository.get_value();
                async move { repo.balances(&id).await }
            },
        );
        let leaves_resource = create_resource(
            move || (reload.get(), employee_id.get()),
            move |(_, id)| {
                let repo = repository.get_value();
                async move { repo.leaves(&id).await }
            },
        );
        let calendar_resource = create_resource(
            move || employee_id.get(),
            move |id| {
                let repo = repository.get_value();
                async move { repo.calendar(&id).await }
            },
        );
        let documents_resource = create_resource(
            move || (documents_reload.get(), employee_id.get()),
            move |(_, id)| {
                let repo = repository.get_value();
                async move { repo.documents(&id).await }
            },
        );

        let username = Signal::derive(move || {
            employee_resource
                .get()
                .and_then(|result| result.ok())
                .and_then(|employee| employee.user)
        });
        // Missing pictures come back as errors and mean "no avatar yet".
        let avatar_resource = create_resource(
            move || (avatar_reload.get(), username.get()),
            move |(_, username)| {
                let repo = repository.get_value();
                async move {
                    match username {
                        Some(name) => repo.avatar(&name).await.ok(),
                        None => None,
                    }
                }
            },
        );

        let decide_action = create_action(move |input: &(String, LeaveAction)| {
            let repo = repository.get_value();
            let (id, action) = input.clone();
            async move { repo.decide(&id, action).await.map(|_| ()) }
        });
        let adjust_action = create_action(move |input: &(String, f64)| {
            let repo = repository.get_value();
            let (balance_id, value) = input.clone();
            async move { repo.set_balance(&balance_id, value).await.map(|_| ()) }
        });
        let upload_document_action = create_action(move |input: &(String, String, Vec<u8>)| {
            let repo = repository.get_value();
            let id = employee_id.get_untracked();
            let (file_name, mime_type, contents) = input.clone();
            async move {
                repo.upload_document(&id, &file_name, &mime_type, contents)
                    .await
                    .map(|_| ())
            }
        });
        let rename_document_action = create_action(move |input: &(String, String)| {
            let repo = repository.get_value();
            let (file_id, name) = input.clone();
            async move { repo.rename_document(&file_id, &name).await.map(|_| ()) }
        });
        let archive_document_action = create_action(move |input: &(String, String)| {
            let repo = repository.get_value();
            let (file_id, reason) = input.clone();
            async move { repo.archive_document(&file_id, &reason).await.map(|_| ()) }
        });
        let upload_avatar_action = create_action(move |input: &(String, String, Vec<u8>)| {
            let repo = repository.get_value();
            let username = username.get_untracked();
            let (file_name, mime_type, contents) = input.clone();
            async move {
                let name = username
                    .ok_or_else(|| ApiError::validation("This employee has no linked account."))?;
                repo.upload_avatar(&name, &file_name, &mime_type, contents).await
            }
        });
        let remove_avatar_action = create_action(move |_: &()| {
            let repo = repository.get_value();
            let username = username.get_untracked();
            async move {
                let name = username
                    .ok_or_else(|| ApiError::validation("This employee has no linked account."))?;
                repo.remove_avatar(&name).await
            }
        });

        create_effect(move |_| {
            if let Some(result) = decide_action.value().get() {
                match result {
                    Ok(_) => {
                        leave_message.update(|msg| msg.set_success("Decision recorded."));
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(error) => leave_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = adjust_action.value().get() {
                match result {
                    Ok(_) => {
                        leave_message.update(|msg| msg.set_success("Balance updated."));
                        adjust_state.close();
                        reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(error) => leave_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = upload_document_action.value().get() {
                match result {
                    Ok(_) => {
                        document_message.update(|msg| msg.set_success("Document uploaded."));
                        documents_reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(error) => document_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = rename_document_action.value().get() {
                match result {
                    Ok(_) => {
                        document_message.update(|msg| msg.set_success("Document renamed."));
                        documents_reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(error) => document_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = archive_document_action.value().get() {
                match result {
                    Ok(_) => {
                        document_message.update(|msg| msg.set_success("Document archived."));
                        documents_reload.update(|value| *value = value.wrapping_add(1));
                    }
                    Err(error) => document_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = upload_avatar_action.value().get() {
                match result {
                    Ok(_) => avatar_reload.update(|value| *value = value.wrapping_add(1)),
                    Err(error) => leave_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = remove_avatar_action.value().get() {
                match result {
                    Ok(_) => avatar_reload.update(|value| *value = value.wrapping_add(1)),
                    Err(error) => leave_message.update(|msg| msg.set_error(error)),
                }
            }
        });

        Self {
            employee_id,
            tab,
            adjust_state,
            leave_message,
            document_message,
            employee_resource,
            balances_resource,
            leaves_resource,
            calendar_resource,
            documents_resource,
            avatar_resource,
            decide_action,
            adjust_action,
            upload_document_action,
            rename_document_action,
            archive_document_action,
            upload_avatar_action,
            remove_avatar_action,
        }
    }

    /// Validates the adjustment dialog and dispatches the update.
    pub fn submit_adjustment(&self) {
        self.leave_message.update(|msg| msg.clear());
        match self.adjust_state.to_adjustment() {
            Ok((balance_id, value)) => self.adjust_action.dispatch((balance_id, value)),
            Err(error) => self.leave_message.update(|msg| msg.set_error(error)),
        }
    }
}
