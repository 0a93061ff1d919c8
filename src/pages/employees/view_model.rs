use crate::api::{ApiError, Employee, EmployeePayload, PaginatedResponse, DEFAULT_PAGE_SIZE};
use crate::pages::employees::{repository::EmployeesRepository, utils::EmployeeFormState};
use crate::pages::message::MessageState;
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub form_state: EmployeeFormState,
    pub form_open: RwSignal<bool>,
    pub form_message: RwSignal<MessageState>,
    pub list_message: RwSignal<MessageState>,
    pub search_term: RwSignal<String>,
    pub page: RwSignal<u64>,
    pub directory: RwSignal<PaginatedResponse<Employee>>,
    pub directory_loading: Signal<bool>,
    pub search_action: Action<String, Result<Option<PaginatedResponse<Employee>>, ApiError>>,
    pub page_action: Action<u64, Result<PaginatedResponse<Employee>, ApiError>>,
    pub create_action: Action<EmployeePayload, Result<(), ApiError>>,
    pub update_action: Action<(String, EmployeePayload), Result<(), ApiError>>,
    pub export_action: Action<(), Result<Vec<u8>, ApiError>>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let repository = store_value(EmployeesRepository::new());

        let form_state = EmployeeFormState::default();
        let form_open = create_rw_signal(false);
        let form_message = create_rw_signal(MessageState::default());
        let list_message = create_rw_signal(MessageState::default());
        let search_term = create_rw_signal(String::new());
        let page = create_rw_signal(0u64);
        let directory = create_rw_signal(PaginatedResponse::<Employee>::default());

        let search_action = create_action(move |term: &String| {
            let repo = repository.get_value();
            let term = term.clone();
            async move { repo.search(term).await }
        });
        let page_action = create_action(move |page: &u64| {
            let repo = repository.get_value();
            let page = *page;
            let term = search_term.get_untracked();
            async move { repo.page(term, page).await }
        });
        let create_action = create_action(move |payload: &EmployeePayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.create(payload).await.map(|_| ()) }
        });
        let update_action = leptos::create_action(move |input: &(String, EmployeePayload)| {
            let repo = repository.get_value();
            let (id, payload) = input.clone();
            async move { repo.update(&id, payload).await.map(|_| ()) }
        });
        let export_action = leptos::create_action(move |_: &()| {
            let repo = repository.get_value();
            async move { repo.export_csv().await }
        });

        let directory_loading = Signal::derive(move || {
            search_action.pending().get() || page_action.pending().get()
        });

        // Newest search wins; stale ones come back as None and are dropped.
        create_effect(move |_| {
            if let Some(result) = search_action.value().get() {
                match result {
                    Ok(Some(results)) => {
                        directory.set(results);
                        page.set(0);
                    }
                    Ok(None) => {}
                    Err(error) => list_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = page_action.value().get() {
                match result {
                    Ok(results) => directory.set(results),
                    Err(error) => list_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = create_action.value().get() {
                match result {
                    Ok(_) => {
                        form_message.update(|msg| msg.set_success("Employee created."));
                        form_state.reset();
                        form_open.set(false);
                        page_action.dispatch(page.get_untracked());
                    }
                    Err(error) => form_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = update_action.value().get() {
                match result {
                    Ok(_) => {
                        form_message.update(|msg| msg.set_success("Employee updated."));
                        form_state.reset();
                        form_open.set(false);
                        page_action.dispatch(page.get_untracked());
                    }
                    Err(error) => form_message.update(|msg| msg.set_error(error)),
                }
            }
        });
        create_effect(move |_| {
            if let Some(result) = export_action.value().get() {
                match result {
                    Ok(_bytes) => {
                        #[cfg(target_arch = "wasm32")]
                        if let Err(message) = crate::utils::download::trigger_file_download(
                            "employees.csv",
                            &_bytes,
                            "text/csv",
                        ) {
                            list_message
                                .update(|msg| msg.set_error(ApiError::unknown(message)));
                        }
                    }
                    Err(error) => list_message.update(|msg| msg.set_error(error)),
                }
            }
        });

        // Initial page load.
        page_action.dispatch(0);

        Self {
            form_state,
            form_open,
            form_message,
            list_message,
            search_term,
            page,
            directory,
            directory_loading,
            search_action,
            page_action,
            create_action,
            update_action,
            export_action,
        }
    }

    pub fn on_search_input(&self, term: String) {
        self.search_term.set(term.clone());
        self.search_action.dispatch(term);
    }

    pub fn total_pages(&self) -> u64 {
        let count = self.directory.get().count;
        count.div_ceil(DEFAULT_PAGE_SIZE).max(1)
    }

    pub fn go_to_page(&self, page: u64) {
        self.page.set(page);
        self.page_action.dispatch(page);
    }

    pub fn submit_form(&self) {
        self.form_message.update(|msg| msg.clear());
        let payload = match self.form_state.to_payload() {
            Ok(payload) => payload,
            Err(error) => {
                self.form_message.update(|msg| msg.set_error(error));
                return;
            }
        };
        match self.form_state.editing_signal().get_untracked() {
            Some(id) => self.update_action.dispatch((id, payload)),
            None => self.create_action.dispatch(payload),
        }
    }
}

impl Default for EmployeesViewModel {
    fn default() -> Self {
        Self::new()
    }
}
