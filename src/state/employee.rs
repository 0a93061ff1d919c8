use crate::api::{ApiClient, Employee};
use leptos::*;

type EmployeeContext = (ReadSignal<EmployeeState>, WriteSignal<EmployeeState>);

/// The signed-in user's own employee record, fetched once at startup.
#[derive(Debug, Clone, Default)]
pub struct EmployeeState {
    pub employee: Option<Employee>,
    pub loading: bool,
}

fn create_employee_context() -> EmployeeContext {
    let (state, set_state) = create_signal(EmployeeState::default());
    set_state.update(|state| state.loading = true);

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let set_state_for_fetch = set_state;
    spawn_local(async move {
        match api_client.current_employee().await {
            Ok(employee) => set_state_for_fetch.update(|state| {
                state.employee = Some(employee);
                state.loading = false;
            }),
            Err(error) => {
                log::warn!("Failed to load current employee: {}", error);
                set_state_for_fetch.update(|state| {
                    state.employee = None;
                    state.loading = false;
                });
            }
        }
    });

    (state, set_state)
}

#[component]
pub fn EmployeeProvider(children: Children) -> impl IntoView {
    let ctx = create_employee_context();
    provide_context::<EmployeeContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_current_employee() -> EmployeeContext {
    use_context::<EmployeeContext>().unwrap_or_else(|| create_signal(EmployeeState::default()))
}

pub fn use_permission(permission: &'static str) -> Memo<bool> {
    let (state, _) = use_current_employee();
    create_memo(move |_| {
        crate::state::permissions::employee_has_permission(
            state.get().employee.as_ref(),
            permission,
        )
    })
}
