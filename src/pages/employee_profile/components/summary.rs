use crate::api::ApiError;
use crate::components::layout::LoadingSpinner;
use crate::pages::employee_profile::view_model::ProfileViewModel;
use crate::utils::download::bytes_to_object_url;
use crate::utils::file_input::read_selected_file;
use crate::utils::time::format_date;
use leptos::*;

/// Up to two initials from a display name, for the avatar fallback.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[component]
pub fn ProfileSummary(vm: ProfileViewModel) -> impl IntoView {
    let employee = Signal::derive(move || {
        vm.employee_resource.get().and_then(|result| result.ok())
    });
    let loading = vm.employee_resource.loading();
    let has_account = Signal::derive(move || {
        employee
            .get()
            .map(|employee| employee.user.is_some())
            .unwrap_or(false)
    });
    let has_avatar = Signal::derive(move || {
        vm.avatar_resource.get().flatten().is_some()
    });
    // Browsers sniff the real image type from the bytes.
    let avatar_url = create_memo(move |previous: Option<&Option<String>>| {
        if let Some(Some(old)) = previous {
            let _ = web_sys::Url::revoke_object_url(old);
        }
        vm.avatar_resource
            .get()
            .flatten()
            .and_then(|bytes| bytes_to_object_url(&bytes, "image/png").ok())
    });

    let on_avatar_picked = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        spawn_local(async move {
            match read_selected_file(&input).await {
                Ok(Some((name, mime_type, contents))) => {
                    vm.upload_avatar_action.dispatch((name, mime_type, contents));
                }
                Ok(None) => {}
                Err(message) => vm
                    .leave_message
                    .update(|msg| msg.set_error(ApiError::validation(message))),
            }
            input.set_value("");
        });
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
            {move || employee.get().map(|employee| {
                let name = employee.full_name.clone();
                let fallback_initials = initials(&name);
                view! {
                    <section class="flex flex-wrap items-start gap-6 rounded-lg border border-border bg-surface-elevated p-6">
                        <div class="flex flex-col items-center gap-2">
                            {move || match avatar_url.get() {
                                Some(url) => view! {
                                    <img src=url alt="Profile picture" class="h-20 w-20 rounded-full object-cover"/>
                                }.into_view(),
                                None => view! {
                                    <div class="flex h-20 w-20 items-center justify-center rounded-full bg-surface-muted text-2xl font-semibold text-fg-muted">
                                        {fallback_initials.clone()}
                                    </div>
                                }.into_view(),
                            }}
                            <Show when=move || has_account.get()>
                                <label class="cursor-pointer text-xs font-medium text-action-primary-bg hover:underline">
                                    "Change photo"
                                    <input
                                        type="file"
                                        accept="image/*"
                                        class="hidden"
                                        on:change=on_avatar_picked
                                    />
                                </label>
                                <Show when=move || has_avatar.get()>
                                    <button
                                        type="button"
                                        class="text-xs font-medium text-action-danger-bg hover:underline"
                                        on:click=move |_| vm.remove_avatar_action.dispatch(())
                                    >
                                        "Remove photo"
                                    </button>
                                </Show>
                            </Show>
                        </div>
                        <div class="min-w-0 flex-1">
                            <h1 class="text-2xl font-bold text-fg">{name.clone()}</h1>
                            <dl class="mt-3 grid grid-cols-1 gap-x-8 gap-y-2 text-sm sm:grid-cols-2">
                                <div>
                                    <dt class="text-fg-muted">"Email"</dt>
                                    <dd class="text-fg">{employee.email.clone().unwrap_or_default()}</dd>
                                </div>
                                <div>
                                    <dt class="text-fg-muted">"Department"</dt>
                                    <dd class="text-fg">{employee.department.clone().unwrap_or_default()}</dd>
                                </div>
                                <div>
                                    <dt class="text-fg-muted">"Role"</dt>
                                    <dd class="text-fg">{employee.role.clone().unwrap_or_default()}</dd>
                                </div>
                                <div>
                                    <dt class="text-fg-muted">"Hired"</dt>
                                    <dd class="text-fg">{employee.hire_date.map(format_date).unwrap_or_default()}</dd>
                                </div>
                                <div>
                                    <dt class="text-fg-muted">"Phone"</dt>
                                    <dd class="text-fg">{employee.phone_number.clone().unwrap_or_default()}</dd>
                                </div>
                            </dl>
                        </div>
                    </section>
                }
            })}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn two_word_names_use_both_initials() {
        assert_eq!(initials("Ada Lovelace"), "AL");
    }

    #[test]
    fn long_names_are_capped_at_two() {
        assert_eq!(initials("Jean Luc Picard"), "JL");
    }

    #[test]
    fn single_names_and_blanks_degrade() {
        assert_eq!(initials("Plato"), "P");
        assert_eq!(initials("  "), "");
    }
}
