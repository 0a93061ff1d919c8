use crate::pages::employee_profile::{
    components::{documents_tab::DocumentsTab, leaves_tab::LeavesTab, summary::ProfileSummary},
    layout::ProfileLayout,
    view_model::{ProfileTab, ProfileViewModel},
};
use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn EmployeeProfilePage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.with(|map| map.get("id").cloned()));

    view! {
        <Show
            when=move || id.get().map(|value| !value.is_empty()).unwrap_or(false)
            fallback=|| view! {
                <ProfileLayout>
                    <p class="text-sm text-danger">"No employee selected."</p>
                </ProfileLayout>
            }
        >
            <ProfileContent id=Signal::derive(move || id.get().unwrap_or_default())/>
        </Show>
    }
}

#[component]
fn ProfileContent(id: Signal<String>) -> impl IntoView {
    let vm = ProfileViewModel::new(id);
    let tab_class = move |tab: ProfileTab| {
        move || {
            if vm.tab.get() == tab {
                "border-b-2 border-action-primary-bg px-1 pb-2 text-sm font-medium text-fg"
            } else {
                "border-b-2 border-transparent px-1 pb-2 text-sm font-medium text-fg-muted hover:text-fg"
            }
        }
    };

    view! {
        <ProfileLayout>
            <ProfileSummary vm=vm/>
            <nav class="flex gap-6 border-b border-border">
                <button
                    type="button"
                    class=tab_class(ProfileTab::Leaves)
                    on:click=move |_| vm.tab.set(ProfileTab::Leaves)
                >
                    "Leave"
                </button>
                <button
                    type="button"
                    class=tab_class(ProfileTab::Documents)
                    on:click=move |_| vm.tab.set(ProfileTab::Documents)
                >
                    "Documents"
                </button>
            </nav>
            <Show
                when=move || vm.tab.get() == ProfileTab::Leaves
                fallback=move || view! { <DocumentsTab vm=vm/> }
            >
                <LeavesTab vm=vm/>
            </Show>
        </ProfileLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn profile_content_renders_both_tab_handles() {
        let html = render_to_string(|| {
            provide_employee(Some(&[]));
            view! { <ProfileContent id=Signal::derive(|| "emp-1".to_string())/> }
        });
        assert!(html.contains("Documents"));
        assert!(html.contains("Balances"));
    }
}
