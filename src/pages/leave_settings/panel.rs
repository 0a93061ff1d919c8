use crate::pages::leave_settings::{
    components::{holidays_panel::HolidaysPanel, leave_types_panel::LeaveTypesPanel},
    layout::SettingsLayout,
    view_model::SettingsViewModel,
};
use leptos::*;

#[component]
pub fn LeaveSettingsPage() -> impl IntoView {
    let vm = SettingsViewModel::new();
    view! {
        <SettingsLayout>
            <div class="grid grid-cols-1 gap-8 xl:grid-cols-2">
                <LeaveTypesPanel vm=vm/>
                <HolidaysPanel vm=vm/>
            </div>
        </SettingsLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn settings_page_renders_both_panels() {
        let html = render_to_string(|| {
            provide_employee(Some(&[]));
            view! { <LeaveSettingsPage/> }
        });
        assert!(html.contains("Leave types"));
        assert!(html.contains("Holidays"));
    }
}
