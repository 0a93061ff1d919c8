use crate::pages::dashboard::{
    components::{
        holiday_list::HolidayList, on_leave_today::OnLeaveToday, request_detail::ReviewQueue,
    },
    layout::DashboardLayout,
    view_model::DashboardViewModel,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = DashboardViewModel::new();
    view! {
        <DashboardLayout>
            <ReviewQueue vm=vm/>
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <OnLeaveToday vm=vm/>
                <HolidayList vm=vm/>
            </div>
        </DashboardLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_renders_its_sections() {
        let html = render_to_string(|| {
            provide_employee(Some(&[]));
            view! { <DashboardPage/> }
        });
        assert!(html.contains("Awaiting review"));
        assert!(html.contains("On leave today"));
        assert!(html.contains("Upcoming holidays"));
    }
}
