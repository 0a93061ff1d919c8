use crate::pages::leaves::{
    components::{
        activity_list::LeaveActivityList, balance_cards::BalanceCards, leave_form::LeaveRequestForm,
    },
    layout::LeaveLayout,
    view_model::LeaveViewModel,
};
use leptos::*;

#[component]
pub fn LeavePage() -> impl IntoView {
    let vm = LeaveViewModel::new();
    view! {
        <LeaveLayout>
            <BalanceCards vm=vm/>
            <LeaveRequestForm vm=vm/>
            <LeaveActivityList vm=vm/>
        </LeaveLayout>
    }
}
