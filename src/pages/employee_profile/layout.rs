use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn ProfileLayout(children: Children) -> impl IntoView {
    view! {
        <Title text="Employee profile | HRM"/>
        <Layout>
            <div class="space-y-6">{children()}</div>
        </Layout>
    }
}
