use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn LeaveLayout(children: Children) -> impl IntoView {
    view! {
        <Title text="Leave | HRM"/>
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Leave"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Check your balances, request time off and follow up on past requests."
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
