use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <Title text="HR dashboard | HRM"/>
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"HR dashboard"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Review pending requests and keep an eye on who is away."
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
