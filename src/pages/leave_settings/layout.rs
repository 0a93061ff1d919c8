use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn SettingsLayout(children: Children) -> impl IntoView {
    view! {
        <Title text="Leave settings | HRM"/>
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Leave settings"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Manage the leave types employees can request and the holiday calendar."
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
