use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn EmployeesLayout(children: Children) -> impl IntoView {
    view! {
        <Title text="Employees | HRM"/>
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Employees"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Browse the directory, keep records up to date and export the roster."
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
