use crate::components::layout::LoadingSpinner;
use crate::pages::dashboard::{utils::on_leave_on, view_model::DashboardViewModel};
use crate::utils::time::{format_date, today};
use leptos::*;

#[component]
pub fn OnLeaveToday(vm: DashboardViewModel) -> impl IntoView {
    let away = Signal::derive(move || {
        let approved = vm
            .approved_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default();
        on_leave_on(&approved, today())
    });
    let loading = vm.approved_resource.loading();

    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-semibold text-fg">"On leave today"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !away.get().is_empty()
                    fallback=|| view! { <p class="text-sm text-fg-muted">"Everyone is in today."</p> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                        <For
                            each=move || away.get()
                            key=|request| request.id.clone()
                            children=move |request| {
                                let who = request
                                    .employee_name
                                    .clone()
                                    .unwrap_or_else(|| request.employee.clone());
                                let until = format!("back after {}", format_date(request.end_date));
                                view! {
                                    <li class="flex items-center justify-between p-3 text-sm">
                                        <span class="font-medium text-fg">{who}</span>
                                        <span class="text-fg-muted">{until}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
