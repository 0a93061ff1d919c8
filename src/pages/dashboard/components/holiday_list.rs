use crate::components::layout::LoadingSpinner;
use crate::pages::dashboard::{utils::upcoming_holidays, view_model::DashboardViewModel};
use crate::utils::time::{format_date, today};
use leptos::*;

const UPCOMING_LIMIT: usize = 5;

#[component]
pub fn HolidayList(vm: DashboardViewModel) -> impl IntoView {
    let upcoming = Signal::derive(move || {
        let holidays = vm
            .holidays_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default();
        upcoming_holidays(&holidays, today(), UPCOMING_LIMIT)
    });
    let loading = vm.holidays_resource.loading();

    view! {
        <section class="space-y-2">
            <h2 class="text-lg font-semibold text-fg">"Upcoming holidays"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !upcoming.get().is_empty()
                    fallback=|| view! { <p class="text-sm text-fg-muted">"No holidays left this year."</p> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                        <For
                            each=move || upcoming.get()
                            key=|holiday| (holiday.id.clone(), holiday.date)
                            children=move |holiday| {
                                view! {
                                    <li class="flex items-center justify-between p-3 text-sm">
                                        <span class="font-medium text-fg">{holiday.name.clone()}</span>
                                        <span class="text-fg-muted">{format_date(holiday.date)}</span>
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
