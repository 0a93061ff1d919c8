use crate::api::ApiError;
use leptos::*;

/// Field errors from the backend cause body, flattened for display.
fn field_messages(error: &ApiError) -> Vec<String> {
    let Some(cause) = error.cause.as_ref().and_then(|value| value.as_object()) else {
        return Vec::new();
    };
    cause
        .iter()
        .flat_map(|(field, messages)| match messages {
            serde_json::Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str())
                .map(|message| format!("{}: {}", field, message))
                .collect::<Vec<_>>(),
            serde_json::Value::String(message) => vec![format!("{}: {}", field, message)],
            _ => Vec::new(),
        })
        .collect()
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().map(|e| !e.silent).unwrap_or(false) fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let messages = field_messages(&e);
                    if messages.is_empty() {
                        ().into_view()
                    } else {
                        view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|message| {
                                    view! { <li>{message}</li> }
                                }).collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                })}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_messages_flatten_array_bodies() {
        let error = ApiError::http(
            422,
            Some(json!({
                "start_date": ["This field is required."],
                "end_date": ["Must be after start date."]
            })),
            false,
        );
        let mut messages = field_messages(&error);
        messages.sort();
        assert_eq!(
            messages,
            vec![
                "end_date: Must be after start date.".to_string(),
                "start_date: This field is required.".to_string(),
            ]
        );
    }

    #[test]
    fn field_messages_are_empty_without_a_cause() {
        assert!(field_messages(&ApiError::request_failed("offline")).is_empty());
    }
}
