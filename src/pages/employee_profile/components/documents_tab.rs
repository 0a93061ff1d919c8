use crate::api::{ApiError, FileUploadModel};
use crate::components::empty_state::EmptyState;
use crate::components::error::InlineErrorMessage;
use crate::components::layout::{LoadingSpinner, SuccessMessage};
use crate::pages::employee_profile::view_model::ProfileViewModel;
use crate::utils::file_input::read_selected_file;
use leptos::*;

/// Per-row edit affordance: at most one rename or archive is in
/// progress at a time.
#[derive(Clone, PartialEq)]
enum RowEdit {
    Rename { id: String, draft: String },
    Archive { id: String, reason: String },
}

#[component]
pub fn DocumentsTab(vm: ProfileViewModel) -> impl IntoView {
    let documents = Signal::derive(move || {
        vm.documents_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let loading = vm.documents_resource.loading();
    let error = Signal::derive(move || vm.document_message.get().error);
    let success = move || vm.document_message.get().success;
    let uploading = vm.upload_document_action.pending();
    let edit = create_rw_signal(None::<RowEdit>);

    let on_file_picked = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        spawn_local(async move {
            match read_selected_file(&input).await {
                Ok(Some((name, mime_type, contents))) => {
                    vm.upload_document_action.dispatch((name, mime_type, contents));
                }
                Ok(None) => {}
                Err(message) => vm
                    .document_message
                    .update(|msg| msg.set_error(ApiError::validation(message))),
            }
            input.set_value("");
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold text-fg">"Documents"</h2>
                <label class=move || {
                    if uploading.get() {
                        "inline-flex cursor-wait items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text opacity-50"
                    } else {
                        "inline-flex cursor-pointer items-center rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text hover:bg-action-primary-bg-hover"
                    }
                }>
                    "Upload document"
                    <input type="file" class="hidden" on:change=on_file_picked/>
                </label>
            </div>
            {move || success().map(|message| view! { <SuccessMessage message=message/> })}
            <InlineErrorMessage error=error/>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <Show
                    when=move || !documents.get().is_empty()
                    fallback=|| view! { <EmptyState title="No documents" description="Contracts and certificates uploaded here stay with the record."/> }
                >
                    <ul class="divide-y divide-border rounded-lg border border-border bg-surface-elevated">
                        <For
                            each=move || documents.get()
                            key=|document| (document.id.clone(), document.is_archived)
                            children=move |document| {
                                view! { <DocumentRow vm=vm document=document edit=edit/> }
                            }
                        />
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn DocumentRow(
    vm: ProfileViewModel,
    document: FileUploadModel,
    edit: RwSignal<Option<RowEdit>>,
) -> impl IntoView {
    let id = document.id.clone().unwrap_or_default();
    let name = document.name.clone().unwrap_or_else(|| "unnamed".to_string());
    let uploaded = document.created_date.clone().unwrap_or_default();
    let archived = document.is_archived;
    let incomplete = !document.upload_completed;

    let row_id = id.clone();
    let renaming = Signal::derive(move || {
        matches!(edit.get(), Some(RowEdit::Rename { id, .. }) if id == row_id)
    });
    let row_id = id.clone();
    let archiving = Signal::derive(move || {
        matches!(edit.get(), Some(RowEdit::Archive { id, .. }) if id == row_id)
    });
    let idle = Signal::derive(move || !renaming.get() && !archiving.get());

    let rename_draft = Signal::derive(move || match edit.get() {
        Some(RowEdit::Rename { draft, .. }) => draft,
        _ => String::new(),
    });
    let archive_reason = Signal::derive(move || match edit.get() {
        Some(RowEdit::Archive { reason, .. }) => reason,
        _ => String::new(),
    });

    let save_rename = {
        let id = id.clone();
        move || {
            let new_name = rename_draft.get_untracked();
            if new_name.trim().is_empty() {
                vm.document_message.update(|msg| {
                    msg.set_error(ApiError::validation("The document needs a name."))
                });
                return;
            }
            vm.rename_document_action.dispatch((id.clone(), new_name));
            edit.set(None);
        }
    };
    let confirm_archive = {
        let id = id.clone();
        move || {
            let reason = archive_reason.get_untracked();
            if reason.trim().is_empty() {
                vm.document_message.update(|msg| {
                    msg.set_error(ApiError::validation("Archiving needs a reason."))
                });
                return;
            }
            vm.archive_document_action.dispatch((id.clone(), reason));
            edit.set(None);
        }
    };

    view! {
        <li class="flex flex-wrap items-center justify-between gap-4 p-4">
            <div class="min-w-0">
                <Show
                    when=move || renaming.get()
                    fallback={
                        let name = name.clone();
                        move || view! { <p class="truncate text-sm font-medium text-fg">{name.clone()}</p> }
                    }
                >
                    <input
                        type="text"
                        class="rounded-md border border-border bg-surface px-2 py-1 text-sm"
                        prop:value=move || rename_draft.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit.update(|state| {
                                if let Some(RowEdit::Rename { draft, .. }) = state {
                                    *draft = value;
                                }
                            });
                        }
                    />
                </Show>
                <p class="text-xs text-fg-muted">
                    {uploaded}
                    {incomplete.then(|| " (upload incomplete)")}
                </p>
            </div>
            <div class="flex items-center gap-2 text-sm">
                <Show when=move || archived>
                    <span class="rounded-full bg-surface-muted px-2 py-0.5 text-xs font-medium text-fg-muted">
                        "Archived"
                    </span>
                </Show>
                <Show when=move || !archived && idle.get()>
                    <button
                        type="button"
                        class="font-medium text-action-primary-bg hover:underline"
                        on:click={
                            let id = id.clone();
                            let name = name.clone();
                            move |_| edit.set(Some(RowEdit::Rename {
                                id: id.clone(),
                                draft: name.clone(),
                            }))
                        }
                    >
                        "Rename"
                    </button>
                    <button
                        type="button"
                        class="font-medium text-action-danger-bg hover:underline"
                        on:click={
                            let id = id.clone();
                            move |_| edit.set(Some(RowEdit::Archive {
                                id: id.clone(),
                                reason: String::new(),
                            }))
                        }
                    >
                        "Archive"
                    </button>
                </Show>
                <Show when=move || renaming.get()>
                    <button
                        type="button"
                        class="font-medium text-action-primary-bg hover:underline"
                        on:click={
                            let save_rename = save_rename.clone();
                            move |_| save_rename()
                        }
                    >
                        "Save"
                    </button>
                    <button
                        type="button"
                        class="font-medium text-fg-muted hover:underline"
                        on:click=move |_| edit.set(None)
                    >
                        "Discard"
                    </button>
                </Show>
                <Show when=move || archiving.get()>
                    <input
                        type="text"
                        placeholder="Reason for archiving"
                        class="w-56 rounded-md border border-border bg-surface px-2 py-1 text-sm"
                        prop:value=move || archive_reason.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit.update(|state| {
                                if let Some(RowEdit::Archive { reason, .. }) = state {
                                    *reason = value;
                                }
                            });
                        }
                    />
                    <button
                        type="button"
                        class="font-medium text-action-danger-bg hover:underline disabled:opacity-50"
                        disabled=move || archive_reason.get().trim().is_empty()
                        on:click={
                            let confirm_archive = confirm_archive.clone();
                            move |_| confirm_archive()
                        }
                    >
                        "Confirm archive"
                    </button>
                    <button
                        type="button"
                        class="font-medium text-fg-muted hover:underline"
                        on:click=move |_| edit.set(None)
                    >
                        "Discard"
                    </button>
                </Show>
            </div>
        </li>
    }
}
