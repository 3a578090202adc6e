use super::config::{EntityScreenConfig, ScreenPhase};
use super::mutation::WriteOp;
use crate::shared::api::ApiError;
use crate::shared::components::data_table::{DataTable, RowActions, RowData};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Badge, BadgeTone, Select, Textarea};
use crate::shared::dialog::{Dialog, DialogState};
use crate::shared::form::{FieldErrors, FormSchema, FormValues, SchemaForm};
use crate::shared::i18n::{fill, tr, trf, Msg};
use crate::shared::icons::icon;
use crate::shared::list_state::{ListController, ListState};
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::query::{QueryClient, QueryKey};
use crate::shared::toast::use_toasts;
use crate::system::session::use_app;
use contracts::domain::common::{record_id, EntityRecord, StatusChange};
use contracts::shared::api::ListPage;
use contracts::shared::pagination::PaginationState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use std::sync::Arc;
use thaw::{Button, ButtonAppearance};

/// Decode a raw page into table rows, keeping each raw record next to its
/// typed form.
///
/// A record that does not decode is left out of the page. A non-empty page
/// where no record decodes means the server speaks a different contract.
pub fn into_rows<T: EntityRecord>(
    page: ListPage<Value>,
) -> Result<(Vec<RowData<T>>, PaginationState), ApiError> {
    let pagination = page.pagination;
    let received = page.items.len();
    let mut first_error = None;
    let mut rows = Vec::with_capacity(received);
    for (index, fields) in page.items.into_iter().enumerate() {
        match record_id::decode_record::<T>(&fields) {
            Ok(record) => rows.push(RowData::new(index, fields, record)),
            Err(e) => {
                log::warn!(
                    "skipping {} record {:?}: {}",
                    T::KIND.cache_name(),
                    record_id::from_value(&fields),
                    e
                );
                if first_error.is_none() {
                    first_error = Some(e.to_string());
                }
            }
        }
    }
    match first_error {
        Some(e) if rows.is_empty() && received > 0 => Err(ApiError::Decode(e)),
        _ => Ok((rows, pagination)),
    }
}

/// List, filter, paginate, create, edit, delete and change the status of one
/// record type.
///
/// Reads go through the shared [`QueryClient`]; writes are pessimistic and
/// the table only changes after the server confirmed and the entity's pages
/// were refetched.
#[component]
pub fn EntityScreen<T>(config: EntityScreenConfig<T>) -> impl IntoView
where
    T: EntityRecord,
{
    let app = use_app();
    let toasts = use_toasts();
    let client = StoredValue::new(use_context::<QueryClient>().expect("QueryClient not provided"));

    let kind = config.kind;
    let default_limit = app.config.with_value(|c| c.default_limit);
    let page_sizes = app.config.with_value(|c| c.page_size_options.clone());
    let config = StoredValue::new(config);

    let state = RwSignal::new(ListState::new(default_limit));
    let rows = RwSignal::new(Vec::<RowData<T>>::new());
    let pagination = RwSignal::new(PaginationState::new(1, default_limit, 0));
    let loading = RwSignal::new(true);
    let failed = RwSignal::new(false);
    // An unreadable list is handed to the surrounding error boundary.
    let fatal = RwSignal::new(None::<ApiError>);
    let reload = RwSignal::new(0u64);
    let controller = StoredValue::new(ListController::default());
    let filters_open = RwSignal::new(false);

    let dialog = RwSignal::new(DialogState::default());
    let form_values = RwSignal::new(FormValues::new());
    let form_errors = RwSignal::new(FieldErrors::new());
    let status_value = RwSignal::new(String::new());
    let status_note = RwSignal::new(String::new());

    let item_name = move |lang| config.with_value(|c| c.item_name.get(lang));
    let form_defaults =
        move || config.with_value(|c| c.form.as_ref().map(FormSchema::defaults)).unwrap_or_default();

    // Every change of the list state, and every confirmed write, issues one
    // query. Only the response of the latest query reaches the table.
    Effect::new(move |_| {
        let query = state.with(|s| s.query());
        reload.track();
        let key = QueryKey::new(kind, &query);
        let ticket = controller
            .try_update_value(|c| c.begin(key.clone()))
            .unwrap_or_default();
        loading.set(true);

        let client = client.get_value();
        spawn_local(async move {
            let result = client.fetch_page(&key).await.and_then(into_rows::<T>);
            if !controller.try_with_value(|c| c.accepts(ticket)).unwrap_or(false) {
                log::debug!("dropping superseded response for {}", key.path());
                return;
            }

            match result {
                Ok((page_rows, page)) => {
                    failed.set(false);
                    fatal.set(None);
                    rows.set(page_rows);
                    pagination.set(page);
                    // The last page can vanish under us (delete, shrinking filter).
                    if let Some(mut next) = state.try_get_untracked() {
                        if next.apply_server_page(&page) {
                            state.set(next);
                        }
                    }
                }
                Err(e) => {
                    log::error!("fetching {} failed: {}", key.path(), e);
                    failed.set(true);
                    rows.set(Vec::new());
                    pagination.set(PaginationState::new(query.page, query.limit, 0));
                    if e.is_fatal() {
                        fatal.set(Some(e));
                        loading.set(false);
                        return;
                    }
                    let lang = app.language.get_untracked();
                    let name = config
                        .try_with_value(|c| c.title().get(lang).to_lowercase())
                        .unwrap_or_default();
                    toasts.destructive(
                        trf(lang, Msg::FetchFailed, &[&name]),
                        e.server_message().map(str::to_string),
                    );
                }
            }
            loading.set(false);
        });
    });

    let phase = Memo::new(move |_| ScreenPhase::of(loading.get(), failed.get(), rows.with(|r| r.len())));

    let submit = move |op: WriteOp| {
        if !dialog.try_update(|d| d.begin_submit()).unwrap_or(false) {
            return;
        }
        let client = client.get_value();
        spawn_local(async move {
            let result = op.run(&client, kind).await;
            let lang = app.language.get_untracked();
            let item = config.try_with_value(|c| c.item_name.get(lang)).unwrap_or_default();
            match &result {
                Ok(_) => {
                    toasts.success(op.success_message(lang, item));
                    if op.is_create() {
                        let defaults = config
                            .try_with_value(|c| c.form.as_ref().map(FormSchema::defaults))
                            .flatten()
                            .unwrap_or_default();
                        let _ = form_values.try_set(defaults);
                    }
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    let (title, description) = op.failure_message(lang, item, e);
                    toasts.destructive(title, description);
                }
            }
            dialog.update(|d| d.finish(result.is_ok()));
        });
    };

    let open_create = move || {
        form_values.set(form_defaults());
        form_errors.set(FieldErrors::new());
        dialog.update(|d| d.open(Dialog::Create));
    };

    let open_edit = move |id: String, record: &Value| {
        let values = config
            .with_value(|c| c.form.as_ref().map(|f| f.from_record(record)))
            .unwrap_or_default();
        form_values.set(values);
        form_errors.set(FieldErrors::new());
        dialog.update(|d| d.open(Dialog::Edit { id }));
    };

    let open_status = move |id: String, current: String| {
        let initial = if current.is_empty() {
            config
                .with_value(|c| c.status_options.first().map(|o| o.value.to_string()))
                .unwrap_or_default()
        } else {
            current.clone()
        };
        status_value.set(initial);
        status_note.set(String::new());
        dialog.update(|d| d.open(Dialog::ChangeStatus { id, current }));
    };

    let close = Callback::new(move |_: ()| {
        if dialog.try_update(|d| d.close()).unwrap_or(false) {
            form_errors.set(FieldErrors::new());
        }
    });

    let save_form = move || {
        let Some(schema) = config.with_value(|c| c.form.clone()) else {
            return;
        };
        match schema.validate(&form_values.get_untracked()) {
            Err(errors) => form_errors.set(errors),
            Ok(payload) => {
                let payload = Value::Object(payload);
                let op = match dialog.with_untracked(|d| d.dialog().clone()) {
                    Dialog::Edit { id } => WriteOp::Update { id, payload },
                    _ => WriteOp::Create(payload),
                };
                submit(op);
            }
        }
    };

    let save_status = move |id: String| {
        let change = StatusChange::new(status_value.get_untracked())
            .with_note(status_note.get_untracked())
            .with_actor(app.actor_id());
        submit(WriteOp::Status { id, change });
    };

    let row_actions: Option<RowActions<T>> = config.with_value(|c| c.has_row_actions()).then(|| {
        let (can_edit, can_delete, has_status) =
            config.with_value(|c| (c.can_edit(), c.allow_delete, c.has_status_workflow()));
        Arc::new(move |record: &T| {
            let Some(id) = record.record_id().map(str::to_string) else {
                return ().into_any();
            };
            let label = record.display_label();
            let current = record.status().unwrap_or_default().to_string();
            let raw = serde_json::to_value(record).unwrap_or(Value::Null);

            let edit_button = can_edit.then(|| {
                let id = id.clone();
                view! {
                    <button
                        class="button button--icon"
                        title=move || tr(app.language.get(), Msg::Edit)
                        on:click=move |_| open_edit(id.clone(), &raw)
                    >
                        {icon("edit")}
                    </button>
                }
            });
            let status_button = has_status.then(|| {
                let id = id.clone();
                view! {
                    <button
                        class="button button--icon"
                        title=move || tr(app.language.get(), Msg::ChangeStatus)
                        on:click=move |_| open_status(id.clone(), current.clone())
                    >
                        {icon("status")}
                    </button>
                }
            });
            let delete_button = can_delete.then(|| {
                view! {
                    <button
                        class="button button--icon button--danger"
                        title=move || tr(app.language.get(), Msg::Delete)
                        on:click=move |_| {
                            let dialog_kind = Dialog::ConfirmDelete {
                                id: id.clone(),
                                label: label.clone(),
                            };
                            dialog.update(|d| d.open(dialog_kind));
                        }
                    >
                        {icon("delete")}
                    </button>
                }
            });

            view! {
                <div class="table__actions">
                    {edit_button}
                    {status_button}
                    {delete_button}
                </div>
            }
            .into_any()
        }) as RowActions<T>
    });

    let submitting = Signal::derive(move || dialog.with(|d| d.is_submitting()));
    let open_dialog = Memo::new(move |_| dialog.with(|d| d.dialog().clone()));

    let save_label = move || {
        let lang = app.language.get();
        if submitting.get() {
            tr(lang, Msg::Saving)
        } else {
            tr(lang, Msg::Save)
        }
    };

    let cancel_button = move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=submitting
                on_click=move |_| close.run(())
            >
                {move || tr(app.language.get(), Msg::Cancel)}
            </Button>
        }
    };

    let dialog_view = move || match open_dialog.get() {
        Dialog::Closed => ().into_any(),
        current @ (Dialog::Create | Dialog::Edit { .. }) => {
            let Some(schema) = config.with_value(|c| c.form.clone()) else {
                return ().into_any();
            };
            let action = if matches!(current, Dialog::Edit { .. }) {
                Msg::Edit
            } else {
                Msg::Create
            };
            let title = Signal::derive(move || {
                let lang = app.language.get();
                format!("{} - {}", tr(lang, action), item_name(lang))
            });
            view! {
                <Modal
                    title=title
                    on_close=close
                    footer=ToChildren::to_children(move || view! {
                        {cancel_button()}
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=submitting
                            on_click=move |_| save_form()
                        >
                            {save_label}
                        </Button>
                    })
                >
                    <SchemaForm schema=schema values=form_values errors=form_errors disabled=submitting />
                </Modal>
            }
            .into_any()
        }
        Dialog::ConfirmDelete { id, label } => {
            let id = StoredValue::new(id);
            let title = Signal::derive(move || tr(app.language.get(), Msg::ConfirmDeleteTitle).to_string());
            view! {
                <Modal
                    title=title
                    on_close=close
                    footer=ToChildren::to_children(move || view! {
                        {cancel_button()}
                        <Button
                            appearance=ButtonAppearance::Primary
                            class="button--danger"
                            disabled=submitting
                            on_click=move |_| submit(WriteOp::Delete { id: id.get_value() })
                        >
                            {move || tr(app.language.get(), Msg::Delete)}
                        </Button>
                    })
                >
                    <p class="modal__message">
                        {move || fill(tr(app.language.get(), Msg::ConfirmDeleteBody), &[&label])}
                    </p>
                </Modal>
            }
            .into_any()
        }
        Dialog::ChangeStatus { id, .. } => {
            let id = StoredValue::new(id);
            let title = Signal::derive(move || {
                let lang = app.language.get();
                format!("{} - {}", tr(lang, Msg::ChangeStatus), item_name(lang))
            });
            let options = Signal::derive(move || {
                let lang = app.language.get();
                config.with_value(|c| {
                    c.status_options
                        .iter()
                        .map(|o| (o.value.to_string(), o.label.get(lang).to_string()))
                        .collect::<Vec<_>>()
                })
            });
            let has_note = kind.status_fields().is_some();
            view! {
                <Modal
                    title=title
                    on_close=close
                    footer=ToChildren::to_children(move || view! {
                        {cancel_button()}
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=submitting
                            on_click=move |_| save_status(id.get_value())
                        >
                            {save_label}
                        </Button>
                    })
                >
                    <div class="form">
                        <Select
                            id="status-select"
                            label=Signal::derive(move || tr(app.language.get(), Msg::Status).to_string())
                            value=status_value
                            options=options
                            on_change=Callback::new(move |v: String| status_value.set(v))
                            disabled=submitting
                        />
                        {has_note.then(|| view! {
                            <Textarea
                                id="status-note"
                                label=Signal::derive(move || tr(app.language.get(), Msg::Note).to_string())
                                value=status_note
                                on_input=Callback::new(move |v: String| status_note.set(v))
                                disabled=submitting
                            />
                        })}
                    </div>
                </Modal>
            }
            .into_any()
        }
    };

    let title = Signal::derive(move || config.with_value(|c| c.title().get(app.language.get()).to_string()));
    let active_filters = Signal::derive(move || state.with(|s| s.active_filter_count()));

    view! {
        <PageFrame
            section_key=kind.cache_name()
            category=PageCategory::List
            title=title
            actions=ToChildren::to_children(move || view! {
                <Badge tone=BadgeTone::Primary class="page__total">
                    {move || {
                        let lang = app.language.get();
                        format!("{}: {}", tr(lang, Msg::Total), pagination.get().total())
                    }}
                </Badge>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| {
                        client.with_value(|c| c.invalidate(kind));
                        reload.update(|n| *n += 1);
                    }
                >
                    {icon("refresh")}
                    {move || tr(app.language.get(), Msg::Refresh)}
                </Button>
                {config.with_value(|c| c.can_create()).then(|| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        {move || tr(app.language.get(), Msg::Create)}
                    </Button>
                })}
            })
        >
            <FilterPanel
                is_expanded=filters_open
                active_filters_count=active_filters
                on_reset=Callback::new(move |_| state.update(|s| s.reset_filters()))
                header_content=ToChildren::to_children(move || view! {
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search().to_string()))
                        on_change=Callback::new(move |text: String| state.update(|s| s.set_search(&text)))
                        placeholder=Signal::derive(move || tr(app.language.get(), Msg::Search).to_string())
                    />
                })
            >
                <div class="filter-panel__fields">
                    {move || config.with_value(|c| c.filters.clone()).into_iter().map(|filter| {
                        let key = filter.key;
                        let filter = StoredValue::new(filter);
                        let label = Signal::derive(move || {
                            filter.with_value(|f| f.label.get(app.language.get()).to_string())
                        });
                        let options = Signal::derive(move || {
                            let lang = app.language.get();
                            filter.with_value(|f| f.select_options(lang, tr(lang, Msg::All)))
                        });
                        view! {
                            <Select
                                id=format!("filter-{}", key)
                                label=label
                                value=Signal::derive(move || state.with(|s| s.filter(key).to_string()))
                                options=options
                                on_change=Callback::new(move |value: String| {
                                    state.update(|s| s.set_filter(key, &value))
                                })
                            />
                        }
                    }).collect_view()}
                </div>
            </FilterPanel>

            <div class="entity-screen" data-phase=move || format!("{:?}", phase.get()).to_lowercase()>
                <DataTable
                    columns=config.with_value(|c| c.columns.clone())
                    rows=rows
                    loading=loading
                    limit=Signal::derive(move || state.with(|s| s.limit()))
                    row_actions=row_actions
                />
            </div>

            <PaginationControls
                pagination=pagination
                on_page_change=Callback::new(move |page: u64| state.update(|s| s.set_page(page)))
                on_limit_change=Callback::new(move |limit: u64| state.update(|s| s.set_limit(limit)))
                page_size_options=page_sizes
            />

            {dialog_view}
            {move || fatal.get().map_or(Ok(()), Err)}
        </PageFrame>
    }
}
