//! Entity-agnostic table driven by column descriptors.

use crate::shared::i18n::{tr, Msg};
use crate::system::session::use_app;
use contracts::domain::common::record_id;
use contracts::shared::language::Bilingual;
use leptos::prelude::*;
use serde_json::Value;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

pub type CellRenderer<T> = Arc<dyn Fn(&Value, &T) -> AnyView + Send + Sync>;
pub type RowActions<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

const MAX_SKELETON_ROWS: u64 = 10;

/// One column: the field it reads, its header, and an optional renderer
/// that receives the raw field value and the whole record.
pub struct ColumnDescriptor<T> {
    pub key: &'static str,
    pub label: Bilingual,
    pub render: Option<CellRenderer<T>>,
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            render: self.render.clone(),
        }
    }
}

impl<T> ColumnDescriptor<T> {
    pub fn new(key: &'static str, label: Bilingual) -> Self {
        Self { key, label, render: None }
    }

    pub fn render(mut self, render: impl Fn(&Value, &T) -> AnyView + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }
}

/// Add `column`, replacing an earlier one with the same key so keys stay
/// unique within a table.
pub fn push_column<T>(columns: &mut Vec<ColumnDescriptor<T>>, column: ColumnDescriptor<T>) {
    if let Some(existing) = columns.iter_mut().find(|c| c.key == column.key) {
        log::warn!("duplicate table column '{}' replaced", column.key);
        *existing = column;
    } else {
        columns.push(column);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    /// Position in the page; only used when the record has no id.
    Index(usize),
}

pub fn row_key(fields: &Value, index: usize) -> RowKey {
    record_id::from_value(fields)
        .map(RowKey::Id)
        .unwrap_or(RowKey::Index(index))
}

/// A raw record next to its typed form.
#[derive(Debug, Clone)]
pub struct RowData<T> {
    pub key: RowKey,
    pub fields: Value,
    pub record: T,
    fingerprint: u64,
}

impl<T> RowData<T> {
    pub fn new(index: usize, fields: Value, record: T) -> Self {
        let mut hasher = DefaultHasher::new();
        fields.to_string().hash(&mut hasher);
        Self {
            key: row_key(&fields, index),
            fields,
            record,
            fingerprint: hasher.finish(),
        }
    }

    /// Identity for keyed rendering: an edited row re-renders, an unchanged
    /// one is kept.
    pub fn render_key(&self) -> (RowKey, u64) {
        (self.key.clone(), self.fingerprint)
    }

    pub fn field(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&Value::Null)
    }
}

/// Text of a field rendered without a custom renderer.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => "—".to_string(),
        Value::String(s) if s.trim().is_empty() => "—".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "✓".to_string(),
        Value::Bool(false) => "✗".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(cell_text).collect::<Vec<_>>().join(", "),
        Value::Object(_) => value.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPlan {
    Skeleton(u64),
    Empty,
    Rows,
}

pub fn body_plan(loading: bool, limit: u64, row_count: usize) -> BodyPlan {
    if loading {
        BodyPlan::Skeleton(limit.clamp(1, MAX_SKELETON_ROWS))
    } else if row_count == 0 {
        BodyPlan::Empty
    } else {
        BodyPlan::Rows
    }
}

#[component]
pub fn DataTable<T>(
    columns: Vec<ColumnDescriptor<T>>,
    #[prop(into)] rows: Signal<Vec<RowData<T>>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] limit: Signal<u64>,
    #[prop(optional_no_strip)] row_actions: Option<RowActions<T>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let app = use_app();
    let has_actions = row_actions.is_some();
    let col_count = columns.len() + usize::from(has_actions);
    let columns = StoredValue::new(columns);
    let row_actions = StoredValue::new(row_actions);

    let plan = Memo::new(move |_| body_plan(loading.get(), limit.get(), rows.with(|r| r.len())));

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {columns.with_value(|cols| cols.iter().map(|col| {
                            let label = col.label;
                            view! {
                                <TableHeaderCell resizable=false>
                                    {move || label.get(app.language.get())}
                                </TableHeaderCell>
                            }
                        }).collect_view())}
                        {has_actions.then(|| view! {
                            <TableHeaderCell resizable=false class="table__actions-header">
                                {move || tr(app.language.get(), Msg::Actions)}
                            </TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || match plan.get() {
                        BodyPlan::Skeleton(n) => (0..n).map(|_| view! {
                            <TableRow class="table__row--skeleton">
                                {(0..col_count).map(|_| view! {
                                    <TableCell>
                                        <div class="skeleton skeleton--pulse"></div>
                                    </TableCell>
                                }).collect_view()}
                            </TableRow>
                        }).collect_view().into_any(),
                        BodyPlan::Empty => view! {
                            <TableRow>
                                <TableCell attr:colspan=col_count.to_string()>
                                    <div class="table__empty">
                                        <strong>{move || tr(app.language.get(), Msg::NoData)}</strong>
                                        <span class="table__empty-hint">
                                            {move || tr(app.language.get(), Msg::NoDataHint)}
                                        </span>
                                    </div>
                                </TableCell>
                            </TableRow>
                        }.into_any(),
                        BodyPlan::Rows => view! {
                            <For
                                each=move || rows.get()
                                key=|row| row.render_key()
                                children=move |row| {
                                    let cells = columns.with_value(|cols| cols.iter().map(|col| {
                                        let value = row.field(col.key).clone();
                                        let content = match &col.render {
                                            Some(render) => render(&value, &row.record),
                                            None => view! { <span>{cell_text(&value)}</span> }.into_any(),
                                        };
                                        view! {
                                            <TableCell>
                                                <TableCellLayout truncate=true>{content}</TableCellLayout>
                                            </TableCell>
                                        }
                                    }).collect_view());
                                    let actions = row_actions.with_value(|actions| {
                                        actions.as_ref().map(|render| {
                                            let buttons = render(&row.record);
                                            view! { <TableCell class="table__actions">{buttons}</TableCell> }
                                        })
                                    });
                                    view! { <TableRow>{cells}{actions}</TableRow> }
                                }
                            />
                        }.into_any(),
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_key_prefers_id_then_index() {
        assert_eq!(row_key(&json!({"id": "n-1"}), 4), RowKey::Id("n-1".to_string()));
        assert_eq!(row_key(&json!({"_id": "65f"}), 4), RowKey::Id("65f".to_string()));
        assert_eq!(row_key(&json!({"title": "x"}), 4), RowKey::Index(4));
    }

    #[test]
    fn test_body_plan() {
        assert_eq!(body_plan(true, 50, 0), BodyPlan::Skeleton(10));
        assert_eq!(body_plan(true, 3, 12), BodyPlan::Skeleton(3));
        assert_eq!(body_plan(false, 10, 0), BodyPlan::Empty);
        assert_eq!(body_plan(false, 10, 2), BodyPlan::Rows);
    }

    #[test]
    fn test_empty_plan_ignores_column_count() {
        for limit in [1, 10, 50] {
            assert_eq!(body_plan(false, limit, 0), BodyPlan::Empty);
        }
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Value::Null), "—");
        assert_eq!(cell_text(&json!("")), "—");
        assert_eq!(cell_text(&json!("Form 2")), "Form 2");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(["en", "fr"])), "en, fr");
        assert_eq!(cell_text(&json!(true)), "✓");
    }

    #[test]
    fn test_edited_row_gets_new_render_key() {
        let before = RowData::new(0, json!({"id": "n-1", "title": "Old"}), ());
        let after = RowData::new(0, json!({"id": "n-1", "title": "New"}), ());
        let same = RowData::new(3, json!({"id": "n-1", "title": "Old"}), ());
        assert_ne!(before.render_key(), after.render_key());
        assert_eq!(before.render_key(), same.render_key());
    }

    #[test]
    fn test_duplicate_column_key_is_replaced() {
        let mut columns: Vec<ColumnDescriptor<()>> = Vec::new();
        push_column(&mut columns, ColumnDescriptor::new("title", Bilingual::new("Title", "Titre")));
        push_column(&mut columns, ColumnDescriptor::new("status", Bilingual::new("Status", "Statut")));
        push_column(&mut columns, ColumnDescriptor::new("title", Bilingual::new("Headline", "Titre")));
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].label.en, "Headline");
    }
}
