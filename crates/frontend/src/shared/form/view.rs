use super::schema::{FieldErrors, FieldKind, FieldSpec, FormSchema, FormValues};
use crate::shared::components::ui::{Checkbox, Input, Select, Textarea};
use crate::system::session::use_app;
use leptos::prelude::*;
use serde_json::Value;

/// Renders every field of `schema` bound to `values`. Editing a field clears
/// its error.
#[component]
pub fn SchemaForm(
    schema: FormSchema,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let app = use_app();

    view! {
        <div class="form form--grid">
            {schema.fields.into_iter().map(|spec| field_view(spec, values, errors, disabled, app.language)).collect_view()}
        </div>
    }
}

fn field_view(
    spec: FieldSpec,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
    disabled: Signal<bool>,
    language: RwSignal<contracts::shared::language::Language>,
) -> AnyView {
    let key = spec.key;
    let label = Signal::derive(move || spec.label.get(language.get()).to_string());
    let id = format!("field-{}", key);
    let error = Signal::derive(move || {
        errors.with(|e| e.get(key).map(|err| err.message(language.get()).to_string()))
    });
    let text = Signal::derive(move || {
        values.with(|v| v.get(key).and_then(Value::as_str).unwrap_or("").to_string())
    });
    let set = move |value: Value| {
        values.update(|v| {
            v.insert(key.to_string(), value);
        });
        if errors.with_untracked(|e| e.contains_key(key)) {
            errors.update(|e| {
                e.remove(key);
            });
        }
    };
    let on_text = Callback::new(move |s: String| set(Value::String(s)));
    let required = spec.required;

    match spec.kind {
        FieldKind::Text | FieldKind::Email | FieldKind::Number | FieldKind::Date => {
            let input_type = match spec.kind {
                FieldKind::Email => "email",
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            view! {
                <Input
                    id=id
                    label=label
                    value=text
                    on_input=on_text
                    input_type=input_type
                    required=required
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::TextArea => view! {
            <div class="form__row--wide">
                <Textarea
                    id=id
                    label=label
                    value=text
                    on_input=on_text
                    required=required
                    disabled=disabled
                    error=error
                />
            </div>
        }
        .into_any(),
        FieldKind::Select(options) => {
            let placeholder = (!required).then(|| (String::new(), "—".to_string()));
            let options = Signal::derive(move || {
                let lang = language.get();
                placeholder
                    .clone()
                    .into_iter()
                    .chain(options.iter().map(|o| (o.value.to_string(), o.label.get(lang).to_string())))
                    .collect::<Vec<_>>()
            });
            view! {
                <Select
                    id=id
                    label=label
                    value=text
                    on_change=on_text
                    options=options
                    required=required
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::Checkbox => {
            let checked = Signal::derive(move || {
                values.with(|v| v.get(key).and_then(Value::as_bool).unwrap_or(false))
            });
            view! {
                <Checkbox
                    id=id
                    label=label
                    checked=checked
                    on_change=Callback::new(move |b: bool| set(Value::Bool(b)))
                    disabled=disabled
                />
            }
            .into_any()
        }
    }
}
