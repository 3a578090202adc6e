//! Declarative create/edit forms.
//!
//! A [`FormSchema`] lists typed fields; [`FormSchema::validate`] turns the
//! editable [`FormValues`] into the JSON payload sent to the API, or into
//! per-field errors before any request is made.

use crate::shared::i18n::{tr, Msg};
use chrono::NaiveDate;
use contracts::domain::common::Vocabulary;
use contracts::shared::language::{Bilingual, Language};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Field values while editing. Text-like fields (numbers and dates included)
/// hold strings, checkboxes hold booleans.
pub type FormValues = BTreeMap<String, Value>;

pub type FieldErrors = BTreeMap<String, FieldError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidNumber,
    InvalidDate,
    InvalidOption,
}

impl FieldError {
    pub fn message(&self, lang: Language) -> &'static str {
        let msg = match self {
            FieldError::Required => Msg::Required,
            FieldError::InvalidEmail => Msg::InvalidEmail,
            FieldError::InvalidNumber => Msg::InvalidNumber,
            FieldError::InvalidDate => Msg::InvalidDate,
            FieldError::InvalidOption => Msg::InvalidOption,
        };
        tr(lang, msg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: Bilingual,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
    Number,
    Date,
    Select(Vec<SelectOption>),
    Checkbox,
}

impl FieldKind {
    /// Select over every code of a vocabulary.
    pub fn select_of<V: Vocabulary>() -> Self {
        FieldKind::Select(
            V::all()
                .iter()
                .map(|v| SelectOption {
                    value: v.code(),
                    label: v.label(),
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: Bilingual,
    pub kind: FieldKind,
    pub required: bool,
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn new(key: &'static str, label: Bilingual, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            default: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    fn initial(&self) -> Value {
        if let Some(value) = &self.default {
            return value.clone();
        }
        match &self.kind {
            FieldKind::Checkbox => Value::Bool(false),
            FieldKind::Select(options) if self.required => options
                .first()
                .map(|o| Value::String(o.value.to_string()))
                .unwrap_or_else(|| Value::String(String::new())),
            _ => Value::String(String::new()),
        }
    }

    /// Editable form of a stored field value.
    fn editable(&self, stored: &Value) -> Value {
        match (&self.kind, stored) {
            (_, Value::Null) => self.initial(),
            (FieldKind::Checkbox, Value::Bool(b)) => Value::Bool(*b),
            (FieldKind::Checkbox, _) => Value::Bool(false),
            // ISO timestamps are cut to the `YYYY-MM-DD` a date input expects.
            (FieldKind::Date, Value::String(s)) => Value::String(s.chars().take(10).collect()),
            (_, Value::String(s)) => Value::String(s.clone()),
            (_, Value::Number(n)) => Value::String(n.to_string()),
            (_, other) => Value::String(other.to_string()),
        }
    }

    /// Payload value, `None` when an optional field is left empty.
    fn parse(&self, raw: Option<&Value>) -> Result<Option<Value>, FieldError> {
        if let FieldKind::Checkbox = self.kind {
            return Ok(Some(Value::Bool(raw.and_then(Value::as_bool).unwrap_or(false))));
        }

        let text = raw.and_then(Value::as_str).unwrap_or("").trim();
        if text.is_empty() {
            return if self.required { Err(FieldError::Required) } else { Ok(None) };
        }

        let value = match &self.kind {
            FieldKind::Email => {
                if !is_email(text) {
                    return Err(FieldError::InvalidEmail);
                }
                Value::String(text.to_string())
            }
            FieldKind::Number => parse_number(text).ok_or(FieldError::InvalidNumber)?,
            FieldKind::Date => {
                NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| FieldError::InvalidDate)?;
                Value::String(text.to_string())
            }
            FieldKind::Select(options) => {
                if !options.iter().any(|o| o.value == text) {
                    return Err(FieldError::InvalidOption);
                }
                Value::String(text.to_string())
            }
            FieldKind::Text | FieldKind::TextArea | FieldKind::Checkbox => {
                Value::String(text.to_string())
            }
        };
        Ok(Some(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.retain(|f| f.key != spec.key);
        self.fields.push(spec);
        self
    }

    pub fn defaults(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.key.to_string(), f.initial()))
            .collect()
    }

    /// Prefill from a record as returned by the API.
    pub fn from_record(&self, record: &Value) -> FormValues {
        self.fields
            .iter()
            .map(|f| {
                let stored = record.get(f.key).unwrap_or(&Value::Null);
                (f.key.to_string(), f.editable(stored))
            })
            .collect()
    }

    pub fn validate(&self, values: &FormValues) -> Result<Map<String, Value>, FieldErrors> {
        let mut payload = Map::new();
        let mut errors = FieldErrors::new();
        for field in &self.fields {
            match field.parse(values.get(field.key)) {
                Ok(Some(value)) => {
                    payload.insert(field.key.to_string(), value);
                }
                Ok(None) => {}
                Err(e) => {
                    errors.insert(field.key.to_string(), e);
                }
            }
        }
        if errors.is_empty() {
            Ok(payload)
        } else {
            Err(errors)
        }
    }
}

fn is_email(text: &str) -> bool {
    match text.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !text.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    }
}

fn parse_number(text: &str) -> Option<Value> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(Value::Number(i.into()));
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_news::aggregate::NewsCategory;
    use serde_json::json;

    fn news_form() -> FormSchema {
        FormSchema::new()
            .field(FieldSpec::new("title", Bilingual::new("Title", "Titre"), FieldKind::Text).required())
            .field(FieldSpec::new("content", Bilingual::new("Content", "Contenu"), FieldKind::TextArea).required())
            .field(
                FieldSpec::new("category", Bilingual::new("Category", "Catégorie"), FieldKind::select_of::<NewsCategory>())
                    .required(),
            )
            .field(FieldSpec::new("isPublished", Bilingual::new("Published", "Publié"), FieldKind::Checkbox))
            .field(FieldSpec::new("publishedAt", Bilingual::new("Date", "Date"), FieldKind::Date))
    }

    #[test]
    fn test_defaults() {
        let values = news_form().defaults();
        assert_eq!(values["title"], json!(""));
        assert_eq!(values["category"], json!("academic"));
        assert_eq!(values["isPublished"], json!(false));
    }

    #[test]
    fn test_missing_required_fields_block_submit() {
        let errors = news_form().validate(&news_form().defaults()).unwrap_err();
        assert_eq!(errors.get("title"), Some(&FieldError::Required));
        assert_eq!(errors.get("content"), Some(&FieldError::Required));
        assert!(!errors.contains_key("category"));
        assert_eq!(errors["title"].message(Language::Fr), "Ce champ est obligatoire");
    }

    #[test]
    fn test_valid_payload() {
        let form = news_form();
        let mut values = form.defaults();
        values.insert("title".into(), json!("  Exam Results "));
        values.insert("content".into(), json!("All students passed."));
        values.insert("isPublished".into(), json!(true));

        let payload = form.validate(&values).unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({"title": "Exam Results", "content": "All students passed.", "category": "academic", "isPublished": true})
        );
    }

    #[test]
    fn test_from_record_cuts_timestamps() {
        let values = news_form().from_record(&json!({
            "title": "Sports day",
            "publishedAt": "2026-05-04T08:30:00.000Z",
            "isPublished": true
        }));
        assert_eq!(values["publishedAt"], json!("2026-05-04"));
        assert_eq!(values["isPublished"], json!(true));
        assert_eq!(values["category"], json!("academic"));
    }

    #[test]
    fn test_typed_fields() {
        let form = FormSchema::new()
            .field(FieldSpec::new("email", Bilingual::new("Email", "E-mail"), FieldKind::Email).required())
            .field(FieldSpec::new("capacity", Bilingual::new("Capacity", "Capacité"), FieldKind::Number))
            .field(FieldSpec::new("visitDate", Bilingual::new("Date", "Date"), FieldKind::Date));

        let mut values = form.defaults();
        values.insert("email".into(), json!("parent@school"));
        values.insert("capacity".into(), json!("thirty"));
        values.insert("visitDate".into(), json!("04/05/2026"));
        let errors = form.validate(&values).unwrap_err();
        assert_eq!(errors["email"], FieldError::InvalidEmail);
        assert_eq!(errors["capacity"], FieldError::InvalidNumber);
        assert_eq!(errors["visitDate"], FieldError::InvalidDate);

        values.insert("email".into(), json!("parent@school.org"));
        values.insert("capacity".into(), json!("30"));
        values.insert("visitDate".into(), json!("2026-05-04"));
        let payload = form.validate(&values).unwrap();
        assert_eq!(payload["capacity"], json!(30));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let form = news_form();
        let mut values = form.defaults();
        values.insert("title".into(), json!("x"));
        values.insert("content".into(), json!("y"));
        values.insert("category".into(), json!("gossip"));
        assert_eq!(form.validate(&values).unwrap_err()["category"], FieldError::InvalidOption);
    }
}
