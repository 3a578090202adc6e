use crate::shared::components::data_table::{push_column, ColumnDescriptor};
use crate::shared::form::{FormSchema, SelectOption};
use crate::shared::i18n::entity_name;
use contracts::domain::common::{EntityKind, EntityRecord, Vocabulary};
use contracts::shared::language::{Bilingual, Language};
use leptos::prelude::AnyView;
use serde_json::Value;

/// A select filter above the table. An empty value means "all".
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: Bilingual,
    pub options: Vec<SelectOption>,
}

impl FilterSpec {
    pub fn of<V: Vocabulary>(key: &'static str, label: Bilingual) -> Self {
        Self {
            key,
            label,
            options: V::all()
                .iter()
                .map(|v| SelectOption {
                    value: v.code(),
                    label: v.label(),
                })
                .collect(),
        }
    }

    pub fn boolean(key: &'static str, label: Bilingual, yes: Bilingual, no: Bilingual) -> Self {
        Self {
            key,
            label,
            options: vec![
                SelectOption {
                    value: "true",
                    label: yes,
                },
                SelectOption {
                    value: "false",
                    label: no,
                },
            ],
        }
    }

    /// `(value, label)` pairs with the leading "all" entry.
    pub fn select_options(&self, lang: Language, all_label: &str) -> Vec<(String, String)> {
        std::iter::once((String::new(), all_label.to_string()))
            .chain(
                self.options
                    .iter()
                    .map(|o| (o.value.to_string(), o.label.get(lang).to_string())),
            )
            .collect()
    }
}

/// Everything the generic management screen needs to know about one
/// record type.
pub struct EntityScreenConfig<T> {
    pub kind: EntityKind,
    /// Singular name for toasts ("Student created successfully").
    pub item_name: Bilingual,
    pub columns: Vec<ColumnDescriptor<T>>,
    pub filters: Vec<FilterSpec>,
    pub form: Option<FormSchema>,
    pub status_options: Vec<SelectOption>,
    pub allow_create: bool,
    pub allow_edit: bool,
    pub allow_delete: bool,
}

impl<T> Clone for EntityScreenConfig<T> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            item_name: self.item_name,
            columns: self.columns.clone(),
            filters: self.filters.clone(),
            form: self.form.clone(),
            status_options: self.status_options.clone(),
            allow_create: self.allow_create,
            allow_edit: self.allow_edit,
            allow_delete: self.allow_delete,
        }
    }
}

impl<T: EntityRecord> EntityScreenConfig<T> {
    pub fn new(item_name: Bilingual) -> Self {
        Self {
            kind: T::KIND,
            item_name,
            columns: Vec::new(),
            filters: Vec::new(),
            form: None,
            status_options: Vec::new(),
            allow_create: false,
            allow_edit: false,
            allow_delete: true,
        }
    }

    pub fn column(mut self, key: &'static str, label: Bilingual) -> Self {
        push_column(&mut self.columns, ColumnDescriptor::new(key, label));
        self
    }

    pub fn column_with(
        mut self,
        key: &'static str,
        label: Bilingual,
        render: impl Fn(&Value, &T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        push_column(&mut self.columns, ColumnDescriptor::new(key, label).render(render));
        self
    }

    pub fn filter(mut self, filter: FilterSpec) -> Self {
        self.filters.retain(|f| f.key != filter.key);
        self.filters.push(filter);
        self
    }

    /// Enables create and edit through `schema`.
    pub fn form(mut self, schema: FormSchema) -> Self {
        self.form = Some(schema);
        self.allow_create = true;
        self.allow_edit = true;
        self
    }

    /// Inbound records: the office reviews them but never creates them.
    pub fn without_create(mut self) -> Self {
        self.allow_create = false;
        self
    }

    /// Adds the "Change status" row action over the codes of `V`.
    pub fn status_workflow<V: Vocabulary>(mut self) -> Self {
        self.status_options = V::all()
            .iter()
            .map(|v| SelectOption {
                value: v.code(),
                label: v.label(),
            })
            .collect();
        self
    }
}

impl<T> EntityScreenConfig<T> {
    pub fn title(&self) -> Bilingual {
        entity_name(self.kind)
    }

    pub fn can_create(&self) -> bool {
        self.allow_create && self.form.is_some()
    }

    pub fn can_edit(&self) -> bool {
        self.allow_edit && self.form.is_some()
    }

    pub fn has_status_workflow(&self) -> bool {
        !self.status_options.is_empty()
    }

    pub fn has_row_actions(&self) -> bool {
        self.can_edit() || self.allow_delete || self.has_status_workflow()
    }
}

/// What the body of a management screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    Loading,
    Displaying,
    Empty,
    /// The last fetch failed; the table shows its empty state.
    Errored,
}

impl ScreenPhase {
    pub fn of(loading: bool, failed: bool, row_count: usize) -> Self {
        if loading {
            ScreenPhase::Loading
        } else if failed {
            ScreenPhase::Errored
        } else if row_count == 0 {
            ScreenPhase::Empty
        } else {
            ScreenPhase::Displaying
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{FieldKind, FieldSpec};
    use contracts::domain::a002_application::aggregate::{Application, ApplicationStatus};
    use contracts::domain::a007_student::aggregate::{Student, StudentStatus};

    #[test]
    fn test_inbound_record_screen() {
        let config = EntityScreenConfig::<Application>::new(Bilingual::new("Application", "Candidature"))
            .column("email", Bilingual::new("Email", "E-mail"))
            .status_workflow::<ApplicationStatus>();
        assert_eq!(config.kind, EntityKind::Applications);
        assert!(!config.can_create());
        assert!(!config.can_edit());
        assert!(config.has_status_workflow());
        assert!(config.has_row_actions());
        assert_eq!(config.status_options.len(), ApplicationStatus::all().len());
    }

    #[test]
    fn test_form_enables_create_and_edit() {
        let schema = FormSchema::new().field(
            FieldSpec::new("firstName", Bilingual::new("First name", "Prénom"), FieldKind::Text).required(),
        );
        let config = EntityScreenConfig::<Student>::new(Bilingual::new("Student", "Élève")).form(schema);
        assert!(config.can_create());
        assert!(config.can_edit());

        let config = config.without_create();
        assert!(!config.can_create());
        assert!(config.can_edit());
    }

    #[test]
    fn test_duplicate_column_and_filter_keys_are_replaced() {
        let config = EntityScreenConfig::<Student>::new(Bilingual::new("Student", "Élève"))
            .column("status", Bilingual::new("Status", "Statut"))
            .column("status", Bilingual::new("State", "État"))
            .filter(FilterSpec::of::<StudentStatus>("status", Bilingual::new("Status", "Statut")))
            .filter(FilterSpec::of::<StudentStatus>("status", Bilingual::new("State", "État")));
        assert_eq!(config.columns.len(), 1);
        assert_eq!(config.columns[0].label.en, "State");
        assert_eq!(config.filters.len(), 1);
    }

    #[test]
    fn test_filter_options_start_with_all() {
        let filter = FilterSpec::boolean(
            "isPublished",
            Bilingual::new("Published", "Publié"),
            Bilingual::new("Yes", "Oui"),
            Bilingual::new("No", "Non"),
        );
        let options = filter.select_options(Language::Fr, "Tous");
        assert_eq!(options[0], (String::new(), "Tous".to_string()));
        assert_eq!(options[1], ("true".to_string(), "Oui".to_string()));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_phase() {
        assert_eq!(ScreenPhase::of(true, true, 3), ScreenPhase::Loading);
        assert_eq!(ScreenPhase::of(false, true, 0), ScreenPhase::Errored);
        assert_eq!(ScreenPhase::of(false, false, 0), ScreenPhase::Empty);
        assert_eq!(ScreenPhase::of(false, false, 4), ScreenPhase::Displaying);
    }
}
