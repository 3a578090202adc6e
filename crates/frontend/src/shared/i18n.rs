//! Strings of the admin core in both interface languages.
//!
//! Marketing copy lives with the public site; only the messages the generic
//! screens need (toasts, empty state, pagination, dialogs) are kept here.

use contracts::domain::common::{EntityKind, Vocabulary};
use contracts::shared::language::{Bilingual, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    FetchFailed,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    StatusFailed,
    Created,
    Updated,
    Deleted,
    StatusUpdated,
    NoData,
    NoDataHint,
    Previous,
    Next,
    PageOf,
    PerPage,
    Showing,
    Create,
    Edit,
    Delete,
    Cancel,
    Save,
    Saving,
    ConfirmDeleteTitle,
    ConfirmDeleteBody,
    ChangeStatus,
    Status,
    Note,
    Search,
    Filters,
    ResetFilters,
    All,
    Total,
    Actions,
    Refresh,
    Required,
    InvalidEmail,
    InvalidNumber,
    InvalidOption,
    InvalidDate,
    Dashboard,
    Overview,
    Settings,
    SettingsSaved,
    SettingsLoadFailed,
    SettingsSaveFailed,
    ErrorTitle,
    ErrorBody,
    TryAgain,
    GoHome,
    Language,
}

impl Msg {
    pub fn text(&self) -> Bilingual {
        use Msg::*;
        match self {
            FetchFailed => Bilingual::new("Failed to fetch {}", "Échec du chargement : {}"),
            CreateFailed => Bilingual::new("Failed to create {}", "Échec de la création : {}"),
            UpdateFailed => Bilingual::new("Failed to update {}", "Échec de la mise à jour : {}"),
            DeleteFailed => Bilingual::new("Failed to delete {}", "Échec de la suppression : {}"),
            StatusFailed => Bilingual::new(
                "Failed to update the status of {}",
                "Échec du changement de statut : {}",
            ),
            Created => Bilingual::new("{} created successfully", "{} : création réussie"),
            Updated => Bilingual::new("{} updated successfully", "{} : modification réussie"),
            Deleted => Bilingual::new("{} deleted successfully", "{} : suppression réussie"),
            StatusUpdated => Bilingual::new("Status updated", "Statut mis à jour"),
            NoData => Bilingual::new("No data found", "Aucune donnée trouvée"),
            NoDataHint => Bilingual::new(
                "Try adjusting your search or filters",
                "Essayez de modifier la recherche ou les filtres",
            ),
            Previous => Bilingual::new("Previous", "Précédent"),
            Next => Bilingual::new("Next", "Suivant"),
            PageOf => Bilingual::new("Page {} of {}", "Page {} sur {}"),
            PerPage => Bilingual::new("Per page", "Par page"),
            Showing => Bilingual::new("Showing {}-{} of {}", "Affichage {}-{} sur {}"),
            Create => Bilingual::new("Create", "Créer"),
            Edit => Bilingual::new("Edit", "Modifier"),
            Delete => Bilingual::new("Delete", "Supprimer"),
            Cancel => Bilingual::new("Cancel", "Annuler"),
            Save => Bilingual::new("Save", "Enregistrer"),
            Saving => Bilingual::new("Saving...", "Enregistrement..."),
            ConfirmDeleteTitle => Bilingual::new("Confirm deletion", "Confirmer la suppression"),
            ConfirmDeleteBody => Bilingual::new(
                "Delete \"{}\"? This cannot be undone.",
                "Supprimer « {} » ? Cette action est irréversible.",
            ),
            ChangeStatus => Bilingual::new("Change status", "Changer le statut"),
            Status => Bilingual::new("Status", "Statut"),
            Note => Bilingual::new("Note", "Note"),
            Search => Bilingual::new("Search...", "Rechercher..."),
            Filters => Bilingual::new("Filters", "Filtres"),
            ResetFilters => Bilingual::new("Reset", "Réinitialiser"),
            All => Bilingual::new("All", "Tous"),
            Total => Bilingual::new("Total", "Total"),
            Actions => Bilingual::new("Actions", "Actions"),
            Refresh => Bilingual::new("Refresh", "Actualiser"),
            Required => Bilingual::new("This field is required", "Ce champ est obligatoire"),
            InvalidEmail => Bilingual::new("Enter a valid email address", "Saisissez une adresse e-mail valide"),
            InvalidNumber => Bilingual::new("Enter a number", "Saisissez un nombre"),
            InvalidOption => Bilingual::new("Choose one of the options", "Choisissez une des options"),
            InvalidDate => Bilingual::new("Enter a date as YYYY-MM-DD", "Saisissez une date au format AAAA-MM-JJ"),
            Dashboard => Bilingual::new("Dashboard", "Tableau de bord"),
            Overview => Bilingual::new("School overview", "Vue d'ensemble de l'établissement"),
            Settings => Bilingual::new("Settings", "Paramètres"),
            SettingsSaved => Bilingual::new("Settings saved", "Paramètres enregistrés"),
            SettingsLoadFailed => Bilingual::new("Failed to load settings", "Échec du chargement des paramètres"),
            SettingsSaveFailed => Bilingual::new("Failed to save settings", "Échec de l'enregistrement des paramètres"),
            ErrorTitle => Bilingual::new("Something went wrong", "Une erreur est survenue"),
            ErrorBody => Bilingual::new(
                "This page could not be displayed.",
                "Cette page n'a pas pu être affichée.",
            ),
            TryAgain => Bilingual::new("Try again", "Réessayer"),
            GoHome => Bilingual::new("Go home", "Retour à l'accueil"),
            Language => Bilingual::new("Language", "Langue"),
        }
    }
}

pub fn tr(lang: Language, msg: Msg) -> &'static str {
    msg.text().get(lang)
}

/// Replace each `{}` of `template` with the next argument.
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;
    while let Some(at) = rest.find("{}") {
        out.push_str(&rest[..at]);
        out.push_str(args.next().copied().unwrap_or(""));
        rest = &rest[at + 2..];
    }
    out.push_str(rest);
    out
}

pub fn trf(lang: Language, msg: Msg, args: &[&str]) -> String {
    fill(tr(lang, msg), args)
}

/// Plural display name of a record type, for titles and toasts.
pub fn entity_name(kind: EntityKind) -> Bilingual {
    match kind {
        EntityKind::News => Bilingual::new("News", "Actualités"),
        EntityKind::Applications => Bilingual::new("Applications", "Candidatures"),
        EntityKind::Bookings => Bilingual::new("Bookings", "Réservations"),
        EntityKind::Contacts => Bilingual::new("Contacts", "Messages"),
        EntityKind::Facilities => Bilingual::new("Facilities", "Installations"),
        EntityKind::Achievements => Bilingual::new("Achievements", "Réussites"),
        EntityKind::Students => Bilingual::new("Students", "Élèves"),
        EntityKind::Teachers => Bilingual::new("Teachers", "Enseignants"),
    }
}

/// `(code, label)` pairs of a vocabulary, in declaration order.
pub fn vocab_options<V: Vocabulary>(lang: Language) -> Vec<(String, String)> {
    V::all()
        .iter()
        .map(|v| (v.code().to_string(), v.label().get(lang).to_string()))
        .collect()
}

/// Label of a stored code, or the code itself when the vocabulary does not
/// know it.
pub fn vocab_label<V: Vocabulary>(code: &str, lang: Language) -> String {
    V::from_code(code)
        .map(|v| v.label().get(lang).to_string())
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_application::aggregate::ApplicationStatus;

    #[test]
    fn test_fill() {
        assert_eq!(fill("Page {} of {}", &["2", "7"]), "Page 2 of 7");
        assert_eq!(fill("Failed to fetch {}", &["news"]), "Failed to fetch news");
        assert_eq!(fill("no slots", &["x"]), "no slots");
        assert_eq!(fill("{} and {}", &["a"]), "a and ");
    }

    #[test]
    fn test_french_toast() {
        assert_eq!(
            trf(Language::Fr, Msg::DeleteFailed, &["actualités"]),
            "Échec de la suppression : actualités"
        );
    }

    #[test]
    fn test_vocab_label_falls_back_to_code() {
        assert_eq!(vocab_label::<ApplicationStatus>("under_review", Language::En), "Under review");
        assert_eq!(vocab_label::<ApplicationStatus>("on_hold", Language::En), "on_hold");
    }

    #[test]
    fn test_vocab_options_order() {
        let options = vocab_options::<ApplicationStatus>(Language::En);
        assert_eq!(options.first().map(|(c, _)| c.as_str()), Some("pending"));
        assert_eq!(options.len(), 5);
    }
}
