use crate::shared::language::Bilingual;

/// Closed set of codes a record field takes (statuses, categories, classes).
///
/// Records keep the raw code as a `String` so unknown server values survive an
/// edit round-trip; the vocabulary drives filter and form options.
pub trait Vocabulary: Copy + Sized + 'static {
    fn all() -> &'static [Self];

    /// Wire value, e.g. `"under_review"`.
    fn code(&self) -> &'static str;

    fn label(&self) -> Bilingual;

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }
}
