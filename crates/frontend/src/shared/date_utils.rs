/// Date formatting for table cells.
///
/// The API sends ISO dates (`2026-05-04`) or timestamps
/// (`2026-05-04T08:30:00.000Z`); anything else is shown as received.
use chrono::{Datelike, NaiveDate};
use contracts::shared::language::Language;

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d").ok()
}

/// Example: "2026-05-04T08:30:00Z" -> "4 May 2026" / "4 mai 2026"
pub fn format_date(raw: &str, lang: Language) -> String {
    let Some(date) = parse_date(raw) else {
        return raw.to_string();
    };
    let month = (date.month0()) as usize;
    let name = match lang {
        Language::En => MONTHS_EN[month],
        Language::Fr => MONTHS_FR[month],
    };
    format!("{} {} {}", date.day(), name, date.year())
}

/// Time part of a timestamp as `HH:MM`, when there is one.
pub fn format_time(raw: &str) -> Option<String> {
    let (_, time) = raw.split_once('T')?;
    let hm: String = time.chars().take(5).collect();
    (hm.len() == 5 && hm.as_bytes()[2] == b':').then_some(hm)
}
