use crate::shared::i18n::{tr, trf, Msg};
use crate::shared::icons::icon;
use crate::system::session::use_app;
use contracts::shared::pagination::PaginationState;
use leptos::prelude::*;

const WINDOW: u64 = 5;

/// Page numbers shown as buttons: at most five, centered on `current`
/// except near either end, where the window is clamped to `1..=total`.
pub fn page_window(current: u64, total: u64) -> Vec<u64> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let start = if total <= WINDOW || current <= 3 {
        1
    } else if current >= total - 2 {
        total - (WINDOW - 1)
    } else {
        current - 2
    };
    let end = (start + WINDOW - 1).min(total);
    (start..=end).collect()
}

pub fn can_go_prev(current: u64) -> bool {
    current > 1
}

pub fn can_go_next(current: u64, total: u64) -> bool {
    current < total
}

/// 1-based first and last row of the page, `(0, 0)` when there are none.
pub fn visible_range(pagination: &PaginationState) -> (u64, u64) {
    if pagination.total() == 0 {
        return (0, 0);
    }
    let first = (pagination.page() - 1) * pagination.limit() + 1;
    let last = (pagination.page() * pagination.limit()).min(pagination.total());
    (first.min(last), last)
}

/// Numbered page buttons with previous/next and a page-size selector.
///
/// Only ever reports a page or a page size; the caller decides what a
/// page-size change does to the current page.
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<PaginationState>,
    on_page_change: Callback<u64>,
    on_limit_change: Callback<u64>,
    #[prop(optional)] page_size_options: Option<Vec<u64>>,
) -> impl IntoView {
    let app = use_app();
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50]);

    let current = move || pagination.get().page();
    let total_pages = move || pagination.get().total_pages();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || {
                    let p = pagination.get();
                    let (first, last) = visible_range(&p);
                    trf(
                        app.language.get(),
                        Msg::Showing,
                        &[&first.to_string(), &last.to_string(), &p.total().to_string()],
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if can_go_prev(current()) {
                        on_page_change.run(current() - 1);
                    }
                }
                disabled=move || !can_go_prev(current())
                title=move || tr(app.language.get(), Msg::Previous)
            >
                {icon("chevron-left")}
            </button>
            <For
                each=move || page_window(current(), total_pages())
                key=|page| *page
                children=move |page| {
                    view! {
                        <button
                            class="pagination-btn pagination-btn--number"
                            class:pagination-btn--active=move || current() == page
                            aria-current=move || (current() == page).then_some("page")
                            on:click=move |_| {
                                if current() != page {
                                    on_page_change.run(page);
                                }
                            }
                        >
                            {page}
                        </button>
                    }
                }
            />
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if can_go_next(current(), total_pages()) {
                        on_page_change.run(current() + 1);
                    }
                }
                disabled=move || !can_go_next(current(), total_pages())
                title=move || tr(app.language.get(), Msg::Next)
            >
                {icon("chevron-right")}
            </button>
            <label class="pagination-size">
                <span>{move || tr(app.language.get(), Msg::PerPage)}</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u64>() {
                            on_limit_change.run(size);
                        }
                    }
                    prop:value=move || pagination.get().limit().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || pagination.get().limit() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_near_edges_and_middle() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_last_page_of_seven() {
        assert_eq!(page_window(7, 7), vec![3, 4, 5, 6, 7]);
        assert!(!can_go_next(7, 7));
        assert!(can_go_prev(7));
    }

    #[test]
    fn test_window_properties_hold_everywhere() {
        for total in 1..=30u64 {
            for current in 1..=total {
                let window = page_window(current, total);
                assert!(window.contains(&current), "{} of {}", current, total);
                assert!(window.iter().all(|p| (1..=total).contains(p)));
                assert_eq!(window.len() as u64, total.min(5));
                assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn test_no_pages() {
        assert!(page_window(1, 0).is_empty());
        assert!(!can_go_next(1, 0));
        assert!(!can_go_prev(1));
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(&PaginationState::new(1, 10, 0)), (0, 0));
        assert_eq!(visible_range(&PaginationState::new(1, 10, 25)), (1, 10));
        assert_eq!(visible_range(&PaginationState::new(3, 10, 25)), (21, 25));
    }
}
