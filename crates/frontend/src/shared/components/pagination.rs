use crate::shared::icons::icon;
use leptos::prelude::*;

/// Default width of the numbered page window.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Computes the contiguous block of page numbers to render as buttons.
///
/// Pages are 1-indexed. The window does not recenter around the current
/// page: it jumps between fixed blocks (1–5, 6–10, 11–15, ...), and the
/// last block is shifted left so the window stays `max_visible` wide
/// whenever enough pages exist.
///
/// Invalid input never panics: `current_page` is clamped into
/// `[1, total_pages]` and `max_visible < 1` is treated as 1.
pub fn page_window(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    let max_visible = max_visible.max(1);
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }

    let current = current_page.clamp(1, total_pages);
    let mut start = ((current - 1) / max_visible) * max_visible + 1;
    if start + max_visible - 1 > total_pages {
        start = total_pages + 1 - max_visible;
    }
    (start..start + max_visible).collect()
}

/// Navigation affordances around the numbered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
}

/// Target page for a navigation button, `None` when the button is at its
/// boundary and must stay disabled (the page-change callback is never
/// invoked for a `None` target).
pub fn nav_target(nav: PageNav, current_page: usize, total_pages: usize) -> Option<usize> {
    if total_pages == 0 {
        return None;
    }
    let current = current_page.clamp(1, total_pages);
    match nav {
        PageNav::First if current > 1 => Some(1),
        PageNav::Prev if current > 1 => Some(current - 1),
        PageNav::Next if current < total_pages => Some(current + 1),
        PageNav::Last if current < total_pages => Some(total_pages),
        _ => None,
    }
}

/// Pagination component - first/prev, numbered page window, next/last
///
/// Current page is 1-indexed everywhere in this component.
#[component]
pub fn Pagination(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Width of the numbered window (optional, defaults to 5)
    #[prop(optional)]
    max_visible: Option<usize>,

    /// Current page size (optional, shown with the size select)
    #[prop(optional, into)]
    page_size: Option<Signal<usize>>,

    /// Callback when page size changes (optional; the select is only
    /// rendered when this is provided)
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,

    /// Available page size options (optional, defaults to [10, 25, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let max_visible = max_visible.unwrap_or(DEFAULT_MAX_VISIBLE);
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);

    // Пересчитывается только при смене страницы или количества страниц
    let window = Memo::new(move |_| {
        page_window(current_page.get(), total_pages.get(), max_visible)
    });

    let navigate = move |nav: PageNav| {
        if let Some(target) = nav_target(nav, current_page.get(), total_pages.get()) {
            on_page_change.run(target);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| navigate(PageNav::First)
                disabled=move || nav_target(PageNav::First, current_page.get(), total_pages.get()).is_none()
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| navigate(PageNav::Prev)
                disabled=move || nav_target(PageNav::Prev, current_page.get(), total_pages.get()).is_none()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                window.get().into_iter().map(|page| {
                    let is_current = move || current_page.get() == page;
                    view! {
                        <button
                            class=move || {
                                if is_current() {
                                    "pagination-btn pagination-btn--page pagination-btn--current"
                                } else {
                                    "pagination-btn pagination-btn--page"
                                }
                            }
                            on:click=move |_| {
                                if !is_current() {
                                    on_page_change.run(page);
                                }
                            }
                        >
                            {page.to_string()}
                        </button>
                    }
                }).collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| navigate(PageNav::Next)
                disabled=move || nav_target(PageNav::Next, current_page.get(), total_pages.get()).is_none()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| navigate(PageNav::Last)
                disabled=move || nav_target(PageNav::Last, current_page.get(), total_pages.get()).is_none()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            {on_page_size_change.map(|on_size_change| {
                let size = page_size.unwrap_or_else(|| Signal::derive(|| 0));
                view! {
                    <select
                        class="page-size-select"
                        on:change=move |ev| {
                            if let Ok(val) = event_target_value(&ev).parse() {
                                on_size_change.run(val);
                            }
                        }
                        prop:value=move || size.get().to_string()
                    >
                        {page_size_opts.iter().map(|&opt| {
                            view! {
                                <option value={opt.to_string()} selected=move || size.get() == opt>
                                    {opt.to_string()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_length_invariant() {
        for total_pages in 0..=40 {
            for max_visible in 1..=7 {
                for current_page in 1..=total_pages.max(1) {
                    let window = page_window(current_page, total_pages, max_visible);
                    assert_eq!(
                        window.len(),
                        total_pages.min(max_visible),
                        "current={} total={} visible={}",
                        current_page,
                        total_pages,
                        max_visible
                    );
                }
            }
        }
    }

    #[test]
    fn test_window_contiguous_ascending_in_range() {
        for total_pages in 1..=40 {
            for current_page in 1..=total_pages {
                let window = page_window(current_page, total_pages, 5);
                for pair in window.windows(2) {
                    assert_eq!(pair[1], pair[0] + 1);
                }
                assert!(*window.first().unwrap() >= 1);
                assert!(*window.last().unwrap() <= total_pages);
            }
        }
    }

    #[test]
    fn test_window_contains_current_page() {
        for total_pages in 5..=40 {
            for current_page in 1..=total_pages {
                let window = page_window(current_page, total_pages, 5);
                assert!(
                    window.contains(&current_page),
                    "page {} missing from window {:?} (total {})",
                    current_page,
                    window,
                    total_pages
                );
            }
        }
    }

    #[test]
    fn test_fixed_block_windowing() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_last_block_shifted_left() {
        // Страниц 12: блок для 11-й страницы сдвигается влево до полной ширины
        assert_eq!(page_window(11, 12, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(page_window(12, 12, 5), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_small_total() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn test_degenerate_input_is_clamped() {
        assert_eq!(page_window(1, 0, 5), Vec::<usize>::new());
        assert_eq!(page_window(99, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(3, 10, 0), vec![3]);
    }

    #[test]
    fn test_nav_disabled_at_boundaries() {
        assert_eq!(nav_target(PageNav::First, 1, 10), None);
        assert_eq!(nav_target(PageNav::Prev, 1, 10), None);
        assert_eq!(nav_target(PageNav::Next, 10, 10), None);
        assert_eq!(nav_target(PageNav::Last, 10, 10), None);
        assert_eq!(nav_target(PageNav::Next, 1, 0), None);
    }

    #[test]
    fn test_nav_targets() {
        assert_eq!(nav_target(PageNav::First, 7, 10), Some(1));
        assert_eq!(nav_target(PageNav::Prev, 7, 10), Some(6));
        assert_eq!(nav_target(PageNav::Next, 7, 10), Some(8));
        assert_eq!(nav_target(PageNav::Last, 7, 10), Some(10));
    }
}
