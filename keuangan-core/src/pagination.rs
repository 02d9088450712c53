//! Page-window arithmetic for paginated record lists.
//!
//! Everything here is a pure function of its inputs except [`Paginator`],
//! which is a plain owned value the presentation layer keeps between
//! renders. Page numbers are 1-based throughout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeuanganError;

/// Number of page buttons shown in the navigation strip.
pub const DEFAULT_MAX_WINDOW: usize = 3;

/// Page sizes offered by the list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ItemsPerPage {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl ItemsPerPage {
    pub const ALL: [ItemsPerPage; 4] = [
        ItemsPerPage::Five,
        ItemsPerPage::Ten,
        ItemsPerPage::Twenty,
        ItemsPerPage::Fifty,
    ];

    pub fn value(self) -> usize {
        match self {
            ItemsPerPage::Five => 5,
            ItemsPerPage::Ten => 10,
            ItemsPerPage::Twenty => 20,
            ItemsPerPage::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for ItemsPerPage {
    type Error = KeuanganError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(ItemsPerPage::Five),
            10 => Ok(ItemsPerPage::Ten),
            20 => Ok(ItemsPerPage::Twenty),
            50 => Ok(ItemsPerPage::Fifty),
            other => Err(KeuanganError::InvalidPageSize(other)),
        }
    }
}

impl From<ItemsPerPage> for u32 {
    fn from(value: ItemsPerPage) -> Self {
        value.value() as u32
    }
}

impl FromStr for ItemsPerPage {
    type Err = KeuanganError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| KeuanganError::Config(format!("'{}' is not a page size", s.trim())))?;
        ItemsPerPage::try_from(n)
    }
}

impl fmt::Display for ItemsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Enabled/disabled state of the first/previous/next/last buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub first_disabled: bool,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub last_disabled: bool,
}

impl ControlState {
    pub fn all_disabled() -> Self {
        Self {
            first_disabled: true,
            prev_disabled: true,
            next_disabled: true,
            last_disabled: true,
        }
    }
}

/// Number of pages needed for `total_items` rows (ceiling division).
pub fn total_pages(total_items: usize, items_per_page: ItemsPerPage) -> usize {
    total_items.div_ceil(items_per_page.value())
}

/// Pull `page` back into `[1, total_pages]`. With no pages the result is 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Contiguous run of page numbers to show around `current_page`.
///
/// The run has length `min(total_pages, max_window)`, stays inside
/// `[1, total_pages]` and is centered on `current_page` unless that would
/// run off an edge. Out-of-range `current_page` values are tolerated: they
/// pin the window to the nearest edge. An even `max_window` puts the extra
/// page after the current one.
pub fn compute_window(current_page: usize, total_pages: usize, max_window: usize) -> Vec<usize> {
    match window_bounds(current_page, total_pages, max_window) {
        Some((start, end)) => (start..=end).collect(),
        None => Vec::new(),
    }
}

fn window_bounds(
    current_page: usize,
    total_pages: usize,
    max_window: usize,
) -> Option<(usize, usize)> {
    if total_pages == 0 || max_window == 0 {
        return None;
    }
    if total_pages <= max_window {
        return Some((1, total_pages));
    }

    let half = max_window / 2;
    let start = if current_page <= half + 1 {
        1
    } else if current_page > total_pages - half {
        total_pages - max_window + 1
    } else {
        current_page - half
    };
    let end = start + max_window - 1;

    Some((start.max(1), end.min(total_pages)))
}

/// Disabled flags for the navigation buttons.
///
/// Everything is disabled when there is nothing to page through. Otherwise
/// first/previous are disabled on the first page and next/last on the last.
pub fn control_state(current_page: usize, total_pages: usize, total_items: usize) -> ControlState {
    if total_items == 0 {
        return ControlState::all_disabled();
    }
    let at_start = current_page <= 1;
    let at_end = current_page >= total_pages;
    ControlState {
        first_disabled: at_start,
        prev_disabled: at_start,
        next_disabled: at_end,
        last_disabled: at_end,
    }
}

/// Inclusive `(from, to)` row offsets for `page`, as handed to the backend's
/// range query. `None` when there are no rows at all.
pub fn row_range(
    page: usize,
    items_per_page: ItemsPerPage,
    total_items: usize,
) -> Option<(usize, usize)> {
    if total_items == 0 {
        return None;
    }
    let page = clamp_page(page, total_pages(total_items, items_per_page));
    let from = (page - 1) * items_per_page.value();
    let to = (from + items_per_page.value()).min(total_items) - 1;
    Some((from, to))
}

/// Rows of `items` that fall on `page`.
pub fn paginate<T>(items: &[T], page: usize, items_per_page: ItemsPerPage) -> &[T] {
    match row_range(page, items_per_page, items.len()) {
        Some((from, to)) => &items[from..=to],
        None => &[],
    }
}

/// Snapshot of everything a list screen needs to draw its footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: ItemsPerPage,
    pub window: Vec<usize>,
    pub controls: ControlState,
    pub row_range: Option<(usize, usize)>,
}

impl PageView {
    /// `current_page` is clamped into range so the page shown, the window
    /// and the row range always agree.
    pub fn new(
        current_page: usize,
        total_items: usize,
        items_per_page: ItemsPerPage,
        max_window: usize,
    ) -> Self {
        let pages = total_pages(total_items, items_per_page);
        let current_page = clamp_page(current_page, pages);
        Self {
            current_page,
            total_pages: pages,
            total_items,
            items_per_page,
            window: compute_window(current_page, pages, max_window),
            controls: control_state(current_page, pages, total_items),
            row_range: row_range(current_page, items_per_page, total_items),
        }
    }
}

/// Navigation state kept by a list screen between renders.
#[derive(Debug, Clone)]
pub struct Paginator {
    current_page: usize,
    total_items: usize,
    items_per_page: ItemsPerPage,
    max_window: usize,
}

impl Paginator {
    pub fn new(total_items: usize, items_per_page: ItemsPerPage) -> Self {
        Self {
            current_page: 1,
            total_items,
            items_per_page,
            max_window: DEFAULT_MAX_WINDOW,
        }
    }

    pub fn with_max_window(mut self, max_window: usize) -> Self {
        self.max_window = max_window;
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> ItemsPerPage {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Jump to `page`, clamped into range. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = clamp_page(page, self.total_pages());
        if target != page {
            log::debug!(
                "Clamped requested page {} to {} ({} pages)",
                page,
                target,
                self.total_pages()
            );
        }
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn prev(&mut self) -> bool {
        if self.controls().prev_disabled {
            return false;
        }
        self.go_to(self.current_page - 1)
    }

    pub fn next(&mut self) -> bool {
        if self.controls().next_disabled {
            return false;
        }
        self.go_to(self.current_page + 1)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages())
    }

    /// Changing the page size always starts over from page 1.
    pub fn set_items_per_page(&mut self, items_per_page: ItemsPerPage) {
        self.items_per_page = items_per_page;
        self.current_page = 1;
    }

    /// Row count changed (insert/delete upstream); keep the current page if it still exists.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = clamp_page(self.current_page, self.total_pages());
    }

    pub fn window(&self) -> Vec<usize> {
        compute_window(self.current_page, self.total_pages(), self.max_window)
    }

    pub fn controls(&self) -> ControlState {
        control_state(self.current_page, self.total_pages(), self.total_items)
    }

    pub fn row_range(&self) -> Option<(usize, usize)> {
        row_range(self.current_page, self.items_per_page, self.total_items)
    }

    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.current_page, self.items_per_page)
    }

    pub fn view(&self) -> PageView {
        PageView::new(self.current_page, self.total_items, self.items_per_page, self.max_window)
    }
}
