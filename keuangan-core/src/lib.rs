pub mod config;
pub mod error;
pub mod format;
pub mod layout;
pub mod pagination;
pub mod records;
mod window_tests;

pub use config::Config;
pub use error::KeuanganError;
pub use format::{
    format_date, format_date_short, format_date_with_weekday, format_datetime,
    format_entries_summary, format_number, format_rupiah, format_rupiah_decimal, parse_date,
    parse_rupiah,
};
pub use layout::{render_page_strip, render_page_summary, render_table};
pub use pagination::{
    ControlState, DEFAULT_MAX_WINDOW, ItemsPerPage, PageView, Paginator, compute_window,
    control_state, paginate, row_range, total_pages,
};
pub use records::{Akun, Pendapatan, RecordKind, Rekening, TableRow, load_records, total_amount};

/// A loaded record list together with its navigation state
#[derive(Debug, Clone)]
pub struct RecordList<T> {
    rows: Vec<T>,
    paginator: Paginator,
}

impl<T: TableRow> RecordList<T> {
    pub fn new(rows: Vec<T>, config: &Config) -> Self {
        let paginator =
            Paginator::new(rows.len(), config.items_per_page).with_max_window(config.max_window);
        Self { rows, paginator }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn paginator_mut(&mut self) -> &mut Paginator {
        &mut self.paginator
    }

    /// Rows on the current page
    pub fn page_rows(&self) -> &[T] {
        self.paginator.page_items(&self.rows)
    }

    pub fn view(&self) -> PageView {
        self.paginator.view()
    }

    /// Append a row, keeping the current page where possible.
    pub fn push(&mut self, row: T) {
        self.rows.push(row);
        self.paginator.set_total_items(self.rows.len());
    }

    /// Remove the row at `index`, if any; the current page is re-clamped.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.rows.len() {
            return None;
        }
        let row = self.rows.remove(index);
        self.paginator.set_total_items(self.rows.len());
        Some(row)
    }

    /// Table for the current page followed by the summary and navigation lines.
    pub fn render(&self) -> String {
        let view = self.view();
        let mut out = render_table(self.page_rows());
        out.push('\n');
        if T::amount_columns().is_empty() {
            out.push_str(&render_page_summary(&view));
        } else {
            out.push_str(&format_entries_summary(self.rows.len(), total_amount(&self.rows)));
            out.push('\n');
            out.push_str(&render_page_summary(&view));
        }
        out.push('\n');
        out.push_str(&render_page_strip(&view));
        out
    }
}
