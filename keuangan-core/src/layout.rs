use crate::pagination::PageView;
use crate::records::TableRow;
use itertools::Itertools;

const FIRST: &str = "«";
const PREV: &str = "‹";
const NEXT: &str = "›";
const LAST: &str = "»";
const DISABLED: &str = "-";

/// Render the navigation strip, e.g. `« ‹ 4 [5] 6 › »`.
///
/// Disabled buttons become `-` and the current page is bracketed.
pub fn render_page_strip(view: &PageView) -> String {
    let button = |label: &str, disabled: bool| {
        if disabled {
            DISABLED.to_string()
        } else {
            label.to_string()
        }
    };

    let pages = view.window.iter().map(|&page| {
        if page == view.current_page {
            format!("[{}]", page)
        } else {
            page.to_string()
        }
    });

    std::iter::once(button(FIRST, view.controls.first_disabled))
        .chain(std::iter::once(button(PREV, view.controls.prev_disabled)))
        .chain(pages)
        .chain(std::iter::once(button(NEXT, view.controls.next_disabled)))
        .chain(std::iter::once(button(LAST, view.controls.last_disabled)))
        .join(" ")
}

/// `Menampilkan 11–20 dari 45 data (halaman 2/5)`
pub fn render_page_summary(view: &PageView) -> String {
    match view.row_range {
        Some((from, to)) => format!(
            "Menampilkan {}–{} dari {} data (halaman {}/{})",
            from + 1,
            to + 1,
            view.total_items,
            view.current_page,
            view.total_pages
        ),
        None => "Tidak ada data".to_string(),
    }
}

/// Plain-text table with a header row; amount columns are right-aligned.
pub fn render_table<T: TableRow>(rows: &[T]) -> String {
    let headers = T::headers();
    let body: Vec<Vec<String>> = rows.iter().map(TableRow::cells).collect();

    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            body.iter()
                .filter_map(|cells| cells.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_line = |cells: &[&str]| {
        cells
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let width = widths[col];
                if T::amount_columns().contains(&col) {
                    format!("{:>width$}", cell)
                } else {
                    format!("{:<width$}", cell)
                }
            })
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(render_line(headers));
    lines.push(widths.iter().map(|w| "-".repeat(*w)).join("-+-"));
    for cells in &body {
        let refs: Vec<&str> = cells.iter().map(String::as_str).collect();
        lines.push(render_line(&refs));
    }
    lines.join("\n")
}
