//! Server-side mirror of the table behavior script.
//!
//! The script filters, then sorts, then paginates, recomputing from scratch on
//! every interaction. [`TableView`] runs the same pipeline over cell text so
//! pre-rendered bound tables start in the state the script would produce.

use super::config::SortDirection;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare like `localeCompare(a, b, undefined, {numeric: true, sensitivity: 'base'})`
/// for the ASCII range: case-insensitive, with digit runs compared by value.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ordering = compare_digit_runs(&take_digits(&mut left), &take_digits(&mut right));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// One page of a row set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Rows in the filtered set
    pub total_rows: usize,
    /// Page size, at least 1
    pub rows_per_page: usize,
    /// Current page, 1-based; 1 when there are no pages
    pub page: usize,
    /// `ceil(total_rows / rows_per_page)`
    pub total_pages: usize,
    /// Index of the first row on the page
    pub start: usize,
    /// Index one past the last row on the page
    pub end: usize,
}

impl PageWindow {
    /// Window for `page`, clamped to the available pages
    pub fn new(total_rows: usize, rows_per_page: usize, page: usize) -> Self {
        let rows_per_page = rows_per_page.max(1);
        let total_pages = total_rows.div_ceil(rows_per_page);
        let page = page.clamp(1, total_pages.max(1));
        let start = ((page - 1) * rows_per_page).min(total_rows);
        let end = (start + rows_per_page).min(total_rows);
        Self {
            total_rows,
            rows_per_page,
            page,
            total_pages,
            start,
            end,
        }
    }

    /// 1-based number of the first shown row, 0 when empty
    pub fn first_shown(&self) -> usize {
        if self.start < self.end { self.start + 1 } else { 0 }
    }

    /// 1-based number of the last shown row
    pub fn last_shown(&self) -> usize {
        self.end
    }

    /// Whether the given index into the filtered set is on this page
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}

/// Row set with search, sort and page state
///
/// Search covers the data cells only, like the behavior script, which skips
/// the `data-table-actions` cell of each row.
#[derive(Debug, Clone)]
pub struct TableView {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    rows_per_page: usize,
    query: String,
    sort: Option<(usize, SortDirection)>,
    page: usize,
}

impl TableView {
    /// View over rows of cell text, one cell per column
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>, rows_per_page: usize) -> Self {
        Self {
            columns,
            rows,
            rows_per_page: rows_per_page.max(1),
            query: String::new(),
            sort: None,
            page: 1,
        }
    }

    /// Set the search text and return to page 1
    pub fn search(&mut self, query: &str) {
        self.query = query.to_lowercase();
        self.page = 1;
    }

    /// Click a column header: ascending, unless that column is already
    /// ascending. Unknown columns are ignored.
    pub fn sort_by(&mut self, column: &str) {
        let Some(index) = self.columns.iter().position(|c| c == column) else {
            return;
        };
        let direction = match self.sort {
            Some((current, SortDirection::Ascending)) if current == index => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.set_sort(index, direction);
    }

    /// Set the sort state directly
    pub fn set_sort(&mut self, index: usize, direction: SortDirection) {
        self.sort = Some((index, direction));
        self.page = 1;
    }

    /// Current sort column name and direction
    pub fn sort_state(&self) -> Option<(&str, SortDirection)> {
        self.sort
            .and_then(|(index, direction)| self.columns.get(index).map(|c| (c.as_str(), direction)))
    }

    /// Jump to a page; clamped when the window is computed
    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    /// Indices of matching rows in display order
    pub fn ordered(&self) -> Vec<usize> {
        let mut matching: Vec<usize> = (0..self.rows.len())
            .filter(|&i| self.matches(&self.rows[i]))
            .collect();
        if let Some((column, direction)) = self.sort {
            matching.sort_by(|&a, &b| {
                let ordering = natural_cmp(self.cell(a, column), self.cell(b, column));
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        matching
    }

    /// Current page window over the matching rows
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.ordered().len(), self.rows_per_page, self.page)
    }

    /// Rows shown on the current page
    pub fn visible(&self) -> Vec<&[String]> {
        let ordered = self.ordered();
        let window = PageWindow::new(ordered.len(), self.rows_per_page, self.page);
        ordered[window.start..window.end]
            .iter()
            .map(|&i| self.rows[i].as_slice())
            .collect()
    }

    /// Text of one column over the visible rows
    pub fn visible_column(&self, column: &str) -> Vec<String> {
        let Some(index) = self.columns.iter().position(|c| c == column) else {
            return Vec::new();
        };
        self.visible()
            .into_iter()
            .map(|row| row.get(index).cloned().unwrap_or_default())
            .collect()
    }

    fn matches(&self, row: &[String]) -> bool {
        self.query.is_empty() || row.join(" ").to_lowercase().contains(&self.query)
    }

    fn cell(&self, row: usize, column: usize) -> &str {
        self.rows[row].get(column).map(String::as_str).unwrap_or("")
    }
}
