//! Table markup

use super::config::{ColumnType, SortDirection, TableColumn, TableConfig, is_identifier};
use super::script::behavior_script;
use super::view::{PageWindow, TableView};
use crate::components::COLORS;
use crate::config::{lookup, scalar_text};
use crate::ids::IdGenerator;
use crate::markup::escape_html;
use serde_json::{Map, Value};
use std::fmt::Write;
use tracing::debug;

const EMPTY_TEXT: &str = "No data available";

/// Render a table. Ids are drawn from `ids`.
pub fn render_table(config: &TableConfig, ids: &mut dyn IdGenerator) -> String {
    let id = ids.next_id("table");
    debug!(
        table = %id,
        columns = config.columns.len(),
        bound_rows = config.rows.as_ref().map(Vec::len),
        "Rendering table"
    );

    let mut html = String::new();
    let _ = writeln!(
        html,
        "<div id=\"{id}\" class=\"card bg-base-100 shadow-xl\" data-table>\n  <div class=\"card-body\">"
    );
    html.push_str(&toolbar(config));

    let mut table_class = String::from("table w-full");
    if config.striped {
        table_class.push_str(" table-zebra");
    }
    if config.hoverable {
        table_class.push_str(" hover");
    }
    let _ = writeln!(
        html,
        "    <div class=\"overflow-x-auto\">\n      <table class=\"{table_class}\">\n        <thead>\n          <tr>"
    );
    for column in &config.columns {
        html.push_str(&header_cell(config, column));
    }
    if config.features.actions {
        html.push_str("            <th>Actions</th>\n");
    }
    html.push_str("          </tr>\n        </thead>\n        <tbody data-table-body>\n");

    let window = match &config.rows {
        Some(rows) => {
            let (body, window) = bound_body(config, rows);
            html.push_str(&body);
            Some(window)
        }
        None => {
            html.push_str(&template_body(config));
            None
        }
    };
    html.push_str("        </tbody>\n      </table>\n    </div>\n");

    if config.features.pagination {
        html.push_str(&footer(window.as_ref()));
    }
    html.push_str("  </div>\n</div>\n");

    if config.features.interactive() {
        html.push_str(&behavior_script(&id, config));
    }
    html
}

fn toolbar(config: &TableConfig) -> String {
    if config.title.is_empty() && !config.features.search {
        return String::new();
    }
    let mut html =
        String::from("    <div class=\"mb-4 flex flex-wrap items-center justify-between gap-4\">\n");
    if !config.title.is_empty() {
        let _ = writeln!(
            html,
            "      <h2 class=\"card-title\">{}</h2>",
            escape_html(&config.title)
        );
    }
    if config.features.search {
        html.push_str("      <input type=\"search\" placeholder=\"Search...\" aria-label=\"Search table\" class=\"input input-bordered input-sm w-full max-w-xs\" data-table-search />\n");
    }
    html.push_str("    </div>\n");
    html
}

fn header_cell(config: &TableConfig, column: &TableColumn) -> String {
    let label = escape_html(&column.label);
    let align = if column.column_type == ColumnType::Number {
        " text-right"
    } else {
        ""
    };
    if !(config.features.sort && column.sortable) {
        return if align.is_empty() {
            format!("            <th>{label}</th>\n")
        } else {
            format!("            <th class=\"{}\">{label}</th>\n", align.trim())
        };
    }

    let (aria, state_class) = match &config.default_sort {
        Some(sort) if sort.column == column.name => match sort.direction {
            SortDirection::Ascending => (" aria-sort=\"ascending\"", " sort-asc"),
            SortDirection::Descending => (" aria-sort=\"descending\"", " sort-desc"),
        },
        _ => ("", ""),
    };
    format!(
        "            <th class=\"cursor-pointer select-none{align}{state_class}\" data-sortable data-column=\"{}\"{aria}>{label} <span class=\"sort-icon opacity-50\">⇅</span></th>\n",
        escape_html(&column.name)
    )
}

/// Template expression for a row field
fn field_expr(name: &str) -> String {
    if is_identifier(name) {
        format!("row.{name}")
    } else {
        // Bracket access keeps odd names such as `first name` valid
        let quoted = name.replace('\\', "\\\\").replace('\'', "\\'");
        format!("row['{quoted}']")
    }
}

fn template_body(config: &TableConfig) -> String {
    let mut html = format!("          {{% for row in {} %}}\n          <tr>\n", config.data_var);
    for column in &config.columns {
        let field = field_expr(&column.name);
        let cell = match column.column_type {
            ColumnType::Badge => {
                let color = field_expr(&format!("{}_color", column.name));
                format!(
                    "<td><span class=\"badge badge-{{{{ {color} or 'primary' }}}}\">{{{{ {field} }}}}</span></td>"
                )
            }
            ColumnType::Avatar => {
                let url = field_expr(&format!("{}_url", column.name));
                avatar_cell(&format!("{{{{ {url} }}}}"), &format!("{{{{ {field} }}}}"))
            }
            ColumnType::Number => {
                format!("<td class=\"text-right tabular-nums\">{{{{ {field} }}}}</td>")
            }
            ColumnType::Text | ColumnType::Date => format!("<td>{{{{ {field} }}}}</td>"),
        };
        let _ = writeln!(html, "            {cell}");
    }
    if config.features.actions {
        html.push_str(&actions_cell("{{ row.id }}"));
    }
    html.push_str("          </tr>\n          {% else %}\n");
    html.push_str(&placeholder_row(config));
    html.push_str("          {% endfor %}\n");
    html
}

fn avatar_cell(url: &str, label: &str) -> String {
    format!(
        "<td><div class=\"flex items-center gap-3\"><div class=\"avatar\"><div class=\"mask mask-squircle h-10 w-10\"><img src=\"{url}\" alt=\"{label}\" /></div></div><div>{label}</div></div></td>"
    )
}

fn actions_cell(id: &str) -> String {
    format!(
        "            <td data-table-actions>\n              <div class=\"flex gap-2\">\n                <a href=\"/edit/{id}\" class=\"btn btn-ghost btn-sm\">Edit</a>\n                <a href=\"/delete/{id}\" class=\"btn btn-error btn-sm\">Delete</a>\n              </div>\n            </td>\n"
    )
}

fn placeholder_row(config: &TableConfig) -> String {
    format!(
        "          <tr data-table-empty>\n            <td colspan=\"{}\" class=\"py-8 text-center text-base-content/60\">{EMPTY_TEXT}</td>\n          </tr>\n",
        config.column_span()
    )
}

fn field_text(row: &Map<String, Value>, key: &str) -> String {
    row.get(key).and_then(scalar_text).unwrap_or_default()
}

/// Bound rows in their initial order, with rows past the first page hidden
fn bound_body(config: &TableConfig, rows: &[Map<String, Value>]) -> (String, PageWindow) {
    let names: Vec<String> = config.columns.iter().map(|c| c.name.clone()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| names.iter().map(|name| field_text(row, name)).collect())
        .collect();
    let mut view = TableView::new(names, cells, config.rows_per_page);
    if let Some(sort) = &config.default_sort
        && let Some(index) = config.column_index(&sort.column)
    {
        view.set_sort(index, sort.direction);
    }

    let ordered = view.ordered();
    let window = if config.features.pagination {
        view.window()
    } else {
        PageWindow::new(ordered.len(), ordered.len().max(1), 1)
    };

    if ordered.is_empty() {
        return (placeholder_row(config), window);
    }

    let mut html = String::new();
    for (position, &index) in ordered.iter().enumerate() {
        let row = &rows[index];
        let hidden = if window.contains(position) { "" } else { " hidden" };
        let _ = writeln!(html, "          <tr{hidden}>");
        for column in &config.columns {
            let text = escape_html(&field_text(row, &column.name));
            let cell = match column.column_type {
                ColumnType::Badge => format!(
                    "<td><span class=\"badge badge-{}\">{text}</span></td>",
                    lookup(&COLORS, &field_text(row, &format!("{}_color", column.name)))
                ),
                ColumnType::Avatar => avatar_cell(
                    &escape_html(&field_text(row, &format!("{}_url", column.name))),
                    &text,
                ),
                ColumnType::Number => format!("<td class=\"text-right tabular-nums\">{text}</td>"),
                ColumnType::Text | ColumnType::Date => format!("<td>{text}</td>"),
            };
            let _ = writeln!(html, "            {cell}");
        }
        if config.features.actions {
            html.push_str(&actions_cell(&escape_html(&field_text(row, "id"))));
        }
        html.push_str("          </tr>\n");
    }
    (html, window)
}

/// Row count and page strip. Without bound rows the script fills both in.
fn footer(window: Option<&PageWindow>) -> String {
    let (first, last, total) = window
        .map(|w| (w.first_shown(), w.last_shown(), w.total_rows))
        .unwrap_or((0, 0, 0));
    let mut html = format!(
        r#"    <div class="mt-4 flex flex-wrap items-center justify-between gap-4">
      <div class="text-sm text-base-content/60">Showing <span data-table-start>{first}</span>–<span data-table-end>{last}</span> of <span data-table-total>{total}</span></div>
"#
    );

    match window.filter(|w| w.total_pages > 0) {
        Some(w) => {
            html.push_str("      <div class=\"join\" data-table-pages>\n");
            let _ = writeln!(
                html,
                "        <button type=\"button\" class=\"join-item btn btn-sm\" aria-label=\"Previous page\"{}>«</button>",
                if w.page <= 1 { " disabled" } else { "" }
            );
            for page in 1..=w.total_pages {
                let active = if page == w.page { " btn-active" } else { "" };
                let _ = writeln!(
                    html,
                    "        <button type=\"button\" class=\"join-item btn btn-sm{active}\" data-page=\"{page}\">{page}</button>"
                );
            }
            let _ = writeln!(
                html,
                "        <button type=\"button\" class=\"join-item btn btn-sm\" aria-label=\"Next page\"{}>»</button>",
                if w.page >= w.total_pages { " disabled" } else { "" }
            );
            html.push_str("      </div>\n");
        }
        None => html.push_str("      <div class=\"join\" data-table-pages hidden></div>\n"),
    }
    html.push_str("    </div>\n");
    html
}
