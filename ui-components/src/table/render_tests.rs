//! Tests for table markup

use super::{TableConfig, create_table, render_table};
use crate::config::FromConfig;
use crate::ids::SequentialIds;
use proptest::prelude::*;
use serde_json::{Value, json};

fn render(args: Value) -> String {
    create_table(&args, &mut SequentialIds::new())
}

fn numbered_buttons(html: &str) -> usize {
    html.matches("data-page=\"").count()
}

fn nav_buttons(html: &str) -> usize {
    html.matches("aria-label=\"Previous page\"").count() + html.matches("aria-label=\"Next page\"").count()
}

#[test]
fn test_template_loop_shell() {
    let html = render(json!({
        "columns": [
            {"name": "name", "label": "Name"},
            {"name": "status", "label": "Status", "type": "badge"},
            {"name": "amount", "label": "Amount", "type": "number", "sortable": false}
        ]
    }));

    assert!(html.contains("id=\"table-1\""));
    assert!(html.contains("<h2 class=\"card-title\">Data Table</h2>"));
    assert!(html.contains("data-table-search"));
    assert!(html.contains("table w-full table-zebra hover"));
    assert!(html.contains("{% for row in data %}"));
    assert!(html.contains("{% else %}"));
    assert!(html.contains("{% endfor %}"));
    assert!(html.contains("<td>{{ row.name }}</td>"));
    assert!(html.contains("badge-{{ row.status_color or 'primary' }}"));
    assert!(html.contains("<td class=\"text-right tabular-nums\">{{ row.amount }}</td>"));
    assert!(html.contains("colspan=\"3\""));
    assert!(html.contains("No data available"));
}

#[test]
fn test_sortable_headers() {
    let html = render(json!({
        "columns": [
            {"name": "name", "label": "Name"},
            {"name": "notes", "label": "Notes", "sortable": false}
        ]
    }));
    assert_eq!(html.matches("th class=\"cursor-pointer select-none\" data-sortable").count(), 1);
    assert!(html.contains("data-column=\"name\""));
    assert!(html.contains("<th>Notes</th>"));
    assert_eq!(html.matches('⇅').count(), 1);

    let unsorted = render(json!({"columns": ["name"], "features": ["search"]}));
    assert!(!unsorted.contains("data-sortable data-column"));
    assert!(!unsorted.contains('⇅'));
}

#[test]
fn test_actions_column() {
    let html = render(json!({"columns": ["name", "owner"], "features": ["actions"]}));
    assert!(html.contains("<th>Actions</th>"));
    assert!(html.contains("/edit/{{ row.id }}"));
    assert!(html.contains("colspan=\"3\""));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("data-table-search"));
}

#[test]
fn test_actions_cells_are_left_out_of_search() {
    let html = render(json!({
        "columns": ["name"],
        "features": ["search", "actions"],
        "rows": [{"id": 7, "name": "alpha-api"}]
    }));
    assert!(html.contains("<td data-table-actions>"));
    assert!(html.contains("/edit/7"));
    assert!(html.contains("!cell.hasAttribute('data-table-actions')"));
    assert!(!html.contains("row.textContent"));
}

#[test]
fn test_custom_data_var_and_odd_field_names() {
    let html = render(json!({"columns": ["first name"], "data_var": "people"}));
    assert!(html.contains("{% for row in people %}"));
    assert!(html.contains("{{ row['first name'] }}"));
}

#[test]
fn test_options_off() {
    let html = render(json!({
        "columns": ["name"],
        "striped": false,
        "hoverable": false,
        "title": "",
        "features": ["pagination"]
    }));
    assert!(html.contains("class=\"table w-full\""));
    assert!(!html.contains("card-title"));
    assert!(html.contains("data-table-pages hidden"));
}

#[test]
fn test_deferred_footer_is_filled_by_script() {
    let html = render(json!({"columns": ["name"]}));
    assert!(html.contains("<span data-table-total>0</span>"));
    assert_eq!(numbered_buttons(&html), 0);
    assert!(html.contains("var perPage = 10;"));
    assert!(html.contains("document.getElementById(\"table-1\")"));
    assert!(html.contains("numeric: true, sensitivity: 'base'"));
}

#[test]
fn test_bound_rows_search_example() {
    let html = render(json!({
        "columns": ["name"],
        "rows": [{"name": "alpha-api"}, {"name": "beta-dashboard"}, {"name": "gamma-service"}]
    }));
    assert!(!html.contains("{% for"));
    assert!(html.contains("<td>gamma-service</td>"));
    assert!(html.contains("<span data-table-start>1</span>"));
    assert!(html.contains("<span data-table-end>3</span>"));
    assert!(html.contains("<span data-table-total>3</span>"));
    assert_eq!(numbered_buttons(&html), 1);
    assert_eq!(nav_buttons(&html), 2);
}

#[test]
fn test_bound_rows_default_sort() {
    let html = render(json!({
        "columns": ["name", "updated"],
        "default_sort": {"column": "updated", "direction": "asc"},
        "rows": [
            {"name": "a", "updated": "2026-02-15"},
            {"name": "b", "updated": "2026-01-30"},
            {"name": "c", "updated": "2026-02-10"}
        ]
    }));
    let first = html.find("2026-01-30").unwrap();
    let second = html.find("2026-02-10").unwrap();
    let third = html.find("2026-02-15").unwrap();
    assert!(first < second && second < third);
    assert!(html.contains("aria-sort=\"ascending\""));
    assert!(html.contains("sort-asc"));
}

#[test]
fn test_bound_rows_hide_later_pages() {
    let rows: Vec<Value> = (1..=7).map(|n| json!({"name": format!("row {n}")})).collect();
    let html = render(json!({"columns": ["name"], "rows_per_page": 3, "rows": rows}));
    assert_eq!(html.matches("<tr hidden>").count(), 4);
    assert_eq!(numbered_buttons(&html), 3);
    assert!(html.contains("btn-active\" data-page=\"1\""));
    assert!(html.contains("<span data-table-end>3</span>"));
    assert!(html.contains("<span data-table-total>7</span>"));
}

#[test]
fn test_bound_zero_rows_single_placeholder() {
    let html = render(json!({"columns": ["a", "b"], "features": ["actions", "pagination"], "rows": []}));
    assert_eq!(html.matches("<tr data-table-empty>").count(), 1);
    assert!(html.contains("colspan=\"3\""));
    assert_eq!(numbered_buttons(&html), 0);
    assert_eq!(nav_buttons(&html), 0);
    assert!(html.contains("data-table-pages hidden"));
}

#[test]
fn test_bound_cells_are_escaped_and_typed() {
    let html = render(json!({
        "columns": [
            {"name": "name"},
            {"name": "status", "type": "badge"},
            {"name": "user", "type": "avatar"}
        ],
        "rows": [{
            "name": "<b>x</b>",
            "status": "Active",
            "status_color": "success",
            "user": "Kim",
            "user_url": "/a.png"
        }, {
            "name": "y",
            "status": "Odd",
            "status_color": "mystery"
        }]
    }));
    assert!(html.contains("<td>&lt;b&gt;x&lt;/b&gt;</td>"));
    assert!(html.contains("<span class=\"badge badge-success\">Active</span>"));
    assert!(html.contains("<span class=\"badge badge-primary\">Odd</span>"));
    assert!(html.contains("<img src=\"/a.png\" alt=\"Kim\" />"));
}

#[test]
fn test_script_never_contains_page_attribute_literal() {
    let html = render(json!({"columns": ["name"]}));
    let script_start = html.find("<script>").unwrap();
    assert!(!html[script_start..].contains("data-page=\""));
}

#[test]
fn test_two_tables_have_distinct_ids() {
    let mut ids = SequentialIds::new();
    let config = TableConfig::from_value(&json!({"columns": ["name"]}));
    let first = render_table(&config, &mut ids);
    let second = render_table(&config, &mut ids);
    assert!(first.contains("getElementById(\"table-1\")"));
    assert!(second.contains("getElementById(\"table-2\")"));
}

proptest! {
    #[test]
    fn prop_page_strip_matches_row_count(count in 0usize..60, per_page in 1usize..15) {
        let rows: Vec<Value> = (0..count).map(|n| json!({"name": format!("r{n}")})).collect();
        let html = render(json!({"columns": ["name"], "rows_per_page": per_page, "rows": rows}));

        let pages = count.div_ceil(per_page);
        prop_assert_eq!(numbered_buttons(&html), pages);
        prop_assert_eq!(nav_buttons(&html), if count > 0 { 2 } else { 0 });
        prop_assert_eq!(html.matches("<tr hidden>").count(), count.saturating_sub(per_page));
    }
}
