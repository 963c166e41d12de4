//! Table configuration as read from `create_table` arguments

use crate::config::{ConfigView, FromConfig, scalar_text};
use serde_json::{Map, Value};

/// How a column's cells are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    /// Escaped text
    #[default]
    Text,
    /// Right-aligned number
    Number,
    /// Date text
    Date,
    /// Colored label; color from `{name}_color`
    Badge,
    /// Image from `{name}_url` plus label
    Avatar,
}

impl ColumnType {
    /// Parse a type name; unknown names are text
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "number" => ColumnType::Number,
            "date" => ColumnType::Date,
            "badge" => ColumnType::Badge,
            "avatar" => ColumnType::Avatar,
            _ => ColumnType::Text,
        }
    }
}

/// One table column
#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn {
    /// Row field name
    pub name: String,
    /// Header label
    pub label: String,
    /// Header is clickable when the sort feature is on
    pub sortable: bool,
    /// Cell rendering
    pub column_type: ColumnType,
}

impl TableColumn {
    /// Text column labelled with its name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            sortable: true,
            column_type: ColumnType::Text,
        }
    }

    /// Builder: header label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder: cell type
    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = column_type;
        self
    }

    /// Builder: disable sorting
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    fn parse(value: &Value) -> Option<Self> {
        if let Some(name) = scalar_text(value) {
            return Some(Self::new(name));
        }
        if !value.is_object() {
            return None;
        }
        let column = ConfigView::new(value);
        let name = column.string_any(&["name", "key", "field"], "");
        let label = column.string_any(&["label", "title"], &name);
        Some(Self {
            name,
            label,
            sortable: column.bool("sortable", true),
            column_type: ColumnType::parse(&column.string("type", "text")),
        })
    }
}

/// Optional table behaviors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFeatures {
    /// Search box filtering rows by text
    pub search: bool,
    /// Clickable sortable headers
    pub sort: bool,
    /// Page strip and row count footer
    pub pagination: bool,
    /// Edit/delete column
    pub actions: bool,
}

impl Default for TableFeatures {
    fn default() -> Self {
        Self {
            search: true,
            sort: true,
            pagination: true,
            actions: false,
        }
    }
}

impl TableFeatures {
    /// No optional behavior
    pub fn none() -> Self {
        Self {
            search: false,
            sort: false,
            pagination: false,
            actions: false,
        }
    }

    /// Build from feature names; unknown names are ignored
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut features = Self::none();
        for name in names {
            match name.as_ref().trim().to_ascii_lowercase().as_str() {
                "search" | "filter" => features.search = true,
                "sort" | "sorting" => features.sort = true,
                "pagination" | "paginate" => features.pagination = true,
                "actions" => features.actions = true,
                _ => {}
            }
        }
        features
    }

    /// Whether the behavior script is needed
    pub fn interactive(&self) -> bool {
        self.search || self.sort || self.pagination
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Ascending,
    /// Largest first
    Descending,
}

impl SortDirection {
    /// Parse `asc`/`desc` style names; anything else is ascending
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// Value for the `aria-sort` attribute
    pub fn aria(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Initial sort state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultSort {
    /// Column name
    pub column: String,
    /// Direction
    pub direction: SortDirection,
}

/// Full table configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Columns in display order
    pub columns: Vec<TableColumn>,
    /// Enabled behaviors
    pub features: TableFeatures,
    /// Rows per page, at least 1
    pub rows_per_page: usize,
    /// Alternating row colors
    pub striped: bool,
    /// Highlight rows on hover
    pub hoverable: bool,
    /// Card heading; omitted when empty
    pub title: String,
    /// Rows bound at generation time. `None` renders a template loop instead.
    pub rows: Option<Vec<Map<String, Value>>>,
    /// Template variable holding the rows when they are not bound
    pub data_var: String,
    /// Initial sort
    pub default_sort: Option<DefaultSort>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: vec![TableColumn::new("name").label("Name")],
            features: TableFeatures::default(),
            rows_per_page: 10,
            striped: true,
            hoverable: true,
            title: "Data Table".to_string(),
            rows: None,
            data_var: "data".to_string(),
            default_sort: None,
        }
    }
}

impl TableConfig {
    /// Index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Columns plus the actions column, as spanned by the placeholder row
    pub fn column_span(&self) -> usize {
        self.columns.len() + usize::from(self.features.actions)
    }
}

impl FromConfig for TableConfig {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();

        let rows: Option<Vec<Map<String, Value>>> = config.list("rows").map(|rows| {
            rows.iter()
                .filter_map(|row| row.as_object().cloned())
                .collect()
        });

        let mut columns: Vec<TableColumn> = config
            .list("columns")
            .map(|list| {
                list.iter()
                    .filter_map(TableColumn::parse)
                    .filter(|c| !c.name.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if columns.is_empty() {
            // Fall back to the keys of the first bound row
            columns = rows
                .as_ref()
                .and_then(|rows| rows.first())
                .map(|row| row.keys().map(TableColumn::new).collect())
                .unwrap_or(defaults.columns);
        }

        let features = match config.string_list("features") {
            Some(names) => TableFeatures::from_names(&names),
            None => defaults.features,
        };

        let data_var = config
            .opt_string("data_var")
            .map(|v| v.trim().to_string())
            .filter(|v| is_identifier(v))
            .unwrap_or(defaults.data_var);

        let default_sort = config.object("default_sort").and_then(|sort| {
            sort.opt_string("column").map(|column| DefaultSort {
                column,
                direction: SortDirection::parse(&sort.string("direction", "asc")),
            })
        });

        Self {
            columns,
            features,
            rows_per_page: config.usize("rows_per_page", defaults.rows_per_page).max(1),
            striped: config.bool("striped", defaults.striped),
            hoverable: config.bool("hoverable", defaults.hoverable),
            title: config.string("title", &defaults.title),
            rows,
            data_var,
            default_sort,
        }
    }
}

/// Whether `s` can be used as a template variable or attribute name
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
