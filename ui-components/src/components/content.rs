//! Content containers: cards, modals, tabs, typography and charts
//!
//! `content` fields of cards, modals and tabs are markup slots and are
//! inserted verbatim; every other text field is escaped.

use super::Component;
use crate::config::{ConfigView, FromConfig, lookup, scalar_text};
use crate::ids::IdGenerator;
use crate::markup::{escape_html, script_json};
use serde_json::{Value, json};

/// Content container
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Heading
    pub title: String,
    /// Body markup
    pub content: String,
    /// Show the action row
    pub actions: bool,
    /// Action button label
    pub action_text: String,
    /// Header image URL
    pub image: Option<String>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            title: "Card Title".to_string(),
            content: "Card content goes here".to_string(),
            actions: false,
            action_text: "Action".to_string(),
            image: None,
        }
    }
}

impl FromConfig for Card {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            title: config.string("title", &defaults.title),
            content: config.string("content", &defaults.content),
            actions: config.bool("actions", false),
            action_text: config.string("action_text", &defaults.action_text),
            image: config.opt_string("image"),
        }
    }
}

impl Component for Card {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let mut html = String::from("<div class=\"card bg-base-100 shadow-xl\">\n");
        if let Some(image) = &self.image {
            html.push_str(&format!(
                "  <figure><img src=\"{}\" alt=\"{}\" /></figure>\n",
                escape_html(image),
                escape_html(&self.title)
            ));
        }
        html.push_str(&format!(
            "  <div class=\"card-body\">\n    <h2 class=\"card-title\">{}</h2>\n    <div>{}</div>\n",
            escape_html(&self.title),
            self.content
        ));
        if self.actions {
            html.push_str(&format!(
                "    <div class=\"card-actions justify-end\">\n      <button type=\"button\" class=\"btn btn-primary\">{}</button>\n    </div>\n",
                escape_html(&self.action_text)
            ));
        }
        html.push_str("  </div>\n</div>\n");
        html
    }
}

/// Dialog with its trigger button
#[derive(Debug, Clone, PartialEq)]
pub struct Modal {
    /// Element id; generated when absent
    pub id: Option<String>,
    /// Heading
    pub title: String,
    /// Body markup
    pub content: String,
    /// Trigger label
    pub trigger_text: String,
    /// Close button label
    pub close_text: String,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            id: None,
            title: "Modal Title".to_string(),
            content: "Modal content goes here".to_string(),
            trigger_text: "Open Modal".to_string(),
            close_text: "Close".to_string(),
        }
    }
}

impl FromConfig for Modal {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            id: config.opt_string("id"),
            title: config.string("title", &defaults.title),
            content: config.string("content", &defaults.content),
            trigger_text: config.string("trigger_text", &defaults.trigger_text),
            close_text: config.string("close_text", &defaults.close_text),
        }
    }
}

impl Component for Modal {
    fn render(&self, ids: &mut dyn IdGenerator) -> String {
        let id = self.id.clone().unwrap_or_else(|| ids.next_id("modal"));
        let id = escape_html(&id);
        format!(
            r#"<label for="{id}" class="btn">{trigger}</label>
<input type="checkbox" id="{id}" class="modal-toggle" />
<div class="modal" role="dialog" aria-labelledby="{id}-title">
  <div class="modal-box">
    <h3 id="{id}-title" class="text-lg font-bold">{title}</h3>
    <div class="py-4">{content}</div>
    <div class="modal-action">
      <label for="{id}" class="btn">{close}</label>
    </div>
  </div>
  <label class="modal-backdrop" for="{id}">{close}</label>
</div>
"#,
            trigger = escape_html(&self.trigger_text),
            title = escape_html(&self.title),
            content = self.content,
            close = escape_html(&self.close_text),
        )
    }
}

/// One tab
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    /// Tab label
    pub label: String,
    /// Panel markup
    pub content: String,
    /// Initially selected
    pub active: bool,
}

const TAB_STYLES: [(&str, &str); 3] = [
    ("lifted", "tabs-lifted"),
    ("bordered", "tabs-bordered"),
    ("boxed", "tabs-boxed"),
];

/// Tabbed content
#[derive(Debug, Clone, PartialEq)]
pub struct Tabs {
    /// Tabs in display order
    pub tabs: Vec<Tab>,
    /// lifted, bordered or boxed
    pub style: String,
}

impl Default for Tabs {
    fn default() -> Self {
        let tab = |n: usize| Tab {
            label: format!("Tab {n}"),
            content: format!("Content {n}"),
            active: n == 1,
        };
        Self {
            tabs: vec![tab(1), tab(2), tab(3)],
            style: "lifted".to_string(),
        }
    }
}

impl FromConfig for Tabs {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        let tabs = match config.list("tabs") {
            Some(list) => list
                .iter()
                .filter(|v| v.is_object())
                .map(|v| {
                    let tab = ConfigView::new(v);
                    Tab {
                        label: tab.string_any(&["label", "title"], "Tab"),
                        content: tab.string("content", ""),
                        active: tab.bool("active", false),
                    }
                })
                .collect(),
            None => defaults.tabs,
        };
        Self {
            tabs,
            style: config.string("style", &defaults.style),
        }
    }
}

impl Component for Tabs {
    fn render(&self, ids: &mut dyn IdGenerator) -> String {
        let group = ids.next_id("tabs");
        let selected = self.tabs.iter().position(|t| t.active).unwrap_or(0);

        let mut html = format!(
            "<div role=\"tablist\" class=\"tabs {}\">\n",
            lookup(&TAB_STYLES, &self.style)
        );
        for (index, tab) in self.tabs.iter().enumerate() {
            let checked = if index == selected { " checked" } else { "" };
            html.push_str(&format!(
                r#"  <input type="radio" name="{group}" role="tab" class="tab" aria-label="{label}"{checked} />
  <div role="tabpanel" class="tab-content rounded-box border-base-300 bg-base-100 p-6">
    {content}
  </div>
"#,
                label = escape_html(&tab.label),
                content = tab.content,
            ));
        }
        html.push_str("</div>\n");
        html
    }
}

/// Text style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypographyKind {
    P,
    H1,
    H2,
    H3,
    H4,
    Lead,
    Large,
    Small,
    Muted,
    Blockquote,
    Code,
    List,
}

impl TypographyKind {
    fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "h1" => Self::H1,
            "h2" => Self::H2,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "lead" => Self::Lead,
            "large" => Self::Large,
            "small" => Self::Small,
            "muted" => Self::Muted,
            "blockquote" => Self::Blockquote,
            "code" => Self::Code,
            "list" => Self::List,
            _ => Self::P,
        }
    }

    /// (tag, classes)
    fn element(self) -> (&'static str, &'static str) {
        match self {
            Self::P => ("p", "leading-7 [&:not(:first-child)]:mt-6"),
            Self::H1 => ("h1", "scroll-m-20 text-4xl font-extrabold tracking-tight lg:text-5xl"),
            Self::H2 => ("h2", "scroll-m-20 border-b border-base-300 pb-2 text-3xl font-semibold tracking-tight"),
            Self::H3 => ("h3", "scroll-m-20 text-2xl font-semibold tracking-tight"),
            Self::H4 => ("h4", "scroll-m-20 text-xl font-semibold tracking-tight"),
            Self::Lead => ("p", "text-xl text-base-content/70"),
            Self::Large => ("div", "text-lg font-semibold"),
            Self::Small => ("small", "text-sm font-medium leading-none"),
            Self::Muted => ("p", "text-sm text-base-content/60"),
            Self::Blockquote => ("blockquote", "mt-6 border-l-2 border-base-300 pl-6 italic"),
            Self::Code => ("code", "relative rounded bg-base-200 px-[0.3rem] py-[0.2rem] font-mono text-sm font-semibold"),
            Self::List => ("ul", "my-6 ml-6 list-disc [&>li]:mt-2"),
        }
    }
}

/// Headings, paragraphs and other text styles
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    /// Style name
    pub kind: String,
    /// Text for every style except `list`
    pub text: String,
    /// Entries for `list`
    pub items: Vec<String>,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            kind: "p".to_string(),
            text: "Typography".to_string(),
            items: vec![
                "First item".to_string(),
                "Second item".to_string(),
                "Third item".to_string(),
            ],
        }
    }
}

impl FromConfig for Typography {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            kind: config.string("type", &defaults.kind),
            text: config.string("text", &defaults.text),
            items: config
                .string_list("items")
                .filter(|items| !items.is_empty())
                .unwrap_or(defaults.items),
        }
    }
}

impl Component for Typography {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let kind = TypographyKind::parse(&self.kind);
        let (tag, class) = kind.element();
        if kind == TypographyKind::List {
            let items: String = self
                .items
                .iter()
                .map(|item| format!("  <li>{}</li>\n", escape_html(item)))
                .collect();
            format!("<{tag} class=\"{class}\">\n{items}</{tag}>\n")
        } else {
            format!(
                "<{tag} class=\"{class}\">{}</{tag}>\n",
                escape_html(&self.text)
            )
        }
    }
}

const CHART_TYPES: [(&str, &str); 6] = [
    ("line", "line"),
    ("bar", "bar"),
    ("pie", "pie"),
    ("doughnut", "doughnut"),
    ("radar", "radar"),
    ("polararea", "polarArea"),
];

/// Card wrapping a Chart.js canvas
#[derive(Debug, Clone, PartialEq)]
pub struct ChartContainer {
    /// Canvas id; generated when absent
    pub id: Option<String>,
    /// Card heading
    pub title: String,
    /// CSS height of the chart area
    pub height: String,
    /// Chart.js chart type
    pub chart_type: String,
    /// X axis labels
    pub labels: Vec<String>,
    /// Data points
    pub data: Vec<f64>,
    /// Legend label
    pub dataset_label: String,
}

impl Default for ChartContainer {
    fn default() -> Self {
        Self {
            id: None,
            title: "Chart".to_string(),
            height: "400px".to_string(),
            chart_type: "line".to_string(),
            labels: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
                .map(String::from)
                .to_vec(),
            data: vec![12.0, 19.0, 3.0, 5.0, 2.0, 3.0],
            dataset_label: "Dataset".to_string(),
        }
    }
}

impl FromConfig for ChartContainer {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        let data = config
            .list("data")
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| scalar_text(v).and_then(|s| s.trim().parse::<f64>().ok()))
                    .filter(|f| f.is_finite())
                    .collect()
            })
            .unwrap_or(defaults.data);
        Self {
            id: config.opt_string("id"),
            title: config.string("title", &defaults.title),
            height: config.string("height", &defaults.height),
            chart_type: config.string("chart_type", &defaults.chart_type),
            labels: config.string_list("labels").unwrap_or(defaults.labels),
            data,
            dataset_label: config.string("dataset_label", &defaults.dataset_label),
        }
    }
}

impl Component for ChartContainer {
    fn render(&self, ids: &mut dyn IdGenerator) -> String {
        let id = self.id.clone().unwrap_or_else(|| ids.next_id("chart"));
        let chart = json!({
            "type": lookup(&CHART_TYPES, &self.chart_type),
            "data": {
                "labels": self.labels,
                "datasets": [{
                    "label": self.dataset_label,
                    "data": self.data.iter().map(|f| number_value(*f)).collect::<Vec<_>>(),
                    "borderColor": "rgb(37, 99, 235)",
                    "backgroundColor": "rgba(37, 99, 235, 0.2)",
                    "tension": 0.3
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false
            }
        });

        format!(
            r#"<div class="card bg-base-100 shadow-xl">
  <div class="card-body">
    <h2 class="card-title">{title}</h2>
    <div style="height: {height};">
      <canvas id="{id_attr}"></canvas>
    </div>
  </div>
</div>
<script>
  document.addEventListener('DOMContentLoaded', function () {{
    var canvas = document.getElementById({id_js});
    if (!canvas || typeof Chart === 'undefined') {{ return; }}
    new Chart(canvas, {config});
  }});
</script>
"#,
            title = escape_html(&self.title),
            height = escape_html(&self.height),
            id_attr = escape_html(&id),
            id_js = script_json(&id),
            config = script_json(&chart),
        )
    }
}

/// Whole numbers serialize without a fraction
fn number_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < 9.0e15 {
        json!(f as i64)
    } else {
        json!(f)
    }
}
