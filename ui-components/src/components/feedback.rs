//! Small status components: stat cards, alerts, badges, buttons, progress
//! bars and skeletons

use super::{BADGE_VARIANTS, BUTTON_VARIANTS, COLORS, Component};
use crate::config::{ConfigView, FromConfig, lookup};
use crate::ids::IdGenerator;
use crate::markup::{escape_html, format_number, icon, opt_icon, script_json};

/// Metric display card
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    /// Metric name
    pub title: String,
    /// Metric value
    pub value: String,
    /// Secondary line
    pub description: String,
    /// Color of the value
    pub color: String,
    /// Change indicator such as `+12%`
    pub trend: Option<String>,
    /// Icon name or markup
    pub icon: Option<String>,
}

impl Default for StatCard {
    fn default() -> Self {
        Self {
            title: "Stat Title".to_string(),
            value: "0".to_string(),
            description: "Description".to_string(),
            color: "primary".to_string(),
            trend: None,
            icon: None,
        }
    }
}

impl FromConfig for StatCard {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            title: config.string("title", &defaults.title),
            value: config.string("value", &defaults.value),
            description: config.string("description", &defaults.description),
            color: config.string("color", &defaults.color),
            trend: config.opt_string("trend"),
            icon: config.opt_string("icon"),
        }
    }
}

impl Component for StatCard {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let color = lookup(&COLORS, &self.color);
        let figure = self
            .icon
            .as_deref()
            .map(|i| {
                format!(
                    "    <div class=\"stat-figure text-{color}\">{}</div>\n",
                    icon(i, "w-8 h-8")
                )
            })
            .unwrap_or_default();
        let trend = self
            .trend
            .as_deref()
            .map(|trend| {
                let trend = trend.trim();
                let (class, arrow) = if trend.starts_with('+') {
                    ("text-success", "↗︎ ")
                } else if trend.starts_with('-') {
                    ("text-error", "↘︎ ")
                } else {
                    ("text-base-content/70", "")
                };
                format!(
                    "<span class=\"{class} font-medium\">{arrow}{}</span> ",
                    escape_html(trend)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<div class="stats shadow">
  <div class="stat">
{figure}    <div class="stat-title">{title}</div>
    <div class="stat-value text-{color}">{value}</div>
    <div class="stat-desc">{trend}{description}</div>
  </div>
</div>
"#,
            title = escape_html(&self.title),
            value = escape_html(&self.value),
            description = escape_html(&self.description),
        )
    }
}

/// Alert kinds: (name, daisyUI class, icon path)
const ALERT_KINDS: [(&str, &str, &str); 4] = [
    (
        "info",
        "alert-info",
        "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    ),
    (
        "success",
        "alert-success",
        "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
    ),
    (
        "warning",
        "alert-warning",
        "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z",
    ),
    (
        "error",
        "alert-error",
        "M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z",
    ),
];

const TOAST_POSITIONS: [(&str, &str); 6] = [
    ("top-end", "toast-top toast-end"),
    ("top-start", "toast-top toast-start"),
    ("top-center", "toast-top toast-center"),
    ("bottom-end", "toast-bottom toast-end"),
    ("bottom-start", "toast-bottom toast-start"),
    ("bottom-center", "toast-bottom toast-center"),
];

/// Page-wide toast helper, defined once no matter how many alerts render
const TOAST_HELPER: &str = r#"  if (!window.KDToast) {
    window.KDToast = {
      dismiss: function (id) {
        var el = document.getElementById(id);
        if (!el) { return; }
        el.classList.add('opacity-0');
        setTimeout(function () { el.remove(); }, 300);
      },
      schedule: function (id, ms) {
        if (ms > 0) {
          setTimeout(function () { window.KDToast.dismiss(id); }, ms);
        }
      }
    };
  }
"#;

/// Toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Text shown in the toast
    pub message: String,
    /// info, success, warning or error
    pub kind: String,
    /// Auto-dismiss delay; 0 keeps the toast until dismissed
    pub duration_ms: u64,
    /// Screen corner or edge
    pub position: String,
    /// Show a close button
    pub dismissable: bool,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            message: "This is an alert message".to_string(),
            kind: "info".to_string(),
            duration_ms: 5000,
            position: "top-end".to_string(),
            dismissable: true,
        }
    }
}

impl FromConfig for Alert {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            message: config.string("message", &defaults.message),
            kind: config.string("type", &defaults.kind),
            duration_ms: config.usize("duration", defaults.duration_ms as usize) as u64,
            position: config.string("position", &defaults.position),
            dismissable: config.bool("dismissable", defaults.dismissable),
        }
    }
}

impl Component for Alert {
    fn render(&self, ids: &mut dyn IdGenerator) -> String {
        let id = ids.next_id("toast");
        let kind = self.kind.trim();
        let (_, class, path) = ALERT_KINDS
            .iter()
            .find(|(name, _, _)| name.eq_ignore_ascii_case(kind))
            .unwrap_or(&ALERT_KINDS[0]);
        let position = lookup(&TOAST_POSITIONS, &self.position);
        let id_js = script_json(&id);

        let close = if self.dismissable {
            "\n    <button type=\"button\" class=\"btn btn-sm btn-ghost btn-circle\" aria-label=\"Dismiss\" onclick=\"window.KDToast.dismiss(this.closest('.alert').id)\">✕</button>"
                .to_string()
        } else {
            String::new()
        };

        format!(
            r#"<div class="toast {position} z-50">
  <div id="{id}" class="alert {class} shadow-lg transition-opacity duration-300" role="alert">
    <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="{path}" /></svg>
    <span>{message}</span>{close}
  </div>
</div>
<script>
{TOAST_HELPER}  window.KDToast.schedule({id_js}, {duration});
</script>
"#,
            message = escape_html(&self.message),
            duration = self.duration_ms,
        )
    }
}

const BADGE_SIZES: [(&str, &str); 4] = [
    ("md", ""),
    ("xs", " badge-xs"),
    ("sm", " badge-sm"),
    ("lg", " badge-lg"),
];

/// Status label
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    /// Label text
    pub text: String,
    /// Variant name
    pub variant: String,
    /// xs, sm, md or lg
    pub size: String,
}

impl Default for Badge {
    fn default() -> Self {
        Self {
            text: "Badge".to_string(),
            variant: "default".to_string(),
            size: "md".to_string(),
        }
    }
}

impl FromConfig for Badge {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            text: config.string("text", &defaults.text),
            variant: config.string_any(&["variant", "color"], &defaults.variant),
            size: config.string("size", &defaults.size),
        }
    }
}

impl Component for Badge {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        format!(
            "<span class=\"badge {}{}\">{}</span>\n",
            lookup(&BADGE_VARIANTS, &self.variant),
            lookup(&BADGE_SIZES, &self.size),
            escape_html(&self.text)
        )
    }
}

const BUTTON_SIZES: [(&str, &str); 4] = [
    ("md", ""),
    ("xs", " btn-xs"),
    ("sm", " btn-sm"),
    ("lg", " btn-lg"),
];

const BUTTON_TYPES: [(&str, &str); 3] = [
    ("button", "button"),
    ("submit", "submit"),
    ("reset", "reset"),
];

/// Button, or a link styled as one when `url` is set
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Label
    pub text: String,
    /// Variant name
    pub variant: String,
    /// xs, sm, md or lg
    pub size: String,
    /// Link target
    pub url: Option<String>,
    /// Icon name or markup
    pub icon: Option<String>,
    /// Render disabled
    pub disabled: bool,
    /// button, submit or reset
    pub button_type: String,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            text: "Button".to_string(),
            variant: "primary".to_string(),
            size: "md".to_string(),
            url: None,
            icon: None,
            disabled: false,
            button_type: "button".to_string(),
        }
    }
}

impl FromConfig for Button {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            text: config.string("text", &defaults.text),
            variant: config.string("variant", &defaults.variant),
            size: config.string("size", &defaults.size),
            url: config.opt_string("url"),
            icon: config.opt_string("icon"),
            disabled: config.bool("disabled", false),
            button_type: config.string("type", &defaults.button_type),
        }
    }
}

impl Component for Button {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let class = format!(
            "btn {}{}",
            lookup(&BUTTON_VARIANTS, &self.variant),
            lookup(&BUTTON_SIZES, &self.size)
        );
        let label = format!(
            "{}{}",
            opt_icon(self.icon.as_deref(), "w-4 h-4"),
            escape_html(&self.text)
        );

        match &self.url {
            Some(url) if self.disabled => format!(
                "<a class=\"{class} btn-disabled\" role=\"button\" aria-disabled=\"true\" data-href=\"{}\">{label}</a>\n",
                escape_html(url)
            ),
            Some(url) => format!(
                "<a href=\"{}\" class=\"{class}\" role=\"button\">{label}</a>\n",
                escape_html(url)
            ),
            None => format!(
                "<button type=\"{}\" class=\"{class}\"{}>{label}</button>\n",
                lookup(&BUTTON_TYPES, &self.button_type),
                if self.disabled { " disabled" } else { "" }
            ),
        }
    }
}

const PROGRESS_VARIANTS: [(&str, &str); 9] = [
    ("default", "bg-primary"),
    ("primary", "bg-primary"),
    ("secondary", "bg-secondary"),
    ("accent", "bg-accent"),
    ("success", "bg-success"),
    ("warning", "bg-warning"),
    ("destructive", "bg-error"),
    ("error", "bg-error"),
    ("info", "bg-info"),
];

/// Progress bar
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Current value
    pub value: f64,
    /// Value at 100%; non-positive values mean 100
    pub max: f64,
    /// Fill color variant
    pub variant: String,
    /// Show the percentage next to the bar
    pub show_label: bool,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            value: 50.0,
            max: 100.0,
            variant: "primary".to_string(),
            show_label: false,
        }
    }
}

impl Progress {
    /// Filled share in percent, clamped to 0..=100
    pub fn percent(&self) -> f64 {
        let max = if self.max > 0.0 { self.max } else { 100.0 };
        (self.value * 100.0 / max).clamp(0.0, 100.0)
    }
}

impl FromConfig for Progress {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            value: config.f64("value", defaults.value),
            max: config.f64("max", defaults.max),
            variant: config.string_any(&["variant", "color"], &defaults.variant),
            show_label: config.bool("show_label", false),
        }
    }
}

impl Component for Progress {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let percent = format_number(self.percent());
        let max = if self.max > 0.0 { self.max } else { 100.0 };
        let label = if self.show_label {
            format!("\n  <span class=\"text-sm font-medium tabular-nums\">{percent}%</span>")
        } else {
            String::new()
        };

        format!(
            r#"<div class="kd-progress flex w-full items-center gap-3">
  <div class="relative h-2 w-full overflow-hidden rounded-full bg-base-300" role="progressbar" aria-valuemin="0" aria-valuemax="{max}" aria-valuenow="{value}">
    <div class="h-full {fill} transition-all" style="width: {percent}%"></div>
  </div>{label}
</div>
"#,
            max = format_number(max),
            value = format_number(self.value),
            fill = lookup(&PROGRESS_VARIANTS, &self.variant),
        )
    }
}

/// Skeleton shapes
const SKELETON_KINDS: [&str; 5] = ["text", "circle", "rectangle", "card", "avatar"];

/// Loading placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    /// text, circle, rectangle, card or avatar
    pub kind: String,
    /// Number of placeholders, 1..=50
    pub count: usize,
    /// Circle and avatar diameter
    pub size: String,
    /// Rectangle height
    pub height: String,
    /// Line and rectangle width
    pub width: String,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            kind: "text".to_string(),
            count: 3,
            size: "48px".to_string(),
            height: "120px".to_string(),
            width: "100%".to_string(),
        }
    }
}

impl FromConfig for Skeleton {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            kind: config.string("type", &defaults.kind),
            count: config.usize("count", defaults.count).clamp(1, 50),
            size: config.string("size", &defaults.size),
            height: config.string("height", &defaults.height),
            width: config.string("width", &defaults.width),
        }
    }
}

impl Component for Skeleton {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let kind = SKELETON_KINDS
            .iter()
            .find(|k| k.eq_ignore_ascii_case(self.kind.trim()))
            .copied()
            .unwrap_or(SKELETON_KINDS[0]);
        let size = escape_html(&self.size);
        let height = escape_html(&self.height);
        let width = escape_html(&self.width);

        let mut body = String::new();
        match kind {
            "circle" => {
                body.push_str("  <div class=\"flex flex-wrap gap-4\">\n");
                for _ in 0..self.count {
                    body.push_str(&format!(
                        "    <div class=\"skeleton shrink-0 rounded-full\" style=\"width: {size}; height: {size}\"></div>\n"
                    ));
                }
                body.push_str("  </div>\n");
            }
            "rectangle" => {
                for _ in 0..self.count {
                    body.push_str(&format!(
                        "  <div class=\"skeleton rounded-box\" style=\"width: {width}; height: {height}\"></div>\n"
                    ));
                }
            }
            "card" => {
                body.push_str("  <div class=\"grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3\">\n");
                for _ in 0..self.count {
                    body.push_str(
                        r#"    <div class="flex flex-col gap-4 rounded-box border border-base-300 p-4">
      <div class="skeleton h-32 w-full"></div>
      <div class="skeleton h-4 w-28"></div>
      <div class="skeleton h-4 w-full"></div>
      <div class="skeleton h-4 w-full"></div>
    </div>
"#,
                    );
                }
                body.push_str("  </div>\n");
            }
            "avatar" => {
                for _ in 0..self.count {
                    body.push_str(&format!(
                        r#"  <div class="flex items-center gap-4">
    <div class="skeleton shrink-0 rounded-full" style="width: {size}; height: {size}"></div>
    <div class="flex flex-col gap-2">
      <div class="skeleton h-4 w-20"></div>
      <div class="skeleton h-4 w-28"></div>
    </div>
  </div>
"#
                    ));
                }
            }
            _ => {
                body.push_str(&format!(
                    "  <div class=\"flex flex-col gap-2\" style=\"width: {width}\">\n"
                ));
                for line in 0..self.count {
                    let span = if line + 1 == self.count && self.count > 1 {
                        "w-3/4"
                    } else {
                        "w-full"
                    };
                    body.push_str(&format!("    <div class=\"skeleton h-4 {span}\"></div>\n"));
                }
                body.push_str("  </div>\n");
            }
        }

        format!(
            "<div class=\"kd-skeleton kd-skeleton-{kind} flex flex-col gap-4\" aria-busy=\"true\" aria-live=\"polite\">\n{body}</div>\n"
        )
    }
}
