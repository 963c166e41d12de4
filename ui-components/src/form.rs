//! Form generation
//!
//! Custom forms are built from field descriptions. The login, register,
//! contact and settings types supply a predefined field set when no fields are
//! given. All forms carry the CSRF token and error slots expected by
//! Flask-style templates.

use crate::config::{ConfigView, FromConfig, scalar_text};
use crate::ids::IdGenerator;
use crate::markup::escape_html;
use serde_json::Value;
use std::fmt::Write;
use tracing::debug;

/// Predefined form kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormType {
    /// Fields supplied by the caller
    #[default]
    Custom,
    /// Email and password
    Login,
    /// Account creation
    Register,
    /// Contact message
    Contact,
    /// Profile settings
    Settings,
}

impl FormType {
    /// Parse a form type name; unknown names are custom
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "login" => FormType::Login,
            "register" => FormType::Register,
            "contact" => FormType::Contact,
            "settings" => FormType::Settings,
            _ => FormType::Custom,
        }
    }
}

/// Input kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    /// Single-line text
    #[default]
    Text,
    /// Email address
    Email,
    /// Masked password
    Password,
    /// Numeric input
    Number,
    /// Multi-line text
    Textarea,
    /// Drop-down choice
    Select,
    /// Single checkbox
    Checkbox,
    /// Radio group
    Radio,
    /// File upload
    File,
}

impl FieldType {
    /// Parse a field type name; unknown names are text
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "email" => FieldType::Email,
            "password" => FieldType::Password,
            "number" => FieldType::Number,
            "textarea" => FieldType::Textarea,
            "select" => FieldType::Select,
            "checkbox" => FieldType::Checkbox,
            "radio" => FieldType::Radio,
            "file" => FieldType::File,
            _ => FieldType::Text,
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Number => "number",
            _ => "text",
        }
    }
}

/// Choice for select and radio fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    /// Submitted value
    pub value: String,
    /// Visible label
    pub label: String,
}

impl FieldOption {
    fn parse(value: &Value) -> Option<Self> {
        if let Some(text) = scalar_text(value) {
            return Some(Self {
                value: text.clone(),
                label: text,
            });
        }
        value.is_object().then(|| {
            let option = ConfigView::new(value);
            let value = option.string("value", "");
            Self {
                label: option.string_any(&["label", "text"], &value),
                value,
            }
        })
    }
}

/// One form field
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    /// Submitted name
    pub name: String,
    /// Input kind
    pub field_type: FieldType,
    /// Visible label
    pub label: String,
    /// Placeholder text
    pub placeholder: String,
    /// Mark as required
    pub required: bool,
    /// Choices for select and radio fields
    pub options: Vec<FieldOption>,
}

impl FormField {
    fn new(name: &str, field_type: FieldType, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            required: true,
            options: Vec::new(),
        }
    }

    fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn options(mut self, options: &[&str]) -> Self {
        self.options = options
            .iter()
            .map(|o| FieldOption {
                value: o.to_ascii_lowercase(),
                label: o.to_string(),
            })
            .collect();
        self
    }

    fn parse(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        let field = ConfigView::new(value);
        let name = field.string("name", "");
        let label = field
            .opt_string("label")
            .unwrap_or_else(|| humanize(&name));
        Some(Self {
            field_type: FieldType::parse(&field.string("type", "text")),
            label,
            placeholder: field.string("placeholder", ""),
            required: field.bool("required", false),
            options: field
                .list("options")
                .map(|list| list.iter().filter_map(FieldOption::parse).collect())
                .unwrap_or_default(),
            name,
        })
    }
}

/// `first_name` → `First name`
fn humanize(name: &str) -> String {
    let spaced = name.replace(['_', '-'], " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `create_form` arguments
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    /// Predefined type
    pub form_type: FormType,
    /// Caller-supplied fields; empty selects the predefined set
    pub fields: Vec<FormField>,
    /// `POST` or `GET`
    pub method: String,
    /// Submission URL
    pub action: String,
    /// Two-column layout
    pub inline: bool,
    /// Heading override
    pub title: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_type: FormType::Custom,
            fields: Vec::new(),
            method: "POST".to_string(),
            action: String::new(),
            inline: false,
            title: None,
        }
    }
}

impl FromConfig for FormConfig {
    fn from_config(config: ConfigView<'_>) -> Self {
        let method = match config.string("method", "POST").trim().to_ascii_uppercase().as_str() {
            "GET" => "GET",
            _ => "POST",
        };
        Self {
            form_type: FormType::parse(&config.string("form_type", "custom")),
            fields: config
                .list("fields")
                .map(|list| list.iter().filter_map(FormField::parse).collect())
                .unwrap_or_default(),
            method: method.to_string(),
            action: config.string("action", ""),
            inline: config.bool("inline", false),
            title: config.opt_string("title"),
        }
    }
}

/// Everything that differs between form kinds
struct FormLayout {
    title: &'static str,
    fields: Vec<FormField>,
    submit: &'static str,
    reset: Option<&'static str>,
    centered: bool,
    success_slot: bool,
    footer: Option<(&'static str, &'static str, &'static str)>,
}

fn layout(form_type: FormType, custom_fields: &[FormField]) -> FormLayout {
    const SECRET: &str = "••••••••";
    let custom = FormLayout {
        title: "Form",
        fields: custom_fields.to_vec(),
        submit: "Submit",
        reset: Some("Reset"),
        centered: false,
        success_slot: false,
        footer: None,
    };
    if !custom_fields.is_empty() {
        return custom;
    }

    match form_type {
        FormType::Custom => custom,
        FormType::Login => FormLayout {
            title: "Login",
            fields: vec![
                FormField::new("email", FieldType::Email, "Email", "email@example.com"),
                FormField::new("password", FieldType::Password, "Password", SECRET),
                FormField::new("remember", FieldType::Checkbox, "Remember me", "").optional(),
            ],
            submit: "Login",
            reset: None,
            centered: true,
            success_slot: false,
            footer: Some(("Don't have an account?", "Register", "/register")),
        },
        FormType::Register => FormLayout {
            title: "Create Account",
            fields: vec![
                FormField::new("name", FieldType::Text, "Full Name", "John Doe"),
                FormField::new("email", FieldType::Email, "Email", "email@example.com"),
                FormField::new("password", FieldType::Password, "Password", SECRET),
                FormField::new("confirm_password", FieldType::Password, "Confirm Password", SECRET),
                FormField::new("terms", FieldType::Checkbox, "I agree to the Terms and Conditions", ""),
            ],
            submit: "Create Account",
            reset: None,
            centered: true,
            success_slot: false,
            footer: Some(("Already have an account?", "Login", "/login")),
        },
        FormType::Contact => FormLayout {
            title: "Contact Us",
            fields: vec![
                FormField::new("first_name", FieldType::Text, "First Name", "John"),
                FormField::new("last_name", FieldType::Text, "Last Name", "Doe"),
                FormField::new("email", FieldType::Email, "Email", "email@example.com"),
                FormField::new("subject", FieldType::Text, "Subject", "How can we help?"),
                FormField::new("message", FieldType::Textarea, "Message", "Your message here..."),
            ],
            submit: "Send Message",
            reset: Some("Clear"),
            centered: false,
            success_slot: true,
            footer: None,
        },
        FormType::Settings => FormLayout {
            title: "Settings",
            fields: vec![
                FormField::new("display_name", FieldType::Text, "Display Name", "Jane Doe"),
                FormField::new("email", FieldType::Email, "Email", "email@example.com"),
                FormField::new("bio", FieldType::Textarea, "Bio", "Tell us about yourself").optional(),
                FormField::new("theme", FieldType::Select, "Theme", "")
                    .options(&["Light", "Dark", "System"])
                    .optional(),
                FormField::new("notifications", FieldType::Checkbox, "Email me about account activity", "")
                    .optional(),
            ],
            submit: "Save Changes",
            reset: Some("Cancel"),
            centered: false,
            success_slot: true,
            footer: None,
        },
    }
}

/// Render a form from `create_form` arguments
pub fn create_form(args: &Value, ids: &mut dyn IdGenerator) -> String {
    render_form(&FormConfig::from_value(args), ids)
}

/// Render a form
pub fn render_form(config: &FormConfig, ids: &mut dyn IdGenerator) -> String {
    let form_id = ids.next_id("form");
    let layout = layout(config.form_type, &config.fields);
    debug!(form = %form_id, fields = layout.fields.len(), "Rendering form");

    let title = config.title.as_deref().unwrap_or(layout.title);
    let (outer, card, heading) = if layout.centered {
        (
            "flex min-h-screen items-center justify-center bg-base-200 p-4",
            "card w-full max-w-md bg-base-100 shadow-xl",
            "card-title mb-4 justify-center text-2xl font-bold",
        )
    } else {
        (
            "mx-auto max-w-4xl p-6",
            "card bg-base-100 shadow-xl",
            "card-title mb-4 text-2xl font-bold",
        )
    };
    let grid = if config.inline {
        "grid grid-cols-1 gap-4 md:grid-cols-2"
    } else {
        "flex flex-col gap-4"
    };

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="{outer}">
  <div class="{card}">
    <div class="card-body">
      <h2 class="{heading}">{title}</h2>
      <form id="{form_id}" method="{method}" action="{action}"{enctype}>
        {{% if csrf_token %}}
        <input type="hidden" name="csrf_token" value="{{{{ csrf_token }}}}" />
        {{% endif %}}
        <div class="{grid}">
"#,
        title = escape_html(title),
        method = config.method,
        action = escape_html(&config.action),
        enctype = if layout.fields.iter().any(|f| f.field_type == FieldType::File) {
            " enctype=\"multipart/form-data\""
        } else {
            ""
        },
    );

    for field in &layout.fields {
        html.push_str(&field_html(&form_id, field, config.inline));
    }
    html.push_str("        </div>\n");

    if layout.success_slot {
        html.push_str("        {% if success %}\n        <div class=\"alert alert-success mt-4\" role=\"status\">\n          <span>{{ success }}</span>\n        </div>\n        {% endif %}\n");
    }
    html.push_str("        {% if error %}\n        <div class=\"alert alert-error mt-4\" role=\"alert\">\n          <span>{{ error }}</span>\n        </div>\n        {% endif %}\n");

    let actions = if layout.centered {
        "mt-6 flex flex-col"
    } else {
        "card-actions mt-6 justify-end"
    };
    let _ = writeln!(html, "        <div class=\"{actions}\">");
    if let Some(reset) = layout.reset {
        let _ = writeln!(
            html,
            "          <button type=\"reset\" class=\"btn btn-ghost\">{reset}</button>"
        );
    }
    let _ = writeln!(
        html,
        "          <button type=\"submit\" class=\"btn btn-primary\">{}</button>\n        </div>",
        layout.submit
    );

    if let Some((prompt, link, url)) = layout.footer {
        let _ = writeln!(
            html,
            "        <div class=\"divider\">OR</div>\n        <p class=\"text-center text-sm\">{} <a href=\"{url}\" class=\"link link-primary\">{link}</a></p>",
            escape_html(prompt)
        );
    }
    html.push_str("      </form>\n    </div>\n  </div>\n</div>\n");
    html
}

fn field_html(form_id: &str, field: &FormField, inline: bool) -> String {
    let id = format!("{form_id}-{}", field.name);
    let id = escape_html(&id);
    let name = escape_html(&field.name);
    let label = escape_html(&field.label);
    let placeholder = escape_html(&field.placeholder);
    let required = if field.required { " required" } else { "" };

    let label_row = format!(
        "            <label class=\"label\" for=\"{id}\">\n              <span class=\"label-text\">{label}</span>\n            </label>\n"
    );

    match field.field_type {
        FieldType::Checkbox => format!(
            r#"          <div class="form-control">
            <label class="label cursor-pointer justify-start gap-2" for="{id}">
              <input type="checkbox" id="{id}" name="{name}" class="checkbox checkbox-primary"{required} />
              <span class="label-text">{label}</span>
            </label>
          </div>
"#
        ),
        FieldType::Radio => {
            let mut html = format!(
                "          <fieldset class=\"form-control w-full\">\n            <legend class=\"label\"><span class=\"label-text\">{label}</span></legend>\n"
            );
            for (index, option) in field.options.iter().enumerate() {
                let _ = writeln!(
                    html,
                    "            <label class=\"label cursor-pointer justify-start gap-2\">\n              <input type=\"radio\" name=\"{name}\" value=\"{}\" class=\"radio radio-primary\"{} />\n              <span class=\"label-text\">{}</span>\n            </label>",
                    escape_html(&option.value),
                    if index == 0 { required } else { "" },
                    escape_html(&option.label)
                );
            }
            html.push_str("          </fieldset>\n");
            html
        }
        FieldType::Select => {
            let mut html = format!(
                "          <div class=\"form-control w-full\">\n{label_row}            <select id=\"{id}\" name=\"{name}\" class=\"select select-bordered w-full\"{required}>\n              <option value=\"\">Select {label}</option>\n"
            );
            for option in &field.options {
                let _ = writeln!(
                    html,
                    "              <option value=\"{}\">{}</option>",
                    escape_html(&option.value),
                    escape_html(&option.label)
                );
            }
            html.push_str("            </select>\n          </div>\n");
            html
        }
        FieldType::Textarea => format!(
            "          <div class=\"form-control w-full{span}\">\n{label_row}            <textarea id=\"{id}\" name=\"{name}\" placeholder=\"{placeholder}\" class=\"textarea textarea-bordered h-24 w-full\"{required}></textarea>\n          </div>\n",
            span = if inline { " md:col-span-2" } else { "" }
        ),
        FieldType::File => format!(
            "          <div class=\"form-control w-full\">\n{label_row}            <input type=\"file\" id=\"{id}\" name=\"{name}\" class=\"file-input file-input-bordered w-full\"{required} />\n          </div>\n"
        ),
        FieldType::Text | FieldType::Email | FieldType::Password | FieldType::Number => format!(
            "          <div class=\"form-control w-full\">\n{label_row}            <input type=\"{}\" id=\"{id}\" name=\"{name}\" placeholder=\"{placeholder}\" class=\"input input-bordered w-full\"{required} />\n          </div>\n",
            field.field_type.input_type()
        ),
    }
}
