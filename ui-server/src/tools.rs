//! Tool definitions and dispatch

use crate::error::KdUiError;
use kdui_components::config::ConfigView;
use kdui_components::{
    ComponentType, TemplateRegistry, create_dashboard, create_form, create_landing_page,
    create_table,
};
use kdui_mcp_protocol::Tool;
use serde_json::{Value, json};
use tracing::debug;

/// Tools offered by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    /// Dashboard page template
    CreateDashboard,
    /// Form template
    CreateForm,
    /// Data table with search, sort and pagination
    CreateTable,
    /// Single registry component
    AddComponent,
    /// Full landing page document
    CreateLandingPage,
}

impl ToolName {
    /// Every tool in listing order
    pub const ALL: [ToolName; 5] = [
        ToolName::CreateDashboard,
        ToolName::CreateForm,
        ToolName::CreateTable,
        ToolName::AddComponent,
        ToolName::CreateLandingPage,
    ];

    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::CreateDashboard => "create_dashboard",
            ToolName::CreateForm => "create_form",
            ToolName::CreateTable => "create_table",
            ToolName::AddComponent => "add_component",
            ToolName::CreateLandingPage => "create_landing_page",
        }
    }

    /// Parse a wire name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    /// Parse a wire name or its short form without the `create_` prefix.
    /// `add_component` has no short form.
    pub fn parse_loose(name: &str) -> Option<Self> {
        Self::parse(name).or_else(|| {
            Self::ALL
                .into_iter()
                .filter(|tool| *tool != ToolName::AddComponent)
                .find(|tool| tool.as_str().strip_prefix("create_") == Some(name))
        })
    }

    /// Listing entry with description and input schema
    pub fn definition(self) -> Tool {
        Tool {
            name: self.as_str().to_string(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }

    fn description(self) -> String {
        match self {
            ToolName::CreateDashboard => "Create a complete Flask dashboard template with DaisyUI components. \
                Generates a responsive layout with sidebar or top navigation, stat cards, chart containers, \
                a filter bar and a transactions table. Returns a Jinja2 template extending base.html."
                .to_string(),
            ToolName::CreateForm => "Create a form template with DaisyUI styling. Predefined login, register, \
                contact and settings forms are used when no fields are given; custom fields support text, \
                email, password, number, textarea, select, checkbox, radio and file inputs. Includes CSRF \
                and error slots for Flask-WTF."
                .to_string(),
            ToolName::CreateTable => "Create a data table with client-side search, sortable columns and \
                pagination. Without rows the body loops over a Jinja variable (data_var, default 'data'); \
                with rows the first page is pre-rendered. Returns markup with its behavior script."
                .to_string(),
            ToolName::AddComponent => {
                let mut description =
                    "Add an individual UI component to a Flask template.\n\nAvailable components:\n"
                        .to_string();
                for ty in ComponentType::ALL {
                    description.push_str(&format!("- {}: {}\n", ty.as_str(), ty.description()));
                }
                description.push_str(
                    "\nEvery config field has a default, so an empty config renders a complete component.",
                );
                description
            }
            ToolName::CreateLandingPage => "Create a complete landing page HTML document with navbar, hero, \
                features, testimonials, pricing, call to action and footer sections."
                .to_string(),
        }
    }

    fn input_schema(self) -> Value {
        match self {
            ToolName::CreateDashboard => json!({
                "type": "object",
                "properties": {
                    "layout": {
                        "type": "string",
                        "enum": ["sidebar", "topnav"],
                        "default": "sidebar",
                        "description": "Navigation layout style"
                    },
                    "title": {
                        "type": "string",
                        "default": "Dashboard",
                        "description": "Dashboard page title"
                    },
                    "theme": {
                        "type": "string",
                        "enum": ["light", "dark", "auto"],
                        "default": "light",
                        "description": "Color theme"
                    },
                    "components": {
                        "type": "array",
                        "items": {
                            "type": "string",
                            "enum": ["stats", "charts", "table", "filters"]
                        },
                        "default": ["stats", "charts"],
                        "description": "Sections to include, rendered in the order stats, charts, filters, table"
                    }
                }
            }),
            ToolName::CreateForm => json!({
                "type": "object",
                "properties": {
                    "form_type": {
                        "type": "string",
                        "enum": ["login", "register", "contact", "settings", "custom"],
                        "default": "custom",
                        "description": "Predefined form type or custom"
                    },
                    "fields": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {"type": "string"},
                                "type": {
                                    "type": "string",
                                    "enum": ["text", "email", "password", "number", "textarea", "select", "checkbox", "radio", "file"]
                                },
                                "label": {"type": "string"},
                                "placeholder": {"type": "string"},
                                "required": {"type": "boolean", "default": false},
                                "options": {"type": "array", "items": {"type": "string"}}
                            },
                            "required": ["name"]
                        },
                        "description": "Form field configurations; overrides the predefined fields"
                    },
                    "method": {
                        "type": "string",
                        "enum": ["POST", "GET"],
                        "default": "POST"
                    },
                    "action": {
                        "type": "string",
                        "default": "",
                        "description": "Form submission URL"
                    },
                    "inline": {
                        "type": "boolean",
                        "default": false,
                        "description": "Lay fields out in a two-column grid"
                    },
                    "title": {
                        "type": "string",
                        "description": "Heading; defaults to the form type's title"
                    }
                }
            }),
            ToolName::CreateTable => json!({
                "type": "object",
                "properties": {
                    "columns": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": {"type": "string"},
                                "label": {"type": "string"},
                                "sortable": {"type": "boolean", "default": true},
                                "type": {
                                    "type": "string",
                                    "enum": ["text", "number", "date", "badge", "avatar"],
                                    "default": "text"
                                }
                            },
                            "required": ["name"]
                        },
                        "description": "Table column definitions"
                    },
                    "features": {
                        "type": "array",
                        "items": {
                            "type": "string",
                            "enum": ["search", "sort", "pagination", "actions"]
                        },
                        "default": ["search", "sort", "pagination"],
                        "description": "Table features to enable"
                    },
                    "rows_per_page": {
                        "type": "integer",
                        "minimum": 1,
                        "default": 10,
                        "description": "Rows per page for pagination"
                    },
                    "striped": {
                        "type": "boolean",
                        "default": true,
                        "description": "Alternating row colors"
                    },
                    "hoverable": {
                        "type": "boolean",
                        "default": true,
                        "description": "Highlight row on hover"
                    },
                    "title": {
                        "type": "string",
                        "default": "Data Table",
                        "description": "Heading above the table; empty for none"
                    },
                    "rows": {
                        "type": "array",
                        "items": {"type": "object"},
                        "description": "Rows to render now instead of looping over data_var"
                    },
                    "data_var": {
                        "type": "string",
                        "default": "data",
                        "description": "Jinja variable holding the rows"
                    },
                    "default_sort": {
                        "type": "object",
                        "properties": {
                            "column": {"type": "string"},
                            "direction": {"type": "string", "enum": ["asc", "desc"]}
                        },
                        "description": "Initial sort of bound rows"
                    }
                }
            }),
            ToolName::AddComponent => {
                let names: Vec<&str> = ComponentType::ALL.iter().map(|ty| ty.as_str()).collect();
                json!({
                    "type": "object",
                    "properties": {
                        "component_type": {
                            "type": "string",
                            "enum": names,
                            "description": "Type of component to generate"
                        },
                        "config": {
                            "type": "object",
                            "description": "Component-specific configuration",
                            "additionalProperties": true
                        }
                    },
                    "required": ["component_type"]
                })
            }
            ToolName::CreateLandingPage => json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "default": "KD UI Framework",
                        "description": "Document title"
                    },
                    "company_name": {
                        "type": "string",
                        "default": "Your Company",
                        "description": "Brand shown in the navbar and footer"
                    }
                }
            }),
        }
    }

    /// Generate markup for this tool
    pub fn run(self, registry: &TemplateRegistry, args: &Value) -> String {
        let mut ids = registry.id_strategy().generator();
        let ids = ids.as_mut();
        debug!(tool = self.as_str(), "Running tool");

        match self {
            ToolName::CreateDashboard => create_dashboard(args, ids),
            ToolName::CreateForm => create_form(args, ids),
            ToolName::CreateTable => create_table(args, ids),
            ToolName::AddComponent => {
                let view = ConfigView::new(args);
                let component_type = view.string("component_type", "");
                let config = view.get("config").unwrap_or(&Value::Null);
                registry.render_with(ids, &component_type, config)
            }
            ToolName::CreateLandingPage => create_landing_page(args, ids),
        }
    }
}

/// Listing of every tool
pub fn definitions() -> Vec<Tool> {
    ToolName::ALL.into_iter().map(ToolName::definition).collect()
}

/// Markup for a component type or tool name with a JSON config, as printed
/// by `kd-ui render`. Component types take precedence over tool short names.
pub fn render_target(
    registry: &TemplateRegistry,
    target: &str,
    config_json: &str,
) -> Result<String, KdUiError> {
    let config: Value =
        serde_json::from_str(config_json).map_err(|e| KdUiError::InvalidConfig(e.to_string()))?;

    if ComponentType::parse(target).is_none()
        && let Some(tool) = ToolName::parse_loose(target)
    {
        return Ok(tool.run(registry, &config));
    }
    Ok(registry.render(target, &config))
}
