//! Landing page sections: hero, features, testimonials, pricing, call to
//! action and footer

use super::Component;
use crate::config::{ConfigView, FromConfig, lookup, scalar_text};
use crate::ids::IdGenerator;
use crate::markup::{escape_html, icon, initials};
use chrono::Datelike;
use serde_json::Value;

fn subtitle_html(subtitle: &str, class: &str) -> String {
    if subtitle.is_empty() {
        String::new()
    } else {
        format!(
            "\n    <p class=\"{class}\">{}</p>",
            escape_html(subtitle)
        )
    }
}

fn objects<'a>(config: &ConfigView<'a>, key: &str) -> Option<Vec<ConfigView<'a>>> {
    config.list(key).map(|list| {
        list.iter()
            .filter(|v| v.is_object())
            .map(ConfigView::new)
            .collect()
    })
}

/// Page hero
#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    /// Headline
    pub title: String,
    /// Supporting line
    pub subtitle: String,
    /// Primary call to action label
    pub cta_primary: String,
    /// Primary call to action link
    pub cta_primary_url: String,
    /// Secondary call to action label; omitted when empty
    pub cta_secondary: String,
    /// Secondary call to action link
    pub cta_secondary_url: String,
    /// `center` or `left`
    pub alignment: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "Build Something Amazing".to_string(),
            subtitle: "Create beautiful, responsive interfaces with professional components that just work.".to_string(),
            cta_primary: "Get Started".to_string(),
            cta_primary_url: "#".to_string(),
            cta_secondary: "Learn More".to_string(),
            cta_secondary_url: "#".to_string(),
            alignment: "center".to_string(),
        }
    }
}

impl FromConfig for Hero {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            title: config.string("title", &defaults.title),
            subtitle: config.string("subtitle", &defaults.subtitle),
            cta_primary: config.string("cta_primary", &defaults.cta_primary),
            cta_primary_url: config.string("cta_primary_url", &defaults.cta_primary_url),
            cta_secondary: config.string("cta_secondary", &defaults.cta_secondary),
            cta_secondary_url: config.string("cta_secondary_url", &defaults.cta_secondary_url),
            alignment: config.string("alignment", &defaults.alignment),
        }
    }
}

impl Component for Hero {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let (text_align, justify) = if self.alignment.eq_ignore_ascii_case("left") {
            ("text-left", "justify-start")
        } else {
            ("text-center", "justify-center")
        };
        let secondary = if self.cta_secondary.is_empty() {
            String::new()
        } else {
            format!(
                "\n        <a href=\"{}\" class=\"btn btn-outline btn-lg\">{}</a>",
                escape_html(&self.cta_secondary_url),
                escape_html(&self.cta_secondary)
            )
        };

        format!(
            r#"<section class="hero min-h-[70vh] bg-gradient-to-b from-base-100 to-base-200">
  <div class="hero-content {text_align}">
    <div class="max-w-3xl">
      <h1 class="text-5xl font-bold tracking-tight md:text-6xl">{title}</h1>
      <p class="py-6 text-lg text-base-content/70">{subtitle}</p>
      <div class="flex flex-wrap gap-4 {justify}">
        <a href="{primary_url}" class="btn btn-primary btn-lg">{primary}</a>{secondary}
      </div>
    </div>
  </div>
</section>
"#,
            title = escape_html(&self.title),
            subtitle = escape_html(&self.subtitle),
            primary_url = escape_html(&self.cta_primary_url),
            primary = escape_html(&self.cta_primary),
        )
    }
}

/// One feature tile
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Icon name or markup
    pub icon: String,
    /// Heading
    pub title: String,
    /// Body text
    pub description: String,
}

impl Feature {
    fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

const FEATURE_COLUMNS: [(&str, &str); 3] = [
    ("3", "md:grid-cols-2 lg:grid-cols-3"),
    ("2", "md:grid-cols-2"),
    ("4", "md:grid-cols-2 lg:grid-cols-4"),
];

/// Feature grid
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    /// Section heading
    pub title: String,
    /// Section subheading
    pub subtitle: String,
    /// Grid columns on wide screens: 2, 3 or 4
    pub columns: usize,
    /// Tiles in display order
    pub features: Vec<Feature>,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            title: "Features".to_string(),
            subtitle: "Everything you need to ship faster".to_string(),
            columns: 3,
            features: vec![
                Feature::new("zap", "Fast", "Optimized for speed from the first render."),
                Feature::new("shield-check", "Secure", "Sensible defaults that keep your data safe."),
                Feature::new("smartphone", "Responsive", "Looks great on every screen size."),
            ],
        }
    }
}

impl FromConfig for Features {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            title: config.string("title", &defaults.title),
            subtitle: config.string("subtitle", &defaults.subtitle),
            columns: config.usize("columns", defaults.columns),
            features: objects(&config, "features")
                .map(|list| {
                    list.iter()
                        .map(|f| Feature {
                            icon: f.string("icon", "star"),
                            title: f.string("title", ""),
                            description: f.string("description", ""),
                        })
                        .collect()
                })
                .unwrap_or(defaults.features),
        }
    }
}

impl Component for Features {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let grid = lookup(&FEATURE_COLUMNS, &self.columns.to_string());
        let tiles: String = self
            .features
            .iter()
            .map(|f| {
                format!(
                    r#"      <div class="card border border-base-300 bg-base-100 shadow-sm transition-shadow hover:shadow-md">
        <div class="card-body">
          <div class="mb-2 flex h-12 w-12 items-center justify-center rounded-lg bg-primary/10 text-primary">{}</div>
          <h3 class="card-title text-lg">{}</h3>
          <p class="text-base-content/70">{}</p>
        </div>
      </div>
"#,
                    icon(&f.icon, "w-6 h-6"),
                    escape_html(&f.title),
                    escape_html(&f.description)
                )
            })
            .collect();

        format!(
            r#"<section id="features" class="bg-base-100 py-20">
  <div class="container mx-auto px-4">
    <div class="mb-12 text-center">
    <h2 class="text-4xl font-bold">{title}</h2>{subtitle}
    </div>
    <div class="grid grid-cols-1 gap-8 {grid}">
{tiles}    </div>
  </div>
</section>
"#,
            title = escape_html(&self.title),
            subtitle = subtitle_html(&self.subtitle, "mt-4 text-lg text-base-content/70"),
        )
    }
}

/// Customer quote
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    /// Author name
    pub name: String,
    /// Author role
    pub role: String,
    /// Author company
    pub company: String,
    /// Quote text
    pub quote: String,
    /// Image URL or initials; derived from the name when empty
    pub avatar: String,
}

impl Testimonial {
    fn new(name: &str, role: &str, company: &str, quote: &str) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            company: company.to_string(),
            quote: quote.to_string(),
            avatar: String::new(),
        }
    }

    fn avatar_html(&self) -> String {
        let avatar = self.avatar.trim();
        let is_image = avatar.starts_with("http://")
            || avatar.starts_with("https://")
            || avatar.starts_with('/')
            || avatar.starts_with("data:image/");
        if is_image {
            format!(
                "<div class=\"avatar\"><div class=\"w-12 rounded-full\"><img src=\"{}\" alt=\"{}\" /></div></div>",
                escape_html(avatar),
                escape_html(&self.name)
            )
        } else {
            let text = if avatar.is_empty() {
                initials(&self.name)
            } else {
                avatar.to_string()
            };
            format!(
                "<div class=\"avatar placeholder\"><div class=\"w-12 rounded-full bg-primary text-primary-content\"><span>{}</span></div></div>",
                escape_html(&text)
            )
        }
    }
}

/// Testimonial grid
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonials {
    /// Section heading
    pub title: String,
    /// Section subheading
    pub subtitle: String,
    /// Quotes in display order
    pub testimonials: Vec<Testimonial>,
}

impl Default for Testimonials {
    fn default() -> Self {
        Self {
            title: "What Our Customers Say".to_string(),
            subtitle: "Trusted by teams around the world".to_string(),
            testimonials: vec![
                Testimonial::new(
                    "Alex Morgan",
                    "Engineering Lead",
                    "Acme Corp",
                    "We shipped our internal dashboard in a single afternoon.",
                ),
                Testimonial::new(
                    "Jordan Lee",
                    "Product Designer",
                    "Northwind",
                    "The components are consistent and accessible out of the box.",
                ),
                Testimonial::new(
                    "Sam Rivera",
                    "Founder",
                    "Brightside",
                    "Our customers noticed the new interface immediately.",
                ),
            ],
        }
    }
}

impl FromConfig for Testimonials {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            title: config.string("title", &defaults.title),
            subtitle: config.string("subtitle", &defaults.subtitle),
            testimonials: objects(&config, "testimonials")
                .map(|list| {
                    list.iter()
                        .map(|t| Testimonial {
                            name: t.string("name", ""),
                            role: t.string("role", ""),
                            company: t.string("company", ""),
                            quote: t.string("quote", ""),
                            avatar: t.string("avatar", ""),
                        })
                        .collect()
                })
                .unwrap_or(defaults.testimonials),
        }
    }
}

impl Component for Testimonials {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let cards: String = self
            .testimonials
            .iter()
            .map(|t| {
                let byline = match (t.role.is_empty(), t.company.is_empty()) {
                    (false, false) => format!("{}, {}", escape_html(&t.role), escape_html(&t.company)),
                    (false, true) => escape_html(&t.role),
                    (true, false) => escape_html(&t.company),
                    (true, true) => String::new(),
                };
                format!(
                    r#"      <div class="card bg-base-100 shadow-md">
        <div class="card-body">
          <p class="italic text-base-content/80">&ldquo;{quote}&rdquo;</p>
          <div class="mt-4 flex items-center gap-3">
            {avatar}
            <div>
              <div class="font-semibold">{name}</div>
              <div class="text-sm text-base-content/60">{byline}</div>
            </div>
          </div>
        </div>
      </div>
"#,
                    quote = escape_html(&t.quote),
                    avatar = t.avatar_html(),
                    name = escape_html(&t.name),
                )
            })
            .collect();

        format!(
            r#"<section id="testimonials" class="bg-base-200 py-20">
  <div class="container mx-auto px-4">
    <div class="mb-12 text-center">
    <h2 class="text-4xl font-bold">{title}</h2>{subtitle}
    </div>
    <div class="grid grid-cols-1 gap-8 md:grid-cols-3">
{cards}    </div>
  </div>
</section>
"#,
            title = escape_html(&self.title),
            subtitle = subtitle_html(&self.subtitle, "mt-4 text-lg text-base-content/70"),
        )
    }
}

/// Pricing plan
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Plan name
    pub name: String,
    /// Price text such as `$29`
    pub price: String,
    /// Billing period text
    pub period: String,
    /// Included features
    pub features: Vec<String>,
    /// Highlight as the recommended plan
    pub popular: bool,
    /// Button label
    pub cta_text: String,
    /// Button link
    pub cta_url: String,
}

impl Plan {
    fn new(name: &str, price: &str, period: &str, features: &[&str], popular: bool) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            period: period.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            popular,
            cta_text: "Get Started".to_string(),
            cta_url: "#".to_string(),
        }
    }
}

/// Pricing table
#[derive(Debug, Clone, PartialEq)]
pub struct Pricing {
    /// Section heading
    pub title: String,
    /// Section subheading
    pub subtitle: String,
    /// Plans in display order
    pub plans: Vec<Plan>,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            title: "Simple, Transparent Pricing".to_string(),
            subtitle: "Choose the plan that fits your team".to_string(),
            plans: vec![
                Plan::new("Starter", "$0", "per month", &["1 project", "Community support"], false),
                Plan::new(
                    "Pro",
                    "$29",
                    "per month",
                    &["Unlimited projects", "Priority support", "Custom themes"],
                    true,
                ),
                Plan::new(
                    "Enterprise",
                    "Custom",
                    "contact us",
                    &["Everything in Pro", "Dedicated support", "SLA guarantee"],
                    false,
                ),
            ],
        }
    }
}

impl FromConfig for Pricing {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            title: config.string("title", &defaults.title),
            subtitle: config.string("subtitle", &defaults.subtitle),
            plans: objects(&config, "plans")
                .map(|list| {
                    list.iter()
                        .map(|p| Plan {
                            name: p.string("name", ""),
                            price: p.string("price", ""),
                            period: p.string("period", ""),
                            features: p.string_list("features").unwrap_or_default(),
                            popular: p.bool("popular", false),
                            cta_text: p.string("cta_text", "Get Started"),
                            cta_url: p.string("cta_url", "#"),
                        })
                        .collect()
                })
                .unwrap_or(defaults.plans),
        }
    }
}

impl Component for Pricing {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let check = icon("check", "w-4 h-4 text-success");
        let cards: String = self
            .plans
            .iter()
            .map(|plan| {
                let features: String = plan
                    .features
                    .iter()
                    .map(|f| {
                        format!(
                            "            <li class=\"flex items-center gap-2\">{check}<span>{}</span></li>\n",
                            escape_html(f)
                        )
                    })
                    .collect();
                let (card_class, badge, button) = if plan.popular {
                    (
                        "border-2 border-primary shadow-xl",
                        "\n          <div class=\"badge badge-primary absolute -top-3 left-1/2 -translate-x-1/2\">Most Popular</div>",
                        "btn-primary",
                    )
                } else {
                    ("border border-base-300 shadow-md", "", "btn-outline")
                };
                format!(
                    r#"      <div class="card relative bg-base-100 {card_class}">{badge}
        <div class="card-body">
          <h3 class="text-xl font-semibold">{name}</h3>
          <div class="my-4">
            <span class="text-4xl font-bold">{price}</span>
            <span class="text-base-content/60">{period}</span>
          </div>
          <ul class="mb-6 space-y-2">
{features}          </ul>
          <a href="{cta_url}" class="btn {button} w-full">{cta_text}</a>
        </div>
      </div>
"#,
                    name = escape_html(&plan.name),
                    price = escape_html(&plan.price),
                    period = escape_html(&plan.period),
                    cta_url = escape_html(&plan.cta_url),
                    cta_text = escape_html(&plan.cta_text),
                )
            })
            .collect();

        format!(
            r#"<section id="pricing" class="bg-base-100 py-20">
  <div class="container mx-auto px-4">
    <div class="mb-12 text-center">
    <h2 class="text-4xl font-bold">{title}</h2>{subtitle}
    </div>
    <div class="mx-auto grid max-w-6xl grid-cols-1 gap-8 md:grid-cols-3">
{cards}    </div>
  </div>
</section>
"#,
            title = escape_html(&self.title),
            subtitle = subtitle_html(&self.subtitle, "mt-4 text-lg text-base-content/70"),
        )
    }
}

const CTA_VARIANTS: [(&str, &str); 4] = [
    ("primary", "bg-primary text-primary-content"),
    ("secondary", "bg-secondary text-secondary-content"),
    ("accent", "bg-accent text-accent-content"),
    ("neutral", "bg-neutral text-neutral-content"),
];

/// Call to action band
#[derive(Debug, Clone, PartialEq)]
pub struct Cta {
    /// Headline
    pub title: String,
    /// Supporting line
    pub subtitle: String,
    /// Button label
    pub button_text: String,
    /// Button link
    pub button_url: String,
    /// Background color
    pub variant: String,
}

impl Default for Cta {
    fn default() -> Self {
        Self {
            title: "Ready to Get Started?".to_string(),
            subtitle: "Join thousands of teams building better products.".to_string(),
            button_text: "Get Started".to_string(),
            button_url: "#".to_string(),
            variant: "primary".to_string(),
        }
    }
}

impl FromConfig for Cta {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            title: config.string("title", &defaults.title),
            subtitle: config.string("subtitle", &defaults.subtitle),
            button_text: config.string("button_text", &defaults.button_text),
            button_url: config.string("button_url", &defaults.button_url),
            variant: config.string("variant", &defaults.variant),
        }
    }
}

impl Component for Cta {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        format!(
            r#"<section class="{colors} py-20">
  <div class="container mx-auto px-4 text-center">
    <h2 class="text-4xl font-bold">{title}</h2>{subtitle}
    <a href="{url}" class="btn btn-lg mt-8 bg-base-100 text-base-content hover:bg-base-200">{button}</a>
  </div>
</section>
"#,
            colors = lookup(&CTA_VARIANTS, &self.variant),
            title = escape_html(&self.title),
            subtitle = subtitle_html(&self.subtitle, "mt-4 text-lg opacity-90"),
            url = escape_html(&self.button_url),
            button = escape_html(&self.button_text),
        )
    }
}

/// Footer link
#[derive(Debug, Clone, PartialEq)]
pub struct FooterLink {
    /// Link text
    pub label: String,
    /// Link target
    pub url: String,
}

/// Footer link column
#[derive(Debug, Clone, PartialEq)]
pub struct FooterColumn {
    /// Column heading
    pub title: String,
    /// Links in display order
    pub links: Vec<FooterLink>,
}

impl FooterColumn {
    fn new(title: &str, labels: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            links: labels
                .iter()
                .map(|label| FooterLink {
                    label: label.to_string(),
                    url: "#".to_string(),
                })
                .collect(),
        }
    }

    fn parse(view: &ConfigView<'_>) -> Self {
        let links = view
            .list("links")
            .map(|links| links.iter().filter_map(parse_footer_link).collect())
            .unwrap_or_default();
        Self {
            title: view.string("title", ""),
            links,
        }
    }
}

fn parse_footer_link(value: &Value) -> Option<FooterLink> {
    if let Some(label) = scalar_text(value) {
        return Some(FooterLink {
            label,
            url: "#".to_string(),
        });
    }
    value.is_object().then(|| {
        let link = ConfigView::new(value);
        FooterLink {
            label: link.string_any(&["label", "text"], ""),
            url: link.string_any(&["url", "href"], "#"),
        }
    })
}

/// Page footer
#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    /// Company name
    pub company_name: String,
    /// Company blurb
    pub description: String,
    /// Link columns
    pub links: Vec<FooterColumn>,
    /// Copyright year
    pub year: i32,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            company_name: "Your Company".to_string(),
            description: "Building tools that help teams do their best work.".to_string(),
            links: vec![
                FooterColumn::new("Product", &["Features", "Pricing", "Changelog"]),
                FooterColumn::new("Company", &["About", "Blog", "Careers"]),
                FooterColumn::new("Resources", &["Documentation", "Support", "Privacy"]),
            ],
            year: chrono::Utc::now().year(),
        }
    }
}

impl FromConfig for Footer {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        let year = config
            .f64("year", f64::from(defaults.year))
            .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
        Self {
            company_name: config.string("company_name", &defaults.company_name),
            description: config.string("description", &defaults.description),
            links: objects(&config, "links")
                .map(|cols| cols.iter().map(FooterColumn::parse).collect())
                .unwrap_or(defaults.links),
            year,
        }
    }
}

impl Component for Footer {
    fn render(&self, _ids: &mut dyn IdGenerator) -> String {
        let columns: String = self
            .links
            .iter()
            .map(|col| {
                let links: String = col
                    .links
                    .iter()
                    .map(|l| {
                        format!(
                            "      <a href=\"{}\" class=\"link link-hover\">{}</a>\n",
                            escape_html(&l.url),
                            escape_html(&l.label)
                        )
                    })
                    .collect();
                format!(
                    "    <nav>\n      <h6 class=\"footer-title\">{}</h6>\n{links}    </nav>\n",
                    escape_html(&col.title)
                )
            })
            .collect();
        let company = escape_html(&self.company_name);

        format!(
            r#"<footer class="bg-base-200 text-base-content">
  <div class="footer container mx-auto p-10">
    <aside class="max-w-xs">
      <p class="text-lg font-bold">{company}</p>
      <p class="text-base-content/70">{description}</p>
    </aside>
{columns}  </div>
  <div class="border-t border-base-300 py-6 text-center text-sm text-base-content/60">
    <p>&copy; {year} {company}. All rights reserved.</p>
  </div>
</footer>
"#,
            description = escape_html(&self.description),
            year = self.year,
        )
    }
}
