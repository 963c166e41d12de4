//! Light/dark theme switch

use super::Component;
use crate::config::{ConfigView, FromConfig};
use crate::ids::IdGenerator;
use crate::markup::escape_html;

/// Theme persistence helper, installed once per page
const THEME_HELPER: &str = r#"  if (!window.KDTheme) {
    window.KDTheme = {
      apply: function (theme, key) {
        document.documentElement.setAttribute('data-theme', theme);
        try { localStorage.setItem(key, theme); } catch (e) {}
      },
      bindAll: function () {
        document.querySelectorAll('[data-theme-toggle]').forEach(function (toggle) {
          if (toggle.dataset.bound) { return; }
          toggle.dataset.bound = 'true';
          var key = toggle.dataset.storageKey;
          var light = toggle.dataset.light;
          var dark = toggle.dataset.dark;
          var saved = null;
          try { saved = localStorage.getItem(key); } catch (e) {}
          if (!saved && window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches) {
            saved = dark;
          }
          var input = toggle.querySelector('input[type="checkbox"]');
          if (saved) {
            window.KDTheme.apply(saved, key);
            input.checked = saved === dark;
          }
          input.addEventListener('change', function () {
            window.KDTheme.apply(input.checked ? dark : light, key);
          });
        });
      }
    };
  }
"#;

/// Theme toggle control
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeToggle {
    /// daisyUI theme for the unchecked state
    pub light_theme: String,
    /// daisyUI theme for the checked state
    pub dark_theme: String,
    /// `swap` (animated icons) or `toggle` (switch)
    pub style: String,
    /// localStorage key
    pub storage_key: String,
}

impl Default for ThemeToggle {
    fn default() -> Self {
        Self {
            light_theme: "light".to_string(),
            dark_theme: "dark".to_string(),
            style: "swap".to_string(),
            storage_key: "kd-theme".to_string(),
        }
    }
}

impl FromConfig for ThemeToggle {
    fn from_config(config: ConfigView<'_>) -> Self {
        let defaults = Self::default();
        Self {
            light_theme: config.string("light_theme", &defaults.light_theme),
            dark_theme: config.string("dark_theme", &defaults.dark_theme),
            style: config.string("style", &defaults.style),
            storage_key: config.string("storage_key", &defaults.storage_key),
        }
    }
}

impl Component for ThemeToggle {
    fn render(&self, ids: &mut dyn IdGenerator) -> String {
        let id = ids.next_id("theme-toggle");
        let data = format!(
            r#"data-theme-toggle data-light="{}" data-dark="{}" data-storage-key="{}""#,
            escape_html(&self.light_theme),
            escape_html(&self.dark_theme),
            escape_html(&self.storage_key)
        );

        let control = if self.style.eq_ignore_ascii_case("toggle") {
            format!(
                r#"<label id="{id}" class="flex cursor-pointer items-center gap-2" {data}>
  <span class="text-sm">Light</span>
  <input type="checkbox" class="toggle toggle-sm" aria-label="Toggle dark mode" />
  <span class="text-sm">Dark</span>
</label>"#
            )
        } else {
            format!(
                r#"<label id="{id}" class="btn btn-ghost btn-circle swap swap-rotate" {data}>
  <input type="checkbox" aria-label="Toggle dark mode" />
  <svg class="swap-off h-5 w-5 fill-current" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M5.64,17l-.71.71a1,1,0,0,0,0,1.41,1,1,0,0,0,1.41,0l.71-.71A1,1,0,0,0,5.64,17ZM5,12a1,1,0,0,0-1-1H3a1,1,0,0,0,0,2H4A1,1,0,0,0,5,12Zm7-7a1,1,0,0,0,1-1V3a1,1,0,0,0-2,0V4A1,1,0,0,0,12,5Zm0,2a5,5,0,1,0,5,5A5,5,0,0,0,12,7Zm0,8a3,3,0,1,1,3-3A3,3,0,0,1,12,15Zm6.36-8.36.71-.71a1,1,0,0,0-1.41-1.41l-.71.71a1,1,0,0,0,1.41,1.41ZM12,19a1,1,0,0,0-1,1v1a1,1,0,0,0,2,0V20A1,1,0,0,0,12,19Zm8-8H19a1,1,0,0,0,0,2h1a1,1,0,0,0,0-2Z"/></svg>
  <svg class="swap-on h-5 w-5 fill-current" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M21.64,13a1,1,0,0,0-1.05-.14,8.05,8.05,0,0,1-3.37.73A8.15,8.15,0,0,1,9.08,5.49a8.59,8.59,0,0,1,.25-2A1,1,0,0,0,8,2.36,10.14,10.14,0,1,0,22,14.05,1,1,0,0,0,21.64,13Z"/></svg>
</label>"#
            )
        };

        format!(
            "{control}\n<script>\n{THEME_HELPER}  window.KDTheme.bindAll();\n</script>\n"
        )
    }
}
