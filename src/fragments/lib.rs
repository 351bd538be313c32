//! # Fragments - Themed HTML Fragment Rendering
//!
//! A small layer over [minijinja](https://docs.rs/minijinja) for rendering HTML
//! fragments whose visual treatment lives in a named class theme instead of
//! being spelled out inside every template.
//!
//! ## The Problem
//!
//! Utility-class CSS makes markup noisy:
//! - Long class strings repeated across templates drift apart over time
//! - Selected/unselected variants get copy-pasted with small typos
//! - Changing a primitive's look means touching every page that uses it
//!
//! ## The Solution
//!
//! Fragments separates concerns:
//! - **Templates** define structure using Jinja2 syntax, always HTML auto-escaped
//! - **Classes** are registered by semantic name in a [`Theme`]
//! - The `classes` filter turns a semantic name into the class attribute value
//!
//! ## Quick Example
//!
//! ```rust
//! use fragments::{render, Theme};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Chip {
//!     label: String,
//! }
//!
//! let theme = Theme::new().add("chip", "px-3 py-1 rounded-full");
//!
//! let template = r#"<button class="{{ "chip" | classes }}">{{ label }}</button>"#;
//! let html = render(template, &Chip { label: "All".into() }, &theme).unwrap();
//! assert_eq!(html, r#"<button class="px-3 py-1 rounded-full">All</button>"#);
//! ```
//!
//! ## Missing Classes
//!
//! When a template asks for a class name the theme does not know, the filter
//! emits `missing-class-<name>` so the typo is visible in the rendered markup.
//! Use [`Classes::missing_indicator`] to change or silence the marker.
//!
//! ## Renderer for Multiple Templates
//!
//! For sites with many fragments, use [`Renderer`] to register them once. Named
//! templates can `{% include %}` each other.
//!
//! ```rust
//! use fragments::{Renderer, Theme};
//! use serde::Serialize;
//!
//! let theme = Theme::new().add("title", "font-bold");
//!
//! let mut renderer = Renderer::new(theme);
//! renderer
//!     .add_template("hero", r#"<h1 class="{{ "title" | classes }}">{{ title }}</h1>"#)
//!     .unwrap();
//!
//! # #[derive(Serialize)]
//! # struct Hero { title: String }
//! let html = renderer.render("hero", &Hero { title: "Blogs".into() }).unwrap();
//! assert_eq!(html, r#"<h1 class="font-bold">Blogs</h1>"#);
//! ```

use minijinja::{AutoEscape, Environment, HtmlEscape};
use serde::Serialize;
use std::collections::HashMap;

pub use minijinja::Error;

/// Default prefix emitted when a class name is not found.
pub const DEFAULT_MISSING_CLASS_INDICATOR: &str = "missing-class";

/// A registry of named class lists.
///
/// # Example
///
/// ```rust
/// use fragments::Classes;
///
/// let classes = Classes::new()
///     .add("button", "px-4 py-2")
///     .add("button_disabled", "opacity-40");
///
/// assert_eq!(classes.apply("button"), "px-4 py-2");
/// assert_eq!(classes.apply("typo"), "missing-class-typo");
/// ```
#[derive(Clone, Debug)]
pub struct Classes {
    classes: HashMap<String, String>,
    missing_indicator: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            classes: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_CLASS_INDICATOR.to_string(),
        }
    }
}

impl Classes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marker used for unknown class names. An empty marker makes
    /// unknown names render as an empty string.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named class list, replacing any previous entry with that name.
    pub fn add(mut self, name: &str, classes: &str) -> Self {
        self.classes.insert(name.to_string(), classes.to_string());
        self
    }

    /// Resolves a name to its class list.
    pub fn apply(&self, name: &str) -> String {
        match self.classes.get(name) {
            Some(classes) => classes.clone(),
            None if self.missing_indicator.is_empty() => String::new(),
            None => format!("{}-{}", self.missing_indicator, name),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// A named collection of classes used when rendering templates.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    classes: Classes,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_classes(classes: Classes) -> Self {
        Self { classes }
    }

    /// Adds a named class list, returning the updated theme for chaining.
    pub fn add(mut self, name: &str, classes: &str) -> Self {
        self.classes = self.classes.add(name, classes);
        self
    }

    pub fn classes(&self) -> &Classes {
        &self.classes
    }
}

/// Renders a single inline template against `data`.
///
/// Output is HTML auto-escaped; use the builtin `safe` filter for markup that
/// was sanitized upstream.
pub fn render<T: Serialize>(template: &str, data: &T, theme: &Theme) -> Result<String, Error> {
    let mut env = html_environment(theme.clone());
    env.add_template_owned("_inline".to_string(), template.to_string())?;
    let tmpl = env.get_template("_inline")?;
    tmpl.render(data)
}

/// A renderer with pre-registered templates.
///
/// Templates are compiled once on registration and can include each other by
/// name.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            env: html_environment(theme),
        }
    }

    /// Registers a named template. Syntax errors are reported immediately.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

/// Escapes `s` exactly as the templates' HTML auto-escaping does, for markup
/// assembled outside a template.
pub fn escape_html(s: &str) -> String {
    HtmlEscape(s).to_string()
}

fn html_environment(theme: Theme) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    register_classes_filter(&mut env, theme);
    env
}

/// Registers the `classes` filter on a minijinja environment.
fn register_classes_filter(env: &mut Environment<'static>, theme: Theme) {
    let classes = theme.classes;
    env.add_filter("classes", move |name: String| -> String {
        classes.apply(&name)
    });
}
