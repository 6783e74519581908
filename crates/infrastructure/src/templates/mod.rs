//! Template engine module for rendering the landing page
//!
//! Uses the Tera templating engine. Templates are embedded at compile time;
//! a templates directory can override them at runtime.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{IndexPage, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_index(&IndexPage::default())?;
//! ```

use std::path::Path;
use std::sync::Arc;

use domain::{LanguageTag, SpeechText};
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the landing page template
pub const INDEX_TEMPLATE: &str = "index.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// A selectable target language on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    /// Language tag sent with the form
    pub code: String,
    /// Human-readable name
    pub name: String,
}

impl LanguageOption {
    fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// Data rendered into the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexPage {
    /// Application version shown in the footer
    pub version: String,
    /// Maximum text length accepted by `/text-to-voice`
    pub max_chars: usize,
    /// Language preselected in both forms
    pub default_language: String,
    /// Target languages offered in the forms
    pub languages: Vec<LanguageOption>,
}

impl Default for IndexPage {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            max_chars: SpeechText::MAX_CHARS,
            default_language: LanguageTag::DEFAULT.to_string(),
            languages: default_languages(),
        }
    }
}

fn default_languages() -> Vec<LanguageOption> {
    [
        ("en", "English"),
        ("hi", "Hindi"),
        ("bn", "Bengali"),
        ("ta", "Tamil"),
        ("te", "Telugu"),
        ("mr", "Marathi"),
        ("gu", "Gujarati"),
        ("ur", "Urdu"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
        ("ru", "Russian"),
        ("ar", "Arabic"),
        ("ja", "Japanese"),
        ("ko", "Korean"),
        ("zh-CN", "Chinese (Simplified)"),
    ]
    .into_iter()
    .map(|(code, name)| LanguageOption::new(code, name))
    .collect()
}

/// Template engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory whose `index.html` replaces the embedded landing page
    #[serde(default)]
    pub templates_dir: Option<String>,
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const INDEX: &str = include_str!("index.html");
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
    config: TemplateConfig,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_config(TemplateConfig::default())
    }

    /// Create a new template engine with custom configuration
    pub fn with_config(config: TemplateConfig) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm"]);

        tera.add_raw_template(INDEX_TEMPLATE, embedded::INDEX)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        if let Some(ref dir) = config.templates_dir {
            let path = Path::new(dir).join(INDEX_TEMPLATE);
            if path.is_file() {
                tera.add_template_file(&path, Some(INDEX_TEMPLATE))
                    .map_err(|e| TemplateError::Compile(e.to_string()))?;
                info!(path = %path.display(), "Loaded custom landing page");
            } else {
                debug!(dir = %dir, "No custom landing page, using embedded");
            }
        }

        Ok(Self {
            tera: Arc::new(tera),
            config,
        })
    }

    /// Render the landing page
    pub fn render_index(&self, page: &IndexPage) -> Result<String, TemplateError> {
        let context = Context::from_serialize(page).map_err(TemplateError::from)?;
        self.tera
            .render(INDEX_TEMPLATE, &context)
            .map_err(TemplateError::from)
    }
}
