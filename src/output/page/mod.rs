//! Interactive page generation
//!
//! Renders the self-contained HTML page: a host template with two
//! substitution tokens, the plot area (canvas plus client script) replacing
//! `+placeholder1+` and the slider column replacing `+placeholder2+`. The
//! initial curve is evaluated server-side by the
//! [`TransportEvaluator`]; every slider change afterwards recomputes
//! client-side with the generated script.
//!
//! # Fatal template errors
//!
//! A template that lacks either token cannot host the page, so
//! [`PageBuilder::build`] refuses with [`PageError::MissingToken`] instead of
//! emitting a silently broken document.
//!
//! # Example
//!
//! ```rust,ignore
//! use adre_rs::output::page::PageBuilder;
//! use adre_rs::physics::ColumnParameters;
//!
//! let builder = PageBuilder::new(ColumnParameters::default())?;
//! builder.write_to("column.html")?;
//! ```

mod script;

use log::{debug, info};
use std::path::Path;
use thiserror::Error;

use crate::physics::ColumnParameters;
use crate::transport::TransportEvaluator;

// =================================================================================================
// Tokens and Default Template
// =================================================================================================

/// Token the plot area (canvas + script) is substituted for
pub const TOKEN_PLOT: &str = "+placeholder1+";

/// Token the slider column is substituted for
pub const TOKEN_CONTROLS: &str = "+placeholder2+";

/// Host template compiled into the binary
///
/// Layout and styling only; both tokens appear exactly once.
pub const DEFAULT_TEMPLATE: &str = include_str!("template.html");

// =================================================================================================
// Errors
// =================================================================================================

/// Errors raised while generating the page
#[derive(Debug, Error)]
pub enum PageError {
    /// The host template lacks a required substitution token
    #[error("template is missing required token {token:?}")]
    MissingToken {
        /// The absent token
        token: &'static str,
    },

    /// A caller-supplied template file could not be read
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: String,
        source: std::io::Error,
    },

    /// The parameter set fails domain validation
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Profile data could not be serialized into the client script
    #[error("failed to serialize profile data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The generated page could not be written
    #[error("failed to write page: {0}")]
    Io(#[from] std::io::Error),
}

// =================================================================================================
// Page Builder
// =================================================================================================

/// Builds the interactive page for one parameter set
///
/// The builder owns the host template and the evaluator configuration;
/// [`build`](Self::build) produces the final document as a string,
/// [`write_to`](Self::write_to) writes it to disk.
pub struct PageBuilder {
    parameters: ColumnParameters,
    evaluator: TransportEvaluator,
    template: String,
}

impl PageBuilder {
    /// Create a builder for the given parameter set, using the embedded
    /// template and the reference grid resolution
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidParameters`] when any parameter is outside
    /// its documented domain.
    pub fn new(parameters: ColumnParameters) -> Result<Self, PageError> {
        parameters
            .validate()
            .map_err(PageError::InvalidParameters)?;

        Ok(Self {
            parameters,
            evaluator: TransportEvaluator::new(),
            template: DEFAULT_TEMPLATE.to_string(),
        })
    }

    /// Use a custom grid resolution for the initial render and the client
    /// recompute
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.evaluator = TransportEvaluator::with_samples(samples);
        self
    }

    /// Replace the host template
    ///
    /// The template must contain both [`TOKEN_PLOT`] and [`TOKEN_CONTROLS`];
    /// this is checked at build time.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Replace the host template with the contents of a file
    ///
    /// # Errors
    ///
    /// Returns [`PageError::TemplateRead`] when the file cannot be read.
    pub fn with_template_file(self, path: impl AsRef<Path>) -> Result<Self, PageError> {
        let path = path.as_ref();
        let template =
            std::fs::read_to_string(path).map_err(|source| PageError::TemplateRead {
                path: path.display().to_string(),
                source,
            })?;
        Ok(self.with_template(template))
    }

    /// Parameter set the page is built for
    pub fn parameters(&self) -> &ColumnParameters {
        &self.parameters
    }

    /// Render the complete page
    ///
    /// # Errors
    ///
    /// - [`PageError::MissingToken`] when the template lacks a token
    /// - [`PageError::InvalidParameters`] when evaluation rejects the
    ///   parameter set
    /// - [`PageError::Serialize`] when the initial curve cannot be embedded
    pub fn build(&self) -> Result<String, PageError> {
        for token in [TOKEN_PLOT, TOKEN_CONTROLS] {
            if !self.template.contains(token) {
                return Err(PageError::MissingToken { token });
            }
        }

        let profile = self
            .evaluator
            .evaluate(&self.parameters)
            .map_err(PageError::InvalidParameters)?;

        debug!(
            "rendering page: {} samples, v = {:.3e} m/s",
            profile.len(),
            self.parameters.pore_velocity()
        );

        let plot = script::plot_markup(&profile, self.evaluator.samples())?;
        let controls = script::controls_markup(&self.parameters);

        Ok(self
            .template
            .replace(TOKEN_PLOT, &plot)
            .replace(TOKEN_CONTROLS, &controls))
    }

    /// Render the page and write it to `path`
    ///
    /// # Errors
    ///
    /// Everything [`build`](Self::build) returns, plus [`PageError::Io`] for
    /// write failures.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), PageError> {
        let path = path.as_ref();
        let page = self.build()?;
        std::fs::write(path, &page)?;
        info!("wrote page to {} ({} bytes)", path.display(), page.len());
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
