//! Per-resource view customization settings.
//!
//! Users persist their preferred column layouts in a YAML views file keyed
//! by resource identifier. Each view carries the spec strings handed to
//! [`Schema::customize`](crate::schema::Schema::customize) plus an optional
//! sort hint consumed by the sorting collaborator.

use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diag::Diagnostics;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewConfigError {
    #[error("view name cannot be empty")]
    UnnamedView,
    #[error("view {0:?} does not declare any columns")]
    EmptyView(String),
}

/// Column layout requested for one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSetting {
    /// Column specs, plain names or synthesis expressions.
    #[serde(default)]
    pub columns: Vec<String>,
    /// Sort hint such as `NAME:asc`, interpreted downstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_column: Option<String>,
}

/// Views file content, keyed by resource identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub views: BTreeMap<String, ViewSetting>,
}

impl ViewConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening views file {path:?}"))?;
        let reader = BufReader::new(file);
        let config: ViewConfig =
            serde_yaml::from_reader(reader).context("Parsing views YAML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let file = File::create(path).with_context(|| format!("Creating views file {path:?}"))?;
        serde_yaml::to_writer(file, self).context("Writing views YAML")
    }

    pub fn view(&self, resource: &str) -> Option<&ViewSetting> {
        self.views.get(resource)
    }

    /// Reports column specs listed more than once within a single view.
    /// Duplicates are legal (the customization engine resolves each spec
    /// independently) but usually unintended.
    pub fn warn_duplicates(&self, diags: &dyn Diagnostics) {
        for (resource, view) in &self.views {
            for spec in view.columns.iter().duplicates() {
                diags.warn(&format!(
                    "View {resource:?} lists column {spec:?} more than once"
                ));
            }
        }
    }

    fn validate(&self) -> Result<(), ViewConfigError> {
        for (resource, view) in &self.views {
            if resource.trim().is_empty() {
                return Err(ViewConfigError::UnnamedView);
            }
            if view.columns.is_empty() {
                return Err(ViewConfigError::EmptyView(resource.clone()));
            }
        }
        Ok(())
    }
}
