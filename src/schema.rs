//! Column schema model and basic schema operations.
//!
//! This module owns the [`Schema`] struct (the ordered set of display columns
//! for a resource listing), the per-column [`Column`] metadata (alignment,
//! role flags, wide-mode visibility, decorator handle), and YAML persistence
//! for schema definition files.
//!
//! ## Responsibilities
//!
//! - Column lookup by display name with optional wide-column skipping
//! - Role classification queries (age, metrics, time, capacity)
//! - Change detection between schema snapshots to drive redraw decisions
//! - Capacity-preserving reset for low-allocation reuse across refresh cycles
//! - YAML schema loading and saving via `serde_yaml`
//!
//! A `Schema`'s position order corresponds 1:1, by convention, to the cell
//! order of each data row produced by the row collaborator. The schema does
//! not enforce that contract. Column name uniqueness is not enforced either;
//! lookups return the first match.

use std::{fmt, fs::File, io::BufReader, path::Path, sync::Arc};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::diag::Diagnostics;

/// Display name of the age column.
pub const AGE_COLUMN: &str = "AGE";

/// Cell formatting capability owned by the render collaborator.
pub type DecoratorFn = dyn Fn(&str) -> String + Send + Sync;

/// Identity-comparable handle to an externally owned formatting function.
///
/// Two handles compare equal only when they share the same underlying
/// allocation. Independently constructed decorators with identical behavior
/// compare unequal, which is what schema change detection relies on.
#[derive(Clone)]
pub struct Decorator(Arc<DecoratorFn>);

impl Decorator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn apply(&self, value: &str) -> String {
        (self.0)(value)
    }
}

impl PartialEq for Decorator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Decorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decorator({:p})", Arc::as_ptr(&self.0))
    }
}

/// Horizontal cell alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
}

impl Align {
    pub fn is_left(&self) -> bool {
        matches!(self, Align::Left)
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Align::Left => f.write_str("left"),
            Align::Right => f.write_str("right"),
        }
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// A single display column's metadata.
///
/// Immutable value once constructed. Cloning yields an independent copy; the
/// decorator handle is copied by reference since the capability behind it is
/// immutable and owned by the render collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Display label, conventionally upper-case.
    pub name: String,
    #[serde(default, skip_serializing_if = "Align::is_left")]
    pub align: Align,
    /// Formatting handle supplied by the render collaborator at runtime.
    #[serde(skip)]
    pub decorator: Option<Decorator>,
    /// Shown only in wide display mode.
    #[serde(default, skip_serializing_if = "is_false")]
    pub wide: bool,
    /// Metrics-derived numeric column.
    #[serde(default, skip_serializing_if = "is_false")]
    pub metrics: bool,
    /// Timestamp column.
    #[serde(default, skip_serializing_if = "is_false")]
    pub time: bool,
    /// Quantity/capacity column.
    #[serde(default, skip_serializing_if = "is_false")]
    pub capacity: bool,
    /// Additional role marker reserved for downstream collaborators; carried
    /// through cloning and customization without interpretation.
    #[serde(default, skip_serializing_if = "is_false")]
    pub aux: bool,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Ordered sequence of display columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Column> {
        self.columns.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Empties the column list while keeping the allocated capacity, so a
    /// schema slot can be refilled across refresh cycles without
    /// reallocating.
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    /// Ordered display names. Wide-only columns are excluded unless `wide`.
    pub fn column_names(&self, wide: bool) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| wide || !c.wide)
            .map(|c| c.name.clone())
            .collect()
    }

    /// Position of the first column named `name`. Wide-only columns are
    /// skipped during the scan unless `include_wide`. Not-found is a normal
    /// outcome, never an error.
    pub fn index_of(&self, name: &str, include_wide: bool) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| (include_wide || !c.wide) && c.name == name)
    }

    /// True when an age column exists, wide or not.
    pub fn has_age(&self) -> bool {
        self.index_of(AGE_COLUMN, true).is_some()
    }

    pub fn is_metrics_column(&self, idx: usize) -> bool {
        self.columns.get(idx).is_some_and(|c| c.metrics)
    }

    pub fn is_time_column(&self, idx: usize) -> bool {
        self.columns.get(idx).is_some_and(|c| c.time)
    }

    pub fn is_capacity_column(&self, idx: usize) -> bool {
        self.columns.get(idx).is_some_and(|c| c.capacity)
    }

    /// True when the schema changed relative to `other`: a length mismatch,
    /// or any column whose full value differs. Decorator handles take part
    /// via identity, so two schemas carrying equivalent but independently
    /// constructed decorators compare as changed.
    pub fn differs(&self, other: &Schema) -> bool {
        if self.columns.len() != other.columns.len() {
            return true;
        }
        self.columns != other.columns
    }

    /// Debug-level listing of the column layout.
    pub fn dump(&self, diags: &dyn Diagnostics) {
        diags.debug("SCHEMA");
        for (idx, column) in self.columns.iter().enumerate() {
            diags.debug(&format!(
                "{idx} {name:?} -- {wide}",
                name = column.name,
                wide = column.wide
            ));
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Opening schema file {path:?}"))?;
        let reader = BufReader::new(file);
        let schema: Schema = serde_yaml::from_reader(reader).context("Parsing schema YAML")?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let file = File::create(path).with_context(|| format!("Creating schema file {path:?}"))?;
        serde_yaml::to_writer(file, self).context("Writing schema YAML")
    }

    fn validate(&self) -> Result<()> {
        for (idx, column) in self.columns.iter().enumerate() {
            ensure!(
                !column.name.is_empty(),
                "Schema column {position} has an empty name",
                position = idx + 1
            );
        }
        Ok(())
    }
}

impl FromIterator<Column> for Schema {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
