//! Spec resolution and schema customization.
//!
//! `map_indices` resolves a caller's spec list into column positions plus a
//! sparse extraction map; `customize` assembles the effective schema for a
//! requested subset or superset of columns. Both complete for every input:
//! unknown names, unsupported synthesis sources, and malformed expressions
//! degrade with a diagnostic instead of aborting the remaining specs.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    diag::Diagnostics,
    schema::{Column, Schema},
    spec::{self, ColumnExpr},
};

/// Describes how to synthesize one column's value out of another column's
/// key/value content at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionInfo {
    /// Position of the source column in the pre-customization schema, or
    /// `None` when the source column is absent.
    pub source_index: Option<usize>,
    /// User-supplied display name; empty when the spec carried none.
    pub custom_name: String,
    /// Canonical name of the column the value is pulled from.
    pub header: String,
    /// Key to extract from the source column's key/value content.
    pub key: String,
}

/// Extraction entries keyed by request position, i.e. the index of the spec
/// in the caller's list. Sparse: present only for recognized
/// label-extraction specs.
pub type ExtractionBag = BTreeMap<usize, ExtractionInfo>;

impl Schema {
    /// Resolves each spec to a column position, in request order.
    ///
    /// The returned index list always has exactly one entry per input spec,
    /// so a spec's position in `specs` equals its position in the result and
    /// is also the key of its [`ExtractionBag`] entry when one exists. The
    /// `wide` flag is accepted for contract symmetry with
    /// [`Schema::customize`] and does not affect resolution.
    pub fn map_indices(
        &self,
        specs: &[String],
        _wide: bool,
        diags: &dyn Diagnostics,
    ) -> (Vec<Option<usize>>, ExtractionBag) {
        let mut indices = Vec::with_capacity(specs.len());
        let mut bag = ExtractionBag::new();

        for spec in specs {
            let idx = self.index_of(spec, true);
            if idx.is_none() {
                diags.warn(&format!("Column {spec:?} not found on resource"));
            }
            indices.push(idx);

            if !spec::matches_grammar(spec) {
                continue;
            }

            let Some(expr) = ColumnExpr::parse(spec) else {
                diags.error(&format!("Spec match failed for column {spec:?}"));
                continue;
            };

            if !expr.is_label_extraction() {
                diags.warn(&format!("Custom column {spec:?} is not supported"));
                continue;
            }

            let custom_name = expr.custom_name.unwrap_or_default();
            diags.info(&format!(
                "Custom column {spec:?} will be displayed as {custom_name:?}"
            ));

            let source_index = self.index_of(&expr.header, true);
            bag.insert(
                indices.len() - 1,
                ExtractionInfo {
                    source_index,
                    custom_name,
                    header: expr.header,
                    key: expr.key,
                },
            );
        }

        (indices, bag)
    }

    /// Produces the effective schema for the requested specs.
    ///
    /// Empty `specs` means no customization was requested and the schema is
    /// returned as-is. Otherwise each spec independently resolves to a clone
    /// of the matching column with `wide` cleared (explicitly requested
    /// columns are never hidden), or to a fresh column named after the
    /// spec's custom name when nothing matches. With `wide` set, every
    /// original column not consumed by a spec is appended afterwards in
    /// original order, forced wide.
    ///
    /// Consumers that need the extraction entries recompute them through
    /// [`Schema::map_indices`]; this call does not return the bag.
    pub fn customize(&self, specs: &[String], wide: bool, diags: &dyn Diagnostics) -> Schema {
        if specs.is_empty() {
            return self.clone();
        }

        let mut columns = Vec::with_capacity(self.len());
        let mut consumed = BTreeSet::new();

        let (_, bag) = self.map_indices(specs, wide, diags);

        for (pos, spec) in specs.iter().enumerate() {
            match self.index_of(spec, true) {
                Some(idx) => {
                    consumed.insert(idx);
                    let mut column = self.columns[idx].clone();
                    column.wide = false;
                    columns.push(column);
                }
                None => {
                    let name = bag
                        .get(&pos)
                        .map(|info| info.custom_name.clone())
                        .unwrap_or_default();
                    columns.push(Column::new(name));
                }
            }
        }

        if !wide {
            return Schema::new(columns);
        }

        for (idx, column) in self.columns.iter().enumerate() {
            if consumed.contains(&idx) {
                continue;
            }
            let mut column = column.clone();
            column.wide = true;
            columns.push(column);
        }

        Schema::new(columns)
    }
}
