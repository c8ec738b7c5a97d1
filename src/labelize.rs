//! Label-driven schema projection.

use crate::schema::{Column, Schema};

/// Row collaborator capability to report the distinct label keys currently
/// observed in the data, in a stable order.
pub trait LabelSource {
    fn extract_header_labels(&self, label_column: usize) -> Vec<String>;
}

impl Schema {
    /// Builds a schema from the columns at `column_indices`, in the given
    /// order, followed by one name-only column per label key reported by
    /// `rows` for the column at `label_column`.
    ///
    /// Caller contract: every index in `column_indices` addresses this
    /// schema.
    pub fn labelize(
        &self,
        column_indices: &[usize],
        label_column: usize,
        rows: &dyn LabelSource,
    ) -> Schema {
        let mut columns = Vec::with_capacity(column_indices.len() + 1);
        for &idx in column_indices {
            columns.push(self.columns[idx].clone());
        }
        for key in rows.extract_header_labels(label_column) {
            columns.push(Column::new(key));
        }

        Schema::new(columns)
    }
}
