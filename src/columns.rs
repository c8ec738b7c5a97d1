//! Column listing from a schema file.
//!
//! Reads a schema YAML file and renders its column names, alignment, and
//! role flags as an ASCII table.

use anyhow::{Context, Result};
use log::info;

use crate::{
    cli::ColumnsArgs,
    schema::{Column, Schema},
    table,
};

pub fn execute(args: &ColumnsArgs) -> Result<()> {
    let schema = Schema::load(&args.schema)
        .with_context(|| format!("Loading schema from {schema:?}", schema = args.schema))?;

    if schema.is_empty() {
        info!("Schema {:?} does not define any columns", args.schema);
        return Ok(());
    }

    let mut rows = Vec::with_capacity(schema.len());
    for (idx, column) in schema.iter().enumerate() {
        if column.wide && !args.wide {
            continue;
        }
        rows.push(vec![
            (idx + 1).to_string(),
            column.name.clone(),
            column.align.to_string(),
            describe_roles(column),
            if column.wide { "wide".to_string() } else { String::new() },
        ]);
    }

    let headers = vec![
        "#".to_string(),
        "name".to_string(),
        "align".to_string(),
        "roles".to_string(),
        "mode".to_string(),
    ];
    let aligns = vec![Default::default(); headers.len()];
    table::print_table(&headers, &aligns, &rows);
    info!("Listed {} column(s) from {:?}", rows.len(), args.schema);
    Ok(())
}

pub(crate) fn describe_roles(column: &Column) -> String {
    let mut roles = Vec::new();
    if column.metrics {
        roles.push("metrics");
    }
    if column.time {
        roles.push("time");
    }
    if column.capacity {
        roles.push("capacity");
    }
    if column.aux {
        roles.push("aux");
    }
    roles.join(",")
}
