//! Customization preview from the command line.
//!
//! Applies the requested column specs to a schema file and prints the
//! effective column layout, followed by the recognized extraction entries.
//! Resolution runs twice on purpose: once inside `customize` and once for
//! the extraction bag, matching the contract library consumers follow.

use anyhow::{Context, Result};
use log::info;

use crate::{
    cli::CustomizeArgs,
    columns::describe_roles,
    diag::LogDiagnostics,
    schema::Schema,
    table,
};

pub fn execute(args: &CustomizeArgs) -> Result<()> {
    let schema = Schema::load(&args.schema)
        .with_context(|| format!("Loading schema from {schema:?}", schema = args.schema))?;

    let diags = LogDiagnostics;
    let effective = schema.customize(&args.specs, args.wide, &diags);
    let (_, bag) = schema.map_indices(&args.specs, args.wide, &diags);

    let mut rows = Vec::with_capacity(effective.len());
    for (idx, column) in effective.iter().enumerate() {
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

    if !bag.is_empty() {
        let mut extraction_rows = Vec::with_capacity(bag.len());
        for (pos, info) in &bag {
            extraction_rows.push(vec![
                (pos + 1).to_string(),
                info.custom_name.clone(),
                info.header.clone(),
                info.key.clone(),
                info.source_index
                    .map(|idx| (idx + 1).to_string())
                    .unwrap_or_default(),
            ]);
        }
        let extraction_headers = vec![
            "spec".to_string(),
            "display".to_string(),
            "source".to_string(),
            "key".to_string(),
            "source #".to_string(),
        ];
        let aligns = vec![Default::default(); extraction_headers.len()];
        println!();
        table::print_table(&extraction_headers, &aligns, &extraction_rows);
    }

    info!(
        "Customized {} spec(s) into {} column(s)",
        args.specs.len(),
        effective.len()
    );
    Ok(())
}
