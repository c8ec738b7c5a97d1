//! Views file inspection.

use anyhow::{Context, Result, anyhow};
use log::info;

use crate::{
    cli::ViewsArgs,
    columns::describe_roles,
    diag::LogDiagnostics,
    schema::Schema,
    table,
    views::ViewConfig,
};

pub fn execute(args: &ViewsArgs) -> Result<()> {
    let config = ViewConfig::load(&args.config)
        .with_context(|| format!("Loading views from {config:?}", config = args.config))?;
    config.warn_duplicates(&LogDiagnostics);

    let Some(resource) = &args.resource else {
        return list_views(args, &config);
    };

    let view = config
        .view(resource)
        .ok_or_else(|| anyhow!("No view configured for resource {resource:?}"))?;

    let Some(schema_path) = &args.schema else {
        for spec in &view.columns {
            println!("{spec}");
        }
        info!(
            "View {resource:?} requests {count} column(s)",
            count = view.columns.len()
        );
        return Ok(());
    };

    let schema = Schema::load(schema_path)
        .with_context(|| format!("Loading schema from {schema_path:?}"))?;
    let effective = schema.customize(&view.columns, args.wide, &LogDiagnostics);

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
    info!(
        "Previewed view {resource:?} as {count} column(s)",
        count = effective.len()
    );
    Ok(())
}

fn list_views(args: &ViewsArgs, config: &ViewConfig) -> Result<()> {
    if config.views.is_empty() {
        info!("Views file {:?} does not define any views", args.config);
        return Ok(());
    }

    let mut rows = Vec::with_capacity(config.views.len());
    for (resource, view) in &config.views {
        rows.push(vec![
            resource.clone(),
            view.columns.len().to_string(),
            view.sort_column.clone().unwrap_or_default(),
        ]);
    }
    let headers = vec![
        "resource".to_string(),
        "columns".to_string(),
        "sort".to_string(),
    ];
    let aligns = vec![Default::default(); headers.len()];
    table::print_table(&headers, &aligns, &rows);
    info!(
        "Listed {} view(s) from {:?}",
        config.views.len(),
        args.config
    );
    Ok(())
}
