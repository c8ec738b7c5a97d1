use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Inspect and customize dashboard column schemas", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the columns defined by a schema file
    Columns(ColumnsArgs),
    /// Preview the effective columns after a customization
    Customize(CustomizeArgs),
    /// Inspect per-resource view settings
    Views(ViewsArgs),
}

#[derive(Debug, Args)]
pub struct ColumnsArgs {
    /// Schema definition file (YAML)
    #[arg(short, long)]
    pub schema: PathBuf,
    /// Include wide-only columns
    #[arg(long)]
    pub wide: bool,
}

#[derive(Debug, Args)]
pub struct CustomizeArgs {
    /// Schema definition file (YAML)
    #[arg(short, long)]
    pub schema: PathBuf,
    /// Keep unrequested columns as wide columns
    #[arg(long)]
    pub wide: bool,
    /// Column specs such as NAME or `GROUP: LABELS[app]`
    #[arg(required = true)]
    pub specs: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ViewsArgs {
    /// Views configuration file (YAML)
    #[arg(short, long)]
    pub config: PathBuf,
    /// Resource identifier to inspect
    #[arg(short, long)]
    pub resource: Option<String>,
    /// Schema file used to preview the resource's effective columns
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
    /// Keep unrequested columns as wide columns in the preview
    #[arg(long)]
    pub wide: bool,
}
