use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use model::FieldKind;

#[derive(Parser)]
#[command(name = "formsmith", version, about = "Form definitions to form component source")]
pub struct CliCommand {
    #[command(subcommand)]
    pub subcommand: CliSubcommand,
}

#[derive(Subcommand)]
pub enum CliSubcommand {
    /// Print or write the generated form component
    Generate(GenerateArgs),
    /// Print the initial preview state as JSON
    Preview(PreviewArgs),
    /// Print a field list with default attributes for the given kinds
    Scaffold(ScaffoldArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    #[arg(short = 'i', long)]
    pub input: PathBuf,
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[arg(short = 'i', long)]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct ScaffoldArgs {
    #[arg(required = true)]
    pub kinds: Vec<FieldKind>,
}
