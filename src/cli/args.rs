//! CLI argument types - shared between binary and tests

use clap::Parser;

#[derive(Parser)]
#[command(name = "mcpdex")]
#[command(about = "MCPdex - searchable MCP server catalog with Trust Score ranking")]
#[command(version)]
pub enum Cli {
    /// Start the catalog HTTP server
    Serve(ServeArgs),
    /// Print the ranked catalog
    List(ListArgs),
    /// Print the Trust Score breakdown for one server
    Score(ScoreArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "~/.config/mcpdex/config.toml")]
    pub config: String,
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,
    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "~/.config/mcpdex/config.toml")]
    pub config: String,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Server identity, e.g. acme__widget
    pub name: String,
    /// Configuration file path
    #[arg(short, long, default_value = "~/.config/mcpdex/config.toml")]
    pub config: String,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "~/.config/mcpdex/config.toml")]
    pub config: String,
}
