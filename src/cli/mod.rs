pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Gradebook CLI - database maintenance and administrator bootstrap")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply pending database migrations")]
    Migrate,

    #[command(about = "Create a user with the admin flag set")]
    CreateAdmin(commands::admin::CreateAdminArgs),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Migrate => commands::migrate::handle(output_format).await,
        Commands::CreateAdmin(args) => commands::admin::handle(args, output_format).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::Role;

    #[test]
    fn parses_create_admin() {
        let cli = Cli::try_parse_from([
            "gradebook",
            "--json",
            "create-admin",
            "--email",
            "root@school.edu",
            "--password",
            "correct horse",
            "--firstname",
            "Root",
            "--lastname",
            "Admin",
            "--role",
            "teacher",
        ])
        .unwrap();

        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        match cli.command {
            Commands::CreateAdmin(args) => {
                assert_eq!(args.email, "root@school.edu");
                assert_eq!(args.role, Role::Teacher);
            }
            Commands::Migrate => panic!("expected create-admin"),
        }
    }

    #[test]
    fn rejects_unknown_role() {
        let parsed = Cli::try_parse_from([
            "gradebook",
            "create-admin",
            "--email",
            "a@b.cd",
            "--password",
            "password1",
            "--firstname",
            "A",
            "--lastname",
            "B",
            "--role",
            "janitor",
        ]);
        assert!(parsed.is_err());
    }
}
