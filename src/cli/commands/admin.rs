use anyhow::bail;
use clap::Args;

use crate::auth::password;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::config;
use crate::database::models::{NewUser, Role};
use crate::database::queries::users;
use crate::database::DatabaseManager;
use crate::handlers::admin::validation::{require_text, validate_email_format, validate_password};

#[derive(Args, Debug)]
pub struct CreateAdminArgs {
    #[arg(long, help = "Login email")]
    pub email: String,

    #[arg(long, help = "Initial password")]
    pub password: String,

    #[arg(long, help = "First name")]
    pub firstname: String,

    #[arg(long, help = "Last name")]
    pub lastname: String,

    #[arg(long, default_value = "teacher", help = "student or teacher")]
    pub role: Role,
}

impl CreateAdminArgs {
    fn validate(&self) -> anyhow::Result<()> {
        for check in [
            require_text("Firstname", &self.firstname),
            require_text("Lastname", &self.lastname),
            validate_email_format(&self.email),
            validate_password(&self.password),
        ] {
            if let Err(msg) = check {
                bail!(msg);
            }
        }
        Ok(())
    }
}

pub async fn handle(args: CreateAdminArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    args.validate()?;

    let pool = DatabaseManager::connect(&config().database)?;
    if users::find_by_email(&pool, &args.email).await?.is_some() {
        bail!("A user with email {} already exists", args.email);
    }

    let hashed = password::hash_password_async(args.password).await?;
    let user = users::create_user(
        &pool,
        &NewUser {
            firstname: args.firstname,
            lastname: args.lastname,
            email: args.email,
            password: hashed,
            role: args.role,
            admin: true,
            classroom: None,
        },
    )
    .await?;
    pool.close().await;

    output_success(
        &output_format,
        &format!("Created administrator {} ({})", user.email, user.id),
        Some(("user", serde_json::to_value(&user)?)),
    )
}
