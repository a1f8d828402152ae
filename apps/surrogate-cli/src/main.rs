//! `surrogate`: inspect and exercise impersonation against a configured directory.

mod logging;
mod wiring;

use std::path::PathBuf;
use std::process::ExitCode;

use acl_voter_sdk::{AclEntry, Permission};
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use surrogate_security::{GrantedAuthority, ambient};

use crate::logging::LogFormat;
use crate::wiring::Services;

#[derive(Debug, Parser)]
#[command(name = "surrogate", version, about = "Run work under a substitute identity")]
struct Cli {
    /// YAML configuration file; `SURROGATE__*` environment variables override it.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    /// Default log level when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the authentication record built for a user.
    Whoami { user: String },
    /// Check whether a user holds a role while impersonating them.
    CheckRole { user: String, role: String },
    /// Check whether a user is an administrator.
    CheckAdmin { user: String },
    /// Check a user's access to an object described by a JSON ACL file.
    CheckAccess {
        user: String,
        /// JSON array of ACL entries.
        #[arg(long)]
        acl: PathBuf,
        /// Operations to check, e.g. `execute,update`.
        #[arg(long, value_delimiter = ',', required = true)]
        permission: Vec<String>,
    },
    /// List every known user and role.
    ListRoles,
}

/// Exit status for a command that could not produce a verdict.
const EXIT_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format, &cli.log_level);

    exit_code(execute(cli).await)
}

async fn execute(cli: Cli) -> anyhow::Result<ExitCode> {
    let figment = security_helper::load_figment(cli.config.as_deref())?;
    let services = wiring::build(&figment)?;

    run(&services, cli.command).await
}

/// Verdicts keep their own code (0 granted, 1 denied); errors exit with 2.
fn exit_code(outcome: anyhow::Result<ExitCode>) -> ExitCode {
    outcome.unwrap_or_else(|e| {
        eprintln!("error: {e:#}");
        ExitCode::from(EXIT_ERROR)
    })
}

async fn run(services: &Services, command: Command) -> anyhow::Result<ExitCode> {
    let helper = &services.helper;
    match command {
        Command::Whoami { user } => {
            let auth = helper.create_authentication(user).await?;
            println!("{}", serde_json::to_string_pretty(&auth)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckRole { user, role } => {
            let role = GrantedAuthority::new(role);
            let granted = helper
                .run_as_user(user, || async {
                    let session = helper
                        .current_session()
                        .context("no session installed for impersonated user")?;
                    Ok::<_, anyhow::Error>(helper.is_granted(&session, &role).await)
                })
                .await?;
            Ok(verdict(granted))
        }
        Command::CheckAdmin { user } => {
            let admin = helper
                .run_as_user(user, || async {
                    Ok::<_, anyhow::Error>(helper.can_administer().await)
                })
                .await?;
            Ok(verdict(admin))
        }
        Command::CheckAccess {
            user,
            acl,
            permission,
        } => {
            let raw = std::fs::read_to_string(&acl)
                .with_context(|| format!("reading ACL file {}", acl.display()))?;
            let entries: Vec<AclEntry> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing ACL file {}", acl.display()))?;
            let wanted = parse_permissions(&permission)?;

            let allowed = helper
                .run_as_user(user, || async {
                    let session = ambient::current().context("no ambient session")?;
                    Ok::<_, anyhow::Error>(
                        services.voter.has_access(&session, &entries, wanted).await?,
                    )
                })
                .await?;
            Ok(verdict(allowed))
        }
        Command::ListRoles => {
            let listing = serde_json::json!({
                "users": services.roles.all_users().await?,
                "roles": services.roles.all_roles().await?,
                "system_roles": services.roles.system_roles().await?,
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn verdict(allowed: bool) -> ExitCode {
    println!("{}", if allowed { "granted" } else { "denied" });
    if allowed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn parse_permissions(names: &[String]) -> anyhow::Result<Permission> {
    let mut mask = Permission::NOTHING;
    for name in names {
        mask |= match name.trim().to_ascii_lowercase().as_str() {
            "execute" => Permission::EXECUTE,
            "subscribe" => Permission::SUBSCRIBE,
            "create" => Permission::CREATE,
            "update" => Permission::UPDATE,
            "delete" => Permission::DELETE,
            "update_perms" => Permission::UPDATE_PERMS,
            "administration" => Permission::ADMINISTRATION,
            "all" => Permission::ALL,
            other => bail!("unknown permission '{other}'"),
        };
    }
    Ok(mask)
}
