use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use flowdeck::model::PatternRange;
use flowdeck::remote::{CreateInstanceRequest, RemoteClient, UpdateInstanceRequest};
use flowdeck::store::ConfigStore;

#[derive(Parser)]
#[command(name = "flowdeck")]
#[command(about = "Terminal console for workflow-automation fleets", long_about = None)]
struct Cli {
    /// Backend base URL (overrides the stored config and FLOWDECK_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        #[arg(long)]
        username: String,
        /// Password (falls back to FLOWDECK_PASSWORD)
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// List registered instances
    Instances {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new instance
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "base-url")]
        base_url: String,
        #[arg(long = "api-key")]
        api_key: String,
    },

    /// Update an instance (omit --api-key to keep the stored key)
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "base-url")]
        base_url: Option<String>,
        #[arg(long = "api-key")]
        api_key: Option<String>,
    },

    /// List workflows of an instance
    Workflows {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Download a workflow archive (all workflows, or --ids a,b,c)
    Export {
        id: String,
        /// Comma-separated workflow ids to scope the archive
        #[arg(long)]
        ids: Option<String>,
        /// Output path (defaults to workflows-{id}[-selected].zip)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Import a workflow definition file into an instance
    Import { id: String, file: PathBuf },

    /// Recent workflow-error events of an instance
    Events {
        id: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Aggregated error patterns of an instance
    Patterns {
        id: String,
        /// Time range: 1d, 14d, 1m, 6m or 12m
        #[arg(long, default_value = "14d")]
        range: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the license descriptor
    License {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show persisted settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Alert settings
    Alerts,
    /// Backup settings
    Backups,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return flowdeck::tui_shell::run();
    };

    let store = ConfigStore::open_default()?;

    match command {
        Commands::Login { username, password } => {
            let base_url = resolve_base_url(cli.url.as_deref(), &store)?;
            let password = password
                .or_else(|| std::env::var("FLOWDECK_PASSWORD").ok())
                .context("missing password (use --password or FLOWDECK_PASSWORD)")?;

            let client = RemoteClient::new(base_url.clone(), None)?;
            let resp = client.login(&username, &password)?;
            store.set_backend(&base_url)?;
            store.set_session(&resp.token, &resp.username)?;
            println!("logged in as {}", resp.username);
        }

        Commands::Logout => {
            store.clear_session()?;
            println!("logged out");
        }

        Commands::Instances { json } => {
            let client = require_client(cli.url.as_deref(), &store)?;
            let instances = client.list_instances()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&instances).context("serialize instances")?
                );
            } else {
                for inst in instances {
                    println!(
                        "{:<12} {:<24} {:<8} {}",
                        inst.id,
                        inst.name,
                        inst.status.label(),
                        inst.base_url
                    );
                }
            }
        }

        Commands::Add {
            name,
            base_url,
            api_key,
        } => {
            let client = require_client(cli.url.as_deref(), &store)?;
            let created = client.create_instance(&CreateInstanceRequest {
                name,
                base_url,
                api_key,
            })?;
            println!("registered instance {} ({})", created.name, created.id);
        }

        Commands::Update {
            id,
            name,
            base_url,
            api_key,
        } => {
            let client = require_client(cli.url.as_deref(), &store)?;
            let current = client.get_instance(&id)?;
            let updated = client.update_instance(
                &id,
                &UpdateInstanceRequest {
                    name: name.unwrap_or(current.name),
                    base_url: base_url.unwrap_or(current.base_url),
                    api_key,
                },
            )?;
            println!("updated instance {}", updated.name);
        }

        Commands::Workflows { id, json } => {
            let client = require_client(cli.url.as_deref(), &store)?;
            let workflows = client.list_workflows(&id)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&workflows).context("serialize workflows")?
                );
            } else {
                for wf in workflows {
                    println!(
                        "{:<12} {:<40} {}",
                        wf.id,
                        wf.name,
                        if wf.active { "active" } else { "inactive" }
                    );
                }
            }
        }

        Commands::Export { id, ids, out } => {
            let client = require_client(cli.url.as_deref(), &store)?;
            let ids: Option<Vec<String>> =
                ids.map(|s| s.split(',').map(|p| p.trim().to_string()).collect());
            let bytes = client.export_workflows(&id, ids.as_deref())?;

            let path = out.unwrap_or_else(|| {
                if ids.is_some() {
                    PathBuf::from(format!("workflows-{}-selected.zip", id))
                } else {
                    PathBuf::from(format!("workflows-{}.zip", id))
                }
            });
            std::fs::write(&path, &bytes)
                .with_context(|| format!("write {}", path.display()))?;
            println!("exported to {}", path.display());
        }

        Commands::Import { id, file } => {
            let client = require_client(cli.url.as_deref(), &store)?;
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("read {}", file.display()))?;
            let definition: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", file.display()))?;
            client.import_workflow(&id, &definition)?;
            println!("workflow imported");
        }

        Commands::Events { id, json } => {
            let client = require_client(cli.url.as_deref(), &store)?;
            let events = client.list_error_events(&id)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&events).context("serialize events")?
                );
            } else {
                for ev in events {
                    let name = ev
                        .payload
                        .workflow_name
                        .unwrap_or_else(|| "(unknown workflow)".to_string());
                    let msg = ev.payload.error_message.unwrap_or_default();
                    println!("{:<10} {:<24} {:<32} {}", ev.severity.label(), ev.occurred_at, name, msg);
                }
            }
        }

        Commands::Patterns { id, range, json } => {
            let range = PatternRange::parse(&range)
                .with_context(|| format!("invalid range {} (use 1d|14d|1m|6m|12m)", range))?;
            let client = require_client(cli.url.as_deref(), &store)?;
            let patterns = client.error_patterns(&id, range)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&patterns).context("serialize patterns")?
                );
            } else {
                for p in patterns {
                    println!("{:>5}x {:<24} {}", p.count, p.last_occurred, p.error_message);
                }
            }
        }

        Commands::License { json } => {
            let client = require_client(cli.url.as_deref(), &store)?;
            let license = client.license()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&license).context("serialize license")?
                );
            } else {
                println!("edition: {}", license.edition);
                if license.max_instances == flowdeck::license::UNLIMITED_INSTANCES {
                    println!("max instances: unlimited");
                } else {
                    println!("max instances: {}", license.max_instances);
                }
                let mut keys: Vec<&String> = license.features.keys().collect();
                keys.sort();
                for key in keys {
                    println!("{}: {}", key, license.features[key]);
                }
            }
        }

        Commands::Settings { command } => {
            let client = require_client(cli.url.as_deref(), &store)?;
            match command {
                SettingsCommands::Alerts => {
                    let settings = client.alert_settings()?;
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&settings).context("serialize settings")?
                    );
                }
                SettingsCommands::Backups => {
                    let settings = client.backup_settings()?;
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&settings).context("serialize settings")?
                    );
                }
            }
        }
    }

    Ok(())
}

fn resolve_base_url(flag: Option<&str>, store: &ConfigStore) -> Result<String> {
    if let Some(url) = flag {
        return Ok(url.to_string());
    }
    if let Ok(url) = std::env::var("FLOWDECK_URL") {
        if !url.is_empty() {
            return Ok(url);
        }
    }
    store
        .base_url()?
        .context("no backend configured (pass --url or run `flowdeck login --url ...`)")
}

fn require_client(flag: Option<&str>, store: &ConfigStore) -> Result<RemoteClient> {
    let base_url = resolve_base_url(flag, store)?;
    let token = store
        .read_state()?
        .token
        .context("not logged in (run `flowdeck login`)")?;
    RemoteClient::new(base_url, Some(token))
}
