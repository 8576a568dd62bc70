use anyhow::{anyhow, Context, Result};
use serde_json::{json, Map, Value};

use crate::api::{AdminApi, HttpAdminApi};
use crate::cli::commands::{AccountCommands, Args, Commands, ConfigCommands, TaskCommands};
use crate::cli::config::Config;
use crate::cli::interactive;
use crate::crypto::{self, CredentialSet};
use crate::form::{self, FieldControl, FormItem};
use crate::tasks::TaskList;

fn get_api(server: Option<String>) -> Result<HttpAdminApi> {
    let config = Config::load()?;
    Ok(HttpAdminApi::new(&config.resolve_server(server)))
}

pub async fn handle_command(args: Args) -> Result<()> {
    let command = args.command.ok_or_else(|| anyhow!("No command specified"))?;
    match command {
        Commands::Config { cmd } => {
            let api = get_api(args.server)?;
            match cmd {
                ConfigCommands::Show => {
                    let config = api.get_config().await?;
                    let items = form::render(Some(&config));
                    if items.is_empty() {
                        println!("Configuration is empty.");
                    }
                    for item in &items {
                        match item {
                            FormItem::Section(title) => println!("\n{}", title),
                            FormItem::Field(field) => {
                                let value = match &field.control {
                                    FieldControl::Toggle(true) => "on".to_string(),
                                    FieldControl::Toggle(false) => "off".to_string(),
                                    FieldControl::Text(text) => text.clone(),
                                };
                                println!("  {}: {}", field.label, value);
                            }
                        }
                    }
                }
                ConfigCommands::Edit => {
                    interactive::edit_config(&api).await?;
                }
            }
        }
        Commands::Tasks { cmd } => {
            let api = get_api(args.server)?;
            match cmd {
                TaskCommands::List => {
                    let tasks = api.list_tasks().await?;
                    let list = TaskList::from_map(tasks);
                    for line in list.render_lines() {
                        println!("{}", line);
                    }
                }
                TaskCommands::Delete { id } => {
                    api.delete_task(&id).await?;
                    println!("Task {} deleted.", id);
                }
            }
        }
        Commands::Account { cmd } => {
            let api = get_api(args.server.clone())?;
            let config = Config::load()?;
            match cmd {
                AccountCommands::Create {
                    user_id,
                    account_type,
                    email,
                    body,
                } => {
                    let user_id = user_id.or(config.user_id).ok_or_else(|| {
                        anyhow!("User ID required. Use --user-id or set one with `botctl context`.")
                    })?;
                    let body = match body {
                        Some(raw) => {
                            serde_json::from_str::<Value>(&raw).context("Invalid JSON body")?
                        }
                        None => {
                            let mut map = Map::new();
                            map.insert("type".to_string(), json!(account_type));
                            if let Some(email) = email {
                                map.insert("email".to_string(), json!(email));
                            }
                            Value::Object(map)
                        }
                    };
                    let resp = api.create_account(user_id, &body).await?;
                    println!(
                        "Account creation response: {}",
                        serde_json::to_string_pretty(&resp)?
                    );
                }
                AccountCommands::SetKeys {
                    account_id,
                    api_key,
                    secret_key,
                    passphrase,
                } => {
                    let account_id = account_id.or(config.account_id).ok_or_else(|| {
                        anyhow!(
                            "Account ID required. Use --account-id or set one with `botctl context`."
                        )
                    })?;
                    let credentials = CredentialSet {
                        api_key,
                        secret_key,
                        passphrase,
                    };
                    submit_user_keys(&api, account_id, &credentials).await?;
                    println!("User keys set for account {}.", account_id);
                }
            }
        }
        Commands::Context {
            server_url,
            user_id,
            account_id,
        } => {
            let mut config = Config::load()?;
            let changed = server_url.is_some() || user_id.is_some() || account_id.is_some();
            if let Some(url) = server_url {
                config.server_url = Some(url);
            }
            if let Some(id) = user_id {
                config.user_id = Some(id);
            }
            if let Some(id) = account_id {
                config.account_id = Some(id);
            }
            if changed {
                config.save()?;
                println!("Context updated.");
            }
            println!("Server: {}", config.resolve_server(args.server));
            match config.user_id {
                Some(id) => println!("User ID: {}", id),
                None => println!("No default user id."),
            }
            match config.account_id {
                Some(id) => println!("Account ID: {}", id),
                None => println!("No default account id."),
            }
        }
    }
    Ok(())
}

/// Fetches the server public key, encrypts the three secrets, and submits
/// them. Shared between the flag-driven command and the dashboard.
pub async fn submit_user_keys(
    api: &dyn AdminApi,
    account_id: uuid::Uuid,
    credentials: &CredentialSet,
) -> Result<Value> {
    let pem = api.get_public_key().await?;
    let public_key = crypto::parse_public_key(&pem)?;
    let request = crypto::encrypt_credentials(&public_key, account_id, credentials)?;
    api.set_user_keys(&request).await
}
