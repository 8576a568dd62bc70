use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use uuid::Uuid;

use crate::api::{AdminApi, HttpAdminApi};
use crate::cli::config::Config;
use crate::cli::handlers::submit_user_keys;
use crate::crypto::CredentialSet;
use crate::form::{self, FieldControl, FormField, FormItem};
use crate::tasks::{self, TaskList};

pub async fn run(server: Option<String>) -> Result<()> {
    println!("Welcome to botctl!");

    loop {
        // Refresh config to pick up context changes
        let config = Config::load().unwrap_or_default();
        let server_url = config.resolve_server(server.clone());
        let account_status = match config.account_id {
            Some(id) => format!("Account: {}", id),
            None => "No Default Account".to_string(),
        };

        println!("\n--- Bot Admin Dashboard ---");
        println!("Server: {} | {}", server_url, account_status);
        println!("---------------------------");

        let choices = vec!["Configuration", "Tasks", "Accounts", "Exit"];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select Action")
            .default(0)
            .items(&choices)
            .interact()?;

        let api = HttpAdminApi::new(&server_url);
        match selection {
            0 => edit_config(&api).await?,
            1 => tasks_menu(&api).await?,
            2 => accounts_menu(&api, &config).await?,
            3 => break,
            _ => unreachable!(),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn report_error(context: &str, err: &anyhow::Error) {
    tracing::error!(error = %err, "{}", context);
    println!("{}", style(format!("{}: {}", context, err)).red());
}

/// Walks the rendered form field by field, then posts the collected object
/// back if the user confirms.
pub async fn edit_config(api: &dyn AdminApi) -> Result<()> {
    let config = match api.get_config().await {
        Ok(config) => config,
        Err(err) => {
            report_error("Failed to fetch configuration", &err);
            return Ok(());
        }
    };

    let items = form::render(Some(&config));
    if items.is_empty() {
        println!("Configuration is empty; nothing to edit.");
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    let mut edited: Vec<FormField> = Vec::new();
    for item in &items {
        match item {
            FormItem::Section(title) => println!("\n{}", style(title).bold()),
            FormItem::Field(field) => {
                let control = match &field.control {
                    FieldControl::Toggle(checked) => {
                        let value = Confirm::with_theme(&theme)
                            .with_prompt(&field.label)
                            .default(*checked)
                            .interact()?;
                        FieldControl::Toggle(value)
                    }
                    FieldControl::Text(current) => {
                        let value: String = Input::with_theme(&theme)
                            .with_prompt(&field.label)
                            .default(current.clone())
                            .allow_empty(true)
                            .interact_text()?;
                        FieldControl::Text(value)
                    }
                };
                edited.push(FormField {
                    path: field.path.clone(),
                    label: field.label.clone(),
                    control,
                });
            }
        }
    }

    let save = Confirm::with_theme(&theme)
        .with_prompt("Save configuration?")
        .default(true)
        .interact()?;
    if !save {
        println!("Discarded changes.");
        return Ok(());
    }

    let updated = form::collect(edited.iter());
    match api.save_config(&updated).await {
        Ok(_) => println!("Configuration saved successfully!"),
        Err(err) => report_error("Failed to save configuration", &err),
    }
    Ok(())
}

async fn tasks_menu(api: &dyn AdminApi) -> Result<()> {
    let mut list = match api.list_tasks().await {
        Ok(tasks) => TaskList::from_map(tasks),
        Err(err) => {
            report_error("Failed to list tasks", &err);
            return Ok(());
        }
    };

    loop {
        let mut choices = list.render_lines();
        // When the list is empty the single line is the "no tasks" message,
        // which is not deletable.
        let deletable = list.len();
        choices.push("Refresh".to_string());
        choices.push("Back".to_string());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Tasks (select one to delete)")
            .default(0)
            .items(&choices)
            .interact()?;

        if selection < deletable {
            let task_id = list.entries()[selection].id.clone();
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Delete task {}?", task_id))
                .default(false)
                .interact()?;
            if !confirmed {
                continue;
            }
            // No re-fetch: only the deleted entry leaves the local list.
            match tasks::delete_task(api, &mut list, &task_id).await {
                Ok(_) => println!("Task deleted successfully."),
                Err(err) => report_error("Failed to delete task", &err),
            }
        } else if selection == choices.len() - 2 {
            match api.list_tasks().await {
                Ok(tasks) => list = TaskList::from_map(tasks),
                Err(err) => report_error("Failed to list tasks", &err),
            }
        } else {
            break;
        }
    }
    Ok(())
}

async fn accounts_menu(api: &dyn AdminApi, config: &Config) -> Result<()> {
    loop {
        let choices = vec!["Create Account", "Set User Keys", "Back"];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Accounts")
            .default(0)
            .items(&choices)
            .interact()?;

        match selection {
            0 => create_account_prompt(api, config).await?,
            1 => set_keys_prompt(api, config).await?,
            2 => break,
            _ => unreachable!(),
        }
    }
    Ok(())
}

fn prompt_uuid(theme: &ColorfulTheme, prompt: &str, default: Option<Uuid>) -> Result<Uuid> {
    let mut input = Input::<Uuid>::with_theme(theme).with_prompt(prompt);
    if let Some(id) = default {
        input = input.default(id);
    }
    Ok(input.interact_text()?)
}

async fn create_account_prompt(api: &dyn AdminApi, config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let user_id = prompt_uuid(&theme, "User id", config.user_id)?;
    let account_type: String = Input::with_theme(&theme)
        .with_prompt("Account type")
        .default("trading".to_string())
        .interact_text()?;
    let email: String = Input::with_theme(&theme)
        .with_prompt("Email (optional)")
        .allow_empty(true)
        .interact_text()?;

    let mut body = serde_json::Map::new();
    body.insert("type".to_string(), serde_json::json!(account_type));
    if !email.is_empty() {
        body.insert("email".to_string(), serde_json::json!(email));
    }

    match api
        .create_account(user_id, &serde_json::Value::Object(body))
        .await
    {
        Ok(resp) => println!(
            "Account creation response: {}",
            serde_json::to_string_pretty(&resp)?
        ),
        Err(err) => report_error("Failed to create account", &err),
    }
    Ok(())
}

async fn set_keys_prompt(api: &dyn AdminApi, config: &Config) -> Result<()> {
    let theme = ColorfulTheme::default();
    let account_id = prompt_uuid(&theme, "Account id", config.account_id)?;
    let api_key: String = Input::with_theme(&theme)
        .with_prompt("Exchange API key")
        .interact_text()?;
    let secret_key = Password::with_theme(&theme)
        .with_prompt("Exchange secret key")
        .interact()?;
    let passphrase = Password::with_theme(&theme)
        .with_prompt("Exchange passphrase")
        .interact()?;

    let credentials = CredentialSet {
        api_key,
        secret_key,
        passphrase,
    };
    match submit_user_keys(api, account_id, &credentials).await {
        Ok(_) => println!("User keys set for account {}.", account_id),
        Err(err) => report_error("Failed to set user keys", &err),
    }
    Ok(())
}
