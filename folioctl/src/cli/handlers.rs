//! Command execution handlers

use anyhow::Result;
use clap::CommandFactory;
use folio_core::merge_with_defaults;
use std::io::{BufRead, Write};
use tracing::error;

use crate::admin::AdminController;
use crate::audio::{MusicToggle, ProcessPlayer};
use crate::client::ApiClient;
use crate::contact::ContactForm;
use crate::format::{format_admin_form, format_error, format_inbox, format_portfolio};
use crate::mode::Mode;
use crate::view::{render, PortfolioView};

use super::commands::*;

/// Handle the show command
pub async fn handle_show(client: &ApiClient, format: &OutputFormat) -> Result<()> {
    let fetched = client.get_config().await?;
    let config = merge_with_defaults(&fetched);

    let mut view = PortfolioView::new();
    render(&config, &mut view);
    println!("{}", format_portfolio(&view, &format.into())?);

    Ok(())
}

/// Handle the contact command
pub async fn handle_contact(
    client: &ApiClient,
    name: String,
    email: String,
    message: String,
) -> Result<()> {
    let mut form = ContactForm::new();
    form.name = name;
    form.email = email;
    form.message = message;

    match form.submit(client).await {
        Ok(()) => {
            println!("{}", form.status);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Handle admin commands
pub async fn handle_admin(
    client: &ApiClient,
    command: AdminCommands,
    format: &OutputFormat,
) -> Result<()> {
    match command {
        AdminCommands::Show => {
            let mut admin = AdminController::new();
            admin.load_all(client).await?;
            println!("{}", format_admin_form(&admin.form, &format.into())?);
            println!("{}", format_inbox(&admin.inbox, &format.into())?);
        }
        AdminCommands::Messages => {
            let mut admin = AdminController::new();
            admin.refresh_messages(client).await?;
            println!("{}", format_inbox(&admin.inbox, &format.into())?);
        }
        AdminCommands::Save {
            name,
            description,
            place,
            availability,
            pfp,
            music,
            accent_color,
            skills,
            links,
            projects,
        } => {
            // The same read/modify/write round trip the admin page does:
            // fill the form from the server, overlay the provided edits,
            // collect and post the full object back.
            let mut admin = AdminController::new();
            admin.load_all(client).await?;

            let overrides = [
                ("name", name),
                ("description", description),
                ("place", place),
                ("availability", availability),
                ("pfp", pfp),
                ("music", music),
                ("accentColor", accent_color),
                ("skills", skills),
                ("links", links),
                ("projects", projects),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    admin.form.set(field, &value)?;
                }
            }

            match admin.submit(client).await {
                Ok(()) => println!("{}", admin.status),
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

/// Handle the open command: resolve the mode once, run the session.
///
/// Session bootstrap failures are logged and swallowed; the process does
/// not turn them into a fatal error surface.
pub async fn handle_open(client: &ApiClient, path: &str, format: &OutputFormat) -> Result<()> {
    match Mode::from_path(path) {
        Mode::Portfolio => portfolio_session(client, format).await,
        Mode::Admin => admin_session(client, format).await,
    }
}

async fn portfolio_session(client: &ApiClient, format: &OutputFormat) -> Result<()> {
    let fetched = match client.get_config().await {
        Ok(value) => value,
        Err(e) => {
            error!("portfolio bootstrap failed: {}", e);
            return Ok(());
        }
    };
    let config = merge_with_defaults(&fetched);

    let mut view = PortfolioView::new();
    render(&config, &mut view);
    println!("{}", format_portfolio(&view, &format.into())?);

    let mut toggle = MusicToggle::new(config.music.clone(), Box::<ProcessPlayer>::default());
    let mut form = ContactForm::new();

    println!("Commands: music, contact, show, quit");
    let stdin = std::io::stdin();
    loop {
        let Some(line) = prompt(&stdin, "folio> ")? else {
            break;
        };
        match line.as_str() {
            "music" => println!("{}", toggle.toggle()),
            "contact" => {
                form.name = prompt(&stdin, "name: ")?.unwrap_or_default();
                form.email = prompt(&stdin, "email: ")?.unwrap_or_default();
                form.message = prompt(&stdin, "message: ")?.unwrap_or_default();
                // Operation boundary: the outcome lands in the status line
                let _ = form.submit(client).await;
                println!("{}", form.status);
            }
            "show" => {
                render(&config, &mut view);
                println!("{}", format_portfolio(&view, &format.into())?);
            }
            "quit" | "exit" => break,
            "" => {}
            other => println!("{}", format_error(&format!("unknown command '{}'", other))),
        }
    }

    Ok(())
}

async fn admin_session(client: &ApiClient, format: &OutputFormat) -> Result<()> {
    let mut admin = AdminController::new();
    if let Err(e) = admin.load_all(client).await {
        error!("admin bootstrap failed: {}", e);
        return Ok(());
    }

    println!("{}", format_admin_form(&admin.form, &format.into())?);
    println!("{}", format_inbox(&admin.inbox, &format.into())?);

    println!("Commands: set <field> <value>, save, reload, refresh, show, quit");
    let stdin = std::io::stdin();
    loop {
        let Some(line) = prompt(&stdin, "admin> ")? else {
            break;
        };
        match line.as_str() {
            "save" => {
                let _ = admin.submit(client).await;
                println!("{}", admin.status);
            }
            "reload" => {
                let _ = admin.reload_config(client).await;
                println!("{}", admin.status);
            }
            "refresh" => {
                let _ = admin.refresh_messages(client).await;
                println!("{}", admin.status);
                println!("{}", format_inbox(&admin.inbox, &format.into())?);
            }
            "show" => {
                println!("{}", format_admin_form(&admin.form, &format.into())?);
                println!("{}", format_inbox(&admin.inbox, &format.into())?);
            }
            "quit" | "exit" => break,
            "" => {}
            other => match other.strip_prefix("set ") {
                Some(rest) => {
                    let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                    match admin.form.set(field, value) {
                        Ok(()) => println!("{} = {}", field, value),
                        Err(e) => println!("{}", format_error(&e.to_string())),
                    }
                }
                None => println!("{}", format_error(&format!("unknown command '{}'", other))),
            },
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line; None on EOF.
fn prompt(stdin: &std::io::Stdin, text: &str) -> Result<Option<String>> {
    print!("{}", text);
    std::io::stdout().flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Generate shell completion scripts
pub fn generate_completion(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
