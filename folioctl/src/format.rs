//! Output formatting utilities for the CLI
//!
//! Terminal presentation of the view bindings, the admin form, and the
//! inbox, with table and JSON variants.

use anyhow::Result;
use colored::*;
use folio_core::ContactMessage;
use tabled::{settings::Style, Table, Tabled};

use crate::admin::AdminForm;
use crate::view::PortfolioView;

/// Output format options
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Format the public portfolio view
pub fn format_portfolio(view: &PortfolioView, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(view)?),
        OutputFormat::Table => {
            let mut output = String::new();
            output.push_str(&view.page_title.bold().to_string());
            output.push('\n');
            output.push_str(&format!("{}\n", view.name.cyan()));
            output.push_str(&format!("{}\n", view.description));
            output.push_str(&format!("{}  {}\n", view.place, view.availability.green()));
            output.push_str(&format!("Avatar: {}\n", view.pfp_src.dimmed()));
            if let Some(accent) = &view.accent_color {
                output.push_str(&format!("Accent: {}\n", accent.yellow()));
            }

            if !view.skills.is_empty() {
                output.push('\n');
                output.push_str(&"Skills:".bold().to_string());
                output.push('\n');
                output.push_str(&view.skills.join(" · "));
                output.push('\n');
            }

            if !view.projects.is_empty() {
                #[derive(Tabled)]
                struct ProjectRow {
                    #[tabled(rename = "Project")]
                    title: String,
                    #[tabled(rename = "Description")]
                    description: String,
                }

                let rows: Vec<ProjectRow> = view
                    .projects
                    .iter()
                    .map(|p| ProjectRow {
                        title: p.title.clone().cyan().to_string(),
                        description: p.description.clone(),
                    })
                    .collect();

                let table = Table::new(rows).with(Style::rounded()).to_string();
                output.push_str(&format!("\n{}\n{}\n", "Projects:".bold(), table));
            }

            if !view.links.is_empty() {
                #[derive(Tabled)]
                struct LinkRow {
                    #[tabled(rename = "Link")]
                    text: String,
                    #[tabled(rename = "URL")]
                    href: String,
                }

                let rows: Vec<LinkRow> = view
                    .links
                    .iter()
                    .map(|l| LinkRow {
                        text: l.text.clone().green().to_string(),
                        href: l.href.clone(),
                    })
                    .collect();

                let table = Table::new(rows).with(Style::rounded()).to_string();
                output.push_str(&format!("\n{}\n{}\n", "Links:".bold(), table));
            }

            Ok(output)
        }
    }
}

/// Format the admin editing form
pub fn format_admin_form(form: &AdminForm, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "name": form.name,
                "description": form.description,
                "place": form.place,
                "availability": form.availability,
                "pfp": form.pfp,
                "music": form.music,
                "accentColor": form.accent_color,
                "skills": form.skills,
                "links": form.links,
                "projects": form.projects,
            });
            Ok(serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Table => {
            let mut output = String::new();
            output.push_str(&"Editable config".bold().to_string());
            output.push('\n');
            let line = |label: &str, value: &str| format!("{:<14} {}\n", label.cyan(), value);
            output.push_str(&line("name", &form.name));
            output.push_str(&line("description", &form.description));
            output.push_str(&line("place", &form.place));
            output.push_str(&line("availability", &form.availability));
            output.push_str(&line("pfp", &form.pfp));
            output.push_str(&line("music", &form.music));
            output.push_str(&line("accentColor", &form.accent_color));
            output.push_str(&line("skills", &form.skills));
            output.push_str(&format!("{}\n{}\n", "links".cyan(), form.links));
            output.push_str(&format!("{}\n{}\n", "projects".cyan(), form.projects));
            Ok(output)
        }
    }
}

/// Format the contact inbox
pub fn format_inbox(messages: &[ContactMessage], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(messages)?),
        OutputFormat::Table => {
            if messages.is_empty() {
                return Ok(format!("{}\n(no messages)", "Inbox:".bold()));
            }

            #[derive(Tabled)]
            struct MessageRow {
                #[tabled(rename = "From")]
                name: String,
                #[tabled(rename = "Email")]
                email: String,
                #[tabled(rename = "Received")]
                created_at: String,
                #[tabled(rename = "Message")]
                message: String,
            }

            let rows: Vec<MessageRow> = messages
                .iter()
                .map(|m| MessageRow {
                    name: m.name.clone().cyan().to_string(),
                    email: m.email.clone(),
                    created_at: m.created_at.clone().dimmed().to_string(),
                    message: m.message.clone(),
                })
                .collect();

            let table = Table::new(rows).with(Style::rounded()).to_string();
            Ok(format!("{}\n{}", "Inbox:".bold(), table))
        }
    }
}

/// Format success message
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message)
}

/// Format error message
pub fn format_error(message: &str) -> String {
    format!("{} {}", "✗".red().bold(), message)
}
