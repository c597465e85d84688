//! todolist-client CLI entry point.

use clap::Parser;
use todolist_client::cli::{Cli, Commands, OutputFormat};
use todolist_client::client::TodolistClient;
use todolist_client::output::{format_output, pretty};
use todolist_core::todo::{CreateItemRequest, TodoItem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = TodolistClient::new(&cli.base_url);

    match cli.command {
        Commands::Items(items_cmd) => {
            use todolist_client::cli::items::ItemsAction;
            match items_cmd.action {
                ItemsAction::List => {
                    let items = client.list_items().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&items, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_items(&items)),
                    }
                }
                ItemsAction::Get { id } => {
                    let item = client.get_item(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_item(&item)),
                    }
                }
                ItemsAction::Create { description, id } => {
                    let mut req = CreateItemRequest::new(description);
                    if let Some(id) = id {
                        req = req.with_id(id);
                    }
                    let item = client.create_item(req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_item(&item))
                        }
                    }
                }
                ItemsAction::Update {
                    id,
                    description,
                    completed,
                } => {
                    let item = TodoItem {
                        id,
                        description,
                        is_completed: completed,
                    };
                    client.update_item(&item).await?;
                    if !cli.quiet {
                        println!("Updated item {}", id);
                    }
                }
                ItemsAction::Complete { id } => {
                    let item = client.complete_item(id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Completed:\n{}", pretty::format_item(&item))
                        }
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use todolist_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Livez => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("ok");
                    }
                }
                HealthAction::Healthz => {
                    let status = client.healthz().await?;
                    println!("{}", format_output(&status, cli.format));
                }
            }
        }
    }

    Ok(())
}
