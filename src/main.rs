//! # order-bot
//!
//! Command-line front end for the ordering assistant.
//!
//! - `order-bot extract -r "tasty bites" 2 burger and a cola` prints the matched
//!   line items as JSON.
//! - `order-bot chat` runs the full conversation over stdin, one message per line.
//! - `order-bot restaurants` lists the loaded restaurants and their menus.
//!
//! Logs go to stderr; set `RUST_LOG=info` to see the order book at work.

use clap::{Parser, Subcommand};
use order_bot::config::AppConfig;
use order_bot::conversation::{self, Reply};
use order_bot::lifecycle::{setup_tracing, OrderingService};
use order_bot::model::title_case;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, info_span, warn, Instrument};

#[derive(Debug, Parser)]
#[command(name = "order-bot", about = "Conversational food ordering assistant")]
struct Cli {
    /// Menu file to load instead of the built-in menus (overrides ORDER_BOT_MENU_FILE)
    #[arg(long, global = true)]
    menu_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract ordered items from a line of text
    Extract {
        #[arg(short, long)]
        restaurant: String,
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },
    /// Talk to the assistant on stdin
    Chat,
    /// List restaurants and their menus
    Restaurants,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?.with_menu_file(cli.menu_file);
    let catalog = config.load_catalog()?;

    match cli.command {
        Command::Extract { restaurant, text } => {
            let items = catalog.extract(&text.join(" "), &restaurant);
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Command::Restaurants => {
            for id in catalog.restaurants() {
                println!("{}", title_case(id));
                if let Some(vocabulary) = catalog.get(id) {
                    for entry in vocabulary.menu.entries() {
                        println!("  {} - ₹{}", entry.name, entry.price);
                    }
                }
            }
        }
        Command::Chat => {
            let service = OrderingService::new(catalog, config.channel_capacity);
            chat(&service).instrument(info_span!("chat")).await?;
            service.shutdown().await?;
        }
    }

    Ok(())
}

async fn chat(service: &OrderingService) -> std::io::Result<()> {
    let greeting = conversation::greeting();
    print_reply(&greeting);
    let mut context = greeting.context;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        let reply = match service.handle(context.clone(), message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "Turn failed");
                conversation::apology()
            }
        };
        print_reply(&reply);
        context = reply.context;
    }

    info!("Input closed");
    Ok(())
}

fn print_reply(reply: &Reply) {
    println!("bot> {}", reply.message);
    if !reply.options.is_empty() {
        println!("     options: {}", reply.options.join(" | "));
    }
    for entry in &reply.menu {
        println!("     {} - ₹{}", entry.name, entry.price);
    }
    if let Some(summary) = &reply.order_summary {
        for item in &summary.items {
            println!("     {} x {} @ ₹{}", item.quantity, item.item, item.price);
        }
        println!("     total: ₹{}", summary.total);
    }
}
