use std::collections::HashMap;
use std::path::PathBuf;

use cardkit_core::{CardKind, ContentMap, Fragment, Registry, SlotName};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cardkit")]
#[command(about = "Card template registry and renderer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in card kinds
    Kinds,
    /// Show the slot contract of a card kind
    Slots {
        /// Card kind, e.g. metric-card
        kind: String,
    },
    /// Render a card to HTML
    Render {
        /// Card kind, e.g. metric-card
        kind: String,
        /// Slot content as an inline JSON object of slot name to text
        #[arg(long, conflicts_with = "params_file")]
        params: Option<String>,
        /// Path to a JSON file with slot content
        #[arg(long)]
        params_file: Option<PathBuf>,
        /// Path to a YAML template file replacing the built-in template
        #[arg(long)]
        template: Option<PathBuf>,
        /// Write the HTML to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render a demo page to HTML
    Page {
        /// Page name: index, dashboard, doctors or pharmacy
        name: String,
        /// Write the HTML to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Kinds) => {
            for kind in CardKind::ALL {
                println!("{kind}");
            }
        }
        Some(Commands::Slots { kind }) => {
            let kind = CardKind::parse(&kind)?;
            let template = cardkit_cards::builtins().get(kind)?;
            if template.slots().is_empty() {
                println!("No slots declared for {kind}.");
            } else {
                for slot in template.slots() {
                    println!("{}: default {:?}", slot.name, slot.default);
                }
            }
        }
        Some(Commands::Render {
            kind,
            params,
            params_file,
            template,
            out,
        }) => {
            let kind = CardKind::parse(&kind)?;
            let content = if let Some(inline) = params {
                parse_content(&inline)?
            } else if let Some(path) = params_file {
                parse_content(&std::fs::read_to_string(path)?)?
            } else {
                ContentMap::new()
            };
            let subtree = match template {
                Some(path) => {
                    let yaml = std::fs::read_to_string(path)?;
                    let custom = cardkit_core::template::read_yaml(&yaml)?;
                    let mut registry = Registry::new();
                    registry.register(kind, custom)?;
                    registry.render(kind, &content)?
                }
                None => cardkit_cards::builtins().render(kind, &content)?,
            };
            emit(subtree.as_html(), out)?;
        }
        Some(Commands::Page { name, out }) => {
            let registry = cardkit_cards::builtins();
            let html = match name.as_str() {
                "index" => cardkit_site::pages::index(),
                "dashboard" => cardkit_site::pages::dashboard(registry)?,
                "doctors" => cardkit_site::pages::doctors_directory(registry)?,
                "pharmacy" => cardkit_site::pages::pharmacy(registry)?,
                other => {
                    eprintln!("Error: unknown page '{other}'");
                    std::process::exit(1);
                }
            };
            emit(&html, out)?;
        }
        None => {
            println!("Use 'cardkit --help' for commands");
        }
    }

    Ok(())
}

/// Parses a JSON object of slot name to text into a content map.
fn parse_content(raw: &str) -> Result<ContentMap, Box<dyn std::error::Error>> {
    let object: HashMap<String, String> = serde_json::from_str(raw)?;
    let mut content = ContentMap::new();
    for (name, text) in object {
        content.insert(SlotName::new(&name)?, Fragment::from(text));
    }
    Ok(content)
}

fn emit(html: &str, out: Option<PathBuf>) -> std::io::Result<()> {
    match out {
        Some(path) => std::fs::write(path, html),
        None => {
            println!("{html}");
            Ok(())
        }
    }
}
