use clap::Parser;
#[cfg(target_family = "windows")]
use colored::control::set_virtual_terminal;
use colored::Colorize;
use std::path::PathBuf;
use superhero::api::API_BASE;
use superhero::view::{run_screen, Dispatcher, TerminalScreen};
use superhero::HeroClient;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Roll a random superhero from the superhero catalog")]
struct Args {
    /// Hero shown at startup
    #[arg(long, default_value_t = 1)]
    id: u32,

    /// Root of the hero catalog
    #[arg(long, default_value = API_BASE)]
    base_url: String,

    /// Save each fetched portrait into this directory
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Show the startup hero and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    #[cfg(target_family = "windows")]
    {
        if set_virtual_terminal(true).is_err() {
            eprintln!("failed to print colorfully.")
        };
    }

    let client = HeroClient::with_base(args.base_url);
    let (mut dispatcher, rx) = Dispatcher::new(client);
    if let Some(dir) = args.save_dir {
        dispatcher = dispatcher.with_save_dir(dir);
    }

    let screen = tokio::spawn(async move {
        let mut screen = TerminalScreen::new(std::io::stdout());
        run_screen(rx, &mut screen).await;
    });

    let startup = dispatcher.request(args.id);
    if args.once {
        startup.await?;
        drop(dispatcher);
        screen.await?;
        return Ok(());
    }

    println!(
        "{}",
        "enter: random hero | <id>: that hero | q: quit".dimmed()
    );
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "q" | "quit" => break,
            "" | "r" => {
                dispatcher.request_random()?;
            }
            other => match other.parse::<u32>() {
                Ok(id) => {
                    dispatcher.request(id);
                }
                Err(_) => eprintln!("{}", format!("not a hero id: {other}").red()),
            },
        }
    }

    drop(dispatcher);
    screen.await?;
    Ok(())
}
