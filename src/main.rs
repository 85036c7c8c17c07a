//! `zcalc` – a keypad calculator for the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zcalc::config::Config;
use zcalc::{Session, logging, tui};

const KEY_BINDINGS: &str = "\
0-9                  digit
.                    decimal point
+ - * /              operator
Enter, =             equals
Backspace, Delete    delete last character
c, C                 clear
y                    copy display to clipboard (keypad only)
Esc, q               quit (keypad only)";

#[derive(Parser)]
#[command(name = "zcalc", version, about = "A keypad calculator for the terminal")]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive keypad (default).
    Run,

    /// Run a key script and print the display.
    ///
    /// Every character is a key; `{Enter}`, `{Backspace}` and `{Delete}`
    /// name the special keys. Example: `zcalc eval "2+3*4="`.
    Eval {
        /// The keys to press.
        keys: String,
        /// Print the display after every key.
        #[arg(long)]
        steps: bool,
        /// Output the final state as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the key bindings.
    Keys,

    /// Print the effective configuration.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init_logging(cli.verbose, &config.logging.filter);
    tracing::debug!(?config, "configuration loaded");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => tui::run(&config),
        Commands::Eval { keys, steps, json } => eval(&keys, steps, json),
        Commands::Keys => {
            println!("{}", KEY_BINDINGS);
            Ok(())
        }
        Commands::Config => {
            let text = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
            print!("{}", text);
            Ok(())
        }
    }
}

fn eval(keys: &str, steps: bool, json: bool) -> Result<()> {
    let mut session = Session::new();
    let applied = session
        .feed_script(keys)
        .context("Failed to run key script")?;

    if json {
        let mut output = serde_json::json!({ "state": session.state() });
        if steps {
            output["steps"] = serde_json::to_value(&applied)?;
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if steps {
        for step in &applied {
            println!("{}", step.display);
        }
    } else {
        println!("{}", session.display());
    }

    Ok(())
}
