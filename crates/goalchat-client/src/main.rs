use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use goalchat_client::config::{self, ClientConfig};
use goalchat_client::controller::{Controller, TurnOutcome, TurnStart};
use goalchat_client::gateway::{Gateway, HttpGateway};
use goalchat_client::render;
use goalchat_core::models::chat::{ChatMessage, Role};
use goalchat_core::prompt::DEFAULT_SYSTEM_PROMPT;
use goalchat_storage::store::{FileStore, KeyValueStore};

#[derive(Parser)]
#[command(name = "goalchat")]
#[command(about = "Chat with a language coach and collect your learning goals")]
struct Cli {
    /// Gateway origin serving POST /api/llm
    #[arg(long, env = "GOALCHAT_GATEWAY_URL")]
    gateway_url: Option<String>,
    /// Directory holding the stored prompt and history
    #[arg(long, env = "GOALCHAT_DATA_DIR")]
    data_dir: Option<PathBuf>,
    /// Config file to use instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start or continue the conversation (default)
    Chat,
    /// Show or change the system prompt
    Prompt {
        #[command(subcommand)]
        action: PromptAction,
    },
    /// List the goals collected in the stored conversation
    Goals,
    /// Show or change the saved client configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum PromptAction {
    /// Print the current system prompt
    Show,
    /// Store the contents of a file as the system prompt
    Set { file: PathBuf },
    /// Restore the built-in prompt
    Default,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Save the gateway origin to the config file
    SetGateway { url: String },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr and stay quiet by default so they do not interleave
    // with the conversation.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };

    if let Some(Commands::Config {
        action: ConfigAction::SetGateway { url },
    }) = &cli.command
    {
        let mut saved = config::load_config(&config_path)?;
        saved.gateway_url = url.clone();
        config::save_config(&config_path, &saved)?;
        println!("gateway set to {url}");
        return Ok(());
    }

    let effective =
        config::load_config(&config_path)?.with_overrides(cli.gateway_url, cli.data_dir);

    let store = FileStore::new(effective.resolve_data_dir()?);
    let gateway = HttpGateway::new(&effective.gateway_url);
    let mut controller = Controller::load(store, gateway);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(&mut controller)?,
        Commands::Prompt { action } => run_prompt(&mut controller, action)?,
        Commands::Goals => println!("{}", render::goals(controller.goals())),
        Commands::Config { .. } => print_config(&effective)?,
    }

    Ok(())
}

fn run_prompt<S: KeyValueStore, G: Gateway>(
    controller: &mut Controller<S, G>,
    action: PromptAction,
) -> Result<()> {
    match action {
        PromptAction::Show => println!("{}", controller.system_prompt()),
        PromptAction::Set { file } => {
            let prompt = std::fs::read_to_string(&file)
                .map_err(|e| eyre::eyre!("failed to read {}: {e}", file.display()))?;
            controller.set_system_prompt(&prompt)?;
            println!("Prompt saved. It applies after the next /reset.");
        }
        PromptAction::Default => {
            controller.set_system_prompt(DEFAULT_SYSTEM_PROMPT)?;
            println!("Built-in prompt restored. It applies after the next /reset.");
        }
    }
    Ok(())
}

fn print_config(config: &ClientConfig) -> Result<()> {
    println!("gateway_url: {}", config.gateway_url);
    println!("data_dir:    {}", config.resolve_data_dir()?.display());
    Ok(())
}

fn run_chat<S: KeyValueStore, G: Gateway>(controller: &mut Controller<S, G>) -> Result<()> {
    for message in controller.visible_messages() {
        if let Some(line) = render::message(message) {
            println!("{line}");
        }
    }
    if controller.history().is_empty() {
        println!("Type /reset to start a conversation, /help for commands.");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "/quit" | "/exit" => break,
            "/help" => println!("{}", render::HELP),
            "/goals" => println!("{}", render::goals(controller.goals())),
            "/reset" => {
                let pending = controller.begin_reset();
                let outcome =
                    render::dispatch_with_indicator(controller, pending, &mut io::stdout())?;
                print_assistant_turns(controller.history(), 0);
                print_notice(&outcome);
            }
            _ => {
                let before = controller.history().len();
                let outcome = match controller.begin_turn(&line) {
                    TurnStart::Send(pending) => {
                        render::dispatch_with_indicator(controller, pending, &mut io::stdout())?
                    }
                    TurnStart::Finished(outcome) => outcome,
                };
                print_assistant_turns(controller.history(), before);
                print_notice(&outcome);
            }
        }
    }

    Ok(())
}

fn print_assistant_turns(history: &[ChatMessage], from: usize) {
    for message in history.iter().skip(from) {
        if message.role() != Role::Assistant {
            continue;
        }
        if let Some(line) = render::message(message) {
            println!("{line}");
        }
    }
}

fn print_notice(outcome: &TurnOutcome) {
    if let Some(notice) = render::outcome_notice(outcome) {
        println!("{notice}");
    }
}
