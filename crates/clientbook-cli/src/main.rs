use anyhow::{Context, Result};
use clap::Parser;
use clientbook_core::logic::commands::{
    AddClientCommand, AddPolicyCommand, ClearCommand, DeleteClientCommand, DeletePolicyCommand,
    EditCommand, ExitCommand, FindClientAndCommand, FindClientCommand, FindClientOrCommand,
    HelpCommand, ListCommand, PriorityCommand, SortCommand, SortPriorityCommand,
    UpdateClientCommand,
};
use clientbook_core::logic::messages::format_client;
use clientbook_core::{
    ClientBook, ClientBookStorage, ConfigLoader, JsonClientBookStorage, LogicManager, ModelManager,
};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "clientbook",
    author,
    version = "0.1.0",
    about = "Client book for insurance agents"
)]
struct Cli {
    #[clap(
        long,
        short,
        help = "Path to the YAML configuration file (defaults to the user config directory)"
    )]
    config: Option<PathBuf>,

    #[clap(long, short, help = "Overrides the log level from the configuration file")]
    log_level: Option<String>,

    #[clap(long, short, help = "Overrides the client book data file")]
    data: Option<PathBuf>,
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clientbook")
        .join("config.yaml")
}

fn help_text() -> String {
    let summaries = [
        AddClientCommand::MESSAGE_USAGE,
        AddPolicyCommand::MESSAGE_USAGE,
        EditCommand::MESSAGE_USAGE,
        UpdateClientCommand::MESSAGE_USAGE,
        DeleteClientCommand::MESSAGE_USAGE,
        DeletePolicyCommand::MESSAGE_USAGE,
        FindClientCommand::MESSAGE_USAGE,
        FindClientAndCommand::MESSAGE_USAGE,
        FindClientOrCommand::MESSAGE_USAGE,
        PriorityCommand::MESSAGE_USAGE,
        HelpCommand::MESSAGE_USAGE,
    ];
    let mut text = summaries.join("\n\n");
    for (word, summary) in [
        (ListCommand::COMMAND_WORD, "Shows all clients."),
        (SortCommand::COMMAND_WORD, "Sorts the displayed clients by name."),
        (
            SortPriorityCommand::COMMAND_WORD,
            "Shows priority clients first.",
        ),
        (ClearCommand::COMMAND_WORD, "Deletes all clients."),
        (ExitCommand::COMMAND_WORD, "Exits the program."),
    ] {
        text.push_str(&format!("\n\n{}: {}", word, summary));
    }
    text
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(default_config_path);
    let mut config = ConfigLoader::from_file(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if let Some(data) = cli.data {
        config.client_book_path = data;
    }

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let log_level_filter = level.parse().unwrap_or(LevelFilter::Info);

    // Logs go to a file so they do not interleave with the prompt.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("Failed to open log file {}", config.log_file.display()))?;
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("=============================[ Initializing ClientBook ]=============");

    let storage = JsonClientBookStorage::new(&config.client_book_path);
    let book = match storage.read() {
        Ok(Some(book)) => book,
        Ok(None) => {
            log::info!("Data file not found. Starting with an empty client book");
            ClientBook::new()
        }
        Err(e) => {
            log::warn!("{}. Starting with an empty client book", e);
            eprintln!("{}", e);
            ClientBook::new()
        }
    };

    let mut logic = LogicManager::new(ModelManager::new(book), Some(Box::new(storage)));
    run_repl(&mut logic)?;

    log::info!("============================ [ Stopping ClientBook ] =============================");
    Ok(())
}

fn run_repl(logic: &mut LogicManager) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_client_list(logic);
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                println!("{}", result.feedback_to_user);
                if result.show_help {
                    println!("\n{}", help_text());
                }
                if result.exit {
                    break;
                }
                print_client_list(logic);
            }
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}

fn print_client_list(logic: &LogicManager) {
    for (i, client) in logic.filtered_client_list().iter().enumerate() {
        println!("{}. {}", i + 1, format_client(client));
    }
}
