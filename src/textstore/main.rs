use clap::Parser;
use colored::*;
use textstore::config::StoreConfig;
use textstore::error::{Result, TextStoreError};
use textstore::logging::{init_logging, TracingLogger};
use textstore::storage::fs::FsStorage;
use textstore::store::TextStore;

mod args;
use args::{Cli, Commands};

type FileTextStore = TextStore<FsStorage, TracingLogger>;

const DEMO_LINES: [&str; 5] = [
    "44.\n",
    "Олена Ступ.\n",
    "Щемапец лев.\n",
    "hocu zhutu.\n",
    "hocu zhutueeeee.\n",
];

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = StoreConfig::load(&cli.config_dir)?;
    init_logging(&config.log_settings())?;

    let path = cli.file.unwrap_or(config.data_path);
    let store = TextStore::open_fs(path)?;

    match cli.command {
        Some(Commands::Demo) | None => handle_demo(&store),
        Some(Commands::Read) => handle_read(&store),
        Some(Commands::Write { text }) => handle_write(&store, &text),
        Some(Commands::Append { text }) => handle_append(&store, &text),
        Some(Commands::AppendUnique { text }) => handle_append_unique(&store, &text),
        Some(Commands::ReadAndSave) => handle_read_and_save(&store),
    }
}

fn handle_demo(store: &FileTextStore) -> Result<()> {
    for line in DEMO_LINES {
        match store.append_unique(line) {
            Ok(()) => {}
            Err(TextStoreError::DuplicateContent(message)) => {
                println!("{} {}", "Error:".yellow(), message);
                break;
            }
            Err(e) => return Err(e),
        }
    }

    println!("\nFile contents:");
    println!("{}", store.read_and_save()?);
    Ok(())
}

fn handle_read(store: &FileTextStore) -> Result<()> {
    print!("{}", store.read()?);
    Ok(())
}

fn handle_write(store: &FileTextStore, text: &str) -> Result<()> {
    store.write(text)?;
    println!("{}", format!("Wrote {}", store.path().display()).green());
    Ok(())
}

fn handle_append(store: &FileTextStore, text: &str) -> Result<()> {
    store.append(text)?;
    println!("{}", format!("Appended to {}", store.path().display()).green());
    Ok(())
}

fn handle_append_unique(store: &FileTextStore, text: &str) -> Result<()> {
    match store.append_unique(text) {
        Ok(()) => {
            println!("{}", format!("Appended to {}", store.path().display()).green());
            Ok(())
        }
        Err(TextStoreError::DuplicateContent(message)) => {
            println!("{}", message.yellow());
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn handle_read_and_save(store: &FileTextStore) -> Result<()> {
    println!("{}", store.read_and_save()?);
    Ok(())
}
