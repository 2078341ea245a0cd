use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textstore")]
#[command(about = "Read, write and append to a plain text file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text file to operate on (overrides the configured data path)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Directory holding textstore.json
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scripted demonstration (default)
    Demo,

    /// Print the file content
    #[command(alias = "cat")]
    Read,

    /// Replace the file content
    Write { text: String },

    /// Append text to the end of the file
    Append { text: String },

    /// Append text unless its trimmed form is already present
    #[command(alias = "au")]
    AppendUnique { text: String },

    /// Append a separator and a copy of the content, printing the original
    ReadAndSave,
}
