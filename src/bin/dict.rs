use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Parser, Subcommand};
use log::info;

use dict::{hello, repeat, DictSession, Dictionary, Result};

/// A word dictionary and its companion text helpers
#[derive(Parser)]
#[command(name = "dict", version, about = "An in-memory word dictionary")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a greeting
    Hello {
        /// Who to greet
        name: Option<String>,
    },
    /// Print TEXT repeated COUNT times
    Repeat {
        /// The text to repeat
        text: String,
        /// How many copies to print
        count: usize,
    },
    /// Look up a word in a seed dictionary
    Search {
        /// The word to look up
        word: String,
        /// JSON object of word -> definition
        #[arg(long, value_name = "FILE")]
        seed: PathBuf,
    },
    /// Answer JSON requests from stdin on stdout
    Session {
        /// JSON object of word -> definition to start from
        #[arg(long, value_name = "FILE")]
        seed: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Hello { name } => {
            println!("{}", hello(name.as_deref().unwrap_or_default()));
        }
        Commands::Repeat { text, count } => println!("{}", repeat(&text, count)),
        Commands::Search { word, seed } => {
            let dictionary = load_seed(&seed)?;
            println!("{}", dictionary.search(&word)?);
        }
        Commands::Session { seed } => {
            let dictionary = match seed {
                Some(path) => load_seed(&path)?,
                None => Dictionary::new(),
            };

            info!("dict {}", env!("CARGO_PKG_VERSION"));
            let mut session = DictSession::new(dictionary);
            session.run(io::stdin().lock(), io::stdout().lock())?;
            info!("Session ended with {} entries", session.dictionary().len());
        }
    }

    Ok(())
}

/// Reads a JSON object of word -> definition pairs.
fn load_seed(path: &Path) -> Result<Dictionary> {
    let reader = BufReader::new(File::open(path)?);
    let dictionary: Dictionary = serde_json::from_reader(reader)?;
    info!("Loaded {} entries from {}", dictionary.len(), path.display());
    Ok(dictionary)
}
