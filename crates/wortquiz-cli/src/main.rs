//! wortquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wortquiz", version, about = "German vocabulary trainer")]
struct Cli {
    /// Directory holding the vocabulary store
    #[arg(long, global = true, default_value = "./wortquiz-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter config file
    Init,

    /// Add a single word
    Add {
        /// The German word
        #[arg(long)]
        word: String,

        /// Its translation
        #[arg(long)]
        translation: String,

        /// Word type: Nomen, Verb, Adjektiv, Adverb, ...
        #[arg(long, default_value = "Other")]
        word_type: String,

        /// Noun article: Definit or Indefinit
        #[arg(long)]
        article: Option<String>,

        /// Governed preposition (verbs)
        #[arg(long)]
        preposition: Option<String>,

        /// Governed case (verbs): Nominativ, Akkusativ, Dativ, Genitiv
        #[arg(long)]
        kasus: Option<String>,

        /// Mark the verb reflexive
        #[arg(long)]
        reflexive: bool,

        /// Usage note
        #[arg(long)]
        description: Option<String>,

        /// Target list name or id
        #[arg(long)]
        list: Option<String>,
    },

    /// Import words from a CSV sheet or a JSON export
    Import {
        /// Path to a .csv or .json file
        #[arg(long)]
        file: PathBuf,

        /// Conflict handling for CSV rows: merge or add-only
        #[arg(long, default_value = "add-only")]
        strategy: String,

        /// Target list name or id for new words
        #[arg(long)]
        list: Option<String>,
    },

    /// Export all words as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the word collection
    Words {
        /// Only words in this list
        #[arg(long)]
        list: Option<String>,

        /// Match against words and translations
        #[arg(long)]
        search: Option<String>,
    },

    /// Manage word lists
    Lists {
        #[command(subcommand)]
        action: Option<ListsAction>,
    },

    /// Progression maintenance
    Progress {
        #[command(subcommand)]
        action: ProgressAction,
    },

    /// Run an interactive drill session
    Drill {
        /// Only quiz words from this list
        #[arg(long)]
        list: Option<String>,

        /// Number of questions
        #[arg(long)]
        count: Option<usize>,

        /// Shuffle seed for reproducible sessions
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show learning statistics
    Stats {
        /// Clear all recorded statistics
        #[arg(long)]
        reset: bool,
    },

    /// Fetch vocabulary updates from the configured sources
    Sync {
        /// Only report whether an update is available
        #[arg(long)]
        check: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ListsAction {
    /// Create a new list
    Create {
        /// List name
        #[arg(long)]
        name: String,
    },

    /// Rename a list
    Rename {
        /// List name or id
        #[arg(long)]
        list: String,

        /// The new name
        #[arg(long)]
        name: String,
    },

    /// Delete a list and every word in it
    Delete {
        /// List name or id
        #[arg(long)]
        list: String,
    },

    /// Move a word to another list
    Move {
        /// Word id
        #[arg(long)]
        word: String,

        /// Target list name or id; omit to unassign
        #[arg(long)]
        list: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ProgressAction {
    /// Set progression back to zero
    Reset {
        /// Only words in this list
        #[arg(long)]
        list: Option<String>,
    },

    /// Mark a word fully known
    Known {
        /// Word id
        #[arg(long)]
        word: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wortquiz=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Add {
            word,
            translation,
            word_type,
            article,
            preposition,
            kasus,
            reflexive,
            description,
            list,
        } => commands::add::execute(
            &data_dir,
            word,
            translation,
            word_type,
            article,
            preposition,
            kasus,
            reflexive,
            description,
            list,
        ),
        Commands::Import {
            file,
            strategy,
            list,
        } => commands::import::execute(&data_dir, file, strategy, list),
        Commands::Export { output } => commands::export::execute(&data_dir, output),
        Commands::Words { list, search } => commands::words::execute(&data_dir, list, search),
        Commands::Lists { action } => commands::lists::execute(&data_dir, action),
        Commands::Progress { action } => commands::progress::execute(&data_dir, action),
        Commands::Drill {
            list,
            count,
            seed,
            config,
        } => commands::drill::execute(&data_dir, list, count, seed, config.as_deref()),
        Commands::Stats { reset } => commands::stats::execute(&data_dir, reset),
        Commands::Sync { check, config } => {
            commands::sync::execute(&data_dir, check, config.as_deref()).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
