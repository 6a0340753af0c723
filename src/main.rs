use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use termcolor::{ColorChoice, StandardStream};
use zearch::app::App;
use zearch::config::AppConfig;
use zearch::index::{stats, Index};
use zearch::loader::DataSet;
use zearch::output::OutputFormat;
use zearch::utils::{init_logging, progress};

#[derive(Parser)]
#[command(name = "zearch")]
#[command(about = "Search organizations, users and tickets loaded from JSON")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Organizations JSON file
    #[arg(long, global = true)]
    organizations: Option<PathBuf>,

    /// Users JSON file
    #[arg(long, global = true)]
    users: Option<PathBuf>,

    /// Tickets JSON file
    #[arg(long, global = true)]
    tickets: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    color: Option<ColorMode>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and exit
    Search {
        /// organizations, users or tickets
        entity: String,

        /// Field name, alternatives joined by " or "
        term: String,

        /// Value to match, alternatives joined by " or "
        value: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the fields each collection can be searched by
    Fields,
    /// Show index statistics
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load()?;
    let organizations = cli.organizations.unwrap_or(config.organizations_file);
    let users = cli.users.unwrap_or(config.users_file);
    let tickets = cli.tickets.unwrap_or(config.tickets_file);

    let color = match cli.color {
        Some(ColorMode::Always) => ColorChoice::Always,
        Some(ColorMode::Never) => ColorChoice::Never,
        Some(ColorMode::Auto) => ColorChoice::Auto,
        None if config.color && io::stdout().is_terminal() => ColorChoice::Auto,
        None => ColorChoice::Never,
    };

    let spinner = progress::spinner("Loading data...", io::stderr().is_terminal());
    let loaded = DataSet::load(&organizations, &users, &tickets).and_then(DataSet::into_index);
    spinner.finish_and_clear();
    let index: Index = loaded?;

    let stdout = StandardStream::stdout(color);

    match cli.command {
        Some(Commands::Search {
            entity,
            term,
            value,
            json,
        }) => {
            let format = if json { OutputFormat::Json } else { OutputFormat::Text };
            App::new(index, stdout).with_format(format).search(&entity, &term, &value)?;
        }
        Some(Commands::Fields) => {
            App::new(index, stdout).print_searchable_fields()?;
        }
        Some(Commands::Stats) => {
            stats::show_stats(&index, &mut io::stdout().lock())?;
        }
        None => {
            App::new(index, stdout).run(io::stdin().lock())?;
        }
    }

    Ok(())
}
