//! Command-line front end for the libp2p configuration generator.
//!
//! Usage:
//!   p2p-wizard generate --transport tcp,websockets --muxer yamux --encryption noise
//!   p2p-wizard generate --selection selection.json --output code
//!   p2p-wizard catalog --category protocol
//!   p2p-wizard respond < request.json
//!   p2p-wizard scaffold project.txt --root ./out

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use p2p_wizard::{
    CATALOG, Category, GeneratedResult, Selection, generate, handle_generate_request,
    load_selection_from_path, logging, read_input, scaffold, selection, split_list,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "p2p-wizard")]
#[command(about = "Generate libp2p node setup code, package list and install command")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate code for a selection given as flags or a JSON file.
    Generate(GenerateArgs),
    /// Print the capability catalog as JSON.
    Catalog {
        /// Only list these categories (repeatable).
        #[arg(long)]
        category: Vec<Category>,
    },
    /// Answer a generate request body the way the HTTP endpoint does.
    Respond {
        /// Request body file; reads stdin when omitted.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Split a marker-delimited text file into files.
    Scaffold {
        input: PathBuf,
        /// Directory the files are written under.
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Read the whole selection from a JSON file instead of flags.
    #[arg(long, conflicts_with_all = ["transport", "muxer", "encryption", "discovery", "protocol"])]
    selection: Option<PathBuf>,
    /// Transports (repeatable, or comma separated).
    #[arg(long)]
    transport: Vec<String>,
    /// Stream multiplexers.
    #[arg(long)]
    muxer: Vec<String>,
    /// Connection encryption schemes.
    #[arg(long)]
    encryption: Vec<String>,
    /// Peer discovery mechanisms.
    #[arg(long)]
    discovery: Vec<String>,
    /// Protocol services.
    #[arg(long)]
    protocol: Vec<String>,
    #[arg(long, default_value_t = selection::DEFAULT_MAX_CONNECTIONS, allow_negative_numbers = true)]
    max_connections: i64,
    #[arg(long, default_value = selection::DEFAULT_CONNECTION_MANAGER)]
    connection_manager: String,
    /// What to print.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    output: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full result as pretty JSON.
    Json,
    /// Only the generated source.
    Code,
    /// One package per line.
    Packages,
    /// Only the install command.
    Install,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Catalog { category } => {
            let listings = CATALOG.listings(&category);
            println!("{}", serde_json::to_string_pretty(&listings)?);
            Ok(())
        }
        Command::Respond { file } => run_respond(file),
        Command::Scaffold { input, root } => {
            let written = scaffold::scaffold_from_file(&input, &root)?;
            for path in written {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let selection = match &args.selection {
        Some(path) => load_selection_from_path(path)?,
        None => selection_from_flags(&args),
    };
    let result = generate(&selection);
    print_result(&result, args.output)
}

fn selection_from_flags(args: &GenerateArgs) -> Selection {
    let flatten = |values: &[String]| -> Vec<String> {
        values.iter().flat_map(|value| split_list(value)).collect()
    };
    Selection {
        transports: flatten(&args.transport),
        stream_muxers: flatten(&args.muxer),
        connection_encryption: flatten(&args.encryption),
        peer_discovery: flatten(&args.discovery),
        protocols: flatten(&args.protocol),
        max_connections: args.max_connections,
        connection_manager: args.connection_manager.clone(),
    }
}

fn print_result(result: &GeneratedResult, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Code => println!("{}", result.code),
        OutputFormat::Packages => {
            for package in &result.packages {
                println!("{package}");
            }
        }
        OutputFormat::Install => println!("{}", result.install_command),
    }
    Ok(())
}

fn run_respond(file: Option<PathBuf>) -> Result<()> {
    let body = read_input(file.as_deref()).context("reading request body")?;
    let response = handle_generate_request(&body);
    println!("{}", serde_json::to_string(&response.body)?);
    if !response.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
