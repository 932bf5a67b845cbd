use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use ipa_cli::commands::token_ops::{render_json, render_text, TokenRecord};
use ipa_cli::commands::{convert_ops, table_ops, DirectionChoice};
use ipa_cli::input::read_input;
use ipa_cli::trace_init::init_tracing;
use ipa_core::Tables;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "ipatool", about = "Kirshenbaum ASCII-IPA / Unicode IPA transliteration")]
struct Cli {
    /// Custom symbol inventory (TOML, see `table-export`)
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Do not warn about unrecognized characters
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Directory for JSONL trace logs (builds with the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Kirshenbaum ASCII-IPA to Unicode IPA
    ToUnicode {
        /// Text to convert (reads --file or stdin when omitted)
        text: Vec<String>,
        /// Read input from this file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Convert Unicode IPA to Kirshenbaum ASCII-IPA
    ToAscii {
        /// Text to convert (reads --file or stdin when omitted)
        text: Vec<String>,
        /// Read input from this file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Convert in either direction
    Convert {
        /// Text to convert (reads --file or stdin when omitted)
        text: Vec<String>,
        /// Read input from this file
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "auto")]
        direction: DirectionChoice,
        /// Only convert /phonemic/ and [phonetic] spans
        #[arg(long)]
        delimited: bool,
    },
    /// Show how the scanner splits the input
    Tokens {
        /// Text to scan (reads --file or stdin when omitted)
        text: Vec<String>,
        /// Read input from this file
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "auto")]
        direction: DirectionChoice,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in symbol inventory as TOML
    TableExport,
    /// Validate a custom symbol inventory TOML file
    TableValidate {
        /// Path to the TOML file
        file: PathBuf,
    },
}

fn convert_and_print(
    text: &[String],
    file: Option<PathBuf>,
    choice: DirectionChoice,
    delimited: bool,
    quiet: bool,
) {
    let input = die!(read_input(text, file.as_deref()), "Error reading input: {}");
    let (_, out) = convert_ops::convert(Tables::global(), &input, choice, delimited);
    if input.ends_with('\n') {
        print!("{}", out.text);
    } else {
        println!("{}", out.text);
    }
    if !quiet {
        if let Some(warning) = convert_ops::unrecognized_warning(&out) {
            eprintln!("{warning}");
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_dir.as_deref());

    if let Some(path) = &cli.table {
        die!(table_ops::load_custom(path), "Error loading table: {}");
    }

    match cli.command {
        Command::ToUnicode { text, file } => {
            convert_and_print(&text, file, DirectionChoice::ToUnicode, false, cli.quiet)
        }
        Command::ToAscii { text, file } => {
            convert_and_print(&text, file, DirectionChoice::ToAscii, false, cli.quiet)
        }
        Command::Convert {
            text,
            file,
            direction,
            delimited,
        } => convert_and_print(&text, file, direction, delimited, cli.quiet),
        Command::Tokens {
            text,
            file,
            direction,
            json,
        } => {
            let input = die!(read_input(&text, file.as_deref()), "Error reading input: {}");
            let direction = direction.resolve(&input, false);
            let records: Vec<TokenRecord<'_>> = Tables::global()
                .tokens(&input, direction)
                .map(TokenRecord::from)
                .collect();
            if json {
                println!("{}", die!(render_json(&records), "Error: {}"));
            } else {
                print!("{}", render_text(&records));
            }
        }
        Command::TableExport => {
            print!("{}", die!(table_ops::export_default(), "Error: {}"));
        }
        Command::TableValidate { file } => {
            let inv = die!(table_ops::validate_file(&file), "Invalid table: {}");
            println!(
                "OK: {} segments ({} vowels), {} diacritics, {} variants, {} stress marks",
                inv.segments.len(),
                inv.vowels.len(),
                inv.diacritics.len(),
                inv.diacritic_variants.len(),
                inv.stress.len()
            );
        }
    }
}
