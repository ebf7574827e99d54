use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use limbu_core::gloss::{gloss_lookup, months_table};
use limbu_core::script::codepoint_label;
use limbu_core::table::{
    load_table_file, Script, Tables, DEFAULT_DEVANAGARI_TOML, DEFAULT_ROMAN_TOML,
};
use limbu_engine::api::{handle, Mode, Request};
use limbu_engine::init_tracing;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "limbutool", about = "Limbu script transliteration tool")]
struct Cli {
    /// Write JSON trace events into this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// Replace the built-in Limbu <-> Roman table
    #[arg(long, global = true)]
    roman_table: Option<PathBuf>,
    /// Replace the built-in Limbu <-> Devanagari table
    #[arg(long, global = true)]
    devanagari_table: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text between Limbu, Roman and Devanagari
    Convert {
        /// limbu_to_roman, limbu_to_devanagari, devanagari_to_limbu or roman_to_limbu
        #[arg(short, long, default_value = "limbu_to_roman")]
        mode: String,
        /// Print the per-character trace (limbu_to_roman only)
        #[arg(long)]
        trace: bool,
        /// Output the full response as JSON
        #[arg(long)]
        json: bool,
        /// Text to convert (read from stdin when omitted)
        text: Option<String>,
    },
    /// Look up the English gloss of a Devanagari month word
    Gloss {
        /// Devanagari word
        word: String,
    },
    /// Print the Limbu month table
    Months,
    /// Show token counts, collisions and prefix overlaps of a table
    Tables {
        #[arg(long, value_enum, default_value = "roman")]
        script: ScriptArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScriptArg {
    Roman,
    Devanagari,
}

impl From<ScriptArg> for Script {
    fn from(s: ScriptArg) -> Self {
        match s {
            ScriptArg::Roman => Script::Roman,
            ScriptArg::Devanagari => Script::Devanagari,
        }
    }
}

fn read_table(path: Option<&Path>, default: &str) -> String {
    match path {
        Some(p) => {
            // Validate before handing the text to the global tables.
            die!(load_table_file(p), "Error loading table: {}");
            die!(std::fs::read_to_string(p), "Error reading table: {}")
        }
        None => default.to_string(),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        init_tracing(dir);
    }

    if cli.roman_table.is_some() || cli.devanagari_table.is_some() {
        let roman = read_table(cli.roman_table.as_deref(), DEFAULT_ROMAN_TOML);
        let devanagari = read_table(cli.devanagari_table.as_deref(), DEFAULT_DEVANAGARI_TOML);
        die!(
            Tables::init_custom(roman, devanagari),
            "Error building tables: {}"
        );
    }

    match cli.command {
        Command::Convert {
            mode,
            trace,
            json,
            text,
        } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    die!(
                        std::io::stdin().read_to_string(&mut buf),
                        "Error reading stdin: {}"
                    );
                    buf.trim_end_matches(['\r', '\n']).to_string()
                }
            };
            let response = handle(&Request::new(mode, text));
            if json {
                println!(
                    "{}",
                    die!(
                        serde_json::to_string_pretty(&response),
                        "Error serializing response: {}"
                    )
                );
                return;
            }
            println!("{}", response.output_text);
            if trace || response.translit_mode.parse::<Mode>().is_err() {
                for line in &response.debug_logs {
                    eprintln!("{line}");
                }
            }
        }
        Command::Gloss { word } => println!("{}", gloss_lookup(&word)),
        Command::Months => print!("{}", months_table()),
        Command::Tables { script } => {
            let table = Tables::global().table(script.into());
            println!(
                "{}: {} codepoints, {} tokens",
                table.script(),
                table.forward().len(),
                table.reverse().len()
            );
            let collisions = table.collisions();
            println!("collisions: {}", collisions.len());
            for c in collisions {
                let losers: Vec<String> = c
                    .overwritten
                    .iter()
                    .map(|&(cp, cat)| format!("{} ({cat})", codepoint_label(cp)))
                    .collect();
                println!(
                    "  {:?} -> {} ({}), overwrites {}",
                    c.token,
                    codepoint_label(c.winner.0),
                    c.winner.1,
                    losers.join(", ")
                );
            }
            let overlaps = table.prefix_overlaps();
            println!("prefix overlaps: {}", overlaps.len());
            for o in overlaps {
                println!(
                    "  {:?} ({}) < {:?} ({})",
                    o.shorter, o.shorter_category, o.longer, o.longer_category
                );
            }
        }
    }
}
