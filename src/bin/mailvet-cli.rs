use anyhow::{Context, Result};
use clap::CommandFactory;
use clap::{Parser, Subcommand};
use mailvet::Validator;

use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "mailvet-cli")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    stdin: bool,

    /// format: human|json
    #[arg(long, default_value = "human")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    Validate { email: String },
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
struct Row {
    input: String,
    valid: bool,
}

fn check(email: String) -> Row {
    let valid = Validator::new(&email).validate();
    Row {
        input: email,
        valid,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rows: Vec<Row> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let email = line.context("read stdin")?;
            rows.push(check(email));
        }
    } else if let Some(Commands::Validate { email }) = cli.cmd {
        rows.push(check(email));
    } else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    match cli.format.as_str() {
        "human" => {
            for r in &rows {
                if r.valid {
                    println!("[OK]      {}", r.input);
                } else {
                    println!("[INVALID] {}", r.input);
                }
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=json nécessite la feature 'with-serde'");
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json", other);
            std::process::exit(1);
        }
    }

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    let any_invalid = rows.iter().any(|r| !r.valid);
    if any_invalid {
        std::process::exit(2);
    }
    Ok(())
}
