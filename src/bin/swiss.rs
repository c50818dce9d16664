//! Command-line front end: standings or next-round pairings from CSV files.
//! Run with: cargo run --bin swiss -- <standings|pairings> <players.csv> <matches.csv>
//! Set SWISS_OUTPUT=json for JSON instead of a table. Log level via RUST_LOG.

use std::error::Error;
use std::fs::File;
use std::process::ExitCode;
use swiss_pairing::{
    import_tournament, player_standings, swiss_pairings, InMemoryRepository, Pairing,
    StandingEntry,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Command {
    Standings,
    Pairings,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OutputFormat {
    Table,
    Json,
}

fn default_output() -> OutputFormat {
    OutputFormat::Table
}

fn print_usage() {
    eprintln!("Swiss tournament pairing");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  swiss standings <players.csv> <matches.csv>");
    eprintln!("  swiss pairings <players.csv> <matches.csv>");
    eprintln!();
    eprintln!("players.csv columns: id,name");
    eprintln!("matches.csv columns: winner,loser,is_tie (empty loser = bye)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SWISS_OUTPUT   table (default) or json");
    eprintln!("  RUST_LOG       log filter, e.g. info or swiss_pairing=debug");
}

fn output_format() -> OutputFormat {
    match std::env::var("SWISS_OUTPUT") {
        Ok(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
        Ok(v) if v.eq_ignore_ascii_case("table") => OutputFormat::Table,
        Ok(v) => {
            log::warn!("Unknown SWISS_OUTPUT {:?}, using table", v);
            default_output()
        }
        Err(_) => default_output(),
    }
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match args.first().map(String::as_str) {
        Some("standings") => Command::Standings,
        Some("pairings") => Command::Pairings,
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    let (Some(players_path), Some(matches_path)) = (args.get(1), args.get(2)) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(command, players_path, matches_path, output_format()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(
    command: Command,
    players_path: &str,
    matches_path: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let mut repo = InMemoryRepository::new();
    let tournament = import_tournament(
        &mut repo,
        players_path,
        File::open(players_path)?,
        File::open(matches_path)?,
    )?;

    match command {
        Command::Standings => {
            let standings = player_standings(&repo, tournament)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&standings)?),
                OutputFormat::Table => print_standings(&standings),
            }
        }
        Command::Pairings => {
            let pairings = swiss_pairings(&repo, tournament)?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pairings)?),
                OutputFormat::Table => print_pairings(&pairings),
            }
        }
    }
    Ok(())
}

fn print_standings(standings: &[StandingEntry]) {
    println!(
        "{:>4}  {:<24} {:>4} {:>4} {:>4} {:>4} {:>7} {:>4}",
        "#", "Player", "W", "L", "T", "Bye", "Played", "OMW"
    );
    for (rank, s) in standings.iter().enumerate() {
        println!(
            "{:>4}  {:<24} {:>4} {:>4} {:>4} {:>4} {:>7} {:>4}",
            rank + 1,
            s.name,
            s.wins,
            s.losses,
            s.ties,
            s.byes,
            s.matches,
            s.omw
        );
    }
}

fn print_pairings(pairings: &[Pairing]) {
    for (table, p) in pairings.iter().enumerate() {
        match &p.name2 {
            Some(opponent) => println!("{:>3}. {} vs {}", table + 1, p.name1, opponent),
            None => println!("{:>3}. {} (bye)", table + 1, p.name1),
        }
    }
}
