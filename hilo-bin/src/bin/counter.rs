use clap::{crate_authors, crate_name, crate_version, value_t, App, Arg};
use hilo_bin::prompt::{self, Command};
use hilo_bin::utils::{read_config, status_line};
use hilo_core::config::{NumDecks, ShoeConfig};
use hilo_core::Session;
use log::info;
use std::convert::TryFrom;
use std::io::{self, BufReader, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let matches = App::new(String::from(crate_name!()) + " counter")
        .author(crate_authors!())
        .version(crate_version!())
        .about("Hi-Lo running/true count, bet sizing, and basic strategy at the table")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("JSON file with num_decks and base_unit"),
        )
        .arg(
            Arg::with_name("decks")
                .short("d")
                .long("decks")
                .value_name("NUM")
                .possible_values(&["1", "2", "4", "6", "8"])
                .help("Number of decks in the shoe (overrides config file)"),
        )
        .arg(
            Arg::with_name("unit")
                .short("u")
                .long("unit")
                .value_name("AMT")
                .help("Base betting unit (overrides config file)"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print the full state as JSON after every command"),
        )
        .get_matches();
    let mut config = match matches.value_of("config") {
        Some(fname) => {
            info!("Reading config from {}", fname);
            read_config(fname)?
        }
        None => ShoeConfig::default(),
    };
    if matches.is_present("decks") {
        config.num_decks = NumDecks::try_from(value_t!(matches, "decks", u8)?)?;
    }
    if matches.is_present("unit") {
        config.base_unit = value_t!(matches, "unit", f32)?;
    }
    let json = matches.is_present("json");
    let mut session = Session::default();
    session.set_config(config)?;
    let mut input = BufReader::new(io::stdin());
    let mut output = io::stdout();
    writeln!(
        output,
        "{} with base unit {}. 'help' for commands.",
        config.num_decks, config.base_unit
    )?;
    loop {
        let snap = session.snapshot();
        if json {
            writeln!(output, "{}", serde_json::to_string(&snap)?)?;
        } else {
            writeln!(output, "{}", status_line(&snap))?;
        }
        let cmd = prompt::prompt("", &mut input, &mut output)?;
        match cmd {
            Command::Quit => return Ok(()),
            Command::Help => writeln!(output, "{}", prompt::HELP)?,
            Command::Json => writeln!(output, "{}", serde_json::to_string_pretty(&snap)?)?,
            cmd => {
                if let Err(e) = cmd.apply(&mut session) {
                    writeln!(output, "{}", e)?;
                }
            }
        }
    }
}
