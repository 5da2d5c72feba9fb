use hilo_core::config::{ConfigError, NumDecks};
use hilo_core::deck::{Rank, RankError};
use hilo_core::Session;
use std::convert::TryFrom;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const HELP: &str = "\
p <rank>...  deal cards to the player (ranks: A 2-9 10 T J Q K)
d <rank>     set the dealer upcard, replacing any current one
d -          clear the dealer upcard
u            undo the player's last card
c            clear the player's hand (cards stay counted)
+ / -        nudge the running count by one
adj <n>      nudge the running count by n
rh           reset hands (dealer card leaves the count)
rc           reset the count
ra           reset everything
decks <n>    use a 1, 2, 4, 6, or 8 deck shoe
unit <amt>   set the base betting unit
json         print the current state as JSON
help         this text
quit";

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Json,
    Player(Vec<Rank>),
    Dealer(Option<Rank>),
    Undo,
    Clear,
    Adjust(i32),
    ResetHands,
    ResetCount,
    ResetAll,
    Decks(NumDecks),
    Unit(f32),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArg(String),
    #[error("'{0}' takes no arguments")]
    ExtraArgs(String),
    #[error("'{0}' is not a number")]
    BadNumber(String),
    #[error("nothing to undo")]
    NothingToUndo,
    #[error(transparent)]
    BadRank(#[from] RankError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn no_args(word: &str, args: &[&str], cmd: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(CommandError::ExtraArgs(word.to_string()))
    }
}

fn one_arg<'a>(word: &str, args: &[&'a str]) -> Result<&'a str, CommandError> {
    match args {
        [arg] => Ok(*arg),
        [] => Err(CommandError::MissingArg(word.to_string())),
        _ => Err(CommandError::ExtraArgs(word.to_string())),
    }
}

pub fn command_from_str(s: &str) -> Result<Command, CommandError> {
    let words: Vec<_> = s.split_whitespace().collect();
    let (word, args) = match words.split_first() {
        Some((w, args)) => (w.to_ascii_lowercase(), args),
        None => return Err(CommandError::Unknown(String::new())),
    };
    match word.as_str() {
        "quit" | "q" | "exit" => no_args(&word, args, Command::Quit),
        "help" | "h" | "?" => no_args(&word, args, Command::Help),
        "json" => no_args(&word, args, Command::Json),
        "u" | "undo" => no_args(&word, args, Command::Undo),
        "c" | "clear" => no_args(&word, args, Command::Clear),
        "+" => no_args(&word, args, Command::Adjust(1)),
        "-" => no_args(&word, args, Command::Adjust(-1)),
        "rh" => no_args(&word, args, Command::ResetHands),
        "rc" => no_args(&word, args, Command::ResetCount),
        "ra" => no_args(&word, args, Command::ResetAll),
        "p" | "player" => {
            if args.is_empty() {
                return Err(CommandError::MissingArg(word.clone()));
            }
            let ranks = args
                .iter()
                .map(|a| a.parse::<Rank>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Command::Player(ranks))
        }
        "d" | "dealer" => match one_arg(&word, args)? {
            "-" => Ok(Command::Dealer(None)),
            r => Ok(Command::Dealer(Some(r.parse::<Rank>()?))),
        },
        "adj" => {
            let n = one_arg(&word, args)?;
            n.parse::<i32>()
                .map(Command::Adjust)
                .map_err(|_| CommandError::BadNumber(n.to_string()))
        }
        "decks" => {
            let n = one_arg(&word, args)?;
            let n = n
                .parse::<u8>()
                .map_err(|_| CommandError::BadNumber(n.to_string()))?;
            Ok(Command::Decks(NumDecks::try_from(n)?))
        }
        "unit" => {
            let amt = one_arg(&word, args)?;
            amt.parse::<f32>()
                .map(Command::Unit)
                .map_err(|_| CommandError::BadNumber(amt.to_string()))
        }
        _ => Err(CommandError::Unknown(word.clone())),
    }
}

impl Command {
    /// Carry out a command that changes the session. Commands that only affect the front end
    /// (quit, help, json) do nothing here.
    pub fn apply(self, session: &mut Session) -> Result<(), CommandError> {
        match self {
            Command::Player(ranks) => ranks.into_iter().for_each(|r| session.add_card(r)),
            Command::Dealer(r) => session.set_dealer_upcard(r),
            Command::Undo => {
                session
                    .remove_last_card()
                    .ok_or(CommandError::NothingToUndo)?;
            }
            Command::Clear => session.clear_hand(),
            Command::Adjust(delta) => session.adjust_count_manually(delta),
            Command::ResetHands => session.reset_hands(),
            Command::ResetCount => session.reset_count(),
            Command::ResetAll => session.reset_all(),
            Command::Decks(n) => session.set_num_decks(n),
            Command::Unit(amt) => session.set_base_unit(amt)?,
            Command::Quit | Command::Help | Command::Json => {}
        }
        Ok(())
    }
}

/// Ask until we get a valid command. End of input is treated as quit.
pub fn prompt(s: &str, in_buf: &mut impl BufRead, out_buf: &mut impl Write) -> io::Result<Command> {
    loop {
        write!(out_buf, "{} > ", s)?;
        out_buf.flush()?;
        let mut line = String::new();
        if in_buf.read_line(&mut line)? == 0 {
            writeln!(out_buf)?;
            break Ok(Command::Quit);
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match command_from_str(line) {
            Ok(cmd) => break Ok(cmd),
            Err(e) => writeln!(out_buf, "{}", e)?,
        }
    }
}
