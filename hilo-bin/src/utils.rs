use hilo_core::config::{ConfigError, ShoeConfig};
use hilo_core::Snapshot;
use std::fs::OpenOptions;
use std::io::BufReader;

/// Read a JSON shoe config from the given file
pub fn read_config(fname: &str) -> Result<ShoeConfig, ConfigError> {
    let fd = OpenOptions::new().read(true).open(fname)?;
    ShoeConfig::from_reader(BufReader::new(fd))
}

/// One line summary of the table, e.g.
/// `RC +3  TC +0.60  decks 5.00  bet 1  | [A 6] 17s vs 6 -> Double`
pub fn status_line(snap: &Snapshot) -> String {
    format!(
        "RC {:+}  TC {:+.2}  decks {:.2}  bet {}  | {} {} vs {} -> {}",
        snap.count.running_count,
        snap.shoe.true_count,
        snap.shoe.decks_remaining,
        snap.suggested_bet,
        snap.hand,
        snap.hand_value,
        match snap.dealer {
            Some(d) => d.to_string(),
            None => String::from("?"),
        },
        snap.recommendation,
    )
}
