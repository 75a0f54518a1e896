use comfy_table::{presets::UTF8_FULL, Table};
use human_repr::HumanDuration;
use unhash_core::{HashFunction, RainbowTable, SearchOutcome};

/// Prints the summary of a search, then the result line.
pub fn print_outcome(strategy: &str, hash_function: HashFunction, outcome: &SearchOutcome) {
    let status = match outcome {
        SearchOutcome::Found(_) => "found",
        SearchOutcome::NotFound { .. } => "exhausted",
        SearchOutcome::SafetyLimitReached { .. } => "safety limit reached",
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Strategy", "Algorithm", "Status", "Attempts", "Duration"])
        .add_row([
            strategy.to_owned(),
            hash_function.to_string(),
            status.to_owned(),
            outcome.attempts().to_string(),
            outcome.elapsed().as_secs_f64().human_duration().to_string(),
        ]);

    println!("{table}");
    print_result(outcome.plaintext());
}

/// Prints the summary of a rainbow table lookup, then the result line.
pub fn print_lookup(rainbow_table: &RainbowTable, plaintext: Option<&str>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Strategy", "Algorithm", "Status", "Entries"])
        .add_row([
            "Rainbow table".to_owned(),
            rainbow_table.hash_function().to_string(),
            if plaintext.is_some() { "found" } else { "missing" }.to_owned(),
            rainbow_table.len().to_string(),
        ]);

    println!("{table}");
    print_result(plaintext);
}

fn print_result(plaintext: Option<&str>) {
    match plaintext {
        Some(plaintext) => println!("Result: {plaintext}"),
        None => println!("Result: NOT FOUND"),
    }
}
