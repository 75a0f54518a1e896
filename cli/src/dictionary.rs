use std::time::Duration;

use anyhow::{Context, Result};
use unhash_core::DictionaryAttack;

use crate::{check_digest_width, report::print_outcome, Dictionary};

pub fn dictionary(dict: Dictionary) -> Result<()> {
    check_digest_width(&dict.target);

    let outcome = DictionaryAttack::new(dict.target.algorithm, dict.target.digest.as_str())
        .delay(Duration::from_millis(dict.delay_ms))
        .search_file(&dict.wordlist)
        .context("Dictionary attack aborted")?;

    print_outcome("Dictionary", dict.target.algorithm, &outcome);

    Ok(())
}
