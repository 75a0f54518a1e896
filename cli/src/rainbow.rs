use anyhow::Result;
use unhash_core::{RainbowTable, DEMO_WORDS};

use crate::{check_digest_width, read_word_list, report::print_lookup, Rainbow};

pub fn rainbow(rb: Rainbow) -> Result<()> {
    check_digest_width(&rb.target);

    let table = match &rb.wordlist {
        Some(path) => RainbowTable::build(read_word_list(path)?, rb.target.algorithm),
        None => RainbowTable::build(DEMO_WORDS, rb.target.algorithm),
    };

    print_lookup(&table, table.lookup(rb.target.digest.as_str()));

    Ok(())
}
