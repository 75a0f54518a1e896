use anyhow::{Context, Result};
use unhash_core::BruteForceAttack;

use crate::{check_digest_width, report::print_outcome, BruteForce};

pub fn brute_force(brute: BruteForce) -> Result<()> {
    check_digest_width(&brute.target);

    let max_length =
        usize::try_from(brute.max_length).context("The maximum length is too large")?;

    let attack = BruteForceAttack::builder(brute.target.algorithm, brute.target.digest.as_str())
        .charset(brute.charset())
        .max_length(max_length)
        .max_attempts(brute.max_attempts)
        .build()?;

    let outcome = attack.search();
    print_outcome("Brute force", brute.target.algorithm, &outcome);

    Ok(())
}
