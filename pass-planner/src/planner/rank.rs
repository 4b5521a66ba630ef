//! Picking the cheapest solutions.

use crate::domain::Wallet;

/// Keep only the wallets with the lowest cost.
///
/// Ties are all kept, in their original order, even when their purchase
/// logs are identical. Returns an empty vector for empty input.
pub fn cheapest(solutions: Vec<Wallet>) -> Vec<Wallet> {
    let Some(min) = solutions.iter().map(Wallet::cost).min() else {
        return Vec::new();
    };

    solutions.into_iter().filter(|w| w.cost() == min).collect()
}
