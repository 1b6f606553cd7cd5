use address_svc_client::TokenLookup;

use crate::checker::{TickerChecker, TickerResult};

/// Classifies every ticker, one at a time, in input order.
///
/// The output always has one row per input, same order; a ticker that fails
/// only fails its own row. `progress` is called with `(completed, total)`
/// after each item.
pub async fn classify_all<L: TokenLookup>(
    checker: &TickerChecker<L>,
    tickers: &[String],
    mut progress: impl FnMut(usize, usize),
) -> Vec<TickerResult> {
    let total = tickers.len();
    let mut results = Vec::with_capacity(total);

    for (index, ticker) in tickers.iter().enumerate() {
        results.push(checker.classify(ticker).await);
        progress(index + 1, total);
    }

    results
}
