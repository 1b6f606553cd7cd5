use std::{fs::File, io, path::Path};

use anyhow::{Context, Result};
use csv::{Reader, Writer};

use crate::checker::TickerResult;

pub const TICKER_COLUMN: &str = "ticker";

/// Reads the input table. A missing `ticker` column is a structural error,
/// raised here before any lookups run.
pub fn read_tickers(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("unable to open {}", path.display()))?;
    read_tickers_from(file)
}

pub fn read_tickers_from(input: impl io::Read) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(input);

    let column = reader
        .headers()
        .context("unable to read CSV header")?
        .iter()
        .position(|header| header == TICKER_COLUMN)
        .with_context(|| format!("input CSV must contain a '{TICKER_COLUMN}' column"))?;

    let mut tickers = Vec::new();
    for record in reader.records() {
        let record = record.context("malformed CSV record")?;
        tickers.push(record.get(column).unwrap_or_default().to_owned());
    }

    Ok(tickers)
}

/// Writes the results artifact, one row per input ticker in input order.
pub fn write_results(path: impl AsRef<Path>, results: &[TickerResult]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("unable to create {}", path.display()))?;
    write_results_to(file, results)
}

pub fn write_results_to(output: impl io::Write, results: &[TickerResult]) -> Result<()> {
    let mut writer = Writer::from_writer(output);

    for result in results {
        writer.serialize(result).context("unable to write result row")?;
    }

    writer.flush().context("unable to flush results")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use claims::assert_err;

    use super::*;

    #[test]
    fn reads_tickers_from_named_column() {
        let input = "name,ticker\nPepe,PEPE\nCircle,USDC\n";

        let tickers = read_tickers_from(input.as_bytes()).unwrap();

        assert_eq!(tickers, ["PEPE", "USDC"]);
    }

    #[test]
    fn keeps_blank_rows_for_per_ticker_reporting() {
        let input = "ticker\nPEPE\n\"\"\nUSDC\n";

        let tickers = read_tickers_from(input.as_bytes()).unwrap();

        assert_eq!(tickers, ["PEPE", "", "USDC"]);
    }

    #[test]
    fn missing_ticker_column_is_a_structural_error() {
        let input = "symbol\nPEPE\n";

        let err = assert_err!(read_tickers_from(input.as_bytes()));

        assert!(err.to_string().contains("'ticker' column"), "error: {err}");
    }

    #[test]
    fn writes_one_row_per_result_with_header() {
        let results = vec![
            TickerResult {
                ticker: "PEPE".to_owned(),
                address: "0x6982".to_owned(),
                contract_type: "non-fungible-token".to_owned(),
                is_nft: true,
                error: String::new(),
            },
            TickerResult {
                ticker: "ZZZ".to_owned(),
                address: String::new(),
                contract_type: String::new(),
                is_nft: false,
                error: "symbol lookup error: 404 Not Found: https://svc.invalid/symbols/ZZZ".to_owned(),
            },
        ];

        let mut buffer = Vec::new();
        write_results_to(&mut buffer, &results).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ticker,address,contract_type,is_nft,error"));
        assert_eq!(lines.next(), Some("PEPE,0x6982,non-fungible-token,true,"));
        assert_eq!(
            lines.next(),
            Some("ZZZ,,,false,symbol lookup error: 404 Not Found: https://svc.invalid/symbols/ZZZ")
        );
        assert_eq!(lines.next(), None);
    }
}
