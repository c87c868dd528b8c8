// Property-based tests for the scanner.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use csvcount::csv::{CsvEncoder, CsvScanner};
use csvcount::{column_count, row_count, ScanOptions};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Text without quote characters or carriage returns.
fn arb_unquoted_text() -> impl Strategy<Value = String> {
    "[a-z0-9 ,\\n]{0,64}"
}

/// Non-empty field content, sometimes needing quotes when encoded.
fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9.]{1,8}",
        1 => "[a-z ,\"\\n\\r]{1,8}",
    ]
}

/// N records of fixed width W.
fn arb_table() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..6).prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec(arb_field(), width), 1..20)
    })
}

fn csv_crate_counts(data: &str) -> (usize, usize) {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data.as_bytes());
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    let columns = records.first().map(|r| r.len()).unwrap_or(0);
    (records.len(), columns)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn unquoted_rows_follow_line_breaks(text in arb_unquoted_text()) {
        let breaks = text.matches('\n').count();
        let trailing = usize::from(!text.is_empty() && !text.ends_with('\n'));
        prop_assert_eq!(row_count(&ScanOptions::new(text.as_str())), breaks + trailing);
    }

    #[test]
    fn excluding_header_subtracts_one(text in any::<String>()) {
        let with = row_count(&ScanOptions::new(text.as_str()).include_header_row(true));
        let without = row_count(&ScanOptions::new(text.as_str()).include_header_row(false));
        prop_assert_eq!(without, with.saturating_sub(1));
    }

    #[test]
    fn columns_ignore_later_records(
        header in prop::collection::vec(arb_field(), 1..6),
        tail in any::<String>(),
    ) {
        let mut buffer = Vec::new();
        CsvEncoder::default().encode_record(&header, &mut buffer);
        let first = String::from_utf8(buffer).unwrap();
        let appended = format!("{}\n{}", first, tail);

        prop_assert_eq!(column_count(&ScanOptions::new(first.as_str())), header.len());
        prop_assert_eq!(column_count(&ScanOptions::new(appended.as_str())), header.len());
    }

    #[test]
    fn fixed_width_table_counts(table in arb_table()) {
        let data = String::from_utf8(CsvEncoder::default().encode_records(&table)).unwrap();
        let options = ScanOptions::new(data.as_str());

        prop_assert_eq!(row_count(&options), table.len());
        prop_assert_eq!(column_count(&options), table[0].len());
        prop_assert_eq!(csv_crate_counts(&data), (table.len(), table[0].len()));
    }

    #[test]
    fn records_recover_encoded_fields(table in arb_table()) {
        let data = CsvEncoder::default().encode_records(&table);
        let records: Vec<Vec<String>> = CsvScanner::default().records(&data).collect();
        prop_assert_eq!(records, table);
    }

    #[test]
    fn arbitrary_input_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let scanner = CsvScanner::default();
        let result = scanner.scan(&bytes);
        prop_assert_eq!(scanner.records(&bytes).count(), result.rows);
        prop_assert_eq!(scanner.first_record_width(&bytes), result.columns);
    }
}
