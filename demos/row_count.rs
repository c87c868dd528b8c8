//! Row and column counts for in-memory CSV
//!
//! Run with: cargo run --example row_count

use csvcount::{column_count, row_count, RowCount, ScanOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data = "\
fruit,price
apple,2.50
\"banana, ripe\",3.00
strawberry,1.50
";

    let options = ScanOptions::new(data);
    println!("Rows (with header):    {}", row_count(&options));
    println!("Columns:               {}", column_count(&options));

    let options = options.include_header_row(false);
    println!("Rows (without header): {}", row_count(&options));

    // Builder form, same result
    let rows = RowCount::new()
        .file_data(data)
        .include_header_row(false)
        .execute()?;
    println!("Builder rows:          {}", rows);

    Ok(())
}
