//! Count rows and columns of a CSV file
//!
//! Plain files and ZIP containers (`.csv.zst`, `.csv.zip`) are accepted.
//!
//! Run with: cargo run --example count_file -- data.csv [--no-header]

use csvcount::{ColumnCount, RowCount};
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("Usage: count_file <path> [--no-header]");
        std::process::exit(2);
    };
    let include_header_row = !args.any(|arg| arg == "--no-header");

    let start = Instant::now();
    let rows = RowCount::new()
        .file_path(&path)
        .include_header_row(include_header_row)
        .execute()?;
    let columns = ColumnCount::new().file_path(&path).execute()?;

    println!("File:    {}", path);
    println!("Rows:    {}", rows);
    println!("Columns: {}", columns);
    println!("Elapsed: {:?}", start.elapsed());

    Ok(())
}
