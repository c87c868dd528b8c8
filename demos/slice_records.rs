//! Extract a range of records
//!
//! Run with: cargo run --example slice_records

use csvcount::Slice;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data = "\
name,note
ann,\"first line
second line\"
bob,plain
cat,\"says \"\"hi\"\"\"
";

    println!("=== Records 0..2 (header excluded) ===");
    let output = Slice::new()
        .file_data(data)
        .start(0)
        .end(2)
        .include_header_row(false)
        .execute()?;
    println!("{}", output);

    println!("\n=== Last record ===");
    let output = Slice::new().file_data(data).index(-1).execute()?;
    println!("{}", output);

    Ok(())
}
