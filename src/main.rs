use std::error::Error;

use fuzzyset::{states_demo, VERSION};

fn main() -> Result<(), Box<dyn Error>> {
    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mischigen".to_string());

    let matches = states_demo(&query)?;

    println!("fuzzyset {VERSION}");
    if matches.is_empty() {
        println!("no matches for {query:?}");
    } else {
        println!("matches for {query:?}:");
        for text in matches {
            println!("  {text}");
        }
    }

    Ok(())
}
