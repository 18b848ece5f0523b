//! # Storedesk CLI Entry Point
//!
//! Loads one list view from the mock provider, applies filter arguments and
//! prints the resulting view as JSON.
//!
//! ## Usage
//! ```bash
//! # First page of the order list
//! cargo run -p storedesk
//!
//! # Unpaid orders mentioning "visa", page 2
//! cargo run -p storedesk -- orders --tab unpaid --search visa --page 2
//!
//! # Export the filtered product list with escaped quotes
//! cargo run -p storedesk -- products --search tea --export filtered --dialect rfc4180
//! ```
//!
//! The actual work lives in `storedesk_lib::run` so it can be tested.

use storedesk_lib::cli::USAGE;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = storedesk_lib::parse_args(std::env::args());
    if args.help {
        println!("Storedesk list viewer");
        println!();
        println!("{}", USAGE);
        return Ok(());
    }

    storedesk_lib::init_tracing();
    storedesk_lib::run(args).await
}
