//! Contactbook demo - walks a directory through add, update, delete and print.
//!
//! Usage: `contactbook-demo [path/to/contactbook.toml]`
//!
//! Directory events go to stderr under the `contactbook::directory` target.

use std::io::{self, Write};
use std::path::Path;
use std::process;

use contactbook::{ContactDirectory, ContactUpdate, DirectoryConfig, Result};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => DirectoryConfig::from_file(Path::new(&path))?,
        None => DirectoryConfig::default(),
    };
    let directory = ContactDirectory::with_config(config)?;

    directory.add("John", "Doe", "1234567890", "123 Main St")?;
    directory.add_with_id("99", "Lennry", "Balthazor", "4325559275", "333 Happy Place")?;

    // Rejected operations are logged by the directory and are not fatal
    let _ = directory.add_with_id("99", "Bob", "Nobody", "1", "Happy");
    let _ = directory.add("Bartholomew", "Smith", "1", "Somewhere");

    directory.update("99", ContactUpdate::new().address("UPDATED"))?;
    let _ = directory.delete("3");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    directory.print_all_contacts(&mut out)?;
    out.flush()?;
    Ok(())
}
