// src/main.rs

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    fpl_tally::cli::run()
}
