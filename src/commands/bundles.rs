//! Bundles command implementation

use crate::app::UnchainedApp;
use crate::common::table::print_table;
use crate::error::Result;

const HEADER: [&str; 2] = ["Name", "Location"];

/// Run bundles command
pub fn run(app: &UnchainedApp) -> Result<()> {
    print_table(&HEADER, &rows(app));
    Ok(())
}

/// One (name, location) row per loaded bundle, in load order
pub fn rows(app: &UnchainedApp) -> Vec<Vec<String>> {
    app.unchained
        .bundles
        .iter()
        .map(|bundle| vec![bundle.name.clone(), bundle.location.clone()])
        .collect()
}
