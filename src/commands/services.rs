//! Services command implementation

use crate::app::UnchainedApp;
use crate::common::table::print_table;
use crate::error::Result;

const HEADER: [&str; 3] = ["Name", "Class", "Location"];

/// Run services command
pub fn run(app: &UnchainedApp) -> Result<()> {
    print_table(&HEADER, &rows(app));
    Ok(())
}

/// (name, class, module) rows, sorted by name and then (stably) by module
///
/// Services without class metadata show their string form and no module.
pub fn rows(app: &UnchainedApp) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = app
        .unchained
        .services
        .iter()
        .map(|(name, entry)| {
            vec![
                name.clone(),
                entry.class_label().to_string(),
                entry.module().to_string(),
            ]
        })
        .collect();
    rows.sort_by(|a, b| a[0].cmp(&b[0]));
    rows.sort_by(|a, b| a[2].cmp(&b[2]));
    rows
}
