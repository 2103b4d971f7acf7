//! Extensions command implementation

use crate::app::UnchainedApp;
use crate::common::table::print_table;
use crate::error::Result;

const HEADER: [&str; 3] = ["Name", "Class", "Location"];

/// Run extensions command
pub fn run(app: &UnchainedApp) -> Result<()> {
    print_table(&HEADER, &rows(app));
    Ok(())
}

/// (name, class, module) rows sorted by name; pending entries are unwrapped
pub fn rows(app: &UnchainedApp) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = app
        .unchained
        .extensions
        .iter()
        .map(|(name, entry)| {
            let ext = entry.extension();
            vec![name.clone(), ext.class_name.clone(), ext.module.clone()]
        })
        .collect();
    rows.sort_by(|a, b| a[0].cmp(&b[0]));
    rows
}
