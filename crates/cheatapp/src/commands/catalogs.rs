use crate::commands::{CatalogSummary, CmdMessage, CmdResult};
use crate::library::Library;

pub fn run(library: &Library) -> CmdResult {
    let summaries: Vec<CatalogSummary> = library
        .iter()
        .map(|(id, c)| CatalogSummary::new(id, c))
        .collect();

    let mut result = CmdResult::default().with_catalogs(summaries);
    if library.is_empty() {
        result.add_message(CmdMessage::info("No catalogs loaded."));
    }
    result
}
