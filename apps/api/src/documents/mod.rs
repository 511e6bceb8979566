// Vehicle-transfer documents: request extraction, templates, wording and
// composition into layout blocks. Nothing here touches the PDF format.

pub mod clauses;
pub mod composer;
pub mod handlers;
pub mod models;
pub mod spec;
pub mod text;
