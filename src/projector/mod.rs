//! Views derived from parsed feeds: resources and prompt text.

pub mod prompts;
pub mod resources;
mod taxonomy;

pub use prompts::{construct_search_query, summarize_paper, PromptMessage};
pub use resources::{ResourceBody, ResourceContents, ResourceProjector, ResourceUri};
pub use taxonomy::TAXONOMY_MARKDOWN;
