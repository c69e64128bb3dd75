//! Data model for wiki documents and list queries

mod query;
mod wiki_doc;

pub use query::{ListParams, ListParamsUpdate, SortDirection, SortField, DEFAULT_PER_PAGE};
pub use wiki_doc::{PageResult, WikiDoc, WikiDocPatch, WikiDocStatus};
