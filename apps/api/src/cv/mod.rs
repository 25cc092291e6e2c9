// CV data: loading from the data store and flattening into LLM context.

pub mod context;
pub mod handlers;
pub mod store;
