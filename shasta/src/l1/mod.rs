pub mod bindings;
pub mod config;
pub mod event_indexer;
pub mod execution_layer;
