mod error;
mod payload;
mod query;
mod types;
