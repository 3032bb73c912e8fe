pub mod list;
pub mod read;
pub mod schema;
