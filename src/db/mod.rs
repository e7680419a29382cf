pub mod reviews;
pub mod sqlite;

pub use sqlite::create_pool;
pub use sqlite::init_schema;
