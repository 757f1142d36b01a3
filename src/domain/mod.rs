pub mod collection;
pub mod models;

pub use collection::LiveEventCollection;
pub use models::*;
