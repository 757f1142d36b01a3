pub mod files;
pub mod loader;
pub mod mock;
pub mod source;

pub use files::FileSource;
pub use loader::{load_or_default, DataSource};
pub use mock::MockSource;
pub use source::RecordSource;
