pub mod builder;
pub mod draft;
pub mod errors;

pub use builder::{LiveSessionBuilder, SessionState};
pub use draft::Draft;
pub use errors::LiveSessionError;
