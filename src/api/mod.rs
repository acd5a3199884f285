pub mod channels;
pub mod client;
pub mod error;
pub mod teams;
pub mod users;

pub use client::MattermostClient;
pub use error::{ApiError, ApiOperation, ResolveError};
