mod handler;
mod query;
mod response;

pub use handler::*;
pub use query::*;
pub use response::*;
