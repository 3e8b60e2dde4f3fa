mod query;
mod review;
mod seed;

pub use query::*;
pub use review::*;
pub use seed::*;
