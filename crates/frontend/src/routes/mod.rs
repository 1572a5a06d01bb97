pub mod config;
pub mod dom;
pub mod host;
#[cfg(test)]
pub mod memory;
pub mod router;
pub mod table;

pub use config::RouterConfig;
pub use router::{Dispatch, Router};
pub use table::{Resolution, RouteMatch, RouteTable, RouteTableError, ViewProducer};
