//! Client-Side Navigation Router Library

pub mod config;
pub mod history;
pub mod routing;

pub use config::RoutesConfig;
pub use history::{History, Location, MemoryHistory};
pub use routing::{Dispatch, RouteChange, RouteContext, Router, RouterError};
