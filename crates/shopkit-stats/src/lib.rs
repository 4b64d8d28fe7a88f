//! Store stats route resolution and navigation model for shopkit.
//!
//! - `StatsRoute` - Validates `/store/stats/:type/:period/:segment` requests
//! - `StatsNavigation` - Tabs and site/store switcher for a stats report

mod error;
mod navigation;
mod params;
mod route;

pub use error::StatsError;
pub use navigation::*;
pub use params::*;
pub use route::*;
