pub mod category;
pub mod check;
pub mod dispatch;
pub mod journey;
pub mod list;
pub mod popular;
pub mod priority;
pub mod schema;
pub mod search;
pub mod shared;
pub mod stats;
