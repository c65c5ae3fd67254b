pub mod charts;
pub mod error;
pub mod page;
