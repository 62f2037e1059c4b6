//! Output generation: interactive page, data export, static plots

pub mod export;
pub mod page;
pub mod visualization;
