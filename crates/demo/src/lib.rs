//! Sample data and a scripted walkthrough for the stockroom catalog.

pub mod seed;
pub mod timing;
pub mod walkthrough;
