// lingolens - Translation and OCR proxy for Google Cloud APIs

pub mod cli;
pub mod config;
pub mod error;
pub mod google;
pub mod metrics;
pub mod normalize;
pub mod server;
pub mod utils;
pub mod validation;
