// Google Cloud Translation / Vision API client module

mod client;
pub mod models;

pub use client::GoogleClient;
