pub mod client;

pub use client::HttpTranslationClient;
