// src/integrations/mod.rs
//
// External Integrations Module

pub mod translator;

pub use translator::client::HttpTranslationClient;
