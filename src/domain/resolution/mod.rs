// src/domain/resolution/mod.rs
//
// Resolution Domain
//
// Value objects representing the outcome of rendering a term in a requested
// display language.
//
// CRITICAL RULES:
// - All types are pure value objects (immutable)
// - No side effects
// - No persistence
// - No event emission (that's the service's job)
// - Deterministic: same input -> same output

pub mod value_objects;

pub use value_objects::{ResolutionPath, ResolutionRequest, ResolutionResult};
