//! Staged loading pipeline for map data.
//!
//! Descriptors load first, then the asset catalog is resolved into
//! glTF template handles, then the scene builder takes over.

/// Descriptor fetches for the selected map and their load tracking.
pub mod descriptor_loader;

/// Loading stage flags for the pipeline systems.
pub mod progress;

/// Catalog resolution into glTF scene handles and template tracking.
pub mod template_loader;
