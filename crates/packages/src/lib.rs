//! `washboard-packages` — service package master-data models.

pub mod package;

pub use package::{Package, PackageDraft, ServiceUnit};
