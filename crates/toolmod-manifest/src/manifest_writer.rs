//! Manifest writer utilities for custom paths
//!
//! This module provides helper functions for writing/reading manifests
//! to/from custom paths, primarily used in testing scenarios and small
//! tools.
//!
//! For normal operations, use the `Manifest` methods in `manifest.rs`,
//! which validate and write atomically.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::manifest::{parse, recreate};

/// Write a manifest tracking `packages` to a custom path (primarily for testing)
pub fn write_to_path(packages: &[String], output_path: &Path) -> Result<()> {
    debug!("Writing manifest to custom path: {:?}", output_path);

    let mut rendered = Vec::new();
    recreate(&output_path.to_string_lossy(), &mut rendered, packages)?;
    fs::write(output_path, &rendered)?;

    info!("Manifest written successfully to: {:?}", output_path);
    info!("Total packages: {}", packages.len());

    Ok(())
}

/// Read the tracked packages from a manifest at a custom path (primarily for testing)
pub fn read_from_path(manifest_path: &Path) -> Result<Vec<String>> {
    debug!("Reading manifest from custom path: {:?}", manifest_path);

    let mut file = fs::File::open(manifest_path)?;
    let packages = parse(&manifest_path.to_string_lossy(), &mut file)?;

    info!("Manifest loaded successfully");
    info!("Total packages: {}", packages.len());

    Ok(packages)
}
