//! Manifest codec operations - regeneration, parsing, and list mutation
//!
//! The two core operations are [`recreate`] (package list in, canonical
//! manifest text out) and [`parse`] (manifest text in, package list out).
//! Both are stateless single-pass transformations; [`Manifest`] layers the
//! surrounding conveniences on top: default location, load/save with an
//! atomic write, and list mutation between a parse and a recreate.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::ManifestError;
use crate::template;
use toolmod_syntax::parse_source;

/// Regenerate the manifest text for `packages` into `output`.
///
/// `location` is used for moddir validation and error text only; the caller
/// supplies the sink and owns write ordering/atomicity. Output is a pure
/// function of the package list: entries are sorted lexicographically
/// ascending before rendering (duplicates kept adjacent), so any ordering of
/// the same list produces byte-identical text. Nothing is written when
/// validation fails.
pub fn recreate<W: Write>(
    location: &str,
    output: &mut W,
    packages: &[String],
) -> Result<(), ManifestError> {
    if moddir(location).is_none() {
        return Err(ManifestError::InvalidLocation(location.to_string()));
    }

    let mut sorted = packages.to_vec();
    sorted.sort();

    debug!("recreating {} with {} packages", location, sorted.len());
    output.write_all(template::render(&sorted).as_bytes())?;
    Ok(())
}

/// Read a manifest back into its package paths, in declaration order.
///
/// For manifests written by [`recreate`] the declaration order is already
/// lexicographic, so callers can rely on file order. A syntactically valid
/// manifest with no import block yields an empty list; malformed or empty
/// input fails with a `read <location>: <position>` diagnostic from the
/// syntax layer.
pub fn parse<R: Read>(location: &str, input: &mut R) -> Result<Vec<String>, ManifestError> {
    let mut src = String::new();
    input.read_to_string(&mut src)?;

    let parsed =
        parse_source(diagnostic_name(location), &src).map_err(|source| ManifestError::Parse {
            location: location.to_string(),
            source,
        })?;

    debug!("parsed {}: {} packages", location, parsed.imports.len());
    Ok(parsed.import_paths())
}

/// Directory component of a manifest location, or `None` when it is missing
/// or the current-directory sentinel.
fn moddir(location: &str) -> Option<&Path> {
    let parent = Path::new(location).parent()?;
    if parent.as_os_str().is_empty() || parent == Path::new(".") {
        return None;
    }
    Some(parent)
}

/// File name used in syntax diagnostics, e.g. `tools.mod`.
fn diagnostic_name(location: &str) -> &str {
    Path::new(location)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(location)
}

/// In-memory view of a tool manifest: the ordered list of tracked packages.
///
/// Mutation happens here, between a [`parse`] and a [`recreate`]; the codec
/// itself never deduplicates, so `add` is the layer that refuses an
/// already-tracked path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub packages: Vec<String>,
}

impl Manifest {
    /// Conventional manifest file name.
    pub const FILE_NAME: &'static str = "tools.mod";
    /// Conventional directory holding the manifest, relative to a project root.
    pub const DIR_NAME: &'static str = ".toolmod";

    /// Default manifest location for a project root.
    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(Self::DIR_NAME).join(Self::FILE_NAME)
    }

    /// Load a manifest, returning an empty one if the file doesn't exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Ok(Manifest::default());
        }

        let location = path.to_string_lossy();
        let mut file = fs::File::open(path)?;
        let packages = parse(location.as_ref(), &mut file)?;
        Ok(Manifest { packages })
    }

    /// Save the manifest with an atomic write (temp file + rename).
    pub fn save_to_path(&self, path: &Path) -> Result<(), ManifestError> {
        let location = path.to_string_lossy();

        // Validate and render before touching the filesystem.
        let mut rendered = Vec::new();
        recreate(location.as_ref(), &mut rendered, &self.packages)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("mod.tmp");
        {
            let file = fs::File::create(&temp_path)?;
            let mut writer = io::BufWriter::new(file);
            writer.write_all(&rendered)?;
            writer.flush()?;
        }
        fs::rename(&temp_path, path)?;

        info!(
            "manifest written to {:?} ({} packages)",
            path,
            self.packages.len()
        );
        Ok(())
    }

    /// Track a package; returns false if it is already tracked.
    pub fn add(&mut self, package: &str) -> bool {
        if self.contains(package) {
            return false;
        }
        self.packages.push(package.to_string());
        true
    }

    /// Stop tracking a package; returns false if it wasn't tracked.
    pub fn remove(&mut self, package: &str) -> bool {
        let before = self.packages.len();
        self.packages.retain(|tracked| tracked != package);
        before != self.packages.len()
    }

    /// Check whether a package is tracked.
    pub fn contains(&self, package: &str) -> bool {
        self.packages.iter().any(|tracked| tracked == package)
    }

    /// Check whether the manifest tracks no packages.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Number of tracked packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }
}
