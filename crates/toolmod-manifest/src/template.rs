//! The fixed manifest template.
//!
//! Everything `recreate` emits comes from this one literal, so determinism
//! is a property of the template rather than of call sites. Substitution
//! points are named; version placeholders are filled in before the import
//! block so package paths are never re-scanned for placeholders.

/// Format version recorded in every generated manifest. Tells future
/// toolmod releases how to parse the file.
pub const FILE_VERSION: &str = "v1.0.0";

/// Generator version recorded in every generated manifest. Injected at
/// build time through the `TOOLMOD_VERSION` environment variable; `"??"`
/// when unknown. Recorded for debugging only.
pub const GENERATOR_VERSION: &str = match option_env!("TOOLMOD_VERSION") {
    Some(version) => version,
    None => "??",
};

const MANIFEST_TEMPLATE: &str = r#"// Code generated by https://github.com/toolmod/toolmod . DO NOT EDIT.
// NOTE: You can actually edit this file just fine; just don't be surprised if
// toolmod rewrites it at some point.
//
// This file records the auxiliary tool packages a project depends on. Keeping
// them in a dedicated module separates development tooling from critical,
// production dependencies.
//
// Read more on https://github.com/toolmod/toolmod .

//toolmod:build tools
module tools

import (
{imports})

const (
	// file_version tells future toolmod releases how to parse this file.
	file_version = "{file_version}"
	// toolmod_version is the toolmod release that generated this file. Used for
	// debugging only.
	toolmod_version = "{generator_version}"
)
"#;

/// Render the manifest text for an already-sorted package list.
pub(crate) fn render(packages: &[String]) -> String {
    let mut imports = String::new();
    for path in packages {
        imports.push_str("\t_ \"");
        imports.push_str(path);
        imports.push_str("\"\n");
    }

    MANIFEST_TEMPLATE
        .replace("{file_version}", FILE_VERSION)
        .replace("{generator_version}", GENERATOR_VERSION)
        .replace("{imports}", &imports)
}
