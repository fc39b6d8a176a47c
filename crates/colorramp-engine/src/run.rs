//! File-to-file conversion.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RunError;
use crate::transcode::transcode_bytes;

/// Appended to the base name to form the output file name.
pub const OUTPUT_SUFFIX: &str = "_qgis.xml";

/// Where and under which name [`run_with`] writes its output.
///
/// The default reproduces [`run`]: name taken from the input file, output in
/// the current working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Output directory. `None` writes into the current working directory.
    pub out_dir: Option<PathBuf>,
    /// Ramp name and output base name. `None` derives it from the input path.
    pub name: Option<String>,
}

/// The input file name without directories and without its extension.
///
/// `gradients/Sunset.xml` → `Sunset`. Only the last extension is removed.
pub fn base_name(input: &Path) -> Option<String> {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

/// Returns true when `name` can be used as an output base name: non-empty,
/// no path separators and not a `.`/`..` component.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// `{dir}/{name}_qgis.xml`
pub fn output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}{OUTPUT_SUFFIX}"))
}

/// Converts `input` and writes `{base name}_qgis.xml` into the current
/// working directory, replacing any existing file.
pub fn run(input: &Path) -> Result<PathBuf, RunError> {
    run_with(input, &RunOptions::default())
}

/// Like [`run`], with the output location and name taken from `options`.
///
/// The whole document is built in memory first; on any error nothing is
/// written. Returns the path of the written file.
pub fn run_with(input: &Path, options: &RunOptions) -> Result<PathBuf, RunError> {
    let name = match &options.name {
        Some(name) if is_valid_name(name) => name.clone(),
        Some(name) => return Err(RunError::InvalidPath { path: PathBuf::from(name) }),
        None => base_name(input).ok_or_else(|| RunError::InvalidPath { path: input.to_owned() })?,
    };

    let bytes = fs::read(input).map_err(|source| RunError::FileNotFound {
        path: input.to_owned(),
        source,
    })?;
    log::debug!("read {} ({} bytes)", input.display(), bytes.len());

    let style = transcode_bytes(&bytes, &name).map_err(|source| RunError::Transcode {
        path: input.to_owned(),
        source,
    })?;
    let xml = style.to_xml();

    let dir = options.out_dir.as_deref().unwrap_or_else(|| Path::new(""));
    let output = output_path(dir, &name);
    fs::write(&output, xml).map_err(|source| RunError::Write {
        path: output.clone(),
        source,
    })?;

    log::info!("wrote color ramp `{}` to {}", name, output.display());
    Ok(output)
}
