//! Input/output path selection.
//!
//! The converter itself is platform-agnostic; the only platform branching
//! in the program is how the two paths are chosen. That choice lives
//! behind [`InputResolver`], with the positional-argument implementation
//! available everywhere and the file-dialog implementation compiled for
//! Windows only.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves the input and output paths for one conversion run.
pub trait InputResolver {
    /// Returns `(input, output)` or an argument-class error.
    fn resolve(&self) -> Result<(PathBuf, PathBuf)>;
}

/// Positional command-line arguments.
///
/// The first two positionals are taken verbatim as input and output;
/// extras are ignored. Fewer than two is an error.
pub struct ArgvParser {
    args: Vec<String>,
}

impl ArgvParser {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl InputResolver for ArgvParser {
    fn resolve(&self) -> Result<(PathBuf, PathBuf)> {
        if self.args.len() < 2 {
            return Err(Error::MissingArguments);
        }
        Ok((PathBuf::from(&self.args[0]), PathBuf::from(&self.args[1])))
    }
}

/// Default output path for `input`: `<stem>_ascii.vtk` in the same
/// directory.
pub fn default_ascii_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_ascii.vtk", stem))
}

/// Native file dialogs: an open dialog filtered to `*.vtk` for the
/// input, then a save dialog pre-filled with the default output name.
///
/// A dismissed dialog aborts the run with an argument-class error.
#[cfg(windows)]
pub struct InteractivePicker;

#[cfg(windows)]
impl InputResolver for InteractivePicker {
    fn resolve(&self) -> Result<(PathBuf, PathBuf)> {
        let input = rfd::FileDialog::new()
            .add_filter("VTK Files", &["vtk"])
            .pick_file()
            .ok_or(Error::Cancelled("Input file"))?;

        let default_name = default_ascii_output(&input)
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output_ascii.vtk".to_string());

        let output = rfd::FileDialog::new()
            .add_filter("VTK Files", &["vtk"])
            .set_file_name(default_name)
            .save_file()
            .ok_or(Error::Cancelled("Output file"))?;

        Ok((input, output))
    }
}
