//! Binary-to-ASCII conversion of legacy VTK datasets.
//!
//! The format engineering lives in [`vtkio`]; this module is the narrow
//! read/re-encode/write orchestration on top of it. Datasets pass through
//! unmodified: the output differs from the input in byte-level encoding
//! only.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use vtkio::model::DataSet;
use vtkio::Vtk;

use crate::error::{Error, Result};

/// Read the complete dataset stored at `path`.
///
/// All attached data is loaded: scalars, vectors, tensors and generic
/// field arrays, for both points and cells. Files with an extension the
/// library does not dispatch on are retried as a legacy VTK stream, so
/// the content decides, not the file name.
///
/// Fails with a read-class error if the path is missing, unparseable, or
/// parses to a dataset with nothing in it.
pub fn read_dataset(path: &Path) -> Result<Vtk> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), "parsing dataset");

    let mut vtk = match Vtk::import(path) {
        Ok(vtk) => vtk,
        // Fall back to content-based parsing for unrecognized extensions.
        Err(vtkio::Error::UnknownFileExtension(_)) => {
            let file = File::open(path).map_err(|e| Error::read(path, e.into()))?;
            let mut vtk =
                Vtk::parse_legacy_be(BufReader::new(file)).map_err(|e| Error::read(path, e))?;
            vtk.file_path = Some(path.to_path_buf());
            vtk
        }
        Err(source) => return Err(Error::read(path, source)),
    };

    // The writer must see every array resident, including pieces the
    // parser left as file references.
    vtk.load_all_pieces()
        .map_err(|e| Error::read(path, vtkio::Error::Load(e)))?;

    if piece_count(&vtk.data) == 0 {
        return Err(Error::EmptyDataset(path.to_path_buf()));
    }

    tracing::debug!(
        kind = dataset_kind(&vtk.data),
        title = %vtk.title,
        pieces = piece_count(&vtk.data),
        "dataset loaded"
    );

    Ok(vtk)
}

/// Write `vtk` to `path` in the ASCII legacy encoding, consuming the
/// dataset.
///
/// Overwrites an existing file. A partially written file is possible on
/// failure and is left in place.
pub fn write_ascii(vtk: Vtk, path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "writing ASCII VTK");
    vtk.export_ascii(path).map_err(|e| Error::write(path, e))
}

/// Convert a binary legacy VTK file to its ASCII encoding.
///
/// Reads the complete dataset at `input`, then re-writes it unchanged to
/// `output` in the ASCII legacy encoding, overwriting any existing file.
/// Progress is reported on standard output.
///
/// # Example
/// ```ignore
/// use std::path::Path;
///
/// vtk2ascii::convert(Path::new("tube.vtk"), Path::new("tube_ascii.vtk"))?;
/// ```
pub fn convert(input: &Path, output: &Path) -> Result<()> {
    println!("Reading: {}", input.display());
    let vtk = read_dataset(input)?;

    println!("Writing ASCII VTK: {}", output.display());
    write_ascii(vtk, output)?;

    println!("Conversion finished successfully.");
    Ok(())
}

/// Number of top-level pieces in a dataset; standalone field datasets
/// count their arrays instead.
fn piece_count(data: &DataSet) -> usize {
    match data {
        DataSet::ImageData { pieces, .. } => pieces.len(),
        DataSet::StructuredGrid { pieces, .. } => pieces.len(),
        DataSet::RectilinearGrid { pieces, .. } => pieces.len(),
        DataSet::UnstructuredGrid { pieces, .. } => pieces.len(),
        DataSet::PolyData { pieces, .. } => pieces.len(),
        DataSet::Field { data_array, .. } => data_array.len(),
    }
}

/// Structure name of a dataset, for diagnostics.
fn dataset_kind(data: &DataSet) -> &'static str {
    match data {
        DataSet::ImageData { .. } => "ImageData",
        DataSet::StructuredGrid { .. } => "StructuredGrid",
        DataSet::RectilinearGrid { .. } => "RectilinearGrid",
        DataSet::UnstructuredGrid { .. } => "UnstructuredGrid",
        DataSet::PolyData { .. } => "PolyData",
        DataSet::Field { .. } => "Field",
    }
}
