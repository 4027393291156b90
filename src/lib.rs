//! # vtk2ascii
//!
//! Convert binary legacy VTK (`.vtk`) datasets to their ASCII encoding.
//!
//! The VTK file format itself (parser, object model, writer) is handled
//! by the [`vtkio`] crate; this crate is the narrow orchestration on top
//! of it: read the complete dataset, re-encode it as ASCII, write it
//! back out. Scalars, vectors, tensors and generic field arrays pass
//! through untouched.
//!
//! ## Modules
//!
//! - [`convert`] - The conversion routine (read, re-encode, write)
//! - [`error`] - Error types
//! - [`resolve`] - Input/output path selection (argv or file dialogs)
//!
//! ## Example
//!
//! ```ignore
//! use std::path::Path;
//!
//! vtk2ascii::convert(Path::new("tube.vtk"), Path::new("tube_ascii.vtk"))?;
//! ```

pub mod convert;
pub mod error;
pub mod resolve;

// Re-export commonly used items
pub use convert::{convert, read_dataset, write_ascii};
pub use error::{Error, Result};
pub use resolve::{default_ascii_output, ArgvParser, InputResolver};

#[cfg(windows)]
pub use resolve::InteractivePicker;
