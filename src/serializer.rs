use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::error::FraktalError;
use crate::grid::PixelGrid;

/// Writes the grid to `path` as raw row-major RGB bytes: 3 bytes per pixel,
/// no header, no padding, width * height * 3 bytes total. An existing file
/// is truncated. If the path cannot be opened, nothing is written and the
/// error carries the path and the underlying I/O cause.
pub fn save_to_file(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<(), FraktalError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|source| FraktalError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytemuck::cast_slice(grid.pixels()))
        .and_then(|()| writer.flush())
        .map_err(|source| FraktalError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("wrote {} bytes to {:?}", grid.len() * 3, path);
    Ok(())
}
