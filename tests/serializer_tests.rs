use std::fs;

use fraktal::error::FraktalError;
use fraktal::grid::PixelGrid;
use fraktal::renderer::render;
use fraktal::serializer::save_to_file;
use fraktal::types::{Pixel, PlaneWindow};

#[cfg(test)]
mod serializer_tests {
    use super::*;

    #[test]
    fn test_round_trip_matches_row_major_order() {
        let mut grid = PixelGrid::new(2, 3);
        let mut value = 0u8;
        for row in 0..3 {
            for col in 0..2 {
                grid.set(row, col, Pixel::new(value, value + 1, value + 2));
                value += 3;
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.bin");
        save_to_file(&grid, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 2 * 3 * 3, "exactly width * height * 3 bytes");
        assert_eq!(
            bytes,
            (0u8..18).collect::<Vec<_>>(),
            "bytes on disk must follow in-memory row-major pixel order"
        );
    }

    #[test]
    fn test_single_pixel_file_is_three_bytes() {
        let mut grid = PixelGrid::new(1, 1);
        grid.set(0, 0, Pixel::new(7, 8, 9));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.bin");
        save_to_file(&grid, &path).unwrap();

        assert_eq!(fs::read(&path).unwrap(), vec![7, 8, 9]);
    }

    #[test]
    fn test_reference_render_is_30000_bytes() {
        let window = PlaneWindow::new(-2.0, 1.0, -1.5, 1.5);
        let mut grid = PixelGrid::new(100, 100);
        render(&mut grid, &window, 1000);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fraktal.bin");
        save_to_file(&grid, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 30_000);
        assert_eq!(&bytes[0..3], &[0, 0, 0], "far corner escapes immediately");

        let center = (50 * 100 + 50) * 3;
        assert_eq!(
            &bytes[center..center + 3],
            &[255, 255, 255],
            "cardioid interior never escapes"
        );
    }

    #[test]
    fn test_open_failure_creates_nothing() {
        let grid = PixelGrid::new(2, 2);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.bin");

        let err = save_to_file(&grid, &path).unwrap_err();
        assert!(matches!(err, FraktalError::FileOpen { .. }));
        assert!(!path.exists(), "no file may appear after an open failure");
    }

    #[test]
    fn test_existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        fs::write(&path, vec![0xAB; 64]).unwrap();

        let grid = PixelGrid::new(1, 1);
        save_to_file(&grid, &path).unwrap();

        assert_eq!(fs::read(&path).unwrap().len(), 3);
    }
}
