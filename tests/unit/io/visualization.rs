//! Tests for placement capture and GIF export

#[cfg(test)]
mod tests {
    use beltgrid::algorithm::placement::PlacementOrchestrator;
    use beltgrid::io::error::GridError;
    use beltgrid::io::visualization::VisualizationCapture;
    use beltgrid::spatial::grid::{GridConfig, GridCoord};
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;
    use std::fs::File;
    use std::io::BufReader;
    use tempfile::TempDir;

    fn captured_line(length: i32) -> VisualizationCapture {
        let mut orchestrator =
            PlacementOrchestrator::from_config(GridConfig::new(4, 4, 1.0)).unwrap();
        let mut capture = VisualizationCapture::new(4, 4);
        for x in 0..length {
            let report = orchestrator.place(GridCoord::new(x, 1)).unwrap();
            capture.record(&report);
        }
        capture
    }

    // Tests each recorded placement keeps its neighbor updates
    // Verified by recording only the placed cell
    #[test]
    fn test_record_keeps_updates() {
        let capture = captured_line(3);

        assert_eq!(capture.placement_count(), 3);
        let last = capture.reports().last().unwrap();
        assert_eq!(last.position, GridCoord::new(2, 1));
        assert_eq!(last.neighbor_updates().len(), 1);
    }

    // Tests exporting with nothing captured is an error
    // Verified by writing an empty GIF
    #[test]
    fn test_export_empty_fails() {
        let temp_dir = TempDir::new().unwrap();
        let capture = VisualizationCapture::new(4, 4);

        let result = capture.export_gif(&temp_dir.path().join("empty.gif"), 50, 4);
        assert!(matches!(result, Err(GridError::InvalidParameter { .. })));
    }

    // Tests the GIF holds one frame per placement plus the final hold frame
    // Verified by omitting the final hold frame
    #[test]
    fn test_export_gif_frames() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("anim/replay.gif");
        let capture = captured_line(3);

        capture.export_gif(&path, 50, 4).unwrap();

        let decoder = GifDecoder::new(BufReader::new(File::open(&path).unwrap())).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].buffer().dimensions(), (16, 16));
    }
}
