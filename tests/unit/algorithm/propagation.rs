//! Tests for worklist propagation of pattern removals

#[cfg(test)]
mod tests {
    use dungeon_wfc::algorithm::heap::EntropyHeap;
    use dungeon_wfc::algorithm::propagation::{Propagation, Removal, propagate};
    use dungeon_wfc::algorithm::wave::Wave;
    use dungeon_wfc::analysis::model::Overlapping;
    use dungeon_wfc::analysis::patterns::{Extraction, PatternCatalog};
    use dungeon_wfc::analysis::rules::CompatibilityRule;
    use dungeon_wfc::io::ascii::parse_map;
    use dungeon_wfc::spatial::grid::{Position, Size, Topology};
    use dungeon_wfc::spatial::symmetry::Variant;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn alternating() -> (PatternCatalog, CompatibilityRule) {
        let source = parse_map("#.\n.#\n").expect("valid test map");
        let catalog = PatternCatalog::build(&source, 2, &Variant::ROTATIONS, Extraction::Sliding)
            .expect("catalog builds");
        let rule = CompatibilityRule::build(&catalog, &Overlapping).expect("rule builds");
        (catalog, rule)
    }

    fn remove(
        wave: &mut Wave,
        worklist: &mut Vec<Removal>,
        catalog: &PatternCatalog,
        position: Position,
        pattern: usize,
    ) {
        wave.remove_pattern(position, pattern, catalog.weight(pattern));
        worklist.push(Removal { position, pattern });
    }

    // Tests a removal forces the alternating pattern along a row
    // Verified by decrementing the enabler count of the wrong direction
    #[test]
    fn test_forces_alternation() {
        let (catalog, rule) = alternating();
        let mut wave = Wave::new(Topology::new(Size::new(3, 1), false), &catalog, &rule);
        let mut heap = EntropyHeap::new();
        let mut worklist = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        remove(&mut wave, &mut worklist, &catalog, Position::new(0, 0), 1);
        let outcome = propagate(&mut wave, &mut heap, &mut worklist, &catalog, &rule, &mut rng);

        assert_eq!(outcome, Propagation::Settled);
        assert!(worklist.is_empty());
        assert!(wave.is_possible(Position::new(0, 0), 0));
        assert!(!wave.is_possible(Position::new(1, 0), 0));
        assert!(wave.is_possible(Position::new(1, 0), 1));
        assert!(wave.is_possible(Position::new(2, 0), 0));
        assert!(!wave.is_possible(Position::new(2, 0), 1));
        assert_eq!(wave.check_weights(&catalog), None);
        assert_eq!(heap.len(), 2);
    }

    // Tests conflicting removals end in a contradiction
    // Verified by skipping the zero-weight check
    #[test]
    fn test_detects_contradiction() {
        let (catalog, rule) = alternating();
        let mut wave = Wave::new(Topology::new(Size::new(3, 1), false), &catalog, &rule);
        let mut heap = EntropyHeap::new();
        let mut worklist = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        remove(&mut wave, &mut worklist, &catalog, Position::new(0, 0), 1);
        remove(&mut wave, &mut worklist, &catalog, Position::new(2, 0), 0);
        let outcome = propagate(&mut wave, &mut heap, &mut worklist, &catalog, &rule, &mut rng);

        assert!(matches!(outcome, Propagation::Contradiction(_)));
    }

    // Tests periodic grids propagate across the wrapped edge
    // Verified by ignoring the periodic flag in neighbor
    #[test]
    fn test_propagates_across_wrap() {
        let (catalog, rule) = alternating();
        let mut wave = Wave::new(Topology::new(Size::new(4, 2), true), &catalog, &rule);
        let mut heap = EntropyHeap::new();
        let mut worklist = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);

        remove(&mut wave, &mut worklist, &catalog, Position::new(0, 0), 0);
        let outcome = propagate(&mut wave, &mut heap, &mut worklist, &catalog, &rule, &mut rng);

        assert_eq!(outcome, Propagation::Settled);
        assert!(!wave.is_possible(Position::new(3, 0), 1));
        assert!(!wave.is_possible(Position::new(2, 0), 0));
        assert!(!wave.is_possible(Position::new(0, 1), 1));
        assert_eq!(wave.check_weights(&catalog), None);
    }
}
