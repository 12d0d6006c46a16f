//! Tests for the symmetric compatibility cache

#[cfg(test)]
mod tests {
    use dungeon_wfc::GenerationError;
    use dungeon_wfc::analysis::model::{Chunked, Model, Overlapping};
    use dungeon_wfc::analysis::patterns::{Extraction, PatternCatalog};
    use dungeon_wfc::analysis::rules::CompatibilityRule;
    use dungeon_wfc::io::ascii::parse_map;
    use dungeon_wfc::spatial::direction::Direction;
    use dungeon_wfc::spatial::symmetry::Variant;

    const ROOMS: &str = "\
########
#..#...#
#..#.>.#
#......#
##.#####
#......#
#.<....#
########
";

    fn catalog(text: &str, variants: &[Variant], extraction: Extraction) -> PatternCatalog {
        let source = parse_map(text).expect("valid test map");
        PatternCatalog::build(&source, 2, variants, extraction).expect("catalog builds")
    }

    // Tests every cached answer agrees with the model in both orders
    // Verified by not inverting the direction when swapping pair order
    #[test]
    fn test_rule_matches_model_in_both_orders() {
        let catalog = catalog(ROOMS, &Variant::ALL, Extraction::Sliding);
        let rule = CompatibilityRule::build(&catalog, &Overlapping).expect("rule builds");

        assert_eq!(rule.pattern_count(), catalog.len());
        for a in 0..catalog.len() {
            for b in 0..catalog.len() {
                for direction in Direction::ALL {
                    let expected = Overlapping.is_compatible(&catalog, a, direction, b);
                    assert_eq!(rule.is_legal(a, direction, b), expected);
                    assert_eq!(rule.is_legal(b, direction.opposite(), a), expected);
                }
            }
        }
    }

    // Tests the hand-computable checkerboard case
    // Verified by initialising the cache with ones
    #[test]
    fn test_checkerboard_rule() {
        let catalog = catalog("#.\n.#\n", &[Variant::Identity], Extraction::Sliding);
        let rule = CompatibilityRule::build(&catalog, &Overlapping).expect("rule builds");

        for direction in Direction::ALL {
            assert!(!rule.is_legal(0, direction, 0));
            assert_eq!(rule.compatible_count(0, direction), 0);
        }
    }

    // Tests a uniform source is compatible with itself everywhere
    // Verified by skipping the diagonal when filling the cache
    #[test]
    fn test_uniform_rule() {
        let catalog = catalog("...\n...\n...\n", &Variant::ALL, Extraction::Sliding);
        let rule = CompatibilityRule::build(&catalog, &Overlapping).expect("rule builds");

        for direction in Direction::ALL {
            assert!(rule.is_legal(0, direction, 0));
            assert_eq!(rule.compatible(0, direction).collect::<Vec<_>>(), vec![0]);
        }
    }

    // Tests ids beyond the catalog are never legal
    // Verified by clamping ids instead of rejecting them
    #[test]
    fn test_out_of_range_ids() {
        let catalog = catalog("...\n...\n...\n", &Variant::ALL, Extraction::Sliding);
        let rule = CompatibilityRule::build(&catalog, &Overlapping).expect("rule builds");

        assert!(!rule.is_legal(0, Direction::East, 1));
        assert!(!rule.is_legal(5, Direction::East, 0));
    }

    // Tests the rule refuses a model expecting a different extraction
    // Verified by removing the extraction comparison
    #[test]
    fn test_rejects_mismatched_model() {
        let catalog = catalog("....\n....\n", &Variant::ALL, Extraction::Sliding);
        let result = CompatibilityRule::build(&catalog, &Chunked);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter {
                parameter: "model",
                ..
            })
        ));
        assert_eq!(Chunked.extraction(), Extraction::Chunks);
    }

    // Tests the chunked rule is symmetric too
    // Verified by comparing the far border at row 0
    #[test]
    fn test_chunked_rule_symmetry() {
        let catalog = catalog(ROOMS, &Variant::ALL, Extraction::Chunks);
        let rule = CompatibilityRule::build(&catalog, &Chunked).expect("rule builds");

        for a in 0..catalog.len() {
            for b in 0..catalog.len() {
                for direction in Direction::ALL {
                    assert_eq!(
                        rule.is_legal(a, direction, b),
                        Chunked.is_compatible(&catalog, b, direction.opposite(), a)
                    );
                }
            }
        }
    }
}
