//! Tests for `PatternSet` membership and removal

#[cfg(test)]
mod tests {
    use dungeon_wfc::algorithm::bitset::PatternSet;

    // Verifies new PatternSet is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_set() {
        let set = PatternSet::new(10);
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());
    }

    // Tests a full set contains every id in range and nothing beyond
    // Verified by sizing the full set one bit short
    #[test]
    fn test_all_set() {
        let set = PatternSet::all(5);
        assert_eq!(set.count(), 5);
        assert!(set.contains(4));
        assert!(!set.contains(5));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    // Tests removal reports presence and clears only the requested id
    // Verified by always returning true from remove
    #[test]
    fn test_remove() {
        let mut set = PatternSet::all(4);
        assert!(set.remove(2));
        assert!(!set.remove(2));
        assert!(!set.remove(9));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    // Tests insertion ignores ids beyond the capacity
    // Verified by removing the range check in insert
    #[test]
    fn test_insert() {
        let mut set = PatternSet::new(3);
        set.insert(1);
        set.insert(7);
        assert!(set.contains(1));
        assert_eq!(set.count(), 1);
    }

    // Tests subset relation used to check monotone shrinking
    // Verified by comparing counts only
    #[test]
    fn test_subset() {
        let full = PatternSet::all(4);
        let mut partial = PatternSet::all(4);
        partial.remove(0);

        assert!(partial.is_subset(&full));
        assert!(!full.is_subset(&partial));

        let mut other = PatternSet::new(4);
        other.insert(0);
        assert!(!other.is_subset(&partial));
    }
}
