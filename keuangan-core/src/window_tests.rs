//! Property-style tests for the page window calculator
//!
//! These sweep small page counts exhaustively instead of sampling, so every
//! edge/centre branch is hit for each window size.

#[cfg(test)]
mod window_property_tests {
    use crate::pagination::{DEFAULT_MAX_WINDOW, compute_window, control_state};

    fn assert_contiguous(window: &[usize]) {
        for pair in window.windows(2) {
            assert_eq!(pair[1], pair[0] + 1, "window not contiguous: {:?}", window);
        }
    }

    #[test]
    fn test_small_totals_show_every_page() {
        for total in 0..=3 {
            let expected: Vec<usize> = (1..=total).collect();
            for current in 0..=5 {
                assert_eq!(
                    compute_window(current, total, DEFAULT_MAX_WINDOW),
                    expected,
                    "total={} current={}",
                    total,
                    current
                );
            }
        }
    }

    #[test]
    fn test_leading_pages_pin_to_start() {
        for total in 4..=30 {
            for current in [1, 2] {
                assert_eq!(compute_window(current, total, 3), vec![1, 2, 3]);
            }
        }
    }

    #[test]
    fn test_trailing_pages_pin_to_end() {
        for total in 4..=30 {
            for current in [total - 1, total] {
                assert_eq!(
                    compute_window(current, total, 3),
                    vec![total - 2, total - 1, total]
                );
            }
        }
    }

    #[test]
    fn test_centered_window() {
        assert_eq!(compute_window(5, 10, 3), vec![4, 5, 6]);
        assert_eq!(compute_window(3, 10, 3), vec![2, 3, 4]);
        assert_eq!(compute_window(8, 10, 3), vec![7, 8, 9]);
        assert_eq!(compute_window(6, 20, 5), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_length_and_bounds_invariant() {
        for max_window in 1..=7 {
            for total in 1..=25 {
                for current in 1..=total {
                    let window = compute_window(current, total, max_window);
                    assert_eq!(window.len(), total.min(max_window));
                    assert_contiguous(&window);
                    assert!(window.first().copied().unwrap_or(1) >= 1);
                    assert!(window.last().copied().unwrap_or(total) <= total);
                    assert!(
                        window.contains(&current),
                        "current {} missing from {:?} (total={}, max={})",
                        current,
                        window,
                        total,
                        max_window
                    );
                }
            }
        }
    }

    #[test]
    fn test_even_window_extends_after_current() {
        assert_eq!(compute_window(5, 10, 4), vec![3, 4, 5, 6]);
        assert_eq!(compute_window(1, 10, 4), vec![1, 2, 3, 4]);
        assert_eq!(compute_window(3, 10, 4), vec![1, 2, 3, 4]);
        assert_eq!(compute_window(9, 10, 4), vec![7, 8, 9, 10]);
        assert_eq!(compute_window(10, 10, 2), vec![9, 10]);
        assert_eq!(compute_window(4, 10, 2), vec![3, 4]);
    }

    #[test]
    fn test_out_of_range_current_does_not_panic() {
        assert_eq!(compute_window(0, 10, 3), vec![1, 2, 3]);
        assert_eq!(compute_window(50, 10, 3), vec![8, 9, 10]);
        assert!(compute_window(1, 10, 0).is_empty());
        assert!(compute_window(1, 0, 3).is_empty());
    }

    #[test]
    fn test_window_is_idempotent() {
        for total in 0..=12 {
            for current in 0..=13 {
                assert_eq!(
                    compute_window(current, total, 3),
                    compute_window(current, total, 3)
                );
            }
        }
    }

    #[test]
    fn test_empty_list_disables_everything() {
        let controls = control_state(1, 0, 0);
        assert!(controls.first_disabled);
        assert!(controls.prev_disabled);
        assert!(controls.next_disabled);
        assert!(controls.last_disabled);
        assert!(compute_window(1, 0, DEFAULT_MAX_WINDOW).is_empty());
    }
}
