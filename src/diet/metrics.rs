use serde::Serialize;

/// Aggregate counters over a user's diet entries.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietMetrics {
    pub max_sequence: u64,
    pub sum_total_register_diet: u64,
    pub sum_total_is_diet: u64,
    pub sum_total_not_diet: u64,
}

/// Single left-to-right pass over the compliance flags in creation order.
/// The current run resets on any non-compliant entry; the maximum run seen
/// so far is carried alongside.
pub fn compute(flags: &[bool]) -> DietMetrics {
    let mut current = 0u64;
    let mut max = 0u64;
    let mut is_diet = 0u64;

    for &flag in flags {
        if flag {
            is_diet += 1;
            current += 1;
            max = max.max(current);
        } else {
            current = 0;
        }
    }

    let total = flags.len() as u64;
    DietMetrics {
        max_sequence: max,
        sum_total_register_diet: total,
        sum_total_is_diet: is_diet,
        sum_total_not_diet: total - is_diet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entries_are_all_zero() {
        let m = compute(&[]);
        assert_eq!(
            m,
            DietMetrics {
                max_sequence: 0,
                sum_total_register_diet: 0,
                sum_total_is_diet: 0,
                sum_total_not_diet: 0,
            }
        );
    }

    #[test]
    fn streak_resets_on_non_compliant_entry() {
        let m = compute(&[true, true, false, true, true, true]);
        assert_eq!(m.max_sequence, 3);
        assert_eq!(m.sum_total_register_diet, 6);
        assert_eq!(m.sum_total_is_diet, 4);
        assert_eq!(m.sum_total_not_diet, 2);
    }

    #[test]
    fn all_non_compliant_has_no_streak() {
        let m = compute(&[false, false, false]);
        assert_eq!(m.max_sequence, 0);
        assert_eq!(m.sum_total_not_diet, 3);
    }

    #[test]
    fn all_compliant_streak_spans_everything() {
        let m = compute(&[true; 5]);
        assert_eq!(m.max_sequence, 5);
        assert_eq!(m.sum_total_is_diet, 5);
        assert_eq!(m.sum_total_not_diet, 0);
    }

    #[test]
    fn longest_streak_can_be_the_first_run() {
        let m = compute(&[true, true, true, false, true]);
        assert_eq!(m.max_sequence, 3);
    }

    #[test]
    fn single_entry() {
        assert_eq!(compute(&[true]).max_sequence, 1);
        assert_eq!(compute(&[false]).max_sequence, 0);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_string(&compute(&[true, false])).unwrap();
        assert!(json.contains("maxSequence"));
        assert!(json.contains("sumTotalRegisterDiet"));
        assert!(json.contains("sumTotalIsDiet"));
        assert!(json.contains("sumTotalNotDiet"));
    }
}
