//! The per-slot ratio rule: adaptation exclusivity, the lone-staff small
//! group, and mixed-group allocation.

use creche_engine::normalize::HeadCount;
use creche_engine::ratio::check_slot;
use creche_engine::Violation;

fn count(walkers: u32, non_walkers: u32, adaptations: u32) -> HeadCount {
    HeadCount::new(walkers, non_walkers, adaptations)
}

#[test]
fn empty_slot_needs_nobody() {
    assert_eq!(check_slot(count(0, 0, 0), 0), None);
}

#[test]
fn adaptation_consumes_a_whole_pro() {
    assert_eq!(check_slot(count(0, 0, 1), 1), None);
    assert_eq!(check_slot(count(0, 0, 1), 3), None);
    assert_eq!(
        check_slot(count(0, 0, 2), 1),
        Some(Violation::MissingProForAdaptation {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn lone_pro_watches_at_most_three_children() {
    assert_eq!(check_slot(count(2, 1, 0), 1), None);
    assert_eq!(
        check_slot(count(4, 0, 0), 1),
        Some(Violation::MissingProForChildren {
            expected: 2,
            got: 1
        })
    );
    assert_eq!(
        check_slot(count(2, 2, 0), 1),
        Some(Violation::MissingProForChildren {
            expected: 2,
            got: 1
        })
    );
}

#[test]
fn walkers_go_eight_per_pro() {
    // One adaptation claims a pro; two pros cover 16 walkers, not 17.
    assert_eq!(check_slot(count(16, 0, 1), 3), None);
    assert!(matches!(
        check_slot(count(17, 0, 1), 3),
        Some(Violation::MissingProForChildren { expected: 3, .. })
    ));
}

#[test]
fn non_walkers_go_three_per_pro() {
    assert_eq!(check_slot(count(0, 6, 1), 3), None);
    // A seventh non-walker starts a mixed group needing a third pro.
    assert!(matches!(
        check_slot(count(0, 7, 1), 3),
        Some(Violation::MissingProForChildren { expected: 3, .. })
    ));
    assert_eq!(check_slot(count(0, 7, 0), 3), None);
    assert!(matches!(
        check_slot(count(0, 7, 0), 2),
        Some(Violation::MissingProForChildren { expected: 3, .. })
    ));
}

#[test]
fn mixed_group_absorbs_walkers() {
    // 4 non-walkers: one full group plus a mixed group absorbing 2 walkers.
    assert_eq!(check_slot(count(2, 4, 1), 3), None);
    // A third walker does not fit the mixed group any more.
    assert!(matches!(
        check_slot(count(3, 4, 1), 3),
        Some(Violation::MissingProForChildren { expected: 3, .. })
    ));
}

#[test]
fn negative_staff_counts_as_zero_but_is_reported_raw() {
    assert_eq!(
        check_slot(count(0, 0, 1), -1),
        Some(Violation::MissingProForAdaptation {
            expected: 1,
            got: -1
        })
    );
}
