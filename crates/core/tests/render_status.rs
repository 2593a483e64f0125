use guess_core::render::{hearts_status, REMAINING_MARK, SPENT_MARK};

/// For every used count within the budget, the output holds exactly
/// `(allowed - used)` remaining markers and `used` spent markers.
#[test]
fn marker_counts_match_used_and_allowed() {
    let allowed = 5;
    for used in 0..=allowed {
        let status = hearts_status(used, allowed);
        let remaining = status.matches(REMAINING_MARK).count();
        let spent = status.matches(SPENT_MARK).count();

        assert_eq!(remaining, (allowed - used) as usize, "remaining for used={used}");
        assert_eq!(spent, used as usize, "spent for used={used}");
    }
}

#[test]
fn remaining_markers_come_before_spent_markers() {
    assert_eq!(hearts_status(1, 3), format!("{REMAINING_MARK} {REMAINING_MARK} {SPENT_MARK}"));
    assert_eq!(hearts_status(0, 2), format!("{REMAINING_MARK} {REMAINING_MARK}"));
    assert_eq!(hearts_status(2, 2), format!("{SPENT_MARK} {SPENT_MARK}"));
}

/// Markers are space-delimited so adjacent glyphs stay visually distinct.
#[test]
fn markers_are_space_delimited() {
    let status = hearts_status(2, 5);
    assert_eq!(status.split(' ').count(), 5);
    assert!(!status.starts_with(' '));
    assert!(!status.ends_with(' '));
}

#[test]
fn zero_allowed_renders_empty() {
    assert_eq!(hearts_status(0, 0), "");
}
