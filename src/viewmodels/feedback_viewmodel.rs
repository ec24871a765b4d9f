// ============================================================================
// FEEDBACK VIEWMODEL - rating points and reward redemption (demo state)
// ============================================================================

pub const POINTS_PER_STAR: u32 = 4;

/// Points earned for submitting a rating.
pub fn points_for_rating(rating: u8) -> u32 {
    rating as u32 * POINTS_PER_STAR
}

/// Validate a submission: a star rating must be selected first.
pub fn can_submit(rating: u8) -> bool {
    (1..=5).contains(&rating)
}

/// Deduct a reward's cost; `None` means insufficient points.
pub fn redeem(points: u32, cost: u32) -> Option<u32> {
    points.checked_sub(cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_stars_earn_twenty_points() {
        assert_eq!(points_for_rating(5), 20);
        assert_eq!(points_for_rating(0), 0);
    }

    #[test]
    fn zero_rating_cannot_be_submitted() {
        assert!(!can_submit(0));
        assert!(can_submit(1));
        assert!(can_submit(5));
        assert!(!can_submit(6));
    }

    #[test]
    fn redemption_requires_enough_points() {
        assert_eq!(redeem(250, 100), Some(150));
        assert_eq!(redeem(50, 100), None);
    }
}
