use crate::model::{
    constants::{DEFENSE_SCALE, EXPERIENCE_SCALE, FINISHING_SCALE, PLAYMAKING_SCALE, PROJECTION_CAP},
    structures::{
        aggregate::Aggregate,
        processing::{ComparisonProjection, ComparisonSide, HeadToHead}
    }
};

/// Projects an aggregate onto four independent 0-100 scales. Unrelated to
/// the rating and not weighted by position.
pub fn project(aggregate: &Aggregate) -> ComparisonProjection {
    let totals = &aggregate.totals;

    ComparisonProjection {
        finishing: cap(totals.goals_per_match() * FINISHING_SCALE),
        playmaking: cap(totals.assists_per_match() * PLAYMAKING_SCALE),
        defense: cap(totals.bonus_per_match() * DEFENSE_SCALE),
        experience: cap(totals.effective_matches() as f64 * EXPERIENCE_SCALE)
    }
}

pub fn head_to_head(left: &Aggregate, right: &Aggregate) -> HeadToHead {
    HeadToHead {
        left: side(left),
        right: side(right)
    }
}

fn side(aggregate: &Aggregate) -> ComparisonSide {
    ComparisonSide {
        aggregate: aggregate.clone(),
        projection: project(aggregate)
    }
}

fn cap(value: f64) -> f64 {
    value.min(PROJECTION_CAP)
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            comparison::{head_to_head, project},
            structures::{
                aggregate::{Aggregate, PlayerTotals},
                position::Position
            }
        },
        utils::test_utils::generate_aggregate
    };
    use approx::assert_abs_diff_eq;

    fn aggregate(goals: u32, assists: u32, bonus: u32, raw_matches: u32) -> Aggregate {
        generate_aggregate(
            "p1",
            Position::Defender,
            PlayerTotals {
                goals,
                assists,
                bonus,
                raw_matches
            }
        )
    }

    #[test]
    fn test_projection_scales() {
        let p = project(&aggregate(2, 1, 1, 2));

        assert_abs_diff_eq!(p.finishing, 45.0);
        assert_abs_diff_eq!(p.playmaking, 22.5);
        assert_abs_diff_eq!(p.defense, 30.0);
        assert_abs_diff_eq!(p.experience, 20.0);
    }

    #[test]
    fn test_projection_caps_at_100() {
        let p = project(&aggregate(30, 30, 30, 12));

        assert_eq!(p.values(), [100.0, 100.0, 100.0, 100.0]);
    }

    #[test]
    fn test_projection_without_matches_uses_floor() {
        let p = project(&aggregate(0, 0, 0, 0));

        assert_eq!(p.finishing, 0.0);
        assert_eq!(p.experience, 10.0);
    }

    #[test]
    fn test_projection_ignores_position() {
        let mut keeper = aggregate(3, 1, 2, 3);
        let outfield = keeper.clone();
        keeper.position = Position::Goalkeeper;

        assert_eq!(project(&keeper), project(&outfield));
    }

    #[test]
    fn test_head_to_head_keeps_raw_matches() {
        let h2h = head_to_head(&aggregate(1, 0, 0, 0), &aggregate(4, 2, 0, 3));

        assert_eq!(h2h.left.aggregate.totals.raw_matches, 0);
        assert_eq!(h2h.right.aggregate.totals.raw_matches, 3);
        assert_abs_diff_eq!(h2h.right.projection.finishing, 60.0, epsilon = 1e-9);
    }
}
