//! Proximity scoring.

/// Points awarded for a guess, by distance from the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Perfect,
    Great,
    Close,
    Miss,
}

impl ScoreBand {
    /// Bands in evaluation order with their inclusive upper distance bound.
    pub const THRESHOLDS: [(f64, Self); 3] = [(2.0, Self::Perfect), (5.0, Self::Great), (10.0, Self::Close)];

    /// Classify a distance; the first band whose bound is not exceeded wins.
    pub fn for_distance(distance: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(bound, _)| distance <= *bound)
            .map_or(Self::Miss, |(_, band)| *band)
    }

    pub const fn points(self) -> u32 {
        match self {
            Self::Perfect => 5,
            Self::Great => 3,
            Self::Close => 1,
            Self::Miss => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "PERFECT!",
            Self::Great => "GREAT!",
            Self::Close => "CLOSE!",
            Self::Miss => "MISS!",
        }
    }

    /// Band that awarded `points`, for display of a finished round.
    pub const fn from_points(points: u32) -> Self {
        match points {
            5 => Self::Perfect,
            3 => Self::Great,
            1 => Self::Close,
            _ => Self::Miss,
        }
    }
}

/// Points for `guess` against `target`; both are positions on the 0-100 scale.
pub fn score(guess: f64, target: f64) -> u32 {
    ScoreBand::for_distance((guess - target).abs()).points()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_breakpoints_are_inclusive() {
        assert_eq!(score(52.0, 50.0), 5);
        assert_eq!(score(52.01, 50.0), 3);
        assert_eq!(score(45.0, 50.0), 3);
        assert_eq!(score(60.0, 50.0), 1);
        assert_eq!(score(60.01, 50.0), 0);
        assert_eq!(score(50.0, 50.0), 5);
    }

    #[test]
    fn test_distance_is_symmetric() {
        assert_eq!(score(40.0, 47.0), score(54.0, 47.0));
        assert_eq!(score(46.0, 47.0), 5);
        assert_eq!(score(25.0, 10.0), 0);
    }

    #[test]
    fn test_score_never_increases_with_distance() {
        let mut previous = u32::MAX;
        for step in 0..=1000 {
            let distance = f64::from(step) * 0.1;
            let points = ScoreBand::for_distance(distance).points();
            assert!(points <= previous, "score rose at distance {distance}");
            previous = points;
        }
    }

    #[test]
    fn test_labels_follow_points() {
        for band in [ScoreBand::Perfect, ScoreBand::Great, ScoreBand::Close, ScoreBand::Miss] {
            assert_eq!(ScoreBand::from_points(band.points()), band);
        }
        assert_eq!(ScoreBand::from_points(0).label(), "MISS!");
    }
}
