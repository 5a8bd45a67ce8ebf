use super::weather::LocationScore;

/// Orders scores best first.
///
/// The sort is stable: locations with equal scores keep the order in which
/// they were scored, which is the registry order.
#[must_use]
pub fn rank(mut scores: Vec<LocationScore>) -> Vec<LocationScore> {
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(location: &str, score: i64) -> LocationScore {
        LocationScore {
            location: location.to_string(),
            score,
            summary: format!("{location} summary"),
            icon: format!("{location}-icon"),
        }
    }

    #[test]
    fn orders_highest_score_first() {
        let ranked = rank(vec![entry("a", 10), entry("b", 30), entry("c", 20)]);
        let scores: Vec<_> = ranked.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 10]);

        assert_eq!(ranked[0].location, "b");
        assert_eq!(ranked[0].summary, "b summary");
        assert_eq!(ranked[0].icon, "b-icon");
        assert_eq!(ranked[2].location, "a");
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank(vec![
            entry("first", 5),
            entry("top", 9),
            entry("second", 5),
            entry("third", 5),
        ]);
        let names: Vec<_> = ranked.iter().map(|e| e.location.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
