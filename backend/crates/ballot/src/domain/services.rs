//! Domain Services
//!
//! Pure domain logic for results ranking.

use crate::domain::entities::Candidate;

/// Rank candidates by vote count, descending
///
/// Ties keep their original insertion order: the input is expected in
/// creation order and the sort is stable.
pub fn rank_by_tally(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, votes: i64) -> Candidate {
        let mut c = Candidate::new(name, "Party", 40, None).unwrap();
        c.vote_count = votes;
        c
    }

    #[test]
    fn test_sorted_descending() {
        let ranked = rank_by_tally(vec![
            candidate("low", 1),
            candidate("high", 9),
            candidate("mid", 4),
        ]);
        let names: Vec<_> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let ranked = rank_by_tally(vec![
            candidate("first", 3),
            candidate("second", 3),
            candidate("third", 3),
        ]);
        let names: Vec<_> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_by_tally(Vec::new()).is_empty());
    }
}
