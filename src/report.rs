//! Console phrasing for ranking results

use std::fmt::Write;
use itertools::Itertools;
use crate::error::RecommendResult;
use crate::graph::{SocialGraph, Vertex};
use crate::rank::{suggest_friends, suggestion_breakdown, Candidate, Connection, Contribution, Ranking};

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

fn render<T>(ranking: &Ranking<T>, singular: &str, plural_noun: &str, line: impl Fn(&T) -> String) -> String {
    let k = ranking.vertex;
    let mut out = String::new();

    if ranking.available == 0 {
        let _ = writeln!(out, "{} has no {}.", k, plural_noun);
        return out;
    }

    if ranking.is_clamped() {
        let _ = writeln!(out, "{} only has {}.", k, plural(ranking.available, singular, plural_noun));
    }

    match ranking.effective() {
        0 => {
            let _ = writeln!(out, "No {} requested for {}.", plural_noun, k);
        }
        1 => {
            let _ = writeln!(out, "{}'s top {} is:", k, singular);
        }
        n => {
            let _ = writeln!(out, "{}'s top {} are:", k, plural(n, singular, plural_noun));
        }
    }

    for entry in &ranking.entries {
        let _ = writeln!(out, "{}", line(entry));
    }

    out
}

/// Render a mutual-friends ranking
pub fn render_friends(ranking: &Ranking<Connection>) -> String {
    render(ranking, "friend", "friends", |c| {
        format!("{} ({})", c.id, plural(c.mutual_friends, "mutual friend", "mutual friends"))
    })
}

/// Render a suggestion ranking
pub fn render_suggestions(ranking: &Ranking<Candidate>) -> String {
    render(ranking, "suggested friend", "suggested friends", |c| {
        format!("{} ({})", c.id, plural(c.occurrences, "mutual friend", "mutual friends"))
    })
}

/// Render the per-friend candidate lists
pub fn render_breakdown(contributions: &[Contribution]) -> String {
    let mut out = String::from("Result Set:\n");
    for contribution in contributions {
        let _ = writeln!(out, "{}:\t{}", contribution.friend, contribution.candidates.iter().join(" "));
    }
    out
}

/// Rank suggestions for `k` and render them, optionally preceded by the
/// per-friend breakdown. Nothing is rendered unless the ranking succeeds.
pub fn suggestion_report(
    graph: &SocialGraph,
    k: Vertex,
    n: i64,
    with_breakdown: bool,
) -> RecommendResult<(Ranking<Candidate>, String)> {
    let ranking = suggest_friends(graph, k, n)?;

    let mut out = String::new();
    if with_breakdown {
        out.push_str(&render_breakdown(&suggestion_breakdown(graph, k)?));
    }
    out.push_str(&render_suggestions(&ranking));

    Ok((ranking, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecommendError;

    fn friends(requested: usize, available: usize) -> Ranking<Connection> {
        let entries = (0..available.min(requested) as u32)
            .map(|id| Connection { id: id + 1, mutual_friends: 1 })
            .collect();
        Ranking { vertex: 0, requested, available, entries }
    }

    #[test]
    fn test_single_friend_phrasing() {
        let out = render_friends(&friends(1, 3));
        assert_eq!(out, "0's top friend is:\n1 (1 mutual friend)\n");
    }

    #[test]
    fn test_plural_phrasing() {
        let out = render_friends(&friends(2, 3));
        assert!(out.starts_with("0's top 2 friends are:\n"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_clamped_phrasing() {
        let out = render_friends(&friends(5, 1));
        assert!(out.starts_with("0 only has 1 friend.\n0's top friend is:\n"));

        let out = render_friends(&friends(5, 2));
        assert!(out.starts_with("0 only has 2 friends.\n0's top 2 friends are:\n"));
    }

    #[test]
    fn test_empty_result() {
        let ranking: Ranking<Candidate> = Ranking { vertex: 7, requested: 3, available: 0, entries: vec![] };
        assert_eq!(render_suggestions(&ranking), "7 has no suggested friends.\n");
    }

    #[test]
    fn test_suggestion_lines() {
        let ranking = Ranking {
            vertex: 0,
            requested: 2,
            available: 2,
            entries: vec![
                Candidate { id: 4, occurrences: 2 },
                Candidate { id: 5, occurrences: 1 },
            ],
        };
        assert_eq!(
            render_suggestions(&ranking),
            "0's top 2 suggested friends are:\n4 (2 mutual friends)\n5 (1 mutual friend)\n"
        );
    }

    #[test]
    fn test_suggestion_report_with_breakdown() {
        let graph = SocialGraph::from_edges([(0, 1), (0, 2), (1, 2), (1, 3)]);
        let (ranking, out) = suggestion_report(&graph, 0, 1, true).unwrap();
        assert_eq!(ranking.entries, vec![Candidate { id: 3, occurrences: 1 }]);
        assert_eq!(
            out,
            "Result Set:\n1:\t3\n2:\t\n0's top suggested friend is:\n3 (1 mutual friend)\n"
        );
    }

    #[test]
    fn test_negative_n_renders_nothing() {
        let graph = SocialGraph::from_edges([(0, 1), (0, 2), (1, 2), (1, 3)]);
        assert_eq!(
            suggestion_report(&graph, 0, -1, true),
            Err(RecommendError::InvalidRequestSize(-1))
        );
        assert_eq!(
            suggestion_report(&graph, 9, 1, true),
            Err(RecommendError::UnknownVertex(9))
        );
    }
}
