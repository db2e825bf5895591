//! Teams and their running scores.

use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub score: u32,
}

impl Team {
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            id: format!("team-{index}"),
            name: name.into(),
            score: 0,
        }
    }
}

/// Fixed, ordered set of teams for one game.
///
/// Scores only ever grow: `update_score` is the single mutation.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    pub const fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    /// Add `points` to the team at `index`.
    pub fn update_score(&mut self, index: usize, points: u32) {
        let Some(team) = self.teams.get_mut(index) else {
            return;
        };
        team.score = team.score.saturating_add(points);
        info!(team = %team.id, name = %team.name, points, total = team.score, "Score updated");
    }

    /// Round-robin successor of `index`.
    pub fn next_index(&self, index: usize) -> usize {
        if self.is_empty() {
            0
        } else {
            (index + 1) % self.teams.len()
        }
    }

    /// Teams ordered by score, highest first; ties keep setup order.
    pub fn standings(&self) -> Vec<&Team> {
        let mut sorted: Vec<&Team> = self.teams.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(count: usize) -> Roster {
        Roster::new((0..count).map(|i| Team::new(i, format!("T{i}"))).collect())
    }

    #[test]
    fn test_next_index_wraps() {
        let roster = roster(3);
        assert_eq!(roster.next_index(0), 1);
        assert_eq!(roster.next_index(2), 0);
    }

    #[test]
    fn test_standings_sorted_stable() {
        let mut roster = roster(3);
        roster.update_score(2, 5);
        roster.update_score(1, 1);
        roster.update_score(0, 1);
        let names: Vec<&str> = roster.standings().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["T2", "T0", "T1"]);
    }

    #[test]
    fn test_update_out_of_range_is_ignored() {
        let mut roster = roster(2);
        roster.update_score(9, 5);
        assert!(roster.teams().iter().all(|t| t.score == 0));
    }
}
