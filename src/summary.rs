//! Series summary shown once every game has been bowled
//!
//! Per-player game scores and averages, plus standings ordered by average.

use serde::{Deserialize, Serialize};

use crate::score::Player;
use crate::settings::GameMode;

/// One bowler's series line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub game_scores: Vec<u16>,
    pub series_total: u32,
    pub average: f32,
    pub high_game: Option<u16>,
}

impl PlayerSummary {
    pub fn from_player(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            game_scores: player.game_scores().to_vec(),
            series_total: player.game_scores().iter().map(|&s| s as u32).sum(),
            average: player.average(),
            high_game: player.high_game(),
        }
    }
}

/// Summary of a (possibly partial) series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games_played: u32,
    /// In seating order
    pub players: Vec<PlayerSummary>,
    /// Indices into `players`, best average first
    pub standings: Vec<usize>,
    /// Sum of player averages, team-play modes only
    pub team_average: Option<f32>,
}

impl SeriesSummary {
    pub fn new(players: &[Player], games_played: u32, mode: GameMode) -> Self {
        let players: Vec<PlayerSummary> = players.iter().map(PlayerSummary::from_player).collect();

        // Insertion keeps seating order among equal averages
        let mut standings: Vec<usize> = Vec::with_capacity(players.len());
        for (i, p) in players.iter().enumerate() {
            let pos = standings
                .iter()
                .position(|&j| p.average > players[j].average)
                .unwrap_or(standings.len());
            standings.insert(pos, i);
        }

        let team_average = mode
            .is_team_play()
            .then(|| players.iter().map(|p| p.average).sum::<f32>());

        Self {
            games_played,
            players,
            standings,
            team_average,
        }
    }

    /// Bowler with the best average
    pub fn leader(&self) -> Option<&PlayerSummary> {
        self.standings.first().map(|&i| &self.players[i])
    }

    /// Standing of a player (1-indexed)
    pub fn rank_of(&self, player_index: usize) -> Option<usize> {
        self.standings
            .iter()
            .position(|&i| i == player_index)
            .map(|r| r + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowler(name: &str, games: &[&[u8]]) -> Player {
        let mut player = Player::new(name);
        for throws in games {
            for &pins in *throws {
                player.record_throw(pins).unwrap();
            }
            player.record_game();
            player.reset();
        }
        player
    }

    #[test]
    fn test_single_player_summary() {
        let player = bowler("Player 1", &[&[10; 12], &[0; 20], &[5; 21]]);
        let summary = SeriesSummary::new(&[player], 3, GameMode::Singles);

        assert_eq!(summary.games_played, 3);
        assert_eq!(summary.players[0].game_scores, vec![300, 0, 150]);
        assert_eq!(summary.players[0].series_total, 450);
        assert_eq!(summary.players[0].average, 150.0);
        assert_eq!(summary.players[0].high_game, Some(300));
        assert_eq!(summary.team_average, None);
    }

    #[test]
    fn test_standings_by_average() {
        let low = bowler("Athlete", &[&[0; 20]]);
        let high = bowler("Partner", &[&[10; 12]]);
        let summary = SeriesSummary::new(&[low, high], 1, GameMode::Doubles);

        assert_eq!(summary.standings, vec![1, 0]);
        assert_eq!(summary.leader().map(|p| p.name.as_str()), Some("Partner"));
        assert_eq!(summary.rank_of(0), Some(2));
        assert_eq!(summary.team_average, Some(300.0));
    }

    #[test]
    fn test_ties_keep_seating_order() {
        let a = bowler("Athlete 1", &[&[5; 21]]);
        let b = bowler("Athlete 2", &[&[5; 21]]);
        let summary = SeriesSummary::new(&[a, b], 1, GameMode::Doubles);
        assert_eq!(summary.standings, vec![0, 1]);
    }
}
