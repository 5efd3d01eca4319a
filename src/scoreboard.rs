//! Plain-text scoreboard for the native demo and logs

use crate::engine::{EngineSnapshot, FrameView, PlayerView};
use crate::summary::SeriesSummary;

const NAME_PAD: &str = "            ";

fn mark_cell(frame: &FrameView) -> String {
    let marks: String = frame.marks.iter().collect();
    format!("|{:^5}", marks.trim_end())
}

fn score_cell(frame: &FrameView) -> String {
    match frame.score {
        Some(score) => format!("|{:>4} ", score),
        None => "|     ".to_string(),
    }
}

fn render_player(player: &PlayerView, is_current: bool) -> String {
    let marker = if is_current { '>' } else { ' ' };
    let marks: String = player.frames.iter().map(mark_cell).collect();
    let scores: String = player.frames.iter().map(score_cell).collect();
    format!(
        "{} {:<10}{}| {:>3}\n{}{}|\n",
        marker, player.name, marks, player.running_score, NAME_PAD, scores
    )
}

/// Render every bowler's frames with marks and running totals
pub fn render(snapshot: &EngineSnapshot) -> String {
    let header: String = (1..=10).map(|n| format!("|{:^5}", n)).collect();
    let mut out = format!(
        "Game {} of {}\n{}{}| Tot\n",
        snapshot.game_number, snapshot.max_games, NAME_PAD, header
    );

    for (i, player) in snapshot.players.iter().enumerate() {
        let is_current = i == snapshot.current_player && !snapshot.series_complete;
        out.push_str(&render_player(player, is_current));
    }
    out
}

/// Render the end-of-series summary
pub fn render_summary(summary: &SeriesSummary) -> String {
    let mut out = format!("{}-Game Series Complete!\n", summary.games_played);

    for &i in &summary.standings {
        let player = &summary.players[i];
        let games: Vec<String> = player.game_scores.iter().map(|s| s.to_string()).collect();
        out.push_str(&format!(
            "  {:<10} {:<15} avg {:>5.1}  high {:>3}\n",
            player.name,
            games.join(" / "),
            player.average,
            player.high_game.unwrap_or(0)
        ));
    }

    if let Some(team) = summary.team_average {
        out.push_str(&format!("  Team Average: {:.1}\n", team));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TurnEngine;
    use crate::settings::{GameMode, Settings};

    #[test]
    fn test_render_shows_marks_and_scores() {
        let mut engine = TurnEngine::new(&Settings::default());
        for pins in [10, 6, 4, 0, 9] {
            engine.throw_ball(pins).unwrap();
        }
        let text = render(&engine.snapshot());
        assert!(text.starts_with("Game 1 of 3"));
        assert!(text.contains("> Player 1"));
        assert!(text.contains("|  X  |"));
        assert!(text.contains(" 6/ "));
        assert!(text.contains(" -9 "));
        assert!(text.contains("|  20 |  30 |  39 |"));
    }

    #[test]
    fn test_render_summary_team_average() {
        let mut settings = Settings::from_mode(GameMode::Doubles);
        settings.max_games = 1;
        let mut engine = TurnEngine::new(&settings);
        for _ in 0..12 {
            engine.throw_ball(10).unwrap();
        }
        for _ in 0..20 {
            engine.throw_ball(0).unwrap();
        }
        assert!(engine.is_series_complete());

        let text = render_summary(&engine.summary());
        assert!(text.contains("1-Game Series Complete!"));
        assert!(text.contains("Team Average: 300.0"));
        // Leader listed first
        let athlete = text.find("Athlete").unwrap();
        let partner = text.find("Partner").unwrap();
        assert!(athlete < partner);
    }
}
