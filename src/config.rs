use serde::{Deserialize, Serialize};

use crate::ai::{MinimaxStrategy, Player, RandomPlayer, StrategicPlayer};
use crate::heuristics::HeuristicKind;

pub const DEFAULT_SEARCH_DEPTH: u8 = 5;

fn default_depth() -> u8 {
    DEFAULT_SEARCH_DEPTH
}

/// Who plays White. Black is always the human at the board.
///
/// Deserializes from `{ "kind": "minimax", "heuristic": "composite", "depth": 4 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpponentConfig {
    /// Both colours are played by humans.
    #[default]
    TwoPlayer,
    Random,
    Minimax {
        heuristic: HeuristicKind,
        #[serde(default = "default_depth")]
        depth: u8,
    },
}

impl OpponentConfig {
    /// The opponents offered by the game menu.
    pub const PRESETS: [OpponentConfig; 6] = [
        Self::TwoPlayer,
        Self::Random,
        Self::minimax(HeuristicKind::CoinParity),
        Self::minimax(HeuristicKind::Mobility),
        Self::minimax(HeuristicKind::Stability),
        Self::minimax(HeuristicKind::Composite),
    ];

    /// Minimax at the default depth.
    pub const fn minimax(heuristic: HeuristicKind) -> Self {
        Self::Minimax {
            heuristic,
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::TwoPlayer => "2 player".to_string(),
            Self::Random => "Random".to_string(),
            Self::Minimax { heuristic, .. } => format!("MinMax - {}", heuristic.label()),
        }
    }

    /// Builds the computer player, or `None` for a two-player game.
    pub fn build_player(&self) -> Option<Box<dyn Player>> {
        match *self {
            Self::TwoPlayer => None,
            Self::Random => Some(Box::new(RandomPlayer::new())),
            Self::Minimax { heuristic, depth } => Some(Box::new(StrategicPlayer::new(
                Box::new(MinimaxStrategy::new(depth)),
                heuristic.function(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn presets_match_menu_labels() {
        let labels: Vec<String> = OpponentConfig::PRESETS.iter().map(|c| c.label()).collect();

        assert_eq!(
            labels,
            vec![
                "2 player",
                "Random",
                "MinMax - Coin Parity",
                "MinMax - Mobility",
                "MinMax - Stability",
                "MinMax - Composite",
            ]
        );
    }

    #[test]
    fn two_player_has_no_computer() {
        assert!(OpponentConfig::default().build_player().is_none());
    }

    #[test]
    fn built_players_propose_legal_moves() {
        let mut board = Board::new();
        board.place_piece(2, 3).unwrap();

        let configs = [
            OpponentConfig::Random,
            OpponentConfig::Minimax {
                heuristic: HeuristicKind::Corners,
                depth: 2,
            },
            OpponentConfig::Minimax {
                heuristic: HeuristicKind::Composite,
                depth: 2,
            },
        ];
        for config in &configs {
            let mut player = config.build_player().unwrap();
            let mv = player.propose(&board, false).unwrap();
            assert!(board.is_legal(mv.position), "{} proposed {}", config.label(), mv.position);
        }
    }
}
