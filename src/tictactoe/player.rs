use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord)]
pub enum Player {
    X,
    O,
}

impl Player {
    const ALL: [Player; 2] = [Player::X, Player::O];

    pub fn opposite(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// `X` moves first and is the maximizing side by convention.
    pub fn maximize_score(&self) -> bool {
        match self {
            Player::X => true,
            Player::O => false,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::X => "X",
            Player::O => "O",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            "random" => Ok(Player::random()),
            _ => Err("invalid player; options are: x, o, random"),
        }
    }
}
