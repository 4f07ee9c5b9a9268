//! Main Menu Options
//!
//! Defines the closed set of entries shown on the title screen, in the
//! order they are drawn and navigated.

/// An entry in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Play,
    HighScore,
    Quit,
}

impl MenuOption {
    /// All options in canonical display/navigation order
    pub fn all() -> [MenuOption; 3] {
        [MenuOption::Play, MenuOption::HighScore, MenuOption::Quit]
    }

    /// On-screen label for this option
    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Play => "PLAY",
            MenuOption::HighScore => "HIGH SCORE",
            MenuOption::Quit => "QUIT",
        }
    }

    /// Position of this option in the canonical order
    pub fn index(&self) -> usize {
        match self {
            MenuOption::Play => 0,
            MenuOption::HighScore => 1,
            MenuOption::Quit => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_index() {
        for (i, option) in MenuOption::all().iter().enumerate() {
            assert_eq!(option.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(MenuOption::Play.label(), "PLAY");
        assert_eq!(MenuOption::HighScore.label(), "HIGH SCORE");
        assert_eq!(MenuOption::Quit.label(), "QUIT");
    }
}
