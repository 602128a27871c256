//! Styles of a progress bar

use strum::EnumString;

/// Styles of a progress bar, deciding which symbol fills completed cells
///
/// Preset styles can be parsed from their lowercase names:
///
/// ```
/// use tallybar::Style;
///
/// let style: Style = "block".parse().unwrap();
/// assert_eq!(style, Style::Block);
/// assert_eq!(style.fill(), '█');
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Style {
    /// Presentation: `[#####     ]`
    #[default]
    ASCII,

    /// Presentation: `[█████     ]`
    Block,

    /// Presentation: `[*****     ]`
    Balloon,

    /// User custom fill symbol
    #[strum(disabled)]
    Custom(char),
}

impl Style {
    /// The symbol drawn for every completed cell
    pub fn fill(&self) -> char {
        match self {
            Self::ASCII => '#',
            Self::Block => '█',
            Self::Balloon => '*',
            Self::Custom(c) => *c,
        }
    }
}

impl From<char> for Style {
    fn from(fill: char) -> Self {
        Self::Custom(fill)
    }
}
