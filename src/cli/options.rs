use std::fmt;
use std::io::{self, Write};

/// Display settings for the interactive front-end, changed with
/// `set <name> <value>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    /// Redraw the board after every accepted move
    pub show_board: bool,
    /// Redraw the board with destinations marked after a selection
    pub show_destinations: bool,
    /// Draw from Black's side
    pub flip_board: bool,
    /// Unicode glyphs instead of FEN letters
    pub unicode: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            show_board: true,
            show_destinations: true,
            flip_board: false,
            unicode: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

fn parse_bool(name: &str, value: Option<&str>) -> Result<bool, OptionError> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "on" | "1" | "yes") => Ok(true),
        Some("false" | "off" | "0" | "no") => Ok(false),
        other => Err(OptionError::InvalidValue {
            name: name.to_string(),
            value: other.unwrap_or_default().to_string(),
        }),
    }
}

impl CliOptions {
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "option show_board {}", self.show_board)?;
        writeln!(out, "option show_destinations {}", self.show_destinations)?;
        writeln!(out, "option flip_board {}", self.flip_board)?;
        writeln!(out, "option unicode {}", self.unicode)
    }

    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let normalized = name.trim().to_ascii_lowercase();
        let slot = match normalized.as_str() {
            "show_board" => &mut self.show_board,
            "show_destinations" => &mut self.show_destinations,
            "flip_board" | "flip" => &mut self.flip_board,
            "unicode" => &mut self.unicode,
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        };
        *slot = parse_bool(&normalized, value)?;
        log::debug!("option {normalized} = {}", *slot);
        Ok(())
    }
}
