use std::fmt;
use std::io;

/// Errors that can occur during decoding.
#[derive(Debug)]
pub enum DecodeError {
    /// The input length is not a multiple of 4
    InvalidInputLength { actual: usize },
    /// A byte outside the alphabet (or a misplaced pad) was found
    InvalidCharacter { byte: u8, position: usize },
    /// The reader or writer failed
    Io(io::Error),
}

impl DecodeError {
    /// Create an InvalidInputLength error
    pub fn invalid_length(actual: usize) -> Self {
        DecodeError::InvalidInputLength { actual }
    }

    /// Create an InvalidCharacter error at `position` (0-based)
    pub fn invalid_character(byte: u8, position: usize) -> Self {
        DecodeError::InvalidCharacter { byte, position }
    }

    /// Renders the error, optionally with ANSI colors.
    pub fn render(&self, use_color: bool) -> String {
        let (error_tag, hint_tag) = if use_color {
            ("\x1b[1;31merror:\x1b[0m", "\x1b[1;36mhint:\x1b[0m")
        } else {
            ("error:", "hint:")
        };

        match self {
            DecodeError::InvalidInputLength { actual } => {
                let missing = (4 - actual % 4) % 4;
                format!(
                    "{error_tag} invalid length for decode\n\n  input is {actual} characters, expected a multiple of 4\n\n{hint_tag} {missing} character(s) missing; check for truncated input or lost '=' padding"
                )
            }
            DecodeError::InvalidCharacter { byte, position } => {
                let shown = describe_byte(*byte);
                let hint = if *byte == b'=' {
                    "'=' may only appear as padding in the last two positions"
                } else {
                    "valid characters: A-Z a-z 0-9 + / and trailing ="
                };
                format!("{error_tag} invalid character {shown} at position {position}\n\n{hint_tag} {hint}")
            }
            DecodeError::Io(e) => format!("{error_tag} i/o failure during decode: {e}"),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(should_use_color()))
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        DecodeError::Io(e)
    }
}

fn describe_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("{byte:#04x}")
    }
}

/// Check if colored output should be used: `NO_COLOR` unset and stderr is a terminal.
pub fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_character_display_no_color() {
        let err = DecodeError::invalid_character(b'_', 12);
        let display = err.render(false);

        assert!(display.contains("invalid character '_' at position 12"));
        assert!(display.contains("hint:"));
        assert!(!display.contains('\x1b'));
    }

    #[test]
    fn test_invalid_character_non_printable() {
        let display = DecodeError::invalid_character(0x0A, 3).render(false);
        assert!(display.contains("invalid character 0x0a at position 3"));
    }

    #[test]
    fn test_misplaced_pad_hint() {
        let display = DecodeError::invalid_character(b'=', 1).render(false);
        assert!(display.contains("only appear as padding"));
    }

    #[test]
    fn test_invalid_length_error() {
        let display = DecodeError::invalid_length(13).render(false);

        assert!(display.contains("invalid length"));
        assert!(display.contains("13 characters"));
        assert!(display.contains("multiple of 4"));
        assert!(display.contains("3 character(s) missing"));
    }

    #[test]
    fn test_colored_render() {
        let display = DecodeError::invalid_length(5).render(true);
        assert!(display.starts_with("\x1b[1;31merror:"));
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;

        let err = DecodeError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.source().is_some());
        assert!(err.render(false).contains("closed"));
    }
}
