//! Actions accepted by the game state machine
//!
//! [`Action`] is closed: every value of the type is a valid action, so the
//! reducer needs no "unsupported" branch. Untyped input coming from outside
//! the crate (scripts, protocol messages) goes through [`Action::parse`]
//! first, which is where unknown kinds and bad payloads are rejected.

use std::fmt;
use std::str::FromStr;

/// A single player or driver action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a letter to the current row
    TypeChar(char),
    /// Remove the last letter of the current row
    RemoveChar,
    /// Submit the current row as a guess
    SubmitRow,
    /// Clear the rejection flag after it has been shown
    ClearShake,
    /// Throw the game away and start a new one
    Restart,
}

/// Error raised when untyped input does not describe a valid action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The action kind is not one the game knows about
    Unsupported(String),
    /// `type_char` arrived without a letter
    MissingPayload(&'static str),
    /// The payload is not a single character, or the action takes none
    MalformedPayload {
        kind: &'static str,
        payload: String,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(kind) => write!(f, "Unsupported action type: {kind}"),
            Self::MissingPayload(kind) => write!(f, "Action {kind} requires a character"),
            Self::MalformedPayload { kind, payload } => {
                write!(f, "Action {kind} cannot take payload '{payload}'")
            }
        }
    }
}

impl std::error::Error for ActionError {}

impl Action {
    /// Validate an untyped `(kind, payload)` pair
    ///
    /// Kinds are case-insensitive and accept `TYPE_CHAR`, `type_char` and
    /// `typechar` spellings. Short aliases (`type`, `remove`, `submit`,
    /// `clear`) are accepted as well.
    ///
    /// # Errors
    ///
    /// - `Unsupported` for an unknown kind
    /// - `MissingPayload` when `type_char` has no payload
    /// - `MalformedPayload` when the payload is not exactly one character, or
    ///   when a payload is given to an action that takes none
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{Action, ActionError};
    ///
    /// assert_eq!(Action::parse("TYPE_CHAR", Some("a")), Ok(Action::TypeChar('a')));
    /// assert_eq!(Action::parse("submit_row", None), Ok(Action::SubmitRow));
    /// assert!(matches!(
    ///     Action::parse("JUMP", None),
    ///     Err(ActionError::Unsupported(_))
    /// ));
    /// ```
    pub fn parse(kind: &str, payload: Option<&str>) -> Result<Self, ActionError> {
        let normalized: String = kind
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        let action = match normalized.as_str() {
            "typechar" | "type" => {
                let payload = payload.ok_or(ActionError::MissingPayload("type_char"))?;
                let mut chars = payload.chars();
                return match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Self::TypeChar(c)),
                    _ => Err(ActionError::MalformedPayload {
                        kind: "type_char",
                        payload: payload.to_string(),
                    }),
                };
            }
            "removechar" | "remove" => Self::RemoveChar,
            "submitrow" | "submit" => Self::SubmitRow,
            "clearshake" | "clear" => Self::ClearShake,
            "restart" => Self::Restart,
            _ => return Err(ActionError::Unsupported(kind.to_string())),
        };

        match payload {
            Some(payload) => Err(ActionError::MalformedPayload {
                kind: action.kind(),
                payload: payload.to_string(),
            }),
            None => Ok(action),
        }
    }

    /// Canonical snake_case name of the action kind
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TypeChar(_) => "type_char",
            Self::RemoveChar => "remove_char",
            Self::SubmitRow => "submit_row",
            Self::ClearShake => "clear_shake",
            Self::Restart => "restart",
        }
    }

    /// Whether the action is ignored once the game is over
    #[must_use]
    pub const fn is_gameplay(&self) -> bool {
        matches!(self, Self::TypeChar(_) | Self::RemoveChar | Self::SubmitRow)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeChar(c) => write!(f, "{} {c}", self.kind()),
            _ => f.write_str(self.kind()),
        }
    }
}

/// Parse a script line such as `type a`, `submit` or `restart`
impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let kind = parts.next().unwrap_or_default();
        let payload = parts.next();

        if let Some(extra) = parts.next() {
            return Err(ActionError::MalformedPayload {
                kind: "script",
                payload: extra.to_string(),
            });
        }

        Self::parse(kind, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_spelling() {
        for kind in ["TYPE_CHAR", "type_char", "typeChar", "type-char", "type"] {
            assert_eq!(Action::parse(kind, Some("q")), Ok(Action::TypeChar('q')));
        }
        assert_eq!(Action::parse("REMOVE_CHAR", None), Ok(Action::RemoveChar));
        assert_eq!(Action::parse("SUBMIT_ROW", None), Ok(Action::SubmitRow));
        assert_eq!(Action::parse("CLEAR_SHAKE", None), Ok(Action::ClearShake));
        assert_eq!(Action::parse("RESTART", None), Ok(Action::Restart));
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        assert_eq!(
            Action::parse("UNDO", None),
            Err(ActionError::Unsupported("UNDO".to_string()))
        );
        assert!(matches!(
            Action::parse("", None),
            Err(ActionError::Unsupported(_))
        ));
    }

    #[test]
    fn parse_rejects_bad_payloads() {
        assert_eq!(
            Action::parse("TYPE_CHAR", None),
            Err(ActionError::MissingPayload("type_char"))
        );
        assert!(matches!(
            Action::parse("TYPE_CHAR", Some("ab")),
            Err(ActionError::MalformedPayload { .. })
        ));
        assert!(matches!(
            Action::parse("TYPE_CHAR", Some("")),
            Err(ActionError::MalformedPayload { .. })
        ));
        assert!(matches!(
            Action::parse("SUBMIT_ROW", Some("x")),
            Err(ActionError::MalformedPayload {
                kind: "submit_row",
                ..
            })
        ));
    }

    #[test]
    fn from_str_reads_script_lines() {
        assert_eq!("type a".parse(), Ok(Action::TypeChar('a')));
        assert_eq!("  submit  ".parse(), Ok(Action::SubmitRow));
        assert_eq!("restart".parse(), Ok(Action::Restart));
        assert!("type a b".parse::<Action>().is_err());
        assert!("fly".parse::<Action>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for action in [
            Action::TypeChar('z'),
            Action::RemoveChar,
            Action::SubmitRow,
            Action::ClearShake,
            Action::Restart,
        ] {
            assert_eq!(action.to_string().parse(), Ok(action));
        }
    }

    #[test]
    fn gameplay_actions() {
        assert!(Action::TypeChar('a').is_gameplay());
        assert!(Action::RemoveChar.is_gameplay());
        assert!(Action::SubmitRow.is_gameplay());
        assert!(!Action::ClearShake.is_gameplay());
        assert!(!Action::Restart.is_gameplay());
    }
}
