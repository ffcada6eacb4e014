use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller-supplied answer to "do you want to execute the queued commands?".
///
/// The interaction channel (terminal prompt, API flag, test fixture) is the
/// caller's business; the executor only ever sees this value. Only the
/// literal token "yes", case-insensitively and ignoring surrounding
/// whitespace, grants; every other response denies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    Granted,
    Denied,
}

impl Confirmation {
    /// Interpret a free-text response.
    pub fn from_response(response: &str) -> Self {
        if response.trim().eq_ignore_ascii_case("yes") {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_literal_yes_token_grants() {
        assert_eq!(Confirmation::from_response("yes"), Confirmation::Granted);
        assert_eq!(Confirmation::from_response("YES"), Confirmation::Granted);
        assert_eq!(Confirmation::from_response("  Yes "), Confirmation::Granted);

        assert_eq!(Confirmation::from_response("no"), Confirmation::Denied);
        assert_eq!(Confirmation::from_response("y"), Confirmation::Denied);
        assert_eq!(Confirmation::from_response("yes!"), Confirmation::Denied);
        assert_eq!(Confirmation::from_response(""), Confirmation::Denied);
        assert_eq!(Confirmation::from_response("yes please"), Confirmation::Denied);
    }
}
