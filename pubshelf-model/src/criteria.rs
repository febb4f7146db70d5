use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordering selectable in the publication view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriteria {
    /// Newest first by publication year.
    Latest,
    /// Oldest first by publication year.
    Oldest,
    /// Most cited first.
    Popular,
}

impl SortCriteria {
    pub fn all() -> &'static [SortCriteria] {
        use SortCriteria::*;
        &[Latest, Oldest, Popular]
    }

    /// Wire/CLI token for the criteria.
    pub fn token(&self) -> &'static str {
        match self {
            SortCriteria::Latest => "latest",
            SortCriteria::Oldest => "oldest",
            SortCriteria::Popular => "popular",
        }
    }

    /// Label shown in the view controls.
    pub fn label(&self) -> &'static str {
        match self {
            SortCriteria::Latest => "Latest",
            SortCriteria::Oldest => "Oldest",
            SortCriteria::Popular => "Popular",
        }
    }

    /// Parse a criteria token.
    ///
    /// Unknown tokens yield `None`; callers treat that as "keep the current
    /// order", so an unrecognized tag can never reorder anything.
    pub fn parse(token: &str) -> Option<SortCriteria> {
        match token {
            "latest" => Some(SortCriteria::Latest),
            "oldest" => Some(SortCriteria::Oldest),
            "popular" => Some(SortCriteria::Popular),
            _ => None,
        }
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for criteria in SortCriteria::all() {
            assert_eq!(SortCriteria::parse(criteria.token()), Some(*criteria));
        }
    }

    #[test]
    fn unknown_tokens_do_not_parse() {
        assert_eq!(SortCriteria::parse("alphabetical"), None);
        assert_eq!(SortCriteria::parse(""), None);
        assert_eq!(SortCriteria::parse("Latest"), None);
    }
}
