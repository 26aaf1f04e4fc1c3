use crate::error::Error;

pub const MEMBERS_MARKER: &str = "Members:";

/// Result of `ipset list <name>`.
///
/// A failed run may still have produced output, so `members` and `error`
/// are independent: check both.
#[derive(Debug, Default)]
pub struct Listing {
    /// Entries after the `Members:` line, blank lines dropped, not trimmed.
    pub members: Vec<String>,
    /// Whether stdout contained a `Members:` line at all.
    pub marker_found: bool,
    pub error: Option<Error>,
}

impl Listing {
    pub fn from_output(stdout: &str, error: Option<Error>) -> Listing {
        match parse_members(stdout) {
            Some(members) => Listing {
                members,
                marker_found: true,
                error,
            },
            None => Listing {
                members: Vec::new(),
                marker_found: false,
                error,
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Drops the partial members if the run failed.
    pub fn into_result(self) -> Result<Vec<String>, Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.members),
        }
    }
}

/// Members following the first `Members:` line, or `None` without one.
///
/// Lines are split on `\n` only, so a trailing `\r` stays on the member.
pub fn parse_members(stdout: &str) -> Option<Vec<String>> {
    let mut lines = stdout.split('\n');
    lines.by_ref().find(|line| line.trim() == MEMBERS_MARKER)?;
    Some(
        lines
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Name: blocked\nType: hash:ip\nRevision: 4\nHeader: family inet hashsize 1024 maxelem 65536\nSize in memory: 200\nReferences: 0\nNumber of entries: 2\n";

    #[test]
    fn skips_blank_lines_and_keeps_order() {
        let out = format!("{HEADER}Members:\n10.0.0.1\n\n10.0.0.2\n");
        assert_eq!(
            parse_members(&out),
            Some(vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()])
        );
    }

    #[test]
    fn members_are_not_trimmed() {
        let out = "Members:\n 10.0.0.1 timeout 30\r\n   \n";
        assert_eq!(
            parse_members(out),
            Some(vec![" 10.0.0.1 timeout 30\r".to_string()])
        );
    }

    #[test]
    fn marker_matches_after_trim() {
        let out = "Name: x\n  Members:  \n1.1.1.1";
        assert_eq!(parse_members(out), Some(vec!["1.1.1.1".to_string()]));
    }

    #[test]
    fn only_first_marker_counts() {
        let out = "Members:\nMembers:\n1.1.1.1\n";
        assert_eq!(
            parse_members(out),
            Some(vec!["Members:".to_string(), "1.1.1.1".to_string()])
        );
    }

    #[test]
    fn nothing_after_marker_is_empty() {
        let listing = Listing::from_output(&format!("{HEADER}Members:"), None);
        assert!(listing.marker_found);
        assert!(listing.members.is_empty());
        assert!(listing.is_ok());

        let listing = Listing::from_output(&format!("{HEADER}Members:\n"), None);
        assert!(listing.members.is_empty());
        assert!(listing.into_result().unwrap().is_empty());
    }

    // Regression: output without a Members: line yields no members, the
    // header lines are never reported as entries.
    #[test]
    fn missing_marker_yields_no_members() {
        assert_eq!(parse_members(HEADER), None);
        assert_eq!(parse_members(""), None);

        let listing = Listing::from_output("10.0.0.1\n10.0.0.2\n", None);
        assert!(!listing.marker_found);
        assert!(listing.members.is_empty());
        assert!(listing.error.is_none());
    }

    #[test]
    fn partial_members_survive_an_error() {
        let err = Error::ExecutionFailed {
            stderr: "ipset v7.x: Kernel error".to_string(),
            code: Some(1),
            source: None,
        };
        let listing = Listing::from_output("Members:\n10.0.0.1\n", Some(err));
        assert_eq!(listing.members, vec!["10.0.0.1"]);
        assert!(!listing.is_ok());
        let err = listing.into_result().unwrap_err();
        assert_eq!(err.to_string(), "ipset v7.x: Kernel error");
    }
}
