// src/roster.rs

use std::{fs, path::Path};

use crate::error::ScrapeError;

/// One fantasy entry: display name plus the site's numeric entry id.
/// The id is opaque to us; it only ever lands in a URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub id: String,
}

impl Member {
    pub fn new(name: &str, id: &str) -> Self {
        Self { name: s!(name), id: s!(id) }
    }
}

/// A side-game team: the label it is keyed by in the tally file, and
/// its members in fetch order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub label: String,
    pub members: Vec<Member>,
}

/// The two historical rosters. Used when no roster file is given.
pub fn default_pairing() -> Vec<Team> {
    vec![
        Team {
            label: s!("#teamABS"),
            members: vec![
                Member::new("Sardaukar", "1139641"),
                Member::new("Pointus Maximus", "954786"),
                Member::new("Vetti Dogs", "4113"),
                Member::new("FCSvenska", "947222"),
            ],
        },
        Team {
            label: s!("#teamSam"),
            members: vec![
                Member::new("Playmakers", "594887"),
                Member::new("Swalpa adjust maadi", "374413"),
                Member::new("The unsullied", "2276264"),
                Member::new("HowToScoreGoalsXI", "992491"),
            ],
        },
    ]
}

/// Load rosters from a file, or fall back to the built-in pairing.
pub fn load(path: Option<&Path>) -> Result<Vec<Team>, ScrapeError> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p).map_err(|source| ScrapeError::RosterRead {
                path: p.to_path_buf(),
                source,
            })?;
            parse_file(&text)
        }
        None => Ok(default_pairing()),
    }
}

/// Parse a roster file:
///
///   ; lines starting with ; are comments
///   [#teamABS]
///   Sardaukar = 1139641
///
/// Section headers give team labels (leading `#` and all); `Name = id`
/// lines add members to the most recent section, in file order.
pub fn parse_file(text: &str) -> Result<Vec<Team>, ScrapeError> {
    let bad = |line: usize, reason: String| ScrapeError::RosterParse { line, reason };

    let mut teams: Vec<Team> = Vec::new();
    let mut lines = 0usize;

    for (i, raw) in text.lines().enumerate() {
        let n = i + 1;
        lines = n;
        let line = raw.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        if let Some(rest) = line.strip_prefix('[') {
            let Some(label) = rest.strip_suffix(']') else {
                return Err(bad(n, s!("unterminated team header")));
            };
            let label = label.trim();
            if label.is_empty() {
                return Err(bad(n, s!("empty team label")));
            }
            if teams.iter().any(|t| t.label == label) {
                return Err(bad(n, format!("duplicate team {:?}", label)));
            }
            teams.push(Team { label: s!(label), members: Vec::new() });
            continue;
        }

        let Some(eq) = line.find('=') else {
            return Err(bad(n, s!("expected `Name = id`")));
        };
        let name = line[..eq].trim();
        let id = line[eq + 1..].trim();
        if name.is_empty() {
            return Err(bad(n, s!("empty member name")));
        }
        if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(bad(n, format!("bad entry id {:?}", id)));
        }
        let Some(team) = teams.last_mut() else {
            return Err(bad(n, s!("member before any [team] header")));
        };
        if team.members.iter().any(|m| m.name == name) {
            return Err(bad(n, format!("duplicate member {:?}", name)));
        }
        team.members.push(Member::new(name, id));
    }

    if teams.is_empty() {
        return Err(bad(lines, s!("no teams defined")));
    }
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pairing_has_two_teams_of_four() {
        let teams = default_pairing();
        assert_eq!(teams.len(), 2);
        assert!(teams.iter().all(|t| t.members.len() == 4));
        assert_eq!(teams[0].label, "#teamABS");
        assert_eq!(teams[1].label, "#teamSam");
    }

    #[test]
    fn parses_sections_and_members_in_order() {
        let text = "\
; weekly side game
[#teamABS]
Sardaukar = 1139641
Vetti Dogs = 4113

[#teamSam]
Playmakers = 594887
";
        let teams = parse_file(text).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].members[1], Member::new("Vetti Dogs", "4113"));
        assert_eq!(teams[1].label, "#teamSam");
        assert_eq!(teams[1].members.len(), 1);
    }

    #[test]
    fn member_before_header_is_rejected() {
        let err = parse_file("Loner = 123\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let err = parse_file("[#t]\nX = abc\n").unwrap_err();
        assert!(err.to_string().contains("bad entry id"));
    }

    #[test]
    fn duplicate_member_is_rejected() {
        let err = parse_file("[#t]\nX = 1\nX = 2\n").unwrap_err();
        assert!(err.to_string().contains("duplicate member"));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(parse_file("").is_err());
    }

    #[test]
    fn empty_section_is_allowed() {
        // A team with no members is a degenerate but legal roster;
        // it averages to zero downstream.
        let teams = parse_file("[#empty]\n").unwrap();
        assert!(teams[0].members.is_empty());
    }
}
