use crate::imports::*;

use regex::Regex;

/*
    Types:
    * CommandType - Whether a script is processed as DML or DDL; fixed for a whole staging pass
    * GroupType - The six lifecycle groups a statement can belong to
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CommandType {
    #[serde(rename = "DML")]
    Dml,
    #[serde(rename = "DDL")]
    Ddl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GroupType {
    #[serde(rename = "PreSQL")]
    PreSql,
    #[serde(rename = "PreProdSQL")]
    PreProdSql,
    #[serde(rename = "CountSQL")]
    CountSql,
    #[serde(rename = "SelectSQL")]
    SelectSql,
    #[serde(rename = "MainSQL")]
    MainSql,
    #[serde(rename = "PostSQL")]
    PostSql,
}

impl GroupType {
    pub const ALL: [GroupType; 6] = [
        GroupType::PreSql,
        GroupType::PreProdSql,
        GroupType::CountSql,
        GroupType::SelectSql,
        GroupType::MainSql,
        GroupType::PostSql,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GroupType::PreSql => "PreSQL",
            GroupType::PreProdSql => "PreProdSQL",
            GroupType::CountSql => "CountSQL",
            GroupType::SelectSql => "SelectSQL",
            GroupType::MainSql => "MainSQL",
            GroupType::PostSql => "PostSQL",
        }
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/*
    Consts:
    * MARKER_TABLE - Canonical marker name for each group, walked at resolution time
    * DDL_GROUPS - Groups reachable when a script is processed as DDL
    * MARKER_LINE - A group marker is a line comment of the form `--#Name` alone on its line
*/

const MARKER_TABLE: &[(&str, GroupType)] = &[
    ("PreSQL", GroupType::PreSql),
    ("PreProdSQL", GroupType::PreProdSql),
    ("CountSQL", GroupType::CountSql),
    ("SelectSQL", GroupType::SelectSql),
    ("MainSQL", GroupType::MainSql),
    ("PostSQL", GroupType::PostSql),
];

const DDL_GROUPS: &[GroupType] = &[
    GroupType::PreSql,
    GroupType::PreProdSql,
    GroupType::MainSql,
    GroupType::PostSql,
];

static MARKER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^--#\s*([A-Za-z][A-Za-z0-9_]*)\s*$").expect("grammar: invalid marker pattern")
});

/// Returns the marker name when `line` is a group marker, recognized or not.
/// The line is matched after trimming surrounding whitespace; anything else on
/// the line disqualifies it, so ordinary `--` comments never act as markers.
pub fn marker_name(line: &str) -> Option<&str> {
    MARKER_LINE
        .captures(line.trim())
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}

/// Resolves a marker name to its group. Names are matched case-insensitively
/// against the canonical spellings in the marker table.
pub fn resolve_marker(name: &str) -> Option<GroupType> {
    MARKER_TABLE
        .iter()
        .find(|(canonical, _)| canonical.eq_ignore_ascii_case(name))
        .map(|(_, group)| *group)
}

pub fn reachable_groups(command_type: CommandType) -> &'static [GroupType] {
    match command_type {
        CommandType::Dml => &GroupType::ALL,
        CommandType::Ddl => DDL_GROUPS,
    }
}

pub fn reachable(group: GroupType, command_type: CommandType) -> bool {
    reachable_groups(command_type).contains(&group)
}

/// Group assigned to statements that appear before any marker.
pub fn default_group(command_type: CommandType) -> GroupType {
    match command_type {
        CommandType::Dml | CommandType::Ddl => GroupType::MainSql,
    }
}
