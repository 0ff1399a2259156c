use crate::imports::*;

/*
    Types:
    * Command - A single classified statement: its group plus the verbatim fragment text
    * GroupedCommands - Mapping from every group to its insertion-ordered command list
    * DropTally - Count of fragments discarded during classification, by reason
    * StageReport - Summary of one staging pass: stored counts per group plus the drop tally
*/

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Command {
    pub group: GroupType,
    pub content: String,
}

impl Command {
    pub fn new(group: GroupType, content: impl Into<String>) -> Self {
        Command {
            group,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedCommands {
    groups: HashMap<GroupType, Vec<Command>>,
}

impl Default for GroupedCommands {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupedCommands {
    /// Every group is present from the start; a group nothing matched stays
    /// an empty list rather than a missing key.
    pub fn new() -> Self {
        let mut groups = HashMap::with_capacity(GroupType::ALL.len());
        for group in GroupType::ALL {
            groups.insert(group, Vec::new());
        }
        GroupedCommands { groups }
    }

    pub fn push(&mut self, command: Command) {
        self.groups.entry(command.group).or_default().push(command);
    }

    pub fn commands(&self, group: GroupType) -> &[Command] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, group: GroupType) -> usize {
        self.commands(group).len()
    }

    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterates the six groups in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupType, &[Command])> {
        GroupType::ALL
            .into_iter()
            .map(|group| (group, self.commands(group)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropTally {
    /// Fragments in a section opened by a marker naming no known group.
    pub unrecognized: usize,
    /// Fragments whose group is not reachable for the active command type.
    pub unreachable: usize,
}

impl DropTally {
    pub fn total(&self) -> usize {
        self.unrecognized + self.unreachable
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub counts: HashMap<GroupType, usize>,
    pub dropped: DropTally,
}

impl StageReport {
    pub fn stored(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, group: GroupType) -> usize {
        self.counts.get(&group).copied().unwrap_or(0)
    }
}
