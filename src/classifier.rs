use crate::imports::*;

use crate::grammar;

/*
    Types:
    * Section - The classification target opened by the most recent marker
    * Classification - Output of one pass: the grouped commands plus the drop tally
*/

// A marker naming no known group still opens a section; its statements are
// dropped rather than misfiled into the default group.
#[derive(Clone, Copy)]
enum Section {
    Group(GroupType),
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub commands: GroupedCommands,
    pub dropped: DropTally,
}

/// Assigns every statement fragment to its group in a single left-to-right
/// pass. Classification of a fragment depends only on the markers before it
/// and the active command type, never on later fragments. Fragments are never
/// merged or split; order within a group is order of appearance.
pub fn classify(items: &[ScriptItem], command_type: CommandType) -> Classification {
    let mut commands = GroupedCommands::new();
    let mut dropped = DropTally::default();
    let mut section = Section::Group(grammar::default_group(command_type));

    for item in items {
        match item {
            ScriptItem::Marker(name) => {
                section = match grammar::resolve_marker(name) {
                    Some(group) => Section::Group(group),
                    None => {
                        tracing::debug!(marker = name.as_str(), "Unrecognized group marker");
                        Section::Unrecognized
                    }
                };
            }
            ScriptItem::Statement(content) => match section {
                Section::Unrecognized => {
                    dropped.unrecognized += 1;
                    tracing::debug!("Dropped statement in unrecognized section");
                }
                Section::Group(group) if !grammar::reachable(group, command_type) => {
                    dropped.unreachable += 1;
                    tracing::debug!(
                        group = %group,
                        command_type = ?command_type,
                        "Dropped statement in unreachable group"
                    );
                }
                Section::Group(group) => {
                    commands.push(Command::new(group, content.clone()));
                }
            },
        }
    }

    Classification { commands, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitter::split_script;

    #[test]
    fn unmarked_statements_land_in_main() {
        let items = split_script("UPDATE t SET a = 1;\nUPDATE t SET a = 2;");
        let result = classify(&items, CommandType::Dml);

        assert_eq!(result.commands.count(GroupType::MainSql), 2);
        assert_eq!(result.commands.total(), 2);
        assert!(result.dropped.is_empty());
    }

    #[test]
    fn markers_open_sections_until_the_next_marker() {
        let sql = "--#PreSQL\nDROP INDEX i;\nDROP INDEX j;\n--#PostSQL\nCREATE INDEX i ON t (a);";
        let result = classify(&split_script(sql), CommandType::Dml);

        let pre = result.commands.commands(GroupType::PreSql);
        assert_eq!(pre.len(), 2);
        assert_eq!(pre[0].content, "DROP INDEX i;");
        assert_eq!(pre[1].content, "DROP INDEX j;");
        assert_eq!(result.commands.count(GroupType::PostSql), 1);
        assert_eq!(result.commands.count(GroupType::MainSql), 0);
    }

    #[test]
    fn every_group_is_present_even_when_empty() {
        let result = classify(&[], CommandType::Ddl);
        for group in GroupType::ALL {
            assert!(result.commands.commands(group).is_empty());
        }
        assert!(result.dropped.is_empty());
    }

    #[test]
    fn ddl_drops_row_check_statements() {
        let sql = "--#CountSQL\nSELECT COUNT(*) FROM t;\n--#SelectSQL\nSELECT * FROM t;\nCREATE TABLE u (a INT);";
        let result = classify(&split_script(sql), CommandType::Ddl);

        assert_eq!(result.commands.count(GroupType::CountSql), 0);
        assert_eq!(result.commands.count(GroupType::SelectSql), 0);
        assert_eq!(result.commands.total(), 0);
        assert_eq!(result.dropped.unreachable, 3);
    }

    #[test]
    fn dml_keeps_row_check_statements() {
        let sql = "--#CountSQL\nSELECT COUNT(*) FROM t;\n--#SelectSQL\nSELECT * FROM t;";
        let result = classify(&split_script(sql), CommandType::Dml);

        assert_eq!(result.commands.count(GroupType::CountSql), 1);
        assert_eq!(result.commands.count(GroupType::SelectSql), 1);
        assert!(result.dropped.is_empty());
    }

    #[test]
    fn unrecognized_sections_are_tallied_not_misfiled() {
        let sql = "--#WarmupSQL\nSELECT 1;\nSELECT 2;\n--#MainSQL\nUPDATE t SET a = 1;";
        let result = classify(&split_script(sql), CommandType::Dml);

        assert_eq!(result.dropped.unrecognized, 2);
        assert_eq!(result.commands.count(GroupType::MainSql), 1);
        assert_eq!(result.commands.total(), 1);
    }

    #[test]
    fn command_group_matches_its_list() {
        let sql = "--#PreProdSQL\nALTER TABLE t DISABLE CONSTRAINT c;";
        let result = classify(&split_script(sql), CommandType::Dml);

        let commands = result.commands.commands(GroupType::PreProdSql);
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].group, GroupType::PreProdSql);
    }

    #[test]
    fn classification_is_idempotent() {
        let sql = "--#CountSQL\nSELECT COUNT(*) FROM t;\nUPDATE t SET a = 1;";
        let items = split_script(sql);
        let first = classify(&items, CommandType::Dml);
        let second = classify(&items, CommandType::Dml);
        assert_eq!(first, second);
    }
}
