use crate::imports::*;

use crate::grammar;

/*
    Types:
    * ScriptItem - One raw item produced by splitting: a group marker line or a
      verbatim statement fragment
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptItem {
    Marker(String),
    Statement(String),
}

/// Splits raw script text into an ordered sequence of markers and statement
/// fragments. Fragments end at a `;` terminator (kept as part of the fragment)
/// or at a marker line, and carry their source text verbatim, original line
/// terminators included. Whitespace-only fragments are dropped.
///
/// The scan has no notion of SQL string literals or comments: a `;` inside
/// either still terminates the fragment. This is a fixed limitation of the
/// marker convention, not something callers should compensate for.
pub fn split_script(text: &str) -> Vec<ScriptItem> {
    let mut items: Vec<ScriptItem> = Vec::new();
    let mut current = String::new();

    for line in text.split_inclusive('\n') {
        if let Some(name) = grammar::marker_name(line) {
            flush_fragment(&mut current, &mut items);
            items.push(ScriptItem::Marker(name.to_string()));
            continue;
        }

        let mut rest = line;
        while let Some(idx) = rest.find(';') {
            current.push_str(&rest[..=idx]);
            flush_fragment(&mut current, &mut items);
            rest = &rest[idx + 1..];
        }
        current.push_str(rest);
    }
    flush_fragment(&mut current, &mut items);

    items
}

fn flush_fragment(current: &mut String, items: &mut Vec<ScriptItem>) {
    let fragment = current.trim();
    // A terminator with nothing in front of it is not a statement.
    if !fragment.trim_matches(';').trim().is_empty() {
        items.push(ScriptItem::Statement(fragment.to_string()));
    }
    current.clear();
}
