//! Tree prefix derivation
//!
//! Each level adds exactly two characters to the prefix. In tree view those
//! are a branch glyph (`|` or `` ` `` for the last sibling) and a `-`
//! connector; when the prefix is extended again, the parent's connector turns
//! into a space and a closed corner turns into a space too, so nothing hangs
//! below a finished branch:
//!
//! ```text
//! |-src
//! | |-bin
//! | `-lib.rs
//! `-tests
//!   `-cli.rs
//! ```

/// Glyph for a sibling that has more siblings after it
pub const BRANCH: char = '|';
/// Glyph for the last sibling
pub const CORNER: char = '`';
/// Horizontal connector after the glyph
pub const CONNECTOR: char = '-';
/// Indentation used when tree view is off
pub const INDENT: &str = "  ";

/// Prefix for an entry below `parent`.
///
/// The result is both the prefix printed in front of the entry and the
/// prefix handed down to its children.
pub fn child_prefix(tree: bool, is_last: bool, parent: &str) -> String {
    if !tree {
        let mut prefix = String::with_capacity(parent.len() + INDENT.len());
        prefix.push_str(parent);
        prefix.push_str(INDENT);
        return prefix;
    }

    let mut chars: Vec<char> = parent.chars().collect();
    let len = chars.len();
    if len > 1 {
        if chars[len - 2] == CORNER {
            chars[len - 2] = ' ';
        }
        chars[len - 1] = ' ';
    }
    chars.push(if is_last { CORNER } else { BRANCH });
    chars.push(CONNECTOR);
    chars.into_iter().collect()
}
