//! Output formatting
//!
//! Fixed-width text layout for entry lines, per-path headers and footers, and
//! the grand total block. The layout is column-exact so that output can be
//! compared byte for byte.

use crate::enumerate::DirError;
use crate::stats::Summary;
use std::io::Write;

/// Width of the name column
pub const NAME_WIDTH: usize = 54;
/// Visible part of a name that overflows the column in verbose mode
pub const TRUNCATED_WIDTH: usize = 51;
/// Marker appended to a truncated name
pub const ELLIPSIS: &str = "...";
/// Width of the header rules
pub const RULE_WIDTH: usize = 100;

const VERBOSE_HEADER: &str =
    "Name                                                        User:Group           Size    Blocks Type ";

/// Name column: prefix and name, left-justified to [`NAME_WIDTH`].
///
/// In verbose mode an overflowing name is cut to [`TRUNCATED_WIDTH`]
/// characters followed by [`ELLIPSIS`]; otherwise it is printed in full.
pub fn name_field(prefix: &str, name: &str, verbose: bool) -> String {
    let full = format!("{}{}", prefix, name);
    if verbose && full.chars().count() > NAME_WIDTH {
        let mut cut: String = full.chars().take(TRUNCATED_WIDTH).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        format!("{:<width$}", full, width = NAME_WIDTH)
    }
}

/// Owner, group, size, blocks and type tag
pub fn verbose_columns(user: &str, group: &str, size: u64, blocks: u64, tag: char) -> String {
    format!("  {:>8}:{:<8}  {:>10}  {:>8}  {}", user, group, size, blocks, tag)
}

/// Inline line for a directory that could not be opened
pub fn error_line(prefix: &str, err: &DirError) -> String {
    format!("{}ERROR: {}", prefix, err)
}

/// Column header and rule printed above each path in summary mode
pub fn write_header(out: &mut dyn Write, verbose: bool) -> std::io::Result<()> {
    if verbose {
        writeln!(out, "{}", VERBOSE_HEADER)?;
    } else {
        writeln!(out, "{:<width$}", "Name", width = RULE_WIDTH)?;
    }
    write_rule(out)
}

pub fn write_rule(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Rule, summary sentence and blank line printed below each path
pub fn write_summary(out: &mut dyn Write, stats: &Summary, verbose: bool) -> std::io::Result<()> {
    write_rule(out)?;
    let sentence = stats.sentence();
    if verbose {
        writeln!(out, "{:<68.68}   {:>14} {:>9}", sentence, stats.size, stats.blocks)?;
    } else {
        writeln!(out, "{}", sentence)?;
    }
    writeln!(out)
}

/// Totals over all analyzed paths
pub fn write_grand_total(
    out: &mut dyn Write,
    paths: usize,
    total: &Summary,
    verbose: bool,
) -> std::io::Result<()> {
    writeln!(out, "Analyzed {} directories:", paths)?;
    writeln!(out, "  total # of files:        {:>16}", total.files)?;
    writeln!(out, "  total # of directories:  {:>16}", total.dirs)?;
    writeln!(out, "  total # of links:        {:>16}", total.links)?;
    writeln!(out, "  total # of pipes:        {:>16}", total.fifos)?;
    writeln!(out, "  total # of sockets:      {:>16}", total.socks)?;
    if verbose {
        writeln!(out, "  total file size:         {:>16}", total.size)?;
        writeln!(out, "  total # of blocks:       {:>16}", total.blocks)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_name_field_padding() {
        let field = name_field("|-", "a.txt", false);
        assert_eq!(field.len(), NAME_WIDTH);
        assert!(field.starts_with("|-a.txt "));
    }

    #[test]
    fn test_truncation_boundary() {
        let exact = "x".repeat(NAME_WIDTH - 2);
        assert_eq!(name_field("|-", &exact, true), format!("|-{}", exact));

        let over = "y".repeat(NAME_WIDTH - 1);
        let field = name_field("|-", &over, true);
        assert_eq!(field.len(), TRUNCATED_WIDTH + ELLIPSIS.len());
        assert!(field.ends_with("yyy..."));
    }

    #[test]
    fn test_no_truncation_without_verbose() {
        let long = "z".repeat(80);
        assert_eq!(name_field("", &long, false), long);
    }

    #[test]
    fn test_verbose_columns() {
        assert_eq!(
            verbose_columns("root", "root", 10, 8, ' '),
            "      root:root              10         8   "
        );
    }

    #[test]
    fn test_header_widths() {
        let plain = render(|out| write_header(out, false));
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines[0].len(), RULE_WIDTH);
        assert_eq!(lines[1], "-".repeat(RULE_WIDTH));

        let verbose = render(|out| write_header(out, true));
        assert!(verbose.starts_with("Name"));
        assert!(verbose.lines().next().unwrap().ends_with("Blocks Type "));
    }

    #[test]
    fn test_summary_block() {
        let stats = Summary {
            files: 1,
            dirs: 1,
            size: 4106,
            blocks: 16,
            ..Default::default()
        };
        let plain = render(|out| write_summary(out, &stats, false));
        assert_eq!(
            plain,
            format!(
                "{}\n1 file, 1 directory, 0 links, 0 pipes, and 0 sockets\n\n",
                "-".repeat(RULE_WIDTH)
            )
        );

        let verbose = render(|out| write_summary(out, &stats, true));
        let line = verbose.lines().nth(1).unwrap();
        assert_eq!(line.len(), 68 + 3 + 14 + 1 + 9);
        assert!(line.ends_with("          4106        16"));
    }

    #[test]
    fn test_grand_total() {
        let total = Summary {
            files: 3,
            size: 30,
            ..Default::default()
        };
        let plain = render(|out| write_grand_total(out, 2, &total, false));
        assert!(plain.starts_with("Analyzed 2 directories:\n"));
        assert!(plain.contains("  total # of files:                       3\n"));
        assert!(!plain.contains("total file size"));

        let verbose = render(|out| write_grand_total(out, 2, &total, true));
        assert!(verbose.contains("  total file size:                       30\n"));
    }

    #[test]
    fn test_error_line() {
        assert_eq!(
            error_line("| `-", &DirError::PermissionDenied),
            "| `-ERROR: Permission denied"
        );
    }
}
