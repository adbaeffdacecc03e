//! Blank/comment interval counting above a declaration.
//!
//! Both counters walk physical lines upward from the line right above the
//! declaration and stop at the first content line. They differ in how they
//! treat comment lines and the container's opening brace.

use decl_style_common::SourceLines;

fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with("/*") || line.starts_with('*')
}

/// Interval used by boundary rules: blank lines count, comment lines count
/// as blanks up to `comment_lines_cap`. A declaration on line 1 has an
/// effectively infinite interval and can never fall below a minimum.
pub fn boundary_interval(
    source: &dyn SourceLines,
    line: usize,
    comment_lines_cap: usize,
) -> usize {
    if line <= 1 {
        return usize::MAX;
    }

    let mut interval = 0;
    let mut comment_lines = 0;
    for n in (0..=line - 2).rev() {
        let Some(text) = source.line(n) else { break };
        let text = text.trim();

        if is_comment(text) {
            if comment_lines < comment_lines_cap {
                comment_lines += 1;
                interval += 1;
            }
            continue;
        }
        if text.is_empty() {
            interval += 1;
            continue;
        }
        break;
    }

    interval
}

/// Interval used by the member-group check: blank lines count, comment
/// lines are skipped without counting, and a container brace on its own
/// line counts as one blank before stopping the walk.
pub fn member_interval(source: &dyn SourceLines, line: usize) -> usize {
    if line <= 1 {
        return 0;
    }

    let mut interval = 0;
    for n in (0..=line - 2).rev() {
        let Some(text) = source.line(n) else { break };
        let text = text.trim();

        if is_comment(text) {
            continue;
        }
        if text.is_empty() {
            interval += 1;
            continue;
        }
        if text.starts_with('{') {
            interval += 1;
        }
        break;
    }

    interval
}

#[cfg(test)]
mod tests {
    use super::*;
    use decl_style_common::SourceBuffer;

    #[test]
    fn boundary_counts_blank_lines_exactly() {
        let source = SourceBuffer::new("int a;\n\n\nint b;\n");
        assert_eq!(boundary_interval(&source, 4, usize::MAX), 2);
    }

    #[test]
    fn boundary_stops_at_content() {
        let source = SourceBuffer::new("int a;\nint b;\n");
        assert_eq!(boundary_interval(&source, 2, usize::MAX), 0);
    }

    #[test]
    fn boundary_counts_comments_up_to_cap() {
        let text = "int a;\n// one\n// two\n// three\nint b;\n";
        let source = SourceBuffer::new(text);

        assert_eq!(boundary_interval(&source, 5, usize::MAX), 3);
        assert_eq!(boundary_interval(&source, 5, 2), 2);
        assert_eq!(boundary_interval(&source, 5, 0), 0);
    }

    #[test]
    fn boundary_skipped_comments_do_not_stop_the_walk() {
        let source = SourceBuffer::new("int a;\n\n/* doc */\n\nint b;\n");
        // Cap 0: the comment is skipped, the two blanks still count.
        assert_eq!(boundary_interval(&source, 5, 0), 2);
    }

    #[test]
    fn boundary_first_line_is_exempt() {
        let source = SourceBuffer::new("int a;\n");
        assert_eq!(boundary_interval(&source, 1, usize::MAX), usize::MAX);
    }

    #[test]
    fn member_skips_comments_without_counting() {
        let text = "int a;\n\n/**\n * Comment\n */\nint b;\n";
        let source = SourceBuffer::new(text);
        assert_eq!(member_interval(&source, 6), 1);
    }

    #[test]
    fn member_counts_brace_on_own_line_once() {
        let source = SourceBuffer::new("class C\n{\n\nint a;\n");
        assert_eq!(member_interval(&source, 4), 2);
    }

    #[test]
    fn member_brace_at_line_end_does_not_count() {
        let source = SourceBuffer::new("class C {\nint a;\n");
        assert_eq!(member_interval(&source, 2), 0);
    }

    #[test]
    fn member_first_line_has_zero_interval() {
        let source = SourceBuffer::new("int a;\n");
        assert_eq!(member_interval(&source, 1), 0);
    }
}
