//! Post-processing for extracted text.

/// Removes every literal triple-backtick sequence from `raw` and trims
/// surrounding whitespace.
///
/// Extraction models routinely wrap their output in markdown code fences
/// despite being told not to. The fences are stripped wherever they appear;
/// no other characters are touched.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_surrounding_fences_and_whitespace() {
        assert_eq!(
            strip_code_fences("```\nHello World\n```"),
            "Hello World".to_string()
        );
    }

    #[test]
    fn test_strips_fences_in_the_middle_of_text() {
        assert_eq!(strip_code_fences("a```b```c"), "abc");
    }

    #[test]
    fn test_leaves_fence_free_text_untouched() {
        assert_eq!(strip_code_fences("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn test_preserves_interior_whitespace_and_line_breaks() {
        // Only leading/trailing whitespace is trimmed; interior spacing is
        // part of the extracted layout and must survive.
        assert_eq!(
            strip_code_fences("  col a   col b\n  col c\n"),
            "col a   col b\n  col c"
        );
    }

    #[test]
    fn test_shorter_backtick_runs_survive() {
        // Inline code spans use one backtick and are legitimate content.
        assert_eq!(strip_code_fences("`code` and ``more``"), "`code` and ``more``");
    }

    #[test]
    fn test_output_never_contains_a_fence() {
        let inputs = [
            "``````",
            "```rust\nfn main() {}\n```",
            "before ``` middle ``` after",
            "````",
        ];
        for input in inputs {
            assert!(!strip_code_fences(input).contains("```"), "input: {input:?}");
        }
    }

    #[test]
    fn test_stripping_is_idempotent() {
        let once = strip_code_fences("```\n  text  \n```");
        assert_eq!(strip_code_fences(&once), once);
    }
}
