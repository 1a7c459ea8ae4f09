/// Strip blank lines from oracle output
///
/// The model sometimes inserts empty lines between records, which breaks the
/// spreadsheet split-by-semicolon step. Lines that are empty or whitespace
/// only are dropped; everything else is kept verbatim, in order, joined by
/// single newlines. Idempotent.
pub fn remove_blank_lines(input: &str) -> String {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_whitespace_lines_removed() {
        assert_eq!(remove_blank_lines("a\n\n b \n\nc"), "a\n b \nc");
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        assert_eq!(remove_blank_lines("x;  y ; z\n   \nnext"), "x;  y ; z\nnext");
    }

    #[test]
    fn test_idempotent() {
        let inputs = ["a\n\n b \n\nc", "", "\n\n\n", "one line", "\ttabs\t\n  \n"];
        for input in inputs {
            let once = remove_blank_lines(input);
            assert_eq!(remove_blank_lines(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_all_blank_input_collapses_to_empty() {
        assert_eq!(remove_blank_lines("\n  \n\t\n"), "");
    }
}
