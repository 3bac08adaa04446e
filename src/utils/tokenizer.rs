/// Split document text into whitespace-separated tokens.
///
/// Positions are assigned in split order starting at 0 and do not depend on
/// whether a token is later accepted by the tree.
pub fn split_tokens(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.split_whitespace().enumerate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tokens() {
        let tokens: Vec<_> = split_tokens("ACGT  cgta\n\tTTAG\r\n").collect();
        assert_eq!(tokens, vec![(0, "ACGT"), (1, "cgta"), (2, "TTAG")]);
    }

    #[test]
    fn test_split_tokens_empty() {
        assert_eq!(split_tokens("").count(), 0);
        assert_eq!(split_tokens(" \n\t ").count(), 0);
        assert_eq!(split_tokens("  A C  G ").count(), 3);
    }

    #[test]
    fn test_ids_keep_position_of_bad_tokens() {
        let tokens: Vec<_> = split_tokens("AC N!x GT").collect();
        assert_eq!(tokens[2], (2, "GT"));
    }
}
