//! GFM strikethrough: `~~text~~`. Tokenized as a delimiter run like
//! emphasis, but only a run of exactly one or two tildes is meaningful;
//! GFM requires the closing run to match the opening run's length
//! (effectively always 2, since runs of 1 don't delimit anything on
//! GitHub) and ignores the flanking "intraword" exception `_` has.

/// Counts a leading run of `~` (GFM caps meaningful runs at 2).
pub fn tilde_run_len(s: &str) -> usize {
    s.chars().take_while(|&c| c == '~').count().min(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_at_two() {
        assert_eq!(tilde_run_len("~~~~x"), 2);
    }

    #[test]
    fn single_tilde() {
        assert_eq!(tilde_run_len("~x"), 1);
    }
}
