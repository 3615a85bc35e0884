use std::collections::HashMap;

/// Length in bytes of the longest common prefix of `a` and `b`.
///
/// Always lands on a char boundary of both strings.
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((idx, _), _)| idx)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// Ratio rewarding a shared prefix.
///
/// When the common prefix is shorter than the shorter string the result is
/// `prefix / shorter`; when one string is a prefix of the other it is
/// `shorter / longer`. Lengths are counted in chars.
pub fn prefix_ratio(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let min_len = len_a.min(len_b);
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 0.0;
    }

    let prefix = a.chars().zip(b.chars()).take_while(|(ca, cb)| ca == cb).count();
    if prefix < min_len {
        prefix as f64 / min_len as f64
    } else {
        min_len as f64 / max_len as f64
    }
}

/// Sørensen–Dice coefficient over character bigrams, whitespace ignored.
///
/// Returns a value in `[0, 1]`; identical strings score 1.
pub fn dice_similarity(a: &str, b: &str) -> f64 {
    let first: Vec<char> = a.chars().filter(|c| !c.is_whitespace()).collect();
    let second: Vec<char> = b.chars().filter(|c| !c.is_whitespace()).collect();

    if first == second {
        return 1.0;
    }
    if first.len() < 2 || second.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for pair in first.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut intersection = 0usize;
    for pair in second.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    (2.0 * intersection as f64) / ((first.len() + second.len() - 2) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len("- [A](#a)\n- [B](#b)", "- [A](#a)\n- [C](#c)"), 13);
        assert_eq!(common_prefix_len("abc", "abcdef"), 3);
        assert_eq!(common_prefix_len("", "abc"), 0);
        // é is two bytes; the prefix must stop before it
        assert_eq!(common_prefix_len("café", "cafe"), 3);
        assert_eq!(common_prefix_len("日本語", "日本人"), 6);
    }

    #[test]
    fn test_prefix_ratio() {
        assert_eq!(prefix_ratio("abcd", "abcd"), 1.0);
        assert_eq!(prefix_ratio("ab", "abcd"), 0.5);
        assert_eq!(prefix_ratio("abxx", "abyy"), 0.5);
        assert_eq!(prefix_ratio("", ""), 0.0);
        assert_eq!(prefix_ratio("", "abc"), 0.0);
    }

    #[test]
    fn test_dice_similarity() {
        assert_eq!(dice_similarity("night", "night"), 1.0);
        assert_eq!(dice_similarity("a", "b"), 0.0);
        assert_eq!(dice_similarity("abc", "xyz"), 0.0);
        // night/nacht share only "ht"
        assert!((dice_similarity("night", "nacht") - 0.25).abs() < 1e-9);
        // whitespace is ignored
        assert_eq!(dice_similarity("a b c", "abc"), 1.0);
    }
}
