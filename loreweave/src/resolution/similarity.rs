//! Edit-distance based string similarity.

/// Calculate Levenshtein distance between two strings, over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();
    let len_a = chars_a.len();
    let len_b = chars_b.len();

    let mut matrix = vec![vec![0usize; len_b + 1]; len_a + 1];

    #[allow(clippy::needless_range_loop)]
    for i in 0..=len_a {
        matrix[i][0] = i;
    }
    for j in 0..=len_b {
        matrix[0][j] = j;
    }

    for i in 1..=len_a {
        for j in 1..=len_b {
            let cost = if chars_a[i - 1] == chars_b[j - 1] { 0 } else { 1 };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[len_a][len_b]
}

/// Similarity ratio on a 0-100 scale.
///
/// Normalized against the sum of both lengths:
/// `100 * (len_a + len_b - distance) / (len_a + len_b)`.
/// Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> f64 {
    let len_sum = a.chars().count() + b.chars().count();
    if len_sum == 0 {
        return 100.0;
    }

    let distance = levenshtein(a, b);
    100.0 * (len_sum - distance) as f64 / len_sum as f64
}
