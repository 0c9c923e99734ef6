//! Levenshtein edit distance.

/// Minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`.
///
/// Characters are compared as Unicode scalar values and every edit costs 1.
/// Uses the full `(len(a) + 1) × (len(b) + 1)` table, which is fine for the
/// short option strings it is meant for.
///
/// # Examples
///
/// ```
/// use quiz_domain::matching::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j] // deletion
                    .min(table[i][j - 1]) // insertion
                    .min(table[i - 1][j - 1]) // substitution
            };
        }
    }

    table[a.len()][b.len()]
}
