//! Benchmark fixtures for ptrie.
//!
//! Shared word lists so the criterion benchmarks and ad-hoc profiling runs
//! load the same data.

/// Generates `count` words over a small alphabet with skewed repetition.
///
/// Word `i` is spelled from the base-26 digits of `i % distinct`, so the
/// first `distinct` words are unique and later ones repeat them.
pub fn word_list(count: usize, distinct: usize) -> Vec<String> {
    let distinct = distinct.max(1);
    (0..count)
        .map(|i| {
            let mut n = i % distinct;
            let mut word = String::from("w");
            loop {
                word.push(char::from(b'a' + (n % 26) as u8));
                n /= 26;
                if n == 0 {
                    break;
                }
            }
            word
        })
        .collect()
}
