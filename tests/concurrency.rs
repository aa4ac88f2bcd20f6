//! Concurrency behavior of the shared entropy source.
//!
//! Many threads drawing from one `Entropy` must each see a private slice of
//! the underlying stream: outputs stay inside the alphabet, keep their
//! length, and (with overwhelming probability) never collide.

use std::collections::HashSet;
use std::thread;

use idkit::sequence::generate;
use idkit::{Alphabet, Entropy, random_letters};

const THREADS: usize = 8;
const TOKENS_PER_THREAD: usize = 50;
const TOKEN_LEN: usize = 20;

#[test]
fn concurrent_generation_yields_distinct_well_formed_tokens() {
    let entropy = Entropy::new();

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let entropy = entropy.clone();
            thread::spawn(move || {
                (0..TOKENS_PER_THREAD)
                    .map(|_| generate(&entropy, &Alphabet::LETTERS, TOKEN_LEN))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for token in handle.join().unwrap() {
            assert_eq!(token.len(), TOKEN_LEN);
            assert!(
                token.chars().all(|c| Alphabet::LETTERS.contains(c)),
                "out-of-alphabet character in {token:?}"
            );
            assert!(seen.insert(token), "duplicate token across threads");
        }
    }
    assert_eq!(seen.len(), THREADS * TOKENS_PER_THREAD);
}

#[test]
fn process_wide_source_is_safe_across_threads() {
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(|| {
                (0..TOKENS_PER_THREAD)
                    .map(|_| random_letters(TOKEN_LEN))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for token in handle.join().unwrap() {
            assert_eq!(token.len(), TOKEN_LEN);
            assert!(token.chars().all(char::is_alphabetic));
            seen.insert(token);
        }
    }
    assert_eq!(seen.len(), THREADS * TOKENS_PER_THREAD);
}
