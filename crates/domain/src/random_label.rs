//! Random DNS label generation.
//!
//! Two explicit alphabets are exposed: [`LabelAlphabet::Letters`] for labels
//! that must never contain digits (the garbage hostname) and
//! [`LabelAlphabet::Alphanumeric`] for general use.

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAlphabet {
    /// Lowercase ASCII letters only.
    Letters,
    /// Lowercase ASCII letters and digits.
    Alphanumeric,
}

impl LabelAlphabet {
    pub fn symbols(&self) -> &'static [u8] {
        match self {
            LabelAlphabet::Letters => LETTERS,
            LabelAlphabet::Alphanumeric => ALPHANUMERIC,
        }
    }
}

/// Random label drawn from the thread-local generator.
pub fn random_label(length: usize, alphabet: LabelAlphabet) -> String {
    random_label_with(&mut fastrand::Rng::new(), length, alphabet)
}

/// Random label drawn from an explicit generator, for reproducible output.
pub fn random_label_with(rng: &mut fastrand::Rng, length: usize, alphabet: LabelAlphabet) -> String {
    let symbols = alphabet.symbols();
    (0..length)
        .map(|_| symbols[rng.usize(..symbols.len())] as char)
        .collect()
}
