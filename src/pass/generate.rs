//! Password generation.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use zeroize::Zeroizing;

use super::charset::{self, Selection};
use crate::settings::GenerationConfig;

/// Generate a single password for `config`.
pub fn generate<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Zeroizing<String> {
    generate_from(config.length(), config.selection(), rng)
}

/// Generate `length` characters from the classes in `selection`.
///
/// One character is drawn from each selected class, the remainder from the combined
/// pool, and the whole sequence is shuffled so the guaranteed characters land anywhere.
/// The result is shorter than `length` only if `length < selection.count()`, which a
/// [`GenerationConfig`] rules out.
pub fn generate_from<R: Rng + ?Sized>(
    length: usize,
    selection: &Selection,
    rng: &mut R,
) -> Zeroizing<String> {
    let pool = charset::build(selection);
    let mut buf = Zeroizing::new(Vec::with_capacity(length));

    for class in selection.classes() {
        if let Some(&c) = class.alphabet().as_bytes().choose(&mut *rng) {
            buf.push(c);
        }
    }

    let remaining = length.saturating_sub(buf.len());
    for _ in 0..remaining {
        if let Some(&c) = pool.choose(&mut *rng) {
            buf.push(c);
        }
    }

    buf.shuffle(&mut *rng);

    Zeroizing::new(buf.iter().map(|&b| char::from(b)).collect())
}
