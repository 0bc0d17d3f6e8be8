use alloc::vec::Vec;

use rand::Rng;

use crate::Error;

/// Picks `count` elements from `source`, each independently and uniformly at random.
///
/// Selection is with replacement: the same element may be picked more than once. With
/// `count == 0` the result is empty whatever `source` holds; an empty `source` with a non-zero
/// `count` is an [`Error::EmptySource`].
///
/// Pass a seeded generator (e.g. `StdRng::seed_from_u64`) to get a reproducible sample.
pub fn sample<T: Clone, R: Rng + ?Sized>(
    source: &[T],
    count: usize,
    rng: &mut R,
) -> Result<Vec<T>, Error> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if source.is_empty() {
        rwarn!(count, "sample: empty source");
        return Err(Error::EmptySource { count });
    }

    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let i = rng.random_range(0..source.len());
        out.push(source[i].clone());
    }
    Ok(out)
}

/// Same as [`sample`], using the thread-local generator.
#[cfg(feature = "std")]
pub fn sample_thread_rng<T: Clone>(source: &[T], count: usize) -> Result<Vec<T>, Error> {
    sample(source, count, &mut rand::rng())
}
