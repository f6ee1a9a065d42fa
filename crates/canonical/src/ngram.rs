use crate::error::CanonicalError;

/// Sentinel character appended to both ends of the input before windowing.
/// Never survives [`crate::normalize`], so padded grams cannot collide with
/// gram content drawn from a normalized string.
pub const PAD: char = '-';

/// Break `text` into overlapping grams of length `n`, left to right.
///
/// For `n > 1` the input is padded with one [`PAD`] on each side, so grams
/// anchored at the start and end of the string carry that position with
/// them. `n == 1` applies no padding. Inputs shorter than the (padded)
/// window yield an empty vector.
///
/// ```
/// use canonical::ngrams;
/// let grams = ngrams("foobar", 3).unwrap();
/// assert_eq!(grams, ["-fo", "foo", "oob", "oba", "bar", "ar-"]);
/// ```
///
/// # Errors
///
/// Returns [`CanonicalError::InvalidNgramSize`] when `n < 1`.
pub fn ngrams(text: &str, n: usize) -> Result<Vec<String>, CanonicalError> {
    if n < 1 {
        return Err(CanonicalError::InvalidNgramSize(n));
    }

    let chars: Vec<char> = if n == 1 {
        text.chars().collect()
    } else {
        std::iter::once(PAD)
            .chain(text.chars())
            .chain(std::iter::once(PAD))
            .collect()
    };

    if chars.len() < n {
        return Ok(Vec::new());
    }

    Ok(chars
        .windows(n)
        .map(|window| window.iter().collect())
        .collect())
}
