//! Random solution text and arithmetic challenges.

use crate::rng::CaptchaRng;

/// What gets drawn and what the user must answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// Text rendered onto the canvas.
    pub drawn: String,
    /// Expected answer.
    pub solution: String,
}

/// Draw `length` symbols uniformly, with replacement, from `symbols`.
///
/// Returns `None` if `symbols` is empty.
pub fn random_text(symbols: &[char], length: usize, rng: &mut CaptchaRng) -> Option<String> {
    if symbols.is_empty() {
        return None;
    }
    (0..length).map(|_| rng.choose(symbols).copied()).collect()
}

/// Plain text challenge: the drawn text is the solution.
pub fn text_challenge(
    symbols: &[char],
    length: usize,
    rng: &mut CaptchaRng,
) -> Option<Challenge> {
    let text = random_text(symbols, length, rng)?;
    Some(Challenge {
        drawn: text.clone(),
        solution: text,
    })
}

/// Addition of two operands in `1..=9`; draws `"a+b"`, answers the sum.
pub fn random_equation(rng: &mut CaptchaRng) -> Challenge {
    let left = rng.gen_range(1..=9u32);
    let right = rng.gen_range(1..=9u32);
    Challenge {
        drawn: format!("{}+{}", left, right),
        solution: (left + right).to_string(),
    }
}
