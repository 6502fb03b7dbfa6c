//! English number words
//!
//! Used to phrase confirmation prompts such as
//! "You are about to remove Three (3) Applicants".

use crate::errors::{FormError, Result};

const MAX: u64 = 1_000_000;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell out `n` in English words
///
/// # Panics
///
/// Panics when `n` is outside `1..=1_000_000`; such a count means the
/// caller is broken, not the user.
///
/// # Example
/// ```
/// use internly_validation::words::number_to_words;
///
/// assert_eq!(number_to_words(15), "Fifteen");
/// assert_eq!(number_to_words(123), "One Hundred Twenty Three");
/// ```
pub fn number_to_words(n: u64) -> String {
    match try_number_to_words(n) {
        Ok(words) => words,
        Err(err) => panic!("{err}"),
    }
}

/// Spell out `n`, returning an error instead of panicking when out of range
pub fn try_number_to_words(n: u64) -> Result<String> {
    if !(1..=MAX).contains(&n) {
        return Err(FormError::NumberOutOfRange(n));
    }
    if n == MAX {
        return Ok("One Million".to_string());
    }

    let mut words = Vec::new();
    let thousands = n / 1000;
    if thousands > 0 {
        push_below_thousand(&mut words, thousands);
        words.push("Thousand");
    }
    push_below_thousand(&mut words, n % 1000);

    Ok(words.join(" "))
}

fn push_below_thousand(words: &mut Vec<&'static str>, n: u64) {
    let mut rest = n as usize;

    if rest >= 100 {
        words.push(ONES[rest / 100]);
        words.push("Hundred");
        rest %= 100;
    }

    if rest >= 20 {
        words.push(TENS[rest / 10]);
        rest %= 10;
    } else if rest >= 10 {
        words.push(TEENS[rest - 10]);
        rest = 0;
    }

    if rest > 0 {
        words.push(ONES[rest]);
    }
}

/// Confirmation phrase such as `"Three (3) Applicants"`
pub fn applicant_count_phrase(count: u64) -> String {
    let noun = if count == 1 { "Applicant" } else { "Applicants" };
    format!("{} ({count}) {noun}", number_to_words(count))
}
