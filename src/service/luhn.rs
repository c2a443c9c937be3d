//! Luhn (mod-10) checksum engine.
//!
//! Shared by the validator and the generator. Both walk the digits from the
//! rightmost one, doubling every second digit and folding doubled values
//! above 9 back into a single digit.

use rand::Rng;

use crate::domain::DigitString;
use crate::error::LuhnError;

/// Longest number the generator produces.
pub const MAX_LENGTH: usize = 19;

/// Luhn sum of `digits`, reduced mod 10.
///
/// With `double_rightmost` unset the second-from-last digit is the first one
/// doubled, which is the layout of a complete number. With it set the last
/// digit is doubled, which is the layout of a number still missing its check
/// digit.
fn luhn_sum<I>(digits: I, double_rightmost: bool) -> u32
where
    I: DoubleEndedIterator<Item = u32>,
{
    digits.rev().enumerate().fold(0, |acc, (i, digit)| {
        let value = if (i % 2 == 1) != double_rightmost {
            let doubled = digit * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            digit
        };
        (acc + value) % 10
    })
}

// luhn_sum is already reduced mod 10, so the result fits in a u8
#[allow(clippy::cast_possible_truncation)]
fn check_digit_for<I>(digits: I) -> u8
where
    I: DoubleEndedIterator<Item = u32>,
{
    ((10 - luhn_sum(digits, true)) % 10) as u8
}

/// Whether an already-normalized digit string passes the checksum.
#[must_use]
pub fn is_valid_digits(digits: &DigitString) -> bool {
    luhn_sum(digits.digits(), false) == 0
}

/// Check digit completing an already-normalized digit string.
#[must_use]
pub fn check_digit_of(digits: &DigitString) -> u8 {
    check_digit_for(digits.digits())
}

/// Whether `input` is a valid Luhn number.
///
/// Spaces and hyphens are ignored. Any other non-digit character, or an input
/// with no digits at all, makes the number invalid.
#[must_use]
pub fn is_valid_luhn(input: &str) -> bool {
    DigitString::parse(input).is_ok_and(|digits| is_valid_digits(&digits))
}

/// Compute the digit that, appended to `partial`, yields a valid number.
///
/// # Errors
///
/// Returns an error if `partial` is not a digit string (separators allowed).
pub fn check_digit(partial: &str) -> Result<u8, LuhnError> {
    let digits = DigitString::parse(partial)?;
    Ok(check_digit_of(&digits))
}

/// Ensure `prefix` and `length` describe a number the generator can build.
///
/// # Errors
///
/// Returns an error if the prefix is empty or has non-digits, or if `length`
/// does not leave room for at least the check digit, or exceeds [`MAX_LENGTH`].
pub fn validate_layout(prefix: &str, length: usize) -> Result<(), LuhnError> {
    if prefix.is_empty() {
        return Err(LuhnError::EmptyPrefix);
    }
    if let Some(c) = prefix.chars().find(|c| !c.is_ascii_digit()) {
        return Err(LuhnError::NonDigitPrefix(c));
    }
    if length <= prefix.len() || length > MAX_LENGTH {
        return Err(LuhnError::InvalidLength {
            length,
            prefix_len: prefix.len(),
        });
    }
    Ok(())
}

/// Generate a valid Luhn number of `length` digits starting with `prefix`.
///
/// The digits between the prefix and the check digit are drawn uniformly
/// from `rng`.
///
/// # Errors
///
/// Returns an error if the layout is rejected by [`validate_layout`].
pub fn generate_luhn_number<R: Rng>(
    prefix: &str,
    length: usize,
    rng: &mut R,
) -> Result<String, LuhnError> {
    validate_layout(prefix, length)?;
    Ok(fill_and_complete(prefix, length, rng))
}

/// Generate `count` numbers for the same layout.
///
/// Duplicates are possible and are not filtered.
///
/// # Errors
///
/// Returns an error if the layout is rejected by [`validate_layout`]; no
/// numbers are produced in that case.
pub fn generate_batch<R: Rng>(
    prefix: &str,
    length: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>, LuhnError> {
    validate_layout(prefix, length)?;
    Ok((0..count)
        .map(|_| fill_and_complete(prefix, length, rng))
        .collect())
}

fn fill_and_complete<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    let mut number = String::with_capacity(length);
    number.push_str(prefix);
    while number.len() < length - 1 {
        number.push(char::from(b'0' + rng.random_range(0..10u8)));
    }

    let check = check_digit_for(number.bytes().map(|b| u32::from(b - b'0')));
    number.push(char::from(b'0' + check));
    number
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_known_fixtures() {
        assert!(is_valid_luhn("49927398716"));
        assert!(!is_valid_luhn("49927398717"));
        assert!(is_valid_luhn("4111111111111111"));
        assert!(is_valid_luhn("5500000000000004"));
        assert!(is_valid_luhn("378282246310005"));
        assert!(!is_valid_luhn("4111111111111112"));
    }

    #[test]
    fn test_edge_cases() {
        assert!(is_valid_luhn("0"));
        assert!(!is_valid_luhn(""));
        assert!(!is_valid_luhn("abc"));
        assert!(!is_valid_luhn("   "));
        assert!(!is_valid_luhn("--"));
        assert!(!is_valid_luhn("4992739871a6"));
        assert!(!is_valid_luhn("5"));
        assert!(is_valid_luhn("00"));
        // "18": 1 doubled to 2, plus 8
        assert!(is_valid_luhn("18"));
    }

    #[test]
    fn test_separators_ignored() {
        assert_eq!(
            is_valid_luhn("4992 7398 716"),
            is_valid_luhn("49927398716")
        );
        assert!(is_valid_luhn("4111-1111-1111-1111"));
        assert!(is_valid_luhn(" 4111 1111-1111 1111 "));
    }

    #[test]
    fn test_validator_is_idempotent() {
        for input in ["49927398716", "49927398717", "", "0", "x1"] {
            assert_eq!(is_valid_luhn(input), is_valid_luhn(input));
        }
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit("7992739871"), Ok(3));
        assert_eq!(check_digit("4992739871"), Ok(6));
        assert_eq!(check_digit("411111111111111"), Ok(1));
        assert_eq!(check_digit("0"), Ok(0));
        assert_eq!(check_digit(""), Err(LuhnError::EmptyInput));
        assert_eq!(check_digit("12a"), Err(LuhnError::NonDigitInput('a')));
    }

    #[test]
    fn test_check_digit_of_normalized_digits() {
        let digits = DigitString::parse("7992 7398-71").unwrap();
        assert_eq!(check_digit_of(&digits), 3);
        assert_eq!(check_digit("7992 7398-71"), Ok(check_digit_of(&digits)));
    }

    #[test]
    fn test_check_digit_completes_number() {
        for partial in ["1", "12", "123", "98765432109876543"] {
            let digit = check_digit(partial).unwrap();
            assert!(is_valid_luhn(&format!("{partial}{digit}")), "{partial}");
        }
    }

    #[test]
    fn test_generated_numbers_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for (prefix, length) in [("4", 16), ("37", 15), ("6011", 16), ("36", 14), ("9", 2)] {
            for _ in 0..50 {
                let number = generate_luhn_number(prefix, length, &mut rng).unwrap();
                assert_eq!(number.len(), length);
                assert!(number.starts_with(prefix));
                assert!(is_valid_luhn(&number), "{number}");
            }
        }
    }

    #[test]
    fn test_generate_prefix_one_short() {
        let mut rng = StdRng::seed_from_u64(1);
        let number = generate_luhn_number("7992739871", 11, &mut rng).unwrap();
        assert_eq!(number, "79927398713");
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let a = generate_batch("4", 16, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_batch("4", 16, 5, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_generate_rejects_bad_layout() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            generate_luhn_number("", 16, &mut rng),
            Err(LuhnError::EmptyPrefix)
        );
        assert_eq!(
            generate_luhn_number("4 1", 16, &mut rng),
            Err(LuhnError::NonDigitPrefix(' '))
        );
        assert_eq!(
            generate_luhn_number("4111", 4, &mut rng),
            Err(LuhnError::InvalidLength {
                length: 4,
                prefix_len: 4
            })
        );
        assert!(generate_luhn_number("4", 20, &mut rng).is_err());
        assert!(generate_batch("4", 0, 3, &mut rng).is_err());
    }

    #[test]
    fn test_generate_batch_allows_duplicates() {
        // With a single free digit, 20 draws must repeat a value.
        let mut rng = StdRng::seed_from_u64(3);
        let numbers = generate_batch("411", 5, 20, &mut rng).unwrap();
        assert_eq!(numbers.len(), 20);
        assert!(numbers.iter().all(|n| is_valid_luhn(n)));
        let mut unique = numbers.clone();
        unique.sort();
        unique.dedup();
        assert!(unique.len() < numbers.len());
    }
}
