//! CPF check digits.

const CPF_LEN: usize = 11;

/// Validate an 11-digit CPF, ignoring punctuation.
///
/// Inputs with a digit count other than 11, or made of one repeated digit,
/// are invalid. Otherwise digits 10 and 11 must equal the check digits
/// computed over the 9 and 10 preceding digits.
pub fn is_valid_cpf(text: &str) -> bool {
    let digits: Vec<u32> = text.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != CPF_LEN || digits.iter().all(|&d| d == digits[0]) {
        return false;
    }
    (9..CPF_LEN).all(|position| check_digit(&digits[..position]) == digits[position])
}

/// `((Σ dᵢ·wᵢ) × 10 mod 11) mod 10` with weights counting down to 2.
fn check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    (sum * 10 % 11) % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_and_bare_valid_cpf() {
        assert!(is_valid_cpf("529.982.247-25"));
        assert!(is_valid_cpf("52998224725"));
    }

    #[test]
    fn altered_digit_fails() {
        assert!(!is_valid_cpf("529.982.247-26"));
        assert!(!is_valid_cpf("529.982.847-25"));
    }

    #[test]
    fn repeated_digits_fail() {
        assert!(!is_valid_cpf("111.111.111-11"));
        assert!(!is_valid_cpf("00000000000"));
    }

    #[test]
    fn wrong_length_fails() {
        assert!(!is_valid_cpf("5299822472"));
        assert!(!is_valid_cpf("529982247250"));
        assert!(!is_valid_cpf(""));
    }

    #[test]
    fn check_digit_weights() {
        assert_eq!(check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7]), 2);
        assert_eq!(check_digit(&[5, 2, 9, 9, 8, 2, 2, 4, 7, 2]), 5);
    }
}
