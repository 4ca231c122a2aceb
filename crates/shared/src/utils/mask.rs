/// Masks a card number, keeping only the last four characters visible.
///
/// Inputs shorter than four characters are returned unchanged. The output
/// always has the same character count as the input, so a masked value
/// passed back in comes out identical.
pub fn mask_card_number(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    if chars.len() < 4 {
        return card_number.to_string();
    }

    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_sixteen_digit_number() {
        assert_eq!(mask_card_number("4111111111111111"), "************1111");
    }

    #[test]
    fn preserves_length_and_last_four() {
        let masked = mask_card_number("4000000000002222");
        assert_eq!(masked.chars().count(), 16);
        assert!(masked.ends_with("2222"));
        assert_eq!(mask_card_number("12345"), "*2345");
    }

    #[test]
    fn short_inputs_are_returned_unchanged() {
        assert_eq!(mask_card_number(""), "");
        assert_eq!(mask_card_number("123"), "123");
        assert_eq!(mask_card_number("1234"), "1234");
    }

    #[test]
    fn remasking_a_masked_value_is_identity() {
        let once = mask_card_number("4111111111111111");
        assert_eq!(mask_card_number(&once), once);
    }
}
