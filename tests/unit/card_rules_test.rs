// Property-based tests for card brand detection and masking
//
// Properties tested:
// 1. brand prefixes and lengths map to the expected brand
// 2. numbers of ten characters or fewer never match a brand
// 3. the masked display never leaks more than the last four digits

use marketpress_aim::checkout::CardDetails;
use marketpress_aim::core::card::{masked_display, CardBrand};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_visa_sixteen_digits(rest in "[0-9]{15}") {
        let number = format!("4{}", rest);
        prop_assert_eq!(CardBrand::detect(&number), Some(CardBrand::Visa));
    }

    #[test]
    fn test_mastercard_prefixes(second in 1u8..=5, rest in "[0-9]{14}") {
        let number = format!("5{}{}", second, rest);
        prop_assert_eq!(CardBrand::detect(&number), Some(CardBrand::Mastercard));
    }

    #[test]
    fn test_amex_prefixes(second in prop::sample::select(vec!['4', '7']), rest in "[0-9]{13}") {
        let number = format!("3{}{}", second, rest);
        prop_assert_eq!(CardBrand::detect(&number), Some(CardBrand::AmericanExpress));
        prop_assert_eq!(CardBrand::AmericanExpress.security_code_len(), 4);
    }

    #[test]
    fn test_short_numbers_never_match(number in "[0-9]{0,10}") {
        prop_assert_eq!(CardBrand::detect(&number), None);
    }

    #[test]
    fn test_mask_hides_all_but_last_four(number in "[0-9]{12,19}") {
        let masked = masked_display(&number);
        let last4 = &number[number.len() - 4..];
        let hidden = &number[..number.len() - 4];

        let suffix = format!("ending in {}", last4);

        prop_assert!(masked.ends_with(&suffix));
        prop_assert!(!masked.contains(hidden));
    }

    #[test]
    fn test_visa_needs_three_digit_code(rest in "[0-9]{15}", code in "[0-9]{4,6}") {
        let card = CardDetails::new(format!("4{}", rest), code, "12", "2030");
        let errors = card.validate();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors[0].field, "card_code");
    }
}

#[test]
fn test_discover() {
    assert_eq!(CardBrand::detect("6011111111111117"), Some(CardBrand::Discover));
    assert_eq!(CardBrand::detect("6011111111111117").unwrap().to_string(), "Discover Card");
    assert_eq!(CardBrand::detect("601111111111117"), None);
}
