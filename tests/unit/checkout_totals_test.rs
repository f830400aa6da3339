// Property-based tests for checkout totals
//
// Properties tested:
// 1. subtotal = sum of price × quantity over the cart
// 2. a coupon replaces the running total before shipping and tax are added
// 3. the x_amount value always carries two decimal places
// 4. sub-cent tax rounds the total half away from zero

use marketpress_aim::checkout::{CartLine, CheckoutAdjustments, CheckoutTotals};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn cart_from(lines: &[(u64, u32)]) -> Vec<CartLine> {
    lines
        .iter()
        .enumerate()
        .map(|(i, (cents, quantity))| CartLine {
            product_id: i as u64,
            variation: 0,
            sku: None,
            name: format!("Item {}", i),
            permalink: String::new(),
            price: Decimal::new(*cents as i64, 2),
            quantity: *quantity,
        })
        .collect()
}

proptest! {
    #[test]
    fn test_subtotal_is_sum_of_lines(
        lines in prop::collection::vec((1u64..1_000_000, 1u32..50), 0..10)
    ) {
        let cart = cart_from(&lines);
        let expected: Decimal = lines
            .iter()
            .map(|(cents, qty)| Decimal::new(*cents as i64, 2) * Decimal::from(*qty))
            .sum();

        let totals = CheckoutTotals::compute(&cart, &CheckoutAdjustments::default());
        prop_assert_eq!(totals.subtotal, expected);
        prop_assert_eq!(totals.total, expected);
    }

    #[test]
    fn test_coupon_then_shipping_and_tax(
        lines in prop::collection::vec((1u64..100_000, 1u32..5), 1..5),
        coupon_cents in 0u64..10_000,
        shipping_cents in 0u64..5_000,
        tax_cents in 0u64..5_000
    ) {
        let cart = cart_from(&lines);
        let adjustments = CheckoutAdjustments {
            coupon_total: Some(Decimal::new(coupon_cents as i64, 2)),
            shipping: Some(Decimal::new(shipping_cents as i64, 2)),
            tax: Some(Decimal::new(tax_cents as i64, 2)),
        };

        let totals = CheckoutTotals::compute(&cart, &adjustments);
        let expected = Decimal::new((coupon_cents + shipping_cents + tax_cents) as i64, 2);
        prop_assert_eq!(totals.total, expected);
    }

    #[test]
    fn test_amount_param_has_two_decimals(cents in 0u64..100_000_000) {
        let cart = cart_from(&[(cents.max(1), 1)]);
        let totals = CheckoutTotals::compute(&cart, &CheckoutAdjustments::default());
        let amount = totals.amount_param();

        let (_, fraction) = amount.split_once('.').expect("amount has a decimal point");
        prop_assert_eq!(fraction.len(), 2);
    }

    #[test]
    fn test_sub_cent_tax_rounds_half_up(cents in 1u64..100_000, tax_mills in 0u64..100_000) {
        let cart = cart_from(&[(cents, 1)]);
        let adjustments = CheckoutAdjustments {
            coupon_total: None,
            shipping: None,
            tax: Some(Decimal::new(tax_mills as i64, 3)),
        };

        let totals = CheckoutTotals::compute(&cart, &adjustments);
        let mills = cents * 10 + tax_mills;
        let expected = Decimal::new(((mills + 5) / 10) as i64, 2);
        prop_assert_eq!(totals.total, expected);
        prop_assert_eq!(totals.amount_param(), format!("{:.2}", expected));
    }
}

#[test]
fn test_whole_dollar_amount() {
    let cart = cart_from(&[(1000, 3)]);
    let totals = CheckoutTotals::compute(
        &cart,
        &CheckoutAdjustments {
            coupon_total: None,
            shipping: Some(dec!(5)),
            tax: None,
        },
    );

    assert_eq!(totals.total, dec!(35));
    assert_eq!(totals.amount_param(), "35.00");
}
