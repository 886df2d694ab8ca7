//! End-to-end checkout scenarios with the standard price list:
//! a = 50, b = 30, c = 20, d = 15, and the promotions
//! "3 a for 130", "2 b for 45", "c & d for 30" applied in that order.

use testresult::TestResult;

use till::prelude::*;

const A: Sku = Sku::new('a');
const B: Sku = Sku::new('b');
const C: Sku = Sku::new('c');
const D: Sku = Sku::new('d');

fn prices() -> PriceTable {
    [(A, 50), (B, 30), (C, 20), (D, 15)]
        .into_iter()
        .map(|(sku, price)| (sku, Price::new(price)))
        .collect()
}

fn promotions() -> Result<Vec<Promotion>, PromotionError> {
    Ok(vec![
        BundlePromotion::new(PromotionKey::default(), 3, A, Price::new(130))?.into(),
        BundlePromotion::new(PromotionKey::default(), 2, B, Price::new(45))?.into(),
        PairPromotion::new(PromotionKey::default(), C, D, Price::new(30))?.into(),
    ])
}

#[test]
fn scenario_a_no_promotion_applies() -> TestResult {
    let prices = prices();
    let checkout = Checkout::new(&prices);

    assert_eq!(
        checkout.total_with_promotions(&Basket::from("abc"), &promotions()?)?,
        Price::new(100)
    );

    Ok(())
}

#[test]
fn scenario_b_bundles_with_leftovers() -> TestResult {
    let prices = prices();
    let checkout = Checkout::new(&prices);

    // 130 for 3 a, 2 × 45 for 4 b, then 2 a + 1 b + 1 c at unit price.
    assert_eq!(
        checkout.total_with_promotions(&Basket::from("aaaaabbbbbc"), &promotions()?)?,
        Price::new(370)
    );

    Ok(())
}

#[test]
fn scenario_c_every_promotion_applies() -> TestResult {
    let prices = prices();
    let checkout = Checkout::new(&prices);

    // 130 + 90 + 30 for the pair, then one b at 30.
    assert_eq!(
        checkout.total_with_promotions(&Basket::from("aaabbbbbcd"), &promotions()?)?,
        Price::new(280)
    );

    Ok(())
}

#[test]
fn scenario_b_receipt_itemises_the_pass() -> TestResult {
    let prices = prices();
    let receipt = Checkout::new(&prices).receipt(&Basket::from("aaaaabbbbbc"), &promotions()?)?;

    let applied: Vec<(u32, Price)> = receipt
        .applications()
        .iter()
        .map(|app| (app.matches, app.price))
        .collect();

    assert_eq!(applied, vec![(1, Price::new(130)), (2, Price::new(90))]);
    assert_eq!(
        receipt.full_price_items().iter().collect::<Vec<_>>(),
        vec![(A, 2), (B, 1), (C, 1)]
    );
    assert_eq!(receipt.subtotal(), Price::new(420));
    assert_eq!(receipt.total(), Price::new(370));
    assert_eq!(receipt.savings(), Price::new(50));

    Ok(())
}

#[test]
fn earlier_promotions_win_shared_items() -> TestResult {
    let prices = prices();
    let checkout = Checkout::new(&prices);
    let basket = Basket::from("aaab");

    let bundle = Promotion::bundle(PromotionKey::default(), 3, A, 100)?;
    let pair = Promotion::pair(PromotionKey::default(), A, B, 40)?;

    // Bundle first: 100 for 3 a, b at 30.
    assert_eq!(
        checkout.total_with_promotions(&basket, &[bundle.clone(), pair.clone()])?,
        Price::new(130)
    );

    // Pair first: 40 for a + b, the 2 a left can't form a bundle.
    assert_eq!(
        checkout.total_with_promotions(&basket, &[pair, bundle])?,
        Price::new(140)
    );

    Ok(())
}

#[test]
fn two_bundles_on_the_same_sku_apply_in_order() -> TestResult {
    let prices = prices();
    let checkout = Checkout::new(&prices);

    let promotions: Vec<Promotion> = vec![
        BundlePromotion::new(PromotionKey::default(), 5, A, Price::new(200))?.into(),
        BundlePromotion::new(PromotionKey::default(), 2, A, Price::new(90))?.into(),
    ];

    // 7 a: one bundle of 5, one of 2.
    assert_eq!(
        checkout.total_with_promotions(&Basket::from("aaaaaaa"), &promotions)?,
        Price::new(290)
    );

    Ok(())
}

#[test]
fn limited_promotion_falls_through_to_the_next() -> TestResult {
    let prices = prices();
    let checkout = Checkout::new(&prices);

    let promotions = vec![
        Promotion::from(PairPromotion::new(PromotionKey::default(), C, D, Price::new(25))?)
            .with_budget(PromotionBudget::with_application_limit(1)),
        PairPromotion::new(PromotionKey::default(), C, D, Price::new(30))?.into(),
    ];

    assert_eq!(
        checkout.total_with_promotions(&Basket::from("cdcdcd"), &promotions)?,
        Price::new(85)
    );

    Ok(())
}

#[test]
fn unknown_items_fail_checkout() -> TestResult {
    let prices = prices();
    let checkout = Checkout::new(&prices);

    assert_eq!(
        checkout.total_with_promotions(&Basket::from("aaabx"), &promotions()?),
        Err(PricingError::UnknownSku(Sku::new('x')))
    );
    assert!(matches!(
        checkout.receipt(&Basket::from("x"), &promotions()?),
        Err(PricingError::UnknownSku(_))
    ));

    Ok(())
}

#[test]
fn totals_too_large_for_a_price_are_errors() -> TestResult {
    let expensive: PriceTable = [(A, Price::try_from(i64::MAX)?)].into_iter().collect();
    let checkout = Checkout::new(&expensive);

    assert_eq!(checkout.total(&Basket::from("aaa")), Err(PricingError::Overflow));

    let prices = prices();
    let checkout = Checkout::new(&prices);
    let bundle = [Promotion::bundle(PromotionKey::default(), 1, A, i64::MAX)?];

    assert_eq!(
        checkout.total_with_promotions(&Basket::from("aaa"), &bundle),
        Err(PricingError::Overflow)
    );
    assert_eq!(
        checkout.total_with_promotions(&Basket::from("aa"), &bundle)?,
        Price::try_from(i64::MAX)?.checked_mul(2).ok_or("overflow")?
    );

    Ok(())
}
