//! Cart pricing and promotional discounts.
//!
//! Pure derivations over the cart's line items. Nothing here is cached or
//! stored: every figure is recomputed from a single snapshot of the items on
//! each read, so displayed totals can never go stale against cart contents.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::cart::CartItem;

/// Tier thresholds and promotional rates.
///
/// Defaults mirror the storefront's published offers: free shipping at $65,
/// discounted standard shipping at $35, a flat 8% tax stand-in, and 10% off
/// when ordering three or more books.
#[derive(Debug, Clone)]
pub struct PricingRules {
    /// Subtotal at which shipping is waived.
    pub free_shipping_threshold: Decimal,

    /// Subtotal at which the discounted standard rate applies.
    pub standard_shipping_threshold: Decimal,

    /// Shipping charged between the standard and free thresholds.
    pub standard_shipping_rate: Decimal,

    /// Shipping charged below the standard threshold.
    pub base_shipping_rate: Decimal,

    /// Flat tax rate applied to the subtotal. A production system delegates
    /// to a tax-jurisdiction service instead.
    pub tax_rate: Percentage,

    /// Total item quantity at which the bulk discount applies.
    pub bulk_item_count: u32,

    /// Bulk discount rate over the subtotal.
    pub bulk_rate: Percentage,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::new(65_00, 2),
            standard_shipping_threshold: Decimal::new(35_00, 2),
            standard_shipping_rate: Decimal::new(4_99, 2),
            base_shipping_rate: Decimal::new(6_99, 2),
            tax_rate: Percentage::from(0.08),
            bulk_item_count: 3,
            bulk_rate: Percentage::from(0.1),
        }
    }
}

/// A promotional discount derived from cart contents.
///
/// Discounts are value objects: recomputed on every read, never persisted,
/// so they cannot drift from the items they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discount {
    /// Shipping waived above the free-shipping threshold.
    ///
    /// Display-only: the waived charge is already reflected in the shipping
    /// tier, so the value reports what the tier below would have charged.
    FreeShipping {
        /// The standard rate the customer avoided.
        value: Decimal,
    },

    /// Percentage off for ordering multiple books.
    ///
    /// Informational at checkout: the storefront surfaces it but does not
    /// subtract it from the total.
    Bulk {
        /// 10% of the subtotal.
        value: Decimal,
    },
}

impl Discount {
    /// The discount's monetary value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        match self {
            Self::FreeShipping { value } | Self::Bulk { value } => *value,
        }
    }

    /// Customer-facing description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::FreeShipping { .. } => "Free shipping on orders over $65",
            Self::Bulk { .. } => "10% off when ordering 3+ books",
        }
    }
}

/// Every derived figure for a cart, computed in one pass from one snapshot
/// of the items.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals {
    /// Sum of unit price × quantity over all lines.
    pub subtotal: Decimal,

    /// Flat-rate tax on the subtotal.
    pub tax: Decimal,

    /// Tiered shipping charge.
    pub shipping: Decimal,

    /// `subtotal + tax + shipping`. Promotional discounts that waive
    /// shipping are already inside `shipping`; the bulk discount is
    /// informational and deliberately not subtracted.
    pub total: Decimal,

    /// Total quantity across all lines.
    pub item_count: u32,

    /// Applicable promotional discounts.
    pub discounts: Vec<Discount>,
}

/// Sum of unit price × quantity over all lines.
#[must_use]
pub fn subtotal(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum()
}

/// Flat-rate tax on a subtotal, rounded to cents.
#[must_use]
pub fn tax(rules: &PricingRules, subtotal: Decimal) -> Decimal {
    round_cents(rules.tax_rate * subtotal)
}

/// Tiered shipping charge for a subtotal.
#[must_use]
pub fn shipping(rules: &PricingRules, subtotal: Decimal) -> Decimal {
    if subtotal >= rules.free_shipping_threshold {
        Decimal::ZERO
    } else if subtotal >= rules.standard_shipping_threshold {
        rules.standard_shipping_rate
    } else {
        rules.base_shipping_rate
    }
}

/// Total quantity across all lines.
#[must_use]
pub fn item_count(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

/// Applicable promotional discounts for the given items.
#[must_use]
pub fn discounts(rules: &PricingRules, items: &[CartItem]) -> Vec<Discount> {
    discounts_for(rules, subtotal(items), item_count(items))
}

/// Derive every figure in one pass from one snapshot of the items.
#[must_use]
pub fn totals(rules: &PricingRules, items: &[CartItem]) -> CartTotals {
    let subtotal = subtotal(items);
    let tax = tax(rules, subtotal);
    let shipping = shipping(rules, subtotal);
    let item_count = item_count(items);

    CartTotals {
        subtotal,
        tax,
        shipping,
        total: subtotal + tax + shipping,
        item_count,
        discounts: discounts_for(rules, subtotal, item_count),
    }
}

fn discounts_for(rules: &PricingRules, subtotal: Decimal, item_count: u32) -> Vec<Discount> {
    let mut entries = Vec::new();

    if subtotal >= rules.free_shipping_threshold {
        entries.push(Discount::FreeShipping {
            value: rules.standard_shipping_rate,
        });
    }

    if item_count >= rules.bulk_item_count {
        entries.push(Discount::Bulk {
            value: round_cents(rules.bulk_rate * subtotal),
        });
    }

    entries
}

/// Shipping cost and display label for a given subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingEstimate {
    /// What the tier charges.
    pub cost: Decimal,

    /// Display label for the tier.
    pub description: &'static str,
}

/// Estimate shipping for a subtotal, with its display label.
#[must_use]
pub fn shipping_estimate(rules: &PricingRules, subtotal: Decimal) -> ShippingEstimate {
    let cost = shipping(rules, subtotal);

    ShippingEstimate {
        cost,
        description: if cost.is_zero() {
            "Free shipping"
        } else {
            "Standard shipping"
        },
    }
}

/// Amount saved against a struck-through comparison price.
#[must_use]
pub fn savings(compare_at: Decimal, price: Decimal) -> Decimal {
    compare_at - price
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use crate::fixtures;

    use super::*;

    fn items(prices_and_quantities: &[(i64, u32)]) -> Vec<CartItem> {
        prices_and_quantities
            .iter()
            .enumerate()
            .map(|(index, &(cents, quantity))| {
                fixtures::cart_item(&format!("prod-{index}"), Decimal::new(cents, 2), quantity)
            })
            .collect()
    }

    #[test]
    fn subtotal_weights_price_by_quantity() {
        let items = items(&[(10_00, 2), (5_50, 3)]);

        assert_eq!(subtotal(&items), Decimal::new(36_50, 2));
    }

    #[test]
    fn subtotal_of_no_items_is_zero() {
        assert_eq!(subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn tax_is_eight_percent_rounded_to_cents() {
        let rules = PricingRules::default();

        assert_eq!(tax(&rules, Decimal::new(90_00, 2)), Decimal::new(7_20, 2));
        // 29.99 * 0.08 = 2.3992, rounds half away from zero.
        assert_eq!(tax(&rules, Decimal::new(29_99, 2)), Decimal::new(2_40, 2));
    }

    #[test]
    fn shipping_tier_boundaries() {
        let rules = PricingRules::default();

        assert_eq!(shipping(&rules, Decimal::new(65_00, 2)), Decimal::ZERO);
        assert_eq!(
            shipping(&rules, Decimal::new(64_99, 2)),
            Decimal::new(4_99, 2)
        );
        assert_eq!(
            shipping(&rules, Decimal::new(35_00, 2)),
            Decimal::new(4_99, 2)
        );
        assert_eq!(
            shipping(&rules, Decimal::new(34_99, 2)),
            Decimal::new(6_99, 2)
        );
        assert_eq!(shipping(&rules, Decimal::ZERO), Decimal::new(6_99, 2));
    }

    #[test]
    fn free_shipping_discount_reports_the_tier_below() {
        let rules = PricingRules::default();
        let items = items(&[(70_00, 1)]);

        let entries = discounts(&rules, &items);

        assert_eq!(
            entries,
            vec![Discount::FreeShipping {
                value: Decimal::new(4_99, 2)
            }]
        );
    }

    #[test]
    fn bulk_discount_triggers_on_total_quantity() {
        let rules = PricingRules::default();

        // Three copies on a single line still count as three books.
        let single_line = items(&[(10_00, 3)]);
        let entries = discounts(&rules, &single_line);

        assert_eq!(
            entries,
            vec![Discount::Bulk {
                value: Decimal::new(3_00, 2)
            }]
        );

        let below = items(&[(10_00, 2)]);

        assert!(discounts(&rules, &below).is_empty());
    }

    #[test]
    fn three_books_at_thirty_dollars() {
        let rules = PricingRules::default();
        let items = items(&[(30_00, 1), (30_00, 1), (30_00, 1)]);

        let totals = totals(&rules, &items);

        assert_eq!(totals.subtotal, Decimal::new(90_00, 2));
        assert_eq!(totals.tax, Decimal::new(7_20, 2));
        assert_eq!(totals.shipping, Decimal::ZERO);
        assert_eq!(totals.item_count, 3);
        assert!(totals.discounts.contains(&Discount::FreeShipping {
            value: Decimal::new(4_99, 2)
        }));
        assert!(totals.discounts.contains(&Discount::Bulk {
            value: Decimal::new(9_00, 2)
        }));
        // The bulk discount is informational: total excludes it.
        assert_eq!(totals.total, Decimal::new(97_20, 2));
    }

    #[test]
    fn totals_of_an_empty_cart_charge_base_shipping_only() {
        let rules = PricingRules::default();

        let totals = totals(&rules, &[]);

        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.shipping, Decimal::new(6_99, 2));
        assert_eq!(totals.total, Decimal::new(6_99, 2));
        assert_eq!(totals.item_count, 0);
        assert!(totals.discounts.is_empty());
    }

    #[test]
    fn discount_accessors_expose_value_and_copy() {
        let bulk = Discount::Bulk {
            value: Decimal::new(9_00, 2),
        };

        assert_eq!(bulk.value(), Decimal::new(9_00, 2));
        assert_eq!(bulk.description(), "10% off when ordering 3+ books");
    }

    #[test]
    fn shipping_estimate_labels_the_tiers() {
        let rules = PricingRules::default();

        let free = shipping_estimate(&rules, Decimal::new(80_00, 2));
        let standard = shipping_estimate(&rules, Decimal::new(40_00, 2));

        assert_eq!(free.cost, Decimal::ZERO);
        assert_eq!(free.description, "Free shipping");
        assert_eq!(standard.cost, Decimal::new(4_99, 2));
        assert_eq!(standard.description, "Standard shipping");
    }

    #[test]
    fn savings_is_the_comparison_gap() {
        assert_eq!(
            savings(Decimal::new(39_99, 2), Decimal::new(29_99, 2)),
            Decimal::new(10_00, 2)
        );
    }
}
