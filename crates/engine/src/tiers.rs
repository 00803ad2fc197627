//! Quantity-tiered per-mark pricing.
//!
//! Two parallel tier tables exist, selected by job area: marks up to 5 sq in
//! use the small-area rates, anything larger the large-area rates.
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Largest job area (square inches) still priced from the small-area table.
const SMALL_AREA_MAX: Decimal = dec!(5);

/// One quantity bucket and its per-mark rate.
///
/// `min_quantity..max_quantity` is half-open unless `max_is_inclusive` is
/// set, in which case `max_quantity` itself belongs to the bucket too.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub label: String,
    pub price_per_mark: Decimal,
    pub min_quantity: u32,
    pub max_quantity: u32,
    pub max_is_inclusive: bool,
}

impl PricingTier {
    pub fn new(
        label: &str,
        price_per_mark: Decimal,
        min_quantity: u32,
        max_quantity: u32,
        max_is_inclusive: bool,
    ) -> Self {
        Self {
            label: label.to_string(),
            price_per_mark,
            min_quantity,
            max_quantity,
            max_is_inclusive,
        }
    }

    fn matches(&self, quantity: u32) -> bool {
        quantity >= self.min_quantity
            && (quantity < self.max_quantity
                || (self.max_is_inclusive && quantity <= self.max_quantity))
    }
}

/// The two tier tables plus the area threshold that selects between them.
///
/// Tables are scanned in declared order and the first matching tier wins. In
/// the large-area table the "101-500" and "500-999" tiers both claim
/// quantity 500; declared order resolves it to "101-500". That boundary is
/// how existing quotes were priced, so it stays.
#[derive(Clone, Debug, PartialEq)]
pub struct TierSchedule {
    small_area: Vec<PricingTier>,
    large_area: Vec<PricingTier>,
}

impl TierSchedule {
    pub fn new(small_area: Vec<PricingTier>, large_area: Vec<PricingTier>) -> Self {
        Self {
            small_area,
            large_area,
        }
    }

    /// The rate card the shop currently quotes from.
    pub fn standard() -> Self {
        Self::new(
            vec![
                PricingTier::new("1-10", dec!(300.00), 0, 11, false),
                PricingTier::new("11-20", dec!(250.00), 11, 21, false),
                PricingTier::new("21-30", dec!(200.00), 21, 31, false),
                PricingTier::new("31-40", dec!(150.00), 31, 41, false),
                PricingTier::new("41-50", dec!(100.00), 41, 51, false),
                PricingTier::new("51-100", dec!(21.00), 51, 101, false),
                PricingTier::new("101-500", dec!(19.00), 101, 500, true),
                PricingTier::new("501-999", dec!(17.00), 501, 1000, false),
                PricingTier::new("1000 and up", dec!(15.00), 1000, 5000, false),
            ],
            vec![
                PricingTier::new("1-10", dec!(300.00), 0, 11, false),
                PricingTier::new("11-20", dec!(250.00), 11, 21, false),
                PricingTier::new("21-30", dec!(200.00), 21, 31, false),
                PricingTier::new("31-40", dec!(150.00), 31, 41, false),
                PricingTier::new("41-50", dec!(100.00), 41, 51, false),
                PricingTier::new("51-100", dec!(17.00), 51, 101, false),
                PricingTier::new("101-500", dec!(16.00), 101, 500, true),
                PricingTier::new("500-999", dec!(15.00), 500, 1000, false),
                PricingTier::new("1000 and up", dec!(14.00), 1000, 5000, false),
            ],
        )
    }

    /// Tier table for a job of the given area, in match order.
    pub fn tiers_for_area(&self, area: Decimal) -> &[PricingTier] {
        if area <= SMALL_AREA_MAX {
            &self.small_area
        } else {
            &self.large_area
        }
    }

    /// Per-mark rate for a (quantity, area) pair.
    ///
    /// Quantities past the last tier fall back to the last tier's rate
    /// rather than erroring.
    pub fn price_for_quantity(&self, quantity: u32, area: Decimal) -> Decimal {
        let tiers = self.tiers_for_area(area);
        tiers
            .iter()
            .find(|tier| tier.matches(quantity))
            .or_else(|| tiers.last())
            .map_or(Decimal::ZERO, |tier| tier.price_per_mark)
    }
}
