//! Quote calculators for engraving and cutting jobs.
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{Engine, EngineError, ResultEngine};

/// VAT applied to the per-piece base price.
pub const VAT_RATE: Decimal = dec!(0.12);

/// Machine-time rate for cutting jobs, currency per minute.
pub const CUTTING_RATE_PER_MINUTE: Decimal = dec!(26.00);

const SECONDS_PER_MINUTE: Decimal = dec!(60);

/// Per-piece price breakdown for an engraving job.
///
/// All fields are currency per piece, except `total_area` (square inches)
/// and `total_price` (currency for the whole job).
#[derive(Clone, Debug, PartialEq)]
pub struct EngravingBreakdown {
    pub total_area: Decimal,
    pub price_per_mark: Decimal,
    pub base_price: Decimal,
    pub flat_fee_per_piece: Decimal,
    pub vat: Decimal,
    pub final_price_per_piece: Decimal,
    pub total_price: Decimal,
}

/// Per-piece price breakdown for a cutting job.
#[derive(Clone, Debug, PartialEq)]
pub struct CuttingBreakdown {
    pub seconds: Decimal,
    pub minutes: Decimal,
    pub rate_per_minute: Decimal,
    pub variable_cutting_cost: Decimal,
    pub base_price: Decimal,
    pub flat_fee_per_piece: Decimal,
    pub vat: Decimal,
    pub final_price_per_piece: Decimal,
    pub total_price: Decimal,
}

impl Engine {
    /// Prices an engraving job.
    ///
    /// The per-mark rate comes from the tier schedule for the job's
    /// (quantity, area); an optional flat fee is amortized evenly across the
    /// pieces before VAT.
    pub fn calculate_engraving(
        &self,
        quantity: u32,
        length: Decimal,
        width: Decimal,
        flat_fee: bool,
        flat_fee_amount: Decimal,
    ) -> ResultEngine<EngravingBreakdown> {
        let total_area = length * width;
        let price_per_mark = self.tiers.price_for_quantity(quantity, total_area);

        let flat_fee_per_piece = amortized_flat_fee(quantity, flat_fee, flat_fee_amount)?;
        let base_price = price_per_mark + flat_fee_per_piece;

        let vat = base_price * VAT_RATE;
        let final_price_per_piece = base_price + vat;
        let total_price = final_price_per_piece * Decimal::from(quantity);

        Ok(EngravingBreakdown {
            total_area,
            price_per_mark,
            base_price,
            flat_fee_per_piece,
            vat,
            final_price_per_piece,
            total_price,
        })
    }

    /// Prices a cutting job from the time the laser spends on the contour.
    pub fn calculate_cutting(
        &self,
        quantity: u32,
        total_perimeter: Decimal,
        cutting_speed: Decimal,
        flat_fee: bool,
        flat_fee_amount: Decimal,
    ) -> ResultEngine<CuttingBreakdown> {
        if cutting_speed <= Decimal::ZERO {
            return Err(EngineError::InvalidCuttingSpeed(
                "cutting speed must be > 0".to_string(),
            ));
        }

        let seconds = total_perimeter / cutting_speed;
        let minutes = seconds / SECONDS_PER_MINUTE;
        let variable_cutting_cost = minutes * CUTTING_RATE_PER_MINUTE;

        let flat_fee_per_piece = amortized_flat_fee(quantity, flat_fee, flat_fee_amount)?;
        let base_price = variable_cutting_cost + flat_fee_per_piece;

        let vat = base_price * VAT_RATE;
        let final_price_per_piece = base_price + vat;
        let total_price = final_price_per_piece * Decimal::from(quantity);

        Ok(CuttingBreakdown {
            seconds,
            minutes,
            rate_per_minute: CUTTING_RATE_PER_MINUTE,
            variable_cutting_cost,
            base_price,
            flat_fee_per_piece,
            vat,
            final_price_per_piece,
            total_price,
        })
    }

    /// Material surcharge for a job of the given area.
    ///
    /// An unknown product is "no material charge", not an error.
    pub fn material_cost(&self, product: &str, area: Decimal) -> Decimal {
        match self.materials.find_by_product(product) {
            Ok(material) => material.price_per_sq_in * area,
            Err(_) => Decimal::ZERO,
        }
    }
}

fn amortized_flat_fee(quantity: u32, flat_fee: bool, flat_fee_amount: Decimal) -> ResultEngine<Decimal> {
    if !flat_fee {
        return Ok(Decimal::ZERO);
    }
    if quantity == 0 {
        return Err(EngineError::InvalidQuantity(
            "quantity must be > 0 to amortize a flat fee".to_string(),
        ));
    }
    Ok(flat_fee_amount / Decimal::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Engine {
        Engine::builder().build()
    }

    #[test]
    fn engraving_without_flat_fee() {
        let breakdown = engine()
            .calculate_engraving(10, dec!(2), dec!(3), false, Decimal::ZERO)
            .unwrap();

        assert_eq!(breakdown.total_area, dec!(6));
        assert_eq!(breakdown.price_per_mark, dec!(300.00));
        assert_eq!(breakdown.base_price, dec!(300.00));
        assert_eq!(breakdown.flat_fee_per_piece, Decimal::ZERO);
        assert_eq!(breakdown.vat, dec!(36.00));
        assert_eq!(breakdown.final_price_per_piece, dec!(336.00));
        assert_eq!(breakdown.total_price, dec!(3360.00));
    }

    #[test]
    fn engraving_amortizes_flat_fee_across_pieces() {
        let breakdown = engine()
            .calculate_engraving(4, dec!(1), dec!(1), true, dec!(100))
            .unwrap();

        assert_eq!(breakdown.flat_fee_per_piece, dec!(25));
        assert_eq!(breakdown.base_price, dec!(325));
        assert_eq!(breakdown.vat, dec!(39));
        assert_eq!(breakdown.final_price_per_piece, dec!(364));
        assert_eq!(breakdown.total_price, dec!(1456));
    }

    #[test]
    fn engraving_rejects_flat_fee_over_zero_pieces() {
        let result = engine().calculate_engraving(0, dec!(1), dec!(1), true, dec!(100));
        assert!(matches!(result, Err(EngineError::InvalidQuantity(_))));
    }

    #[test]
    fn cutting_prices_from_contour_time() {
        let breakdown = engine()
            .calculate_cutting(2, dec!(120), dec!(10), false, Decimal::ZERO)
            .unwrap();

        assert_eq!(breakdown.seconds, dec!(12));
        assert_eq!(breakdown.minutes, dec!(0.2));
        assert_eq!(breakdown.rate_per_minute, dec!(26.00));
        assert_eq!(breakdown.variable_cutting_cost, dec!(5.2));
        assert_eq!(breakdown.base_price, dec!(5.2));
        assert_eq!(breakdown.vat, dec!(0.624));
        assert_eq!(breakdown.final_price_per_piece, dec!(5.824));
        assert_eq!(breakdown.total_price, dec!(11.648));
    }

    #[test]
    fn cutting_rejects_non_positive_speed() {
        let engine = engine();
        assert!(matches!(
            engine.calculate_cutting(2, dec!(120), Decimal::ZERO, false, Decimal::ZERO),
            Err(EngineError::InvalidCuttingSpeed(_))
        ));
        assert!(matches!(
            engine.calculate_cutting(2, dec!(120), dec!(-10), false, Decimal::ZERO),
            Err(EngineError::InvalidCuttingSpeed(_))
        ));
    }

    #[test]
    fn cutting_rejects_flat_fee_over_zero_pieces() {
        let result = engine().calculate_cutting(0, dec!(120), dec!(10), true, dec!(100));
        assert!(matches!(result, Err(EngineError::InvalidQuantity(_))));
    }

    #[test]
    fn material_cost_scales_with_area() {
        assert_eq!(engine().material_cost("Basswood - 3mm", dec!(10)), dec!(7.00));
    }

    #[test]
    fn unknown_material_costs_nothing() {
        assert_eq!(
            engine().material_cost("NonexistentMaterial", dec!(10)),
            Decimal::ZERO
        );
        assert_eq!(engine().material_cost("None", dec!(10)), Decimal::ZERO);
    }

    #[test]
    fn quotes_are_deterministic() {
        let engine = engine();
        let first = engine
            .calculate_cutting(3, dec!(90), dec!(15), true, dec!(60))
            .unwrap();
        let second = engine
            .calculate_cutting(3, dec!(90), dec!(15), true, dec!(60))
            .unwrap();
        assert_eq!(first, second);
    }
}
