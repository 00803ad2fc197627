pub use catalog::{Material, MaterialCatalog};
pub use error::EngineError;
pub use pricing::{CUTTING_RATE_PER_MINUTE, CuttingBreakdown, EngravingBreakdown, VAT_RATE};
pub use tiers::{PricingTier, TierSchedule};

mod catalog;
mod error;
mod pricing;
mod tiers;

type ResultEngine<T> = Result<T, EngineError>;

/// Stateless quoting engine over immutable catalogs.
///
/// Every calculation is a pure function of its arguments and the catalogs
/// fixed at construction, so one `Engine` can be shared freely across
/// request tasks.
#[derive(Clone, Debug)]
pub struct Engine {
    materials: MaterialCatalog,
    tiers: TierSchedule,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// The material catalog, in insertion order.
    pub fn list_materials(&self) -> &[Material] {
        self.materials.materials()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    materials: Option<MaterialCatalog>,
    tiers: Option<TierSchedule>,
}

impl EngineBuilder {
    /// Replace the standard material catalog.
    pub fn materials(mut self, materials: MaterialCatalog) -> EngineBuilder {
        self.materials = Some(materials);
        self
    }

    /// Replace the standard tier schedule.
    pub fn tiers(mut self, tiers: TierSchedule) -> EngineBuilder {
        self.tiers = Some(tiers);
        self
    }

    /// Construct `Engine`, falling back to the standard catalogs.
    pub fn build(self) -> Engine {
        Engine {
            materials: self.materials.unwrap_or_else(MaterialCatalog::standard),
            tiers: self.tiers.unwrap_or_else(TierSchedule::standard),
        }
    }
}
