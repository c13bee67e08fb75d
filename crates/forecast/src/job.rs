use crate::result::ForecastError;
use crate::snapshot::InventorySnapshot;

/// A deterministic inference unit over an inventory snapshot.
///
/// Jobs consume snapshots provided by callers (the service layer builds them
/// from its scoped caches); this crate stays storage-agnostic.
pub trait ForecastJob {
    type Output;

    /// The snapshot the job will run on.
    fn input(&self) -> &InventorySnapshot;

    /// Execute the computation and return an insight.
    ///
    /// Must not mutate domain state.
    fn run(&self) -> Result<Self::Output, ForecastError>;
}
