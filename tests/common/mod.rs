//! Shared setup for integration tests

pub mod test_helpers;

use adre_rs::physics::ColumnParameters;

/// Reference scenario of the interactive page (~6 h elapsed)
pub fn reference_parameters() -> ColumnParameters {
    ColumnParameters::default()
}

/// Reference scenario with one field overridden
pub fn parameters_with<F>(mutate: F) -> ColumnParameters
where
    F: FnOnce(&mut ColumnParameters),
{
    let mut params = ColumnParameters::default();
    mutate(&mut params);
    params
}
