pub mod aggregate;
pub mod builder;
pub mod decompose;
pub mod report;

pub use aggregate::{InertiaAggregator, PropertyDifference, SectionComparison};
pub use builder::SubsectionBuilder;
pub use decompose::{CrossSectionDecomposer, DecomposeParams};
pub use report::{ReportFormatter, SectionReport};

use crate::error::{DecomposeError, Result};

/// Asserts that a kernel construction step produced exactly one result.
///
/// Applied uniformly at the offset, join and cap call sites. Zero results
/// and multiple results are the same fatal ambiguity; `ambiguity` builds
/// the error from the actual count.
pub(crate) fn expect_exactly_one<T>(
    mut results: Vec<T>,
    ambiguity: impl FnOnce(usize) -> DecomposeError,
) -> Result<T> {
    if results.len() == 1 {
        Ok(results.swap_remove(0))
    } else {
        Err(ambiguity(results.len()).into())
    }
}
