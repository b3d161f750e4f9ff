use fibercheck_core::{AddressQuery, CoverageResult, CoverageStatus};

/// Where coverage answers come from.
///
/// Real coverage determination (partner feeds, geocoding) lives outside this
/// service; implementations adapt it to this call.
pub trait CoverageSource: Send + Sync {
    fn lookup(&self, query: &AddressQuery) -> Vec<CoverageResult>;
}

/// Source that answers every query with the same single result.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubCoverage;

impl CoverageSource for StubCoverage {
    fn lookup(&self, _query: &AddressQuery) -> Vec<CoverageResult> {
        vec![CoverageResult {
            tech: Some("FTTH".to_string()),
            max_down_mbps: Some(1000.0),
            max_up_mbps: Some(300.0),
            ..CoverageResult::new("Fibra Demo", CoverageStatus::Available)
        }]
    }
}
