//! Effects - side effects declared by the reducer

use crate::api::Endpoint;
use crate::catalog::OwnershipUpdate;
use crate::filter::FilterState;

#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch the catalog; the response is tagged with `seq`
    FetchCatalog {
        endpoint: Endpoint,
        filters: FilterState,
        seq: u64,
    },
    /// PUT one sparse ownership update
    UpdateOwnership {
        endpoint: Endpoint,
        update: OwnershipUpdate,
        seq: u64,
    },
}
