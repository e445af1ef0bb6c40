use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::{debug, info};

use crate::{VenueDataset, error::Result};

/// Promotion table compiled into the binary.
const EMBEDDED_PROMOTIONS: &str = include_str!("promotions.json");

static EMBEDDED_DATASET: OnceCell<Arc<VenueDataset>> = OnceCell::new();

/// Load the embedded dataset that ships with the library.
///
/// The JSON is parsed and checked once per process; later calls hand out the
/// same shared table.
pub fn load_embedded_data() -> Result<Arc<VenueDataset>> {
    EMBEDDED_DATASET
        .get_or_try_init(|| {
            debug!(bytes = EMBEDDED_PROMOTIONS.len(), "Parsing embedded dataset");
            let dataset = VenueDataset::from_json_str(EMBEDDED_PROMOTIONS)?;
            info!(
                version = %dataset.metadata.version,
                venues = dataset.venues.len(),
                "Loaded embedded dataset"
            );
            Ok(Arc::new(dataset))
        })
        .cloned()
}
