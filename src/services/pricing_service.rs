use crate::models::route::{RouteEstimate, TransferRoute};

/// Destination option meaning the customer typed their own. Custom
/// destinations are never estimated; the UI falls back to per-day pricing.
pub const OTHER_DESTINATION: &str = "อื่นๆ";

/// Service type eligible for route-table pricing.
pub const SERVICE_AIRPORT: &str = "airport";

pub struct PricingService;

impl PricingService {
    /// Look up the fixed price for an (airport, destination) pair.
    ///
    /// `None` is not an error: it means no route-table price exists and the
    /// caller should quote the vehicle's per-day rate instead. Matching is
    /// exact on the display strings; the first row in table order wins.
    pub fn estimate(
        service_type: &str,
        airport: &str,
        destination: &str,
        routes: &[TransferRoute],
    ) -> Option<RouteEstimate> {
        if service_type != SERVICE_AIRPORT {
            return None;
        }
        if destination == OTHER_DESTINATION {
            return None;
        }

        routes
            .iter()
            .find(|r| r.from_location == airport && r.to_location == destination)
            .map(|r| RouteEstimate {
                sedan_price: r.sedan_price,
                van_price: r.van_price,
                travel_time: r.travel_time.clone(),
            })
    }
}
