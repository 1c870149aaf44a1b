use std::io;

use tracing::debug;

use crate::{catalogue::Catalogue, shared::geo::Coordinate};

use super::{BaseRequest, Error, InputDocument};

/// Reads and validates a full input document.
pub fn read_document(reader: impl io::Read) -> Result<InputDocument, Error> {
    let document: InputDocument = serde_json::from_reader(reader)?;
    document.render_settings.validate()?;
    Ok(document)
}

/// Bulk-builds the catalogue: every stop first, then every route, then the
/// declared road distances. Routes may reference stops declared later in the
/// array, distances require both endpoints, so the passes are ordered.
pub fn build_catalogue(base_requests: &[BaseRequest]) -> Catalogue {
    let mut catalogue = Catalogue::new();

    debug!("Adding stops...");
    for request in base_requests {
        if let BaseRequest::Stop(stop) = request {
            catalogue.add_stop(
                &stop.name,
                Coordinate {
                    latitude: stop.latitude,
                    longitude: stop.longitude,
                },
            );
        }
    }

    debug!("Adding routes...");
    for request in base_requests {
        if let BaseRequest::Bus(bus) = request {
            catalogue.add_route(&bus.name, &bus.stops, bus.is_roundtrip);
        }
    }

    debug!("Adding road distances...");
    for request in base_requests {
        if let BaseRequest::Stop(stop) = request {
            for (to, meters) in &stop.road_distances {
                catalogue.set_distance(&stop.name, to, *meters);
            }
        }
    }

    catalogue
}
