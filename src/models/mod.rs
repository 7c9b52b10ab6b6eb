pub mod coordinates;
pub mod hub;
pub mod place;
pub mod suggestion;
pub mod trip;

pub use coordinates::Coordinates;
pub use hub::Hub;
pub use place::{Category, Place, PlaceKind, Visibility};
pub use suggestion::{ScoredCandidate, Suggestion, TripResponse};
pub use trip::{HubMode, ItineraryRequest, Style, TravelMode, TripQuery, TripRequest};
