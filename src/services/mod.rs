pub mod eta;
pub mod itinerary;
pub mod normalize;
pub mod suggest;
