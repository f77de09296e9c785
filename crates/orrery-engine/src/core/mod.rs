pub mod body;
pub mod clock;
pub mod orbit;
pub mod params;
pub mod roster;
