pub mod geojson;
pub mod icons;
pub mod loader;
pub mod route;
