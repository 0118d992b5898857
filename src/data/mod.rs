pub mod geolocate;
pub mod openweather;
