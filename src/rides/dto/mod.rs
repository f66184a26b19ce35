pub mod create_ride_dto;
pub mod get_ride_dto;
pub mod list_rides_dto;
