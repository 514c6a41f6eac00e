pub mod price_dto;
pub mod vehicle_dto;
