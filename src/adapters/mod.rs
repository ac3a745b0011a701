pub mod request_mapper;
pub mod result_mapper;
