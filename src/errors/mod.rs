pub mod error_mapper;

pub use error_mapper::{
    map_catalog_error, map_file_load_error, map_interaction_error, DisplayError,
};
