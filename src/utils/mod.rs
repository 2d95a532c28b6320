pub mod environment;
pub mod paths;

pub use environment::default_config_path;
pub use paths::{
    format_path_with_tilde, is_single_component, sanitize_title, validate_category,
    validate_file_size,
};
