mod collision;
mod validator;

pub use collision::{CollisionError, check_rules, detect_collisions, eligible_rules};
pub use validator::{ValidationError, validate_file, validate_files, validate_path};
