pub mod insert_mode;
pub mod mouse;
pub mod normal_mode;
