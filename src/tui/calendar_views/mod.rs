pub mod month;
pub mod selected_day;
