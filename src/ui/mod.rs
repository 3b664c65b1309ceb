pub mod geometry;
pub mod month_view;
pub mod theme;
