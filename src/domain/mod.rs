pub mod countdown;
pub mod date_format;
pub mod render;
pub mod timeline;
pub mod trip;
pub mod widget;
