pub mod window;

pub use window::{trailing_window, DateWindow, EOD_WINDOW_DAYS};
