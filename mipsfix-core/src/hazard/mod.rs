pub mod window;

pub use window::HazardWindow;
