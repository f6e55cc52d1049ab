pub mod app;
pub mod logging;
pub mod vulkan;
pub mod window;
