mod debug_utils_guard;
mod error;
pub mod extensions_registry;
mod instance_guard;
pub mod layers_registry;
mod physical_device_manager;

pub use debug_utils_guard::DebugUtilsGuard;
pub use error::{BootstrapError, CreationError, SelectionError};
pub use instance_guard::VkInstanceGuard;
pub use physical_device_manager::{PhysicalDevice, PhysicalDeviceManager, QueueFamilyIndices};
