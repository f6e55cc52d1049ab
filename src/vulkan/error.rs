use ash::vk;
use thiserror::Error;

/// Failures while creating the instance or the debug messenger. Each
/// creation step either fully succeeds or allocates nothing, so none of
/// these leave partial state behind.
#[derive(Error, Debug)]
pub enum CreationError {
    #[error("creation request rejected by the driver: {0}")]
    HostRejected(vk::Result),
    #[error("the VK_EXT_debug_utils entry points could not be resolved")]
    ExtensionUnavailable,
    #[error("layer or extension name contains an interior nul byte: {0}")]
    InvalidName(#[from] std::ffi::NulError),
}

/// Failures while picking a physical device.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("no Vulkan-capable devices reported by the driver")]
    NoDevicesFound,
    #[error("no device exposes a graphics-capable queue family")]
    NoSuitableDevice,
}

/// Top level bootstrap failure, surfaced to main with the failing step named.
/// None of these are transient, so there is no retry path anywhere.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("requested layers are not available on this host: {0:?}")]
    LayerUnsupported(Vec<String>),
    #[error("querying instance layers failed: {0}")]
    LayerQuery(vk::Result),
    #[error(transparent)]
    Creation(#[from] CreationError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}
