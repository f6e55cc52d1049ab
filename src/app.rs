use anyhow::Result;
use ash::Entry;
use tracing::info;

use crate::vulkan::{
    extensions_registry, layers_registry, BootstrapError, DebugUtilsGuard, PhysicalDevice,
    PhysicalDeviceManager, VkInstanceGuard,
};
use crate::window::WindowManager;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const WINDOW_TITLE: &str = "Vulkan";

#[cfg(feature = "enable_validations")]
const ENABLE_VALIDATIONS: bool = true;
#[cfg(not(feature = "enable_validations"))]
const ENABLE_VALIDATIONS: bool = false;

/// Owns every process-wide handle and sequences the bootstrap: layer gate,
/// instance, optional debug messenger, device selection. Construction is
/// strictly linear and a failure at any step unwinds the guards already
/// built, in reverse acquisition order.
///
/// Field order matters: the messenger drops before the instance it is nested
/// in, and the instance drops before GLFW terminates.
pub struct App {
    debug_utils: Option<DebugUtilsGuard>,
    _physical_device: PhysicalDevice,
    _instance_guard: VkInstanceGuard,
    _entry: Entry,
    window: WindowManager,
}

impl App {
    pub fn try_new() -> Result<Self> {
        let window = WindowManager::try_new(WINDOW_WIDTH, WINDOW_HEIGHT, WINDOW_TITLE)?;

        let entry = Entry::linked();

        // Gate on layer support before anything is allocated.
        let layers = layers_registry::get_names(ENABLE_VALIDATIONS);
        if ENABLE_VALIDATIONS {
            let supported = layers_registry::is_supported(&entry, &layers)
                .map_err(BootstrapError::LayerQuery)?;
            if !supported {
                return Err(BootstrapError::LayerUnsupported(layers).into());
            }
        }

        let extensions = extensions_registry::required_names(
            window.required_instance_extensions()?,
            ENABLE_VALIDATIONS,
        );

        let instance_guard =
            VkInstanceGuard::try_new(&entry, &layers, &extensions, ENABLE_VALIDATIONS)
                .map_err(BootstrapError::Creation)?;

        let debug_utils = if ENABLE_VALIDATIONS {
            let guard = DebugUtilsGuard::try_new(&entry, &instance_guard)
                .map_err(BootstrapError::Creation)?;
            Some(guard)
        } else {
            None
        };

        let physical_device = PhysicalDeviceManager::new(&instance_guard)
            .select_device()
            .map_err(BootstrapError::Selection)?;

        Ok(Self {
            debug_utils,
            _physical_device: physical_device,
            _instance_guard: instance_guard,
            _entry: entry,
            window,
        })
    }

    /// Blocks on the window system's poll loop until the window is closed.
    pub fn run(&mut self) {
        self.window.run_event_loop();
    }
}

impl Drop for App {
    fn drop(&mut self) {
        info!("Window closed, shutting down");
        // detach the messenger before the instance guard's destructor runs
        self.debug_utils = None;
    }
}
