use std::ffi::CString;
use std::ops::Deref;
use std::os::raw::c_char;

use ash::{
    vk::{make_api_version, ApplicationInfo, InstanceCreateInfo, API_VERSION_1_0},
    Entry, Instance,
};
use tracing::info;

use super::debug_utils_guard::DebugUtilsGuard;
use super::error::CreationError;

const API_VERSION: u32 = API_VERSION_1_0;
const ENGINE_NAME: &str = "No Engine";

/// Wrapper around the ash Instance to ensure the expected Vulkan calls are
/// made, especially destruction on drop. The instance is created once and
/// destroyed exactly once, after every object derived from it.
pub struct VkInstanceGuard {
    instance: Instance,
}

impl VkInstanceGuard {
    /// Submits the instance creation request to the driver. The caller is
    /// responsible for having validated `layers` against the host first;
    /// nothing is re-checked here.
    pub fn try_new(
        entry: &Entry,
        layers: &[String],
        extensions: &[String],
        validations_enabled: bool,
    ) -> Result<Self, CreationError> {
        let app_name = CString::new(env!("CARGO_PKG_NAME"))?;
        let engine_name = CString::new(ENGINE_NAME)?;

        let version_major = env!("CARGO_PKG_VERSION_MAJOR").parse::<u32>().unwrap_or(0);
        let version_minor = env!("CARGO_PKG_VERSION_MINOR").parse::<u32>().unwrap_or(1);
        let version_patch = env!("CARGO_PKG_VERSION_PATCH").parse::<u32>().unwrap_or(0);
        let app_version = make_api_version(0, version_major, version_minor, version_patch);
        let engine_version = make_api_version(0, 1, 0, 0);

        let app_info = ApplicationInfo::builder()
            .application_name(&app_name)
            .application_version(app_version)
            .engine_name(&engine_name)
            .engine_version(engine_version)
            .api_version(API_VERSION);

        let layers = layers
            .iter()
            .map(|layer| CString::new(layer.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let layer_name_pointers: Vec<*const c_char> =
            layers.iter().map(|layer| layer.as_ptr()).collect();

        let extensions = extensions
            .iter()
            .map(|extension| CString::new(extension.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let extension_name_pointers: Vec<*const c_char> = extensions
            .iter()
            .map(|extension| extension.as_ptr())
            .collect();

        let mut create_info = InstanceCreateInfo::builder()
            .application_info(&app_info)
            .enabled_layer_names(&layer_name_pointers)
            .enabled_extension_names(&extension_name_pointers);

        // Chaining the messenger create info covers create/destroy of the
        // instance itself, which the messenger proper cannot observe.
        let mut debug_create_info = DebugUtilsGuard::get_debug_create_info();
        if validations_enabled {
            create_info = create_info.push_next(&mut debug_create_info);
        }

        let instance = unsafe { entry.create_instance(&create_info, None) }
            .map_err(CreationError::HostRejected)?;
        info!("Vulkan instance created");

        Ok(Self { instance })
    }
}

impl Drop for VkInstanceGuard {
    fn drop(&mut self) {
        unsafe { self.instance.destroy_instance(None) }
    }
}

impl Deref for VkInstanceGuard {
    type Target = Instance;

    fn deref(&self) -> &Self::Target {
        &self.instance
    }
}
