use std::ffi::CStr;

use ash::{
    extensions::ext::DebugUtils,
    vk::{
        Bool32, DebugUtilsMessageSeverityFlagsEXT, DebugUtilsMessageTypeFlagsEXT,
        DebugUtilsMessengerCallbackDataEXT, DebugUtilsMessengerCreateInfoEXT,
        DebugUtilsMessengerCreateInfoEXTBuilder, DebugUtilsMessengerEXT,
    },
    Entry,
};
use tracing::{event, Level};

use super::error::CreationError;
use super::instance_guard::VkInstanceGuard;

const CREATE_MESSENGER_FN_NAME: &CStr = unsafe {
    CStr::from_bytes_with_nul_unchecked(b"vkCreateDebugUtilsMessengerEXT\0")
};

/// RAII for the debug utils messenger. The messenger's lifetime is strictly
/// nested inside the instance's: it is created after the instance and must
/// be destroyed before it, which the orchestrator's field ordering enforces.
pub struct DebugUtilsGuard {
    debug_utils: DebugUtils,
    messenger: DebugUtilsMessengerEXT,
}

impl DebugUtilsGuard {
    /// Registers the message callback with the driver. The messenger entry
    /// points belong to an optional extension, so they are resolved by name
    /// first; a host without the extension is an `ExtensionUnavailable`
    /// failure rather than a crash on a null function pointer.
    pub fn try_new(entry: &Entry, instance: &VkInstanceGuard) -> Result<Self, CreationError> {
        let create_fn = unsafe {
            (entry.static_fn().get_instance_proc_addr)(
                instance.handle(),
                CREATE_MESSENGER_FN_NAME.as_ptr(),
            )
        };
        if create_fn.is_none() {
            return Err(CreationError::ExtensionUnavailable);
        }

        let debug_utils = DebugUtils::new(entry, instance);
        let debug_create_info = Self::get_debug_create_info();
        let messenger = unsafe {
            debug_utils.create_debug_utils_messenger(&debug_create_info, None)
        }
        .map_err(CreationError::HostRejected)?;

        Ok(Self {
            debug_utils,
            messenger,
        })
    }

    pub fn get_debug_create_info<'a>() -> DebugUtilsMessengerCreateInfoEXTBuilder<'a> {
        DebugUtilsMessengerCreateInfoEXT::builder()
            .message_severity(
                DebugUtilsMessageSeverityFlagsEXT::ERROR
                    | DebugUtilsMessageSeverityFlagsEXT::WARNING
                    | DebugUtilsMessageSeverityFlagsEXT::INFO
                    | DebugUtilsMessageSeverityFlagsEXT::VERBOSE,
            )
            .message_type(
                DebugUtilsMessageTypeFlagsEXT::GENERAL
                    | DebugUtilsMessageTypeFlagsEXT::PERFORMANCE
                    | DebugUtilsMessageTypeFlagsEXT::VALIDATION,
            )
            .pfn_user_callback(Some(vulkan_debug_utils_callback))
    }
}

impl Drop for DebugUtilsGuard {
    fn drop(&mut self) {
        unsafe {
            self.debug_utils
                .destroy_debug_utils_messenger(self.messenger, None)
        }
    }
}

/// Forwards every driver message to the log sink on the calling thread and
/// never asks the driver to abort the originating call.
unsafe extern "system" fn vulkan_debug_utils_callback(
    message_severity: DebugUtilsMessageSeverityFlagsEXT,
    message_type: DebugUtilsMessageTypeFlagsEXT,
    p_callback_data: *const DebugUtilsMessengerCallbackDataEXT,
    _p_user_data: *mut std::ffi::c_void,
) -> Bool32 {
    let message = format!(
        "{:?}",
        std::ffi::CStr::from_ptr((*p_callback_data).p_message)
    );
    let ty = format!("{:?}", message_type).to_lowercase();

    match message_severity {
        DebugUtilsMessageSeverityFlagsEXT::VERBOSE => {
            event!(Level::TRACE, message = message, ty = ty)
        }
        DebugUtilsMessageSeverityFlagsEXT::INFO => {
            event!(Level::INFO, message = message, ty = ty)
        }
        DebugUtilsMessageSeverityFlagsEXT::WARNING => {
            event!(Level::WARN, message = message, ty = ty)
        }
        DebugUtilsMessageSeverityFlagsEXT::ERROR => {
            event!(Level::ERROR, message = message, ty = ty)
        }
        _ => {
            event!(Level::WARN, message = message, ty = ty, "unknown severity")
        }
    }
    // dont skip driver
    ash::vk::FALSE
}
