use ash::vk::{PhysicalDeviceProperties, QueueFamilyProperties};

use super::queue_families::{find_queue_families, QueueFamilyIndices};
use crate::vulkan::VkInstanceGuard;

/// A non-owning reference to host-enumerated hardware, together with the
/// properties queried at selection time. The driver owns the device; this
/// handle is chosen once and never re-validated.
pub struct PhysicalDevice {
    pub physical_device: ash::vk::PhysicalDevice,
    pub props: PhysicalDeviceProperties,
    queue_family_props: Vec<QueueFamilyProperties>,
}

impl PhysicalDevice {
    pub fn new(instance: &VkInstanceGuard, physical_device: ash::vk::PhysicalDevice) -> Self {
        let props = unsafe { instance.get_physical_device_properties(physical_device) };
        let queue_family_props =
            unsafe { instance.get_physical_device_queue_family_properties(physical_device) };

        Self {
            physical_device,
            props,
            queue_family_props,
        }
    }

    pub fn queue_family_indices(&self) -> QueueFamilyIndices {
        find_queue_families(&self.queue_family_props)
    }
}
