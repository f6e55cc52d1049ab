mod physical_device;
mod queue_families;

use std::ffi::CStr;

use tracing::info;

use super::error::SelectionError;
use super::VkInstanceGuard;

pub use self::physical_device::PhysicalDevice;
pub use self::queue_families::QueueFamilyIndices;

/// Wraps the Vulkan APIs to pick a physical device for the instance.
pub struct PhysicalDeviceManager<'instance> {
    instance_guard: &'instance VkInstanceGuard,
}

impl<'instance> PhysicalDeviceManager<'instance> {
    pub fn new(instance_guard: &'instance VkInstanceGuard) -> Self {
        Self { instance_guard }
    }

    /// Enumerates the physical devices on this machine and returns the first
    /// one with a graphics-capable queue family. Devices are considered in
    /// the driver's enumeration order and later candidates are ignored once
    /// one matches; there is no scoring.
    pub fn select_device(&self) -> Result<PhysicalDevice, SelectionError> {
        let physical_devices = unsafe { self.instance_guard.enumerate_physical_devices() }
            .map_err(|_| SelectionError::NoDevicesFound)?
            .into_iter()
            .map(|pd| PhysicalDevice::new(self.instance_guard, pd))
            .collect::<Vec<_>>();

        let indices_per_device = physical_devices
            .iter()
            .map(|pd| pd.queue_family_indices())
            .collect::<Vec<_>>();
        let selected = first_suitable(&indices_per_device)?;

        let physical_device = physical_devices
            .into_iter()
            .nth(selected)
            .ok_or(SelectionError::NoSuitableDevice)?;
        let device_name =
            unsafe { CStr::from_ptr(physical_device.props.device_name.as_ptr()) }.to_string_lossy();
        info!("Selected physical device: {}", device_name);

        Ok(physical_device)
    }
}

/// Returns the position of the first device whose required queue families
/// are all present. An empty enumeration and an enumeration with no capable
/// device are distinct failures.
fn first_suitable(indices_per_device: &[QueueFamilyIndices]) -> Result<usize, SelectionError> {
    if indices_per_device.is_empty() {
        return Err(SelectionError::NoDevicesFound);
    }
    indices_per_device
        .iter()
        .position(|indices| indices.is_complete())
        .ok_or(SelectionError::NoSuitableDevice)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(graphics_family: Option<u32>) -> QueueFamilyIndices {
        QueueFamilyIndices { graphics_family }
    }

    #[test]
    fn empty_enumeration_is_no_devices_found() {
        assert!(matches!(
            first_suitable(&[]),
            Err(SelectionError::NoDevicesFound)
        ));
    }

    #[test]
    fn no_capable_device_is_no_suitable_device() {
        let devices = [indices(None), indices(None), indices(None)];
        assert!(matches!(
            first_suitable(&devices),
            Err(SelectionError::NoSuitableDevice)
        ));
    }

    #[test]
    fn the_only_capable_device_is_picked_wherever_it_sits() {
        for k in 0..4 {
            let devices = (0..4)
                .map(|i| indices((i == k).then_some(0)))
                .collect::<Vec<_>>();
            assert_eq!(first_suitable(&devices).unwrap(), k);
        }
    }

    #[test]
    fn the_first_of_several_capable_devices_wins() {
        let devices = [indices(None), indices(Some(2)), indices(Some(0))];
        assert_eq!(first_suitable(&devices).unwrap(), 1);
    }
}
