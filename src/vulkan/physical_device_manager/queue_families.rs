use ash::vk::{QueueFamilyProperties, QueueFlags};

/// Records which queue family indices were found on a device. Presence is a
/// tagged optional so that "family 0 found" is never conflated with "no
/// family found".
#[derive(Debug)]
pub struct QueueFamilyIndices {
    /// family capable of running graphics commands
    pub graphics_family: Option<u32>,
}

impl QueueFamilyIndices {
    /// True when every required family has been recorded.
    pub fn is_complete(&self) -> bool {
        self.graphics_family.is_some()
    }
}

/// Scans a device's queue families in order and records the first one with
/// at least one queue and the graphics capability, stopping at the first
/// match. Families advertising zero queues never match, whatever their flags.
pub fn find_queue_families(queue_family_properties: &[QueueFamilyProperties]) -> QueueFamilyIndices {
    let graphics_family = queue_family_properties
        .iter()
        .enumerate()
        .find(|(_, props)| {
            props.queue_count > 0 && props.queue_flags.contains(QueueFlags::GRAPHICS)
        })
        .map(|(index, _)| index as u32);

    QueueFamilyIndices { graphics_family }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(queue_count: u32, queue_flags: QueueFlags) -> QueueFamilyProperties {
        QueueFamilyProperties::builder()
            .queue_count(queue_count)
            .queue_flags(queue_flags)
            .build()
    }

    #[test]
    fn no_families_means_no_index() {
        assert!(!find_queue_families(&[]).is_complete());
    }

    #[test]
    fn index_zero_is_a_valid_match() {
        let indices = find_queue_families(&[family(1, QueueFlags::GRAPHICS)]);
        assert_eq!(indices.graphics_family, Some(0));
        assert!(indices.is_complete());
    }

    #[test]
    fn zero_queue_families_never_match_even_when_flagged() {
        let indices = find_queue_families(&[
            family(0, QueueFlags::GRAPHICS),
            family(4, QueueFlags::GRAPHICS),
        ]);
        assert_eq!(indices.graphics_family, Some(1));
    }

    #[test]
    fn scan_records_the_first_matching_family() {
        let indices = find_queue_families(&[
            family(2, QueueFlags::TRANSFER),
            family(8, QueueFlags::GRAPHICS | QueueFlags::COMPUTE),
            family(8, QueueFlags::GRAPHICS),
        ]);
        assert_eq!(indices.graphics_family, Some(1));
    }

    #[test]
    fn non_graphics_families_leave_the_record_absent() {
        let indices = find_queue_families(&[
            family(2, QueueFlags::TRANSFER),
            family(1, QueueFlags::COMPUTE),
        ]);
        assert_eq!(indices.graphics_family, None);
    }
}
