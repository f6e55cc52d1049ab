use std::ffi::CStr;

use ash::Entry;
use tracing::debug;

const VALIDATION_LAYER_NAME: &str = "VK_LAYER_KHRONOS_validation";

/// Returns the layers to request at instance creation. Only the validation
/// layer is ever requested, and only when validations are enabled, so the
/// list is empty in release-style builds.
pub fn get_names(validations_enabled: bool) -> Vec<String> {
    if validations_enabled {
        vec![VALIDATION_LAYER_NAME.to_owned()]
    } else {
        vec![]
    }
}

/// Checks that every requested layer is reported by the host. The available
/// set is queried fresh on every call rather than cached, since installed
/// layers are driver state outside this process's control.
pub fn is_supported(entry: &Entry, requested: &[String]) -> Result<bool, ash::vk::Result> {
    let available = entry
        .enumerate_instance_layer_properties()?
        .iter()
        .map(|props| {
            unsafe { CStr::from_ptr(props.layer_name.as_ptr()) }
                .to_string_lossy()
                .into_owned()
        })
        .collect::<Vec<_>>();
    debug!("Available instance layers: {}", available.join(", "));
    Ok(contains_all(requested, &available))
}

/// Subset test: true iff every requested name has an exact match in the
/// available set. Short-circuits on the first miss.
fn contains_all(requested: &[String], available: &[String]) -> bool {
    requested
        .iter()
        .all(|layer_name| available.contains(layer_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|name| (*name).to_owned()).collect()
    }

    #[test]
    fn empty_request_is_always_supported() {
        assert!(contains_all(&[], &[]));
        assert!(contains_all(&[], &names(&["VK_LAYER_KHRONOS_validation"])));
    }

    #[test]
    fn non_empty_request_against_empty_host_fails() {
        assert!(!contains_all(&names(&["VK_LAYER_KHRONOS_validation"]), &[]));
    }

    #[test]
    fn request_must_be_a_subset_not_an_intersection() {
        let available = names(&["Y", "Z"]);
        assert!(!contains_all(&names(&["X"]), &available));
        assert!(!contains_all(&names(&["X", "Y"]), &available));
        assert!(contains_all(&names(&["Y"]), &available));
        assert!(contains_all(&names(&["Z", "Y"]), &available));
    }

    #[test]
    fn layer_names_must_match_exactly() {
        let available = names(&["VK_LAYER_KHRONOS_validation"]);
        assert!(!contains_all(&names(&["VK_LAYER_KHRONOS"]), &available));
        assert!(!contains_all(&names(&["vk_layer_khronos_validation"]), &available));
    }

    #[test]
    fn get_names_is_empty_without_validations() {
        assert!(get_names(false).is_empty());
        assert_eq!(get_names(true), names(&["VK_LAYER_KHRONOS_validation"]));
    }
}
