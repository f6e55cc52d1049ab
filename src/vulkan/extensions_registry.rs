use ash::extensions::ext::DebugUtils;

/// Builds the instance extension list: the windowing system's mandatory
/// extensions first, in the order it reported them, with the debug utils
/// extension appended last when validations are enabled. The windowing
/// extensions and the debug extension are disjoint by construction, so no
/// deduplication is needed.
pub fn required_names(
    window_extensions: Vec<String>,
    validations_enabled: bool,
) -> Vec<String> {
    let mut extensions = window_extensions;
    if validations_enabled {
        extensions.push(debug_utils_name());
    }
    extensions
}

pub fn debug_utils_name() -> String {
    DebugUtils::name().to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_validations_the_window_list_passes_through_untouched() {
        let window_extensions = vec!["VK_KHR_surface".to_owned(), "VK_KHR_xcb_surface".to_owned()];
        let extensions = required_names(window_extensions.clone(), false);
        assert_eq!(extensions, window_extensions);
    }

    #[test]
    fn with_validations_exactly_one_trailing_name_is_added() {
        let window_extensions = vec!["VK_KHR_surface".to_owned(), "VK_KHR_xcb_surface".to_owned()];
        let extensions = required_names(window_extensions.clone(), true);
        assert_eq!(extensions.len(), window_extensions.len() + 1);
        assert_eq!(
            &extensions[..window_extensions.len()],
            window_extensions.as_slice()
        );
        assert_eq!(extensions.last().unwrap(), "VK_EXT_debug_utils");
    }

    #[test]
    fn empty_window_list_still_gets_the_debug_extension() {
        assert_eq!(required_names(vec![], true), vec!["VK_EXT_debug_utils"]);
        assert!(required_names(vec![], false).is_empty());
    }
}
