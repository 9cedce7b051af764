//! Well-known names in the declarative navigation API.

/// Prefix of navigator construction functions.
pub const NAVIGATOR_PREFIX: &str = "create";

/// Suffix of navigator construction functions.
pub const NAVIGATOR_SUFFIX: &str = "Navigator";

/// Factory that wraps a navigator into a root container.
pub const STATIC_ROOT_FACTORY: &str = "createStaticNavigation";

/// Helper that wraps a screen descriptor object.
pub const SCREEN_CONFIG_HELPER: &str = "createScreenConfig";

/// Root container element in the dynamic form.
pub const ROOT_CONTAINER: &str = "NavigationContainer";

/// Reserved configuration key holding the screen map.
pub const SCREENS_KEY: &str = "screens";

/// Reserved configuration key holding the group map.
pub const GROUPS_KEY: &str = "groups";

/// Screen-descriptor field naming the rendered component.
pub const SCREEN_FIELD: &str = "screen";

/// Screen-descriptor field with no dynamic-form equivalent.
pub const LINKING_FIELD: &str = "linking";
