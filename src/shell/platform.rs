//! Platform naming.

/// Name of the host operating system as used for the artifact directory.
///
/// Uses the conventional system names (`Linux`, `Darwin`, `Windows`, ...)
/// so the layout matches what other build tooling on the same machine
/// produces. Unlisted targets fall back to the compile-time OS identifier.
pub fn os_name() -> &'static str {
    os_name_for(std::env::consts::OS)
}

/// Map a `std::env::consts::OS` value to its system name.
pub fn os_name_for(os: &'static str) -> &'static str {
    match os {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "dragonfly" => "DragonFly",
        "solaris" | "illumos" => "SunOS",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_common_platforms() {
        assert_eq!(os_name_for("linux"), "Linux");
        assert_eq!(os_name_for("macos"), "Darwin");
        assert_eq!(os_name_for("windows"), "Windows");
        assert_eq!(os_name_for("freebsd"), "FreeBSD");
    }

    #[test]
    fn unknown_platform_passes_through() {
        assert_eq!(os_name_for("haiku"), "haiku");
    }

    #[test]
    fn host_name_is_not_empty() {
        assert!(!os_name().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn host_linux_is_capitalized() {
        assert_eq!(os_name(), "Linux");
    }
}
