//! Platform version probing.

use sysinfo::System;

/// Human-readable platform version string reported over either transport.
///
/// Linux reports `"Linux <kernel release>"`; Windows reports a coarse
/// release bucket (`"Windows 10+"`, `"Windows 8"`, `"Windows 7"`) mirroring
/// the Win32 version-helper probes; other platforms report OS name and
/// version.
pub fn platform_version() -> String {
    if cfg!(target_os = "linux") {
        format!(
            "Linux {}",
            System::kernel_version().unwrap_or_else(|| "unknown".to_string())
        )
    } else if cfg!(target_os = "windows") {
        format!("Windows {}", windows_release(System::os_version().as_deref()))
    } else {
        format!(
            "{} {}",
            System::name().unwrap_or_else(|| "Unknown".to_string()),
            System::os_version().unwrap_or_else(|| "unknown".to_string())
        )
    }
}

/// Bucket a Windows version string by its leading major version.
///
/// Anything 10 or newer reports `10+`; unparseable versions pass through.
fn windows_release(os_version: Option<&str>) -> String {
    let Some(version) = os_version else {
        return "unknown".to_string();
    };
    let major: Option<u32> = version
        .split(['.', ' '])
        .next()
        .and_then(|token| token.parse().ok());
    match major {
        Some(m) if m >= 10 => "10+".to_string(),
        Some(8) => "8".to_string(),
        Some(7) => "7".to_string(),
        _ => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_release_buckets() {
        assert_eq!(windows_release(Some("11 (22621)")), "10+");
        assert_eq!(windows_release(Some("10 (19045)")), "10+");
        assert_eq!(windows_release(Some("8.1")), "8");
        assert_eq!(windows_release(Some("7")), "7");
        assert_eq!(windows_release(None), "unknown");
    }

    #[test]
    fn test_platform_version_nonempty() {
        let version = platform_version();
        assert!(!version.is_empty());
        if cfg!(target_os = "linux") {
            assert!(version.starts_with("Linux "));
        }
    }
}
