//! Environment variables derived from [`BaseSettings`] toggles.
//!
//! The launcher merges the produced map into the child process environment.
//! Each toggle group writes its own keys, so the result depends only on the
//! toggles and never on insertion order.

use std::collections::HashMap;

use super::settings::BaseSettings;

/// Wine's per-DLL native/builtin load order.
pub const WINEDLLOVERRIDES: &str = "WINEDLLOVERRIDES";
/// Native-then-builtin overrides that route Direct3D 10/11 through DXVK.
pub const DXVK_DLL_OVERRIDES: &str = "d3d11,dxgi,d3d10core=n,b";

/// Elements shown by the DXVK overlay.
pub const DXVK_HUD: &str = "DXVK_HUD";
/// Device info, frame rate and frame-time graph.
pub const DXVK_HUD_ELEMENTS: &str = "devinfo,fps,frametimes";

/// Switches Wine to eventfd-based synchronisation.
pub const WINEESYNC: &str = "WINEESYNC";
/// Turns on the Metal performance HUD.
pub const MTL_HUD_ENABLED: &str = "MTL_HUD_ENABLED";
/// Allows Metal GPU frame capture.
pub const METAL_CAPTURE_ENABLED: &str = "METAL_CAPTURE_ENABLED";
/// MoltenVK automatic capture scope (`2` = first frame).
pub const MVK_CONFIG_AUTO_GPU_CAPTURE_SCOPE: &str = "MVK_CONFIG_AUTO_GPU_CAPTURE_SCOPE";

/// Writes the variables implied by `base` into `environment`.
///
/// Existing entries for the listed keys are overwritten; no key is ever
/// removed.
///
/// | Toggle        | Variables                                                  |
/// |---------------|------------------------------------------------------------|
/// | `dxvk`        | `WINEDLLOVERRIDES=d3d11,dxgi,d3d10core=n,b`                |
/// | `dxvk_hud`    | `DXVK_HUD=devinfo,fps,frametimes` (only with `dxvk`)       |
/// | `esync`       | `WINEESYNC=1`                                              |
/// | `metal_hud`   | `MTL_HUD_ENABLED=1`                                        |
/// | `metal_trace` | `METAL_CAPTURE_ENABLED=1`, `MVK_CONFIG_AUTO_GPU_CAPTURE_SCOPE=2` |
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use bottle_core::{derive_environment, BaseSettings};
///
/// let base = BaseSettings { esync: true, ..BaseSettings::default() };
/// let mut env = HashMap::new();
/// derive_environment(&base, &mut env);
/// assert_eq!(env.get("WINEESYNC").map(String::as_str), Some("1"));
/// ```
pub fn derive_environment(base: &BaseSettings, environment: &mut HashMap<String, String>) {
    let mut set = |key: &str, value: &str| {
        environment.insert(key.to_string(), value.to_string());
    };

    if base.dxvk {
        set(WINEDLLOVERRIDES, DXVK_DLL_OVERRIDES);
        if base.dxvk_hud {
            set(DXVK_HUD, DXVK_HUD_ELEMENTS);
        }
    }

    if base.esync {
        set(WINEESYNC, "1");
    }

    if base.metal_hud {
        set(MTL_HUD_ENABLED, "1");
    }

    if base.metal_trace {
        set(METAL_CAPTURE_ENABLED, "1");
        set(MVK_CONFIG_AUTO_GPU_CAPTURE_SCOPE, "2");
    }
}

impl BaseSettings {
    /// Method form of [`derive_environment`].
    pub fn environment_variables(&self, environment: &mut HashMap<String, String>) {
        derive_environment(self, environment);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
