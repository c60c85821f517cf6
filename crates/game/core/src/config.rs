/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Field-of-view radius used when the per-tick FOV refresh runs.
    pub fov_radius: u32,
    /// When false the FOV refresh hook is invoked with radius 0, which
    /// renderers treat as "reveal everything" (debug floors, tests).
    pub do_fov: bool,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of simultaneous conditions on one fighter.
    pub const MAX_CONDITIONS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FOV_RADIUS: u32 = 8;
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 26;

    pub fn new() -> Self {
        Self {
            fov_radius: Self::DEFAULT_FOV_RADIUS,
            do_fov: true,
        }
    }

    pub fn with_fov_radius(fov_radius: u32) -> Self {
        Self {
            fov_radius,
            do_fov: true,
        }
    }

    /// Effective radius handed to the FOV refresh hook.
    pub fn effective_fov_radius(&self) -> u32 {
        if self.do_fov { self.fov_radius } else { 0 }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
