/*!
# Lumen Client

Client-side rendering layer of the Lumen voxel game.

This crate decides, per frame, which HUD layers, world chunks and render
passes execute and in what order. Everything that touches the GPU, the
window or image decoding sits behind traits (`RenderBackend`,
`TextureBackend`, `InputProvider`) so the frame logic runs without a GPU.

## Architecture

- **HudManager**: HUD registry, key bindings, open/close/focus state and
  the two HUD draw passes (2D-in-3D, then 3D-to-2D)
- **Scene**: world, player, lights and particles driven through
  `input -> update -> render`
- **SceneRenderer**: fixed pass order (HUDs, skybox, world, particles)
- **ChunkVisibility**: ordered chain of `Culling` strategies gating chunk
  draw calls
- **TextureManager**: named texture cache over a `TextureBackend`
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod utils;
pub mod timer;
pub mod input;
pub mod render;
pub mod culling;
pub mod texture;
pub mod hud;
pub mod scene;

// Main lumen namespace module
pub mod lumen {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::{SceneConfig, HudBindings};

    // Polled wall-clock gate
    pub use crate::timer::Timer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, MemoryLogger};
    }

    // Window / input collaborator
    pub mod input {
        pub use crate::input::*;
    }

    // Draw-submission seam
    pub mod render {
        pub use crate::render::*;
    }

    // Visibility culling
    pub mod culling {
        pub use crate::culling::*;
    }

    // Texture cache
    pub mod texture {
        pub use crate::texture::*;
    }

    // HUD registry and HUD types
    pub mod hud {
        pub use crate::hud::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod utils {
        pub use crate::utils::*;
    }
}

// Re-export math library at crate root
pub use glam;
