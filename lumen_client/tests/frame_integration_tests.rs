//! Integration tests for a full client frame
//!
//! Drives HUD registry, scene and texture cache through the public API
//! against recording backends. No GPU required.
//!
//! Run with: cargo test --test frame_integration_tests

use std::path::Path;
use lumen_client::glam::{IVec3, Vec3, Vec4};
use lumen_client::lumen::{Result, SceneConfig};
use lumen_client::lumen::hud::{HotBarHud, HudManager, MenuHud};
use lumen_client::lumen::input::{InputProvider, InputState, KeyCode, CONTEXT_GENERAL, CONTEXT_HUDS};
use lumen_client::lumen::render::{
    MeshHandle, Model3D, Quad2D, Rect2D, RenderBackend, ShaderHandle, TextureId, Viewport,
};
use lumen_client::lumen::scene::{Scene, SkyboxRenderer, World, SHORTCUT_DEPTH_MODE};
use lumen_client::lumen::texture::{TextureBackend, TextureData, TextureManager, TextureSettings};

// ============================================================================
// RECORDING BACKENDS
// ============================================================================

const SHADERS: &[&str] = &["2Din3D", "Shader3DTo2D", "skybox", "world", "depth", "particles"];

/// Render backend recording the name of every call
#[derive(Default)]
struct RecordingBackend {
    calls: Vec<String>,
}

impl RecordingBackend {
    fn index_of(&self, call: &str) -> usize {
        self.calls
            .iter()
            .position(|c| c == call)
            .unwrap_or_else(|| panic!("'{}' not recorded in {:?}", call, self.calls))
    }

    fn count(&self, prefix: &str) -> usize {
        self.calls.iter().filter(|c| c.starts_with(prefix)).count()
    }
}

impl RenderBackend for RecordingBackend {
    fn shader(&self, name: &str) -> Option<ShaderHandle> {
        SHADERS.iter().position(|s| *s == name).map(|i| ShaderHandle(i as u32))
    }

    fn attach_shader(&mut self, shader: ShaderHandle) -> Result<()> {
        self.calls.push(format!("attach:{}", SHADERS[shader.0 as usize]));
        Ok(())
    }

    fn detach_shader(&mut self) -> Result<()> {
        self.calls.push("detach".to_string());
        Ok(())
    }

    fn begin_2d(&mut self) -> Result<()> {
        self.calls.push("begin_2d".to_string());
        Ok(())
    }

    fn end_2d(&mut self) -> Result<()> {
        self.calls.push("end_2d".to_string());
        Ok(())
    }

    fn set_scissor(&mut self, _rect: Rect2D, _enabled: bool) -> Result<()> {
        self.calls.push("scissor".to_string());
        Ok(())
    }

    fn set_viewport(&mut self, _rect: Rect2D) -> Result<()> {
        self.calls.push("viewport".to_string());
        Ok(())
    }

    fn clear(&mut self, _color: Vec4) -> Result<()> {
        self.calls.push("clear".to_string());
        Ok(())
    }

    fn draw_quad(&mut self, _quad: &Quad2D) -> Result<()> {
        self.calls.push("quad".to_string());
        Ok(())
    }

    fn draw_model(&mut self, _model: &Model3D) -> Result<()> {
        self.calls.push("model".to_string());
        Ok(())
    }

    fn attach_mesh(&mut self, _mesh: MeshHandle) -> Result<()> {
        Ok(())
    }

    fn detach_mesh(&mut self) -> Result<()> {
        Ok(())
    }

    fn attach_texture(&mut self, _texture: TextureId) -> Result<()> {
        Ok(())
    }

    fn detach_texture(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw_mesh(&mut self, _mesh: MeshHandle) -> Result<()> {
        self.calls.push("mesh".to_string());
        Ok(())
    }

    fn update_uniform(&mut self, name: &str, _data: &[u8]) -> Result<()> {
        self.calls.push(format!("uniform:{}", name));
        Ok(())
    }

    fn draw_chunk(&mut self, _chunk: IVec3) -> Result<()> {
        self.calls.push("chunk".to_string());
        Ok(())
    }

    fn draw_particles(&mut self, _positions: &[Vec3]) -> Result<()> {
        self.calls.push("particles".to_string());
        Ok(())
    }
}

/// Texture backend producing 1x1 white images for every path
#[derive(Default)]
struct WhiteTextures {
    live: usize,
}

impl TextureBackend for WhiteTextures {
    fn decode(&mut self, _path: &Path) -> Option<TextureData> {
        Some(TextureData::new(vec![255; 4], 1, 1))
    }

    fn release(&mut self, _data: TextureData) -> bool {
        true
    }

    fn create(&mut self, _id: TextureId, _settings: &TextureSettings, _layers: &[TextureData]) -> Result<()> {
        self.live += 1;
        Ok(())
    }

    fn delete(&mut self, _id: TextureId) {
        self.live -= 1;
    }
}

fn viewport() -> Viewport {
    Viewport::new(1280, 720)
}

// ============================================================================
// FRAME TESTS
// ============================================================================

#[test]
fn test_integration_full_frame_pass_order() {
    let mut textures = TextureManager::new(WhiteTextures::default(), "resources/textures");
    let sky = textures.load("sky", "sky.png", TextureSettings::default()).unwrap();

    let mut backend = RecordingBackend::default();
    let mut huds = HudManager::new();
    huds.add("hotbar", Box::new(HotBarHud::default()));
    let mut input = InputState::new(1280, 720);
    huds.open_by_name("hotbar", &mut input);

    let mut scene = Scene::new(SceneConfig::default(), World::flat(2));
    let skybox = SkyboxRenderer::new(&backend, MeshHandle(0), sky.id).unwrap();
    scene.renderer_mut().set_skybox(Some(skybox));

    scene.input(&mut input, &huds);
    scene.update();
    scene.render(&mut backend, &huds, &viewport()).unwrap();

    let hud_2d = backend.index_of("attach:2Din3D");
    let hud_3d = backend.index_of("attach:Shader3DTo2D");
    let sky_pass = backend.index_of("attach:skybox");
    let world = backend.index_of("attach:world");
    assert_eq!(backend.index_of("clear"), 0);
    assert!(hud_2d < hud_3d && hud_3d < sky_pass && sky_pass < world);
    assert!(backend.count("quad") >= 9);
    assert!(backend.count("chunk") > 0);
    assert_eq!(backend.count("chunk"), scene.renderer().stats().chunks_drawn);

    scene.cleanup();
    textures.cleanup();
    assert_eq!(textures.backend().live, 0);
}

#[test]
fn test_integration_focus_hud_blocks_gameplay() {
    let mut backend = RecordingBackend::default();
    let mut huds = HudManager::new();
    let menu = huds.add("menu", Box::new(MenuHud::new(["Resume", "Quit"])));
    huds.can_reverse_opening_with(KeyCode::KeyM, menu);

    let mut input = InputState::new(1280, 720);
    input.bind_shortcut(CONTEXT_GENERAL, SHORTCUT_DEPTH_MODE, &[KeyCode::F1]);
    let mut scene = Scene::new(SceneConfig::default(), World::flat(1));

    // Frame 1: open the menu
    input.press(KeyCode::KeyM);
    huds.update(&mut input);
    scene.input(&mut input, &huds);
    assert!(huds.is_open("menu"));
    assert_eq!(input.context(), CONTEXT_HUDS);

    // Frame 2: gameplay keys are ignored while the menu holds focus
    input.begin_tick();
    input.release(KeyCode::KeyM);
    input.press(KeyCode::KeyW);
    huds.update(&mut input);
    scene.input(&mut input, &huds);
    assert!(!scene.player().indicators().any());
    scene.render(&mut backend, &huds, &viewport()).unwrap();
    assert!(backend.count("quad") > 0);

    // Frame 3: close-all chord releases the focus
    input.begin_tick();
    input.press(KeyCode::ControlLeft);
    input.press(KeyCode::Escape);
    huds.update(&mut input);
    scene.input(&mut input, &huds);
    assert!(huds.opened_huds().is_empty());
    assert!(!huds.need_focus());
    assert_eq!(input.context(), CONTEXT_GENERAL);
}
