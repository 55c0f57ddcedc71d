//! Keyboard bindings for live parameter editing.
//!
//! Every edit is applied between frames from the window event handler, so a
//! terrain sweep always sees one consistent parameter set.

use log::info;
use rand::Rng;
use winit::keyboard::KeyCode;

use crate::noise::NoiseSource;
use crate::params::{NoiseParameters, SceneParams};
use crate::terrain::TerrainSystem;

const COMPLEXITY_STEP: f64 = 0.01;
const SUN_ANGLE_STEP_DEG: f32 = 5.0;

/// A single live edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    RandomizeSeed,
    RandomizeSettings,
    OctavesUp,
    OctavesDown,
    ComplexityUp,
    ComplexityDown,
    AmplitudeUp,
    AmplitudeDown,
    ScrollSpeedUp,
    ScrollSpeedDown,
    SunForward,
    SunBack,
    RandomizeColor,
    ToggleWireframe,
}

impl ControlAction {
    /// Map a pressed key to its action
    pub fn from_key(key: KeyCode) -> Option<Self> {
        let action = match key {
            KeyCode::KeyR => Self::RandomizeSeed,
            KeyCode::KeyT => Self::RandomizeSettings,
            KeyCode::ArrowUp => Self::OctavesUp,
            KeyCode::ArrowDown => Self::OctavesDown,
            KeyCode::ArrowRight => Self::ComplexityUp,
            KeyCode::ArrowLeft => Self::ComplexityDown,
            KeyCode::PageUp => Self::AmplitudeUp,
            KeyCode::PageDown => Self::AmplitudeDown,
            KeyCode::Equal => Self::ScrollSpeedUp,
            KeyCode::Minus => Self::ScrollSpeedDown,
            KeyCode::BracketRight => Self::SunForward,
            KeyCode::BracketLeft => Self::SunBack,
            KeyCode::KeyC => Self::RandomizeColor,
            KeyCode::KeyW => Self::ToggleWireframe,
            _ => return None,
        };
        Some(action)
    }
}

/// Apply `action` to the live terrain and scene parameters
pub fn apply<N: NoiseSource, R: Rng>(
    action: ControlAction,
    terrain: &mut TerrainSystem<N>,
    scene: &mut SceneParams,
    rng: &mut R,
) {
    match action {
        ControlAction::RandomizeSeed => {
            let seed = rng.gen::<u32>();
            terrain.reseed(seed);
            info!("Noise seed: {}", seed);
        }
        ControlAction::RandomizeColor => {
            scene.color = rng.gen_range(0..=0xffffff);
            info!("Color: {:#08x}", scene.color);
        }
        ControlAction::ToggleWireframe => {
            scene.wireframe = !scene.wireframe;
            info!("Wireframe: {}", scene.wireframe);
        }
        _ => {
            edit_parameters(action, &mut terrain.params, scene, rng);
            let params = &terrain.params;
            info!(
                "Terrain: octaves={} amplitude={:.2} complexity={:.2} scroll_speed={:.2} sun={}deg",
                params.octaves,
                params.base_scale,
                params.complexity,
                params.scroll_speed,
                scene.sun_angle_deg
            );
        }
    }
}

fn edit_parameters<R: Rng>(
    action: ControlAction,
    params: &mut NoiseParameters,
    scene: &mut SceneParams,
    rng: &mut R,
) {
    match action {
        ControlAction::RandomizeSettings => randomize_settings(params, scene, rng),
        ControlAction::OctavesUp => step_octaves(params, 1),
        ControlAction::OctavesDown => step_octaves(params, -1),
        ControlAction::ComplexityUp => step_complexity(params, COMPLEXITY_STEP),
        ControlAction::ComplexityDown => step_complexity(params, -COMPLEXITY_STEP),
        ControlAction::AmplitudeUp => step_amplitude(params, 1.0),
        ControlAction::AmplitudeDown => step_amplitude(params, -1.0),
        ControlAction::ScrollSpeedUp => step_scroll_speed(params, 1.0),
        ControlAction::ScrollSpeedDown => step_scroll_speed(params, -1.0),
        ControlAction::SunForward => step_sun(scene, SUN_ANGLE_STEP_DEG),
        ControlAction::SunBack => step_sun(scene, -SUN_ANGLE_STEP_DEG),
        ControlAction::RandomizeSeed
        | ControlAction::RandomizeColor
        | ControlAction::ToggleWireframe => {}
    }
}

fn randomize_settings<R: Rng>(params: &mut NoiseParameters, scene: &mut SceneParams, rng: &mut R) {
    let (min_oct, max_oct) = NoiseParameters::OCTAVES_RANGE;
    let (min_amp, max_amp) = NoiseParameters::BASE_SCALE_RANGE;
    let (min_speed, max_speed) = NoiseParameters::SCROLL_SPEED_RANGE;

    params.complexity = (rng.gen::<f64>() * 100.0).round() / 100.0;
    params.octaves = rng.gen_range(min_oct..=max_oct);
    params.base_scale = rng.gen_range(min_amp..max_amp);
    params.scroll_speed = rng.gen_range(min_speed..max_speed);
    scene.color = rng.gen_range(0..=0xffffff);
    scene.wireframe = rng.gen_bool(0.5);
}

fn step_octaves(params: &mut NoiseParameters, delta: i32) {
    let (min, max) = NoiseParameters::OCTAVES_RANGE;
    params.octaves = (params.octaves + delta).clamp(min, max);
}

fn step_complexity(params: &mut NoiseParameters, delta: f64) {
    // Snap to the step grid so repeated presses land on exact hundredths
    let stepped = ((params.complexity + delta) / COMPLEXITY_STEP).round() * COMPLEXITY_STEP;
    params.complexity = stepped.clamp(0.0, 1.0);
}

fn step_amplitude(params: &mut NoiseParameters, delta: f64) {
    let (min, max) = NoiseParameters::BASE_SCALE_RANGE;
    params.base_scale = (params.base_scale + delta).clamp(min, max);
}

fn step_scroll_speed(params: &mut NoiseParameters, delta: f64) {
    let (min, max) = NoiseParameters::SCROLL_SPEED_RANGE;
    params.scroll_speed = (params.scroll_speed + delta).clamp(min, max);
}

fn step_sun(scene: &mut SceneParams, delta_deg: f32) {
    let (min, max) = SceneParams::SUN_ANGLE_RANGE;
    scene.sun_angle_deg = (scene.sun_angle_deg + delta_deg).clamp(min, max);
    scene.sun_moved = true;
}
