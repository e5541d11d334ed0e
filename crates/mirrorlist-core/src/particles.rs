//! Background particle effect: the fixed configuration and the call into the
//! external `particlesJS` library.
//!
//! Field names follow the library's JSON schema. Integer-valued parameters are
//! integers so the serialized form matches the library defaults byte for byte.

use serde::{Deserialize, Serialize};

/// DOM id the effect attaches to.
pub const PARTICLES_ELEMENT_ID: &str = "particles";

/// Default script URL of the external library. The server's `particles_src`
/// setting points this at a self-hosted copy instead.
pub const LIBRARY_SRC: &str = "https://cdn.jsdelivr.net/npm/particles.js@2.0.0/particles.min.js";

const WHITE: &str = "#ffffff";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticlesConfig {
    pub particles: Particles,
    pub interactivity: Interactivity,
    pub retina_detect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particles {
    pub number: Number,
    pub color: Color,
    pub shape: Shape,
    pub opacity: Opacity,
    pub size: Size,
    pub line_linked: LineLinked,
    #[serde(rename = "move")]
    pub movement: Movement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Number {
    pub value: u32,
    pub density: Density,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Density {
    pub enable: bool,
    pub value_area: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    Edge,
    Triangle,
    Polygon,
    Star,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: ShapeType,
    pub stroke: Stroke,
    pub polygon: Polygon,
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub nb_sides: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opacity {
    pub value: f64,
    pub random: bool,
    pub anim: OpacityAnim,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpacityAnim {
    pub enable: bool,
    pub speed: u32,
    pub opacity_min: f64,
    pub sync: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub value: u32,
    pub random: bool,
    pub anim: SizeAnim,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeAnim {
    pub enable: bool,
    pub speed: u32,
    pub size_min: f64,
    pub sync: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLinked {
    pub enable: bool,
    pub distance: u32,
    pub color: String,
    pub opacity: f64,
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    None,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutMode {
    Out,
    Bounce,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub enable: bool,
    pub speed: u32,
    pub direction: Direction,
    pub random: bool,
    pub straight: bool,
    pub out_mode: OutMode,
    pub bounce: bool,
    pub attract: Attract,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attract {
    pub enable: bool,
    #[serde(rename = "rotateX")]
    pub rotate_x: u32,
    #[serde(rename = "rotateY")]
    pub rotate_y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectOn {
    Canvas,
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractMode {
    Grab,
    Bubble,
    Repulse,
    Push,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interactivity {
    pub detect_on: DetectOn,
    pub events: Events,
    pub modes: Modes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Events {
    pub onhover: EventBinding,
    pub onclick: EventBinding,
    pub resize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBinding {
    pub enable: bool,
    pub mode: InteractMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modes {
    pub grab: Grab,
    pub bubble: Bubble,
    pub repulse: Repulse,
    pub push: ParticleCount,
    pub remove: ParticleCount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grab {
    pub distance: u32,
    pub line_linked: GrabLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrabLine {
    pub opacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub distance: u32,
    pub size: u32,
    pub duration: u32,
    pub opacity: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repulse {
    pub distance: u32,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleCount {
    pub particles_nb: u32,
}

impl ParticlesConfig {
    /// The release page background: 256 white linked particles that flee the
    /// pointer and multiply on click.
    pub fn background() -> Self {
        Self {
            particles: Particles {
                number: Number {
                    value: 256,
                    density: Density {
                        enable: true,
                        value_area: 974,
                    },
                },
                color: Color {
                    value: WHITE.to_string(),
                },
                shape: Shape {
                    kind: ShapeType::Circle,
                    stroke: Stroke {
                        width: 0,
                        color: "#000000".to_string(),
                    },
                    polygon: Polygon { nb_sides: 5 },
                    image: Image {
                        src: "img/github.svg".to_string(),
                        width: 100,
                        height: 100,
                    },
                },
                opacity: Opacity {
                    value: 0.5,
                    random: false,
                    anim: OpacityAnim {
                        enable: false,
                        speed: 1,
                        opacity_min: 0.1,
                        sync: false,
                    },
                },
                size: Size {
                    value: 3,
                    random: true,
                    anim: SizeAnim {
                        enable: false,
                        speed: 40,
                        size_min: 0.1,
                        sync: false,
                    },
                },
                line_linked: LineLinked {
                    enable: true,
                    distance: 150,
                    color: WHITE.to_string(),
                    opacity: 0.4,
                    width: 1,
                },
                movement: Movement {
                    enable: true,
                    speed: 6,
                    direction: Direction::None,
                    random: false,
                    straight: false,
                    out_mode: OutMode::Out,
                    bounce: false,
                    attract: Attract {
                        enable: false,
                        rotate_x: 600,
                        rotate_y: 1200,
                    },
                },
            },
            interactivity: Interactivity {
                detect_on: DetectOn::Canvas,
                events: Events {
                    onhover: EventBinding {
                        enable: true,
                        mode: InteractMode::Repulse,
                    },
                    onclick: EventBinding {
                        enable: true,
                        mode: InteractMode::Push,
                    },
                    resize: true,
                },
                modes: Modes {
                    grab: Grab {
                        distance: 400,
                        line_linked: GrabLine { opacity: 1 },
                    },
                    bubble: Bubble {
                        distance: 400,
                        size: 40,
                        duration: 2,
                        opacity: 8,
                        speed: 3,
                    },
                    repulse: Repulse {
                        distance: 200,
                        duration: 0.4,
                    },
                    push: ParticleCount { particles_nb: 4 },
                    remove: ParticleCount { particles_nb: 2 },
                },
            },
            retina_detect: true,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Entry point of the external effect library, addressed by element id.
/// Nothing is returned; failures inside the library are not observed.
pub trait ParticleRenderer {
    fn render(&mut self, element_id: &str, config: &ParticlesConfig);
}

/// `particlesJS("{id}", {config});`
pub fn bootstrap_script(element_id: &str, config: &ParticlesConfig) -> serde_json::Result<String> {
    let id = serde_json::to_string(element_id)?;
    let json = serde_json::to_string(config)?;
    Ok(format!("particlesJS({}, {});", id, json))
}

/// Renders the library call as inline script text for the page document.
#[derive(Debug, Default)]
pub struct ScriptRenderer {
    scripts: Vec<String>,
}

impl ScriptRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }
}

impl ParticleRenderer for ScriptRenderer {
    fn render(&mut self, element_id: &str, config: &ParticlesConfig) {
        match bootstrap_script(element_id, config) {
            Ok(script) => self.scripts.push(script),
            Err(e) => tracing::warn!(error = %e, "particle config not serializable; background disabled"),
        }
    }
}
