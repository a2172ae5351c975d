pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod page;

// Re-export key types at crate root for convenience
pub use api::animation::Animation;
pub use api::config::{BubbleFieldConfig, DecorConfig, HerbFieldConfig, PageConfig};
pub use core::rng::Rng;
pub use core::surface::{fit_surface, Surface};
pub use components::bubble::Bubble;
pub use components::herb::Herb;
pub use components::pulse::Pulse;
pub use renderer::color::Color;
pub use renderer::paint::{ColorStop, LinearGradient, Paint, RadialGradient};
pub use renderer::recorder::{DrawCommand, RecordingCanvas};
pub use renderer::traits::Canvas2D;
pub use systems::bubble_field::BubbleField;
pub use systems::emblem::Emblem;
pub use systems::herb_field::HerbField;
pub use systems::pulses::PulseOverlay;
pub use page::cards::{hidden_style, revealed_style, should_reveal, CardStyle};
pub use page::header::{active_links, header_scrolled};
pub use page::loader::{LoaderFade, LoaderPhase};
pub use page::speech::{Notice, NoticeLevel, SpeechHelper, SpeechToggle};
pub use page::video::video_markup;
