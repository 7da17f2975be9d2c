pub mod navigator;
pub mod scroll_gate;
pub mod slider;
pub mod swipe;
pub mod types;


pub use navigator::SectionNavigator;
pub use scroll_gate::ScrollGate;
pub use slider::WorkSlider;
pub use swipe::SwipeClassifier;
pub use types::*;
