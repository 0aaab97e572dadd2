pub mod renderer;
pub mod screen;

pub use renderer::ui;
