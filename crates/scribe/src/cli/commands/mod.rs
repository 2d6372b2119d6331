//! CLI commands

mod generate;
mod render;
mod shared;
mod template;

pub use generate::GenerateCommand;
pub use render::RenderCommand;
pub use shared::ChangelogArgs;
pub use template::TemplateCommand;
