pub mod delivery;
pub mod document_assembler;
pub mod section_renderer;

pub use delivery::Delivery;
pub use document_assembler::DocumentAssembler;
pub use section_renderer::SectionRenderer;
