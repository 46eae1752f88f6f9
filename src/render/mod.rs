//! Rendering: from doc trees to flattened text.
//!
//! - [`Renderer`]: Walks a module's tree, substituting links and includes
//! - [`IncludeStack`]: Detects circular module inclusion
//! - [`LinkFormatter`]: Destination strings and link markup
//!
//! ```text
//! render(A)
//!   enter A
//!   Text     → buffer
//!   Link T   → LinkFormatter::type_link → compose → buffer
//!   Link B   → render(B)   (B resolves with its own imports)
//!   include s → render(A.s)
//!   leave A
//! ```

mod include_stack;
mod links;
mod renderer;

pub use include_stack::IncludeStack;
pub use links::{JavadocLinks, LinkFormatter};
pub use renderer::Renderer;
