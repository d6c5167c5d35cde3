//! Domain Entities
//!
//! Everything here is request-scoped except the Persona, which is
//! loaded once at startup and shared read-only.
//! - Question: validated user question
//! - Persona: system context and command role framings
//! - Message: platform-neutral view of an incoming chat message
//! - Answer: generated text or a displayable failure

mod answer;
mod message;
mod persona;
mod question;

pub use answer::*;
pub use message::*;
pub use persona::*;
pub use question::*;
