pub mod narrator;
pub mod session;

pub use narrator::{Narration, Narrator};
pub use session::CookSession;
