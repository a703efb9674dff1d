//! Declaration pipeline from raw declarations to the finish context.
//!
//! - [`DeclarationReader`] validates one raw declaration at a time
//! - [`Session`] accumulates accepted declarations across rounds
//! - [`Lint`]s run once over the final set at finish
//! - [`FinishContext`] is the read-only input every generator consumes
//!
//! # Example
//!
//! ```ignore
//! use viewbridge_codegen::pipeline::Session;
//!
//! let mut session = Session::new(&options);
//! session.on_round_discovered(&round_one);
//! session.on_round_discovered(&round_two);
//!
//! let ctx = session.on_finish(target);
//! for diag in &ctx.diagnostics {
//!     eprintln!("{}", diag);
//! }
//! ```

mod diagnostic;
mod lint;
pub mod lints;
mod reader;
mod session;

pub use diagnostic::{Diagnostic, DiagnosticsExt, Severity};
pub use lint::Lint;
pub use reader::{DeclarationReader, MODIFIER_FQN, ReaderOptions};
pub use session::{FinishContext, Session};
