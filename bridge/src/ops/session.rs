//! Feeding manifest rounds through a session.

use viewbridge_codegen::pipeline::{FinishContext, Session};
use viewbridge_core::GeneratorTarget;
use viewbridge_manifest::{BridgeOptions, Manifest};

/// Feed every round of `manifest` in ascending order and finish for `target`.
pub fn finish(manifest: &Manifest, options: &BridgeOptions, target: GeneratorTarget) -> FinishContext {
    let mut session = Session::new(options);
    for (round, declarations) in manifest.rounds() {
        let accepted = session.on_round_discovered(declarations);
        tracing::info!(round, accepted, "discovered declarations");
    }
    session.on_finish(target)
}
