//! Manifest types and parsing for bridge.toml files.

mod parse;
mod schema;

use std::collections::BTreeMap;

use indexmap::IndexMap;
use viewbridge_core::Platform;
use viewbridge_ir::RawDeclaration;

pub use parse::parse_manifest;

/// The host toolchain's view of one compilation: which platforms participate,
/// the option map, and every resolved declaration carrying the bridge
/// annotation, bucketed by the discovery round that first sees it.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub platforms: Vec<Platform>,
    pub options: IndexMap<String, String>,
    pub rounds: BTreeMap<u32, Vec<RawDeclaration>>,
}

impl Manifest {
    /// Declarations grouped by ascending round, in manifest order within a round.
    pub fn rounds(&self) -> impl Iterator<Item = (u32, &[RawDeclaration])> {
        self.rounds
            .iter()
            .map(|(round, declarations)| (*round, declarations.as_slice()))
    }

    pub fn declaration_count(&self) -> usize {
        self.rounds.values().map(Vec::len).sum()
    }
}
