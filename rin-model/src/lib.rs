//! The residue value model: atoms, aromatic rings, ionic groups and secondary-structure tags,
//! plus the [`Graph`] value the interaction engine populates.
//!
//! One concept per file (`residue_id.rs`, `atom.rs`, `secondary_structure.rs`...); residues own
//! their substructures outright rather than holding indices into a shared structure: a ring or
//! ionic group stores clones of the atoms it was built from, so nothing in this crate needs a
//! lifetime parameter or an arena.

mod atom;
mod error;
mod graph;
mod ionic_group;
mod residue;
mod residue_id;
mod ring;
mod secondary_structure;

pub use atom::Atom;
pub use error::ModelError;
pub use graph::{Edge, Graph, Node, SENTINEL_NUMERIC, SENTINEL_TEXT};
pub use ionic_group::IonicGroup;
pub use residue::{satisfies_minimum_separation, IllformedPolicy, Residue};
pub use residue_id::ResidueId;
pub use ring::Ring;
pub use secondary_structure::{
    resolve_secondary_structure, HelixInterval, SecondaryStructure, SheetInterval,
};

pub use rin_chem::{IonicSign, RingKind};
