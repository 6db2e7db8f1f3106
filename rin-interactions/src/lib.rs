//! Enumerates noncovalent (and, for `CONTACT_MAP`, generic-distance) interactions between the
//! residues of a structure and assembles them into a labeled graph.

mod aggregator;
mod bond;
mod error;
mod params;
mod pipeline;
mod predicates;
mod realism_filter;

pub use aggregator::PairBondAggregator;
pub use bond::{bond_cmp, Bond, BondKind, GenericLabel};
pub use error::RinError;
pub use params::{CmapType, InteractionType, NetworkPolicy, Params, ParamsBuilder, MAX_LIMIT, MIN_SEQUENCE_SEPARATION};
pub use pipeline::{compute_rin, Connection};
pub use realism_filter::apply_hbond_realism;
