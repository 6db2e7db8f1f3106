//! The pipeline orchestrator: builds feature vectors over the residue set, runs a
//! k-d tree range query per interaction family, applies the matching predicate, aggregates,
//! projects by policy, optionally runs the hydrogen-bond realism filter, and materializes the
//! graph.

use rin_chem::IonicSign;
use rin_geom::Vec3;
use rin_model::{Graph, Node, Residue, ResidueId};
use rin_spatial::{KdTree, Positioned};

use crate::aggregator::PairBondAggregator;
use crate::bond::GenericLabel;
use crate::params::{CmapType, InteractionType, NetworkPolicy, Params};
use crate::predicates;
use crate::realism_filter::apply_hbond_realism;

/// The maximum van der Waals radius any registered element carries; used only to size the vdw
/// range query (`surface_dist_vdw + 2 * MAX_VDW_RADIUS`), matching the upstream reference's own
/// fixed constant.
const MAX_VDW_RADIUS: f64 = 1.90;

/// A disulfide connection parsed from the structure file, passed straight into the aggregator.
#[derive(Clone, Debug)]
pub struct Connection {
    pub a: ResidueId,
    pub b: ResidueId,
    pub distance: f64,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum RingSlot {
    Primary,
    Secondary,
}

#[derive(Clone)]
struct AtomHandle {
    residue_idx: usize,
    atom_idx: usize,
    position: Vec3,
}

impl Positioned for AtomHandle {
    fn position(&self) -> Vec3 {
        self.position
    }
}

#[derive(Clone)]
struct RingHandle {
    residue_idx: usize,
    slot: RingSlot,
    position: Vec3,
}

impl Positioned for RingHandle {
    fn position(&self) -> Vec3 {
        self.position
    }
}

#[derive(Clone)]
struct GroupHandle {
    residue_idx: usize,
    sign: IonicSign,
    position: Vec3,
}

impl Positioned for GroupHandle {
    fn position(&self) -> Vec3 {
        self.position
    }
}

fn ring_for<'a>(residues: &'a [Residue], h: &RingHandle) -> (&'a Residue, &'a rin_model::Ring) {
    let res = &residues[h.residue_idx];
    let ring = match h.slot {
        RingSlot::Primary => res.primary_ring().expect("ring handle outlives its residue"),
        RingSlot::Secondary => res.secondary_ring().expect("ring handle outlives its residue"),
    };
    (res, ring)
}

fn group_for<'a>(residues: &'a [Residue], h: &GroupHandle) -> (&'a Residue, &'a rin_model::IonicGroup) {
    let res = &residues[h.residue_idx];
    let group = match h.sign {
        IonicSign::Positive => res.positive_group().expect("group handle outlives its residue"),
        IonicSign::Negative => res.negative_group().expect("group handle outlives its residue"),
    };
    (res, group)
}

fn atom_for<'a>(residues: &'a [Residue], h: &AtomHandle) -> (&'a Residue, &'a rin_model::Atom) {
    let res = &residues[h.residue_idx];
    (res, &res.atoms()[h.atom_idx])
}

fn pair_key(a: &ResidueId, b: &ResidueId) -> (String, String) {
    let (ka, kb) = (a.to_key(), b.to_key());
    if ka <= kb {
        (ka, kb)
    } else {
        (kb, ka)
    }
}

/// Computes the residue interaction network for `residues` under `params`. `connections` are
/// the disulfide bridges parsed from the structure file (ignored for `CONTACT_MAP`).
pub fn compute_rin(residues: &[Residue], connections: &[Connection], params: &Params) -> Graph {
    let mut donors = Vec::new();
    let mut acceptors = Vec::new();
    let mut vdw_atoms = Vec::new();
    let mut cations = Vec::new();
    let mut rings = Vec::new();
    let mut pication_rings = Vec::new();
    let mut positive_groups = Vec::new();
    let mut negative_groups = Vec::new();
    let mut alphas = Vec::new();
    let mut betas = Vec::new();

    for (residue_idx, res) in residues.iter().enumerate() {
        for (atom_idx, atom) in res.atoms().iter().enumerate() {
            let h = AtomHandle { residue_idx, atom_idx, position: atom.position };
            if atom.is_donor() {
                donors.push(h.clone());
            }
            if atom.is_acceptor() {
                acceptors.push(h.clone());
            }
            if atom.is_vdw_candidate() {
                vdw_atoms.push(h.clone());
            }
            if atom.is_cation() {
                cations.push(h.clone());
            }
            if atom.name == "CA" {
                alphas.push(h.clone());
            }
            if atom.name == "CB" {
                betas.push(h);
            }
        }
        if let Some(ring) = res.primary_ring() {
            let h = RingHandle { residue_idx, slot: RingSlot::Primary, position: ring.position() };
            rings.push(h.clone());
            if ring.is_pication_candidate() {
                pication_rings.push(h);
            }
        }
        if let Some(ring) = res.secondary_ring() {
            let h = RingHandle { residue_idx, slot: RingSlot::Secondary, position: ring.position() };
            rings.push(h.clone());
            if ring.is_pication_candidate() {
                pication_rings.push(h);
            }
        }
        if let Some(g) = res.positive_group() {
            positive_groups.push(GroupHandle { residue_idx, sign: IonicSign::Positive, position: g.position() });
        }
        if let Some(g) = res.negative_group() {
            negative_groups.push(GroupHandle { residue_idx, sign: IonicSign::Negative, position: g.position() });
        }
    }

    let mut aggregator = PairBondAggregator::new();

    match params.interaction_type {
        InteractionType::Noncovalent => {
            let vdw_tree = KdTree::build(&vdw_atoms);
            let mut vdw_seen = std::collections::HashSet::new();
            let vdw_radius = params.surface_dist_vdw + 2.0 * MAX_VDW_RADIUS;
            for a in &vdw_atoms {
                let (res_a, atom_a) = atom_for(residues, a);
                for b in vdw_tree.range_search(&a.position, vdw_radius) {
                    let (res_b, atom_b) = atom_for(residues, b);
                    if res_a.id == res_b.id {
                        continue;
                    }
                    let key = pair_key(&res_a.id, &res_b.id);
                    if vdw_seen.contains(&key) {
                        continue;
                    }
                    if let Some(bond) = predicates::vdw(res_a, atom_a, res_b, atom_b, params) {
                        vdw_seen.insert(key);
                        aggregator.push(bond);
                    }
                }
            }

            let positive_tree = KdTree::build(&positive_groups);
            for neg in &negative_groups {
                let (neg_res, neg_group) = group_for(residues, neg);
                for pos in positive_tree.range_search(&neg.position, params.query_dist_ionic) {
                    let (pos_res, pos_group) = group_for(residues, pos);
                    if let Some(bond) = predicates::ionic(neg_res, neg_group, pos_res, pos_group, params) {
                        aggregator.push(bond);
                    }
                }
            }

            let donor_tree = KdTree::build(&donors);
            for acc in &acceptors {
                let (acc_res, acc_atom) = atom_for(residues, acc);
                for donor in donor_tree.range_search(&acc.position, params.query_dist_hbond) {
                    let (donor_res, donor_atom) = atom_for(residues, donor);
                    for bond in predicates::hydrogen(acc_res, acc_atom, donor_res, donor_atom, params) {
                        aggregator.push(bond);
                    }
                }
            }

            let pication_ring_tree = KdTree::build(&pication_rings);
            for cation in &cations {
                let (cation_res, cation_atom) = atom_for(residues, cation);
                for ring_h in pication_ring_tree.range_search(&cation.position, params.query_dist_pica) {
                    let (ring_res, ring) = ring_for(residues, ring_h);
                    if let Some(bond) = predicates::pication(ring_res, ring, cation_res, cation_atom, params) {
                        aggregator.push(bond);
                    }
                }
            }

            let ring_tree = KdTree::build(&rings);
            let mut pipi_seen = std::collections::HashSet::new();
            for a in &rings {
                let (res_a, ring_a) = ring_for(residues, a);
                for b in ring_tree.range_search(&a.position, params.query_dist_pipi) {
                    let (res_b, ring_b) = ring_for(residues, b);
                    if res_a.id == res_b.id {
                        continue;
                    }
                    let key = pair_key(&res_a.id, &res_b.id);
                    if pipi_seen.contains(&key) {
                        continue;
                    }
                    if let Some(bond) = predicates::pipi(res_a, ring_a, res_b, ring_b, params) {
                        pipi_seen.insert(key);
                        aggregator.push(bond);
                    }
                }
            }

            for c in connections {
                aggregator.push(predicates::disulfide(&c.a, &c.b, c.distance));
            }
        }
        InteractionType::ContactMap => {
            let (feature, label) = match params.cmap_type {
                CmapType::Alpha => (&alphas, GenericLabel::Ca),
                CmapType::Beta => (&betas, GenericLabel::Cb),
            };
            let tree = KdTree::build(feature);
            let mut seen = std::collections::HashSet::new();
            for a in feature {
                let (res_a, atom_a) = atom_for(residues, a);
                for b in tree.range_search(&a.position, params.query_dist_cmap) {
                    let (res_b, atom_b) = atom_for(residues, b);
                    if res_a.id == res_b.id {
                        continue;
                    }
                    let key = pair_key(&res_a.id, &res_b.id);
                    if seen.contains(&key) {
                        continue;
                    }
                    if let Some(bond) = predicates::generic(res_a, atom_a, res_b, atom_b, label, params) {
                        seen.insert(key);
                        aggregator.push(bond);
                    }
                }
            }
        }
    }

    let mut bonds = match params.network_policy {
        NetworkPolicy::All => aggregator.get_all(),
        NetworkPolicy::BestPerType => aggregator.get_multiple(),
        NetworkPolicy::BestOne => aggregator.get_one(),
    };
    if params.hbond_realistic {
        bonds = apply_hbond_realism(bonds);
    }

    let mut graph = Graph::new();
    for res in residues {
        graph.add_node(node_from_residue(res));
    }
    for bond in bonds {
        graph.add_edge(bond.to_edge());
    }
    graph
}

fn node_from_residue(res: &Residue) -> Node {
    let pos = res.position();
    Node {
        id: res.id.clone(),
        chain_id: res.id.chain_id.clone(),
        sequence_number: res.id.seq,
        name: res.id.name.clone(),
        x: pos.x,
        y: pos.y,
        z: pos.z,
        bfactor_ca: res.alpha().map(|a| a.temp_factor),
        secondary_structure: res.secondary_structure.clone(),
        protein_name: res.protein_name.clone(),
        degree: 0,
    }
}
