use std::collections::HashMap;

use rin_model::ResidueId;

use crate::bond::{bond_cmp, Bond, BondKind};

/// The seven per-kind sub-lists one residue pair's bonds are bucketed into, each kept in
/// best-front order by [`PairBondAggregator::push`].
#[derive(Default, Clone, Debug)]
struct PairBucket {
    hydrogens: Vec<Bond>,
    ss: Vec<Bond>,
    vdws: Vec<Bond>,
    pications: Vec<Bond>,
    pipistacks: Vec<Bond>,
    ionics: Vec<Bond>,
    generics: Vec<Bond>,
}

impl PairBucket {
    fn list_for(&mut self, kind: BondKind) -> &mut Vec<Bond> {
        match kind {
            BondKind::Hydrogen => &mut self.hydrogens,
            BondKind::Ss => &mut self.ss,
            BondKind::VdW => &mut self.vdws,
            BondKind::PiCation => &mut self.pications,
            BondKind::PiPi => &mut self.pipistacks,
            BondKind::Ionic => &mut self.ionics,
            BondKind::Generic => &mut self.generics,
        }
    }

    /// All seven sub-lists in the canonical emission order: hydrogens, ss, vdw, pication,
    /// pipistack, ionic, generic.
    fn all_lists(&self) -> [&Vec<Bond>; 7] {
        [
            &self.hydrogens,
            &self.ss,
            &self.vdws,
            &self.pications,
            &self.pipistacks,
            &self.ionics,
            &self.generics,
        ]
    }
}

fn canonical_pair_key(a: &ResidueId, b: &ResidueId) -> (String, String) {
    let (ka, kb) = (a.to_key(), b.to_key());
    if ka <= kb {
        (ka, kb)
    } else {
        (kb, ka)
    }
}

/// Per residue-pair buckets of candidate bonds, indexed by kind, kept in best-first order.
#[derive(Default)]
pub struct PairBondAggregator {
    buckets: HashMap<(String, String), PairBucket>,
    pair_order: Vec<(String, String)>,
}

impl PairBondAggregator {
    pub fn new() -> PairBondAggregator {
        PairBondAggregator::default()
    }

    /// Inserts `bond` into its pair's sub-list for its kind. If the sub-list is empty or `bond`
    /// is strictly better than its current front, `bond` becomes the new front; otherwise
    /// (including an exact tie) it's appended, so the first-inserted bond wins ties. The rest of
    /// the list is never re-sorted.
    pub fn push(&mut self, bond: Bond) {
        let (a, b) = bond.residue_ids();
        let key = canonical_pair_key(&a, &b);
        if !self.buckets.contains_key(&key) {
            self.pair_order.push(key.clone());
        }
        let bucket = self.buckets.entry(key).or_default();
        let list = bucket.list_for(bond.kind());
        let prepend = match list.first() {
            None => true,
            Some(front) => bond_cmp(&bond, front) == std::cmp::Ordering::Less,
        };
        if prepend {
            list.insert(0, bond);
        } else {
            list.push(bond);
        }
    }

    /// Every bond of every pair, in kind order (hydrogens, ss, vdw, pication, pipistack, ionic,
    /// generic) and, within a kind, insertion order.
    pub fn get_all(&self) -> Vec<Bond> {
        let mut out = Vec::new();
        for key in &self.pair_order {
            let bucket = &self.buckets[key];
            for list in bucket.all_lists() {
                out.extend(list.iter().cloned());
            }
        }
        out
    }

    /// The front (best) bond of each non-empty sub-list, per pair — up to seven per pair.
    pub fn get_multiple(&self) -> Vec<Bond> {
        let mut out = Vec::new();
        for key in &self.pair_order {
            let bucket = &self.buckets[key];
            for list in bucket.all_lists() {
                if let Some(front) = list.first() {
                    out.push(front.clone());
                }
            }
        }
        out
    }

    /// The single globally best bond per pair, across all seven sub-lists.
    pub fn get_one(&self) -> Vec<Bond> {
        let mut out = Vec::new();
        for key in &self.pair_order {
            let bucket = &self.buckets[key];
            let mut best: Option<&Bond> = None;
            for list in bucket.all_lists() {
                if let Some(front) = list.first() {
                    best = match best {
                        None => Some(front),
                        Some(b) if bond_cmp(front, b) == std::cmp::Ordering::Less => Some(front),
                        other => other,
                    };
                }
            }
            if let Some(b) = best {
                out.push(b.clone());
            }
        }
        out
    }

    pub fn pair_count(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rid(seq: i32, name: &str) -> ResidueId {
        ResidueId::new("A", seq, name)
    }

    fn vdw(length: f64, energy: f64) -> Bond {
        Bond::VdW {
            a: rid(1, "ALA"),
            b: rid(10, "GLY"),
            atom_a: "CB".into(),
            atom_b: "CB".into(),
            main_chain_a: false,
            main_chain_b: false,
            length,
            energy,
        }
    }

    #[test]
    fn push_keeps_the_better_bond_at_the_front() {
        let mut agg = PairBondAggregator::new();
        agg.push(vdw(4.0, -0.3));
        agg.push(vdw(3.5, -0.9));
        agg.push(vdw(3.9, -0.1));
        let all = agg.get_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].energy(), Some(-0.9));
    }

    #[test]
    fn an_exact_tie_leaves_the_first_inserted_bond_at_the_front() {
        let first = Bond::VdW {
            a: rid(1, "ALA"),
            b: rid(10, "GLY"),
            atom_a: "CB".into(),
            atom_b: "CB".into(),
            main_chain_a: false,
            main_chain_b: false,
            length: 4.0,
            energy: -0.5,
        };
        let second = Bond::VdW {
            a: rid(1, "ALA"),
            b: rid(10, "GLY"),
            atom_a: "CG".into(),
            atom_b: "CG".into(),
            main_chain_a: false,
            main_chain_b: false,
            length: 4.0,
            energy: -0.5,
        };
        let mut agg = PairBondAggregator::new();
        agg.push(first.clone());
        agg.push(second);
        let all = agg.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], first, "an exact bond_cmp tie must not displace the already-inserted front");
    }

    #[test]
    fn get_multiple_returns_at_most_one_bond_per_kind_per_pair() {
        let mut agg = PairBondAggregator::new();
        agg.push(vdw(4.0, -0.3));
        agg.push(vdw(3.5, -0.9));
        let multi = agg.get_multiple();
        assert_eq!(multi.len(), 1);
        assert_eq!(multi[0].energy(), Some(-0.9));
    }

    #[test]
    fn get_one_is_the_global_best_across_kinds() {
        let mut agg = PairBondAggregator::new();
        agg.push(vdw(4.0, -0.3));
        agg.push(Bond::Ionic {
            positive: rid(1, "ALA"),
            negative: rid(10, "GLY"),
            positive_atoms: "NZ".into(),
            negative_atoms: "OD1:OD2".into(),
            length: 3.0,
            energy: -5.0,
        });
        let one = agg.get_one();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].energy(), Some(-5.0));
    }

    #[test]
    fn different_pairs_are_tracked_independently() {
        let mut agg = PairBondAggregator::new();
        agg.push(vdw(4.0, -0.3));
        agg.push(Bond::VdW {
            a: rid(2, "ALA"),
            b: rid(20, "GLY"),
            atom_a: "CB".into(),
            atom_b: "CB".into(),
            main_chain_a: false,
            main_chain_b: false,
            length: 3.0,
            energy: -1.0,
        });
        assert_eq!(agg.pair_count(), 2);
    }
}
