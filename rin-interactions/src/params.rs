use log::warn;

use rin_model::IllformedPolicy;

use crate::error::RinError;

/// Which family of interactions `compute_rin` enumerates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionType {
    Noncovalent,
    ContactMap,
}

/// Which carbon a contact map is built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmapType {
    Alpha,
    Beta,
}

/// How the aggregator's per-pair buckets are projected into the final bond list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkPolicy {
    All,
    BestPerType,
    BestOne,
}

/// The hard ceiling every configured distance is clamped to.
pub const MAX_LIMIT: f64 = 20.0;
/// The floor `sequence_separation` is clamped up to.
pub const MIN_SEQUENCE_SEPARATION: i32 = 3;

/// The immutable configuration record `compute_rin` runs under. Build one with
/// [`ParamsBuilder`]; every distance is clamped into `[0, MAX_LIMIT]` and
/// `sequence_separation` up to [`MIN_SEQUENCE_SEPARATION`] at construction time, not deep inside
/// the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub interaction_type: InteractionType,
    pub cmap_type: CmapType,
    pub network_policy: NetworkPolicy,
    pub sequence_separation: i32,
    pub query_dist_hbond: f64,
    pub surface_dist_vdw: f64,
    pub query_dist_ionic: f64,
    pub query_dist_pipi: f64,
    pub query_dist_pica: f64,
    pub query_dist_cmap: f64,
    pub hbond_angle: f64,
    pub pication_angle: f64,
    pub pipistack_normal_normal_angle_range: f64,
    pub pipistack_normal_centre_angle_range: f64,
    pub max_pipi_atom_atom_distance: f64,
    pub ion_ion_k: f64,
    /// Constants of the π–π stacking energy curve `a + b*nn + c*nn*cos(1/(nn+10))`. Not pinned
    /// by the upstream reference (its own translations disagree on these three numbers), so
    /// they're exposed here with documented defaults rather than hard-coded.
    pub pipi_a: f64,
    pub pipi_b: f64,
    pub pipi_c: f64,
    pub hbond_realistic: bool,
    pub illformed_policy: IllformedPolicy,
}

impl Default for Params {
    fn default() -> Params {
        ParamsBuilder::new().build()
    }
}

/// Builds a [`Params`], applying defaults for anything not explicitly set and clamping every
/// distance/separation on [`ParamsBuilder::build`].
pub struct ParamsBuilder {
    interaction_type: InteractionType,
    cmap_type: CmapType,
    network_policy: NetworkPolicy,
    sequence_separation: i32,
    query_dist_hbond: f64,
    surface_dist_vdw: f64,
    query_dist_ionic: f64,
    query_dist_pipi: f64,
    query_dist_pica: f64,
    query_dist_cmap: f64,
    hbond_angle: f64,
    pication_angle: f64,
    pipistack_normal_normal_angle_range: f64,
    pipistack_normal_centre_angle_range: f64,
    max_pipi_atom_atom_distance: f64,
    ion_ion_k: f64,
    pipi_a: f64,
    pipi_b: f64,
    pipi_c: f64,
    hbond_realistic: bool,
    illformed_policy: IllformedPolicy,
}

impl ParamsBuilder {
    pub fn new() -> ParamsBuilder {
        ParamsBuilder {
            interaction_type: InteractionType::Noncovalent,
            cmap_type: CmapType::Alpha,
            network_policy: NetworkPolicy::All,
            sequence_separation: MIN_SEQUENCE_SEPARATION,
            query_dist_hbond: 3.5,
            surface_dist_vdw: 0.5,
            query_dist_ionic: 4.0,
            query_dist_pipi: 6.5,
            query_dist_pica: 5.0,
            query_dist_cmap: 6.0,
            hbond_angle: 63.0,
            pication_angle: 45.0,
            pipistack_normal_normal_angle_range: 30.0,
            pipistack_normal_centre_angle_range: 60.0,
            max_pipi_atom_atom_distance: 4.5,
            ion_ion_k: 33.4450992,
            pipi_a: 1.0,
            pipi_b: 0.0,
            pipi_c: 0.0,
            hbond_realistic: true,
            illformed_policy: IllformedPolicy::SkipRes,
        }
    }

    pub fn interaction_type(mut self, v: InteractionType) -> Self {
        self.interaction_type = v;
        self
    }

    pub fn cmap_type(mut self, v: CmapType) -> Self {
        self.cmap_type = v;
        self
    }

    pub fn network_policy(mut self, v: NetworkPolicy) -> Self {
        self.network_policy = v;
        self
    }

    pub fn sequence_separation(mut self, v: i32) -> Self {
        self.sequence_separation = v;
        self
    }

    pub fn query_dist_hbond(mut self, v: f64) -> Self {
        self.query_dist_hbond = v;
        self
    }

    pub fn surface_dist_vdw(mut self, v: f64) -> Self {
        self.surface_dist_vdw = v;
        self
    }

    pub fn query_dist_ionic(mut self, v: f64) -> Self {
        self.query_dist_ionic = v;
        self
    }

    pub fn query_dist_pipi(mut self, v: f64) -> Self {
        self.query_dist_pipi = v;
        self
    }

    pub fn query_dist_pica(mut self, v: f64) -> Self {
        self.query_dist_pica = v;
        self
    }

    pub fn query_dist_cmap(mut self, v: f64) -> Self {
        self.query_dist_cmap = v;
        self
    }

    pub fn hbond_angle(mut self, v: f64) -> Self {
        self.hbond_angle = v;
        self
    }

    pub fn pication_angle(mut self, v: f64) -> Self {
        self.pication_angle = v;
        self
    }

    pub fn hbond_realistic(mut self, v: bool) -> Self {
        self.hbond_realistic = v;
        self
    }

    pub fn illformed_policy(mut self, v: IllformedPolicy) -> Self {
        self.illformed_policy = v;
        self
    }

    /// Clamps every distance to `[0, MAX_LIMIT]` and `sequence_separation` up to its floor,
    /// logging a warning (not an error) for each value adjusted — `compute_rin`'s caller asked
    /// for an out-of-range value, but the pipeline still runs.
    pub fn build(self) -> Params {
        let clamp = |name: &'static str, v: f64| -> f64 {
            let clamped = v.clamp(0.0, MAX_LIMIT);
            if (clamped - v).abs() > f64::EPSILON {
                warn!("{}", RinError::InvalidParameter { name, value: v, clamped });
            }
            clamped
        };
        let sequence_separation = self.sequence_separation.max(MIN_SEQUENCE_SEPARATION);
        Params {
            interaction_type: self.interaction_type,
            cmap_type: self.cmap_type,
            network_policy: self.network_policy,
            sequence_separation,
            query_dist_hbond: clamp("query_dist_hbond", self.query_dist_hbond),
            surface_dist_vdw: clamp("surface_dist_vdw", self.surface_dist_vdw),
            query_dist_ionic: clamp("query_dist_ionic", self.query_dist_ionic),
            query_dist_pipi: clamp("query_dist_pipi", self.query_dist_pipi),
            query_dist_pica: clamp("query_dist_pica", self.query_dist_pica),
            query_dist_cmap: clamp("query_dist_cmap", self.query_dist_cmap),
            hbond_angle: self.hbond_angle,
            pication_angle: self.pication_angle,
            pipistack_normal_normal_angle_range: self.pipistack_normal_normal_angle_range,
            pipistack_normal_centre_angle_range: self.pipistack_normal_centre_angle_range,
            max_pipi_atom_atom_distance: clamp(
                "max_pipi_atom_atom_distance",
                self.max_pipi_atom_atom_distance,
            ),
            ion_ion_k: self.ion_ion_k,
            pipi_a: self.pipi_a,
            pipi_b: self.pipi_b,
            pipi_c: self.pipi_c,
            hbond_realistic: self.hbond_realistic,
            illformed_policy: self.illformed_policy,
        }
    }
}

impl Default for ParamsBuilder {
    fn default() -> Self {
        ParamsBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let p = Params::default();
        assert_eq!(p.sequence_separation, 3);
        assert!((p.query_dist_hbond - 3.5).abs() < 1e-9);
        assert!((p.hbond_angle - 63.0).abs() < 1e-9);
        assert!(p.hbond_realistic);
    }

    #[test]
    fn out_of_range_distance_is_clamped_to_max_limit() {
        let p = ParamsBuilder::new().query_dist_pipi(1000.0).build();
        assert!((p.query_dist_pipi - MAX_LIMIT).abs() < 1e-9);
    }

    #[test]
    fn negative_sequence_separation_is_clamped_up_to_the_floor() {
        let p = ParamsBuilder::new().sequence_separation(-5).build();
        assert_eq!(p.sequence_separation, MIN_SEQUENCE_SEPARATION);
    }
}
