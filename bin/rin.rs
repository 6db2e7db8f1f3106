use std::env;
use std::fs;

use clap::{Parser, ValueEnum};
use log::info;

use rin_interactions::{compute_rin, CmapType, InteractionType, NetworkPolicy, ParamsBuilder};
use rin_model::IllformedPolicy;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
/// Computes a residue interaction network from a PDB structure file.
///
/// say rin -h to see options
struct Args {
    /// input structure file in PDB format
    infile: String,
    /// which family of interactions to enumerate
    #[clap(long, value_enum, default_value_t = InteractionTypeArg::Noncovalent)]
    interaction_type: InteractionTypeArg,
    /// which carbon a CONTACT_MAP is built on
    #[clap(long, value_enum, default_value_t = CmapTypeArg::Alpha)]
    cmap_type: CmapTypeArg,
    /// how the per-pair bond buckets are projected into the final edge list
    #[clap(long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,
    /// how a ring/ionic-group atom-set mismatch is handled during residue construction
    #[clap(long, value_enum, default_value_t = IllformedPolicyArg::SkipRes)]
    illformed_policy: IllformedPolicyArg,
    /// run the greedy valence-constrained hydrogen-bond realism filter
    #[clap(long, default_value_t = true)]
    hbond_realistic: bool,
    /// hydrogen-bond donor-acceptor query distance, in angstrom
    #[clap(long)]
    query_dist_hbond: Option<f64>,
    /// van der Waals surface-gap threshold, in angstrom
    #[clap(long)]
    surface_dist_vdw: Option<f64>,
    /// ionic-pair query distance, in angstrom
    #[clap(long)]
    query_dist_ionic: Option<f64>,
    /// pi-pi stacking query distance, in angstrom
    #[clap(long)]
    query_dist_pipi: Option<f64>,
    /// pi-cation query distance, in angstrom
    #[clap(long)]
    query_dist_pica: Option<f64>,
    /// contact-map query distance, in angstrom
    #[clap(long)]
    query_dist_cmap: Option<f64>,
    /// minimum sequence separation for two residues to be allowed to interact
    #[clap(long)]
    sequence_separation: Option<i32>,
    /// be more verbose and log program actions on the screen
    #[clap(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InteractionTypeArg {
    Noncovalent,
    ContactMap,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CmapTypeArg {
    Alpha,
    Beta,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    All,
    BestPerType,
    BestOne,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IllformedPolicyArg {
    Fail,
    SkipRes,
    KeepRes,
    KeepAll,
}

fn main() {
    let args = Args::parse();
    unsafe {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "info");
        }
        if args.verbose {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let illformed_policy = match args.illformed_policy {
        IllformedPolicyArg::Fail => IllformedPolicy::Fail,
        IllformedPolicyArg::SkipRes => IllformedPolicy::SkipRes,
        IllformedPolicyArg::KeepRes => IllformedPolicy::KeepRes,
        IllformedPolicyArg::KeepAll => IllformedPolicy::KeepAll,
    };

    let mut builder = ParamsBuilder::new()
        .interaction_type(match args.interaction_type {
            InteractionTypeArg::Noncovalent => InteractionType::Noncovalent,
            InteractionTypeArg::ContactMap => InteractionType::ContactMap,
        })
        .cmap_type(match args.cmap_type {
            CmapTypeArg::Alpha => CmapType::Alpha,
            CmapTypeArg::Beta => CmapType::Beta,
        })
        .network_policy(match args.policy {
            PolicyArg::All => NetworkPolicy::All,
            PolicyArg::BestPerType => NetworkPolicy::BestPerType,
            PolicyArg::BestOne => NetworkPolicy::BestOne,
        })
        .illformed_policy(illformed_policy)
        .hbond_realistic(args.hbond_realistic);

    if let Some(v) = args.query_dist_hbond {
        builder = builder.query_dist_hbond(v);
    }
    if let Some(v) = args.surface_dist_vdw {
        builder = builder.surface_dist_vdw(v);
    }
    if let Some(v) = args.query_dist_ionic {
        builder = builder.query_dist_ionic(v);
    }
    if let Some(v) = args.query_dist_pipi {
        builder = builder.query_dist_pipi(v);
    }
    if let Some(v) = args.query_dist_pica {
        builder = builder.query_dist_pica(v);
    }
    if let Some(v) = args.query_dist_cmap {
        builder = builder.query_dist_cmap(v);
    }
    if let Some(v) = args.sequence_separation {
        builder = builder.sequence_separation(v);
    }
    let params = builder.build();

    let text = fs::read_to_string(&args.infile).expect("could not read the input structure file");
    let protein_name = std::path::Path::new(&args.infile)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let (model, connections) = rin_pdbio::read_structure(&text, protein_name, illformed_policy)
        .expect("could not parse the input structure file");
    info!("parsed {} residues, {} disulfide connections", model.residues.len(), connections.len());

    let graph = compute_rin(&model.residues, &connections, &params);
    info!("{} nodes, {} edges", graph.node_count(), graph.edge_count());

    println!(
        "NodeId\tChain\tSeq\tName\tX\tY\tZ\tBfactorCA\tSecondaryStructure\tProtein\tDegree"
    );
    for node in graph.nodes() {
        println!(
            "{}\t{}\t{}\t{}\t{:.3}\t{:.3}\t{:.3}\t{}\t{}\t{}\t{}",
            node.id,
            node.chain_id,
            node.sequence_number,
            node.name,
            node.x,
            node.y,
            node.z,
            node.bfactor_ca.map(|b| format!("{b:.2}")).unwrap_or_else(|| "None".to_string()),
            node.secondary_structure.label(),
            node.protein_name,
            node.degree,
        );
    }

    println!("Source\tTarget\tLength\tEnergy\tLabel\tSourceAtom\tTargetAtom\tAngle\tDonor\tCation\tPositive\tOrientation");
    for edge in graph.edges() {
        println!(
            "{}\t{}\t{:.3}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            edge.source_id,
            edge.target_id,
            edge.length,
            edge.energy_field(),
            edge.interaction_label,
            edge.source_atom,
            edge.target_atom,
            edge.angle_field(),
            edge.donor_field(),
            edge.cation_field(),
            edge.positive_field(),
            edge.orientation_field(),
        );
    }
}
