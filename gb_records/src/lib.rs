/*
    Shared pieces of the GenBank gene tools
        open a GenBank file once, read it as often as needed
        screen records: duplicates, missing or uncertain species, N-only sequences
        fold synonymous gene names found at the same feature location
        keep one representative record per species for a gene key
        cut the chosen gene out as a FASTA record
*/

pub mod lib_utils;

pub use lib_utils::error::GbError;
pub use lib_utils::bases::extract_span;
pub use lib_utils::gene_key::GeneKey;
pub use lib_utils::name_reconciler::{NameReconciler, SynonymTable};
pub use lib_utils::record::{GeneFeature, Record, Span, Strand, NAMED_FEATURE_KINDS};
pub use lib_utils::representative::{Representative, RepresentativeSelector, Verdict};
pub use lib_utils::screen::{species_key, SkipReason, SkipRules};
pub use lib_utils::struct_helper::GenbankBufferHelper;
