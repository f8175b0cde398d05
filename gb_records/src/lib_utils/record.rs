/*
    Flatten a parsed GenBank entry into what the gene tools look at
        accession: VERSION, else ACCESSION, else LOCUS name
        organism: first line of the ORGANISM block
        sequence: upper case bases
        features: kind, outer bounds, strand, first /gene and /product values
*/

use gb_io::seq::{Feature, Location, Seq};

/// Feature kinds whose /gene or /product labels take part in naming.
pub const NAMED_FEATURE_KINDS: [&str; 5] = ["gene", "CDS", "mRNA", "rRNA", "tRNA"];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
    /// Parts on both strands, or no located part at all.
    Mixed,
}

/// 0-based, end-exclusive outer bounds of a feature location.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: i64,
    pub end: i64,
    pub strand: Strand,
}

impl Span {
    pub fn new(start: i64, end: i64, strand: Strand) -> Self {
        Self { start, end, strand }
    }

    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneFeature {
    pub kind: String,
    pub span: Option<Span>,
    pub gene: Option<String>,
    pub product: Option<String>,
}

impl GeneFeature {
    pub fn new(kind: &str, span: Option<Span>) -> Self {
        Self {
            kind: kind.to_string(),
            span,
            gene: None,
            product: None,
        }
    }

    pub fn with_gene(mut self, gene: &str) -> Self {
        self.gene = Some(gene.to_string());
        self
    }

    pub fn with_product(mut self, product: &str) -> Self {
        self.product = Some(product.to_string());
        self
    }

    pub fn is_named_kind(&self) -> bool {
        NAMED_FEATURE_KINDS.contains(&self.kind.as_str())
    }

    /// Upper-cased /gene label, falling back to /product. `None` for kinds
    /// outside [`NAMED_FEATURE_KINDS`].
    pub fn label(&self) -> Option<String> {
        if !self.is_named_kind() {
            return None;
        }
        self.gene
            .as_deref()
            .or(self.product.as_deref())
            .map(str::to_uppercase)
    }

    fn from_gb(feature: &Feature) -> Self {
        let span = feature
            .location
            .find_bounds()
            .ok()
            .map(|(start, end)| Span::new(start, end, location_strand(&feature.location)));
        Self {
            kind: feature.kind.to_string(),
            span,
            gene: feature.qualifier_values("gene".into()).next().map(str::to_string),
            product: feature
                .qualifier_values("product".into())
                .next()
                .map(str::to_string),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub accession: String,
    pub organism: Option<String>,
    pub sequence: Vec<u8>,
    pub features: Vec<GeneFeature>,
}

impl Record {
    pub fn new(accession: &str, organism: Option<&str>, sequence: &[u8]) -> Self {
        Self {
            accession: accession.to_string(),
            organism: organism.map(str::to_string),
            sequence: sequence.to_ascii_uppercase(),
            features: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: GeneFeature) -> Self {
        self.features.push(feature);
        self
    }

    /// Named features in file order, paired with their upper-cased label.
    pub fn labelled_features(&self) -> impl Iterator<Item = (&GeneFeature, String)> {
        self.features
            .iter()
            .filter_map(|feature| feature.label().map(|label| (feature, label)))
    }
}

impl From<Seq> for Record {
    fn from(seq: Seq) -> Self {
        let accession = seq
            .version
            .clone()
            .or_else(|| seq.accession.clone())
            .or_else(|| seq.name.clone())
            .unwrap_or_default();
        let organism = seq
            .source
            .as_ref()
            .and_then(|source| source.organism.as_deref())
            .and_then(|organism| organism.lines().next())
            .map(str::trim)
            .filter(|organism| !organism.is_empty())
            .map(str::to_string);
        let features = seq.features.iter().map(GeneFeature::from_gb).collect();
        Self {
            accession,
            organism,
            sequence: seq.seq.to_ascii_uppercase(),
            features,
        }
    }
}

fn collect_strands(location: &Location, reverse: bool, strands: &mut Vec<bool>) {
    match location {
        Location::Range(_, _) | Location::Between(_, _) => strands.push(reverse),
        Location::Complement(inner) => collect_strands(inner, !reverse, strands),
        Location::Join(parts)
        | Location::Order(parts)
        | Location::Bond(parts)
        | Location::OneOf(parts) => {
            for part in parts {
                collect_strands(part, reverse, strands);
            }
        }
        Location::External(_, Some(inner)) => collect_strands(inner, reverse, strands),
        Location::External(_, None) | Location::Gap(_) => {}
    }
}

pub fn location_strand(location: &Location) -> Strand {
    let mut strands = Vec::new();
    collect_strands(location, false, &mut strands);
    if strands.is_empty() {
        Strand::Mixed
    } else if strands.iter().all(|reverse| *reverse) {
        Strand::Reverse
    } else if strands.iter().all(|reverse| !*reverse) {
        Strand::Forward
    } else {
        Strand::Mixed
    }
}
