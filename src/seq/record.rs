// A record for sequences, consisting of a name (the FastA header, without the '>') and the raw,
// ungapped residues. Nothing here is FastA-specific, though FastA is the only reader we have.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub header: String,
    pub sequence: String,
}

impl SeqRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        SeqRecord {
            header: header.into(),
            sequence: sequence.into(),
        }
    }
}
