use crate::alphabets::Alphabet;

pub fn alphabet() -> Alphabet {
    Alphabet::new(&b"ARNDCEQGHILKMFPSTWYVarndceqghilkmfpstwyv"[..])
}

/// Extended alphabet including ambiguity codes, the 'X' placeholder, and '*'.
pub fn iupac_alphabet() -> Alphabet {
    Alphabet::new(b"ABCDEFGHIKLMNPQRSTVWXYZ*abcdefghiklmnpqrstvwxyz")
}
