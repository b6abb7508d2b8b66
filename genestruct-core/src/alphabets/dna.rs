use crate::alphabets::Alphabet;

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGTacgt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
        assert!(alphabet().is_word(b"gattaca"));
    }

    #[test]
    fn is_no_word() {
        assert!(!alphabet().is_word(b"GAUUACA"));
        assert!(!alphabet().is_word(b"#"));
    }
}
