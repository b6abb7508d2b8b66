use memchr::{memchr_iter, memmem};

/// Internal "needle" representation.
#[derive(Copy, Clone, Debug)]
pub enum Needle<'a> {
    Bytes(&'a [u8]),
    Byte(u8),
}

pub trait IntoNeedle<'a> {
    fn into_needle(self) -> Needle<'a>;
}

impl<'a> IntoNeedle<'a> for &'a [u8] {
    #[inline]
    fn into_needle(self) -> Needle<'a> {
        Needle::Bytes(self)
    }
}

impl<'a> IntoNeedle<'a> for &'a str {
    #[inline]
    fn into_needle(self) -> Needle<'a> {
        Needle::Bytes(self.as_bytes())
    }
}

impl<'a> IntoNeedle<'a> for u8 {
    #[inline]
    fn into_needle(self) -> Needle<'a> {
        Needle::Byte(self)
    }
}

impl<'a, const N: usize> IntoNeedle<'a> for &'a [u8; N] {
    #[inline]
    fn into_needle(self) -> Needle<'a> {
        Needle::Bytes(self.as_slice())
    }
}

pub fn count(hay: &[u8], needle: Needle<'_>) -> usize {
    match needle {
        Needle::Byte(b) => count_single_byte(hay, b),
        Needle::Bytes(pat) => {
            if pat.is_empty() {
                return hay.len() + 1;
            }
            count_subslice_nonoverlapping(hay, pat)
        }
    }
}

pub fn contains(hay: &[u8], needle: Needle<'_>) -> bool {
    match needle {
        Needle::Byte(b) => memchr::memchr(b, hay).is_some(),
        Needle::Bytes(pat) => {
            if pat.is_empty() {
                return true;
            }
            memmem::find(hay, pat).is_some()
        }
    }
}

pub fn find(hay: &[u8], needle: Needle<'_>, start: usize, end: usize) -> Option<usize> {
    let len = hay.len();
    let start = start.min(len);
    let end = end.min(len);
    if start > end {
        return None;
    }

    match needle {
        Needle::Byte(b) => {
            let window = &hay[start..end];
            memchr::memchr(b, window).map(|i| start + i)
        }
        Needle::Bytes(pat) => {
            if pat.is_empty() {
                return Some(start);
            }
            if pat.len() > end - start {
                return None;
            }
            let window = &hay[start..end];
            memmem::find(window, pat).map(|i| start + i)
        }
    }
}

#[inline]
pub fn count_single_byte(hay: &[u8], b: u8) -> usize {
    memchr_iter(b, hay).count()
}

fn count_subslice_nonoverlapping(hay: &[u8], needle: &[u8]) -> usize {
    debug_assert!(!needle.is_empty());

    if needle.len() == 1 {
        return count_single_byte(hay, needle[0]);
    }

    let finder = memmem::Finder::new(needle);
    let mut count = 0usize;
    let mut pos = 0usize;

    while pos <= hay.len() {
        match finder.find(&hay[pos..]) {
            Some(i) => {
                count += 1;
                pos += i + needle.len();
            }
            None => break,
        }
    }

    count
}
