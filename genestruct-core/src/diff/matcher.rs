//! Longest-matching-block diff over byte sequences (Ratcliff/Obershelp),
//! deterministic, without any junk heuristic.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// One edit span: half-open 0-based ranges over the two sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

pub struct SequenceMatcher<'a> {
    a: &'a [u8],
    b: &'a [u8],
    b2j: HashMap<u8, Vec<usize>>,
}

impl<'a> SequenceMatcher<'a> {
    pub fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        let mut b2j: HashMap<u8, Vec<usize>> = HashMap::new();
        for (j, &x) in b.iter().enumerate() {
            b2j.entry(x).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest block of equal elements in `a[alo..ahi]` x `b[blo..bhi]`.
    /// Ties resolve to the earliest start in `a`, then in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let mut besti = alo;
        let mut bestj = blo;
        let mut bestsize = 0usize;

        // j2len[j] = length of the longest match ending at a[i-1], b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut newj2len: HashMap<usize, usize> = HashMap::new();
            if let Some(js) = self.b2j.get(&self.a[i]) {
                for &j in js {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = if j > blo {
                        j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                    } else {
                        1
                    };
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                    newj2len.insert(j, k);
                }
            }
            j2len = newj2len;
        }

        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        MatchBlock {
            a: besti,
            b: bestj,
            size: bestsize,
        }
    }

    /// All matching blocks, sorted by position, adjacent blocks merged, with
    /// a terminating zero-size sentinel at (len(a), len(b)).
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let la = self.a.len();
        let lb = self.b.len();

        let mut queue = vec![(0usize, la, 0usize, lb)];
        let mut raw: Vec<MatchBlock> = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size > 0 {
                if alo < m.a && blo < m.b {
                    queue.push((alo, m.a, blo, m.b));
                }
                if m.a + m.size < ahi && m.b + m.size < bhi {
                    queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
                }
                raw.push(m);
            }
        }
        raw.sort_unstable_by_key(|m| (m.a, m.b));

        let mut blocks: Vec<MatchBlock> = Vec::with_capacity(raw.len() + 1);
        for m in raw {
            if let Some(last) = blocks.last_mut() {
                if last.a + last.size == m.a && last.b + last.size == m.b {
                    last.size += m.size;
                    continue;
                }
            }
            blocks.push(m);
        }
        blocks.push(MatchBlock {
            a: la,
            b: lb,
            size: 0,
        });
        blocks
    }

    /// Equal/replace/delete/insert spans covering both sequences end to end.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let mut ops = Vec::new();
        let mut i = 0usize;
        let mut j = 0usize;

        for m in self.matching_blocks() {
            let tag = if i < m.a && j < m.b {
                Some(OpTag::Replace)
            } else if i < m.a {
                Some(OpTag::Delete)
            } else if j < m.b {
                Some(OpTag::Insert)
            } else {
                None
            };
            if let Some(tag) = tag {
                ops.push(Opcode {
                    tag,
                    a_start: i,
                    a_end: m.a,
                    b_start: j,
                    b_end: m.b,
                });
            }
            i = m.a + m.size;
            j = m.b + m.size;
            if m.size > 0 {
                ops.push(Opcode {
                    tag: OpTag::Equal,
                    a_start: m.a,
                    a_end: i,
                    b_start: m.b,
                    b_end: j,
                });
            }
        }

        ops
    }
}
