use std::ops::Deref;

// Block group
//------------------------------------------------------------------------------

/// One row of the block table: `count` blocks of `total` codewords, `data` of which
/// carry message codewords.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BlockGroup {
    pub count: usize,
    pub total: usize,
    pub data: usize,
}

impl BlockGroup {
    pub const fn ecc(&self) -> usize {
        self.total - self.data
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

// Block plan
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BlockPlan {
    groups: [BlockGroup; 2],
}

impl BlockPlan {
    pub fn new(groups: [BlockGroup; 2]) -> Self {
        debug_assert!(!groups[0].is_empty(), "First block group is empty");
        debug_assert!(
            groups[1].is_empty() || groups[0].ecc() == groups[1].ecc(),
            "Ecc length differs across groups: {groups:?}"
        );
        Self { groups }
    }

    /// Non-empty groups in table order.
    pub fn groups(&self) -> impl Iterator<Item = &BlockGroup> {
        self.groups.iter().filter(|g| !g.is_empty())
    }

    pub fn block_count(&self) -> usize {
        self.groups().map(|g| g.count).sum()
    }

    pub fn data_codewords(&self) -> usize {
        self.groups().map(|g| g.count * g.data).sum()
    }

    pub fn total_codewords(&self) -> usize {
        self.groups().map(|g| g.count * g.total).sum()
    }

    pub fn ecc_per_block(&self) -> usize {
        self.groups[0].ecc()
    }

    pub fn ecc_codewords(&self) -> usize {
        self.block_count() * self.ecc_per_block()
    }

    /// Data length of every block, group by group.
    pub fn data_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups().flat_map(|g| std::iter::repeat(g.data).take(g.count))
    }

    pub fn blockify<'a>(&self, data: &'a [u8]) -> Vec<&'a [u8]> {
        assert_eq!(
            data.len(),
            self.data_codewords(),
            "Data len doesn't match total size of blocks"
        );

        let mut blocks = Vec::with_capacity(self.block_count());
        let mut rest = data;
        for len in self.data_lens() {
            let (block, tail) = rest.split_at(len);
            blocks.push(block);
            rest = tail;
        }
        blocks
    }
}

// Interleaving
//------------------------------------------------------------------------------

/// Column-major merge: codeword 0 of every block, then codeword 1 of every block, and
/// so on. Shorter blocks drop out once exhausted.
pub fn interleave_blocks<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
    let mut res = Vec::with_capacity(total_size);
    for i in 0..max_block_size {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}

/// Final codeword sequence: interleaved data codewords followed by interleaved ecc
/// codewords. Both inputs are concatenated block by block in table order.
pub fn interleave(data: &[u8], ecc: &[u8], plan: &BlockPlan) -> Vec<u8> {
    let data_blocks = plan.blockify(data);
    assert_eq!(ecc.len(), plan.ecc_codewords(), "Ecc len doesn't match block plan");
    let ecc_blocks = ecc.chunks(plan.ecc_per_block()).collect::<Vec<_>>();

    let mut res = interleave_blocks(&data_blocks);
    res.extend(interleave_blocks(&ecc_blocks));

    assert_eq!(res.len(), plan.total_codewords(), "Interleaved len doesn't match block plan");
    res
}
