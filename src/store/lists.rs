// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Arena-backed circular doubly-linked ranking lists for one side.
//!
//! Every owner gets a dummy head node followed by one node per member of the
//! other universe, all stored in a single `Vec`. Links are `u32` indices into
//! that vector. A reverse lookup table maps `(owner, entry)` to its node, so an
//! entry can be unlinked in O(1) without scanning.
//!
//! Unlinking leaves the removed node's own `prev`/`next` untouched (Knuth's
//! dancing links), and nothing ever relinks it: lists only shrink.

use crate::person::Person;
use std::marker::PhantomData;

/// Sentinel value stored in head nodes.
const NO_ENTRY: u16 = u16::MAX;

#[derive(Debug, Clone, Copy)]
struct Node {
    prev: u32,
    next: u32,
    /// Index of the entry this node stands for (`NO_ENTRY` for heads).
    entry: u16,
}

#[derive(Debug, Clone, Copy)]
struct ListHead {
    /// The dummy head node.
    head: u32,
    /// Least-preferred live node (equal to `head` when the list is empty).
    last: u32,
    /// Number of live entries.
    count: u32,
}

/// Ranking lists of every `O` over entries of type `O::Partner`.
#[derive(Debug, Clone)]
pub struct RankingLists<O: Person> {
    size: usize,
    nodes: Vec<Node>,
    heads: Vec<ListHead>,
    /// `lookup[owner * size + entry]` is the node of `entry` in `owner`'s list.
    lookup: Vec<u32>,
    _owner: PhantomData<O>,
}

impl<O: Person> RankingLists<O> {
    /// Build one list per row, in row order.
    ///
    /// Each row must be a permutation of the partner universe; callers obtain
    /// rows from a validated `PreferenceTable`.
    pub fn new(rows: &[&[O::Partner]]) -> Self {
        let size = rows.len();
        let mut nodes = Vec::with_capacity(size * (size + 1));
        let mut heads = Vec::with_capacity(size);
        let mut lookup = vec![0u32; size * size];

        for (owner, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), size, "row {} is not complete", owner);
            let head = nodes.len() as u32;
            nodes.push(Node {
                prev: head,
                next: head + 1,
                entry: NO_ENTRY,
            });
            for (position, entry) in row.iter().enumerate() {
                let id = head + 1 + position as u32;
                lookup[owner * size + entry.index()] = id;
                nodes.push(Node {
                    prev: id - 1,
                    next: id + 1,
                    entry: entry.index() as u16,
                });
            }
            let last = nodes.len() as u32 - 1;
            // The last node points back to the dummy head.
            nodes[last as usize].next = head;
            heads.push(ListHead {
                head,
                last,
                count: row.len() as u32,
            });
        }

        Self {
            size,
            nodes,
            heads,
            lookup,
            _owner: PhantomData,
        }
    }

    /// Number of owners (and of entries per full list).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of live entries in `owner`'s list.
    #[inline]
    pub fn count(&self, owner: O) -> usize {
        self.heads[owner.index()].count as usize
    }

    /// Most preferred live entry.
    #[inline]
    pub fn first(&self, owner: O) -> Option<O::Partner> {
        let head = self.heads[owner.index()].head;
        self.entry_at(self.nodes[head as usize].next)
    }

    /// Second most preferred live entry.
    #[inline]
    pub fn second(&self, owner: O) -> Option<O::Partner> {
        let head = self.heads[owner.index()].head;
        let first = self.nodes[head as usize].next;
        if first == head {
            return None;
        }
        self.entry_at(self.nodes[first as usize].next)
    }

    /// Least preferred live entry.
    #[inline]
    pub fn last(&self, owner: O) -> Option<O::Partner> {
        self.entry_at(self.heads[owner.index()].last)
    }

    /// True if `entry` is still in `owner`'s list.
    pub fn contains(&self, owner: O, entry: O::Partner) -> bool {
        let id = self.lookup[owner.index() * self.size + entry.index()];
        let node = self.nodes[id as usize];
        self.nodes[node.prev as usize].next == id
    }

    /// Live entries of `owner`'s list, most preferred first.
    pub fn iter(&self, owner: O) -> ListIter<'_, O> {
        let head = self.heads[owner.index()].head;
        ListIter {
            lists: self,
            head,
            cursor: self.nodes[head as usize].next,
        }
    }

    /// Unlink `entry` from `owner`'s list in O(1).
    ///
    /// The entry must currently be in the list.
    pub(crate) fn unlink(&mut self, owner: O, entry: O::Partner) {
        let id = self.lookup[owner.index() * self.size + entry.index()];
        debug_assert!(
            self.contains(owner, entry),
            "{:?} already removed from list of {:?}",
            entry,
            owner
        );

        let Node { prev, next, .. } = self.nodes[id as usize];
        let list = &mut self.heads[owner.index()];
        list.count -= 1;
        self.nodes[prev as usize].next = next;
        if next != list.head {
            self.nodes[next as usize].prev = prev;
        } else {
            list.last = prev;
        }
    }

    fn entry_at(&self, id: u32) -> Option<O::Partner> {
        match self.nodes[id as usize].entry {
            NO_ENTRY => None,
            entry => Some(O::Partner::new(entry as usize)),
        }
    }
}

/// Iterator over the live entries of one list.
pub struct ListIter<'a, O: Person> {
    lists: &'a RankingLists<O>,
    head: u32,
    cursor: u32,
}

impl<O: Person> Iterator for ListIter<'_, O> {
    type Item = O::Partner;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.head {
            return None;
        }
        let node = self.lists.nodes[self.cursor as usize];
        self.cursor = node.next;
        Some(O::Partner::new(node.entry as usize))
    }
}
