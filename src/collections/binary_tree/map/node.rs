use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::mem;

use derive_more::{Deref, DerefMut};

/// An owning link to a subtree, which is empty when the link is `None`.
#[derive(Deref, DerefMut)]
pub(crate) struct Branch<K, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub key: K,
    pub value: V,
}

impl<K, V> Node<K, V> {
    pub const fn leaf(key: K, value: V) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            key,
            value,
        }
    }

    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K, V> Branch<K, V> {
    pub const fn empty() -> Branch<K, V> {
        Branch(None)
    }

    pub fn first_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.0.as_deref() {
            node = left;
        }
        Some(node.tuple())
    }

    pub fn last_entry(&self) -> Option<(&K, &V)> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.0.as_deref() {
            node = right;
        }
        Some(node.tuple())
    }

    /// Detaches the leftmost node of this subtree, promoting its right child into its place.
    pub fn take_first_entry(&mut self) -> Option<(K, V)> {
        let mut branch = self;
        while branch.0.as_ref().is_some_and(|node| node.left.is_some()) {
            if let Branch(Some(node)) = branch {
                branch = &mut node.left;
            }
        }

        let Node { right, key, value, .. } = *branch.0.take()?;
        *branch = right;
        Some((key, value))
    }

    /// Detaches the rightmost node of this subtree, promoting its left child into its place.
    pub fn take_last_entry(&mut self) -> Option<(K, V)> {
        let mut branch = self;
        while branch.0.as_ref().is_some_and(|node| node.right.is_some()) {
            if let Branch(Some(node)) = branch {
                branch = &mut node.right;
            }
        }

        let Node { left, key, value, .. } = *branch.0.take()?;
        *branch = left;
        Some((key, value))
    }

    /// Removes the node at the top of this branch, keeping the entries below it in order.
    pub fn take_root_entry(&mut self) -> Option<(K, V)> {
        let node = self.0.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            // The in-order successor has no left child, so detaching it is always one of the
            // simple cases. Its entry then takes the place of the removed one.
            let (next_key, next_value) = node.right.take_first_entry()?;
            return Some((
                mem::replace(&mut node.key, next_key),
                mem::replace(&mut node.value, next_value),
            ));
        }

        let Node { left, right, key, value } = *self.0.take()?;
        *self = if left.is_some() { left } else { right };
        Some((key, value))
    }

    /// Returns the height of this subtree, where an empty branch has a depth of 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = Vec::new();
        pending.extend(self.0.as_deref().map(|node| (node, 1)));

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.0.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.0.as_deref().map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// Tears down the subtree one node at a time. Dropping a `Box<Node>` directly recurses once per
    /// level, which a list-shaped tree turns into one frame per entry.
    pub fn dismantle(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.0.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.0.take());
            pending.extend(node.right.0.take());
        }
    }
}

impl<K: Ord, V> Branch<K, V> {
    /// Returns the branch holding `key`, or the empty branch it would be inserted into.
    pub fn locate_mut<Q>(&mut self, key: &Q) -> &mut Branch<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        loop {
            let ordering = match &branch.0 {
                Some(node) => key.cmp(node.key.borrow()),
                None => return branch,
            };
            if ordering.is_eq() {
                return branch;
            }

            if let Branch(Some(node)) = branch {
                branch = if ordering.is_lt() { &mut node.left } else { &mut node.right };
            }
        }
    }

    /// Inserts the pair below this branch. If the key is already present, its value is replaced and
    /// the previous one is returned; the stored key is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let branch = self.locate_mut(&key);
        if let Some(node) = &mut branch.0 {
            return Some(mem::replace(&mut node.value, value));
        }

        branch.0 = Some(Box::new(Node::leaf(key, value)));
        None
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate_mut(key).take_root_entry()
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;
        while let Some(node) = &branch.0 {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => branch = &node.left,
                Ordering::Greater => branch = &node.right,
                Ordering::Equal => return Some(node.tuple()),
            }
        }
        None
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate_mut(key).0.as_mut().map(|node| &mut node.value)
    }
}

impl<K: Clone, V: Clone> Clone for Branch<K, V> {
    /// Copies the subtree node by node, keeping its exact shape.
    fn clone(&self) -> Self {
        let mut root = Branch::empty();
        let mut pending = vec![(self, &mut root)];

        while let Some((source, target)) = pending.pop() {
            if let Some(node) = &source.0 {
                let copy = Node::leaf(node.key.clone(), node.value.clone());
                let copy = target.0.insert(Box::new(copy));
                pending.push((&node.left, &mut copy.left));
                pending.push((&node.right, &mut copy.right));
            }
        }
        root
    }
}

impl<K: Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}: {:?})\n{}",
                indent(&node.left, "┌    "),
                node.key,
                node.value,
                indent(&node.right, "└    "),
            ),
            None => write!(f, "-"),
        }
    }
}

fn indent<K: Debug, V: Debug>(branch: &Branch<K, V>, prefix: &str) -> String {
    format!("{branch:?}")
        .lines()
        .map(|l| format!("{prefix}{l}"))
        .collect::<Vec<_>>()
        .join("\n")
}
