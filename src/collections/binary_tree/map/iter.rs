use std::iter::FusedIterator;
use std::mem;

use super::{BinaryTreeMap, Branch, Node};

impl<K, V> IntoIterator for BinaryTreeMap<K, V> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            len: mem::take(&mut self.len),
        };
        iter.descend(mem::replace(&mut self.root, Branch::empty()));
        iter
    }
}

/// An owned iterator over the entries of a [`BinaryTreeMap`], in ascending key order.
pub struct IntoIter<K, V> {
    pub(crate) stack: Vec<Box<Node<K, V>>>,
    pub(crate) len: usize,
}

impl<K, V> IntoIter<K, V> {
    fn descend(&mut self, mut branch: Branch<K, V>) {
        while let Some(mut node) = branch.0.take() {
            branch = mem::replace(&mut node.left, Branch::empty());
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let Node { right, key, value, .. } = *node;
        self.descend(right);
        self.len -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        for mut node in self.stack.drain(..) {
            node.right.dismantle();
        }
    }
}

impl<'a, K, V> IntoIterator for &'a BinaryTreeMap<K, V> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            stack: Vec::new(),
            len: self.len,
        };
        iter.descend(&self.root);
        iter
    }
}

/// A borrowed iterator over the entries of a [`BinaryTreeMap`], in ascending key order.
pub struct Iter<'a, K, V> {
    pub(crate) stack: Vec<&'a Node<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn descend(&mut self, mut branch: &'a Branch<K, V>) {
        while let Some(node) = branch.0.as_deref() {
            self.stack.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend(&node.right);
        self.len -= 1;
        Some(node.tuple())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
            len: self.len,
        }
    }
}

impl<'a, K, V> IntoIterator for &'a mut BinaryTreeMap<K, V> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = IterMut {
            stack: Vec::new(),
            len: self.len,
        };
        iter.descend(&mut self.root);
        iter
    }
}

/// A borrowed iterator over the entries of a [`BinaryTreeMap`], with mutable access to the values.
/// Keys are only ever handed out as shared references, as changing them would break the ordering.
pub struct IterMut<'a, K, V> {
    // Each node is split into its key, value and right branch as it is reached, so that the
    // borrows handed out never overlap with the ones still held.
    pub(crate) stack: Vec<(&'a K, &'a mut V, &'a mut Branch<K, V>)>,
    pub(crate) len: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    fn descend(&mut self, mut branch: &'a mut Branch<K, V>) {
        while let Some(node) = branch.0.as_deref_mut() {
            let Node { left, right, key, value } = node;
            self.stack.push((&*key, value, right));
            branch = left;
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let (key, value, right) = self.stack.pop()?;
        self.descend(right);
        self.len -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> {}

/// An owned iterator over the keys of a [`BinaryTreeMap`], in ascending order.
pub struct IntoKeys<K, V>(pub(crate) IntoIter<K, V>);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {}

impl<K, V> FusedIterator for IntoKeys<K, V> {}

/// A borrowed iterator over the keys of a [`BinaryTreeMap`], in ascending order.
pub struct Keys<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}

/// An owned iterator over the values of a [`BinaryTreeMap`], in ascending key order.
pub struct IntoValues<K, V>(pub(crate) IntoIter<K, V>);

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoValues<K, V> {}

impl<K, V> FusedIterator for IntoValues<K, V> {}

/// A borrowed iterator over the values of a [`BinaryTreeMap`], in ascending key order.
pub struct Values<'a, K, V>(pub(crate) Iter<'a, K, V>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}

pub struct ValuesMut<'a, K, V>(pub(crate) IterMut<'a, K, V>);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, V> ExactSizeIterator for ValuesMut<'a, K, V> {}

impl<'a, K, V> FusedIterator for ValuesMut<'a, K, V> {}
