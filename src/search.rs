//! Point/rectangle search: an eager `Vec` form and a short-circuiting
//! predicate form, both stack-based (never recursing through the native
//! call stack).

use crate::entry::Entry;
use crate::geom::Mbr;
use crate::node::Node;
use smallvec::SmallVec;

/// The traversal work stack. Inline-capacity `SmallVec` rather than a plain
/// `Vec`: STR trees are shallow and wide, so the frontier at any point in
/// the traversal rarely exceeds a handful of siblings, and this keeps the
/// hot search paths allocation-free in the common case.
type Stack<'a, T> = SmallVec<[&'a Node<T>; 32]>;

/// A restartable, lazy cursor over every entry in a tree, in traversal
/// order. This is the lazy counterpart to `Tree::entries()`'s eager `Vec`.
pub struct EntriesIter<'a, T> {
    stack: Stack<'a, T>,
}

impl<'a, T> EntriesIter<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        let mut stack = Stack::new();
        stack.push(root);
        EntriesIter { stack }
    }
}

impl<'a, T> Iterator for EntriesIter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(entry) => return Some(entry),
                Node::Branch(branch) => self.stack.extend(branch.children.iter()),
            }
        }
        None
    }
}

/// Visits every entry whose MBR contains `(x, y)`, stopping as soon as
/// `visitor` returns `true`.
pub(crate) fn search_point<'a, T>(
    root: &'a Node<T>,
    x: f32,
    y: f32,
    mut visitor: impl FnMut(&'a Entry<T>) -> bool,
) {
    search_with(root, |mbr| mbr.contains_point(x, y), &mut visitor)
}

/// Visits every entry whose MBR intersects `rect`, stopping as soon as
/// `visitor` returns `true`.
pub(crate) fn search_rect<'a, T>(
    root: &'a Node<T>,
    rect: &Mbr,
    mut visitor: impl FnMut(&'a Entry<T>) -> bool,
) {
    search_with(root, |mbr| mbr.intersects(rect), &mut visitor)
}

fn search_with<'a, T>(
    root: &'a Node<T>,
    matches: impl Fn(&Mbr) -> bool,
    visitor: &mut impl FnMut(&'a Entry<T>) -> bool,
) {
    let mut stack: Stack<'a, T> = Stack::new();
    if matches(root.mbr()) {
        stack.push(root);
    }
    while let Some(node) = stack.pop() {
        match node {
            Node::Leaf(entry) => {
                if visitor(entry) {
                    return;
                }
            }
            Node::Branch(branch) => {
                for child in &branch.children {
                    if matches(child.mbr()) {
                        stack.push(child);
                    }
                }
            }
        }
    }
}

/// Eagerly collects every entry whose MBR contains `(x, y)`.
pub(crate) fn search_all_point<'a, T>(root: &'a Node<T>, x: f32, y: f32) -> Vec<&'a Entry<T>> {
    let mut result = Vec::new();
    search_point(root, x, y, |entry| {
        result.push(entry);
        false
    });
    result
}

/// Eagerly collects every entry whose MBR intersects `rect`.
pub(crate) fn search_all_rect<'a, T>(root: &'a Node<T>, rect: &Mbr) -> Vec<&'a Entry<T>> {
    let mut result = Vec::new();
    search_rect(root, rect, |entry| {
        result.push(entry);
        false
    });
    result
}
