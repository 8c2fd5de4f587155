use crate::binary_search_tree::node::Node;
use std::cmp;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

/// The outcome of removing one occurrence of a value from a tree.
pub enum Removed {
    /// The occurrence count of an existing node was decremented.
    Occurrence,
    /// The last occurrence was removed and the node was excised.
    Node,
}

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
    }
}

pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    match tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => {
                node.count += 1;
                false
            },
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            true
        },
    }
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            return remove_min(&mut node.left);
        }
    }

    let mut node = tree.take().expect("Expected a non-empty tree.");
    *tree = node.right.take();
    node
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<Removed>
where
    T: Ord,
{
    match tree.take() {
        Some(mut node) => match value.cmp(&node.value) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.count > 1 {
                    node.count -= 1;
                    *tree = Some(node);
                    Some(Removed::Occurrence)
                } else if node.left.is_some() && node.right.is_some() {
                    let successor = remove_min(&mut node.right);
                    let Node {
                        value: successor_value,
                        count: successor_count,
                        ..
                    } = *successor;
                    node.value = successor_value;
                    node.count = successor_count;
                    *tree = Some(node);
                    Some(Removed::Node)
                } else {
                    let unboxed_node = *node;
                    let Node { left, right, .. } = unboxed_node;
                    match (left, right) {
                        (None, right) => *tree = right,
                        (left, None) => *tree = left,
                        _ => unreachable!(),
                    }
                    Some(Removed::Node)
                }
            },
        },
        None => None,
    }
}

pub fn get<'a, T>(tree: &'a Tree<T>, value: &T) -> Option<&'a Node<T>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match value.cmp(&node.value) {
        Ordering::Less => get(&node.left, value),
        Ordering::Greater => get(&node.right, value),
        Ordering::Equal => Some(&**node),
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

pub fn in_order<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        in_order(&node.left, values);
        values.push(&node.value);
        in_order(&node.right, values);
    }
}

pub fn pre_order<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        values.push(&node.value);
        pre_order(&node.left, values);
        pre_order(&node.right, values);
    }
}

pub fn post_order<'a, T>(tree: &'a Tree<T>, values: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        post_order(&node.left, values);
        post_order(&node.right, values);
        values.push(&node.value);
    }
}
