use crate::avl_tree::node::Node;
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
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn rotate_left_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = Some(rotate_left(child));
    rotate_right(node)
}

fn rotate_right_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = Some(rotate_right(child));
    rotate_left(node)
}

fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        let double = match node.left {
            Some(ref child) => child.balance() < 0,
            None => unreachable!(),
        };
        node = if double {
            rotate_left_right(node)
        } else {
            rotate_right(node)
        };
    } else if node.balance() < -1 {
        let double = match node.right {
            Some(ref child) => child.balance() > 0,
            None => unreachable!(),
        };
        node = if double {
            rotate_right_left(node)
        } else {
            rotate_left(node)
        };
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let ret = match tree {
        Some(ref mut node) if node.left.is_some() => Some(remove_min(&mut node.left)),
        _ => None,
    };

    match ret {
        Some(min_node) => {
            balance(tree);
            min_node
        },
        None => {
            let mut node = tree.take().expect("Expected a non-empty tree.");
            *tree = node.right.take();
            node
        },
    }
}

pub fn insert<T>(tree: &mut Tree<T>, value: T) -> bool
where
    T: Ord,
{
    let created = match tree {
        Some(ref mut node) => match value.cmp(&node.value) {
            Ordering::Less => insert(&mut node.left, value),
            Ordering::Greater => insert(&mut node.right, value),
            Ordering::Equal => {
                node.count += 1;
                return false;
            },
        },
        None => {
            *tree = Some(Box::new(Node::new(value)));
            return true;
        },
    };

    balance(tree);
    created
}

pub fn remove<T>(tree: &mut Tree<T>, value: &T) -> Option<Removed>
where
    T: Ord,
{
    let ret = match tree.take() {
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
        None => return None,
    };

    balance(tree);
    ret
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

pub fn is_balanced<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            node.balance().abs() <= 1 && is_balanced(&node.left) && is_balanced(&node.right)
        },
    }
}
