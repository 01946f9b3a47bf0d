// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Moves the element at `from` so that it ends up at index `to`.
///
/// This is a stable move: remove then insert. Every other element keeps its
/// relative order. `to` is clamped to the last valid index.
///
/// Returns `false` (and leaves `list` untouched) if `from` is out of bounds
/// or the element is already in place.
///
/// ```
/// use kanban_reorder::move_item;
///
/// let mut v = vec!['a', 'b', 'c', 'd'];
/// assert!(move_item(&mut v, 3, 1));
/// assert_eq!(v, ['a', 'd', 'b', 'c']);
/// ```
pub fn move_item<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= list.len() {
        return false;
    }
    let to = to.min(list.len() - 1);
    if from == to {
        return false;
    }
    let item = list.remove(from);
    list.insert(to, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn moves_forward_and_backward() {
        let mut v = vec![1, 2, 3, 4];
        assert!(move_item(&mut v, 0, 2));
        assert_eq!(v, [2, 3, 1, 4]);

        assert!(move_item(&mut v, 3, 0));
        assert_eq!(v, [4, 2, 3, 1]);
    }

    #[test]
    fn same_index_is_untouched() {
        let mut v = vec![1, 2, 3];
        assert!(!move_item(&mut v, 1, 1));
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn out_of_bounds_source_is_ignored() {
        let mut v = vec![1, 2];
        assert!(!move_item(&mut v, 5, 0));
        assert_eq!(v, [1, 2]);

        let mut empty: Vec<u8> = Vec::new();
        assert!(!move_item(&mut empty, 0, 0));
    }

    #[test]
    fn destination_is_clamped() {
        let mut v = vec![1, 2, 3];
        assert!(move_item(&mut v, 0, 10));
        assert_eq!(v, [2, 3, 1]);
    }
}
