//! Cyclic sequence arithmetic shared by the face-boundary operators.
//!
//! Face boundaries are cyclic: there is no distinguished first vertex, and
//! the edit operators are all phrased as "rotate the boundary so the item of
//! interest sits at the end, then cut". Keeping that arithmetic here keeps
//! the operator code readable.

/// Consecutive circular pairs of `list`, including the wrap-around pair.
/// A single-item list yields no pairs.
pub fn pairs<T: Clone>(list: &[T]) -> Vec<(T, T)> {
    if list.len() < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(list.len());
    for i in 0..list.len() {
        out.push((list[i].clone(), list[(i + 1) % list.len()].clone()));
    }
    out
}

/// First index of `item` in `list`, if present.
pub fn index_of<T: PartialEq>(list: &[T], item: &T) -> Option<usize> {
    list.iter().position(|x| x == item)
}

/// Rotation of `list` that ends with the first occurrence of `item`.
///
/// `rotated_to_item(&[0, 1, 2, 3], &1)` is `[2, 3, 0, 1]`.
pub fn rotated_to_item<T: Clone + PartialEq>(list: &[T], item: &T) -> Option<Vec<T>> {
    let i = index_of(list, item)?;
    let cut = (i + 1) % list.len();
    let mut out = Vec::with_capacity(list.len());
    out.extend_from_slice(&list[cut..]);
    out.extend_from_slice(&list[..cut]);
    Some(out)
}

/// Splits `list` immediately after the first occurrence of `item`. The cut
/// index wraps, so splitting at the last item yields an empty first half.
///
/// `split_at_item(&[0, 1, 2, 3], &1)` is `([0, 1], [2, 3])`.
pub fn split_at_item<T: Clone + PartialEq>(list: &[T], item: &T) -> Option<(Vec<T>, Vec<T>)> {
    let i = index_of(list, item)?;
    let cut = (i + 1) % list.len();
    Some((list[..cut].to_vec(), list[cut..].to_vec()))
}

/// First index at which the circular pair `(a, b)` occurs, if any.
pub fn index_of_pair<T: Clone + PartialEq>(list: &[T], pair: (&T, &T)) -> Option<usize> {
    if list.len() < 2 {
        return None;
    }
    (0..list.len()).find(|&i| &list[i] == pair.0 && &list[(i + 1) % list.len()] == pair.1)
}

/// Rotation of `list` that ends with the circular pair `(a, b)`.
///
/// `rotated_to_pair(&[0, 1, 2, 3], (&1, &2))` is `[3, 0, 1, 2]`.
pub fn rotated_to_pair<T: Clone + PartialEq>(list: &[T], pair: (&T, &T)) -> Option<Vec<T>> {
    let i = index_of_pair(list, pair)?;
    let cut = (i + 2) % list.len();
    let mut out = Vec::with_capacity(list.len());
    out.extend_from_slice(&list[cut..]);
    out.extend_from_slice(&list[..cut]);
    Some(out)
}

/// Splits `list` immediately after the circular pair `(a, b)`. The cut
/// index wraps, so a pair ending at the last element yields an empty first
/// half.
///
/// `split_at_pair(&[0, 1, 2, 3], (&1, &2))` is `([0, 1, 2], [3])`.
pub fn split_at_pair<T: Clone + PartialEq>(
    list: &[T],
    pair: (&T, &T),
) -> Option<(Vec<T>, Vec<T>)> {
    let i = index_of_pair(list, pair)?;
    let cut = (i + 2) % list.len();
    Some((list[..cut].to_vec(), list[cut..].to_vec()))
}

/// The item following the first occurrence of `item`, circularly.
pub fn next_item<T: Clone + PartialEq>(list: &[T], item: &T) -> Option<T> {
    let i = index_of(list, item)?;
    Some(list[(i + 1) % list.len()].clone())
}

/// The item preceding the first occurrence of `item`, circularly.
pub fn previous_item<T: Clone + PartialEq>(list: &[T], item: &T) -> Option<T> {
    let i = index_of(list, item)?;
    Some(list[(i + list.len() - 1) % list.len()].clone())
}
