// Index arithmetic for heaps laid out on a flat array.
//
// Every subtree's root ranks no worse than anything below it. With arity 2
// the indices look like,
//
// ```text
//                           0
//              1                         2
//       3            4            5             6
//   7      8      9     10    11     12     13     14
// 15 16  17 18  19 20  21 22 23 24  25
// ```
//
// The last level will often be incomplete.

/// The parent node
///
/// ```
/// use quest::heap_primitives::index_parent;
/// assert_eq!(index_parent::<2>(1), 0);
/// assert_eq!(index_parent::<2>(2), 0);
/// assert_eq!(index_parent::<2>(3), 1);
/// assert_eq!(index_parent::<2>(6), 2);
/// assert_eq!(index_parent::<2>(25), 12);
/// assert_eq!(index_parent::<4>(8), 1);
/// ```
#[inline(always)]
#[must_use]
pub fn index_parent<const A: usize>(i: usize) -> usize {
    debug_assert!(i != 0, "The root has no parent");
    (i - 1) / A
}

/// The first (left-most) child
///
/// ```
/// use quest::heap_primitives::index_first_child;
/// assert_eq!(index_first_child::<2>(0), 1);
/// assert_eq!(index_first_child::<2>(1), 3);
/// assert_eq!(index_first_child::<2>(11), 23);
/// assert_eq!(index_first_child::<4>(1), 5);
/// ```
#[inline(always)]
#[must_use]
pub fn index_first_child<const A: usize>(i: usize) -> usize {
    (A * i) + 1
}

/// The range of children of `i` that exist in a heap of `len` elements.
///
/// ```
/// use quest::heap_primitives::index_children;
/// assert_eq!(index_children::<2>(0, 3), 1..3);
/// assert_eq!(index_children::<2>(1, 4), 3..4);
/// assert!(index_children::<2>(1, 3).is_empty());
/// ```
#[inline(always)]
#[must_use]
pub fn index_children<const A: usize>(i: usize, len: usize) -> std::ops::Range<usize> {
    let first = index_first_child::<A>(i).min(len);
    first..(first + A).min(len)
}
