//! Checked-in-debug indexing for the particle hot loops
//!
//! Neighbor lists and cell buckets only ever hold indices produced by the
//! simulation itself, so release builds skip the bounds check:
//!
//! ```rust
//! use fluid_engine::fast;
//!
//! let positions = vec![0.0f32, 1.0, 2.0];
//! let neighbor = 1usize;
//! assert_eq!(*fast!(positions, [neighbor]), 1.0);
//!
//! let mut density = vec![0.0f32; 3];
//! fast!(density, [neighbor] = 0.5);
//! assert_eq!(density[1], 0.5);
//! ```

/// - Debug: plain indexing (panics with the offending index)
/// - Release: `get_unchecked` / `get_unchecked_mut`
#[macro_export]
macro_rules! fast {
    (mut $slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &mut $slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked_mut($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};

    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};
}
