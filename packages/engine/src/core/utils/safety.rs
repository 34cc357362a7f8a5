//! Checked-in-debug cell access
//!
//! The generation pass touches every cell nine times per frame, so the hot
//! loops index the cell buffers through `fast!`:
//!
//! - Debug: ordinary indexing, out-of-range panics with a useful message
//! - Release: `get_unchecked`, no bounds check
//!
//! Callers must only pass indices produced by `CellGrid::index` or the
//! wrapped neighbour offsets.
//!
//! ```rust
//! use life_backdrop_engine::fast;
//!
//! let mut cells = vec![0u8; 9];
//! fast!(cells, [4] = 1);
//! assert_eq!(*fast!(cells, [4]), 1);
//! ```

#[macro_export]
macro_rules! fast {
    // Read: fast!(slice, [index])
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

    // Write: fast!(slice, [index] = value)
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
}

#[cfg(test)]
mod tests {
    #[test]
    fn reads_cell_at_index() {
        let cells = vec![0u8, 1, 0, 1];
        assert_eq!(*fast!(cells, [3]), 1);
    }

    #[test]
    fn writes_cell_at_index() {
        let mut cells = vec![0u8; 4];
        fast!(cells, [2] = 1);
        assert_eq!(cells, vec![0, 0, 1, 0]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn out_of_range_panics_in_debug() {
        let cells = vec![0u8; 4];
        let _ = *fast!(cells, [9]);
    }
}
